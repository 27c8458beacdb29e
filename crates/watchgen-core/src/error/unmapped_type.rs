use super::Error;

/// The mapping table a type lookup failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeStage {
    /// Contract source type to intermediate query type.
    Source,

    /// Query type to target-language type.
    Query,

    /// Target-language type to persisted storage type.
    Target,
}

/// Error when a type has no entry in one of the mapping tables.
///
/// The mapping tables are total over a closed vocabulary, so hitting this
/// means the input declared a type the generator does not know about.
#[derive(Debug)]
pub(super) struct UnmappedType {
    stage: TypeStage,
    name: Box<str>,
}

impl std::error::Error for UnmappedType {}

impl core::fmt::Display for UnmappedType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let (to, from) = match self.stage {
            TypeStage::Source => ("query", "source"),
            TypeStage::Query => ("target", "query"),
            TypeStage::Target => ("storage", "target"),
        };
        write!(
            f,
            "unmapped type: no {to} type for {from} type `{}`",
            self.name
        )
    }
}

impl Error {
    /// Creates an unmapped type error for the given mapping stage.
    pub fn unmapped_type(stage: TypeStage, name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnmappedType(UnmappedType {
            stage,
            name: name.into().into(),
        }))
    }

    /// Returns `true` if the root cause is an unmapped type error.
    pub fn is_unmapped_type(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::UnmappedType(_))
    }
}
