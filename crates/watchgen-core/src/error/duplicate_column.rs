use super::Error;

/// Error when an entity would get two columns of the same name.
#[derive(Debug)]
pub(super) struct DuplicateColumn {
    name: Box<str>,
}

impl std::error::Error for DuplicateColumn {}

impl core::fmt::Display for DuplicateColumn {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "duplicate column: `{}` is already defined", self.name)
    }
}

impl Error {
    pub fn duplicate_column(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DuplicateColumn(DuplicateColumn {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if the root cause is a duplicate column error.
    pub fn is_duplicate_column(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::DuplicateColumn(_))
    }
}
