use super::Error;

/// Error when structural type information is absent.
///
/// This occurs when:
/// - A container type declares no value type
/// - A schema directive is missing a required argument
#[derive(Debug)]
pub(super) struct MissingTypeInfo {
    message: Box<str>,
}

impl std::error::Error for MissingTypeInfo {}

impl core::fmt::Display for MissingTypeInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "missing type information: {}", self.message)
    }
}

impl Error {
    pub fn missing_type_info(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingTypeInfo(MissingTypeInfo {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if the root cause is a missing type information error.
    pub fn is_missing_type_info(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::MissingTypeInfo(_))
    }
}
