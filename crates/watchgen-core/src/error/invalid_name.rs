use super::Error;

/// Error when an identifier cannot be turned into entity/accessor names.
#[derive(Debug)]
pub(super) struct InvalidName {
    name: Box<str>,
}

impl std::error::Error for InvalidName {}

impl core::fmt::Display for InvalidName {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid name: `{}` cannot derive an entity name", self.name)
    }
}

impl Error {
    pub fn invalid_name(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidName(InvalidName {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if the root cause is an invalid name error.
    pub fn is_invalid_name(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::InvalidName(_))
    }
}
