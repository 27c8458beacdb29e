use super::Error;

/// Error when two entity sources derive the same class name.
#[derive(Debug)]
pub(super) struct NameCollision {
    class_name: Box<str>,
    owner: Box<str>,
}

impl std::error::Error for NameCollision {}

impl core::fmt::Display for NameCollision {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "name collision: entity class `{}` is already defined by a {}",
            self.class_name, self.owner
        )
    }
}

impl Error {
    /// Creates a name collision error. `owner` describes where the first
    /// definition came from, e.g. "system entity".
    pub fn name_collision(class_name: impl Into<String>, owner: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NameCollision(NameCollision {
            class_name: class_name.into().into(),
            owner: owner.into().into(),
        }))
    }

    /// Returns `true` if the root cause is a name collision error.
    pub fn is_name_collision(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::NameCollision(_))
    }
}
