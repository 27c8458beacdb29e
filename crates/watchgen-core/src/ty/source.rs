use crate::{Error, Result};

use serde::Deserialize;
use std::fmt;

/// A type as declared by the contract interface.
///
/// Only the three shapes the generator understands are representable, so
/// walking a declaration is an exhaustive match rather than probing for
/// fields that may or may not be there.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Type {
    /// `uint256`, `address`, `bytes32`, ...
    Elementary { name: String },

    /// `T[]` or `T[n]`
    Array {
        base: Box<Type>,

        #[serde(default)]
        length: Option<u64>,
    },

    /// A mapping from a key type to a value type. The value type is optional
    /// because the interface parser may not have been able to resolve it.
    Container {
        key: Box<Type>,

        #[serde(default)]
        value: Option<Box<Type>>,
    },
}

/// The element a declaration boils down to once containers and arrays are
/// peeled off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    /// Elementary type name
    pub name: &'a str,

    /// True if any array dimension was stripped on the way down
    pub array: bool,
}

impl Type {
    pub fn elementary(name: impl Into<String>) -> Self {
        Self::Elementary { name: name.into() }
    }

    pub fn array_of(base: Self) -> Self {
        Self::Array {
            base: Box::new(base),
            length: None,
        }
    }

    pub fn container(key: Self, value: Self) -> Self {
        Self::Container {
            key: Box::new(key),
            value: Some(Box::new(value)),
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Self::Container { .. })
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array { .. })
    }

    /// Chases container value types and strips array dimensions until an
    /// elementary type is reached.
    ///
    /// Terminates for any nesting depth since every step moves strictly
    /// inward. Fails when a container has no value type.
    pub fn resolve(&self) -> Result<Resolved<'_>> {
        let mut ty = self;
        let mut array = false;

        loop {
            match ty {
                Self::Elementary { name } => return Ok(Resolved { name, array }),
                Self::Array { base, .. } => {
                    array = true;
                    ty = &**base;
                }
                Self::Container {
                    value: Some(value), ..
                } => ty = &**value,
                Self::Container { value: None, .. } => {
                    return Err(Error::missing_type_info(format!(
                        "container type `{self}` declares no value type"
                    )))
                }
            }
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Elementary { name } => f.write_str(name),
            Self::Array {
                base,
                length: Some(len),
            } => write!(f, "{base}[{len}]"),
            Self::Array { base, length: None } => write!(f, "{base}[]"),
            Self::Container {
                key,
                value: Some(value),
            } => write!(f, "mapping({key} => {value})"),
            Self::Container { key, value: None } => write!(f, "mapping({key} => ?)"),
        }
    }
}
