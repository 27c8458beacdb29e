use super::query;

use serde::{Serialize, Serializer};
use std::fmt;

/// In-memory type used by the generated code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    String,
    Number,
    Bigint,
    Boolean,
    Decimal,

    /// Point in time. Only used by system entities.
    Date,

    /// Raw binary data. Only used by system entities.
    Buffer,

    /// A schema enum, referenced by its type name. Values are stored as the
    /// variant's symbolic name.
    Enum(String),
}

impl Type {
    /// Every query type has exactly one target type.
    pub fn from_query(ty: query::Type) -> Type {
        match ty {
            query::Type::Id | query::Type::String | query::Type::Bytes => Type::String,
            query::Type::Int => Type::Number,
            query::Type::Int8 | query::Type::BigInt => Type::Bigint,
            query::Type::BigDecimal => Type::Decimal,
            query::Type::Boolean => Type::Boolean,
        }
    }

    pub fn is_bigint(&self) -> bool {
        matches!(self, Type::Bigint)
    }

    pub fn is_decimal(&self) -> bool {
        matches!(self, Type::Decimal)
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, Type::Enum(_))
    }
}

/// Formats `ty`, appending `[]` for array-shaped values.
pub fn display_with_array(ty: &Type, array: bool) -> String {
    if array {
        format!("{ty}[]")
    } else {
        ty.to_string()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::String => f.write_str("string"),
            Type::Number => f.write_str("number"),
            Type::Bigint => f.write_str("bigint"),
            Type::Boolean => f.write_str("boolean"),
            Type::Decimal => f.write_str("Decimal"),
            Type::Date => f.write_str("Date"),
            Type::Buffer => f.write_str("Buffer"),
            Type::Enum(name) => f.write_str(name),
        }
    }
}

impl Serialize for Type {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
