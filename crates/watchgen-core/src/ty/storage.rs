use super::target;
use crate::{Error, Result, TypeStage};

use serde::{Serialize, Serializer};
use std::fmt;

/// Persisted column types.
///
/// `Text` and `Jsonb` are only used by the fixed system entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Varchar,
    Integer,
    Numeric,
    Boolean,
    Text,
    Bytea,
    Jsonb,
    Timestamp,
}

impl Type {
    /// Maps a target type to its column type.
    ///
    /// Enum targets have no column type: the column stores the symbolic
    /// variant name and the renderer declares it as an enum column instead.
    pub fn from_target(ty: &target::Type) -> Result<Type> {
        match ty {
            target::Type::String => Ok(Type::Varchar),
            target::Type::Number => Ok(Type::Integer),
            target::Type::Bigint | target::Type::Decimal => Ok(Type::Numeric),
            target::Type::Boolean => Ok(Type::Boolean),
            target::Type::Date => Ok(Type::Timestamp),
            target::Type::Buffer => Ok(Type::Bytea),
            target::Type::Enum(name) => Err(Error::unmapped_type(TypeStage::Target, name.as_str())),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Type::Varchar => "varchar",
            Type::Integer => "integer",
            Type::Numeric => "numeric",
            Type::Boolean => "boolean",
            Type::Text => "text",
            Type::Bytea => "bytea",
            Type::Jsonb => "jsonb",
            Type::Timestamp => "timestamp",
        })
    }
}

impl Serialize for Type {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ty::query;

    #[test]
    fn chain_from_query_types() {
        for (query, storage) in [
            (query::Type::Id, Type::Varchar),
            (query::Type::String, Type::Varchar),
            (query::Type::Bytes, Type::Varchar),
            (query::Type::Int, Type::Integer),
            (query::Type::Int8, Type::Numeric),
            (query::Type::BigInt, Type::Numeric),
            (query::Type::BigDecimal, Type::Numeric),
            (query::Type::Boolean, Type::Boolean),
        ] {
            let target = target::Type::from_query(query);
            assert_eq!(Type::from_target(&target).unwrap(), storage, "{query}");
        }
    }

    #[test]
    fn enum_has_no_storage_type() {
        let err = Type::from_target(&target::Type::Enum("TokenKind".into())).unwrap_err();
        assert!(err.is_unmapped_type());
        assert!(err.to_string().contains("TokenKind"));
    }
}
