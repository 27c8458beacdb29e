use crate::{Error, Result, TypeStage};

use std::{fmt, str::FromStr};

/// Intermediate type exposed by the generated query API.
///
/// Both inputs meet here: contract source types are mapped into this set
/// by [`Type::from_source`], and object-schema field types are already
/// spelled in it (parsed with [`FromStr`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Opaque entity identifier
    Id,

    String,

    /// Integer that fits in 32 bits
    Int,

    /// 64-bit integer
    Int8,

    /// Arbitrary-width integer
    BigInt,

    /// Arbitrary-precision decimal
    BigDecimal,

    Boolean,

    /// Hex-encoded byte string
    Bytes,
}

impl Type {
    /// Maps an elementary contract type name.
    ///
    /// Integers up to 32 bits wide become [`Type::Int`], wider ones
    /// [`Type::BigInt`]. Addresses and all byte sequences travel as strings.
    pub fn from_source(name: &str) -> Result<Type> {
        match name {
            "bool" => Ok(Type::Boolean),
            "address" | "string" | "bytes" => Ok(Type::String),
            _ => {
                if let Some(bits) = integer_width(name) {
                    Ok(if bits <= 32 { Type::Int } else { Type::BigInt })
                } else if fixed_bytes_width(name).is_some() {
                    Ok(Type::String)
                } else {
                    Err(Error::unmapped_type(TypeStage::Source, name))
                }
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Type::Id => "ID",
            Type::String => "String",
            Type::Int => "Int",
            Type::Int8 => "Int8",
            Type::BigInt => "BigInt",
            Type::BigDecimal => "BigDecimal",
            Type::Boolean => "Boolean",
            Type::Bytes => "Bytes",
        }
    }
}

/// Bit width of `intN`/`uintN`. Bare `int`/`uint` are 256 bits wide.
fn integer_width(name: &str) -> Option<u16> {
    let digits = name
        .strip_prefix("uint")
        .or_else(|| name.strip_prefix("int"))?;

    if digits.is_empty() {
        return Some(256);
    }

    let bits: u16 = digits.parse().ok()?;
    (bits % 8 == 0 && (8..=256).contains(&bits)).then_some(bits)
}

/// Length of `bytesN` for N in 1..=32.
fn fixed_bytes_width(name: &str) -> Option<u8> {
    let len: u8 = name.strip_prefix("bytes")?.parse().ok()?;
    (1..=32).contains(&len).then_some(len)
}

impl FromStr for Type {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "ID" => Type::Id,
            "String" => Type::String,
            "Int" => Type::Int,
            "Int8" => Type::Int8,
            "BigInt" => Type::BigInt,
            "BigDecimal" => Type::BigDecimal,
            "Boolean" => Type::Boolean,
            "Bytes" => Type::Bytes,
            _ => return Err(Error::unmapped_type(TypeStage::Query, s)),
        })
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
