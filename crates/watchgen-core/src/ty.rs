//! The type systems a declaration passes through on its way to a column.
//!
//! A contract declaration is typed in the contract's own language
//! ([`source::Type`]). Generation maps it, one table at a time, through:
//!
//! ```text
//! source::Type  →  query::Type   (intermediate, what the query API exposes)
//! query::Type   →  target::Type  (generated code's in-memory type)
//! target::Type  →  storage::Type (persisted column type)
//! ```
//!
//! Each stage is a lookup over a closed vocabulary. Structural modifiers never
//! reach the tables: containers are chased to their value type and array
//! dimensions are carried next to the base type as a flag (see
//! [`source::Type::resolve`]).

pub mod query;
pub mod source;
pub mod storage;
pub mod target;

use crate::Result;

/// A base type mapped through every stage of the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapped {
    pub query: query::Type,
    pub target: target::Type,
    pub storage: storage::Type,

    /// True when the declaration was array-shaped. The stages above describe
    /// the element type only.
    pub array: bool,
}

impl Mapped {
    /// Maps a source declaration, unwrapping containers and arrays first.
    pub fn from_source(ty: &source::Type) -> Result<Self> {
        let resolved = ty.resolve()?;
        let query = query::Type::from_source(resolved.name)?;

        Self::from_query(query, resolved.array)
    }

    /// Maps an intermediate type the rest of the way down.
    pub fn from_query(query: query::Type, array: bool) -> Result<Self> {
        let target = target::Type::from_query(query);
        let storage = storage::Type::from_target(&target)?;

        Ok(Self {
            query,
            target,
            storage,
            array,
        })
    }

    /// Target type string with the array marker appended, e.g. `bigint[]`.
    pub fn target_ref(&self) -> String {
        target::display_with_array(&self.target, self.array)
    }
}
