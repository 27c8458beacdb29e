use serde::Serialize;

/// A field of one entity that points at another entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    /// Field on the owning entity
    pub field: String,

    /// Class name of the related entity
    pub entity: String,

    pub cardinality: Cardinality,

    pub derivation: Derivation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    One,
    Many,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Derivation {
    /// The owning entity persists the related id(s).
    Stored,

    /// Nothing is persisted. The relation is reconstructed by finding the
    /// related entities whose `field` points back at the owner.
    Computed { field: String },
}

impl Relation {
    pub fn is_computed(&self) -> bool {
        matches!(self.derivation, Derivation::Computed { .. })
    }

    pub fn is_array(&self) -> bool {
        matches!(self.cardinality, Cardinality::Many)
    }

    /// Field on the related entity used for the reverse lookup.
    pub fn reverse_field(&self) -> Option<&str> {
        match &self.derivation {
            Derivation::Stored => None,
            Derivation::Computed { field } => Some(field),
        }
    }
}

impl Cardinality {
    pub fn from_array(array: bool) -> Cardinality {
        if array {
            Cardinality::Many
        } else {
            Cardinality::One
        }
    }
}
