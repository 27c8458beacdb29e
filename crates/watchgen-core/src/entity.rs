//! Entity descriptors: one generation-ready description per persisted shape.

mod builder;
pub use builder::Builder;

mod capability;
pub use capability::Capability;

mod column;
pub use column::{Column, ColumnKind, Transformer};

mod index;
pub use index::Index;

mod relation;
pub use relation::{Cardinality, Derivation, Relation};

pub mod system;

use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Unique across every entity of a run
    pub class_name: String,

    /// Where the entity came from
    pub source: Source,

    pub columns: Vec<Column>,

    pub indices: Vec<Index>,

    pub relations: Vec<Relation>,

    /// What the renderer has to pull in for this entity. Derived from the
    /// columns and relations by [`Entity::refresh_capabilities`].
    pub capabilities: BTreeSet<Capability>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// Backs a query's cached results
    Query,

    /// Fixed bookkeeping table
    System,

    /// Object type of an imported schema
    Schema,
}

impl Entity {
    pub fn new(class_name: impl Into<String>, source: Source) -> Entity {
        Entity {
            class_name: class_name.into(),
            source,
            columns: vec![],
            indices: vec![],
            relations: vec![],
            capabilities: BTreeSet::new(),
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn relation(&self, field: &str) -> Option<&Relation> {
        self.relations.iter().find(|relation| relation.field == field)
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Attaches numeric transformers to big-integer columns, scalar or
    /// array. Enum columns are never touched.
    pub(crate) fn apply_numeric_transformers(&mut self) {
        for column in &mut self.columns {
            if column.ty.is_bigint() && !column.is_enum {
                column.transformer = Some(if column.array {
                    Transformer::BigintArray
                } else {
                    Transformer::Bigint
                });
            }
        }
    }

    /// Attaches decimal transformers to arbitrary-precision decimal columns,
    /// scalar or array.
    pub(crate) fn apply_decimal_transformers(&mut self) {
        for column in &mut self.columns {
            if column.ty.is_decimal() && !column.is_enum {
                column.transformer = Some(if column.array {
                    Transformer::DecimalArray
                } else {
                    Transformer::Decimal
                });
            }
        }
    }

    /// Recomputes [`Entity::capabilities`]. Called once an entity is
    /// complete.
    pub(crate) fn refresh_capabilities(&mut self) {
        self.capabilities = self
            .columns
            .iter()
            .filter_map(|column| column.transformer.map(Capability::from))
            .collect();

        if !self.relations.is_empty() {
            self.capabilities.insert(Capability::Relations);
        }

        if self.columns.iter().any(|column| column.is_enum) {
            self.capabilities.insert(Capability::Enums);
        }
    }
}
