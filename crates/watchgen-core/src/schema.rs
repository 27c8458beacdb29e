//! Object-schema import and relation resolution.
//!
//! A schema document arrives as a flat list of [`Definition`]s. Object types
//! become entities, enum types become enum columns, and any field whose base
//! type names an object type becomes a [`Relation`].

mod definition;
pub use definition::{
    Argument, Definition, Directive, EnumType, Field, FieldShape, FieldType, ObjectType,
};

use crate::{
    entity::{Cardinality, Derivation, Relation},
    Error, Result,
};

use indexmap::IndexMap;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Object types, in declaration order
    objects: IndexMap<String, ObjectType>,

    enums: IndexMap<String, EnumType>,
}

impl Schema {
    /// Splits a definition list into object and enum types.
    ///
    /// Type names must be unique across the document, as must field names
    /// within an object type.
    pub fn from_definitions(definitions: impl IntoIterator<Item = Definition>) -> Result<Schema> {
        let mut schema = Schema::default();

        for definition in definitions {
            let name = match &definition {
                Definition::Object(object) => &object.name,
                Definition::Enum(enumeration) => &enumeration.name,
                Definition::Other => continue,
            };

            if schema.objects.contains_key(name) || schema.enums.contains_key(name) {
                return Err(Error::invalid_schema(format!(
                    "type `{name}` is defined more than once"
                )));
            }

            match definition {
                Definition::Object(object) => {
                    check_fields(&object)?;
                    schema.objects.insert(object.name.clone(), object);
                }
                Definition::Enum(enumeration) => {
                    schema.enums.insert(enumeration.name.clone(), enumeration);
                }
                Definition::Other => {}
            }
        }

        tracing::debug!(
            objects = schema.objects.len(),
            enums = schema.enums.len(),
            "schema imported"
        );

        Ok(schema)
    }

    pub fn object(&self, name: &str) -> Option<&ObjectType> {
        self.objects.get(name)
    }

    pub fn objects(&self) -> impl ExactSizeIterator<Item = &ObjectType> + '_ {
        self.objects.values()
    }

    pub fn enumeration(&self, name: &str) -> Option<&EnumType> {
        self.enums.get(name)
    }

    pub fn is_object(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    pub fn is_enum(&self, name: &str) -> bool {
        self.enums.contains_key(name)
    }

    /// Returns the relation `field` declares, if its base type is an object
    /// type of this schema.
    pub fn relation(&self, field: &Field) -> Result<Option<Relation>> {
        let shape = field.ty.shape();

        if !self.is_object(shape.base) {
            return Ok(None);
        }

        let derivation = match field.derived_from()? {
            Some(reverse) => Derivation::Computed {
                field: reverse.to_string(),
            },
            None => Derivation::Stored,
        };

        Ok(Some(Relation {
            field: field.name.clone(),
            entity: shape.base.to_string(),
            cardinality: Cardinality::from_array(shape.array),
            derivation,
        }))
    }

    /// Relations of every object type, keyed by object type name. Object
    /// types without relations are left out.
    pub fn relations(&self) -> Result<IndexMap<&str, Vec<Relation>>> {
        let mut relations = IndexMap::new();

        for object in self.objects() {
            let mut found = vec![];

            for field in &object.fields {
                let relation = self
                    .relation(field)
                    .map_err(|err| err.context(err!("object type `{}`", object.name)))?;

                found.extend(relation);
            }

            if !found.is_empty() {
                relations.insert(object.name.as_str(), found);
            }
        }

        Ok(relations)
    }
}

fn check_fields(object: &ObjectType) -> Result<()> {
    let mut seen = HashSet::new();

    for field in &object.fields {
        if !seen.insert(field.name.as_str()) {
            return Err(Error::invalid_schema(format!(
                "field `{}` is defined more than once on `{}`",
                field.name, object.name
            )));
        }
    }

    Ok(())
}
