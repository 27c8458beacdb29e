use super::{
    column::{ADDRESS_LENGTH, HASH_LENGTH},
    system, Column, ColumnKind, Entity, Index, Source,
};
use crate::{
    contract,
    naming::Names,
    query,
    schema::{Field, ObjectType, Schema},
    ty::{self, Mapped},
    Error, Result,
};

use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};

/// Accumulates entity descriptors for one generation run.
#[derive(Debug, Default)]
pub struct Builder {
    /// Keyed by class name, in insertion order
    entities: IndexMap<String, Entity>,

    /// Query name each query entity was built for, keyed by class name
    query_owners: HashMap<String, String>,

    /// Set once an object schema has been imported
    has_schema: bool,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the entity caching results of the query `name`.
    ///
    /// Returns `Ok(false)` when the entity for `name` was already built. Any
    /// other owner of the class name, including a differently spelled query
    /// deriving the same class, is an error.
    pub fn add_query(
        &mut self,
        name: &str,
        params: &[contract::Param],
        returns: &[contract::Param],
    ) -> Result<bool> {
        let names = Names::new(name).map_err(|err| err.context(err!("query `{name}`")))?;

        if let Some(existing) = self.entities.get(&names.entity_name) {
            let owner = self.query_owners.get(&names.entity_name);
            if owner.is_some_and(|owner| owner == name) {
                tracing::trace!(entity = %names.entity_name, "entity already built; skipping");
                return Ok(false);
            }

            return Err(collision(existing));
        }

        let entity = build_query_entity(names.entity_name, params, returns)
            .map_err(|err| err.context(err!("query `{name}`")))?;

        tracing::debug!(
            entity = %entity.class_name,
            columns = entity.columns.len(),
            "built query entity"
        );

        self.query_owners.insert(entity.class_name.clone(), name.to_string());
        self.entities.insert(entity.class_name.clone(), entity);
        Ok(true)
    }

    /// Builds one entity per object type of `schema`.
    pub fn add_schema_entities(&mut self, schema: &Schema) -> Result<()> {
        for object in schema.objects() {
            if let Some(existing) = self.entities.get(&object.name) {
                return Err(collision(existing));
            }

            let entity = build_schema_entity(schema, object)
                .map_err(|err| err.context(err!("object type `{}`", object.name)))?;

            tracing::debug!(
                entity = %entity.class_name,
                columns = entity.columns.len(),
                relations = entity.relations.len(),
                "built schema entity"
            );

            self.entities.insert(entity.class_name.clone(), entity);
        }

        self.has_schema = true;
        Ok(())
    }

    pub fn get(&self, class_name: &str) -> Option<&Entity> {
        self.entities.get(class_name)
    }

    pub fn entities(&self) -> impl ExactSizeIterator<Item = &Entity> + '_ {
        self.entities.values()
    }

    pub fn has_schema(&self) -> bool {
        self.has_schema
    }

    /// Appends the system entities and returns every entity of the run.
    ///
    /// `FrothyEntity` is only included when an object schema was imported.
    pub fn export_entities(self) -> Result<Vec<Entity>> {
        for class_name in system::class_names(self.has_schema) {
            if let Some(existing) = self.entities.get(class_name) {
                return Err(Error::name_collision(class_name, "system entity")
                    .context(err!("{} `{}`", describe(existing), existing.class_name)));
            }
        }

        let mut entities: Vec<_> = self.entities.into_values().collect();
        entities.extend(system::entities(self.has_schema));

        Ok(entities)
    }
}

fn collision(existing: &Entity) -> Error {
    Error::name_collision(&existing.class_name, describe(existing))
}

fn describe(entity: &Entity) -> &'static str {
    match entity.source {
        Source::Query => "query entity",
        Source::System => "system entity",
        Source::Schema => "schema object type",
    }
}

fn build_query_entity(
    class_name: String,
    params: &[contract::Param],
    returns: &[contract::Param],
) -> Result<Entity> {
    let mut entity = Entity::new(class_name, Source::Query);

    entity.columns = vec![
        Column::integer("id").kind(ColumnKind::PrimaryGenerated),
        Column::string("blockHash").length(HASH_LENGTH),
        Column::integer("blockNumber"),
        Column::string("contractAddress").length(ADDRESS_LENGTH),
    ];

    let mut unique = vec!["blockHash".to_string(), "contractAddress".to_string()];

    for (param, mapped) in params.iter().zip(query::map_params(params)?) {
        let storage = ty::storage::Type::from_target(&mapped.ty)?;

        let mut column = Column::new(&mapped.name, mapped.ty, storage).array(mapped.is_array);
        if param.ty.resolve()?.name == "address" {
            column = column.length(ADDRESS_LENGTH);
        }

        unique.push(mapped.name);
        entity.columns.push(column);
    }

    for (i, ret) in returns.iter().enumerate() {
        let mapped = Mapped::from_source(&ret.ty)?;
        let name = if returns.len() == 1 {
            "value".to_string()
        } else {
            format!("value{i}")
        };

        entity.columns.push(Column::from_mapped(name, &mapped));
    }

    entity.columns.push(Column::text("proof").nullable(true));
    check_columns(&entity)?;

    entity.indices = vec![Index::new(unique, true)];

    entity.apply_numeric_transformers();
    entity.refresh_capabilities();

    Ok(entity)
}

fn build_schema_entity(schema: &Schema, object: &ObjectType) -> Result<Entity> {
    let mut entity = Entity::new(&object.name, Source::Schema);

    entity.columns = vec![
        Column::string("id").kind(ColumnKind::Primary),
        Column::string("blockHash")
            .kind(ColumnKind::Primary)
            .length(HASH_LENGTH),
        Column::integer("blockNumber"),
    ];

    for field in &object.fields {
        if field.name == "id" {
            continue;
        }

        if let Some(column) = build_field(schema, &mut entity, field)
            .map_err(|err| err.context(err!("field `{}`", field.name)))?
        {
            entity.columns.push(column);
        }
    }

    entity.columns.push(Column::boolean("isPruned").default_value("false"));
    check_columns(&entity)?;

    entity.indices = vec![Index::new(["blockNumber"], false)];

    entity.apply_numeric_transformers();
    entity.apply_decimal_transformers();
    entity.refresh_capabilities();

    Ok(entity)
}

/// Builds the column backing `field`, recording any relation it declares.
/// Computed relations are not persisted and produce no column.
fn build_field(schema: &Schema, entity: &mut Entity, field: &Field) -> Result<Option<Column>> {
    let shape = field.ty.shape();

    let name = match field.name.as_str() {
        "blockHash" | "blockNumber" => format!("_{}", field.name),
        name => name.to_string(),
    };

    let column = if let Some(mut relation) = schema.relation(field)? {
        let computed = relation.is_computed();
        relation.field = name.clone();
        entity.relations.push(relation);

        if computed {
            return Ok(None);
        }

        // The related entity's id
        Column::string(name)
    } else if schema.is_enum(shape.base) {
        Column::enumeration(name, shape.base)
    } else {
        let query = shape.base.parse::<ty::query::Type>()?;
        Column::from_mapped(name, &Mapped::from_query(query, shape.array)?)
    };

    Ok(Some(column.array(shape.array).nullable(shape.nullable)))
}

/// Parameters share the column namespace with the common and return columns.
fn check_columns(entity: &Entity) -> Result<()> {
    let mut seen = HashSet::new();

    for column in &entity.columns {
        if !seen.insert(column.name.as_str()) {
            return Err(Error::duplicate_column(&column.name));
        }
    }

    Ok(())
}
