//! A single generation run, from declarations to descriptor lists.

use crate::{
    contract::{Contract, Function},
    entity::{self, Entity},
    query::{self, Flags, Query},
    schema::Schema,
    Result,
};

use serde::Serialize;

/// Owns the builders of one run. Runs share nothing, so any number of them
/// can coexist.
#[derive(Debug, Default)]
pub struct Generator {
    queries: query::Builder,
    entities: entity::Builder,
    schema: Option<Schema>,
}

/// Everything a run produced, ready to hand to the renderer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    /// In registration order
    pub queries: Vec<Query>,

    /// Query entities, then schema entities, then system entities
    pub entities: Vec<Entity>,

    pub flags: Flags,
}

/// The rendering collaborator.
///
/// Receives one call per entity, then a single call with the full query list.
pub trait Emit {
    fn emit_entity(&mut self, entity: &Entity) -> Result<()>;

    fn emit_queries(&mut self, queries: &[Query], flags: Flags) -> Result<()>;
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a query, and its backing entity, for every function of
    /// `contract`.
    pub fn add_contract(&mut self, contract: &Contract) -> Result<()> {
        for function in &contract.functions {
            self.add_function(&contract.name, function)
                .map_err(|err| err.context(err!("contract `{}`", contract.name)))?;
        }

        tracing::debug!(
            contract = %contract.name,
            functions = contract.functions.len(),
            "contract added"
        );

        Ok(())
    }

    /// Registers a single function. Returns `Ok(false)` if a query of the
    /// same name was already registered.
    ///
    /// Nothing is recorded when this fails: the query is only committed once
    /// its entity has been built.
    pub fn add_function(&mut self, contract: &str, function: &Function) -> Result<bool> {
        let Some(query) = self.queries.prepare_function(contract, function)? else {
            return Ok(false);
        };

        self.entities
            .add_query(&function.name, &function.params, &function.returns)?;
        self.queries.commit(query);

        Ok(true)
    }

    /// Imports the object schema. A run takes at most one.
    pub fn import_schema(&mut self, schema: Schema) -> Result<()> {
        if self.schema.is_some() {
            bail!("an object schema was already imported");
        }

        self.entities.add_schema_entities(&schema)?;
        self.schema = Some(schema);

        Ok(())
    }

    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    pub fn queries(&self) -> &query::Builder {
        &self.queries
    }

    pub fn entities(&self) -> &entity::Builder {
        &self.entities
    }

    /// Completes the run. Nothing is returned unless every descriptor was
    /// built.
    pub fn finish(self) -> Result<Output> {
        let entities = self.entities.export_entities()?;
        let (queries, flags) = self.queries.into_parts();

        tracing::info!(
            queries = queries.len(),
            entities = entities.len(),
            schema = self.schema.is_some(),
            "generation finished"
        );

        Ok(Output {
            queries,
            entities,
            flags,
        })
    }
}

impl Output {
    /// Hands every descriptor to `emitter`: each entity on its own, then the
    /// query list.
    pub fn emit(&self, emitter: &mut impl Emit) -> Result<()> {
        for entity in &self.entities {
            emitter
                .emit_entity(entity)
                .map_err(|err| err.context(err!("entity `{}`", entity.class_name)))?;
        }

        emitter.emit_queries(&self.queries, self.flags)
    }

    pub fn entity(&self, class_name: &str) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|entity| entity.class_name == class_name)
    }

    pub fn query(&self, name: &str) -> Option<&Query> {
        self.queries.iter().find(|query| query.name == name)
    }
}
