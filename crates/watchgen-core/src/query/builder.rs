use super::{Flags, Param, Query, ReturnType};
use crate::{
    contract::{self, Function, Mode, StateVariableKind},
    naming::Names,
    ty::Mapped,
    Error, Result, TypeStage,
};

use indexmap::IndexMap;

/// Accumulates query descriptors for one generation run.
#[derive(Debug, Default)]
pub struct Builder {
    /// Keyed by query name, in insertion order
    queries: IndexMap<String, Query>,

    flags: Flags,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a query.
    ///
    /// Returns `Ok(false)` without touching anything when a query with the
    /// same name already exists: the first registration wins.
    pub fn add_query(
        &mut self,
        contract: &str,
        mode: Mode,
        name: &str,
        params: &[contract::Param],
        returns: &[contract::Param],
        state_variable_kind: Option<StateVariableKind>,
    ) -> Result<bool> {
        let Some(query) =
            self.prepare(contract, mode, name, params, returns, state_variable_kind)?
        else {
            return Ok(false);
        };

        self.commit(query);
        Ok(true)
    }

    /// Builds the descriptor for a query that is not registered yet, without
    /// recording it. Returns `Ok(None)` for an already registered name.
    pub(crate) fn prepare(
        &self,
        contract: &str,
        mode: Mode,
        name: &str,
        params: &[contract::Param],
        returns: &[contract::Param],
        state_variable_kind: Option<StateVariableKind>,
    ) -> Result<Option<Query>> {
        if self.queries.contains_key(name) {
            tracing::trace!(query = name, "query already registered; skipping");
            return Ok(None);
        }

        build_query(contract, mode, name, params, returns, state_variable_kind)
            .map(Some)
            .map_err(|err| err.context(err!("query `{name}`")))
    }

    /// Records a query built by [`Builder::prepare`].
    pub(crate) fn commit(&mut self, query: Query) {
        if let Some(kind) = query.state_variable_kind {
            self.flags.record(kind);
        }

        tracing::debug!(
            query = %query.name,
            contract = %query.contract,
            entity = %query.entity_name,
            "registered query"
        );

        self.queries.insert(query.name.clone(), query);
    }

    /// Registers a query for a declared contract function.
    pub fn add_function(&mut self, contract: &str, function: &Function) -> Result<bool> {
        let Some(query) = self.prepare_function(contract, function)? else {
            return Ok(false);
        };

        self.commit(query);
        Ok(true)
    }

    pub(crate) fn prepare_function(
        &self,
        contract: &str,
        function: &Function,
    ) -> Result<Option<Query>> {
        self.prepare(
            contract,
            function.mode,
            &function.name,
            &function.params,
            &function.returns,
            function.state_variable_kind,
        )
    }

    pub fn get(&self, name: &str) -> Option<&Query> {
        self.queries.get(name)
    }

    pub fn queries(&self) -> impl ExactSizeIterator<Item = &Query> + '_ {
        self.queries.values()
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Consumes the builder, returning queries in registration order.
    pub fn into_parts(self) -> (Vec<Query>, Flags) {
        (self.queries.into_values().collect(), self.flags)
    }
}

fn build_query(
    contract: &str,
    mode: Mode,
    name: &str,
    params: &[contract::Param],
    returns: &[contract::Param],
    state_variable_kind: Option<StateVariableKind>,
) -> Result<Query> {
    let names = Names::new(name)?;

    let return_types = returns
        .iter()
        .map(|ret| {
            let mapped = Mapped::from_source(&ret.ty)?;
            Ok(ReturnType {
                ty: mapped.target,
                is_array: mapped.array,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let params = map_params(params)?;

    Ok(Query {
        name: name.to_string(),
        entity_name: names.entity_name,
        get_query_name: names.get_query_name,
        save_query_name: names.save_query_name,
        params,
        return_types,
        mode,
        state_variable_kind,
        contract: contract.to_string(),
    })
}

/// Maps query parameters in order. Unnamed parameters are named by position,
/// `key0`, `key1`, ...
pub(crate) fn map_params(params: &[contract::Param]) -> Result<Vec<Param>> {
    params
        .iter()
        .enumerate()
        .map(|(i, param)| {
            let name = match param.name.as_str() {
                "" => format!("key{i}"),
                name => name.to_string(),
            };
            map_param(name, param)
        })
        .collect()
}

/// Maps a query parameter. Parameters are keys, never containers.
fn map_param(name: String, param: &contract::Param) -> Result<Param> {
    if param.ty.is_container() {
        return Err(Error::unmapped_type(TypeStage::Source, param.ty.to_string())
            .context(err!("parameter `{name}`")));
    }

    let mapped = Mapped::from_source(&param.ty)?;

    Ok(Param {
        name,
        ty: mapped.target,
        is_array: mapped.array,
    })
}
