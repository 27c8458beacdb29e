use crate::ContractSource;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;
use watchgen_core::{
    schema::{Definition, Schema},
    Contract,
};

/// Loads a contract interface. The configured name replaces any name the
/// file carries.
pub(crate) fn load_contract(source: &ContractSource) -> Result<Contract> {
    let mut contract: Contract = read_json(&source.path)?;
    contract.name = source.name.clone();

    tracing::debug!(
        contract = %contract.name,
        functions = contract.functions.len(),
        "loaded contract"
    );

    Ok(contract)
}

/// Loads an object schema from a JSON definition list.
pub(crate) fn load_schema(path: &Path) -> Result<Schema> {
    let definitions: Vec<Definition> = read_json(path)?;

    Schema::from_definitions(definitions)
        .with_context(|| format!("invalid schema `{}`", path.display()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;

    serde_json::from_str(&contents).with_context(|| format!("failed to parse `{}`", path.display()))
}
