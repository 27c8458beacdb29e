//! Contract interface declarations, as handed over by the interface parser.

use crate::ty::source;

use serde::{Deserialize, Serialize};

/// A contract and the functions to generate queries for.
#[derive(Debug, Clone, Deserialize)]
pub struct Contract {
    /// Identifier the generated queries are grouped under. May be left out
    /// when the caller assigns one.
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub functions: Vec<Function>,
}

/// A single callable data-access point.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    pub name: String,

    pub mode: Mode,

    #[serde(default)]
    pub params: Vec<Param>,

    #[serde(default)]
    pub returns: Vec<Param>,

    /// Set for storage reads of a state variable
    #[serde(default)]
    pub state_variable_kind: Option<StateVariableKind>,
}

/// A named, typed parameter or return value.
#[derive(Debug, Clone, Deserialize)]
pub struct Param {
    /// Return values may be unnamed
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type")]
    pub ty: source::Type,
}

/// How the generated query obtains its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Execute the function against the node
    EthCall,

    /// Read the backing state variable from contract storage
    Storage,
}

/// Shape of the state variable behind a storage read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateVariableKind {
    Elementary,

    /// A container (mapping) keyed by the query parameters
    Mapping,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: source::Type) -> Param {
        Param {
            name: name.into(),
            ty,
        }
    }
}
