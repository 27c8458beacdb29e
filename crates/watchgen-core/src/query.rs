//! Query descriptors: one generation-ready description per callable
//! data-access point.

mod builder;
pub use builder::Builder;
pub(crate) use builder::map_params;

use crate::{
    contract::{Mode, StateVariableKind},
    ty::target,
};

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// Unique key. Matching is case-sensitive.
    pub name: String,

    pub entity_name: String,
    pub get_query_name: String,
    pub save_query_name: String,

    pub params: Vec<Param>,

    /// Mapped return types, in declaration order
    pub return_types: Vec<ReturnType>,

    pub mode: Mode,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_variable_kind: Option<StateVariableKind>,

    /// Identifier of the contract the query belongs to
    pub contract: String,
}

/// A query parameter with its type rewritten to the target type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Param {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: target::Type,

    pub is_array: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnType {
    #[serde(rename = "type")]
    pub ty: target::Type,

    pub is_array: bool,
}

/// Run-scoped facts the renderer needs to pick auxiliary helpers.
///
/// Flags only ever go from `false` to `true` within a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Flags {
    pub has_elementary_state_variable: bool,
    pub has_mapping_state_variable: bool,
}

impl Flags {
    pub(crate) fn record(&mut self, kind: StateVariableKind) {
        match kind {
            StateVariableKind::Elementary => self.has_elementary_state_variable = true,
            StateVariableKind::Mapping => self.has_mapping_state_variable = true,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            target::display_with_array(&self.ty, self.is_array)
        )
    }
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&target::display_with_array(&self.ty, self.is_array))
    }
}
