use crate::{Error, Result};

use serde::Serialize;
use std_util::str;

/// Names derived from a raw query identifier.
///
/// Both the query builder and the entity builder derive names through this
/// type, so a query and its backing entity agree without looking each other
/// up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Names {
    /// Class name of the backing entity
    pub entity_name: String,

    /// Accessor that loads a cached result
    pub get_query_name: String,

    /// Accessor that stores a result
    pub save_query_name: String,
}

impl Names {
    /// Derives names from `raw`.
    ///
    /// A leading underscore is kept on every derived name and the character
    /// after it is capitalized: `_balances` gives `_Balances`,
    /// `_getBalances` and `_saveBalances`. Otherwise the first character is
    /// capitalized: `balanceOf` gives `BalanceOf`, `getBalanceOf` and
    /// `saveBalanceOf`.
    pub fn new(raw: &str) -> Result<Names> {
        let (prefix, stem) = match raw.strip_prefix('_') {
            Some(stem) => ("_", stem),
            None => ("", raw),
        };

        if stem.is_empty() {
            return Err(Error::invalid_name(raw));
        }

        let stem = str::capitalize(stem);

        Ok(Names {
            entity_name: format!("{prefix}{stem}"),
            get_query_name: format!("{prefix}get{stem}"),
            save_query_name: format!("{prefix}save{stem}"),
        })
    }
}
