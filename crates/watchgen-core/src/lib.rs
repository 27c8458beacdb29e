#[macro_use]
mod error;
pub use error::{Error, IntoError, TypeStage};

pub mod contract;
pub use contract::Contract;

pub mod entity;
pub use entity::Entity;

pub mod generate;
pub use generate::{Emit, Generator, Output};

pub mod naming;

pub mod query;
pub use query::Query;

pub mod schema;
pub use schema::Schema;

pub mod ty;

pub type Result<T, E = Error> = core::result::Result<T, E>;
