use super::Transformer;

use serde::Serialize;

/// Something the rendered entity needs beyond the basic column decorators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    BigintTransformer,
    BigintArrayTransformer,
    DecimalTransformer,
    DecimalArrayTransformer,

    /// At least one relation field
    Relations,

    /// At least one enum-typed column
    Enums,
}

impl From<Transformer> for Capability {
    fn from(transformer: Transformer) -> Self {
        match transformer {
            Transformer::Bigint => Capability::BigintTransformer,
            Transformer::BigintArray => Capability::BigintArrayTransformer,
            Transformer::Decimal => Capability::DecimalTransformer,
            Transformer::DecimalArray => Capability::DecimalArrayTransformer,
        }
    }
}
