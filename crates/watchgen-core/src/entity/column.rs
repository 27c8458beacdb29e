use crate::ty::{storage, target, Mapped};

use serde::Serialize;

/// Length of a hex-encoded 32-byte hash, `0x` prefix included.
pub(crate) const HASH_LENGTH: u32 = 66;

/// Length of a hex-encoded address, `0x` prefix included.
pub(crate) const ADDRESS_LENGTH: u32 = 42;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// The name of the column
    pub name: String,

    /// How the column is declared
    pub kind: ColumnKind,

    /// The column type, from the generated code's point of view
    #[serde(rename = "type")]
    pub ty: target::Type,

    /// The persisted type of the column. `None` for enum columns, which store
    /// the variant's symbolic name instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_ty: Option<storage::Type>,

    pub nullable: bool,

    pub array: bool,

    pub is_enum: bool,

    /// Maximum length for character columns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,

    /// Literal default value, as written in the generated code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Set when the persisted and in-memory representations differ
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transformer: Option<Transformer>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Auto-incremented primary key
    PrimaryGenerated,

    /// Part of a caller-supplied primary key
    Primary,

    Plain,

    /// Set to the insertion time on creation
    CreateDate,
}

/// Encode/decode step between a precision-sensitive in-memory value and its
/// persisted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transformer {
    Bigint,
    BigintArray,
    Decimal,
    DecimalArray,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: target::Type, storage_ty: storage::Type) -> Column {
        Column {
            name: name.into(),
            kind: ColumnKind::Plain,
            ty,
            storage_ty: Some(storage_ty),
            nullable: false,
            array: false,
            is_enum: false,
            length: None,
            default: None,
            transformer: None,
        }
    }

    pub fn from_mapped(name: impl Into<String>, mapped: &Mapped) -> Column {
        Column {
            array: mapped.array,
            ..Column::new(name, mapped.target.clone(), mapped.storage)
        }
    }

    /// A column storing the symbolic name of a schema enum's variant.
    pub fn enumeration(name: impl Into<String>, enum_name: impl Into<String>) -> Column {
        Column {
            storage_ty: None,
            is_enum: true,
            ..Column::new(name, target::Type::Enum(enum_name.into()), storage::Type::Varchar)
        }
    }

    pub fn string(name: impl Into<String>) -> Column {
        Column::new(name, target::Type::String, storage::Type::Varchar)
    }

    pub fn integer(name: impl Into<String>) -> Column {
        Column::new(name, target::Type::Number, storage::Type::Integer)
    }

    pub fn boolean(name: impl Into<String>) -> Column {
        Column::new(name, target::Type::Boolean, storage::Type::Boolean)
    }

    pub fn text(name: impl Into<String>) -> Column {
        Column::new(name, target::Type::String, storage::Type::Text)
    }

    pub fn kind(mut self, kind: ColumnKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn array(mut self, array: bool) -> Self {
        self.array = array;
        self
    }

    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Type as written in generated code, e.g. `bigint[]`.
    pub fn target_ref(&self) -> String {
        target::display_with_array(&self.ty, self.array)
    }
}
