use crate::{Error, Result};

use serde::Deserialize;
use std::fmt;

/// Name of the directive marking a computed relation.
const DERIVED_FROM: &str = "derivedFrom";

/// One top-level definition of an object-schema document.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Definition {
    Object(ObjectType),
    Enum(EnumType),

    /// Scalars, directive declarations, inputs, ... Nothing is generated for
    /// these.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectType {
    pub name: String,

    #[serde(default)]
    pub fields: Vec<Field>,

    #[serde(default)]
    pub directives: Vec<Directive>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnumType {
    pub name: String,

    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Field {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: FieldType,

    #[serde(default)]
    pub directives: Vec<Directive>,
}

/// A field type as written: a named type wrapped in any number of list and
/// non-null modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldType {
    Named {
        name: String,
    },
    List {
        #[serde(rename = "type")]
        ty: Box<FieldType>,
    },
    NonNull {
        #[serde(rename = "type")]
        ty: Box<FieldType>,
    },
}

/// The modifiers of a [`FieldType`], flattened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldShape<'a> {
    /// Innermost named type
    pub base: &'a str,

    /// True if a list modifier appears anywhere
    pub array: bool,

    /// False only when the outermost modifier is non-null. Non-null list
    /// items do not make the field itself required.
    pub nullable: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Directive {
    pub name: String,

    #[serde(default)]
    pub arguments: Vec<Argument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Argument {
    pub name: String,
    pub value: String,
}

impl ObjectType {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}

impl Field {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Field {
        Field {
            name: name.into(),
            ty,
            directives: vec![],
        }
    }

    /// Adds a `derivedFrom(field: ...)` directive.
    pub fn derived_from_field(mut self, field: impl Into<String>) -> Field {
        self.directives.push(Directive {
            name: DERIVED_FROM.to_string(),
            arguments: vec![Argument {
                name: "field".to_string(),
                value: field.into(),
            }],
        });
        self
    }

    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directives.iter().find(|directive| directive.name == name)
    }

    /// Returns the reverse-lookup field named by a `derivedFrom` directive,
    /// if the field carries one.
    pub fn derived_from(&self) -> Result<Option<&str>> {
        let Some(directive) = self.directive(DERIVED_FROM) else {
            return Ok(None);
        };

        match directive.argument("field") {
            Some(field) => Ok(Some(field)),
            None => Err(Error::missing_type_info(format!(
                "`@{DERIVED_FROM}` on field `{}` names no reverse field",
                self.name
            ))),
        }
    }
}

impl Directive {
    pub fn argument(&self, name: &str) -> Option<&str> {
        self.arguments
            .iter()
            .find(|argument| argument.name == name)
            .map(|argument| argument.value.as_str())
    }
}

impl FieldType {
    pub fn named(name: impl Into<String>) -> FieldType {
        FieldType::Named { name: name.into() }
    }

    pub fn list(ty: FieldType) -> FieldType {
        FieldType::List { ty: Box::new(ty) }
    }

    pub fn non_null(ty: FieldType) -> FieldType {
        FieldType::NonNull { ty: Box::new(ty) }
    }

    pub fn shape(&self) -> FieldShape<'_> {
        let nullable = !matches!(self, FieldType::NonNull { .. });
        let mut array = false;
        let mut ty = self;

        loop {
            match ty {
                FieldType::Named { name } => {
                    return FieldShape {
                        base: name,
                        array,
                        nullable,
                    }
                }
                FieldType::List { ty: item } => {
                    array = true;
                    ty = &**item;
                }
                FieldType::NonNull { ty: inner } => ty = &**inner,
            }
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Named { name } => f.write_str(name),
            FieldType::List { ty } => write!(f, "[{ty}]"),
            FieldType::NonNull { ty } => write!(f, "{ty}!"),
        }
    }
}
