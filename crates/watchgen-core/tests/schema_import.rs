use pretty_assertions::assert_eq;
use std_util::prelude::*;
use watchgen_core::entity::{
    Builder, Capability, Cardinality, Derivation, Entity, Index, Relation, Source, Transformer,
};
use watchgen_core::schema::{Definition, Field, FieldType, ObjectType, Schema};
use watchgen_core::ty::{storage, target};

fn named(name: &str) -> FieldType {
    FieldType::named(name)
}

fn required(name: &str) -> FieldType {
    FieldType::non_null(named(name))
}

fn object(name: &str, fields: Vec<Field>) -> Definition {
    Definition::Object(ObjectType {
        name: name.to_string(),
        fields,
        directives: vec![],
    })
}

fn field(name: &str, ty: FieldType) -> Field {
    Field::new(name, ty)
}

/// Schema:
///   Account { id, balance: BigInt!, tokens: [Token!]! @derivedFrom(field: "owner") }
///   Token   { id, owner: Account!, holders: [Account!], status: Status!, price: BigDecimal }
///   Status  = enum { Active, Burned }
fn definitions() -> Vec<Definition> {
    vec![
        object(
            "Account",
            vec![
                field("id", required("ID")),
                field("balance", required("BigInt")),
                field(
                    "tokens",
                    FieldType::non_null(FieldType::list(required("Token"))),
                )
                .derived_from_field("owner"),
            ],
        ),
        object(
            "Token",
            vec![
                field("id", required("ID")),
                field("owner", required("Account")),
                field("holders", FieldType::list(required("Account"))),
                field("status", required("Status")),
                field("price", named("BigDecimal")),
            ],
        ),
        serde_json::from_str(
            r#"{ "kind": "enum", "name": "Status", "values": ["Active", "Burned"] }"#,
        )
        .unwrap(),
        serde_json::from_str(r#"{ "kind": "scalar", "name": "Timestamp" }"#).unwrap(),
    ]
}

fn build() -> Builder {
    let schema = assert_ok!(Schema::from_definitions(definitions()));
    let mut builder = Builder::new();
    assert_ok!(builder.add_schema_entities(&schema));
    builder
}

fn entity<'a>(builder: &'a Builder, name: &str) -> &'a Entity {
    builder.get(name).unwrap()
}

// ---------------------------------------------------------------------------
// Schema lookups
// ---------------------------------------------------------------------------

#[test]
fn definitions_are_split_by_kind() {
    let schema = assert_ok!(Schema::from_definitions(definitions()));

    assert!(schema.is_object("Account"));
    assert!(schema.is_object("Token"));
    assert!(schema.is_enum("Status"));
    assert!(!schema.is_object("Status"));
    assert!(!schema.is_object("Timestamp"));
    assert!(!schema.is_enum("Timestamp"));

    let names: Vec<_> = schema.objects().map(|object| object.name.as_str()).collect();
    assert_eq!(names, ["Account", "Token"]);
}

#[test]
fn duplicate_type_names() {
    let mut definitions = definitions();
    definitions.push(object("Status", vec![]));

    let err = assert_err!(Schema::from_definitions(definitions));
    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "invalid schema: type `Status` is defined more than once"
    );
}

#[test]
fn duplicate_field_names() {
    let definitions = vec![object(
        "Pool",
        vec![field("fee", named("Int")), field("fee", named("BigInt"))],
    )];

    let err = assert_err!(Schema::from_definitions(definitions));
    assert!(err.is_invalid_schema());
}

#[test]
fn relation_map() {
    let schema = assert_ok!(Schema::from_definitions(definitions()));
    let relations = assert_ok!(schema.relations());

    assert_eq!(
        relations["Account"],
        [Relation {
            field: "tokens".to_string(),
            entity: "Token".to_string(),
            cardinality: Cardinality::Many,
            derivation: Derivation::Computed {
                field: "owner".to_string()
            },
        }]
    );

    let token: Vec<_> = relations["Token"]
        .iter()
        .map(|relation| (relation.field.as_str(), relation.cardinality, relation.is_computed()))
        .collect();
    assert_eq!(
        token,
        [
            ("owner", Cardinality::One, false),
            ("holders", Cardinality::Many, false),
        ]
    );
}

// ---------------------------------------------------------------------------
// Schema entities
// ---------------------------------------------------------------------------

#[test]
fn derived_relation_is_computed() {
    let builder = build();
    let account = entity(&builder, "Account");

    let relation = account.relation("tokens").unwrap();
    assert!(relation.is_computed());
    assert!(relation.is_array());
    assert_eq!(relation.reverse_field(), Some("owner"));
    assert_eq!(relation.entity, "Token");

    // Computed relations are rebuilt on read, never stored
    assert_none!(account.column("tokens"));
    assert!(account.has_capability(Capability::Relations));
}

#[test]
fn stored_relations_persist_the_related_id() {
    let builder = build();
    let token = entity(&builder, "Token");

    let owner = token.column("owner").unwrap();
    assert_eq!(owner.ty, target::Type::String);
    assert_eq!(owner.storage_ty, Some(storage::Type::Varchar));
    assert!(!owner.array);
    assert!(!owner.nullable);

    let holders = token.column("holders").unwrap();
    assert_eq!(holders.target_ref(), "string[]");
    assert!(holders.array);
    assert!(holders.nullable);

    assert_eq!(token.relation("owner").unwrap().cardinality, Cardinality::One);
    assert_eq!(token.relation("holders").unwrap().cardinality, Cardinality::Many);
}

#[test]
fn column_layout() {
    let builder = build();
    let token = entity(&builder, "Token");

    let names: Vec<_> = token.columns.iter().map(|column| column.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "id",
            "blockHash",
            "blockNumber",
            "owner",
            "holders",
            "status",
            "price",
            "isPruned"
        ]
    );

    assert_eq!(token.source, Source::Schema);
    assert_eq!(token.indices, [Index::new(["blockNumber"], false)]);

    let is_pruned = token.column("isPruned").unwrap();
    assert_eq!(is_pruned.default.as_deref(), Some("false"));
}

#[test]
fn enum_fields() {
    let builder = build();
    let token = entity(&builder, "Token");

    let status = token.column("status").unwrap();
    assert!(status.is_enum);
    assert_eq!(status.ty, target::Type::Enum("Status".to_string()));
    assert_eq!(status.storage_ty, None);
    assert_eq!(status.transformer, None);

    assert!(token.has_capability(Capability::Enums));
}

#[test]
fn numeric_and_decimal_transformers() {
    let builder = build();

    let balance = entity(&builder, "Account").column("balance").unwrap();
    assert_eq!(balance.transformer, Some(Transformer::Bigint));

    let token = entity(&builder, "Token");
    let price = token.column("price").unwrap();
    assert_eq!(price.ty, target::Type::Decimal);
    assert_eq!(price.storage_ty, Some(storage::Type::Numeric));
    assert_eq!(price.transformer, Some(Transformer::Decimal));
    assert!(price.nullable);

    assert!(token.has_capability(Capability::DecimalTransformer));
    assert!(!token.has_capability(Capability::BigintTransformer));
}

#[test]
fn reserved_field_names_are_prefixed() {
    let definitions = vec![object(
        "Swap",
        vec![
            field("id", required("ID")),
            field("blockNumber", required("BigInt")),
            field("blockHash", required("Bytes")),
            field("amounts", FieldType::list(required("BigDecimal"))),
        ],
    )];

    let schema = assert_ok!(Schema::from_definitions(definitions));
    let mut builder = Builder::new();
    assert_ok!(builder.add_schema_entities(&schema));

    let swap = entity(&builder, "Swap");
    let names: Vec<_> = swap.columns.iter().map(|column| column.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "id",
            "blockHash",
            "blockNumber",
            "_blockNumber",
            "_blockHash",
            "amounts",
            "isPruned"
        ]
    );

    assert_eq!(
        swap.column("_blockNumber").unwrap().transformer,
        Some(Transformer::Bigint)
    );
    assert_eq!(
        swap.column("amounts").unwrap().transformer,
        Some(Transformer::DecimalArray)
    );
}

#[test]
fn renamed_relation_field() {
    let definitions = vec![
        object("Block", vec![field("id", required("ID"))]),
        object(
            "Swap",
            vec![
                field("id", required("ID")),
                field("blockHash", required("Block")),
            ],
        ),
    ];

    let schema = assert_ok!(Schema::from_definitions(definitions));
    let mut builder = Builder::new();
    assert_ok!(builder.add_schema_entities(&schema));

    let swap = entity(&builder, "Swap");
    assert!(swap.column("_blockHash").is_some());
    assert_eq!(swap.relation("_blockHash").unwrap().entity, "Block");
    assert_none!(swap.relation("blockHash"));
}

#[test]
fn field_named_like_the_pruned_flag() {
    let definitions = vec![object(
        "Pool",
        vec![field("id", required("ID")), field("isPruned", named("Boolean"))],
    )];
    let schema = assert_ok!(Schema::from_definitions(definitions));

    let err = assert_err!(Builder::new().add_schema_entities(&schema));
    assert!(err.is_duplicate_column());
    assert_eq!(
        err.to_string(),
        "object type `Pool`: duplicate column: `isPruned` is already defined"
    );
}

#[test]
fn unknown_field_type() {
    let definitions = vec![object("Pool", vec![field("fee", named("Float"))])];
    let schema = assert_ok!(Schema::from_definitions(definitions));

    let err = assert_err!(Builder::new().add_schema_entities(&schema));
    assert!(err.is_unmapped_type());
    assert_eq!(
        err.to_string(),
        "object type `Pool`: field `fee`: unmapped type: no target type for query type `Float`"
    );
}

#[test]
fn schema_from_json() {
    let definitions: Vec<Definition> = serde_json::from_str(
        r#"[
            {
                "kind": "object",
                "name": "Holder",
                "fields": [
                    { "name": "id", "type": { "kind": "nonNull", "type": { "kind": "named", "name": "ID" } } },
                    {
                        "name": "transfers",
                        "type": { "kind": "list", "type": { "kind": "named", "name": "Transfer" } },
                        "directives": [
                            { "name": "derivedFrom", "arguments": [{ "name": "field", "value": "from" }] }
                        ]
                    }
                ]
            },
            {
                "kind": "object",
                "name": "Transfer",
                "fields": [
                    { "name": "from", "type": { "kind": "named", "name": "Holder" } },
                    { "name": "amount", "type": { "kind": "named", "name": "BigInt" } }
                ]
            }
        ]"#,
    )
    .unwrap();

    let schema = assert_ok!(Schema::from_definitions(definitions));
    let mut builder = Builder::new();
    assert_ok!(builder.add_schema_entities(&schema));

    let holder = entity(&builder, "Holder");
    assert_eq!(holder.relation("transfers").unwrap().reverse_field(), Some("from"));

    let transfer = entity(&builder, "Transfer");
    assert!(!transfer.relation("from").unwrap().is_computed());
    assert!(transfer.column("from").is_some());
}
