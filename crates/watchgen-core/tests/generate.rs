use pretty_assertions::assert_eq;
use std_util::prelude::*;
use watchgen_core::contract::{Contract, Function, Mode, Param, StateVariableKind};
use watchgen_core::entity::{system, Transformer};
use watchgen_core::query::Flags;
use watchgen_core::schema::{Definition, Field, FieldType, ObjectType, Schema};
use watchgen_core::ty::source;
use watchgen_core::{Emit, Entity, Generator, Query, Result};

fn elementary(name: &str) -> source::Type {
    source::Type::elementary(name)
}

fn function(
    name: &str,
    mode: Mode,
    params: Vec<Param>,
    returns: Vec<Param>,
    state_variable_kind: Option<StateVariableKind>,
) -> Function {
    Function {
        name: name.to_string(),
        mode,
        params,
        returns,
        state_variable_kind,
    }
}

fn token() -> Contract {
    Contract {
        name: "Token".to_string(),
        functions: vec![
            function(
                "balanceOf",
                Mode::EthCall,
                vec![Param::new("owner", elementary("address"))],
                vec![Param::new("", elementary("uint256"))],
                None,
            ),
            function(
                "_balances",
                Mode::Storage,
                vec![Param::new("key0", elementary("address"))],
                vec![Param::new(
                    "",
                    source::Type::container(elementary("address"), elementary("uint256")),
                )],
                Some(StateVariableKind::Mapping),
            ),
        ],
    }
}

fn schema(object_name: &str) -> Schema {
    let definitions = vec![Definition::Object(ObjectType {
        name: object_name.to_string(),
        fields: vec![
            Field::new("id", FieldType::non_null(FieldType::named("ID"))),
            Field::new("supply", FieldType::named("BigInt")),
        ],
        directives: vec![],
    })];

    assert_ok!(Schema::from_definitions(definitions))
}

#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
}

impl Emit for Recorder {
    fn emit_entity(&mut self, entity: &Entity) -> Result<()> {
        self.calls.push(format!("entity {}", entity.class_name));
        Ok(())
    }

    fn emit_queries(&mut self, queries: &[Query], flags: Flags) -> Result<()> {
        self.calls.push(format!(
            "queries {} mapping={}",
            queries.len(),
            flags.has_mapping_state_variable
        ));
        Ok(())
    }
}

#[test]
fn contract_only_run() {
    let mut generator = Generator::new();
    assert_ok!(generator.add_contract(&token()));

    let output = assert_ok!(generator.finish());

    let query = output.query("balanceOf").unwrap();
    assert_eq!(query.entity_name, "BalanceOf");

    let balances = output.entity("_Balances").unwrap();
    assert_eq!(
        balances.column("value").unwrap().transformer,
        Some(Transformer::Bigint)
    );

    assert_eq!(
        output.flags,
        Flags {
            has_elementary_state_variable: false,
            has_mapping_state_variable: true,
        }
    );

    assert_none!(output.entity(system::FROTHY_ENTITY));
    assert_eq!(output.entities.len(), 2 + system::class_names(false).count());
}

#[test]
fn schema_run_adds_frothy_entity() {
    let mut generator = Generator::new();
    assert_ok!(generator.add_contract(&token()));
    assert_ok!(generator.import_schema(schema("Supply")));

    let output = assert_ok!(generator.finish());

    let names: Vec<_> = output
        .entities
        .iter()
        .map(|entity| entity.class_name.as_str())
        .collect();

    let mut expected = vec!["BalanceOf", "_Balances", "Supply"];
    expected.extend(system::class_names(true));
    assert_eq!(names, expected);
    assert!(output.entity(system::FROTHY_ENTITY).is_some());
}

#[test]
fn duplicate_functions_across_contracts() {
    let mut other = token();
    other.name = "Wrapped".to_string();

    let mut generator = Generator::new();
    assert_ok!(generator.add_contract(&token()));
    assert_ok!(generator.add_contract(&other));

    let output = assert_ok!(generator.finish());
    assert_eq!(output.queries.len(), 2);
    assert_eq!(output.query("balanceOf").unwrap().contract, "Token");
}

#[test]
fn query_entity_colliding_with_schema_object() {
    let mut generator = Generator::new();
    assert_ok!(generator.import_schema(schema("BalanceOf")));

    let err = assert_err!(generator.add_contract(&token()));
    assert!(err.is_name_collision());
    assert_eq!(
        err.to_string(),
        "contract `Token`: name collision: entity class `BalanceOf` is already defined by a schema object type"
    );
}

#[test]
fn failed_function_leaves_no_query() {
    let mut generator = Generator::new();
    assert_ok!(generator.import_schema(schema("BalanceOf")));

    assert_err!(generator.add_contract(&token()));
    assert_none!(generator.queries().get("balanceOf"));
    assert_eq!(generator.queries().queries().len(), 0);
    assert_eq!(generator.queries().flags(), Flags::default());
}

#[test]
fn queries_differing_only_in_case() {
    let contract = Contract {
        name: "Token".to_string(),
        functions: vec![
            function(
                "balanceOf",
                Mode::EthCall,
                vec![Param::new("owner", elementary("address"))],
                vec![Param::new("", elementary("uint256"))],
                None,
            ),
            function(
                "BalanceOf",
                Mode::EthCall,
                vec![
                    Param::new("a", elementary("uint8")),
                    Param::new("b", elementary("uint8")),
                ],
                vec![Param::new("", elementary("bool"))],
                None,
            ),
        ],
    };

    let mut generator = Generator::new();
    let err = assert_err!(generator.add_contract(&contract));
    assert!(err.is_name_collision());
    assert_eq!(
        err.to_string(),
        "contract `Token`: name collision: entity class `BalanceOf` is already defined by a query entity"
    );

    // The first function stays registered with its own entity
    assert!(generator.queries().get("balanceOf").is_some());
    assert_none!(generator.queries().get("BalanceOf"));
    assert!(generator.entities().get("BalanceOf").unwrap().column("owner").is_some());
}

#[test]
fn schema_object_colliding_with_query_entity() {
    let mut generator = Generator::new();
    assert_ok!(generator.add_contract(&token()));

    let err = assert_err!(generator.import_schema(schema("BalanceOf")));
    assert!(err.is_name_collision());
}

#[test]
fn schema_object_colliding_with_system_entity() {
    let mut generator = Generator::new();
    assert_ok!(generator.import_schema(schema("SyncStatus")));

    let err = assert_err!(generator.finish());
    assert!(err.is_name_collision());
}

#[test]
fn only_one_schema_per_run() {
    let mut generator = Generator::new();
    assert_ok!(generator.import_schema(schema("Supply")));

    let err = assert_err!(generator.import_schema(schema("Reserve")));
    assert_eq!(err.to_string(), "an object schema was already imported");
}

#[test]
fn emit_entities_then_queries() {
    let mut generator = Generator::new();
    assert_ok!(generator.add_contract(&token()));
    let output = assert_ok!(generator.finish());

    let mut recorder = Recorder::default();
    assert_ok!(output.emit(&mut recorder));

    let mut expected = vec![
        "entity BalanceOf".to_string(),
        "entity _Balances".to_string(),
    ];
    expected.extend(system::class_names(false).map(|name| format!("entity {name}")));
    expected.push("queries 2 mapping=true".to_string());

    assert_eq!(recorder.calls, expected);
}

#[test]
fn runs_do_not_share_flags() {
    let mut first = Generator::new();
    assert_ok!(first.add_contract(&token()));
    let first = assert_ok!(first.finish());

    let second = assert_ok!(Generator::new().finish());

    assert!(first.flags.has_mapping_state_variable);
    assert_eq!(second.flags, Flags::default());
}

#[test]
fn contract_from_json() {
    let contract: Contract = serde_json::from_str(
        r#"{
            "name": "Registry",
            "functions": [
                {
                    "name": "_owners",
                    "mode": "storage",
                    "stateVariableKind": "mapping",
                    "params": [{ "name": "key0", "type": { "kind": "elementary", "name": "bytes32" } }],
                    "returns": [{
                        "type": {
                            "kind": "container",
                            "key": { "kind": "elementary", "name": "bytes32" },
                            "value": { "kind": "elementary", "name": "address" }
                        }
                    }]
                }
            ]
        }"#,
    )
    .unwrap();

    let mut generator = Generator::new();
    assert_ok!(generator.add_contract(&contract));
    let output = assert_ok!(generator.finish());

    let query = output.query("_owners").unwrap();
    assert_eq!(query.get_query_name, "_getOwners");
    assert_eq!(query.mode, Mode::Storage);
    assert_eq!(query.return_types[0].to_string(), "string");
}
