use std_util::prelude::*;
use watchgen_core::naming::Names;

#[test]
fn capitalizes_first_character() {
    let names = assert_ok!(Names::new("balanceOf"));

    assert_eq!(names.entity_name, "BalanceOf");
    assert_eq!(names.get_query_name, "getBalanceOf");
    assert_eq!(names.save_query_name, "saveBalanceOf");
}

#[test]
fn leading_underscore_is_kept_on_every_name() {
    let names = assert_ok!(Names::new("_balances"));

    assert_eq!(names.entity_name, "_Balances");
    assert_eq!(names.get_query_name, "_getBalances");
    assert_eq!(names.save_query_name, "_saveBalances");
}

#[test]
fn single_character_identifiers() {
    let names = assert_ok!(Names::new("x"));
    assert_eq!(names.entity_name, "X");
    assert_eq!(names.get_query_name, "getX");

    let names = assert_ok!(Names::new("_x"));
    assert_eq!(names.entity_name, "_X");
    assert_eq!(names.save_query_name, "_saveX");
}

#[test]
fn already_capitalized() {
    let names = assert_ok!(Names::new("Owner"));
    assert_eq!(names.entity_name, "Owner");
    assert_eq!(names.get_query_name, "getOwner");
}

#[test]
fn derivation_is_deterministic() {
    for raw in ["totalSupply", "_allowances", "name", "_x", "decimals"] {
        let first = assert_ok!(Names::new(raw));
        let second = assert_ok!(Names::new(raw));
        assert_eq!(first, second);
    }
}

#[test]
fn identifiers_without_a_stem_are_rejected() {
    for raw in ["", "_"] {
        let err = assert_err!(Names::new(raw));
        assert!(err.is_invalid_name(), "{raw:?}: {err}");
    }
}
