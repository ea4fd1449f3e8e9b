//! Tests for environment placeholder expansion

use std::collections::HashMap;

use pigeon_config::env::{expand_mapping, expand_string, expand_value};
use pigeon_config::{Environment, Mapping, ProcessEnv, Value};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[rstest]
#[case::set("${NAME}", "foo")]
#[case::set_with_default("${NAME||bar}", "foo")]
#[case::unset("${OTHER}", "${OTHER}")]
#[case::unset_with_default("${OTHER||bar}", "bar")]
#[case::unset_with_path_default("${OTHER||/etc/app.d}", "/etc/app.d")]
#[case::unset_with_empty_default("${OTHER||}", "")]
#[case::plain("plain", "plain")]
#[case::embedded("prefix-${NAME}", "prefix-${NAME}")]
#[case::trailing_text("${NAME}-suffix", "${NAME}-suffix")]
#[case::two_placeholders("${NAME}${NAME}", "${NAME}${NAME}")]
#[case::single_char_name("${N}", "${N}")]
#[case::leading_digit("${9NAME}", "${9NAME}")]
#[case::underscore_name("${_NAME_2}", "under")]
#[case::single_pipe("${NAME|bar}", "${NAME|bar}")]
fn test_expand_string(#[case] input: &str, #[case] expected: &str) {
    let env = env(&[("NAME", "foo"), ("_NAME_2", "under")]);
    assert_eq!(expand_string(input, &env), expected);
}

#[test]
fn test_expand_value_nested() {
    let env = env(&[("NAME", "foo")]);

    let mut inner = Mapping::new();
    inner.insert("c".to_string(), Value::from("${NAME}"));
    let mut root = Mapping::new();
    root.insert("a".to_string(), Value::from("${NAME}"));
    root.insert(
        "b".to_string(),
        Value::Sequence(vec![Value::from("${NAME}"), Value::Mapping(inner)]),
    );

    let mut expected_inner = Mapping::new();
    expected_inner.insert("c".to_string(), Value::from("foo"));
    let mut expected = Mapping::new();
    expected.insert("a".to_string(), Value::from("foo"));
    expected.insert(
        "b".to_string(),
        Value::Sequence(vec![Value::from("foo"), Value::Mapping(expected_inner)]),
    );

    assert_eq!(expand_mapping(root, &env), expected);
}

#[test]
fn test_expand_value_deep_sequences() {
    let env = env(&[("NAME", "foo")]);
    let value = Value::Sequence(vec![Value::Sequence(vec![Value::Sequence(vec![
        Value::from("${NAME}"),
        Value::Int(3),
    ])])]);
    let expected = Value::Sequence(vec![Value::Sequence(vec![Value::Sequence(vec![
        Value::from("foo"),
        Value::Int(3),
    ])])]);
    assert_eq!(expand_value(value, &env), expected);
}

#[test]
fn test_expand_keys_untouched() {
    let env = env(&[("NAME", "foo")]);
    let mut root = Mapping::new();
    root.insert("${NAME}".to_string(), Value::Int(1));
    let expanded = expand_mapping(root, &env);
    assert!(expanded.contains_key("${NAME}"));
}

#[test]
fn test_process_env_lookup() {
    // SAFETY: test-only env var manipulation with a name no other test uses.
    unsafe { std::env::set_var("PIGEON_ENV_TEST_PROCESS", "from-process") };
    assert_eq!(
        expand_string("${PIGEON_ENV_TEST_PROCESS}", &ProcessEnv),
        "from-process"
    );
    assert_eq!(
        ProcessEnv.var("PIGEON_ENV_TEST_PROCESS"),
        Some("from-process".to_string())
    );
    unsafe { std::env::remove_var("PIGEON_ENV_TEST_PROCESS") };
}

#[test]
fn test_process_env_missing() {
    unsafe { std::env::remove_var("PIGEON_ENV_TEST_MISSING") };
    assert_eq!(
        expand_string("${PIGEON_ENV_TEST_MISSING}", &ProcessEnv),
        "${PIGEON_ENV_TEST_MISSING}"
    );
    assert_eq!(
        expand_string("${PIGEON_ENV_TEST_MISSING||fallback}", &ProcessEnv),
        "fallback"
    );
}
