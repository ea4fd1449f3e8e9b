//! Tests for key path resolution

use pigeon_config::path::{parse_path, resolve};
use pigeon_config::{ConfigAdapter, Mapping, Value, YamlAdapter};
use rstest::rstest;

fn document(source: &str) -> Mapping {
    YamlAdapter::new().decode(source.as_bytes()).unwrap()
}

#[test]
fn test_resolve_three_levels() {
    let doc = document("a:\n  b:\n    c: 5\n");
    assert_eq!(resolve("a.b.c", &doc), Some(&Value::Int(5)));
}

#[test]
fn test_resolve_missing_leaf() {
    let doc = document("a:\n  b: {}\n");
    assert_eq!(resolve("a.b.c", &doc), None);
}

#[test]
fn test_resolve_through_scalar() {
    let doc = document("a: 5\n");
    assert_eq!(resolve("a.b.c", &doc), None);
    assert_eq!(resolve("a.b", &doc), None);
}

#[test]
fn test_resolve_does_not_fall_back_to_sibling() {
    // `a` is a scalar; `b` must not be looked up at the same level instead.
    let doc = document("a: 5\nb: 7\n");
    assert_eq!(resolve("a.b", &doc), None);
}

#[test]
fn test_resolve_sequence_terminal() {
    let doc = document("hosts:\n  - alpha\n  - beta\n");
    assert_eq!(
        resolve("hosts", &doc),
        Some(&Value::Sequence(vec![Value::from("alpha"), Value::from("beta")]))
    );
}

#[test]
fn test_resolve_does_not_index_sequences() {
    let doc = document("hosts:\n  - name: alpha\n");
    assert_eq!(resolve("hosts.0.name", &doc), None);
}

#[rstest]
#[case::empty_path("")]
#[case::mapping_terminal("server")]
#[case::null_terminal("server.password")]
#[case::empty_string_terminal("server.user")]
#[case::trailing_dot("server.host.")]
#[case::leading_dot(".server.host")]
#[case::double_dot("server..host")]
fn test_resolve_not_found(#[case] path: &str) {
    let doc = document("server:\n  host: localhost\n  user: \"\"\n  password: ~\n");
    assert_eq!(resolve(path, &doc), None);
}

#[test]
fn test_parse_path_keeps_empty_segments() {
    assert_eq!(parse_path("a..b"), vec!["a", "", "b"]);
}
