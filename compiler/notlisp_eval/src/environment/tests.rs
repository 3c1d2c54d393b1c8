use pretty_assertions::assert_eq;

use super::*;

#[test]
fn unbound_lookup_is_an_error_value() {
    let env = Environment::new();
    assert_eq!(env.get("x").to_string(), "Error: unbound symbol 'x'");
    assert!(env.lookup("x").is_none());
}

#[test]
fn put_stores_a_private_copy() {
    let mut env = Environment::new();
    let mut value = Value::qexpr().with(Value::number(1));
    env.put("xs", &value);
    value.push(Value::number(2));

    assert_eq!(env.get("xs").to_string(), "{1}");
    assert_eq!(value.to_string(), "{1 2}");
}

#[test]
fn get_returns_a_copy() {
    let mut env = Environment::new();
    env.put("xs", &Value::qexpr().with(Value::number(1)));
    let mut copy = env.get("xs");
    copy.push(Value::number(9));
    assert_eq!(env.get("xs").to_string(), "{1}");
}

#[test]
fn rebinding_overwrites_in_place() {
    let mut env = Environment::new();
    env.put("a", &Value::number(1));
    env.put("b", &Value::number(2));
    env.put("a", &Value::number(3));

    assert_eq!(env.get("a"), Value::number(3));
    assert_eq!(env.len(), 2);
    assert_eq!(env.names().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn with_builtins_registers_every_alias() {
    let env = Environment::with_builtins();
    for builtin in Builtin::ALL {
        for alias in builtin.aliases() {
            assert_eq!(env.lookup(alias), Some(&Value::function(builtin)), "{alias}");
        }
    }
    assert_eq!(env.get("add"), env.get("+"));
    assert!(!env.contains("lambda"));
}

#[test]
fn empty_environment() {
    let env = Environment::default();
    assert!(env.is_empty());
    assert_eq!(env.len(), 0);
}
