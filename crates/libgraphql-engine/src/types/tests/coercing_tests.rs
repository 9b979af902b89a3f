use crate::ast::Node;
use crate::types::BooleanCoercing;
use crate::types::Coercing;
use crate::types::FloatCoercing;
use crate::types::IdCoercing;
use crate::types::IntCoercing;
use crate::types::LiteralPassthroughCoercing;
use crate::types::StringCoercing;
use crate::Value;

#[test]
fn int_is_limited_to_32_bits() {
    assert_eq!(IntCoercing.parse_value(&Value::Int(i32::MAX as i64)), Ok(Value::Int(i32::MAX as i64)));
    assert!(IntCoercing.parse_value(&Value::Int(i32::MAX as i64 + 1)).is_err());
    assert!(IntCoercing.parse_literal(&Node::int_value(i32::MIN as i64 - 1)).is_err());
    assert!(IntCoercing.parse_value(&Value::Float(1.0)).is_err());
}

#[test]
fn int_serializes_integral_floats_and_booleans() {
    assert_eq!(IntCoercing.serialize(&Value::Float(3.0)), Ok(Value::Int(3)));
    assert_eq!(IntCoercing.serialize(&Value::Boolean(true)), Ok(Value::Int(1)));
    assert!(IntCoercing.serialize(&Value::Float(3.5)).is_err());
    assert!(IntCoercing.serialize(&Value::from("3")).is_err());
}

#[test]
fn float_widens_integers() {
    assert_eq!(FloatCoercing.parse_literal(&Node::int_value(2)), Ok(Value::Float(2.0)));
    assert_eq!(FloatCoercing.parse_value(&Value::Int(2)), Ok(Value::Float(2.0)));
    assert!(FloatCoercing.parse_value(&Value::Float(f64::NAN)).is_err());
    assert!(FloatCoercing.parse_literal(&Node::string_value("2.0")).is_err());
}

#[test]
fn string_serializes_scalars_but_only_accepts_strings() {
    assert_eq!(StringCoercing.serialize(&Value::Int(5)), Ok(Value::from("5")));
    assert_eq!(StringCoercing.serialize(&Value::Enum("RED".to_string())), Ok(Value::from("RED")));
    assert!(StringCoercing.parse_value(&Value::Int(5)).is_err());
    assert!(StringCoercing.parse_literal(&Node::int_value(5)).is_err());
}

#[test]
fn boolean_accepts_only_booleans() {
    assert_eq!(BooleanCoercing.parse_literal(&Node::boolean_value(false)), Ok(Value::Boolean(false)));
    assert!(BooleanCoercing.parse_value(&Value::Int(1)).is_err());
    assert!(BooleanCoercing.serialize(&Value::from("true")).is_err());
}

#[test]
fn id_accepts_strings_and_integers_as_strings() {
    assert_eq!(IdCoercing.parse_literal(&Node::int_value(42)), Ok(Value::from("42")));
    assert_eq!(IdCoercing.parse_value(&Value::from("abc")), Ok(Value::from("abc")));
    assert!(IdCoercing.parse_literal(&Node::float_value(4.2)).is_err());
}

#[test]
fn passthrough_converts_literals_structurally() {
    let literal = Node::object_value([
        ("tags", Node::list_value(vec![Node::string_value("a"), Node::enum_value("B")])),
        ("count", Node::int_value(2)),
        ("missing", Node::null_value()),
    ]);
    assert_eq!(
        LiteralPassthroughCoercing.parse_literal(&literal),
        Ok(Value::object([
            ("tags", Value::List(vec![Value::from("a"), Value::Enum("B".to_string())])),
            ("count", Value::Int(2)),
            ("missing", Value::Null),
        ])),
    );
}
