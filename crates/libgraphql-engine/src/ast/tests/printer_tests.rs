use crate::ast::Node;
use crate::ast::print_type;
use crate::ast::print_value;

#[test]
fn prints_scalar_literals() {
    assert_eq!(print_value(&Node::null_value()), "null");
    assert_eq!(print_value(&Node::int_value(-3)), "-3");
    assert_eq!(print_value(&Node::float_value(1.5)), "1.5");
    assert_eq!(print_value(&Node::float_value(2.0)), "2.0");
    assert_eq!(print_value(&Node::string_value("hello")), "\"hello\"");
    assert_eq!(print_value(&Node::string_value("a\"b")), "\"a\\\"b\"");
    assert_eq!(print_value(&Node::boolean_value(false)), "false");
    assert_eq!(print_value(&Node::enum_value("RED")), "RED");
    assert_eq!(print_value(&Node::variable_reference("id")), "$id");
}

#[test]
fn prints_compound_literals() {
    let list = Node::list_value(vec![Node::int_value(1), Node::int_value(2)]);
    assert_eq!(print_value(&list), "[1, 2]");

    let obj = Node::object_value([
        ("a", Node::int_value(1)),
        ("b", list),
    ]);
    assert_eq!(print_value(&obj), "{a: 1, b: [1, 2]}");
}

#[test]
fn prints_types() {
    let annot = Node::non_null_type(Node::list_type(
        Node::non_null_type(Node::type_name("Int")).unwrap(),
    )).unwrap();
    assert_eq!(print_type(&annot), "[Int!]!");
}
