use crate::ast::AstError;
use crate::ast::Node;
use crate::ast::NodeChildrenContainer;

#[test]
fn null_value_rejects_any_children() {
    let null = Node::null_value();
    let result = null.with_new_children(
        NodeChildrenContainer::new().with_child("value", Node::int_value(1)),
    );

    assert_eq!(result, Err(AstError::UnexpectedChildRole {
        node_kind: "NullValue",
        role: "value".to_string(),
    }));
}

#[test]
fn leaf_accepts_an_empty_container() {
    let int = Node::int_value(7);
    let result = int.with_new_children(NodeChildrenContainer::new()).unwrap();
    assert_eq!(result, int);
}

#[test]
fn argument_replaces_its_value() {
    let arg = Node::argument("id", Node::int_value(1));
    let replaced = arg.with_new_children(
        NodeChildrenContainer::new().with_child("value", Node::string_value("x")),
    ).unwrap();

    assert_eq!(replaced.as_argument().unwrap().name, "id");
    assert!(replaced.as_argument().unwrap().value.is_equal_to(&Node::string_value("x")));
    // The receiver is unchanged.
    assert!(arg.as_argument().unwrap().value.is_equal_to(&Node::int_value(1)));
}

#[test]
fn single_child_role_rejects_multiple_nodes() {
    let arg = Node::argument("id", Node::int_value(1));
    let result = arg.with_new_children(
        NodeChildrenContainer::new().with_children(
            "value",
            vec![Node::int_value(1), Node::int_value(2)],
        ),
    );

    assert_eq!(result, Err(AstError::TooManyChildren {
        count: 2,
        node_kind: "Argument",
        role: "value",
    }));
}

#[test]
fn required_role_must_be_present() {
    let arg = Node::argument("id", Node::int_value(1));
    let result = arg.with_new_children(NodeChildrenContainer::new());

    assert_eq!(result, Err(AstError::MissingChild {
        node_kind: "Argument",
        role: "value",
    }));
}

#[test]
fn wrong_child_kind_is_rejected() {
    let sel_set = Node::selection_set(vec![]);
    let result = sel_set.with_new_children(
        NodeChildrenContainer::new().with_child("selections", Node::int_value(1)),
    );

    assert_eq!(result, Err(AstError::UnexpectedChildKind {
        child_kind: "IntValue",
        node_kind: "SelectionSet",
        role: "selections",
    }));
}

#[test]
fn non_null_type_rejects_non_null_child() {
    let non_null = Node::non_null_type(Node::type_name("Int")).unwrap();
    let result = non_null.with_new_children(
        NodeChildrenContainer::new().with_child("type", non_null.clone()),
    );

    assert!(matches!(result, Err(AstError::UnexpectedChildKind {
        child_kind: "NonNullType",
        ..
    })));
}

#[test]
fn default_value_must_be_constant() {
    let var_def = Node::variable_definition("v", Node::type_name("Int"), None);
    let result = var_def.with_new_children(
        NodeChildrenContainer::new()
            .with_child("type", Node::type_name("Int"))
            .with_child("default_value", Node::variable_reference("other")),
    );

    assert!(matches!(result, Err(AstError::UnexpectedChildKind {
        role: "default_value",
        ..
    })));
}

#[test]
fn named_children_round_trip_through_with_new_children() {
    let field = Node::field(
        "user",
        vec![Node::argument("id", Node::int_value(4))],
        Some(Node::selection_set(vec![Node::field("name", vec![], None)])),
    );

    let rebuilt = field.with_new_children(field.named_children()).unwrap();
    assert_eq!(rebuilt, field);
}

#[test]
fn absent_roles_are_cleared() {
    let field = Node::field(
        "user",
        vec![Node::argument("id", Node::int_value(4))],
        None,
    );

    let rebuilt = field.with_new_children(NodeChildrenContainer::new()).unwrap();
    assert!(rebuilt.as_field().unwrap().arguments.is_empty());
    assert_eq!(field.as_field().unwrap().arguments.len(), 1);
}
