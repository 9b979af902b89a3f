use crate::ast::Comment;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::ast::OperationType;
use crate::ast::parse_document;
use crate::loc;

fn sample_document() -> Node {
    parse_document(
        "query GetUser($id: ID!, $limit: Int = 10) {
            user(id: $id) {
                name
                friends(first: $limit) { name }
                ...UserBits
            }
        }

        fragment UserBits on User {
            email
        }",
        None,
    ).expect("document parses")
}

#[test]
fn transform_never_mutates_the_receiver() {
    let original = sample_document();
    let snapshot = original.clone();

    let transformed = original.transform(|builder| {
        builder
            .comment(Comment::new("added"))
            .additional_data("source", "test")
            .location(Some(loc::SourceLocation::new(99, 1)))
    });

    assert_eq!(original, snapshot);
    assert_eq!(transformed.comments().len(), 1);
    assert_eq!(
        transformed.additional_data().get("source").map(|s| s.as_str()),
        Some("test"),
    );
    assert_ne!(transformed, original);

    // Only metadata was changed, so the semantic content is the same.
    assert!(transformed.is_equal_to(&original));
}

#[test]
fn transform_can_replace_the_payload() {
    let original = Node::field("name", vec![], None);
    let renamed = original.transform(|builder| {
        let NodeKind::Field(field) = builder.current_kind().clone() else {
            panic!("expected a field");
        };
        builder.kind(NodeKind::Field(crate::ast::Field {
            alias: Some("fullName".to_string()),
            ..field
        }))
    });

    assert_eq!(original.as_field().unwrap().alias, None);
    assert_eq!(renamed.as_field().unwrap().response_key(), "fullName");
    assert!(!renamed.is_equal_to(&original));
}

#[test]
fn deep_copy_is_equal_to_and_independent() {
    let original = sample_document();
    let copy = original.deep_copy();

    assert!(copy.is_equal_to(&original));
    assert!(original.is_equal_to(&copy));

    let original_ptrs = collect_ptrs(&original);
    let copy_ptrs = collect_ptrs(&copy);
    assert_eq!(original_ptrs.len(), copy_ptrs.len());
    for ptr in &copy_ptrs {
        assert!(!original_ptrs.contains(ptr));
    }
}

fn collect_ptrs(node: &Node) -> Vec<*const Node> {
    let mut ptrs = vec![node as *const Node];
    for child in node.children() {
        ptrs.extend(collect_ptrs(child));
    }
    ptrs
}

#[test]
fn is_equal_to_ignores_locations() {
    let a = parse_document("{ a(x: 1) }", None).unwrap();
    let b = parse_document("\n\n   {\n a(x: 1)\n }", None).unwrap();

    assert_ne!(a, b);
    assert!(a.is_equal_to(&b));
}

#[test]
fn is_equal_to_compares_literal_values() {
    let a = parse_document("{ a(x: 1) }", None).unwrap();
    let b = parse_document("{ a(x: 2) }", None).unwrap();
    let c = parse_document("{ a(x: \"1\") }", None).unwrap();

    assert!(!a.is_equal_to(&b));
    assert!(!a.is_equal_to(&c));
}

#[test]
fn children_are_in_stored_order() {
    let field = Node::field(
        "user",
        vec![
            Node::argument("a", Node::int_value(1)),
            Node::argument("b", Node::int_value(2)),
        ],
        Some(Node::selection_set(vec![Node::field("name", vec![], None)])),
    );

    let kinds = field.children()
        .iter()
        .map(|child| child.kind_name())
        .collect::<Vec<_>>();
    assert_eq!(kinds, vec!["Argument", "Argument", "SelectionSet"]);

    let named = field.named_children();
    assert_eq!(named.roles().collect::<Vec<_>>(), vec!["arguments", "selection_set"]);
    assert_eq!(named.children("arguments").len(), 2);
    assert!(named.child("selection_set").is_some());
    assert!(named.children("directives").is_empty());
}

#[test]
fn leaf_values_have_no_children() {
    for leaf in [
        Node::null_value(),
        Node::int_value(1),
        Node::float_value(1.5),
        Node::string_value("s"),
        Node::boolean_value(true),
        Node::enum_value("RED"),
        Node::variable_reference("v"),
        Node::type_name("Int"),
    ] {
        assert!(leaf.children().is_empty(), "{} has children", leaf.kind_name());
        assert!(leaf.named_children().is_empty());
    }
}

#[test]
fn non_null_type_rejects_non_null_inner() {
    let non_null_int = Node::non_null_type(Node::type_name("Int")).unwrap();
    assert!(Node::non_null_type(non_null_int).is_err());

    let list = Node::list_type(Node::type_name("Int"));
    assert!(Node::non_null_type(list).is_ok());
}

#[test]
fn document_helpers_find_operations_and_fragments() {
    let doc_node = sample_document();
    let doc = doc_node.as_document().unwrap();

    let ops = doc.operations().collect::<Vec<_>>();
    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0].1.operation, OperationType::Query);
    assert_eq!(ops[0].1.name.as_deref(), Some("GetUser"));

    let frags = doc.fragments().collect::<Vec<_>>();
    assert_eq!(frags.len(), 1);
    assert_eq!(frags[0].1.type_condition_name(), "User");
}
