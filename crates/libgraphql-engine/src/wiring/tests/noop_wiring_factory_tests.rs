use crate::test_utils::pets_schema;
use crate::wiring::FieldWiringEnvironment;
use crate::wiring::InterfaceWiringEnvironment;
use crate::wiring::NoopWiringFactory;
use crate::wiring::ScalarWiringEnvironment;
use crate::wiring::UnionWiringEnvironment;
use crate::wiring::WiringFactory;

#[test]
fn provides_nothing() {
    let schema = pets_schema();
    let factory = NoopWiringFactory;

    let dog = schema.get_type("Dog").and_then(|t| t.as_object()).unwrap();
    let field_env = FieldWiringEnvironment {
        field_definition: dog.fields().get("name").unwrap(),
        parent_type: dog,
    };
    assert!(!factory.provides_data_fetcher(&field_env));
    assert!(factory.default_data_fetcher(&field_env).is_none());

    let pet = schema.get_type("Pet").and_then(|t| t.as_interface()).unwrap();
    assert!(!factory.provides_type_resolver_for_interface(&InterfaceWiringEnvironment {
        interface_type: pet,
    }));

    let cat_or_dog = schema.get_type("CatOrDog").and_then(|t| t.as_union()).unwrap();
    assert!(!factory.provides_type_resolver_for_union(&UnionWiringEnvironment {
        union_type: cat_or_dog,
    }));

    let string = schema.get_type("String").and_then(|t| t.as_scalar()).unwrap();
    assert!(!factory.provides_scalar(&ScalarWiringEnvironment { scalar_type: string }));
}

#[test]
#[should_panic(expected = "NoopWiringFactory was asked for a scalar")]
fn get_after_provides_false_panics() {
    let schema = pets_schema();
    let string = schema.get_type("String").and_then(|t| t.as_scalar()).unwrap();
    let _ = NoopWiringFactory.get_scalar(&ScalarWiringEnvironment { scalar_type: string });
}
