use crate::ast::Node;

#[derive(Clone, Debug, PartialEq)]
pub struct NullValue;

#[derive(Clone, Debug, PartialEq)]
pub struct IntValue {
    pub value: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue {
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StringValue {
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue {
    pub value: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListValue {
    pub values: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue {
    /// [`ObjectField`] nodes.
    pub fields: Vec<Node>,
}
impl ObjectValue {
    pub fn field_entries(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.fields.iter()
            .filter_map(|node| node.as_object_field())
            .map(|field| (field.name.as_str(), field.value.as_ref()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub name: String,
    pub value: Box<Node>,
}

/// A `$name` reference to an operation variable.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableReference {
    pub name: String,
}
