use crate::ast;
use crate::ast::NodeKind;
use crate::Value;
use indexmap::IndexMap;

/// The coercion rules of a scalar type.
///
/// - `serialize` turns a resolved value into the scalar's result form.
/// - `parse_value` accepts a runtime input value (e.g. a variable).
/// - `parse_literal` accepts a literal value written in a document. Variable
///   references are resolved before this is called, so implementations only
///   ever see constant literals.
pub trait Coercing: Send + Sync {
    fn serialize(&self, value: &Value) -> Result<Value, CoercingError>;
    fn parse_value(&self, value: &Value) -> Result<Value, CoercingError>;
    fn parse_literal(&self, literal: &ast::Node) -> Result<Value, CoercingError>;
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct CoercingError {
    pub message: String,
}
impl CoercingError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

fn i32_range_checked(value: i64) -> Result<Value, CoercingError> {
    if i32::try_from(value).is_ok() {
        Ok(Value::Int(value))
    } else {
        Err(CoercingError::new(format!(
            "Int cannot represent non 32-bit signed integer value: {value}",
        )))
    }
}

/// The built-in `Int` scalar: a signed 32-bit integer.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntCoercing;
impl Coercing for IntCoercing {
    fn serialize(&self, value: &Value) -> Result<Value, CoercingError> {
        match value {
            Value::Int(i) => i32_range_checked(*i),
            Value::Float(f) if f.fract() == 0.0 && f.is_finite() =>
                i32_range_checked(*f as i64),
            Value::Boolean(b) => Ok(Value::Int(*b as i64)),
            _ => Err(CoercingError::new(format!(
                "Int cannot represent non-integer value: {value}",
            ))),
        }
    }

    fn parse_value(&self, value: &Value) -> Result<Value, CoercingError> {
        match value {
            Value::Int(i) => i32_range_checked(*i),
            _ => Err(CoercingError::new(format!(
                "Int cannot represent non-integer value: {value}",
            ))),
        }
    }

    fn parse_literal(&self, literal: &ast::Node) -> Result<Value, CoercingError> {
        match literal.kind() {
            NodeKind::IntValue(int) => i32_range_checked(int.value),
            _ => Err(CoercingError::new(format!(
                "Int cannot represent non-integer value: {}",
                ast::print_value(literal),
            ))),
        }
    }
}

/// The built-in `Float` scalar. Integer inputs are widened.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloatCoercing;
impl Coercing for FloatCoercing {
    fn serialize(&self, value: &Value) -> Result<Value, CoercingError> {
        match value {
            Value::Boolean(b) => Ok(Value::Float(if *b { 1.0 } else { 0.0 })),
            _ => self.parse_value(value),
        }
    }

    fn parse_value(&self, value: &Value) -> Result<Value, CoercingError> {
        match value {
            Value::Int(i) => Ok(Value::Float(*i as f64)),
            Value::Float(f) if f.is_finite() => Ok(Value::Float(*f)),
            _ => Err(CoercingError::new(format!(
                "Float cannot represent non numeric value: {value}",
            ))),
        }
    }

    fn parse_literal(&self, literal: &ast::Node) -> Result<Value, CoercingError> {
        match literal.kind() {
            NodeKind::IntValue(int) => Ok(Value::Float(int.value as f64)),
            NodeKind::FloatValue(float) => Ok(Value::Float(float.value)),
            _ => Err(CoercingError::new(format!(
                "Float cannot represent non numeric value: {}",
                ast::print_value(literal),
            ))),
        }
    }
}

/// The built-in `String` scalar.
#[derive(Clone, Copy, Debug, Default)]
pub struct StringCoercing;
impl Coercing for StringCoercing {
    fn serialize(&self, value: &Value) -> Result<Value, CoercingError> {
        match value {
            Value::String(s) | Value::Enum(s) => Ok(Value::String(s.clone())),
            Value::Int(_) | Value::Float(_) | Value::Boolean(_) =>
                Ok(Value::String(value.to_string())),
            _ => Err(CoercingError::new(format!(
                "String cannot represent value: {value}",
            ))),
        }
    }

    fn parse_value(&self, value: &Value) -> Result<Value, CoercingError> {
        match value {
            Value::String(s) => Ok(Value::String(s.clone())),
            _ => Err(CoercingError::new(format!(
                "String cannot represent a non string value: {value}",
            ))),
        }
    }

    fn parse_literal(&self, literal: &ast::Node) -> Result<Value, CoercingError> {
        match literal.kind() {
            NodeKind::StringValue(string) => Ok(Value::String(string.value.clone())),
            _ => Err(CoercingError::new(format!(
                "String cannot represent a non string value: {}",
                ast::print_value(literal),
            ))),
        }
    }
}

/// The built-in `Boolean` scalar.
#[derive(Clone, Copy, Debug, Default)]
pub struct BooleanCoercing;
impl Coercing for BooleanCoercing {
    fn serialize(&self, value: &Value) -> Result<Value, CoercingError> {
        self.parse_value(value)
    }

    fn parse_value(&self, value: &Value) -> Result<Value, CoercingError> {
        match value {
            Value::Boolean(b) => Ok(Value::Boolean(*b)),
            _ => Err(CoercingError::new(format!(
                "Boolean cannot represent a non boolean value: {value}",
            ))),
        }
    }

    fn parse_literal(&self, literal: &ast::Node) -> Result<Value, CoercingError> {
        match literal.kind() {
            NodeKind::BooleanValue(boolean) => Ok(Value::Boolean(boolean.value)),
            _ => Err(CoercingError::new(format!(
                "Boolean cannot represent a non boolean value: {}",
                ast::print_value(literal),
            ))),
        }
    }
}

/// The built-in `ID` scalar. Accepts strings and integers, always produces a
/// string.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdCoercing;
impl Coercing for IdCoercing {
    fn serialize(&self, value: &Value) -> Result<Value, CoercingError> {
        self.parse_value(value)
    }

    fn parse_value(&self, value: &Value) -> Result<Value, CoercingError> {
        match value {
            Value::String(s) => Ok(Value::String(s.clone())),
            Value::Int(i) => Ok(Value::String(i.to_string())),
            _ => Err(CoercingError::new(format!(
                "ID cannot represent value: {value}",
            ))),
        }
    }

    fn parse_literal(&self, literal: &ast::Node) -> Result<Value, CoercingError> {
        match literal.kind() {
            NodeKind::StringValue(string) => Ok(Value::String(string.value.clone())),
            NodeKind::IntValue(int) => Ok(Value::String(int.value.to_string())),
            _ => Err(CoercingError::new(format!(
                "ID cannot represent a non-string and non-integer value: {}",
                ast::print_value(literal),
            ))),
        }
    }
}

/// Coercion for custom scalars that have no wiring of their own: any value is
/// accepted as-is, and literals are converted structurally.
#[derive(Clone, Copy, Debug, Default)]
pub struct LiteralPassthroughCoercing;
impl Coercing for LiteralPassthroughCoercing {
    fn serialize(&self, value: &Value) -> Result<Value, CoercingError> {
        Ok(value.clone())
    }

    fn parse_value(&self, value: &Value) -> Result<Value, CoercingError> {
        Ok(value.clone())
    }

    fn parse_literal(&self, literal: &ast::Node) -> Result<Value, CoercingError> {
        const_literal_to_value(literal)
    }
}

fn const_literal_to_value(literal: &ast::Node) -> Result<Value, CoercingError> {
    Ok(match literal.kind() {
        NodeKind::NullValue(_) => Value::Null,
        NodeKind::IntValue(int) => Value::Int(int.value),
        NodeKind::FloatValue(float) => Value::Float(float.value),
        NodeKind::StringValue(string) => Value::String(string.value.clone()),
        NodeKind::BooleanValue(boolean) => Value::Boolean(boolean.value),
        NodeKind::EnumValue(enum_val) => Value::Enum(enum_val.name.clone()),
        NodeKind::ListValue(list) => Value::List(
            list.values.iter()
                .map(const_literal_to_value)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        NodeKind::ObjectValue(obj) => Value::Object(
            obj.field_entries()
                .map(|(name, value)| Ok((name.to_string(), const_literal_to_value(value)?)))
                .collect::<Result<IndexMap<_, _>, CoercingError>>()?,
        ),
        _ => return Err(CoercingError::new(format!(
            "Expected a constant literal value, found {}",
            literal.kind_name(),
        ))),
    })
}
