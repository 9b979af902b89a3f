use indexmap::IndexMap;

/// A runtime GraphQL value: a coerced input value (variables, arguments) or a
/// resolved output value (data fetcher results, execution result data).
///
/// Unlike the literal values in an [`ast::Node`](crate::ast::Node) tree,
/// [`Value`]s carry no source location and have already been checked against
/// their GraphQL type.
///
/// The serde representation is "untagged" so that a [`Value`] maps one-to-one
/// onto JSON. Note that [`Value::Enum`] serializes as a string, and
/// deserializing a JSON string always produces a [`Value::String`].
#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    Enum(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}
impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        if let Self::Int(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        if let Self::List(values) = self {
            Some(values)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        if let Self::Object(entries) = self {
            Some(entries)
        } else {
            None
        }
    }

    /// Returns the inner string of either a [`Value::String`] or a
    /// [`Value::Enum`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::Enum(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Convenience for building [`Value::Object`]s in tests and resolvers.
    pub fn object<K: Into<String>>(
        entries: impl IntoIterator<Item = (K, Value)>,
    ) -> Self {
        Self::Object(
            entries.into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// A short name for the kind of this value, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "Boolean",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::String(_) => "String",
            Self::Enum(_) => "Enum",
            Self::List(_) => "List",
            Self::Object(_) => "Object",
        }
    }
}
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Enum(e) => write!(f, "{e}"),
            Self::List(values) => {
                write!(f, "[")?;
                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            },
            Self::Object(entries) => {
                write!(f, "{{")?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
        }
    }
}
impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value as i64)
    }
}
impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl std::convert::From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}
