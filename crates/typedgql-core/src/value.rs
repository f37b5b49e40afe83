use indexmap::IndexMap;

/// A literal argument value attached to a
/// [`FieldSelection`](crate::operation::FieldSelection).
///
/// This is a closed set of literal kinds. Serialization to wire text is
/// implemented in [`crate::serialize`] and argument type checking in
/// [`crate::validation`].
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Custom(CustomScalarValue),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    /// Wrap a value of some custom scalar type, recording its wire literal.
    pub fn custom(value: &impl GraphQLScalarValue) -> Self {
        Self::Custom(CustomScalarValue {
            literal: Box::new(value.dump()),
            scalar_name: value.scalar_name().to_string(),
        })
    }

    /// An enum member, serialized as its bare name.
    pub fn enum_value(member_name: impl Into<String>) -> Self {
        Self::Enum(member_name.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// A short, human-readable name for the kind of literal this is. Used in
    /// diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Boolean",
            Self::Custom(_) => "custom scalar",
            Self::Enum(_) => "enum value",
            Self::Float(_) => "Float",
            Self::Int(_) => "Int",
            Self::List(_) => "list",
            Self::Null => "null",
            Self::Object(_) => "input object",
            Self::String(_) => "String",
        }
    }

    pub fn object<K: Into<String>, V: Into<Value>>(
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Self::Object(
            entries.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect()
        )
    }
}

/// A value of some custom (non-builtin) scalar type, carried alongside the
/// wire literal it dumps to.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomScalarValue {
    pub(crate) literal: Box<Value>,
    pub(crate) scalar_name: String,
}
impl CustomScalarValue {
    pub fn new(scalar_name: impl Into<String>, literal: Value) -> Self {
        Self {
            literal: Box::new(literal),
            scalar_name: scalar_name.into(),
        }
    }

    /// The literal written to the wire for this value.
    pub fn literal(&self) -> &Value {
        &self.literal
    }

    /// The name of the schema scalar type this value belongs to.
    pub fn scalar_name(&self) -> &str {
        self.scalar_name.as_str()
    }
}

/// Implemented by Rust types that represent values of a custom GraphQL
/// scalar, so they can be passed as field arguments via [`Value::custom`].
pub trait GraphQLScalarValue {
    /// The schema name of the scalar this value belongs to.
    fn scalar_name(&self) -> &str;

    /// Convert this value to the literal that represents it on the wire.
    fn dump(&self) -> Value;
}

impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
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
impl std::convert::From<CustomScalarValue> for Value {
    fn from(value: CustomScalarValue) -> Self {
        Self::Custom(value)
    }
}
impl<T: Into<Value>> std::convert::From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}
impl<T: Into<Value>> std::convert::From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}
