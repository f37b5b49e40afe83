use crate::Value;
use crate::response::ResponseValue;
use indexmap::IndexMap;
use std::sync::Arc;

/// Converts between the wire representation of a custom scalar and the
/// values callers work with.
///
/// A [`ScalarCodec`] is bound to a scalar name through [`ScalarBindings`]
/// when a [`Schema`](crate::schema::Schema) is built. Every custom scalar
/// reported by introspection must be bound; the built-in scalars (`Boolean`,
/// `Float`, `ID`, `Int`, `String`) always use their built-in behaviour.
pub trait ScalarCodec: std::fmt::Debug + Send + Sync {
    /// Check that an argument value is acceptable for this scalar. Returns a
    /// human-readable reason on rejection.
    ///
    /// For a [`Value::Custom`], this receives the wire literal it carries.
    fn coerce(&self, value: &Value) -> Result<(), String>;

    /// Parse a response value of this scalar.
    fn load(&self, value: &serde_json::Value) -> Result<ResponseValue, String>;
}

/// A [`ScalarCodec`] that accepts any non-list, non-object literal (other than
/// a non-finite float, which has no GraphQL literal form) as an argument and
/// loads any response value unchanged (as
/// [`ResponseValue::Json`]).
#[derive(Clone, Copy, Debug, Default)]
pub struct AnyScalar;
impl ScalarCodec for AnyScalar {
    fn coerce(&self, value: &Value) -> Result<(), String> {
        match value {
            Value::List(_) | Value::Object(_) => Err(format!(
                "expected a scalar literal, found {}",
                value.kind_name(),
            )),
            Value::Float(float) if !float.is_finite() => Err(format!(
                "{float} can not be written as a GraphQL literal",
            )),
            _ => Ok(()),
        }
    }

    fn load(&self, value: &serde_json::Value) -> Result<ResponseValue, String> {
        Ok(ResponseValue::Json(value.clone()))
    }
}

/// The set of [`ScalarCodec`]s to use for the custom scalars of a schema,
/// keyed by scalar name.
#[derive(Clone, Debug, Default)]
pub struct ScalarBindings {
    codecs: IndexMap<String, Arc<dyn ScalarCodec>>,
}
impl ScalarBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `codec` to the scalar named `scalar_name`, replacing any codec
    /// previously bound to that name.
    pub fn bind(
        mut self,
        scalar_name: impl Into<String>,
        codec: impl ScalarCodec + 'static,
    ) -> Self {
        self.codecs.insert(scalar_name.into(), Arc::new(codec));
        self
    }

    /// Shorthand for binding [`AnyScalar`] to `scalar_name`.
    pub fn bind_any(self, scalar_name: impl Into<String>) -> Self {
        self.bind(scalar_name, AnyScalar)
    }

    pub fn contains(&self, scalar_name: &str) -> bool {
        self.codecs.contains_key(scalar_name)
    }

    pub fn get(&self, scalar_name: &str) -> Option<&Arc<dyn ScalarCodec>> {
        self.codecs.get(scalar_name)
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.codecs.keys().map(String::as_str)
    }
}
