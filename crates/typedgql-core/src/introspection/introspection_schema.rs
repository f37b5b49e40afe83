use crate::introspection::SchemaLoadError;
use serde::Deserialize;
use serde::Serialize;

/// The `__schema` object returned by an
/// [`INTROSPECTION_QUERY`](crate::introspection::INTROSPECTION_QUERY)
/// request, as it appears on the wire.
///
/// Nothing is checked at this level beyond the JSON shape. Classifying
/// each type and checking its members happens in
/// [`TypeDescription::cast`](crate::introspection::TypeDescription::cast).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionSchema {
    #[serde(default)]
    pub directives: Vec<serde_json::Value>,
    #[serde(default)]
    pub mutation_type: Option<IntrospectionRootType>,
    #[serde(default)]
    pub query_type: Option<IntrospectionRootType>,
    #[serde(default)]
    pub subscription_type: Option<IntrospectionRootType>,
    pub types: Vec<IntrospectionType>,
}
impl IntrospectionSchema {
    /// Parse an introspection schema from JSON text. Both the `data` of an
    /// introspection response (`{"__schema": {...}}`) and the bare
    /// `__schema` object are accepted.
    pub fn from_json_str(json: &str) -> Result<Self, SchemaLoadError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    /// Like [`IntrospectionSchema::from_json_str`], for an already-parsed
    /// JSON value.
    pub fn from_json_value(
        mut value: serde_json::Value,
    ) -> Result<Self, SchemaLoadError> {
        if let Some(schema) = value.get_mut("__schema") {
            return Ok(serde_json::from_value(schema.take())?);
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Serialize this schema wrapped as `{"__schema": {...}}`, the same shape
    /// an introspection response carries in its `data`.
    pub fn to_json_value(&self) -> Result<serde_json::Value, SchemaLoadError> {
        Ok(serde_json::json!({ "__schema": serde_json::to_value(self)? }))
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct IntrospectionRootType {
    pub name: String,
}

/// A single `__Type` entry of [`IntrospectionSchema::types`].
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionType {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub enum_values: Option<Vec<IntrospectionEnumValue>>,
    #[serde(default)]
    pub fields: Option<Vec<IntrospectionField>>,
    #[serde(default)]
    pub input_fields: Option<Vec<IntrospectionInputValue>>,
    #[serde(default)]
    pub interfaces: Option<Vec<IntrospectionTypeRef>>,
    pub kind: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub possible_types: Option<Vec<IntrospectionTypeRef>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionField {
    #[serde(default)]
    pub args: Vec<IntrospectionInputValue>,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_deprecated: bool,
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: IntrospectionTypeRef,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionInputValue {
    /// The default value as GraphQL literal text (e.g. `"10"` or `"RED"`).
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: IntrospectionTypeRef,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionEnumValue {
    #[serde(default)]
    pub deprecation_reason: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_deprecated: bool,
    pub name: String,
}

/// A (possibly wrapped) reference to a type, as it appears on the wire.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionTypeRef {
    pub kind: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub of_type: Option<Box<IntrospectionTypeRef>>,
}
