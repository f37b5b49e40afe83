use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::named_ref::NamedRef;
use crate::schema::Schema;
use crate::types::DeprecationState;
use crate::types::NamedGraphQLTypeRef;
use indexmap::IndexMap;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined
/// within some [`Schema`].
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn has_value(&self, value_name: &str) -> bool {
        self.values.contains_key(value_name)
    }

    /// The name of this [`EnumType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// A map from ValueName -> [`EnumValue`], ordered as introspection listed
    /// them (deprecated values included).
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }
}

/// Represents an
/// [enum value](https://spec.graphql.org/October2021/#sec-Enum-Value) defined
/// within a specific [`EnumType`].
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) deprecation_reason: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) is_deprecated: bool,
    pub(crate) name: String,
    pub(crate) type_ref: NamedGraphQLTypeRef,
}
impl EnumValue {
    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        DeprecationState::new(
            self.is_deprecated,
            self.deprecation_reason.as_deref(),
        )
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The [`EnumType`] that this [`EnumValue`] belongs to.
    pub fn enum_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> &'schema EnumType {
        self.type_ref.deref(schema)
            .expect("type is present in schema")
            .as_enum()
            .expect("type is an enum type")
    }

    /// The name of the [`EnumType`] type to which this value belongs.
    ///
    /// This can be useful when the [`Schema`] object is unavailable or
    /// inconvenient to access but the type's name is all that's needed.
    pub fn enum_type_name(&self) -> &str {
        self.type_ref.name()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
impl DerefByName for EnumValue {
    type Source = EnumType;

    fn deref_name<'a>(
        enum_type: &'a Self::Source,
        value_name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        enum_type.values.get(value_name).ok_or_else(
            || DerefByNameError::DanglingReference(value_name.to_string())
        )
    }
}

pub type NamedEnumValueRef = NamedRef<EnumType, EnumValue>;
