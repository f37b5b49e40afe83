use crate::introspection::IntrospectionEnumValue;
use crate::introspection::IntrospectionField;
use crate::introspection::IntrospectionInputValue;
use crate::introspection::IntrospectionSchema;
use crate::introspection::IntrospectionType;
use crate::introspection::IntrospectionTypeRef;
use crate::introspection::SchemaLoadError;
use crate::introspection::TypeKind;
use crate::introspection::TypeRef;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaLoadError>;

/// Classify every type entry of an [`IntrospectionSchema`], preserving the
/// order in which introspection listed them.
pub fn load(schema: &IntrospectionSchema) -> Result<Vec<TypeDescription>> {
    let descriptions = schema.types
        .iter()
        .map(TypeDescription::cast)
        .collect::<Result<Vec<_>>>()?;
    log::debug!("loaded {} type descriptions", descriptions.len());
    Ok(descriptions)
}

/// The description of a single named type, classified by kind with its
/// kind-specific members checked and its type references resolved to
/// [`TypeRef`]s.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDescription {
    Enum(EnumDescription),
    InputObject(InputObjectDescription),
    Interface(InterfaceDescription),
    Object(ObjectDescription),
    Scalar(ScalarDescription),
    Union(UnionDescription),
}
impl TypeDescription {
    /// Classify a raw introspection type entry according to its `kind`.
    ///
    /// Members that do not apply to a kind must be `null` (e.g. a `SCALAR`
    /// may not list `fields`), and members that define a kind must be
    /// present (e.g. an `ENUM` must list `enumValues`).
    pub fn cast(raw: &IntrospectionType) -> Result<Self> {
        let kind: TypeKind = raw.kind.parse().map_err(|_| {
            SchemaLoadError::UnknownTypeKind {
                kind: raw.kind.to_string(),
                type_name: raw.name.to_owned(),
            }
        })?;
        let name = raw.name.as_ref().ok_or_else(|| {
            SchemaLoadError::MissingTypeName {
                kind: raw.kind.to_string(),
            }
        })?;
        let members = MemberChecker { kind, type_name: name };
        let description = raw.description.to_owned();
        let name = name.to_string();

        Ok(match kind {
            TypeKind::Enum => {
                members.absent("fields", raw.fields.is_some())?;
                members.absent("inputFields", raw.input_fields.is_some())?;
                members.absent("interfaces", raw.interfaces.is_some())?;
                members.absent("possibleTypes", raw.possible_types.is_some())?;
                Self::Enum(EnumDescription {
                    description,
                    name,
                    values: members.present("enumValues", &raw.enum_values)?
                        .iter()
                        .map(EnumValueDescription::from)
                        .collect(),
                })
            },

            TypeKind::InputObject => {
                members.absent("fields", raw.fields.is_some())?;
                members.absent("enumValues", raw.enum_values.is_some())?;
                members.absent("interfaces", raw.interfaces.is_some())?;
                members.absent("possibleTypes", raw.possible_types.is_some())?;
                Self::InputObject(InputObjectDescription {
                    description,
                    input_fields: input_values_from_raw(
                        members.present("inputFields", &raw.input_fields)?,
                    )?,
                    name,
                })
            },

            TypeKind::Interface => {
                members.absent("enumValues", raw.enum_values.is_some())?;
                members.absent("inputFields", raw.input_fields.is_some())?;
                Self::Interface(InterfaceDescription {
                    description,
                    fields: fields_from_raw(members.present("fields", &raw.fields)?)?,
                    interfaces: type_names_from_raw(raw.interfaces.as_deref())?,
                    name,
                    possible_types: type_names_from_raw(raw.possible_types.as_deref())?,
                })
            },

            TypeKind::Object => {
                members.absent("enumValues", raw.enum_values.is_some())?;
                members.absent("inputFields", raw.input_fields.is_some())?;
                members.absent("possibleTypes", raw.possible_types.is_some())?;
                Self::Object(ObjectDescription {
                    description,
                    fields: fields_from_raw(members.present("fields", &raw.fields)?)?,
                    interfaces: type_names_from_raw(raw.interfaces.as_deref())?,
                    name,
                })
            },

            TypeKind::Scalar => {
                members.absent("fields", raw.fields.is_some())?;
                members.absent("enumValues", raw.enum_values.is_some())?;
                members.absent("inputFields", raw.input_fields.is_some())?;
                members.absent("interfaces", raw.interfaces.is_some())?;
                members.absent("possibleTypes", raw.possible_types.is_some())?;
                Self::Scalar(ScalarDescription {
                    description,
                    name,
                })
            },

            TypeKind::Union => {
                members.absent("fields", raw.fields.is_some())?;
                members.absent("enumValues", raw.enum_values.is_some())?;
                members.absent("inputFields", raw.input_fields.is_some())?;
                members.absent("interfaces", raw.interfaces.is_some())?;
                Self::Union(UnionDescription {
                    description,
                    name,
                    possible_types: type_names_from_raw(Some(
                        members.present("possibleTypes", &raw.possible_types)?,
                    ))?,
                })
            },

            TypeKind::List | TypeKind::NonNull =>
                return Err(SchemaLoadError::UnknownTypeKind {
                    kind: raw.kind.to_string(),
                    type_name: Some(name),
                }),
        })
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Enum(d) => d.description.as_deref(),
            Self::InputObject(d) => d.description.as_deref(),
            Self::Interface(d) => d.description.as_deref(),
            Self::Object(d) => d.description.as_deref(),
            Self::Scalar(d) => d.description.as_deref(),
            Self::Union(d) => d.description.as_deref(),
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Enum(_) => TypeKind::Enum,
            Self::InputObject(_) => TypeKind::InputObject,
            Self::Interface(_) => TypeKind::Interface,
            Self::Object(_) => TypeKind::Object,
            Self::Scalar(_) => TypeKind::Scalar,
            Self::Union(_) => TypeKind::Union,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Enum(d) => d.name.as_str(),
            Self::InputObject(d) => d.name.as_str(),
            Self::Interface(d) => d.name.as_str(),
            Self::Object(d) => d.name.as_str(),
            Self::Scalar(d) => d.name.as_str(),
            Self::Union(d) => d.name.as_str(),
        }
    }
}

struct MemberChecker<'a> {
    kind: TypeKind,
    type_name: &'a str,
}
impl<'a> MemberChecker<'a> {
    fn absent(&self, member: &'static str, is_present: bool) -> Result<()> {
        if is_present {
            return Err(SchemaLoadError::UnexpectedTypeMember {
                kind: self.kind.to_string(),
                member,
                type_name: self.type_name.to_string(),
            });
        }
        Ok(())
    }

    fn present<'m, T>(
        &self,
        member: &'static str,
        value: &'m Option<Vec<T>>,
    ) -> Result<&'m [T]> {
        value.as_deref().ok_or_else(|| SchemaLoadError::MissingTypeMember {
            kind: self.kind.to_string(),
            member,
            type_name: self.type_name.to_string(),
        })
    }
}

fn fields_from_raw(
    raw_fields: &[IntrospectionField],
) -> Result<IndexMap<String, FieldDescription>> {
    raw_fields.iter()
        .map(|raw_field| Ok((
            raw_field.name.to_string(),
            FieldDescription {
                args: input_values_from_raw(&raw_field.args)?,
                deprecation_reason: raw_field.deprecation_reason.to_owned(),
                description: raw_field.description.to_owned(),
                is_deprecated: raw_field.is_deprecated,
                name: raw_field.name.to_string(),
                type_ref: TypeRef::try_from(&raw_field.type_ref)?,
            },
        )))
        .collect()
}

fn input_values_from_raw(
    raw_values: &[IntrospectionInputValue],
) -> Result<IndexMap<String, InputValueDescription>> {
    raw_values.iter()
        .map(|raw_value| Ok((
            raw_value.name.to_string(),
            InputValueDescription {
                default_value: raw_value.default_value.to_owned(),
                description: raw_value.description.to_owned(),
                name: raw_value.name.to_string(),
                type_ref: TypeRef::try_from(&raw_value.type_ref)?,
            },
        )))
        .collect()
}

fn type_names_from_raw(
    raw_refs: Option<&[IntrospectionTypeRef]>,
) -> Result<Vec<String>> {
    raw_refs.unwrap_or_default()
        .iter()
        .map(|raw_ref| {
            TypeRef::try_from(raw_ref)
                .map(|type_ref| type_ref.innermost_name().to_string())
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumDescription {
    pub description: Option<String>,
    pub name: String,
    pub values: Vec<EnumValueDescription>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDescription {
    pub deprecation_reason: Option<String>,
    pub description: Option<String>,
    pub is_deprecated: bool,
    pub name: String,
}
impl std::convert::From<&IntrospectionEnumValue> for EnumValueDescription {
    fn from(raw: &IntrospectionEnumValue) -> Self {
        Self {
            deprecation_reason: raw.deprecation_reason.to_owned(),
            description: raw.description.to_owned(),
            is_deprecated: raw.is_deprecated,
            name: raw.name.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldDescription {
    pub args: IndexMap<String, InputValueDescription>,
    pub deprecation_reason: Option<String>,
    pub description: Option<String>,
    pub is_deprecated: bool,
    pub name: String,
    pub type_ref: TypeRef,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectDescription {
    pub description: Option<String>,
    pub input_fields: IndexMap<String, InputValueDescription>,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDescription {
    pub default_value: Option<String>,
    pub description: Option<String>,
    pub name: String,
    pub type_ref: TypeRef,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceDescription {
    pub description: Option<String>,
    pub fields: IndexMap<String, FieldDescription>,
    pub interfaces: Vec<String>,
    pub name: String,
    pub possible_types: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectDescription {
    pub description: Option<String>,
    pub fields: IndexMap<String, FieldDescription>,
    pub interfaces: Vec<String>,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarDescription {
    pub description: Option<String>,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionDescription {
    pub description: Option<String>,
    pub name: String,
    pub possible_types: Vec<String>,
}
