use crate::introspection;
use crate::introspection::FieldDescription;
use crate::introspection::InputValueDescription;
use crate::introspection::IntrospectionSchema;
use crate::introspection::SchemaLoadError;
use crate::introspection::TypeDescription;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarBindings;
use crate::types::ScalarCodec;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::TypesMapBuilder;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Builds a [`Schema`] from an introspection response and the
/// [`ScalarCodec`]s to use for the schema's custom scalars.
///
/// ```ignore
/// let schema = SchemaBuilder::from_path("schema.json")?
///     .bind_scalar("DateTime", AnyScalar)
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    introspection: Option<IntrospectionSchema>,
    scalar_bindings: ScalarBindings,
}
impl SchemaBuilder {
    /// Bind `codec` to the custom scalar named `scalar_name`.
    pub fn bind_scalar(
        mut self,
        scalar_name: impl Into<String>,
        codec: impl ScalarCodec + 'static,
    ) -> Self {
        self.scalar_bindings = self.scalar_bindings.bind(scalar_name, codec);
        self
    }

    pub fn build(self) -> Result<Schema> {
        let introspection_schema = self.introspection.unwrap_or_else(|| {
            IntrospectionSchema {
                directives: vec![],
                mutation_type: None,
                query_type: None,
                subscription_type: None,
                types: vec![],
            }
        });
        let descriptions = introspection::load(&introspection_schema)?;

        check_scalar_bindings(&descriptions, &self.scalar_bindings)?;

        let mut types_map_builder = TypesMapBuilder::new();
        register_types(&mut types_map_builder, &descriptions, &self.scalar_bindings)?;
        link_types(&mut types_map_builder, &descriptions);
        populate_fields(&mut types_map_builder, &descriptions);
        let types = types_map_builder.into_types_map()?;

        let query_type = root_operation_type(
            &types,
            OperationKind::Query,
            introspection_schema.query_type.as_ref().map(|root| root.name.as_str()),
        )?.ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type = root_operation_type(
            &types,
            OperationKind::Mutation,
            introspection_schema.mutation_type.as_ref().map(|root| root.name.as_str()),
        )?;
        let subscription_type = root_operation_type(
            &types,
            OperationKind::Subscription,
            introspection_schema.subscription_type.as_ref().map(|root| root.name.as_str()),
        )?;

        let mut schema = Schema {
            introspection: introspection_schema,
            mutation_type,
            query_type,
            subscription_type,
            types,
        };
        inject_query_meta_fields(&mut schema);

        log::debug!(
            "built schema with {} types (query root: `{}`)",
            schema.types.len(),
            schema.query_type.name(),
        );
        Ok(schema)
    }

    /// Shorthand for [`SchemaBuilder::new()`] followed by
    /// [`SchemaBuilder::load_file()`].
    pub fn from_path(file_path: impl AsRef<Path>) -> Result<Self> {
        Self::new().load_file(file_path)
    }

    /// Load the introspection schema to build from a JSON file, as written by
    /// [`Schema::to_path()`] or as returned by an introspection request.
    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = std::fs::read_to_string(file_path)
            .map_err(|err| SchemaLoadError::FileReadError {
                file_path: file_path.to_path_buf(),
                err,
            })?;
        self.load_json_str(content.as_str())
    }

    /// Use `introspection` as the schema to build, replacing any schema
    /// loaded before.
    pub fn load_introspection(mut self, introspection: IntrospectionSchema) -> Self {
        self.introspection = Some(introspection);
        self
    }

    /// Load the introspection schema to build from JSON text. Both
    /// `{"__schema": {...}}` and the bare `__schema` object are accepted.
    pub fn load_json_str(self, json: &str) -> Result<Self> {
        Ok(self.load_introspection(IntrospectionSchema::from_json_str(json)?))
    }

    /// Like [`SchemaBuilder::load_json_str()`], for an already-parsed JSON
    /// value.
    pub fn load_json_value(self, json: serde_json::Value) -> Result<Self> {
        Ok(self.load_introspection(IntrospectionSchema::from_json_value(json)?))
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every scalar binding made so far with `scalar_bindings`.
    pub fn with_scalar_bindings(mut self, scalar_bindings: ScalarBindings) -> Self {
        self.scalar_bindings = scalar_bindings;
        self
    }
}

/// Every custom scalar must have a codec bound to it. All missing bindings
/// are reported together.
fn check_scalar_bindings(
    descriptions: &[TypeDescription],
    scalar_bindings: &ScalarBindings,
) -> Result<()> {
    let scalar_names: Vec<String> =
        descriptions.iter()
            .filter_map(|description| match description {
                TypeDescription::Scalar(scalar) => Some(scalar.name.as_str()),
                _ => None,
            })
            .filter(|name| {
                GraphQLType::builtin(name).is_none()
                    && !scalar_bindings.contains(name)
            })
            .map(str::to_string)
            .collect();

    if !scalar_names.is_empty() {
        return Err(SchemaBuildError::UndefinedScalars { scalar_names });
    }
    Ok(())
}

/// First pass: register an empty node for every named type. Enums are
/// complete at this point since their values never refer to other types.
fn register_types(
    types_map_builder: &mut TypesMapBuilder,
    descriptions: &[TypeDescription],
    scalar_bindings: &ScalarBindings,
) -> Result<()> {
    for description in descriptions {
        let type_name = description.name();
        let type_ = match description {
            TypeDescription::Enum(enum_desc) => GraphQLType::Enum(EnumType {
                description: enum_desc.description.to_owned(),
                name: type_name.to_string(),
                values: enum_desc.values
                    .iter()
                    .map(|value_desc| (value_desc.name.to_string(), EnumValue {
                        deprecation_reason: value_desc.deprecation_reason.to_owned(),
                        description: value_desc.description.to_owned(),
                        is_deprecated: value_desc.is_deprecated,
                        name: value_desc.name.to_string(),
                        type_ref: NamedGraphQLTypeRef::new(type_name),
                    }))
                    .collect(),
            }),

            TypeDescription::InputObject(input_obj_desc) =>
                GraphQLType::InputObject(InputObjectType {
                    description: input_obj_desc.description.to_owned(),
                    fields: IndexMap::new(),
                    name: type_name.to_string(),
                }),

            TypeDescription::Interface(iface_desc) =>
                GraphQLType::Interface(InterfaceType(empty_object_or_interface_data(
                    type_name,
                    iface_desc.description.as_deref(),
                ))),

            TypeDescription::Object(obj_desc) =>
                GraphQLType::Object(ObjectType(empty_object_or_interface_data(
                    type_name,
                    obj_desc.description.as_deref(),
                ))),

            TypeDescription::Scalar(scalar_desc) => {
                // Built-in scalars always keep their built-in behaviour.
                if GraphQLType::builtin(type_name).is_some() {
                    continue;
                }
                let codec = scalar_bindings.get(type_name)
                    .ok_or_else(|| SchemaBuildError::UndefinedScalars {
                        scalar_names: vec![type_name.to_string()],
                    })?;
                GraphQLType::Scalar(ScalarType {
                    codec: codec.clone(),
                    description: scalar_desc.description.to_owned(),
                    name: type_name.to_string(),
                })
            },

            TypeDescription::Union(union_desc) => GraphQLType::Union(UnionType {
                description: union_desc.description.to_owned(),
                members: IndexMap::new(),
                name: type_name.to_string(),
            }),
        };
        types_map_builder.add_new_type(type_name, type_)?;
    }
    Ok(())
}

fn empty_object_or_interface_data(
    type_name: &str,
    description: Option<&str>,
) -> ObjectOrInterfaceTypeData {
    ObjectOrInterfaceTypeData {
        description: description.map(str::to_string),
        fields: IndexMap::new(),
        interfaces: vec![],
        name: type_name.to_string(),
    }
}

/// Second pass: attach implemented interfaces and union members by name.
/// Whether each name refers to a type of the right kind is checked once all
/// types are populated.
fn link_types(
    types_map_builder: &mut TypesMapBuilder,
    descriptions: &[TypeDescription],
) {
    for description in descriptions {
        let type_ = types_map_builder.get_type_mut(description.name());
        match (description, type_) {
            (TypeDescription::Interface(iface_desc), Some(GraphQLType::Interface(iface))) =>
                iface.0.interfaces = named_refs(&iface_desc.interfaces),

            (TypeDescription::Object(obj_desc), Some(GraphQLType::Object(obj))) =>
                obj.0.interfaces = named_refs(&obj_desc.interfaces),

            (TypeDescription::Union(union_desc), Some(GraphQLType::Union(union_type))) =>
                union_type.members = union_desc.possible_types
                    .iter()
                    .map(|member_name| (
                        member_name.to_string(),
                        NamedGraphQLTypeRef::new(member_name),
                    ))
                    .collect(),

            _ => (),
        }
    }
}

fn named_refs(type_names: &[String]) -> Vec<NamedGraphQLTypeRef> {
    type_names.iter().map(NamedGraphQLTypeRef::new).collect()
}

/// Third pass: resolve the fields of every object, interface, and input
/// object type. Every object and interface also gets the `__typename`
/// meta field.
fn populate_fields(
    types_map_builder: &mut TypesMapBuilder,
    descriptions: &[TypeDescription],
) {
    for description in descriptions {
        let type_name = description.name();
        let type_ = types_map_builder.get_type_mut(type_name);
        match (description, type_) {
            (TypeDescription::InputObject(input_obj_desc), Some(GraphQLType::InputObject(input_obj))) =>
                input_obj.fields = input_obj_desc.input_fields
                    .values()
                    .map(|field_desc| (field_desc.name.to_string(), InputField {
                        default_value: field_desc.default_value.to_owned(),
                        description: field_desc.description.to_owned(),
                        name: field_desc.name.to_string(),
                        parent_type: NamedGraphQLTypeRef::new(type_name),
                        type_annotation: TypeAnnotation::from_type_ref(&field_desc.type_ref),
                    }))
                    .collect(),

            (TypeDescription::Interface(iface_desc), Some(GraphQLType::Interface(iface))) =>
                iface.0.fields = fields_from_descriptions(type_name, &iface_desc.fields),

            (TypeDescription::Object(obj_desc), Some(GraphQLType::Object(obj))) =>
                obj.0.fields = fields_from_descriptions(type_name, &obj_desc.fields),

            _ => (),
        }
    }
}

fn fields_from_descriptions(
    parent_type_name: &str,
    field_descs: &IndexMap<String, FieldDescription>,
) -> IndexMap<String, Field> {
    let mut fields: IndexMap<String, Field> =
        field_descs.values()
            .map(|field_desc| (field_desc.name.to_string(), Field {
                deprecation_reason: field_desc.deprecation_reason.to_owned(),
                description: field_desc.description.to_owned(),
                is_deprecated: field_desc.is_deprecated,
                name: field_desc.name.to_string(),
                parameters: parameters_from_descriptions(&field_desc.args),
                parent_type: NamedGraphQLTypeRef::new(parent_type_name),
                type_annotation: TypeAnnotation::from_type_ref(&field_desc.type_ref),
            }))
            .collect();

    fields.entry("__typename".to_string()).or_insert_with(|| {
        meta_field(parent_type_name, "__typename", TypeAnnotation::named("String"))
    });
    fields
}

fn parameters_from_descriptions(
    arg_descs: &IndexMap<String, InputValueDescription>,
) -> IndexMap<String, Parameter> {
    arg_descs.values()
        .map(|arg_desc| (arg_desc.name.to_string(), Parameter {
            default_value: arg_desc.default_value.to_owned(),
            description: arg_desc.description.to_owned(),
            name: arg_desc.name.to_string(),
            type_annotation: TypeAnnotation::from_type_ref(&arg_desc.type_ref),
        }))
        .collect()
}

fn meta_field(
    parent_type_name: &str,
    field_name: &str,
    type_annotation: TypeAnnotation,
) -> Field {
    Field {
        deprecation_reason: None,
        description: None,
        is_deprecated: false,
        name: field_name.to_string(),
        parameters: IndexMap::new(),
        parent_type: NamedGraphQLTypeRef::new(parent_type_name),
        type_annotation,
    }
}

/// The query root additionally gets `__schema` and `__type`, provided the
/// introspection included the meta types they return.
fn inject_query_meta_fields(schema: &mut Schema) {
    if !schema.types.contains_key("__Schema") || !schema.types.contains_key("__Type") {
        return;
    }

    let query_type_name = schema.query_type.name().to_string();
    let Some(GraphQLType::Object(query_type)) = schema.types.get_mut(&query_type_name) else {
        return;
    };
    let fields = &mut query_type.0.fields;

    fields.entry("__schema".to_string()).or_insert_with(|| meta_field(
        &query_type_name,
        "__schema",
        TypeAnnotation::named("__Schema"),
    ));
    fields.entry("__type".to_string()).or_insert_with(|| {
        let mut type_field = meta_field(
            &query_type_name,
            "__type",
            TypeAnnotation::nullable(TypeAnnotation::named("__Type")),
        );
        type_field.parameters.insert("name".to_string(), Parameter {
            default_value: None,
            description: None,
            name: "name".to_string(),
            type_annotation: TypeAnnotation::named("String"),
        });
        type_field
    });
}

/// Resolve a root operation type. When introspection did not name one, the
/// default name (`Query`, `Mutation`, `Subscription`) is used if an object
/// type with that name exists.
fn root_operation_type(
    types: &IndexMap<String, GraphQLType>,
    operation: OperationKind,
    type_name: Option<&str>,
) -> Result<Option<NamedGraphQLTypeRef>> {
    let Some(type_name) = type_name else {
        let default_name = operation.default_root_type_name();
        return Ok(match types.get(default_name) {
            Some(GraphQLType::Object(_)) => Some(NamedGraphQLTypeRef::new(default_name)),
            _ => None,
        });
    };

    match types.get(type_name) {
        Some(GraphQLType::Object(_)) => Ok(Some(NamedGraphQLTypeRef::new(type_name))),

        Some(type_) => Err(SchemaBuildError::InvalidOperationType {
            operation,
            type_kind: GraphQLTypeKind::from(type_),
            type_name: type_name.to_string(),
        }),

        None => Err(SchemaBuildError::UndefinedOperationType {
            operation,
            type_name: type_name.to_string(),
        }),
    }
}
