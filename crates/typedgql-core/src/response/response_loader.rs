use crate::operation::Operation;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::response::LoadError;
use crate::response::ResponseObject;
use crate::response::ResponsePath;
use crate::response::ResponseValue;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, LoadError>;

/// Loads the `data` of a response into [`ResponseValue`]s, using the
/// selection set that was sent to decide which keys to read and the schema
/// to decide how to type each value.
///
/// * `Nullable` types accept `null`. Any other `null` is an error.
/// * List types require a JSON array.
/// * Object, interface, and union typed fields with a sub-selection load as
///   a [`ResponseObject`]; without one they are kept as raw JSON.
/// * Enum values must name a member of the enum.
/// * Built-in scalars are checked against their JSON representation and
///   custom scalars are loaded by their [`ScalarCodec`](crate::types::ScalarCodec).
/// * Fields selected within an inline fragment are loaded only when the
///   response includes them, and are skipped when the object's `__typename`
///   names a type the fragment does not apply to. [`Raw`](crate::operation::Raw) selections are
///   skipped.
pub struct ResponseLoader<'schema> {
    schema: &'schema Schema,
}
impl<'schema> ResponseLoader<'schema> {
    /// Load `data` as the response to `selection_set` selected on `type_`.
    pub fn load(
        schema: &'schema Schema,
        type_: &'schema GraphQLType,
        selection_set: &SelectionSet,
        data: &serde_json::Value,
    ) -> Result<ResponseObject> {
        let loader = Self { schema };
        loader.load_object(type_, selection_set, data, &ResponsePath::default())
    }

    fn load_object(
        &self,
        type_: &'schema GraphQLType,
        selection_set: &SelectionSet,
        data: &serde_json::Value,
        path: &ResponsePath,
    ) -> Result<ResponseObject> {
        let serde_json::Value::Object(entries) = data else {
            return Err(LoadError::ExpectedObject {
                found: data.clone(),
                path: path.clone(),
            });
        };

        let mut fields = IndexMap::new();
        self.load_fields(type_, selection_set, entries, path, true, &mut fields)?;
        Ok(ResponseObject {
            fields,
            type_name: entries.get("__typename")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string),
        })
    }

    fn load_fields(
        &self,
        type_: &'schema GraphQLType,
        selection_set: &SelectionSet,
        entries: &serde_json::Map<String, serde_json::Value>,
        path: &ResponsePath,
        required: bool,
        fields: &mut IndexMap<String, ResponseValue>,
    ) -> Result<()> {
        for selection in selection_set.iter() {
            match selection {
                Selection::Field(field_sel) => {
                    let key = field_sel.selected_name();
                    let field_path = path.with_key(key);
                    let Some(value) = entries.get(key) else {
                        if required {
                            return Err(LoadError::MissingField { path: field_path });
                        }
                        continue;
                    };

                    let type_annotation = self.field_type_annotation(
                        type_,
                        field_sel.name(),
                        &field_path,
                    )?;
                    let loaded = self.load_value(
                        &type_annotation,
                        field_sel.selection_set(),
                        value,
                        &field_path,
                    )?;
                    fields.insert(key.to_string(), loaded);
                },

                Selection::InlineFragment(fragment) => {
                    let on_type = fragment.on_type(self.schema);
                    if !self.fragment_applies(on_type, entries) {
                        continue;
                    }
                    self.load_fields(
                        on_type,
                        fragment.selection_set(),
                        entries,
                        path,
                        false,
                        fields,
                    )?
                },

                Selection::Raw(_) => (),
            }
        }
        Ok(())
    }

    /// Whether a fragment on `on_type` applies to an object, judged by the
    /// object's `__typename` when the response includes one.
    fn fragment_applies(
        &self,
        on_type: &GraphQLType,
        entries: &serde_json::Map<String, serde_json::Value>,
    ) -> bool {
        let Some(type_name) = entries.get("__typename").and_then(serde_json::Value::as_str) else {
            return true;
        };
        self.schema.get_type(type_name)
            .is_some_and(|concrete_type| concrete_type.is_subtype_of(self.schema, on_type))
    }

    fn field_type_annotation(
        &self,
        type_: &GraphQLType,
        field_name: &str,
        path: &ResponsePath,
    ) -> Result<TypeAnnotation> {
        if field_name == "__typename" {
            return Ok(TypeAnnotation::named("String"));
        }
        type_.fields()
            .and_then(|fields| fields.get(field_name))
            .map(|field| field.type_annotation().clone())
            .ok_or_else(|| LoadError::NoSuchField {
                field_name: field_name.to_string(),
                path: path.clone(),
                type_name: type_.name().to_string(),
            })
    }

    fn load_value(
        &self,
        type_annotation: &TypeAnnotation,
        selection_set: Option<&SelectionSet>,
        value: &serde_json::Value,
        path: &ResponsePath,
    ) -> Result<ResponseValue> {
        match (type_annotation, value) {
            (TypeAnnotation::Nullable(_), serde_json::Value::Null) =>
                Ok(ResponseValue::Null),
            (TypeAnnotation::Nullable(inner), _) =>
                self.load_value(inner, selection_set, value, path),
            (_, serde_json::Value::Null) =>
                Err(LoadError::UnexpectedNull { path: path.clone() }),

            (TypeAnnotation::List(inner), serde_json::Value::Array(items)) =>
                items.iter()
                    .enumerate()
                    .map(|(idx, item)| {
                        self.load_value(inner, selection_set, item, &path.with_index(idx))
                    })
                    .collect::<Result<Vec<_>>>()
                    .map(ResponseValue::List),
            (TypeAnnotation::List(_), _) => Err(LoadError::ExpectedList {
                found: value.clone(),
                path: path.clone(),
            }),

            (TypeAnnotation::Named(type_ref), _) => {
                let type_ = type_ref.deref(self.schema)
                    .expect("type is present in schema");
                self.load_named_value(type_, selection_set, value, path)
            },
        }
    }

    fn load_named_value(
        &self,
        type_: &'schema GraphQLType,
        selection_set: Option<&SelectionSet>,
        value: &serde_json::Value,
        path: &ResponsePath,
    ) -> Result<ResponseValue> {
        let invalid_scalar = |reason: String| LoadError::InvalidScalar {
            path: path.clone(),
            reason,
            type_name: type_.name().to_string(),
        };

        match type_ {
            GraphQLType::Bool => value.as_bool()
                .map(ResponseValue::Bool)
                .ok_or_else(|| invalid_scalar(format!("expected a boolean, found `{value}`"))),

            GraphQLType::Enum(enum_type) => match value.as_str() {
                Some(member_name) if enum_type.has_value(member_name) =>
                    Ok(ResponseValue::Enum(member_name.to_string())),
                _ => Err(LoadError::UnknownEnumValue {
                    enum_name: enum_type.name().to_string(),
                    path: path.clone(),
                    value: value.to_string(),
                }),
            },

            GraphQLType::Float => value.as_f64()
                .map(ResponseValue::Float)
                .ok_or_else(|| invalid_scalar(format!("expected a number, found `{value}`"))),

            GraphQLType::ID => match value {
                serde_json::Value::Number(number) => Ok(ResponseValue::String(number.to_string())),
                serde_json::Value::String(id) => Ok(ResponseValue::String(id.clone())),
                _ => Err(invalid_scalar(format!("expected a string or integer, found `{value}`"))),
            },

            GraphQLType::Int => value.as_i64()
                .filter(|int| i32::try_from(*int).is_ok())
                .map(ResponseValue::Int)
                .ok_or_else(|| invalid_scalar(format!(
                    "expected a 32-bit signed integer, found `{value}`",
                ))),

            GraphQLType::String => value.as_str()
                .map(|str| ResponseValue::String(str.to_string()))
                .ok_or_else(|| invalid_scalar(format!("expected a string, found `{value}`"))),

            GraphQLType::Scalar(scalar_type) => scalar_type.codec()
                .load(value)
                .map_err(invalid_scalar),

            GraphQLType::Interface(_)
            | GraphQLType::Object(_)
            | GraphQLType::Union(_) => match selection_set {
                Some(selection_set) => self.load_object(type_, selection_set, value, path)
                    .map(ResponseValue::Object),
                None => Ok(ResponseValue::Json(value.clone())),
            },

            GraphQLType::InputObject(_) => Err(LoadError::NotAnOutputType {
                path: path.clone(),
                type_name: type_.name().to_string(),
            }),
        }
    }
}

impl Operation {
    /// Load the `data` of a response to this operation. See
    /// [`ResponseLoader`].
    pub fn load_response(
        &self,
        schema: &Schema,
        data: &serde_json::Value,
    ) -> Result<ResponseObject> {
        ResponseLoader::load(
            schema,
            self.root_type(schema),
            self.selection_set(),
            data,
        )
    }
}
