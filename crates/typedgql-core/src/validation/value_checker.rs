use crate::Value;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::NamedEnumValueRef;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, String>;

/// Check that `value` is acceptable where `type_annotation` is expected.
/// Returns a human-readable reason on rejection.
pub(super) fn check_value(
    schema: &Schema,
    type_annotation: &TypeAnnotation,
    value: &Value,
) -> Result<()> {
    match (type_annotation, value) {
        (TypeAnnotation::Nullable(_), Value::Null) => Ok(()),
        (TypeAnnotation::Nullable(inner), _) => check_value(schema, inner, value),
        (_, Value::Null) => Err(format!(
            "null is not accepted for non-null type `{type_annotation}`",
        )),

        (TypeAnnotation::List(inner), Value::List(items)) => {
            for (idx, item) in items.iter().enumerate() {
                check_value(schema, inner, item)
                    .map_err(|reason| format!("at list index {idx}: {reason}"))?;
            }
            Ok(())
        },
        (TypeAnnotation::List(_), _) => Err(format!(
            "expected a list for type `{type_annotation}`, found {}",
            value.kind_name(),
        )),

        (TypeAnnotation::Named(type_ref), _) => {
            let type_ = type_ref.deref(schema)
                .map_err(|err| err.to_string())?;
            check_named_value(schema, type_, value)
        },
    }
}

fn check_named_value(
    schema: &Schema,
    type_: &GraphQLType,
    value: &Value,
) -> Result<()> {
    match (type_, value) {
        (GraphQLType::Bool, Value::Bool(_)) => Ok(()),

        (GraphQLType::Float, Value::Float(float)) if float.is_finite() => Ok(()),
        (GraphQLType::Float, Value::Int(_)) => Ok(()),

        (GraphQLType::ID, Value::String(_) | Value::Int(_)) => Ok(()),

        (GraphQLType::Int, Value::Int(int)) =>
            if i32::try_from(*int).is_ok() {
                Ok(())
            } else {
                Err(format!("{int} does not fit in a 32-bit signed integer"))
            },

        (GraphQLType::String, Value::String(_)) => Ok(()),

        (GraphQLType::Enum(enum_type), Value::Enum(value_name)) =>
            NamedEnumValueRef::new(value_name)
                .deref(enum_type)
                .map(|_| ())
                .map_err(|_| format!(
                    "`{value_name}` is not a value of the `{}` enum",
                    enum_type.name(),
                )),

        (GraphQLType::InputObject(input_obj_type), Value::Object(entries)) =>
            check_input_object(schema, input_obj_type, entries),

        (GraphQLType::Scalar(scalar_type), _) =>
            check_custom_scalar(scalar_type, value),

        (GraphQLType::Interface(_) | GraphQLType::Object(_) | GraphQLType::Union(_), _) =>
            Err(format!("`{}` is not an input type", type_.name())),

        _ => Err(format!(
            "expected a value of type `{}`, found {}",
            type_.name(),
            value.kind_name(),
        )),
    }
}

fn check_input_object(
    schema: &Schema,
    input_obj_type: &InputObjectType,
    entries: &IndexMap<String, Value>,
) -> Result<()> {
    let fields = input_obj_type.fields();
    if let Some(unknown_name) = entries.keys().find(|name| !fields.contains_key(name.as_str())) {
        return Err(format!(
            "`{unknown_name}` is not a field of the `{}` input type",
            input_obj_type.name(),
        ));
    }

    if let Some(missing_field) = fields.values().find(|field| {
        field.is_required() && !entries.contains_key(field.name())
    }) {
        return Err(format!(
            "missing required field `{}` of the `{}` input type",
            missing_field.name(),
            input_obj_type.name(),
        ));
    }

    for (field_name, field_value) in entries {
        let field = &fields[field_name.as_str()];
        check_value(schema, field.type_annotation(), field_value)
            .map_err(|reason| format!("in field `{field_name}`: {reason}"))?;
    }
    Ok(())
}

fn check_custom_scalar(scalar_type: &ScalarType, value: &Value) -> Result<()> {
    match value {
        Value::Custom(custom) if custom.scalar_name() == scalar_type.name() =>
            scalar_type.codec().coerce(custom.literal()),
        Value::Custom(custom) => Err(format!(
            "expected a value of the `{}` scalar, found a `{}` value",
            scalar_type.name(),
            custom.scalar_name(),
        )),
        _ => scalar_type.codec().coerce(value),
    }
}
