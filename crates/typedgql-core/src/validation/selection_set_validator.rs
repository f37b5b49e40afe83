use crate::operation::FieldSelection;
use crate::operation::InlineFragment;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::validation::ValidationError;
use crate::validation::value_checker;

type Result<T> = std::result::Result<T, ValidationError>;

/// Validate `selection_set` against `type_`, returning `selection_set`
/// unchanged on success.
///
/// Every field must exist on the type it is selected on, every argument must
/// be declared, every required argument must be given, every argument value
/// must fit its declared type, and sub-selections are only allowed on fields
/// whose (unwrapped) result type is an object, interface, or union.
/// Validation stops at the first failure.
pub fn validate<'a>(
    schema: &Schema,
    type_: &GraphQLType,
    selection_set: &'a SelectionSet,
) -> Result<&'a SelectionSet> {
    SelectionSetValidator::new(schema, type_).validate(selection_set)?;
    Ok(selection_set)
}

struct SelectionSetValidator<'a> {
    schema: &'a Schema,
    type_: &'a GraphQLType,
}
impl<'a> SelectionSetValidator<'a> {
    fn new(schema: &'a Schema, type_: &'a GraphQLType) -> Self {
        Self { schema, type_ }
    }

    fn validate(&self, selection_set: &SelectionSet) -> Result<()> {
        if !self.type_.supports_selections() {
            return Err(ValidationError::SelectionsNotSupported);
        }
        if selection_set.is_empty() {
            return Err(ValidationError::EmptySelectionSet);
        }

        for selection in selection_set.iter() {
            match selection {
                Selection::Field(field_sel) =>
                    self.validate_field(field_sel).map_err(|err| {
                        err.in_field(self.type_.name(), field_sel.name())
                    })?,

                Selection::InlineFragment(fragment) =>
                    self.validate_inline_fragment(fragment).map_err(|err| {
                        err.in_inline_fragment(fragment.on_type_name())
                    })?,

                Selection::Raw(_) => (),
            }
        }
        Ok(())
    }

    fn validate_field(&self, field_sel: &FieldSelection) -> Result<()> {
        log::trace!(
            "validating selection of `{}.{}`",
            self.type_.name(),
            field_sel.name(),
        );

        let field =
            if let Some(fields) = self.type_.fields() {
                fields.get(field_sel.name()).ok_or(ValidationError::NoSuchField)?
            } else if field_sel.name() == "__typename" {
                // Unions have no fields of their own, but `__typename` can be
                // selected on any composite type.
                return self.validate_union_typename(field_sel);
            } else {
                return Err(ValidationError::NoSuchField);
            };

        let parameters = field.parameters();
        if let Some(unknown_name) = field_sel.arguments()
            .keys()
            .find(|arg_name| !parameters.contains_key(arg_name.as_str())) {
            return Err(ValidationError::NoSuchArgument {
                name: unknown_name.to_string(),
            });
        }

        if let Some(missing_param) = parameters.values().find(|param| {
            param.is_required() && !field_sel.arguments().contains_key(param.name())
        }) {
            return Err(ValidationError::MissingArgument {
                name: missing_param.name().to_string(),
            });
        }

        for (arg_name, value) in field_sel.arguments() {
            let param = &parameters[arg_name.as_str()];
            value_checker::check_value(self.schema, param.type_annotation(), value)
                .map_err(|reason| ValidationError::InvalidArgumentType {
                    name: arg_name.to_string(),
                    reason,
                    value: value.clone(),
                })?;
        }

        if let Some(sub_selection) = field_sel.selection_set() {
            let result_type = field.type_annotation().innermost_type(self.schema);
            SelectionSetValidator::new(self.schema, result_type)
                .validate(sub_selection)?;
        }
        Ok(())
    }

    fn validate_union_typename(&self, field_sel: &FieldSelection) -> Result<()> {
        if let Some(arg_name) = field_sel.arguments().keys().next() {
            return Err(ValidationError::NoSuchArgument {
                name: arg_name.to_string(),
            });
        }
        if field_sel.selection_set().is_some() {
            return Err(ValidationError::SelectionsNotSupported);
        }
        Ok(())
    }

    fn validate_inline_fragment(&self, fragment: &InlineFragment) -> Result<()> {
        let on_type = self.schema.get_type(fragment.on_type_name())
            .ok_or_else(|| ValidationError::UnknownType {
                type_name: fragment.on_type_name().to_string(),
            })?;
        if !matches!(on_type, GraphQLType::Object(_) | GraphQLType::Interface(_)) {
            return Err(ValidationError::SelectionsNotSupported);
        }
        SelectionSetValidator::new(self.schema, on_type)
            .validate(fragment.selection_set())
    }
}
