//! Checking a [`SelectionSet`](crate::operation::SelectionSet) against the
//! type it will be selected on.

mod selection_set_validator;
mod validation_error;
mod value_checker;

pub use selection_set_validator::validate;
pub use validation_error::ValidationError;
pub use validation_error::ValidationPathSegment;

#[cfg(test)]
mod tests;
