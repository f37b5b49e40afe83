mod field_selection;
mod inline_fragment;
#[allow(clippy::module_inception)]
mod operation;
mod operation_kind;
mod selection;
mod selection_macro;
mod selection_set;

pub use field_selection::FieldSelection;
pub use inline_fragment::InlineFragment;
pub use operation::Operation;
pub use operation::OperationBuildError;
pub use operation_kind::OperationKind;
pub use selection::Raw;
pub use selection::Selection;
pub use selection_set::AliasForNextField;
pub use selection_set::SelectionSet;
pub use selection_set::SelectionSetBuildError;

#[cfg(test)]
mod tests;
