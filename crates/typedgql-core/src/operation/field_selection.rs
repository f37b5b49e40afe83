use crate::Value;
use crate::operation::SelectionSet;
use indexmap::IndexMap;

/// A single field selection: `alias: name(arguments) { selection_set }`.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection {
    pub(super) alias: Option<String>,
    pub(super) arguments: IndexMap<String, Value>,
    pub(super) name: String,
    pub(super) selection_set: Option<SelectionSet>,
}
impl FieldSelection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            arguments: IndexMap::new(),
            name: name.into(),
            selection_set: None,
        }
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    /// The name of the selected field (not its alias).
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// If an alias was specified for this selection, return the alias.
    /// Otherwise return the name of the field. This is the key the field's
    /// value is found under in a response.
    pub fn selected_name(&self) -> &str {
        self.alias().unwrap_or_else(|| self.name())
    }

    pub fn selection_set(&self) -> Option<&SelectionSet> {
        self.selection_set.as_ref()
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_argument(
        mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    pub fn with_arguments<K: Into<String>, V: Into<Value>>(
        mut self,
        arguments: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        self.arguments.extend(
            arguments.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
        );
        self
    }

    /// Attach `selection_set` as this field's sub-selection. An empty set
    /// clears the sub-selection instead.
    pub fn with_selection_set(mut self, selection_set: impl Into<SelectionSet>) -> Self {
        let selection_set = selection_set.into();
        self.selection_set = (!selection_set.is_empty()).then_some(selection_set);
        self
    }
}
