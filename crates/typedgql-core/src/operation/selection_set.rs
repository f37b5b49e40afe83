use crate::Value;
use crate::operation::FieldSelection;
use crate::operation::Raw;
use crate::operation::Selection;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, SelectionSetBuildError>;

/// An immutable, ordered sequence of [`Selection`]s.
///
/// Every builder method returns a new [`SelectionSet`] and leaves `self`
/// untouched. Appending (or replacing the last selection) shares the
/// unaffected prefix with the original rather than copying it, so a common
/// prefix can be extended in several directions cheaply:
///
/// ```ignore
/// let base = SelectionSet::new().field("a").field("b");
/// let with_c = base.field("c");
/// let with_d = base.field("d");
/// // `base` still selects exactly `a` and `b`.
/// ```
#[derive(Clone, Default)]
pub struct SelectionSet {
    tail: Option<Arc<SelectionNode>>,
}

/// One link of the persistent list backing a [`SelectionSet`]. Links point
/// backwards, from the last selection towards the first.
struct SelectionNode {
    len: usize,
    prefix: Option<Arc<SelectionNode>>,
    selection: Selection,
}

impl SelectionSet {
    /// An empty [`SelectionSet`].
    pub fn new() -> Self {
        Self { tail: None }
    }

    /// Start an aliased field: the field appended by the returned
    /// [`AliasForNextField::field()`] is selected under `alias`.
    pub fn alias(&self, alias: impl Into<String>) -> AliasForNextField {
        AliasForNextField {
            alias: alias.into(),
            selection_set: self.clone(),
        }
    }

    /// Attach a single argument to the last selection. See
    /// [`SelectionSet::args()`].
    pub fn arg(
        &self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self> {
        self.args([(name, value)])
    }

    /// Attach arguments to the last selection, which must be a field.
    /// Arguments keep the order they are given in; an argument given again
    /// replaces the earlier value in place.
    pub fn args<K: Into<String>, V: Into<Value>>(
        &self,
        args: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self> {
        self.map_last_field(|field| field.with_arguments(args))
    }

    /// Append a field selection with no arguments, alias, or sub-selection.
    pub fn field(&self, name: impl Into<String>) -> Self {
        self.push(Selection::Field(FieldSelection::new(name)))
    }

    pub fn is_empty(&self) -> bool {
        self.tail.is_none()
    }

    /// The selections of this set, in the order they were appended.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Selection> + ExactSizeIterator {
        let mut selections = Vec::with_capacity(self.len());
        let mut node = self.tail.as_deref();
        while let Some(current) = node {
            selections.push(&current.selection);
            node = current.prefix.as_deref();
        }
        selections.reverse();
        selections.into_iter()
    }

    /// The most recently appended selection.
    pub fn last(&self) -> Option<&Selection> {
        self.tail.as_deref().map(|node| &node.selection)
    }

    pub fn len(&self) -> usize {
        self.tail.as_deref().map_or(0, |node| node.len)
    }

    /// Attach `selection_set` as the sub-selection of the last selection,
    /// which must be a field. The nested set must not be empty.
    pub fn nest(&self, selection_set: impl Into<SelectionSet>) -> Result<Self> {
        let selection_set = selection_set.into();
        if selection_set.is_empty() {
            return Err(SelectionSetBuildError::EmptySubSelection);
        }
        self.map_last_field(|field| field.with_selection_set(selection_set))
    }

    /// Append `selection`.
    pub fn push(&self, selection: impl Into<Selection>) -> Self {
        Self {
            tail: Some(Arc::new(SelectionNode {
                len: self.len() + 1,
                prefix: self.tail.clone(),
                selection: selection.into(),
            })),
        }
    }

    /// Append a [`Raw`] selection holding `text` verbatim.
    pub fn raw(&self, text: impl Into<String>) -> Self {
        self.push(Selection::Raw(Raw::new(text)))
    }

    /// Indicates if `prefix` is physically shared by this set (rather than
    /// merely equal to a prefix of it).
    pub fn shares_prefix_with(&self, prefix: &SelectionSet) -> bool {
        let Some(prefix_tail) = prefix.tail.as_ref() else {
            return true;
        };
        let mut node = self.tail.as_ref();
        while let Some(current) = node {
            if Arc::ptr_eq(current, prefix_tail) {
                return true;
            }
            node = current.prefix.as_ref();
        }
        false
    }

    fn map_last_field(
        &self,
        update: impl FnOnce(FieldSelection) -> FieldSelection,
    ) -> Result<Self> {
        let tail = self.tail.as_deref().ok_or(SelectionSetBuildError::EmptySelectionSet)?;
        let Selection::Field(field) = &tail.selection else {
            return Err(SelectionSetBuildError::LastSelectionNotAField);
        };

        let prefix = Self { tail: tail.prefix.clone() };
        Ok(prefix.push(Selection::Field(update(field.clone()))))
    }
}
impl Drop for SelectionSet {
    // Unlink the prefix chain one node at a time. Letting each `Arc` drop its
    // prefix recursively overflows the stack on long sets.
    fn drop(&mut self) {
        let mut next = self.tail.take();
        while let Some(node) = next {
            next = Arc::into_inner(node).and_then(|mut node| node.prefix.take());
        }
    }
}
impl std::fmt::Debug for SelectionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
impl PartialEq for SelectionSet {
    fn eq(&self, other: &Self) -> bool {
        match (&self.tail, &other.tail) {
            (Some(self_tail), Some(other_tail)) if Arc::ptr_eq(self_tail, other_tail) => true,
            _ => self.len() == other.len() && self.iter().eq(other.iter()),
        }
    }
}
impl std::convert::From<Raw> for SelectionSet {
    fn from(value: Raw) -> Self {
        Self::new().push(Selection::Raw(value))
    }
}
impl std::convert::From<FieldSelection> for SelectionSet {
    fn from(value: FieldSelection) -> Self {
        Self::new().push(Selection::Field(value))
    }
}
impl std::iter::FromIterator<Selection> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = Selection>>(iter: T) -> Self {
        iter.into_iter().fold(Self::new(), |set, selection| set.push(selection))
    }
}

/// Returned by [`SelectionSet::alias()`]. The only thing to do with an alias
/// is to select a field under it.
#[derive(Clone, Debug)]
#[must_use = "an alias does nothing until a field is selected under it"]
pub struct AliasForNextField {
    alias: String,
    selection_set: SelectionSet,
}
impl AliasForNextField {
    /// Append a field named `name` selected under this alias.
    pub fn field(self, name: impl Into<String>) -> SelectionSet {
        self.selection_set.push(Selection::Field(
            FieldSelection::new(name).with_alias(self.alias),
        ))
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SelectionSetBuildError {
    #[error("Can not attach arguments or a sub-selection to an empty selection set")]
    EmptySelectionSet,

    #[error("A field's sub-selection must select at least one field")]
    EmptySubSelection,

    #[error(
        "Arguments and sub-selections can only be attached to a field, but \
        the last selection is not a field"
    )]
    LastSelectionNotAField,
}
