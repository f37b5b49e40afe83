use crate::operation::FieldSelection;
use crate::operation::InlineFragment;

/// One entry of a [`SelectionSet`](crate::operation::SelectionSet).
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(FieldSelection),
    InlineFragment(InlineFragment),
    Raw(Raw),
}
impl Selection {
    pub fn as_field(&self) -> Option<&FieldSelection> {
        if let Self::Field(field) = self {
            Some(field)
        } else {
            None
        }
    }

    pub fn as_inline_fragment(&self) -> Option<&InlineFragment> {
        if let Self::InlineFragment(fragment) = self {
            Some(fragment)
        } else {
            None
        }
    }
}
impl std::convert::From<FieldSelection> for Selection {
    fn from(value: FieldSelection) -> Self {
        Self::Field(value)
    }
}
impl std::convert::From<InlineFragment> for Selection {
    fn from(value: InlineFragment) -> Self {
        Self::InlineFragment(value)
    }
}
impl std::convert::From<Raw> for Selection {
    fn from(value: Raw) -> Self {
        Self::Raw(value)
    }
}

/// Protocol text included verbatim in a query. A [`Raw`] selection is never
/// validated and is skipped when loading a response.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Raw {
    text: String,
}
impl Raw {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }
}
