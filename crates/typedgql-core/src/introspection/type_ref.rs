use crate::introspection::IntrospectionTypeRef;
use crate::introspection::SchemaLoadError;
use crate::introspection::TypeKind;

/// A checked type reference. Wrapper kinds always carry their inner
/// reference and named kinds always carry a name.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeRef {
    List(Box<TypeRef>),
    Named {
        kind: TypeKind,
        name: String,
    },
    NonNull(Box<TypeRef>),
}
impl TypeRef {
    /// The name of the type found after unwrapping every `LIST` and
    /// `NON_NULL` layer.
    pub fn innermost_name(&self) -> &str {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.innermost_name(),
            Self::Named { name, .. } => name.as_str(),
        }
    }
}
impl std::convert::TryFrom<&IntrospectionTypeRef> for TypeRef {
    type Error = SchemaLoadError;

    fn try_from(raw: &IntrospectionTypeRef) -> Result<Self, Self::Error> {
        let malformed = || SchemaLoadError::MalformedTypeRef {
            kind: raw.kind.to_string(),
            name: raw.name.to_owned(),
        };

        let kind: TypeKind = raw.kind.parse()?;
        if kind.is_wrapper() {
            let inner = raw.of_type.as_deref().ok_or_else(malformed)?;
            let inner = Box::new(Self::try_from(inner)?);
            Ok(match kind {
                TypeKind::List => Self::List(inner),
                _ => Self::NonNull(inner),
            })
        } else {
            let name = raw.name.as_ref().ok_or_else(malformed)?;
            Ok(Self::Named {
                kind,
                name: name.to_string(),
            })
        }
    }
}
