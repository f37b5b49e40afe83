use crate::introspection::TypeRef;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;

/// Represents the resolved type of a [`Field`](crate::types::Field),
/// [`Parameter`](crate::types::Parameter), or
/// [`InputField`](crate::types::InputField).
///
/// Annotations are non-null by default: a value that may be null is wrapped
/// in [`TypeAnnotation::Nullable`]. This mirrors how introspection reports
/// types (where `NON_NULL` wraps a nullable type) turned inside out, so that
/// `String` resolves to `Nullable(Named(String))` and `[String!]!` resolves to
/// `List(Named(String))`.
///
/// Annotations are compared structurally: two `List` annotations are equal
/// iff their inner annotations are equal.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeAnnotation {
    List(Box<TypeAnnotation>),
    Named(NamedGraphQLTypeRef),
    Nullable(Box<TypeAnnotation>),
}
impl TypeAnnotation {
    /// Resolve an introspection [`TypeRef`]: `NON_NULL` unwraps to the
    /// required inner type, `LIST` wraps the resolved inner type, and any
    /// reference not wrapped in `NON_NULL` is wrapped in
    /// [`TypeAnnotation::Nullable`].
    pub fn from_type_ref(type_ref: &TypeRef) -> Self {
        match type_ref {
            TypeRef::NonNull(inner) => Self::from_required_type_ref(inner),
            _ => Self::Nullable(Box::new(Self::from_required_type_ref(type_ref))),
        }
    }

    fn from_required_type_ref(type_ref: &TypeRef) -> Self {
        match type_ref {
            TypeRef::List(inner) =>
                Self::List(Box::new(Self::from_type_ref(inner))),
            TypeRef::Named { name, .. } =>
                Self::Named(NamedGraphQLTypeRef::new(name)),
            // `NON_NULL` of `NON_NULL` is redundant; collapse it.
            TypeRef::NonNull(inner) =>
                Self::from_required_type_ref(inner),
        }
    }

    pub fn list(inner: TypeAnnotation) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn named(type_name: impl AsRef<str>) -> Self {
        Self::Named(NamedGraphQLTypeRef::new(type_name))
    }

    pub fn nullable(inner: TypeAnnotation) -> Self {
        Self::Nullable(Box::new(inner))
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// named type reference.
    pub fn innermost_named_type_ref(&self) -> &NamedGraphQLTypeRef {
        match self {
            Self::List(inner) | Self::Nullable(inner) =>
                inner.innermost_named_type_ref(),
            Self::Named(type_ref) => type_ref,
        }
    }

    /// The name of the [`GraphQLType`] found after unwrapping every `List` and
    /// `Nullable` layer.
    pub fn innermost_type_name(&self) -> &str {
        self.innermost_named_type_ref().name()
    }

    /// Look up the [`GraphQLType`] found after unwrapping every `List` and
    /// `Nullable` layer.
    pub fn innermost_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> &'schema GraphQLType {
        self.innermost_named_type_ref()
            .deref(schema)
            .expect("type is present in schema")
    }

    /// Indicates if this annotation admits `null`.
    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }

    /// Strip a single outer [`TypeAnnotation::Nullable`] layer, if present.
    pub fn non_null(&self) -> &TypeAnnotation {
        match self {
            Self::Nullable(inner) => inner,
            _ => self,
        }
    }

    pub fn to_graphql_string(&self) -> String {
        self.to_string()
    }

    fn fmt_impl(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        nullable: bool,
    ) -> std::fmt::Result {
        let suffix = if nullable { "" } else { "!" };
        match self {
            Self::List(inner) => {
                f.write_str("[")?;
                inner.fmt_impl(f, false)?;
                write!(f, "]{suffix}")
            },
            Self::Named(type_ref) => write!(f, "{}{suffix}", type_ref.name()),
            Self::Nullable(inner) => inner.fmt_impl(f, true),
        }
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_impl(f, false)
    }
}
