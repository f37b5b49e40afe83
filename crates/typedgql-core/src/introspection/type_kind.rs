use crate::introspection::SchemaLoadError;

/// The `__TypeKind` reported for a type or type reference by introspection.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeKind {
    Enum,
    InputObject,
    Interface,
    List,
    NonNull,
    Object,
    Scalar,
    Union,
}
impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::Interface => "INTERFACE",
            Self::List => "LIST",
            Self::NonNull => "NON_NULL",
            Self::Object => "OBJECT",
            Self::Scalar => "SCALAR",
            Self::Union => "UNION",
        }
    }

    /// `LIST` and `NON_NULL` wrap another type reference; every other kind
    /// names a type.
    pub fn is_wrapper(&self) -> bool {
        matches!(self, Self::List | Self::NonNull)
    }
}
impl std::str::FromStr for TypeKind {
    type Err = SchemaLoadError;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        Ok(match kind {
            "ENUM" => Self::Enum,
            "INPUT_OBJECT" => Self::InputObject,
            "INTERFACE" => Self::Interface,
            "LIST" => Self::List,
            "NON_NULL" => Self::NonNull,
            "OBJECT" => Self::Object,
            "SCALAR" => Self::Scalar,
            "UNION" => Self::Union,
            _ => return Err(SchemaLoadError::UnknownTypeKind {
                kind: kind.to_string(),
                type_name: None,
            }),
        })
    }
}
impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
