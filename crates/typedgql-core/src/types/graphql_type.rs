use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;

/// Represents a named GraphQL type defined within some [`Schema`].
///
/// The five built-in scalars are represented by dedicated variants and are
/// always present in a [`Schema`], whether or not the introspection input
/// listed them.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Bool,
    Enum(EnumType),
    Float,
    ID,
    InputObject(InputObjectType),
    Int,
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}
impl GraphQLType {
    /// If this [`GraphQLType`] is a [`GraphQLType::Enum`], unwrap and return
    /// a reference to the inner [`EnumType`].
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// If this [`GraphQLType`] is a [`GraphQLType::InputObject`], unwrap and
    /// return a reference to the inner [`InputObjectType`].
    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// If this [`GraphQLType`] is a [`GraphQLType::Interface`], unwrap and
    /// return a reference to the inner [`InterfaceType`].
    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// If this [`GraphQLType`] is a [`GraphQLType::Object`], unwrap and return
    /// a reference to the inner [`ObjectType`].
    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// If this [`GraphQLType`] is a [`GraphQLType::Scalar`], unwrap and return
    /// a reference to the inner [`ScalarType`].
    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// If this [`GraphQLType`] is a [`GraphQLType::Union`], unwrap and return
    /// a reference to the inner [`UnionType`].
    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// The description of this type as reported by introspection. Built-in
    /// scalars have no description.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Bool
                | Self::Float
                | Self::ID
                | Self::Int
                | Self::String => None,
            Self::Enum(t) => t.description(),
            Self::InputObject(t) => t.description(),
            Self::Interface(t) => t.description(),
            Self::Object(t) => t.description(),
            Self::Scalar(t) => t.description(),
            Self::Union(t) => t.description(),
        }
    }

    /// The fields that can be selected on this type. Only object and
    /// interface types have fields.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match self {
            Self::Interface(t) => Some(t.fields()),
            Self::Object(t) => Some(t.fields()),
            _ => None,
        }
    }

    /// Indicates if this is one of the five scalar types built into GraphQL.
    pub fn is_builtin(&self) -> bool {
        matches!(
            self,
            Self::Bool | Self::Float | Self::ID | Self::Int | Self::String,
        )
    }

    /// Indicates if this type may be used as the type of an argument or an
    /// input field.
    pub fn is_input_type(&self) -> bool {
        match self {
            Self::Bool
                | Self::Enum(_)
                | Self::Float
                | Self::ID
                | Self::InputObject(_)
                | Self::Int
                | Self::Scalar(_)
                | Self::String => true,
            Self::Interface(_)
                | Self::Object(_)
                | Self::Union(_) => false,
        }
    }

    /// Indicates if this type may be used as the result type of a field.
    pub fn is_output_type(&self) -> bool {
        !matches!(self, Self::InputObject(_))
    }

    /// Indicates if a value of this type can be used wherever a value of
    /// `other` is expected: the types are the same, `self` is an object or
    /// interface implementing the `other` interface, or `self` is an object
    /// that is a member of the `other` union.
    pub fn is_subtype_of(&self, schema: &Schema, other: &GraphQLType) -> bool {
        if self.name() == other.name() {
            return true;
        }

        match (self, other) {
            (Self::Object(obj_type), Self::Interface(iface_type))
                => obj_type.implements_interface(schema, iface_type),
            (Self::Interface(self_iface), Self::Interface(iface_type))
                => self_iface.implements_interface(schema, iface_type),
            (Self::Object(obj_type), Self::Union(union_type))
                => union_type.has_member(obj_type.name()),
            _ => false,
        }
    }

    /// The name of this type as it is referenced within the schema.
    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Enum(t) => t.name(),
            Self::Float => "Float",
            Self::ID => "ID",
            Self::InputObject(t) => t.name(),
            Self::Int => "Int",
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::String => "String",
            Self::Union(t) => t.name(),
        }
    }

    /// Indicates if a field whose result is this type may carry a nested
    /// selection set.
    pub fn supports_selections(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Object(_) | Self::Union(_))
    }

    pub(crate) fn builtin(name: &str) -> Option<Self> {
        match name {
            "Boolean" => Some(Self::Bool),
            "Float" => Some(Self::Float),
            "ID" => Some(Self::ID),
            "Int" => Some(Self::Int),
            "String" => Some(Self::String),
            _ => None,
        }
    }
}
impl DerefByName for GraphQLType {
    type Source = Schema;

    fn deref_name<'a>(
        schema: &'a Schema,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        schema.types.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}
