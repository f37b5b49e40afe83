use crate::schema::Schema;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects)
/// defined within some [`Schema`].
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType(pub(crate) ObjectOrInterfaceTypeData);

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectType {
    /// The description of this [`ObjectType`] as reported by introspection.
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    /// Look up a [`Field`] defined on this [`ObjectType`] by name. This
    /// includes the implicit `__typename` meta field.
    pub fn field(&self, field_name: &str) -> Option<&Field> {
        self.0.field(field_name)
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`ObjectType`].
    ///
    /// This returns an [`IndexMap`] to guarantee that map entries retain the
    /// same ordering as the order of fields reported by introspection. Meta
    /// fields (`__typename` and friends) come last.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    /// Indicates if this [`ObjectType`] implements the given interface,
    /// either directly or through one of the interfaces it implements.
    pub fn implements_interface<'schema>(
        &self,
        schema: &'schema Schema,
        interface: &'schema InterfaceType,
    ) -> bool {
        self.0.implements_interface(schema, interface)
    }

    /// The list of [`InterfaceType`]s implemented by this [`ObjectType`].
    pub fn interfaces<'schema>(&self, schema: &'schema Schema) -> Vec<&'schema InterfaceType> {
        self.0.interfaces(schema)
    }

    /// The names of all [`InterfaceType`]s implemented by this [`ObjectType`].
    ///
    /// This can be useful when the [`Schema`] object is unavailable or
    /// inconvenient to access but the type's name is all that is needed.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    /// The name of this [`ObjectType`].
    pub fn name(&self) -> &str {
        self.0.name()
    }
}
