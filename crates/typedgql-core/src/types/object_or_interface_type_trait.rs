use crate::schema::Schema;
use crate::types::Field;
use crate::types::InterfaceType;
use indexmap::IndexMap;

pub(super) trait ObjectOrInterfaceTypeTrait {
    fn description(&self) -> Option<&str>;
    fn field(&self, field_name: &str) -> Option<&Field>;
    fn fields(&self) -> &IndexMap<String, Field>;
    fn implements_interface<'schema>(
        &self,
        schema: &'schema Schema,
        interface: &'schema InterfaceType,
    ) -> bool;
    fn interfaces<'schema>(&self, schema: &'schema Schema) -> Vec<&'schema InterfaceType>;
    fn interface_names(&self) -> Vec<&str>;
    fn name(&self) -> &str;
}
