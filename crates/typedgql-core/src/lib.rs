pub mod introspection;
mod named_ref;
pub mod operation;
pub mod response;
pub mod schema;
pub mod serialize;
pub mod types;
pub mod validation;
mod value;

pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use value::CustomScalarValue;
pub use value::GraphQLScalarValue;
pub use value::Value;

#[cfg(test)]
mod test;
