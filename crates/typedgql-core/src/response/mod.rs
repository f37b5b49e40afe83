//! Parsing GraphQL response envelopes and loading their `data` into typed
//! values, guided by the selection set that produced them.

mod graphql_response;
mod load_error;
mod response_loader;
mod response_value;

pub use graphql_response::ErrorResponse;
pub use graphql_response::GraphQLResponse;
pub use load_error::LoadError;
pub use load_error::ResponsePath;
pub use load_error::ResponsePathSegment;
pub use response_loader::ResponseLoader;
pub use response_value::ResponseObject;
pub use response_value::ResponseValue;
