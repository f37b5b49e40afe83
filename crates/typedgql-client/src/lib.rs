//! Async HTTP execution of `typedgql` operations.
//!
//! An [`Executor`] POSTs serialized documents to a single GraphQL endpoint
//! as `{"query": ...}` and hands back either the response's `data` or a
//! typed [`ResponseObject`](typedgql_core::response::ResponseObject). Errors
//! are surfaced once as an [`ExecutionError`]; nothing is retried.

mod execution_error;
mod executor;
mod executor_builder;
mod fetch_schema;

pub use execution_error::ExecutionError;
pub use executor::Executor;
pub use executor_builder::ExecutorBuildError;
pub use executor_builder::ExecutorBuilder;
pub use fetch_schema::fetch_schema;

#[cfg(test)]
mod tests;
