//! Build GraphQL queries that are checked against a server's schema before
//! they are sent.
//!
//! The schema comes from an introspection result (see
//! [`schema::SchemaBuilder`]), selections are assembled with
//! [`operation::SelectionSet`] or the [`selection!`] macro, and a validated
//! [`operation::Operation`] renders to GraphQL text. With the default
//! `client` feature, [`client::Executor`] sends operations over HTTP.

pub use typedgql_core::*;

/// Async HTTP execution of [`Operation`](crate::operation::Operation)s and
/// schema introspection against a live GraphQL endpoint.
#[cfg(feature = "client")]
pub mod client {
    pub use typedgql_client::*;
}
