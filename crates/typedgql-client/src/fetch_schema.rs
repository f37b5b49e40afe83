use crate::ExecutionError;
use crate::Executor;
use typedgql_core::schema::Schema;
use typedgql_core::schema::SchemaBuilder;
use typedgql_core::types::ScalarBindings;

/// Introspect the endpoint behind `executor` and build a [`Schema`] from the
/// result, binding custom scalars with `scalar_bindings`.
pub async fn fetch_schema(
    executor: &Executor,
    scalar_bindings: ScalarBindings,
) -> Result<Schema, ExecutionError> {
    let introspection = executor.introspect().await?;
    Ok(
        SchemaBuilder::new()
            .with_scalar_bindings(scalar_bindings)
            .load_introspection(introspection)
            .build()?
    )
}
