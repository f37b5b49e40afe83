use crate::introspection::INTROSPECTION_QUERY;
use crate::introspection::IntrospectionSchema;
use crate::introspection::SchemaLoadError;
use crate::test;
use serde_json::json;

type Result<T> = std::result::Result<T, SchemaLoadError>;

#[test]
fn introspection_query_is_valid_graphql() {
    let document = graphql_parser::parse_query::<String>(INTROSPECTION_QUERY)
        .expect("introspection query parses");
    assert!(!document.definitions.is_empty());
    assert!(INTROSPECTION_QUERY.contains("__schema"));
    assert!(INTROSPECTION_QUERY.contains("subscriptionType"));
    assert!(INTROSPECTION_QUERY.contains("includeDeprecated: true"));
}

#[test]
fn accepts_response_data_and_bare_schema() -> Result<()> {
    let wrapped = test::dog_schema_json();
    let bare = wrapped["__schema"].clone();

    let from_wrapped = IntrospectionSchema::from_json_value(wrapped)?;
    let from_bare = IntrospectionSchema::from_json_value(bare)?;

    assert_eq!(from_wrapped, from_bare);
    assert_eq!(from_wrapped.query_type.as_ref().map(|root| root.name.as_str()), Some("Query"));
    assert_eq!(from_wrapped.mutation_type.as_ref().map(|root| root.name.as_str()), Some("Mutation"));
    assert!(from_wrapped.subscription_type.is_none());

    Ok(())
}

#[test]
fn to_json_value_wraps_in_schema_key() -> Result<()> {
    let introspection = IntrospectionSchema::from_json_value(test::dog_schema_json())?;
    let json = introspection.to_json_value()?;

    assert!(json.get("__schema").is_some());
    assert_eq!(IntrospectionSchema::from_json_value(json)?, introspection);

    Ok(())
}

#[test]
fn missing_types_is_a_json_error() {
    let result = IntrospectionSchema::from_json_str(r#"{"__schema": {"queryType": null}}"#);
    assert!(matches!(result, Err(SchemaLoadError::JsonError(_))));
}

#[test]
fn invalid_json_text_is_a_json_error() {
    let result = IntrospectionSchema::from_json_str("{ not json");
    assert!(matches!(result, Err(SchemaLoadError::JsonError(_))));
}

#[test]
fn absent_optional_members_default_to_none() -> Result<()> {
    let introspection = IntrospectionSchema::from_json_value(json!({
        "types": [{ "kind": "SCALAR", "name": "Date" }],
    }))?;

    let date = &introspection.types[0];
    assert!(introspection.query_type.is_none());
    assert!(introspection.directives.is_empty());
    assert!(date.fields.is_none());
    assert!(date.enum_values.is_none());
    assert!(date.description.is_none());

    Ok(())
}
