
use serde_json::json;

fn type_ref(kind: &str, name: &str) -> serde_json::Value {
    json!({ "kind": kind, "name": name, "ofType": null })
}

fn non_null(of_type: serde_json::Value) -> serde_json::Value {
    json!({ "kind": "NON_NULL", "name": null, "ofType": of_type })
}

fn field(
    name: &str,
    type_ref: serde_json::Value,
    args: Vec<serde_json::Value>,
) -> serde_json::Value {
    json!({
        "name": name,
        "description": null,
        "args": args,
        "type": type_ref,
        "isDeprecated": false,
        "deprecationReason": null,
    })
}

fn object_type(name: &str, fields: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "kind": "OBJECT",
        "name": name,
        "description": null,
        "fields": fields,
        "inputFields": null,
        "interfaces": [],
        "enumValues": null,
        "possibleTypes": null,
    })
}

fn scalar_type(name: &str) -> serde_json::Value {
    json!({
        "kind": "SCALAR",
        "name": name,
        "description": null,
        "fields": null,
        "inputFields": null,
        "interfaces": null,
        "enumValues": null,
        "possibleTypes": null,
    })
}

/// The `data` of an introspection response for:
///
/// ```graphql
/// type Query { greeting(name: String!): String!, count: Int }
/// type Subscription { ticks: Int! }
/// ```
fn greeting_schema_data() -> serde_json::Value {
    json!({
        "__schema": {
            "queryType": { "name": "Query" },
            "mutationType": null,
            "subscriptionType": { "name": "Subscription" },
            "directives": [],
            "types": [
                scalar_type("Boolean"),
                scalar_type("Int"),
                scalar_type("String"),
                object_type("Query", vec![
                    field("greeting", non_null(type_ref("SCALAR", "String")), vec![json!({
                        "name": "name",
                        "description": null,
                        "type": non_null(type_ref("SCALAR", "String")),
                        "defaultValue": null,
                    })]),
                    field("count", type_ref("SCALAR", "Int"), vec![]),
                ]),
                object_type("Subscription", vec![
                    field("ticks", non_null(type_ref("SCALAR", "Int")), vec![]),
                ]),
            ],
        },
    })
}

fn greeting_schema() -> typedgql_core::schema::Schema {
    typedgql_core::schema::SchemaBuilder::new()
        .load_json_value(greeting_schema_data())
        .unwrap()
        .build()
        .unwrap()
}
