//! Schema fixtures shared by the unit tests of every module.
//!
//! Fixtures are written as introspection JSON (the only input a
//! [`Schema`] is ever built from) using the small `json!` helpers below.

use crate::Value;
use crate::response::ResponseValue;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::types::ScalarCodec;
use serde_json::json;

pub fn named(kind: &str, name: &str) -> serde_json::Value {
    json!({ "kind": kind, "name": name, "ofType": null })
}

pub fn non_null(of_type: serde_json::Value) -> serde_json::Value {
    json!({ "kind": "NON_NULL", "name": null, "ofType": of_type })
}

pub fn list(of_type: serde_json::Value) -> serde_json::Value {
    json!({ "kind": "LIST", "name": null, "ofType": of_type })
}

pub fn scalar_ref(name: &str) -> serde_json::Value {
    named("SCALAR", name)
}

pub fn input_value(
    name: &str,
    type_ref: serde_json::Value,
    default_value: Option<&str>,
) -> serde_json::Value {
    json!({
        "name": name,
        "description": null,
        "type": type_ref,
        "defaultValue": default_value,
    })
}

pub fn field(
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

pub fn scalar_type(name: &str) -> serde_json::Value {
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

pub fn object_type(
    name: &str,
    interfaces: &[&str],
    fields: Vec<serde_json::Value>,
) -> serde_json::Value {
    json!({
        "kind": "OBJECT",
        "name": name,
        "description": null,
        "fields": fields,
        "inputFields": null,
        "interfaces": interfaces.iter()
            .map(|name| named("INTERFACE", name))
            .collect::<Vec<_>>(),
        "enumValues": null,
        "possibleTypes": null,
    })
}

pub fn interface_type(
    name: &str,
    fields: Vec<serde_json::Value>,
    possible_types: &[&str],
) -> serde_json::Value {
    json!({
        "kind": "INTERFACE",
        "name": name,
        "description": null,
        "fields": fields,
        "inputFields": null,
        "interfaces": [],
        "enumValues": null,
        "possibleTypes": possible_types.iter()
            .map(|name| named("OBJECT", name))
            .collect::<Vec<_>>(),
    })
}

pub fn union_type(name: &str, possible_types: &[&str]) -> serde_json::Value {
    json!({
        "kind": "UNION",
        "name": name,
        "description": null,
        "fields": null,
        "inputFields": null,
        "interfaces": null,
        "enumValues": null,
        "possibleTypes": possible_types.iter()
            .map(|name| named("OBJECT", name))
            .collect::<Vec<_>>(),
    })
}

pub fn enum_type(name: &str, values: &[(&str, bool)]) -> serde_json::Value {
    json!({
        "kind": "ENUM",
        "name": name,
        "description": null,
        "fields": null,
        "inputFields": null,
        "interfaces": null,
        "enumValues": values.iter()
            .map(|(value_name, is_deprecated)| json!({
                "name": value_name,
                "description": null,
                "isDeprecated": is_deprecated,
                "deprecationReason": if *is_deprecated {
                    Some("No longer supported")
                } else {
                    None
                },
            }))
            .collect::<Vec<_>>(),
        "possibleTypes": null,
    })
}

pub fn input_object_type(
    name: &str,
    input_fields: Vec<serde_json::Value>,
) -> serde_json::Value {
    json!({
        "kind": "INPUT_OBJECT",
        "name": name,
        "description": null,
        "fields": null,
        "inputFields": input_fields,
        "interfaces": null,
        "enumValues": null,
        "possibleTypes": null,
    })
}

/// The introspection `data` of a small schema about dogs and their owners:
///
/// ```graphql
/// scalar DateTime
/// enum DogCommand { SIT, HEEL, SIT_DOWN, ROLL_OVER @deprecated }
/// interface Node { id: ID! }
/// interface Animal { name: String! }
/// type Dog implements Animal & Node {
///   id: ID!
///   name: String!
///   nickname: String
///   barkVolume: Int
///   weight: Float
///   birthday: DateTime
///   isHousetrained(atOtherHomes: Boolean): Boolean!
///   doesKnowCommand(command: DogCommand!): Boolean!
///   knownCommands: [DogCommand!]!
///   tags: [String!]!
///   owner: Human
///   friends(first: Int = 10, after: ID): [Dog!]!
/// }
/// type Human implements Node {
///   id: ID!
///   name: String!
///   pets: [Animal]!
///   dogs(filter: DogFilter): [Dog!]
/// }
/// union SearchResult = Dog | Human
/// input DogFilter {
///   nameContains: String
///   minBarkVolume: Int
///   knows: [DogCommand!]
///   bornAfter: DateTime
///   limit: Int!
///   offset: Int! = 0
/// }
/// type Query {
///   dog(id: ID!): Dog
///   dogs(filter: DogFilter): [Dog!]!
///   search(term: String!): [SearchResult!]!
///   node(id: ID!): Node
///   me: Human!
/// }
/// type Mutation { adoptDog(dogId: ID!, command: DogCommand): Dog }
/// ```
pub fn dog_schema_json() -> serde_json::Value {
    json!({
        "__schema": {
            "queryType": { "name": "Query" },
            "mutationType": { "name": "Mutation" },
            "subscriptionType": null,
            "directives": [],
            "types": [
                scalar_type("Boolean"),
                scalar_type("String"),
                scalar_type("ID"),
                scalar_type("Int"),
                scalar_type("Float"),
                scalar_type("DateTime"),
                enum_type("DogCommand", &[
                    ("SIT", false),
                    ("HEEL", false),
                    ("SIT_DOWN", false),
                    ("ROLL_OVER", true),
                ]),
                interface_type("Node", vec![
                    field("id", non_null(scalar_ref("ID")), vec![]),
                ], &["Dog", "Human"]),
                interface_type("Animal", vec![
                    field("name", non_null(scalar_ref("String")), vec![]),
                ], &["Dog"]),
                object_type("Dog", &["Animal", "Node"], vec![
                    field("id", non_null(scalar_ref("ID")), vec![]),
                    field("name", non_null(scalar_ref("String")), vec![]),
                    field("nickname", scalar_ref("String"), vec![]),
                    field("barkVolume", scalar_ref("Int"), vec![]),
                    field("weight", scalar_ref("Float"), vec![]),
                    field("birthday", scalar_ref("DateTime"), vec![]),
                    field("isHousetrained", non_null(scalar_ref("Boolean")), vec![
                        input_value("atOtherHomes", scalar_ref("Boolean"), None),
                    ]),
                    field("doesKnowCommand", non_null(scalar_ref("Boolean")), vec![
                        input_value("command", non_null(named("ENUM", "DogCommand")), None),
                    ]),
                    field(
                        "knownCommands",
                        non_null(list(non_null(named("ENUM", "DogCommand")))),
                        vec![],
                    ),
                    field("tags", non_null(list(non_null(scalar_ref("String")))), vec![]),
                    field("owner", named("OBJECT", "Human"), vec![]),
                    field("friends", non_null(list(non_null(named("OBJECT", "Dog")))), vec![
                        input_value("first", scalar_ref("Int"), Some("10")),
                        input_value("after", scalar_ref("ID"), None),
                    ]),
                ]),
                object_type("Human", &["Node"], vec![
                    field("id", non_null(scalar_ref("ID")), vec![]),
                    field("name", non_null(scalar_ref("String")), vec![]),
                    field("pets", non_null(list(named("INTERFACE", "Animal"))), vec![]),
                    field("dogs", list(non_null(named("OBJECT", "Dog"))), vec![
                        input_value("filter", named("INPUT_OBJECT", "DogFilter"), None),
                    ]),
                ]),
                union_type("SearchResult", &["Dog", "Human"]),
                input_object_type("DogFilter", vec![
                    input_value("nameContains", scalar_ref("String"), None),
                    input_value("minBarkVolume", scalar_ref("Int"), None),
                    input_value("knows", list(non_null(named("ENUM", "DogCommand"))), None),
                    input_value("bornAfter", scalar_ref("DateTime"), None),
                    input_value("limit", non_null(scalar_ref("Int")), None),
                    input_value("offset", non_null(scalar_ref("Int")), Some("0")),
                ]),
                object_type("Query", &[], vec![
                    field("dog", named("OBJECT", "Dog"), vec![
                        input_value("id", non_null(scalar_ref("ID")), None),
                    ]),
                    field("dogs", non_null(list(non_null(named("OBJECT", "Dog")))), vec![
                        input_value("filter", named("INPUT_OBJECT", "DogFilter"), None),
                    ]),
                    field(
                        "search",
                        non_null(list(non_null(named("UNION", "SearchResult")))),
                        vec![input_value("term", non_null(scalar_ref("String")), None)],
                    ),
                    field("node", named("INTERFACE", "Node"), vec![
                        input_value("id", non_null(scalar_ref("ID")), None),
                    ]),
                    field("me", non_null(named("OBJECT", "Human")), vec![]),
                ]),
                object_type("Mutation", &[], vec![
                    field("adoptDog", named("OBJECT", "Dog"), vec![
                        input_value("dogId", non_null(scalar_ref("ID")), None),
                        input_value("command", named("ENUM", "DogCommand"), None),
                    ]),
                ]),
            ],
        },
    })
}

/// Accepts `YYYY-MM-DD` date strings and loads them unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct DateCodec;
impl DateCodec {
    fn check(text: &str) -> Result<(), String> {
        let parts: Vec<&str> = text.split('-').collect();
        let well_formed = parts.len() == 3
            && parts.iter().zip([4, 2, 2]).all(|(part, len)| {
                part.len() == len && part.chars().all(|ch| ch.is_ascii_digit())
            });
        if well_formed {
            Ok(())
        } else {
            Err(format!("`{text}` is not a YYYY-MM-DD date"))
        }
    }
}
impl ScalarCodec for DateCodec {
    fn coerce(&self, value: &Value) -> Result<(), String> {
        match value {
            Value::String(text) => Self::check(text),
            _ => Err(format!("expected a date string, found {}", value.kind_name())),
        }
    }

    fn load(&self, value: &serde_json::Value) -> Result<ResponseValue, String> {
        let text = value.as_str()
            .ok_or_else(|| format!("expected a date string, found `{value}`"))?;
        Self::check(text)?;
        Ok(ResponseValue::String(text.to_string()))
    }
}

/// A date, passed as an argument through [`Value::custom`].
#[derive(Clone, Debug, PartialEq)]
pub struct Date {
    pub day: u8,
    pub month: u8,
    pub year: u16,
}
impl crate::GraphQLScalarValue for Date {
    fn scalar_name(&self) -> &str {
        "DateTime"
    }

    fn dump(&self) -> Value {
        Value::String(format!("{:04}-{:02}-{:02}", self.year, self.month, self.day))
    }
}

pub fn dog_schema() -> Schema {
    SchemaBuilder::new()
        .load_json_value(dog_schema_json())
        .unwrap()
        .bind_scalar("DateTime", DateCodec)
        .build()
        .unwrap()
}

/// Build a schema from the given introspection `types`, with `Query` as the
/// query root.
pub fn schema_with_types(types: Vec<serde_json::Value>) -> Schema {
    SchemaBuilder::new()
        .load_json_value(json!({
            "__schema": {
                "queryType": { "name": "Query" },
                "mutationType": null,
                "subscriptionType": null,
                "types": types,
            },
        }))
        .unwrap()
        .build()
        .unwrap()
}
