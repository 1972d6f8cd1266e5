#![allow(unused_crate_dependencies)]

use graphql_reflect::{record, BuildError, CollisionPolicy, Computed, Error, SchemaOptions};
use serde_json::json;

struct Owner {
    name: String,
    city: String,
}

record!(Owner { name, city });

struct Toy {
    name: String,
    squeaks: bool,
}

record!(Toy { name, squeaks });

struct Dog {
    owner: Owner,
    name: String,
    toys: Vec<Toy>,
    weights: Option<Vec<f64>>,
    notes: std::collections::HashMap<String, String>,
    mood: Computed<Dog, serde_json::Value>,
    bark: Computed<Dog, String>,
}

record!(Dog { ..owner, name, toys, weights, notes, mood, bark });

fn dog() -> Dog {
    Dog {
        owner: Owner {
            name: "Alice".to_owned(),
            city: "Berlin".to_owned(),
        },
        name: "Bello".to_owned(),
        toys: vec![
            Toy {
                name: "Duck".to_owned(),
                squeaks: true,
            },
            Toy {
                name: "Rope".to_owned(),
                squeaks: false,
            },
        ],
        weights: Some(vec![4.5, 6.0, 8.25]),
        notes: Default::default(),
        mood: Computed::none(),
        bark: Computed::new(|dog: &Dog| Ok(format!("{}: woof", dog.name))),
    }
}

fn run(root: Dog, text: &str) -> serde_json::Value {
    let bytes = graphql_reflect::query("dog", root, text).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn arguments_follow_the_element_type() {
    let schema = graphql_reflect::build_schema::<Dog>("dog", &SchemaOptions::default()).unwrap();
    let sdl = schema.sdl();

    assert!(sdl.contains("type RootQuery"), "{sdl}");
    assert!(sdl.contains("input ToyFilter"), "{sdl}");
    assert!(sdl.contains("where: ToyFilter"), "{sdl}");
    assert!(sdl.contains("skip: Int"), "{sdl}");
    assert!(sdl.contains("limit: Int"), "{sdl}");
    assert!(!sdl.contains("notes"), "{sdl}");
    assert!(!sdl.contains("mood"), "{sdl}");
    assert!(!sdl.contains("DogFilter"), "{sdl}");
}

#[test]
fn embedded_members_are_promoted() {
    let response = run(dog(), "{ dog { name city owner { name } } }");

    // The dog's own name shadows the owner's.
    assert_eq!(
        response,
        json!({
            "data": {
                "dog": { "name": "Bello", "city": "Berlin", "owner": { "name": "Alice" } }
            }
        })
    );
}

#[test]
fn optional_lists_are_paginated() {
    let response = run(dog(), "{ dog { weights(skip: 1) bark } }");

    assert_eq!(response["data"]["dog"], json!({ "weights": [6.0, 8.25], "bark": "Bello: woof" }));
}

#[test]
fn filters_match_booleans() {
    let response = run(dog(), "{ dog { toys(where: { squeaks: false }) { name } } }");

    assert_eq!(response["data"]["dog"]["toys"], json!([{ "name": "Rope" }]));
}

#[test]
fn root_type_name_is_configurable() {
    let options = SchemaOptions {
        root_type_name: "Query".to_owned(),
        ..Default::default()
    };

    let bytes = graphql_reflect::query_with_options("dog", dog(), "{ __typename dog { name } }", &options).unwrap();
    let response: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(response["data"], json!({ "__typename": "Query", "dog": { "name": "Bello" } }));
}

#[allow(non_snake_case)]
struct Loud {
    bark: String,
    BARK: String,
}

record!(Loud { bark, BARK });

fn loud() -> Loud {
    Loud {
        bark: "woof".to_owned(),
        BARK: "WOOF".to_owned(),
    }
}

#[test]
fn case_folding_keeps_the_first_member() {
    let bytes = graphql_reflect::query("loud", loud(), "{ loud { bark } }").unwrap();
    let response: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(response["data"]["loud"]["bark"], "woof");
}

#[test]
fn case_folding_can_be_rejected() {
    let options = SchemaOptions {
        on_collision: CollisionPolicy::Reject,
        ..Default::default()
    };

    let error = graphql_reflect::query_with_options("loud", loud(), "{ loud { bark } }", &options).unwrap_err();

    let Error::Build(BuildError::FieldCollision { type_name, field, .. }) = &error else {
        unreachable!("unexpected error: {error:?}");
    };
    assert_eq!((*type_name, field.as_str()), ("Loud", "bark"));
}

struct ToyFilter {
    label: String,
}

record!(ToyFilter { label });

struct Shelf {
    toys: Vec<Toy>,
    tag: ToyFilter,
}

record!(Shelf { toys, tag });

#[test]
fn records_cannot_take_filter_names() {
    let error = graphql_reflect::build_schema::<Shelf>("shelf", &SchemaOptions::default()).unwrap_err();

    insta::assert_snapshot!(error.to_string(), @"record `ToyFilter` has the same name as a filter input type");
}

struct RootQuery {
    name: String,
}

record!(RootQuery { name });

#[test]
fn records_cannot_take_the_root_type_name() {
    let root = RootQuery {
        name: "Bello".to_owned(),
    };

    let error = graphql_reflect::query("root", root, "{ root { name } }").unwrap_err();

    let Error::Build(BuildError::TypeNameCollision { record, taken_by }) = &error else {
        unreachable!("unexpected error: {error:?}");
    };
    assert_eq!((*record, *taken_by), ("RootQuery", "the root type"));

    // Renaming the root type makes room for the record.
    let options = SchemaOptions {
        root_type_name: "Query".to_owned(),
        ..Default::default()
    };
    let root = RootQuery {
        name: "Bello".to_owned(),
    };

    let bytes = graphql_reflect::query_with_options("root", root, "{ root { name } }", &options).unwrap();
    let response: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(response, json!({ "data": { "root": { "name": "Bello" } } }));
}

struct Item {
    r#type: String,
    r#async: bool,
}

record!(Item { r#type, r#async });

#[test]
fn raw_identifiers_lose_their_prefix() {
    let schema = graphql_reflect::build_schema::<Item>("item", &SchemaOptions::default()).unwrap();
    let sdl = schema.sdl();

    assert!(sdl.contains("type: String"), "{sdl}");
    assert!(!sdl.contains("r#"), "{sdl}");

    let item = Item {
        r#type: "tool".to_owned(),
        r#async: true,
    };

    let bytes = graphql_reflect::query("item", item, "{ item { type async } }").unwrap();
    let response: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(response, json!({ "data": { "item": { "type": "tool", "async": true } } }));
}
