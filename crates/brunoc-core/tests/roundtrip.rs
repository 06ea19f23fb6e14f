//! # Codec Round-Trip Tests
//!
//! `decode(encode(doc)) == doc` for every decodable document, including the
//! absent / empty / populated distinction on every optional field.
//!
//! Fixed fixtures cover a realistic export; proptest covers the tri-states
//! and arbitrary opaque map contents.

use std::path::PathBuf;

use brunoc_core::{
    decode, encode, encode_pretty, Auth, AwsV4Auth, BasicAuth, BearerAuth, Body, Collection,
    DigestAuth, Environment, EnvironmentVariable, GraphqlBody, Item, KeyValue,
    MultipartFormEntry, OAuth2, OpaqueMap, Request, RequestParam, RequestVars, Script, Uid, Var,
};
use proptest::prelude::*;
use serde_json::Value;

/// Find the repository root.
fn repo_root() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates/
    dir.pop(); // repo root
    dir
}

fn demo_bytes() -> Vec<u8> {
    std::fs::read(repo_root().join("testdata/demo.json")).expect("demo fixture")
}

// ---------------------------------------------------------------------------
// Fixture round-trips
// ---------------------------------------------------------------------------

#[test]
fn demo_fixture_decodes() {
    let doc = decode(&demo_bytes()).unwrap();
    assert_eq!(doc.name, "demo");
    assert_eq!(doc.items.len(), 3);
    assert_eq!(doc.items[0].children().len(), 2);
    assert_eq!(doc.environments[0].variables.as_ref().map(Vec::len), Some(2));
    assert_eq!(doc.requests().count(), 4);
    assert_eq!(
        doc.active_environment().map(|e| e.name.as_str()),
        Some("local")
    );
}

#[test]
fn demo_fixture_roundtrips_as_model() {
    let doc = decode(&demo_bytes()).unwrap();
    assert_eq!(decode(&encode(&doc).unwrap()).unwrap(), doc);
    assert_eq!(decode(&encode_pretty(&doc).unwrap()).unwrap(), doc);
}

#[test]
fn demo_fixture_roundtrips_as_json() {
    // Every key in the fixture is modeled, so re-encoding reproduces it.
    let original: Value = serde_json::from_slice(&demo_bytes()).unwrap();
    let doc = decode(&demo_bytes()).unwrap();
    let reencoded: Value = serde_json::from_slice(&encode(&doc).unwrap()).unwrap();
    assert_eq!(reencoded, original);
}

#[test]
fn unknown_keys_are_dropped_on_encode() {
    let doc = decode(br#"{"name":"x","version":"1","legacy":{"a":1}}"#).unwrap();
    let encoded: Value = serde_json::from_slice(&encode(&doc).unwrap()).unwrap();
    assert!(encoded.get("legacy").is_none());
    assert_eq!(decode(&encode(&doc).unwrap()).unwrap(), doc);
}

#[test]
fn empty_lists_and_absent_lists_stay_distinct() {
    let raw = br#"{"name":"x","items":[
        {"type":"folder","name":"with","items":[]},
        {"type":"folder","name":"without"}
    ]}"#;
    let doc = decode(raw).unwrap();
    assert_eq!(doc.items[0].items, Some(vec![]));
    assert_eq!(doc.items[1].items, None);
    let back = decode(&encode(&doc).unwrap()).unwrap();
    assert_eq!(back.items[0].items, Some(vec![]));
    assert_eq!(back.items[1].items, None);
}

// ---------------------------------------------------------------------------
// Property: arbitrary trees round-trip
// ---------------------------------------------------------------------------

/// Absent, present-but-empty, or present-with-value.
fn tri_string() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[ -~]{1,12}".prop_map(Some),
    ]
}

fn opt_bool() -> impl Strategy<Value = Option<bool>> {
    prop_oneof![Just(None), any::<bool>().prop_map(Some)]
}

fn opt_uid() -> impl Strategy<Value = Option<Uid>> {
    prop_oneof![
        Just(None),
        Just(Some(Uid::new(""))),
        "[A-Za-z0-9]{21}".prop_map(|s| Some(Uid::new(s))),
        "[ -~]{1,8}".prop_map(|s| Some(Uid::new(s))),
    ]
}

fn opt_list<T: std::fmt::Debug + Clone>(
    elem: impl Strategy<Value = T>,
) -> impl Strategy<Value = Option<Vec<T>>> {
    prop_oneof![
        Just(None),
        Just(Some(Vec::new())),
        prop::collection::vec(elem, 1..3).prop_map(Some),
    ]
}

fn literal(options: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(options).prop_map(str::to_string),
        "[a-z]{0,6}",
    ]
}

fn key_value() -> impl Strategy<Value = KeyValue> {
    (opt_uid(), tri_string(), tri_string(), tri_string(), opt_bool()).prop_map(
        |(uid, name, value, description, enabled)| KeyValue {
            uid,
            name,
            value,
            description,
            enabled,
        },
    )
}

fn var() -> impl Strategy<Value = Var> {
    (key_value(), opt_bool()).prop_map(|(kv, local)| Var {
        uid: kv.uid,
        name: kv.name,
        value: kv.value,
        description: kv.description,
        enabled: kv.enabled,
        local,
    })
}

fn param() -> impl Strategy<Value = RequestParam> {
    (key_value(), literal(&["query", "path"])).prop_map(|(kv, kind)| RequestParam {
        uid: kv.uid,
        name: kv.name,
        value: kv.value,
        description: kv.description,
        kind,
        enabled: kv.enabled,
    })
}

fn multipart() -> impl Strategy<Value = MultipartFormEntry> {
    (key_value(), literal(&["file", "text"])).prop_map(|(kv, kind)| MultipartFormEntry {
        uid: kv.uid,
        kind,
        name: kv.name,
        value: kv.value,
        description: kv.description,
        enabled: kv.enabled,
    })
}

fn auth() -> impl Strategy<Value = Auth> {
    let oauth2 = (
        literal(&["client_credentials", "password", "authorization_code"]),
        tri_string(),
        tri_string(),
        opt_bool(),
    )
        .prop_map(|(grant_type, client_id, scope, pkce)| OAuth2 {
            grant_type,
            client_id,
            scope,
            pkce,
            ..OAuth2::default()
        });
    (
        literal(&["inherit", "none", "awsv4", "basic", "bearer", "digest", "oauth2"]),
        prop::option::of((tri_string(), tri_string()).prop_map(|(access_key_id, region)| {
            AwsV4Auth {
                access_key_id,
                region,
                ..AwsV4Auth::default()
            }
        })),
        prop::option::of(
            (tri_string(), tri_string())
                .prop_map(|(username, password)| BasicAuth { username, password }),
        ),
        prop::option::of(tri_string().prop_map(|token| BearerAuth { token })),
        prop::option::of(
            (tri_string(), tri_string())
                .prop_map(|(username, password)| DigestAuth { username, password }),
        ),
        prop::option::of(oauth2),
    )
        .prop_map(|(mode, awsv4, basic, bearer, digest, oauth2)| Auth {
            mode,
            awsv4,
            basic,
            bearer,
            digest,
            oauth2,
        })
}

fn body() -> impl Strategy<Value = Body> {
    (
        literal(&[
            "none",
            "json",
            "text",
            "xml",
            "formUrlEncoded",
            "multipartForm",
            "graphql",
            "sparql",
        ]),
        (tri_string(), tri_string(), tri_string(), tri_string()),
        opt_list(key_value()),
        opt_list(multipart()),
        prop::option::of(
            (tri_string(), tri_string())
                .prop_map(|(query, variables)| GraphqlBody { query, variables }),
        ),
    )
        .prop_map(
            |(mode, (json, text, xml, sparql), form_url_encoded, multipart_form, graphql)| Body {
                mode,
                json,
                text,
                xml,
                sparql,
                form_url_encoded,
                multipart_form,
                graphql,
            },
        )
}

fn request() -> impl Strategy<Value = Request> {
    (
        "[ -~]{0,20}",
        literal(&["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS"]),
        opt_list(key_value()),
        opt_list(param()),
        auth(),
        body(),
        (tri_string(), tri_string()).prop_map(|(req, res)| Script { req, res }),
        prop::option::of(
            (opt_list(var()), opt_list(var())).prop_map(|(req, res)| RequestVars { req, res }),
        ),
        opt_list(key_value()),
        (tri_string(), tri_string()),
    )
        .prop_map(
            |(url, method, headers, params, auth, body, script, vars, assertions, (tests, docs))| {
                Request {
                    url,
                    method,
                    headers,
                    params,
                    auth,
                    body,
                    script,
                    vars,
                    assertions,
                    tests,
                    docs,
                }
            },
        )
}

fn leaf_item() -> impl Strategy<Value = Item> {
    (
        opt_uid(),
        literal(&["http", "graphql", "http-request", "graphql-request", "folder", "js"]),
        prop::option::of(-2i64..10),
        "[ -~]{0,10}",
        prop::option::of(request()),
        (tri_string(), tri_string(), tri_string()),
    )
        .prop_map(
            |(uid, kind, seq, name, request, (file_content, filename, pathname))| Item {
                uid,
                kind,
                seq,
                name,
                request,
                file_content,
                items: None,
                filename,
                pathname,
            },
        )
}

fn item() -> impl Strategy<Value = Item> {
    leaf_item().prop_recursive(3, 12, 3, |inner| {
        (leaf_item(), opt_list(inner)).prop_map(|(mut item, items)| {
            item.items = items;
            item
        })
    })
}

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[ -~]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,5}", inner), 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

fn opaque_map() -> impl Strategy<Value = Option<OpaqueMap>> {
    prop::option::of(
        prop::collection::vec(("[a-zA-Z]{1,6}", json_value()), 0..4)
            .prop_map(|entries| entries.into_iter().collect::<OpaqueMap>()),
    )
}

fn environment() -> impl Strategy<Value = Environment> {
    let variable = (
        opt_uid(),
        tri_string(),
        tri_string(),
        literal(&["text"]),
        opt_bool(),
        opt_bool(),
    )
        .prop_map(|(uid, name, value, kind, enabled, secret)| EnvironmentVariable {
            uid,
            name,
            value,
            kind,
            enabled,
            secret,
        });
    (opt_uid(), "[ -~]{0,10}", opt_list(variable))
        .prop_map(|(uid, name, variables)| Environment {
            uid,
            name,
            variables,
        })
}

fn collection() -> impl Strategy<Value = Collection> {
    (
        literal(&["1"]),
        opt_uid(),
        "[ -~]{0,10}",
        prop::collection::vec(item(), 0..3),
        opt_uid(),
        prop::collection::vec(environment(), 0..2),
        tri_string(),
        (opaque_map(), opaque_map(), opaque_map()),
    )
        .prop_map(
            |(
                version,
                uid,
                name,
                items,
                active_environment_uid,
                environments,
                pathname,
                (runner_result, collection_variables, bruno_config),
            )| Collection {
                version,
                uid,
                name,
                items,
                active_environment_uid,
                environments,
                pathname,
                runner_result,
                collection_variables,
                bruno_config,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn encode_then_decode_is_identity(doc in collection()) {
        let bytes = encode(&doc).unwrap();
        let back = decode(&bytes).unwrap();
        prop_assert_eq!(&back, &doc);
        // A second pass is byte-stable.
        prop_assert_eq!(encode(&back).unwrap(), bytes);
    }

    #[test]
    fn opaque_maps_keep_their_key_order(map in opaque_map()) {
        let doc = Collection {
            bruno_config: map.clone(),
            ..Collection::new("x")
        };
        let back = decode(&encode(&doc).unwrap()).unwrap();
        let keys = |m: &Option<OpaqueMap>| {
            m.as_ref().map(|m| m.keys().cloned().collect::<Vec<_>>())
        };
        prop_assert_eq!(keys(&back.bruno_config), keys(&map));
    }
}
