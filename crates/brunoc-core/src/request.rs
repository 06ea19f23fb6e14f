//! # Requests
//!
//! A request is the payload of a leaf item: URL, method, headers, params,
//! auth, body, scripts, variables, assertions and free-form tests/docs.

use serde::{Deserialize, Serialize};

use crate::auth::Auth;
use crate::body::Body;
use crate::codec::null_as_default;
use crate::identity::Uid;
use crate::literal::{AuthMode, BodyMode, HttpMethod};

/// A named key/value row: headers, form fields and assertions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<Uid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl KeyValue {
    /// An enabled row with the given name and value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
            enabled: Some(true),
            ..Self::default()
        }
    }
}

/// A request or response variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Var {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<Uid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Scoped to the request instead of the collection runtime.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<bool>,
}

/// A query or path parameter. `type` is one of [`ParamType`](crate::ParamType).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestParam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<Uid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Pre-request and post-response script sources. Never parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub req: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub res: Option<String>,
}

/// Variables set before the request and extracted from the response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestVars {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub req: Option<Vec<Var>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub res: Option<Vec<Var>>,
}

/// An HTTP or GraphQL request.
///
/// `headers` is mandatory on the wire but may be empty; it is an `Option`
/// so that a missing list survives decoding and can be reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<KeyValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<RequestParam>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub auth: Auth,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: Body,
    #[serde(default, deserialize_with = "null_as_default")]
    pub script: Script,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vars: Option<RequestVars>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assertions: Option<Vec<KeyValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tests: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

impl Request {
    /// A minimally populated request: inherited auth, no body, no headers,
    /// empty scripts. `url` and `method` are taken as given and only checked
    /// by validation.
    pub fn new(url: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: method.into(),
            headers: Some(Vec::new()),
            auth: Auth::with_mode(AuthMode::Inherit),
            body: Body::with_mode(BodyMode::None),
            ..Self::default()
        }
    }

    /// The method as a checked literal, if it is one.
    pub fn http_method(&self) -> Option<HttpMethod> {
        self.method.parse().ok()
    }

    /// Append a header, creating the list if it was absent.
    pub fn add_header(&mut self, header: KeyValue) {
        self.headers.get_or_insert_with(Vec::new).push(header);
    }
}

/// Free-function form of [`Request::new`].
pub fn create_request(url: impl Into<String>, method: impl Into<String>) -> Request {
    Request::new(url, method)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_request_fills_minimum() {
        let req = create_request("http://example.com", "GET");
        assert_eq!(req.url, "http://example.com");
        assert_eq!(req.method, "GET");
        assert_eq!(req.auth.mode, "inherit");
        assert_eq!(req.body.mode, "none");
        assert_eq!(req.headers, Some(vec![]));
        assert_eq!(req.script, Script::default());
        assert!(req.params.is_none());
        assert!(req.vars.is_none());
    }

    #[test]
    fn create_request_does_not_check_method() {
        let req = create_request("", "FETCH");
        assert_eq!(req.method, "FETCH");
        assert_eq!(req.http_method(), None);
    }

    #[test]
    fn minimal_request_wire_shape() {
        let req = Request::new("http://example.com", "GET");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "url": "http://example.com",
                "method": "GET",
                "headers": [],
                "auth": {"mode": "inherit"},
                "body": {"mode": "none"},
                "script": {}
            })
        );
    }

    #[test]
    fn missing_headers_stay_absent() {
        let req: Request = serde_json::from_value(json!({"url": "u", "method": "GET"})).unwrap();
        assert_eq!(req.headers, None);
        let req: Request =
            serde_json::from_value(json!({"url": "u", "method": "GET", "headers": []})).unwrap();
        assert_eq!(req.headers, Some(vec![]));
    }

    #[test]
    fn add_header_creates_list() {
        let mut req = Request::default();
        req.add_header(KeyValue::new("Accept", "application/json"));
        let headers = req.headers.unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[0].name.as_deref(), Some("Accept"));
        assert_eq!(headers[0].enabled, Some(true));
    }

    #[test]
    fn param_type_uses_type_key() {
        let param: RequestParam =
            serde_json::from_value(json!({"name": "id", "type": "path"})).unwrap();
        assert_eq!(param.kind, "path");
        let back = serde_json::to_value(&param).unwrap();
        assert_eq!(back, json!({"name": "id", "type": "path"}));
    }

    #[test]
    fn var_local_flag_roundtrips() {
        let var = Var {
            name: Some("token".into()),
            local: Some(false),
            ..Var::default()
        };
        let back: Var = serde_json::from_value(serde_json::to_value(&var).unwrap()).unwrap();
        assert_eq!(back, var);
    }
}
