//! # Request Bodies
//!
//! Like [`Auth`](crate::Auth), the body is a tagged union keyed by `mode`:
//! raw text for `json`/`text`/`xml`/`sparql`, row lists for the two form
//! modes, and a query/variables pair for `graphql`.

use serde::{Deserialize, Serialize};

use crate::codec::null_as_default;
use crate::identity::Uid;
use crate::literal::BodyMode;
use crate::request::KeyValue;

/// GraphQL payload. `variables` is the raw JSON text typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<String>,
}

/// One multipart form entry. `type` is one of
/// [`MultipartType`](crate::MultipartType).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipartFormEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<Uid>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Request body, selected by `mode`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    #[serde(default, deserialize_with = "null_as_default")]
    pub mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xml: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sparql: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_url_encoded: Option<Vec<KeyValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multipart_form: Option<Vec<MultipartFormEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphql: Option<GraphqlBody>,
}

impl Body {
    /// A body with the given mode and no payload.
    pub fn with_mode(mode: BodyMode) -> Self {
        Self {
            mode: mode.as_str().to_string(),
            ..Self::default()
        }
    }

    /// A `json` body carrying the given raw text.
    pub fn json(raw: impl Into<String>) -> Self {
        Self {
            json: Some(raw.into()),
            ..Self::with_mode(BodyMode::Json)
        }
    }

    /// The mode as a checked literal, if it is one.
    pub fn body_mode(&self) -> Option<BodyMode> {
        self.mode.parse().ok()
    }

    /// Modes whose payload is present, in wire order. `none` never appears.
    pub fn present_payloads(&self) -> Vec<BodyMode> {
        let slots = [
            (BodyMode::Json, self.json.is_some()),
            (BodyMode::Text, self.text.is_some()),
            (BodyMode::Xml, self.xml.is_some()),
            (BodyMode::FormUrlEncoded, self.form_url_encoded.is_some()),
            (BodyMode::MultipartForm, self.multipart_form.is_some()),
            (BodyMode::Graphql, self.graphql.is_some()),
            (BodyMode::Sparql, self.sparql.is_some()),
        ];
        slots
            .into_iter()
            .filter_map(|(mode, present)| present.then_some(mode))
            .collect()
    }
}
