//! # Request Authentication
//!
//! `Auth` is a tagged union in the wire format: `mode` names the active
//! scheme and the matching sibling object carries its settings. The model
//! does not require the inactive siblings to be absent, since Bruno exports
//! sometimes keep stale settings around when the mode is switched.

use serde::{Deserialize, Serialize};

use crate::codec::null_as_default;
use crate::literal::{AuthMode, GrantType};

/// AWS Signature Version 4 settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsV4Auth {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,
}

/// HTTP Basic credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicAuth {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BearerAuth {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// HTTP Digest credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestAuth {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// OAuth2 settings. Which of the optional fields matter depends on
/// `grant_type`, a [`GrantType`] literal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuth2 {
    #[serde(default, deserialize_with = "null_as_default")]
    pub grant_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pkce: Option<bool>,
}

impl OAuth2 {
    pub fn grant(&self) -> Option<GrantType> {
        self.grant_type.parse().ok()
    }
}

/// Authentication of a request, selected by `mode`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auth {
    #[serde(default, deserialize_with = "null_as_default")]
    pub mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awsv4: Option<AwsV4Auth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic: Option<BasicAuth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer: Option<BearerAuth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<DigestAuth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth2: Option<OAuth2>,
}

impl Auth {
    /// An auth block with the given mode and no variant settings.
    pub fn with_mode(mode: AuthMode) -> Self {
        Self {
            mode: mode.as_str().to_string(),
            ..Self::default()
        }
    }

    /// The mode as a checked literal, if it is one.
    pub fn auth_mode(&self) -> Option<AuthMode> {
        self.mode.parse().ok()
    }

    /// Modes whose variant settings are present, in wire order.
    ///
    /// `inherit` and `none` carry no settings and never appear here.
    pub fn present_variants(&self) -> Vec<AuthMode> {
        let mut present = Vec::new();
        if self.awsv4.is_some() {
            present.push(AuthMode::AwsV4);
        }
        if self.basic.is_some() {
            present.push(AuthMode::Basic);
        }
        if self.bearer.is_some() {
            present.push(AuthMode::Bearer);
        }
        if self.digest.is_some() {
            present.push(AuthMode::Digest);
        }
        if self.oauth2.is_some() {
            present.push(AuthMode::OAuth2);
        }
        present
    }
}
