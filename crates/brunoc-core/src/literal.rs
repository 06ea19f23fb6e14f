//! # Wire Literals
//!
//! Checked views over the selector strings of the export format. Each enum
//! lists every literal its wire field accepts, in the order Bruno documents
//! them. [`ItemType::ALL`] and friends are the single source of truth for the
//! enumeration rules in `brunoc-schema`.
//!
//! The entity structs keep these fields as `String`; the enums are only used
//! where a caller wants to branch on the value.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

macro_rules! wire_literal {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $lit:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every accepted variant, in wire order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Every accepted wire literal, in wire order.
            pub const LITERALS: &'static [&'static str] = &[$($lit,)+];

            /// The wire literal for this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $lit,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($lit => Ok($name::$variant),)+
                    other => Err(ModelError::UnknownLiteral {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

wire_literal! {
    /// Discriminator of a collection item.
    ItemType, field = "item type" {
        Http => "http",
        Graphql => "graphql",
        HttpRequest => "http-request",
        GraphqlRequest => "graphql-request",
        Folder => "folder",
        Js => "js",
    }
}

impl ItemType {
    /// Item types whose `request` field is mandatory.
    pub const REQUIRES_REQUEST: &'static [&'static str] = &["http-request", "graphql-request"];

    /// True for the leaf request kinds that must carry a `request`.
    pub fn requires_request(&self) -> bool {
        matches!(self, Self::HttpRequest | Self::GraphqlRequest)
    }
}

wire_literal! {
    /// HTTP method of a request.
    HttpMethod, field = "method" {
        Get => "GET",
        Post => "POST",
        Put => "PUT",
        Delete => "DELETE",
        Patch => "PATCH",
        Head => "HEAD",
        Options => "OPTIONS",
    }
}

wire_literal! {
    /// Selector of the active [`Auth`](crate::Auth) variant.
    AuthMode, field = "auth mode" {
        Inherit => "inherit",
        None => "none",
        AwsV4 => "awsv4",
        Basic => "basic",
        Bearer => "bearer",
        Digest => "digest",
        OAuth2 => "oauth2",
    }
}

wire_literal! {
    /// Selector of the active [`Body`](crate::Body) payload.
    BodyMode, field = "body mode" {
        None => "none",
        Json => "json",
        Text => "text",
        Xml => "xml",
        FormUrlEncoded => "formUrlEncoded",
        MultipartForm => "multipartForm",
        Graphql => "graphql",
        Sparql => "sparql",
    }
}

wire_literal! {
    /// Where a request parameter is placed.
    ParamType, field = "param type" {
        Query => "query",
        Path => "path",
    }
}

wire_literal! {
    /// Kind of a multipart form entry.
    MultipartType, field = "multipart type" {
        File => "file",
        Text => "text",
    }
}

wire_literal! {
    /// OAuth2 grant flow.
    GrantType, field = "grant type" {
        ClientCredentials => "client_credentials",
        Password => "password",
        AuthorizationCode => "authorization_code",
    }
}

wire_literal! {
    /// Type of an environment variable. Bruno only defines `text`.
    VariableType, field = "variable type" {
        Text => "text",
    }
}
