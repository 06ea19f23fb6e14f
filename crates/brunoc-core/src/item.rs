//! # Collection Items
//!
//! An item is a node of the collection tree. Folders own child items;
//! leaf items carry a [`Request`]. The tree is strictly forward: a parent
//! owns its children and nothing points back up.

use serde::{Deserialize, Serialize};

use crate::codec::null_as_default;
use crate::identity::Uid;
use crate::literal::ItemType;
use crate::request::Request;

/// A folder or request node.
///
/// `seq` is the 1-based display position within the parent. It is signed so
/// that out-of-range values in an export decode and can be reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<Uid>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<Request>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pathname: Option<String>,
}

impl Item {
    /// An empty folder.
    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            kind: ItemType::Folder.as_str().to_string(),
            name: name.into(),
            items: Some(Vec::new()),
            ..Self::default()
        }
    }

    /// A leaf item of type `http-request`.
    pub fn http_request(name: impl Into<String>, request: Request) -> Self {
        Self {
            kind: ItemType::HttpRequest.as_str().to_string(),
            name: name.into(),
            request: Some(request),
            ..Self::default()
        }
    }

    /// A leaf item of type `graphql-request`.
    pub fn graphql_request(name: impl Into<String>, request: Request) -> Self {
        Self {
            kind: ItemType::GraphqlRequest.as_str().to_string(),
            ..Self::http_request(name, request)
        }
    }

    /// The type as a checked literal, if it is one.
    pub fn item_type(&self) -> Option<ItemType> {
        self.kind.parse().ok()
    }

    pub fn is_folder(&self) -> bool {
        self.item_type() == Some(ItemType::Folder)
    }

    /// Child items, empty when the list is absent.
    pub fn children(&self) -> &[Item] {
        self.items.as_deref().unwrap_or_default()
    }

    /// Append a child, creating the list if it was absent.
    pub fn push_child(&mut self, child: Item) {
        self.items.get_or_insert_with(Vec::new).push(child);
    }
}
