//! # Collections and Environments
//!
//! The root of an export. A collection owns its item tree, its environments
//! and three opaque maps (`runnerResult`, `collectionVariables`,
//! `brunoConfig`) that are carried through without interpretation.
//!
//! ## Invariant
//!
//! Opaque maps round-trip verbatim. `serde_json` is built with
//! `preserve_order`, so key order survives as well as content.

use serde::{Deserialize, Serialize};

use crate::codec::null_as_default;
use crate::identity::Uid;
use crate::item::Item;
use crate::request::Request;

/// The only collection format version Bruno has published.
pub const COLLECTION_VERSION: &str = "1";

/// Untyped key/value bag passed through as-is.
pub type OpaqueMap = serde_json::Map<String, serde_json::Value>;

/// One variable of an environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentVariable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<Uid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Always `"text"` in a valid export.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    /// Required on the wire; `None` means the key was missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<bool>,
}

impl EnvironmentVariable {
    /// An enabled, non-secret text variable.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
            kind: "text".to_string(),
            enabled: Some(true),
            ..Self::default()
        }
    }
}

/// A named set of variables, e.g. "staging" or "production".
///
/// `variables` is mandatory on the wire but may be empty. Like
/// [`Request::headers`] it is an `Option` so a missing list can be reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<Uid>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<EnvironmentVariable>>,
}

impl Environment {
    /// An empty environment with a freshly generated UID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            uid: Some(Uid::generate()),
            name: name.into(),
            variables: Some(Vec::new()),
        }
    }

    /// Append a variable, creating the list if it was absent.
    pub fn add_variable(&mut self, variable: EnvironmentVariable) {
        self.variables.get_or_insert_with(Vec::new).push(variable);
    }

    /// Look up a variable by name.
    pub fn variable(&self, name: &str) -> Option<&EnvironmentVariable> {
        self.variables
            .iter()
            .flatten()
            .find(|v| v.name.as_deref() == Some(name))
    }
}

/// Root of a Bruno collection export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<Uid>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Item>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_environment_uid: Option<Uid>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub environments: Vec<Environment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pathname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runner_result: Option<OpaqueMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_variables: Option<OpaqueMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bruno_config: Option<OpaqueMap>,
}

impl Collection {
    /// A version-1 collection with the given name and nothing else.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: COLLECTION_VERSION.to_string(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append an item at the top level. No validation is performed.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Look up an environment by UID.
    pub fn find_environment(&self, uid: &Uid) -> Option<&Environment> {
        self.environments
            .iter()
            .find(|env| env.uid.as_ref() == Some(uid))
    }

    /// The environment named by `activeEnvironmentUid`, if it exists.
    pub fn active_environment(&self) -> Option<&Environment> {
        self.active_environment_uid
            .as_ref()
            .and_then(|uid| self.find_environment(uid))
    }

    /// Every item carrying a request, depth-first in document order.
    pub fn requests(&self) -> Requests<'_> {
        let stack = self
            .items
            .iter()
            .enumerate()
            .rev()
            .map(|(i, item)| (vec![i], item))
            .collect();
        Requests { stack }
    }

    /// Total number of items in the tree, folders included.
    pub fn item_count(&self) -> usize {
        fn count(items: &[Item]) -> usize {
            items.iter().map(|item| 1 + count(item.children())).sum()
        }
        count(&self.items)
    }
}

/// Free-function form of [`Collection::new`].
pub fn create_document(name: impl Into<String>) -> Collection {
    Collection::new(name)
}

/// Free-function form of [`Collection::add_item`].
pub fn add_item(doc: &mut Collection, item: Item) {
    doc.add_item(item);
}

/// Depth-first iterator over the requests of a collection.
///
/// Yields the index path of the item (its position within each ancestor,
/// ending with its own), the item and its request.
#[derive(Debug)]
pub struct Requests<'a> {
    stack: Vec<(Vec<usize>, &'a Item)>,
}

impl<'a> Iterator for Requests<'a> {
    type Item = (Vec<usize>, &'a Item, &'a Request);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, item)) = self.stack.pop() {
            for (i, child) in item.children().iter().enumerate().rev() {
                let mut child_path = path.clone();
                child_path.push(i);
                self.stack.push((child_path, child));
            }
            if let Some(request) = item.request.as_ref() {
                return Some((path, item, request));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::create_request;
    use serde_json::json;

    #[test]
    fn create_document_defaults() {
        let doc = create_document("demo");
        assert_eq!(doc.version, "1");
        assert_eq!(doc.name, "demo");
        assert!(doc.items.is_empty());
        assert!(doc.environments.is_empty());
        assert!(doc.uid.is_none());
        assert!(doc.active_environment_uid.is_none());
        assert!(doc.pathname.is_none());
        assert!(doc.runner_result.is_none());
        assert!(doc.collection_variables.is_none());
        assert!(doc.bruno_config.is_none());
    }

    #[test]
    fn add_item_preserves_order() {
        let mut doc = create_document("demo");
        add_item(&mut doc, Item::folder("a"));
        add_item(&mut doc, Item::folder("b"));
        doc.add_item(Item::folder("c"));
        let names: Vec<&str> = doc.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn active_environment_lookup() {
        let mut doc = create_document("demo");
        let staging = Environment::new("staging");
        let prod = Environment::new("prod");
        doc.active_environment_uid = prod.uid.clone();
        doc.environments.push(staging);
        doc.environments.push(prod);
        assert_eq!(doc.active_environment().map(|e| e.name.as_str()), Some("prod"));

        doc.active_environment_uid = Some(Uid::new("missing"));
        assert!(doc.active_environment().is_none());
    }

    #[test]
    fn environment_variable_lookup() {
        let mut env = Environment::new("local");
        env.add_variable(EnvironmentVariable::text("host", "localhost"));
        assert_eq!(
            env.variable("host").and_then(|v| v.value.as_deref()),
            Some("localhost")
        );
        assert!(env.variable("port").is_none());

        env.variables = None;
        assert!(env.variable("host").is_none());
        env.add_variable(EnvironmentVariable::text("port", "8080"));
        assert_eq!(env.variables.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn missing_variables_stay_absent() {
        let env: Environment = serde_json::from_value(json!({"name": "local"})).unwrap();
        assert_eq!(env.variables, None);
        let env: Environment =
            serde_json::from_value(json!({"name": "local", "variables": []})).unwrap();
        assert_eq!(env.variables, Some(vec![]));
        assert_eq!(serde_json::to_value(&Environment::default()).unwrap(), json!({"name": ""}));
    }

    #[test]
    fn requests_walk_depth_first() {
        let mut doc = create_document("demo");
        let mut users = Item::folder("users");
        users.push_child(Item::http_request("list", create_request("/users", "GET")));
        let mut admin = Item::folder("admin");
        admin.push_child(Item::http_request("purge", create_request("/purge", "DELETE")));
        users.push_child(admin);
        doc.add_item(users);
        doc.add_item(Item::http_request("health", create_request("/health", "GET")));

        let found: Vec<(Vec<usize>, String)> = doc
            .requests()
            .map(|(path, item, _)| (path, item.name.clone()))
            .collect();
        assert_eq!(
            found,
            vec![
                (vec![0, 0], "list".to_string()),
                (vec![0, 1, 0], "purge".to_string()),
                (vec![1], "health".to_string()),
            ]
        );
        assert_eq!(doc.item_count(), 5);
    }
}
