//! State of the node being inserted or edited.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard};
use uuid::Uuid;

/// A remote API endpoint managed through the node form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub name: String,
    pub api_address: String,
    pub api_port: u16,
}

impl Node {
    pub fn new(name: impl Into<String>, api_address: impl Into<String>, api_port: u16) -> Self {
        Self {
            name: name.into(),
            api_address: api_address.into(),
            api_port,
        }
    }

    /// `http://{api_address}:{api_port}`, with IPv6 addresses in brackets.
    pub fn base_url(&self) -> String {
        if self.api_address.contains(':') && !self.api_address.starts_with('[') {
            format!("http://[{}]:{}", self.api_address, self.api_port)
        } else {
            format!("http://{}:{}", self.api_address, self.api_port)
        }
    }

    /// Join `path` onto [`Node::base_url`] with a single slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url(), path.trim_start_matches('/'))
    }
}

/// The node record plus the insert/edit flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeState {
    pub node: Node,
    pub is_to_insert_node: bool,
}

impl Default for NodeState {
    fn default() -> Self {
        Self {
            node: Node::default(),
            is_to_insert_node: true,
        }
    }
}

/// Handle returned by [`NodeStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

type Observer = Arc<dyn Fn(&NodeState) + Send + Sync>;

static GLOBAL_STORE: Lazy<NodeStore> = Lazy::new(NodeStore::new);

/// Shared, mutable node state.
///
/// Clones share the same state: a write through one handle is visible to
/// every other handle as soon as the call returns. Observers registered with
/// [`NodeStore::subscribe`] run after each write, outside the state lock.
/// Each observer call gets the state as it was right after that write, but
/// with concurrent writers the calls can arrive out of write order.
#[derive(Clone, Default)]
pub struct NodeStore {
    state: Arc<RwLock<NodeState>>,
    observers: Arc<Mutex<HashMap<SubscriptionId, Observer>>>,
}

impl NodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The session-wide store.
    pub fn global() -> &'static NodeStore {
        &GLOBAL_STORE
    }

    pub fn node(&self) -> Node {
        self.read().node.clone()
    }

    pub fn is_to_insert_node(&self) -> bool {
        self.read().is_to_insert_node
    }

    /// Node and flag read under one lock.
    pub fn snapshot(&self) -> NodeState {
        self.read().clone()
    }

    pub fn set_node(&self, node: Node) {
        self.write(|state| state.node = node);
    }

    pub fn set_name(&self, name: impl Into<String>) {
        let name = name.into();
        self.write(|state| state.node.name = name);
    }

    pub fn set_api_address(&self, api_address: impl Into<String>) {
        let api_address = api_address.into();
        self.write(|state| state.node.api_address = api_address);
    }

    pub fn set_api_port(&self, api_port: u16) {
        self.write(|state| state.node.api_port = api_port);
    }

    /// Mutate several node fields in one write.
    pub fn update<F: FnOnce(&mut Node)>(&self, f: F) {
        self.write(|state| f(&mut state.node));
    }

    pub fn set_insert_mode(&self, is_to_insert_node: bool) {
        self.write(|state| state.is_to_insert_node = is_to_insert_node);
    }

    /// Clear the form and switch to insert mode.
    pub fn begin_insert(&self) {
        self.write(|state| *state = NodeState::default());
    }

    /// Load an existing node into the form and switch to edit mode.
    pub fn begin_edit(&self, node: Node) {
        self.write(|state| {
            state.node = node;
            state.is_to_insert_node = false;
        });
    }

    /// Register `observer` to be called with the new state after every write.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&NodeState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(Uuid::new_v4());
        self.observers_mut().insert(id, Arc::new(observer));
        id
    }

    /// Remove an observer. Returns false if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers_mut().remove(&id).is_some()
    }

    fn read(&self) -> RwLockReadGuard<'_, NodeState> {
        // Observers run outside the lock; poisoning can only come from a write closure.
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write<F: FnOnce(&mut NodeState)>(&self, f: F) {
        let snapshot = {
            let mut guard = self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner());
            f(&mut *guard);
            guard.clone()
        };

        let observers: Vec<Observer> = self.observers_mut().values().cloned().collect();
        for observer in observers {
            observer(&snapshot);
        }
    }

    fn observers_mut(&self) -> MutexGuard<'_, HashMap<SubscriptionId, Observer>> {
        self.observers.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for NodeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeStore").field("state", &self.snapshot()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_single_slash() {
        let node = Node::new("local", "10.0.0.2", 9000);
        assert_eq!(node.base_url(), "http://10.0.0.2:9000");
        assert_eq!(node.endpoint("/status"), "http://10.0.0.2:9000/status");
        assert_eq!(node.endpoint("status"), "http://10.0.0.2:9000/status");
    }

    #[test]
    fn test_base_url_brackets_ipv6() {
        let node = Node::new("v6", "::1", 8080);
        assert_eq!(node.base_url(), "http://[::1]:8080");
        assert_eq!(node.endpoint("/ok"), "http://[::1]:8080/ok");

        let bracketed = Node::new("v6", "[fe80::1]", 80);
        assert_eq!(bracketed.base_url(), "http://[fe80::1]:80");
    }

    #[test]
    fn test_node_serializes_camel_case() {
        let node = Node::new("n1", "example.org", 443);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["apiAddress"], "example.org");
        assert_eq!(json["apiPort"], 443);
    }
}
