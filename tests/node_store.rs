use nodelink::store::{Node, NodeState, NodeStore};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[test]
fn test_new_store_starts_empty_in_insert_mode() {
    let store = NodeStore::new();
    assert_eq!(store.node(), Node::default());
    assert_eq!(store.node().api_port, 0);
    assert!(store.node().name.is_empty());
    assert!(store.is_to_insert_node());
}

#[test]
fn test_writes_are_visible_to_other_handles() {
    let store = NodeStore::new();
    let reader = store.clone();

    store.set_api_port(9443);
    assert_eq!(reader.node().api_port, 9443);

    reader.set_name("edge-1");
    reader.set_api_address("edge-1.local");
    assert_eq!(store.node(), Node::new("edge-1", "edge-1.local", 9443));
}

#[test]
fn test_update_changes_several_fields() {
    let store = NodeStore::new();
    store.update(|node| {
        node.name = "db".to_string();
        node.api_port = 5432;
    });

    let node = store.node();
    assert_eq!(node.name, "db");
    assert_eq!(node.api_port, 5432);
    assert!(node.api_address.is_empty());
}

#[test]
fn test_begin_edit_then_begin_insert() {
    let store = NodeStore::new();
    let existing = Node::new("prod", "203.0.113.7", 443);

    store.begin_edit(existing.clone());
    assert_eq!(store.snapshot(), NodeState { node: existing, is_to_insert_node: false });

    store.begin_insert();
    assert_eq!(store.snapshot(), NodeState::default());
}

#[test]
fn test_insert_mode_toggle() {
    let store = NodeStore::new();
    store.set_insert_mode(false);
    assert!(!store.is_to_insert_node());
    store.set_insert_mode(true);
    assert!(store.is_to_insert_node());
}

#[test]
fn test_observers_receive_each_write() {
    let store = NodeStore::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();

    let id = store.subscribe(move |state| sink.lock().unwrap().push(state.node.api_port));

    store.set_api_port(1);
    store.set_api_port(2);
    assert!(store.unsubscribe(id));
    store.set_api_port(3);

    assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    assert!(!store.unsubscribe(id));
}

#[test]
fn test_observer_can_read_store() {
    let store = NodeStore::new();
    let reader = store.clone();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    store.subscribe(move |state| {
        assert_eq!(reader.node(), state.node);
        counter.fetch_add(1, Ordering::SeqCst);
    });

    store.set_name("n");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_global_store_is_shared() {
    NodeStore::global().set_api_address("global.example");
    assert_eq!(NodeStore::global().node().api_address, "global.example");
}

#[test]
fn test_observers_see_whole_writes_under_concurrent_writers() {
    let store = NodeStore::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();

    // Every write sets name and port together; a snapshot must never mix two writes.
    store.subscribe(move |state| sink.lock().unwrap().push(state.node.clone()));

    let writers: Vec<_> = (0..4u16)
        .map(|t| {
            let store = store.clone();
            std::thread::spawn(move || {
                for i in 0..50u16 {
                    let port = t * 1000 + i;
                    store.update(|node| {
                        node.name = port.to_string();
                        node.api_port = port;
                    });
                }
            })
        })
        .collect();
    for writer in writers {
        writer.join().unwrap();
    }

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 200);
    assert!(seen.iter().all(|node| node.name == node.api_port.to_string()));
}
