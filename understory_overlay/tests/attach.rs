// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for deferred attachment in the `understory_overlay` crate.
//!
//! These exercise how child nodes link themselves into the tree: lazily,
//! leaf first, and exactly once.

use proptest::prelude::*;
use understory_overlay::{Defaults, Document, Key, Node, ValueKind};

const VALUE: Key = Key::from_static("value");

/// Builds a chain of unattached children below a fresh root.
fn chain(names: &[String]) -> (Node, Vec<Node>) {
    let root = Node::new_root(Defaults::empty());
    let mut nodes = Vec::with_capacity(names.len());
    let mut current = root.clone();
    for name in names {
        current = current.child(&Key::new(name.as_str()).unwrap(), Defaults::empty());
        nodes.push(current.clone());
    }
    (root, nodes)
}

fn slot_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,8}", 1..6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn attach_is_idempotent(names in slot_names(), repeats in 1_usize..4) {
        let (root, nodes) = chain(&names);
        let leaf = nodes.last().unwrap();

        leaf.set_value_and_attach(&VALUE, 1);
        let snapshot = root.to_json_string().unwrap();
        let revision = root.revision();

        for _ in 0..repeats {
            prop_assert_eq!(leaf.attach(), 0);
        }
        prop_assert_eq!(root.to_json_string().unwrap(), snapshot);
        prop_assert_eq!(root.revision(), revision);
    }

    #[test]
    fn attachment_is_lazy(names in slot_names()) {
        let (root, nodes) = chain(&names);
        let leaf = nodes.last().unwrap();

        // Reads through every level leave the tree untouched.
        for node in &nodes {
            prop_assert_eq!(node.get_number(&VALUE, 3.0), 3.0);
            prop_assert!(!node.is_attached());
        }
        prop_assert!(root.is_empty());

        leaf.set_value_and_attach(&VALUE, true);
        for node in &nodes {
            prop_assert!(node.is_attached());
        }
        // The first write links every level exactly once.
        prop_assert_eq!(root.len(), 1);
    }
}

#[test]
fn attach_reports_written_links() {
    let names: Vec<String> = ["scales", "x", "ticks"].map(String::from).to_vec();
    let (_, nodes) = chain(&names);
    let ticks = &nodes[2];

    ticks.set_value(&VALUE, 1);
    assert_eq!(ticks.attach(), 3);

    // A sibling below an attached parent needs a single link.
    let grid = nodes[1].child(&Key::from_static("grid"), Defaults::empty());
    grid.set_value(&VALUE, 2);
    assert_eq!(grid.attach(), 1);
}

#[test]
fn intermediate_write_attaches_only_its_own_chain() {
    let names: Vec<String> = ["plugins", "legend", "labels"].map(String::from).to_vec();
    let (root, nodes) = chain(&names);

    nodes[1].set_value_and_attach(&VALUE, false);
    assert!(nodes[1].is_attached());
    assert!(!nodes[2].is_attached());
    assert_eq!(
        root.to_json_string().unwrap(),
        r#"{"plugins":{"legend":{"value":false}}}"#
    );
}

#[test]
fn overwritten_slot_is_relinked_by_next_write() {
    let root = Node::new_root(Defaults::empty());
    let animation = Key::from_static("animation");
    let child = root.child(&animation, Defaults::empty());
    child.set_value_and_attach(&VALUE, 1);

    root.set_value(&animation, false);
    assert!(!child.is_attached());
    assert_eq!(root.kind(&animation), ValueKind::Bool);

    child.set_value_and_attach(&VALUE, 2);
    assert!(child.is_attached());
    assert_eq!(root.kind(&animation), ValueKind::Object);
}

#[test]
fn removed_slot_starts_over() {
    let root = Node::new_root(Defaults::empty());
    let scales = root.child(&Key::from_static("scales"), Defaults::empty());
    let x = Key::from_static("x");
    let old = scales.child(&x, Defaults::empty());
    old.set_value_and_attach(&VALUE, 5);

    assert!(scales.remove(&x));
    assert!(!old.is_attached());
    assert_eq!(old.parent(), None);

    let fresh = scales.child(&x, Defaults::empty());
    assert_ne!(fresh, old);
    assert!(fresh.is_empty());
    fresh.set_value_and_attach(&Key::from_static("stacked"), true);
    assert_eq!(
        root.to_json().unwrap(),
        serde_json::json!({ "scales": { "x": { "stacked": true } } }),
    );

    // Writes through a stale handle stay out of the tree.
    old.set_value_and_attach(&VALUE, 6);
    assert!(!old.is_attached());
    assert_eq!(scales.child(&x, Defaults::empty()), fresh);
    assert_eq!(
        root.to_json().unwrap(),
        serde_json::json!({ "scales": { "x": { "stacked": true } } }),
    );
}

#[test]
fn removing_a_pending_child_forgets_it() {
    let root = Node::new_root(Defaults::empty());
    let legend = Key::from_static("legend");
    let pending = root.child(&legend, Defaults::empty());
    pending.set_value(&VALUE, 1);

    assert!(!root.remove(&legend));
    let fresh = root.child(&legend, Defaults::empty());
    assert_ne!(fresh, pending);
    assert!(fresh.is_empty());
}

#[test]
fn toggling_entries() {
    let root = Node::new_root(Defaults::empty());
    let colors = Key::from_static("colors");

    // Disabling an uncustomized entry stores `false`; enabling removes it.
    root.disable_entry(&colors);
    assert_eq!(root.kind(&colors), ValueKind::Bool);
    root.enable_entry(&colors);
    assert_eq!(root.kind(&colors), ValueKind::Undefined);

    // A customized entry comes back as the same object.
    let entry = root.child(&colors, Defaults::empty());
    entry.set_value_and_attach(&VALUE, "customized");
    root.disable_entry(&colors);
    assert!(!root.is_entry_enabled(&colors));
    root.enable_entry(&colors);
    assert_eq!(root.kind(&colors), ValueKind::Object);
    assert_eq!(root.child(&colors, Defaults::empty()), entry);
    assert_eq!(entry.get_string(&VALUE, ""), "customized");
}

#[test]
fn imported_documents_are_attached() {
    let json = serde_json::json!({
        "responsive": true,
        "scales": {
            "y": { "min": 0, "ticks": { "stepSize": 5 } }
        },
        "labels": ["a", "b"],
        "ignored": null
    });
    let root = Document::from_json(&json, Defaults::empty()).unwrap();
    let scales = root.child(&Key::from_static("scales"), Defaults::empty());
    let y = scales.child(&Key::from_static("y"), Defaults::empty());
    let ticks = y.child(&Key::from_static("ticks"), Defaults::empty());

    assert!(ticks.is_attached());
    assert_eq!(ticks.get_int(&Key::from_static("stepSize"), 0), 5);
    assert!(!root.has(&Key::from_static("ignored")));
    // Members are imported in the order the JSON map yields them.
    assert_eq!(
        root.to_json_string().unwrap(),
        r#"{"labels":["a","b"],"responsive":true,"scales":{"y":{"min":0,"ticks":{"stepSize":5}}}}"#
    );
}

#[test]
fn import_rejects_non_objects() {
    let err = Document::from_json(&serde_json::json!(42), Defaults::empty()).unwrap_err();
    assert_eq!(
        err,
        understory_overlay::OverlayError::NotAnObject { found: "number" }
    );
}
