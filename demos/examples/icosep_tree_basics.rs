// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Icosep tree basics.
//!
//! Wire a small icosep quadtree by hand, watch the change log, then snapshot and restore it.
//!
//! Run:
//! - `cargo run -p sylva_demos --example icosep_tree_basics`

use sylva_tree::{EventMask, Icosep, IcosepQuadTree, QuadZone};

fn main() {
    let mut tree = IcosepQuadTree::<&str>::new();
    tree.set_event_mask(EventMask::STRUCTURE);

    let root = tree.new_node();
    let nw = tree.new_node_with_data(["house"]);
    let se = tree.new_node_with_data(["tree", "rock"]);
    let straddling = tree.new_node_with_data(["road"]);

    tree.set_child_at(root, Icosep::Zone(QuadZone::NorthWest), Some(nw)).unwrap();
    tree.set_child_at(root, Icosep::Zone(QuadZone::SouthEast), Some(se)).unwrap();
    tree.set_icosep_child(root, Some(straddling)).unwrap();

    println!("children: {}", tree.child_count(root).unwrap());
    println!("occupied: {}", tree.not_null_child_count(root).unwrap());
    println!(
        "heights: min {} max {}",
        tree.min_height(root).unwrap(),
        tree.max_height(root).unwrap()
    );
    for event in tree.take_events() {
        println!("event: {event:?}");
    }

    // Moving a child to another slot detaches it from the first one.
    tree.set_child_at(root, Icosep::Zone(QuadZone::NorthEast), Some(nw)).unwrap();
    assert_eq!(tree.child_at(root, Icosep::Zone(QuadZone::NorthWest)).unwrap(), None);
    assert_eq!(tree.take_events().len(), 2, "one removal, one addition");

    let snapshot = tree.snapshot();
    let (restored, ids) = IcosepQuadTree::from_snapshot(snapshot).unwrap();
    for id in restored.depth_first(ids[0]) {
        let data: Vec<_> = restored.data(id).unwrap().iter().collect();
        println!("depth {}: {data:?}", restored.depth(id).unwrap());
    }

    tree.clear(root).unwrap();
    assert!(tree.is_leaf(root).unwrap());
    assert!(!tree.is_alive(nw), "cleared descendants are freed");
}
