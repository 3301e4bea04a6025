// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sylva Tree: arena-backed partitioning trees with an icosep child.
//!
//! A [`Tree`] is an arena of nodes, each with one child slot per zone of a
//! [`Partition`]: two for [`BinaryZone`], four for [`QuadZone`], eight for [`OctZone`].
//! Wrapping the zones in [`Icosep`] adds one more slot for elements that straddle the
//! split boundaries, so an icosep node always reports `zones + 1` children.
//!
//! - Nodes are addressed by generational [`NodeId`]s; stale handles never alias.
//! - A node has at most one parent. Attaching it elsewhere detaches it first.
//! - Node data lives in a [`DataList`] backed by a vector or a linked list, per [`DataPolicy`].
//! - Structural changes can be recorded as [`TreeEvent`]s, selected by an [`EventMask`].
//! - [`Tree::snapshot`] and [`Tree::from_snapshot`] round-trip a tree without parent links.
//!
//! [`SpatialTree`] builds a bounds-driven index on top: it splits overflowing nodes with a
//! [`Splitter`] and parks straddling entries in the icosep child.
//!
//! ## API overview
//!
//! - [`Tree::set_child_at`] / [`Tree::set_icosep_child`] attach or detach a child.
//! - [`Tree::child_count`], [`Tree::is_leaf`], [`Tree::min_height`], [`Tree::max_height`].
//! - [`Tree::clear`] frees a node's descendants, icosep subtree included.
//! - [`SpatialTree::insert`], [`SpatialTree::query_intersecting`], [`SpatialTree::remove`].
//!
//! ## Example
//!
//! ```rust
//! use sylva_geom::{Point2, Rectangle};
//! use sylva_tree::{
//!     Icosep, IcosepBinaryTree, SpatialConfig, SpatialTree, QuadZone, BinaryZone,
//! };
//!
//! let mut tree = IcosepBinaryTree::<&str>::new();
//! let root = tree.new_node();
//! let a = tree.new_node_with_data(["a"]);
//! let straddler = tree.new_node_with_data(["ab"]);
//! tree.set_child_at(root, Icosep::Zone(BinaryZone::Left), Some(a)).unwrap();
//! tree.set_icosep_child(root, Some(straddler)).unwrap();
//! assert_eq!(tree.child_count(root).unwrap(), 3);
//! assert_eq!(tree.max_height(root).unwrap(), 2);
//!
//! let mut index = SpatialTree::<u32, QuadZone>::new(
//!     Rectangle::new(0.0, 0.0, 100.0, 100.0),
//!     SpatialConfig::default(),
//! );
//! index.insert(Rectangle::new(10.0, 10.0, 20.0, 20.0), 1).unwrap();
//! index.insert(Rectangle::new(40.0, 40.0, 60.0, 60.0), 2).unwrap();
//! let hits: Vec<u32> = index.query_point(Point2::new(50.0, 50.0)).map(|e| e.item).collect();
//! assert_eq!(hits, [2]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod data;
mod error;
mod event;
mod snapshot;
mod spatial;
mod tree;
mod types;

pub use data::{DataList, DataPolicy, IntoIter as DataIntoIter, Iter as DataIter};
pub use error::TreeError;
pub use event::{EventMask, TreeEvent};
pub use snapshot::{NodeSnapshot, TreeSnapshot};
pub use spatial::{Entry, SpatialConfig, SpatialTree, Splitter};
pub use tree::{BreadthFirst, DepthFirst, Tree};
pub use types::{BinaryZone, Icosep, NodeId, OctZone, Partition, QuadZone};

/// Tree with two child slots.
pub type BinaryTree<D> = Tree<D, BinaryZone>;
/// Tree with four child slots.
pub type QuadTree<D> = Tree<D, QuadZone>;
/// Tree with eight child slots.
pub type OctTree<D> = Tree<D, OctZone>;
/// Binary tree plus an icosep slot.
pub type IcosepBinaryTree<D> = Tree<D, Icosep<BinaryZone>>;
/// Quad tree plus an icosep slot.
pub type IcosepQuadTree<D> = Tree<D, Icosep<QuadZone>>;
/// Oct tree plus an icosep slot.
pub type IcosepOctTree<D> = Tree<D, Icosep<OctZone>>;
