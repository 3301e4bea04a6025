// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parent-free snapshots and reconstruction.
//!
//! A [`TreeSnapshot`] stores each live node's data and child slots as positions
//! into its node list. Parent handles are not stored; [`Tree::from_snapshot`]
//! derives them again in a single repair pass that records no events.

use alloc::vec;
use alloc::vec::Vec;

use crate::data::{DataList, DataPolicy};
use crate::error::TreeError;
use crate::tree::Tree;
use crate::types::{NodeId, Partition};

/// Owned image of every live node of a tree.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeSnapshot<D> {
    /// Data backing of the tree.
    pub policy: DataPolicy,
    /// Live nodes in slot order.
    pub nodes: Vec<NodeSnapshot<D>>,
}

/// One node of a [`TreeSnapshot`].
#[derive(Clone, Debug, PartialEq)]
pub struct NodeSnapshot<D> {
    /// Data elements in insertion order.
    pub data: Vec<D>,
    /// Child slots in zone order, as positions into [`TreeSnapshot::nodes`].
    pub children: Vec<Option<usize>>,
}

impl<D: Clone, Z: Partition> Tree<D, Z> {
    /// Capture every live node. Handles are not preserved; positions in the
    /// snapshot follow slot order.
    pub fn snapshot(&self) -> TreeSnapshot<D> {
        let mut position = vec![None; self.nodes.len()];
        for (k, (i, _)) in self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_some())
            .enumerate()
        {
            position[i] = Some(k);
        }
        let nodes = self
            .nodes
            .iter()
            .flatten()
            .map(|n| NodeSnapshot {
                data: n.data.iter().cloned().collect(),
                children: n
                    .children
                    .iter()
                    .map(|c| c.and_then(|c| position[c.idx()]))
                    .collect(),
            })
            .collect();
        TreeSnapshot {
            policy: self.policy,
            nodes,
        }
    }
}

impl<D, Z: Partition> Tree<D, Z> {
    /// Rebuild a tree from `snapshot`.
    ///
    /// Returns the tree and the handle of each snapshot node, by position.
    /// Fails when a child position or a slot list is out of range, or when the
    /// links do not form a forest.
    pub fn from_snapshot(snapshot: TreeSnapshot<D>) -> Result<(Self, Vec<NodeId>), TreeError> {
        let policy = snapshot.policy;
        let count = snapshot.nodes.len();
        let mut tree = Self::with_policy(policy);
        let mut slots = Vec::with_capacity(count);
        let mut ids = Vec::with_capacity(count);
        for node in snapshot.nodes {
            if node.children.len() > Z::COUNT {
                return Err(TreeError::OutOfRange {
                    index: node.children.len() - 1,
                    count: Z::COUNT,
                });
            }
            slots.push(node.children);
            ids.push(tree.alloc(DataList::from_items(policy, node.data)));
        }
        for (id, children) in ids.iter().zip(&slots) {
            for (slot, child) in children.iter().enumerate() {
                let Some(k) = *child else {
                    continue;
                };
                let Some(&child) = ids.get(k) else {
                    return Err(TreeError::OutOfRange { index: k, count });
                };
                let node = tree.nodes[id.idx()]
                    .as_mut()
                    .ok_or(TreeError::StaleNode(*id))?;
                node.children[slot] = Some(child);
                node.live += 1;
            }
        }
        tree.repair_parent_links()?;
        tracing::debug!(nodes = count, "restored tree from snapshot");
        Ok((tree, ids))
    }

    /// Derive every parent handle from the child slots, without recording events.
    fn repair_parent_links(&mut self) -> Result<(), TreeError> {
        let links: Vec<(NodeId, NodeId)> = self
            .nodes
            .iter()
            .enumerate()
            .filter_map(|(i, n)| n.as_ref().map(|n| (i, n)))
            .flat_map(|(i, n)| {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "NodeId stores 32-bit slot indices."
                )]
                let parent = NodeId::new(i as u32, n.generation);
                n.children.iter().flatten().map(move |&c| (parent, c))
            })
            .collect();
        for &(parent, child) in &links {
            let node = self.nodes[child.idx()]
                .as_mut()
                .ok_or(TreeError::StaleNode(child))?;
            if node.parent.is_some() || parent == child {
                return Err(TreeError::Cycle);
            }
            node.parent = Some(parent);
        }
        // With at most one parent each, a walk longer than the arena loops.
        let limit = self.len();
        for slot in self.nodes.iter().flatten() {
            let mut up = slot.parent;
            let mut steps = 0;
            while let Some(p) = up {
                steps += 1;
                if steps > limit {
                    return Err(TreeError::Cycle);
                }
                up = self.nodes[p.idx()].as_ref().and_then(|n| n.parent);
            }
        }
        tracing::debug!(links = links.len(), "repaired parent links");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventMask;
    use crate::types::{BinaryZone, Icosep};

    type T = Tree<u8, Icosep<BinaryZone>>;

    #[test]
    fn restore_rebuilds_parents_without_events() {
        let mut t = T::new();
        let root = t.new_node_with_data([1]);
        let left = t.new_node_with_data([2, 3]);
        let ico = t.new_node();
        let gone = t.new_node();
        t.set_child_at(root, Icosep::Zone(BinaryZone::Left), Some(left)).unwrap();
        t.set_icosep_child(root, Some(ico)).unwrap();
        t.remove_subtree(gone).unwrap();

        let snap = t.snapshot();
        assert_eq!(snap.nodes.len(), 3);
        assert_eq!(snap.nodes[0].children, [Some(1), None, Some(2)]);

        let (mut restored, ids) = T::from_snapshot(snap.clone()).unwrap();
        restored.set_event_mask(EventMask::all());
        assert_eq!(restored.parent(ids[2]).unwrap(), Some(ids[0]));
        assert_eq!(restored.icosep_child(ids[0]).unwrap(), Some(ids[2]));
        assert_eq!(restored.not_null_child_count(ids[0]).unwrap(), 2);
        assert_eq!(restored.data_count(ids[1]).unwrap(), 2);
        assert!(restored.take_events().is_empty());
        assert_eq!(restored.snapshot(), snap);
    }

    #[test]
    fn restore_rejects_shared_children_and_bad_positions() {
        let shared = TreeSnapshot::<u8> {
            policy: DataPolicy::Array,
            nodes: vec![
                NodeSnapshot { data: vec![], children: vec![Some(2), None, None] },
                NodeSnapshot { data: vec![], children: vec![Some(2), None, None] },
                NodeSnapshot { data: vec![], children: vec![None, None, None] },
            ],
        };
        assert_eq!(T::from_snapshot(shared).unwrap_err(), TreeError::Cycle);

        let looped = TreeSnapshot::<u8> {
            policy: DataPolicy::Array,
            nodes: vec![
                NodeSnapshot { data: vec![], children: vec![Some(1)] },
                NodeSnapshot { data: vec![], children: vec![Some(0)] },
            ],
        };
        assert_eq!(T::from_snapshot(looped).unwrap_err(), TreeError::Cycle);

        let dangling = TreeSnapshot::<u8> {
            policy: DataPolicy::Linked,
            nodes: vec![NodeSnapshot { data: vec![], children: vec![None, Some(4)] }],
        };
        assert_eq!(
            T::from_snapshot(dangling).unwrap_err(),
            TreeError::OutOfRange { index: 4, count: 1 }
        );
    }
}
