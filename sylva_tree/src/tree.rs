// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: arena, child slots, data, and traversal.

use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::data::{DataList, DataPolicy};
use crate::error::TreeError;
use crate::event::{EventMask, TreeEvent};
use crate::types::{Icosep, NodeId, Partition};

/// Arena of nodes with one child slot per zone of `Z`.
///
/// Ownership flows from parent to child only. The parent handle stored in each
/// node is a plain index used for traversal; it never keeps a node alive.
pub struct Tree<D, Z> {
    pub(crate) nodes: Vec<Option<Node<D>>>, // slots
    pub(crate) generations: Vec<u32>,       // last generation per slot (persists across frees)
    pub(crate) free_list: Vec<usize>,
    /// Freed slots whose generation is exhausted; never reused.
    pub(crate) retired: usize,
    pub(crate) policy: DataPolicy,
    mask: EventMask,
    events: Vec<TreeEvent>,
    _zones: PhantomData<fn() -> Z>,
}

impl<D, Z> core::fmt::Debug for Tree<D, Z> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Tree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("retired", &self.retired)
            .field("policy", &self.policy)
            .field("mask", &self.mask)
            .field("pending_events", &self.events.len())
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node<D> {
    pub(crate) generation: u32,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<Option<NodeId>>,
    /// Number of occupied child slots.
    pub(crate) live: usize,
    pub(crate) data: DataList<D>,
}

impl<D> Node<D> {
    pub(crate) fn new(generation: u32, slots: usize, data: DataList<D>) -> Self {
        Self {
            generation,
            parent: None,
            children: vec![None; slots],
            live: 0,
            data,
        }
    }
}

impl<D, Z: Partition> Default for Tree<D, Z> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D, Z: Partition> Tree<D, Z> {
    /// Create an empty tree whose nodes store data in vectors.
    pub fn new() -> Self {
        Self::with_policy(DataPolicy::default())
    }

    /// Create an empty tree whose nodes store data per `policy`.
    pub fn with_policy(policy: DataPolicy) -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            retired: 0,
            policy,
            mask: EventMask::empty(),
            events: Vec::new(),
            _zones: PhantomData,
        }
    }

    /// Backing container used for new nodes' data.
    pub fn data_policy(&self) -> DataPolicy {
        self.policy
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free_list.len() - self.retired
    }

    /// Whether the arena holds no live node.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // --- events ---

    /// Select which events are recorded from now on.
    pub fn set_event_mask(&mut self, mask: EventMask) {
        self.mask = mask;
    }

    /// Events currently recorded.
    pub fn event_mask(&self) -> EventMask {
        self.mask
    }

    /// Drain the recorded events, oldest first.
    pub fn take_events(&mut self) -> Vec<TreeEvent> {
        core::mem::take(&mut self.events)
    }

    fn record(&mut self, event: TreeEvent) {
        if self.mask.contains(event.kind()) {
            self.events.push(event);
        }
    }

    // --- nodes ---

    /// Create a detached node with no data.
    pub fn new_node(&mut self) -> NodeId {
        self.alloc(DataList::new(self.policy))
    }

    /// Create a detached node seeded with `data`.
    pub fn new_node_with_data(&mut self, data: impl IntoIterator<Item = D>) -> NodeId {
        self.alloc(DataList::from_items(self.policy, data))
    }

    pub(crate) fn alloc(&mut self, data: DataList<D>) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, Z::COUNT, data));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, Z::COUNT, data)));
            self.generations.push(generation);
            (self.nodes.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId stores 32-bit slot indices."
        )]
        let idx = idx as u32;
        NodeId::new(idx, generation)
    }

    /// Returns true if `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node_opt(id).is_some()
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node<D>> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node<D>> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        (n.generation == id.1).then_some(n)
    }

    pub(crate) fn node(&self, id: NodeId) -> Result<&Node<D>, TreeError> {
        self.node_opt(id).ok_or(TreeError::StaleNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node<D>, TreeError> {
        self.node_opt_mut(id).ok_or(TreeError::StaleNode(id))
    }

    fn check_index(index: usize) -> Result<(), TreeError> {
        if index < Z::COUNT {
            Ok(())
        } else {
            Err(TreeError::OutOfRange {
                index,
                count: Z::COUNT,
            })
        }
    }

    // --- structure ---

    /// Put `child` in the slot of `zone`, or empty the slot with `None`.
    ///
    /// See [`Tree::set_child_at_index`].
    pub fn set_child_at(
        &mut self,
        parent: NodeId,
        zone: Z,
        child: Option<NodeId>,
    ) -> Result<bool, TreeError> {
        self.set_child_at_index(parent, zone.index(), child)
    }

    /// Put `child` in slot `index` of `parent`, or empty the slot with `None`.
    ///
    /// The previous occupant is detached first. An incoming node that already
    /// has a parent (including another slot of `parent`) is detached from it, so a
    /// node never sits in two slots. Returns `false` when the slot already held `child`.
    pub fn set_child_at_index(
        &mut self,
        parent: NodeId,
        index: usize,
        child: Option<NodeId>,
    ) -> Result<bool, TreeError> {
        Self::check_index(index)?;
        let old = self.node(parent)?.children[index];
        if let Some(c) = child {
            self.node(c)?;
            if self.is_ancestor_or_self(c, parent) {
                return Err(TreeError::Cycle);
            }
        }
        if old == child {
            return Ok(false);
        }
        if let Some(o) = old {
            self.detach(parent, index, o);
        }
        if let Some(c) = child {
            self.remove_from_parent(c)?;
            self.attach(parent, index, c);
        }
        Ok(true)
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, mut id: NodeId) -> bool {
        loop {
            if id == ancestor {
                return true;
            }
            match self.node_opt(id).and_then(|n| n.parent) {
                Some(p) => id = p,
                None => return false,
            }
        }
    }

    fn attach(&mut self, parent: NodeId, index: usize, child: NodeId) {
        if let Some(p) = self.node_opt_mut(parent) {
            p.children[index] = Some(child);
            p.live += 1;
        }
        if let Some(c) = self.node_opt_mut(child) {
            c.parent = Some(parent);
        }
        tracing::trace!(?parent, index, ?child, "attach");
        self.record(TreeEvent::ChildAdded {
            parent,
            index,
            child,
        });
    }

    fn detach(&mut self, parent: NodeId, index: usize, child: NodeId) {
        if let Some(p) = self.node_opt_mut(parent) {
            p.children[index] = None;
            p.live = p.live.saturating_sub(1);
        }
        if let Some(c) = self.node_opt_mut(child) {
            c.parent = None;
        }
        tracing::trace!(?parent, index, ?child, "detach");
        self.record(TreeEvent::ChildRemoved {
            parent,
            index,
            child,
        });
    }

    /// Occupant of the slot of `zone`.
    pub fn child_at(&self, id: NodeId, zone: Z) -> Result<Option<NodeId>, TreeError> {
        self.child_at_index(id, zone.index())
    }

    /// Occupant of slot `index`.
    pub fn child_at_index(&self, id: NodeId, index: usize) -> Result<Option<NodeId>, TreeError> {
        Self::check_index(index)?;
        Ok(self.node(id)?.children[index])
    }

    /// All child slots in zone order.
    pub fn children(&self, id: NodeId) -> Result<&[Option<NodeId>], TreeError> {
        Ok(&self.node(id)?.children)
    }

    /// Detach `child` from `parent`. Returns `false` when it is not a child of `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<bool, TreeError> {
        match self.index_of(parent, child)? {
            Some(index) => {
                self.detach(parent, index, child);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Detach `id` from its parent. Returns `false` for a root.
    pub fn remove_from_parent(&mut self, id: NodeId) -> Result<bool, TreeError> {
        match self.node(id)?.parent {
            Some(parent) => self.remove_child(parent, id),
            None => Ok(false),
        }
    }

    /// Slot of `child` within `parent`.
    pub fn index_of(&self, parent: NodeId, child: NodeId) -> Result<Option<usize>, TreeError> {
        Ok(self
            .node(parent)?
            .children
            .iter()
            .position(|c| *c == Some(child)))
    }

    /// Parent of `id`, `None` for a root.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, TreeError> {
        Ok(self.node(id)?.parent)
    }

    /// Topmost ancestor of `id` (itself when it is a root).
    pub fn root_of(&self, mut id: NodeId) -> Result<NodeId, TreeError> {
        while let Some(p) = self.node(id)?.parent {
            id = p;
        }
        Ok(id)
    }

    /// Number of child slots, occupied or not. Always `Z::COUNT`.
    pub fn child_count(&self, id: NodeId) -> Result<usize, TreeError> {
        self.node(id)?;
        Ok(Z::COUNT)
    }

    /// Number of occupied child slots.
    pub fn not_null_child_count(&self, id: NodeId) -> Result<usize, TreeError> {
        Ok(self.node(id)?.live)
    }

    /// Whether every child slot is empty.
    pub fn is_leaf(&self, id: NodeId) -> Result<bool, TreeError> {
        Ok(self.node(id)?.live == 0)
    }

    /// Whether `id` has no parent.
    pub fn is_root(&self, id: NodeId) -> Result<bool, TreeError> {
        Ok(self.node(id)?.parent.is_none())
    }

    /// Number of ancestors of `id`.
    pub fn depth(&self, mut id: NodeId) -> Result<usize, TreeError> {
        let mut depth = 0;
        while let Some(p) = self.node(id)?.parent {
            id = p;
            depth += 1;
        }
        Ok(depth)
    }

    /// Number of nodes on the shortest branch below `id`, counting `id`.
    ///
    /// An empty slot ends a branch, so any node with a free slot has height 1.
    pub fn min_height(&self, id: NodeId) -> Result<usize, TreeError> {
        self.node(id)?;
        Ok(self.height_by(id, Iterator::min))
    }

    /// Number of nodes on the longest branch below `id`, counting `id`.
    pub fn max_height(&self, id: NodeId) -> Result<usize, TreeError> {
        self.node(id)?;
        Ok(self.height_by(id, Iterator::max))
    }

    fn height_by(&self, id: NodeId, pick: fn(vec::IntoIter<usize>) -> Option<usize>) -> usize {
        let Some(node) = self.node_opt(id) else {
            return 0;
        };
        let below: Vec<usize> = node
            .children
            .iter()
            .map(|c| c.map_or(0, |c| self.height_by(c, pick)))
            .collect();
        1 + pick(below.into_iter()).unwrap_or(0)
    }

    /// Height of every leaf below `id`, in depth-first order; `id` is at height 1.
    pub fn heights(&self, id: NodeId) -> Result<Vec<usize>, TreeError> {
        self.node(id)?;
        let mut out = Vec::new();
        let mut stack = vec![(id, 1_usize)];
        while let Some((n, h)) = stack.pop() {
            let Some(node) = self.node_opt(n) else {
                continue;
            };
            if node.live == 0 {
                out.push(h);
            }
            stack.extend(node.children.iter().rev().flatten().map(|&c| (c, h + 1)));
        }
        Ok(out)
    }

    /// Clear the data of `id` and free every node below it.
    ///
    /// `id` stays alive and attached; handles to its former descendants become stale.
    pub fn clear(&mut self, id: NodeId) -> Result<(), TreeError> {
        self.clear_data(id)?;
        let children = self.node(id)?.children.clone();
        for (index, child) in children.into_iter().enumerate() {
            if let Some(c) = child {
                self.detach(id, index, c);
                self.free_subtree(c);
            }
        }
        Ok(())
    }

    /// Detach `id` from its parent and free it with all its descendants.
    pub fn remove_subtree(&mut self, id: NodeId) -> Result<(), TreeError> {
        self.remove_from_parent(id)?;
        self.free_subtree(id);
        Ok(())
    }

    fn free_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(n) = stack.pop() {
            let Some(node) = self.node_opt(n) else {
                continue;
            };
            stack.extend(node.children.iter().flatten());
            self.nodes[n.idx()] = None;
            if self.generations[n.idx()] == u32::MAX {
                tracing::debug!(slot = n.idx(), "retiring slot with exhausted generation");
                self.retired += 1;
            } else {
                self.free_list.push(n.idx());
            }
        }
    }

    // --- data ---

    /// Data held by `id`.
    pub fn data(&self, id: NodeId) -> Result<&DataList<D>, TreeError> {
        Ok(&self.node(id)?.data)
    }

    /// Number of data elements held by `id`.
    pub fn data_count(&self, id: NodeId) -> Result<usize, TreeError> {
        Ok(self.node(id)?.data.len())
    }

    /// Append `item` to the data of `id`.
    pub fn add_data(&mut self, id: NodeId, item: D) -> Result<(), TreeError> {
        self.node_mut(id)?.data.push(item);
        self.record(TreeEvent::DataAdded { node: id, count: 1 });
        Ok(())
    }

    /// Remove the first element of `id`'s data equal to `item`.
    pub fn remove_data(&mut self, id: NodeId, item: &D) -> Result<bool, TreeError>
    where
        D: PartialEq,
    {
        Ok(self.remove_data_where(id, |d| d == item)?.is_some())
    }

    /// Remove and return the first element of `id`'s data matching `pred`.
    pub fn remove_data_where(
        &mut self,
        id: NodeId,
        pred: impl FnMut(&D) -> bool,
    ) -> Result<Option<D>, TreeError> {
        let found = self.node_mut(id)?.data.remove_first(pred);
        if found.is_some() {
            self.record(TreeEvent::DataRemoved { node: id, count: 1 });
        }
        Ok(found)
    }

    /// Replace the data of `id` with `items`.
    pub fn set_data(
        &mut self,
        id: NodeId,
        items: impl IntoIterator<Item = D>,
    ) -> Result<(), TreeError> {
        self.take_data(id)?;
        let policy = self.policy;
        let node = self.node_mut(id)?;
        node.data = DataList::from_items(policy, items);
        let count = node.data.len();
        if count > 0 {
            self.record(TreeEvent::DataAdded { node: id, count });
        }
        Ok(())
    }

    /// Move the data of `id` out, leaving it empty.
    pub fn take_data(&mut self, id: NodeId) -> Result<DataList<D>, TreeError> {
        let policy = self.policy;
        let taken = core::mem::replace(&mut self.node_mut(id)?.data, DataList::new(policy));
        if !taken.is_empty() {
            self.record(TreeEvent::DataRemoved {
                node: id,
                count: taken.len(),
            });
        }
        Ok(taken)
    }

    /// Remove every data element of `id`.
    pub fn clear_data(&mut self, id: NodeId) -> Result<(), TreeError> {
        self.take_data(id).map(drop)
    }

    // --- traversal ---

    /// Pre-order walk of the subtree rooted at `id`, children in zone order.
    ///
    /// Yields nothing for a stale handle.
    pub fn depth_first(&self, id: NodeId) -> DepthFirst<'_, D, Z> {
        let stack = if self.is_alive(id) { vec![id] } else { Vec::new() };
        DepthFirst { tree: self, stack }
    }

    /// Level-order walk of the subtree rooted at `id`, children in zone order.
    ///
    /// Yields nothing for a stale handle.
    pub fn breadth_first(&self, id: NodeId) -> BreadthFirst<'_, D, Z> {
        let mut queue = VecDeque::new();
        if self.is_alive(id) {
            queue.push_back(id);
        }
        BreadthFirst { tree: self, queue }
    }
}

impl<D, Z: Partition> Tree<D, Icosep<Z>> {
    /// Put `child` in the icosep slot of `parent`, or empty it with `None`.
    pub fn set_icosep_child(
        &mut self,
        parent: NodeId,
        child: Option<NodeId>,
    ) -> Result<bool, TreeError> {
        self.set_child_at(parent, Icosep::Icosep, child)
    }

    /// Occupant of the icosep slot of `id`.
    pub fn icosep_child(&self, id: NodeId) -> Result<Option<NodeId>, TreeError> {
        self.child_at(id, Icosep::Icosep)
    }
}

/// Depth-first iterator returned by [`Tree::depth_first`].
#[derive(Debug)]
pub struct DepthFirst<'a, D, Z> {
    tree: &'a Tree<D, Z>,
    stack: Vec<NodeId>,
}

impl<D, Z: Partition> Iterator for DepthFirst<'_, D, Z> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        if let Some(node) = self.tree.node_opt(id) {
            self.stack.extend(node.children.iter().rev().flatten());
        }
        Some(id)
    }
}

/// Breadth-first iterator returned by [`Tree::breadth_first`].
#[derive(Debug)]
pub struct BreadthFirst<'a, D, Z> {
    tree: &'a Tree<D, Z>,
    queue: VecDeque<NodeId>,
}

impl<D, Z: Partition> Iterator for BreadthFirst<'_, D, Z> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.queue.pop_front()?;
        if let Some(node) = self.tree.node_opt(id) {
            self.queue.extend(node.children.iter().flatten());
        }
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BinaryZone, QuadZone};

    type Icosep2 = Tree<u32, Icosep<BinaryZone>>;

    #[test]
    fn icosep_node_always_reports_one_extra_slot() {
        let mut t = Icosep2::new();
        let n = t.new_node();
        assert_eq!(t.child_count(n).unwrap(), 3);
        let c = t.new_node();
        t.set_icosep_child(n, Some(c)).unwrap();
        assert_eq!(t.child_count(n).unwrap(), 3);
        assert_eq!(t.not_null_child_count(n).unwrap(), 1);
        assert!(!t.is_leaf(n).unwrap());

        let mut q = Tree::<u32, Icosep<QuadZone>>::new();
        let m = q.new_node();
        assert_eq!(q.child_count(m).unwrap(), 5);
        assert_eq!(Tree::<u32, QuadZone>::new().child_count(m), Err(TreeError::StaleNode(m)));
    }

    #[test]
    fn attaching_elsewhere_detaches_from_previous_parent() {
        let mut t = Icosep2::new();
        let n = t.new_node();
        let m = t.new_node();
        let child = t.new_node();
        assert!(t.set_child_at(n, Icosep::Zone(BinaryZone::Left), Some(child)).unwrap());
        assert!(t.set_child_at(m, Icosep::Zone(BinaryZone::Right), Some(child)).unwrap());
        assert_eq!(t.parent(child).unwrap(), Some(m));
        assert_eq!(t.child_at(n, Icosep::Zone(BinaryZone::Left)).unwrap(), None);
        assert_eq!(t.not_null_child_count(n).unwrap(), 0);
        assert!(t.is_leaf(n).unwrap());

        // Moving within the same parent leaves a single slot occupied.
        assert!(t.set_icosep_child(m, Some(child)).unwrap());
        assert_eq!(t.not_null_child_count(m).unwrap(), 1);
        assert_eq!(t.index_of(m, child).unwrap(), Some(2));
        assert_eq!(t.icosep_child(m).unwrap(), Some(child));
    }

    #[test]
    fn reassigning_the_same_child_is_a_no_op() {
        let mut t = Icosep2::new();
        let n = t.new_node();
        let c = t.new_node();
        t.set_event_mask(EventMask::STRUCTURE);
        assert!(t.set_icosep_child(n, Some(c)).unwrap());
        assert!(!t.set_icosep_child(n, Some(c)).unwrap());
        assert_eq!(
            t.take_events(),
            [TreeEvent::ChildAdded {
                parent: n,
                index: 2,
                child: c
            }]
        );
        assert!(t.set_icosep_child(n, None).unwrap());
        assert_eq!(
            t.take_events(),
            [TreeEvent::ChildRemoved {
                parent: n,
                index: 2,
                child: c
            }]
        );
        assert!(t.is_root(c).unwrap());
    }

    #[test]
    fn replacing_an_occupant_detaches_it_first() {
        let mut t = Icosep2::new();
        let n = t.new_node();
        let m = t.new_node();
        let a = t.new_node();
        let b = t.new_node();
        let c = t.new_node();
        t.set_child_at(n, Icosep::Zone(BinaryZone::Left), Some(a)).unwrap();
        t.set_child_at(m, Icosep::Zone(BinaryZone::Right), Some(c)).unwrap();
        t.set_event_mask(EventMask::STRUCTURE);

        assert!(t.set_child_at(n, Icosep::Zone(BinaryZone::Left), Some(b)).unwrap());
        assert_eq!(t.parent(a).unwrap(), None);
        assert_eq!(t.parent(b).unwrap(), Some(n));
        assert_eq!(t.not_null_child_count(n).unwrap(), 1);
        assert_eq!(
            t.take_events(),
            [
                TreeEvent::ChildRemoved {
                    parent: n,
                    index: 0,
                    child: a
                },
                TreeEvent::ChildAdded {
                    parent: n,
                    index: 0,
                    child: b
                },
            ]
        );

        // An incoming node with a parent of its own leaves it after the occupant goes.
        assert!(t.set_child_at(n, Icosep::Zone(BinaryZone::Left), Some(c)).unwrap());
        assert_eq!(t.parent(b).unwrap(), None);
        assert_eq!(t.parent(c).unwrap(), Some(n));
        assert_eq!(t.not_null_child_count(n).unwrap(), 1);
        assert!(t.is_leaf(m).unwrap());
        assert_eq!(
            t.take_events(),
            [
                TreeEvent::ChildRemoved {
                    parent: n,
                    index: 0,
                    child: b
                },
                TreeEvent::ChildRemoved {
                    parent: m,
                    index: 1,
                    child: c
                },
                TreeEvent::ChildAdded {
                    parent: n,
                    index: 0,
                    child: c
                },
            ]
        );
    }

    #[test]
    fn exhausted_slots_are_retired() {
        let mut t = Icosep2::new();
        let first = t.new_node();
        t.remove_subtree(first).unwrap();
        t.generations[0] = u32::MAX - 1;
        let last = t.new_node();
        assert_eq!(last, NodeId::new(0, u32::MAX));
        t.remove_subtree(last).unwrap();
        assert!(t.free_list.is_empty());
        assert_eq!(t.len(), 0);
        assert!(t.is_empty());

        let fresh = t.new_node();
        assert_eq!(fresh.idx(), 1);
        assert!(!t.is_alive(last));
        assert!(!t.is_alive(first));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn slot_errors() {
        let mut t = Icosep2::new();
        let n = t.new_node();
        assert_eq!(
            t.child_at_index(n, 3),
            Err(TreeError::OutOfRange { index: 3, count: 3 })
        );
        let c = t.new_node();
        t.set_child_at_index(n, 0, Some(c)).unwrap();
        assert_eq!(t.set_child_at_index(c, 1, Some(n)), Err(TreeError::Cycle));
        assert_eq!(t.set_child_at_index(n, 1, Some(n)), Err(TreeError::Cycle));
        let other = t.new_node();
        assert!(!t.remove_child(n, other).unwrap());
        assert!(t.remove_child(n, c).unwrap());
        assert!(!t.remove_from_parent(c).unwrap());
    }

    #[test]
    fn heights_count_the_icosep_branch_like_any_other() {
        let mut t = Icosep2::new();
        let root = t.new_node();
        let left = t.new_node();
        let ico = t.new_node();
        let deep = t.new_node();
        t.set_child_at(root, Icosep::Zone(BinaryZone::Left), Some(left)).unwrap();
        t.set_icosep_child(root, Some(ico)).unwrap();
        t.set_icosep_child(ico, Some(deep)).unwrap();
        assert_eq!(t.max_height(root).unwrap(), 3);
        // The empty right slot ends a branch at the root.
        assert_eq!(t.min_height(root).unwrap(), 1);
        assert_eq!(t.heights(root).unwrap(), [2, 3]);
        assert_eq!(t.depth(deep).unwrap(), 2);
        assert_eq!(t.root_of(deep).unwrap(), root);
        assert_eq!(t.min_height(deep).unwrap(), 1);
    }

    #[test]
    fn clear_frees_descendants_including_icosep() {
        let mut t = Icosep2::new();
        let root = t.new_node_with_data([1, 2]);
        let a = t.new_node();
        let b = t.new_node();
        let c = t.new_node();
        t.set_child_at(root, Icosep::Zone(BinaryZone::Right), Some(a)).unwrap();
        t.set_icosep_child(root, Some(b)).unwrap();
        t.set_child_at(b, Icosep::Zone(BinaryZone::Left), Some(c)).unwrap();
        t.clear(root).unwrap();
        assert!(t.is_leaf(root).unwrap());
        assert_eq!(t.data_count(root).unwrap(), 0);
        assert!(!t.is_alive(a) && !t.is_alive(b) && !t.is_alive(c));
        assert_eq!(t.len(), 1);

        // Freed slots are reused with a new generation.
        let d = t.new_node();
        assert!(t.is_alive(d));
        assert!(!t.is_alive(c));
        assert_eq!(t.parent(c), Err(TreeError::StaleNode(c)));
    }

    #[test]
    fn traversal_orders() {
        let mut t = Tree::<u32, BinaryZone>::new();
        let r = t.new_node();
        let l = t.new_node();
        let rr = t.new_node();
        let ll = t.new_node();
        t.set_child_at(r, BinaryZone::Right, Some(rr)).unwrap();
        t.set_child_at(r, BinaryZone::Left, Some(l)).unwrap();
        t.set_child_at(l, BinaryZone::Left, Some(ll)).unwrap();
        assert_eq!(t.depth_first(r).collect::<Vec<_>>(), [r, l, ll, rr]);
        assert_eq!(t.breadth_first(r).collect::<Vec<_>>(), [r, l, rr, ll]);
        t.remove_subtree(l).unwrap();
        assert_eq!(t.depth_first(r).collect::<Vec<_>>(), [r, rr]);
        assert_eq!(t.depth_first(ll).count(), 0);
    }

    #[test]
    fn data_operations_record_events() {
        let mut t = Tree::<&str, BinaryZone>::with_policy(DataPolicy::Linked);
        t.set_event_mask(EventMask::DATA);
        let n = t.new_node();
        t.add_data(n, "a").unwrap();
        t.add_data(n, "b").unwrap();
        assert!(t.remove_data(n, &"a").unwrap());
        assert!(!t.remove_data(n, &"z").unwrap());
        t.set_data(n, ["x", "y", "z"]).unwrap();
        assert_eq!(t.data(n).unwrap().policy(), DataPolicy::Linked);
        assert_eq!(t.data(n).unwrap().iter().copied().collect::<Vec<_>>(), ["x", "y", "z"]);
        assert_eq!(
            t.take_events(),
            [
                TreeEvent::DataAdded { node: n, count: 1 },
                TreeEvent::DataAdded { node: n, count: 1 },
                TreeEvent::DataRemoved { node: n, count: 1 },
                TreeEvent::DataRemoved { node: n, count: 1 },
                TreeEvent::DataAdded { node: n, count: 3 },
            ]
        );
        t.clear_data(n).unwrap();
        assert_eq!(t.data_count(n).unwrap(), 0);
    }
}
