// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural change notifications.
//!
//! A [`Tree`](crate::Tree) records events matching its [`EventMask`] into an
//! internal log that callers drain with [`Tree::take_events`](crate::Tree::take_events).
//! Nothing is recorded with the default (empty) mask.

use crate::types::NodeId;

bitflags::bitflags! {
    /// Which kinds of [`TreeEvent`] a tree records.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EventMask: u8 {
        /// Record [`TreeEvent::ChildAdded`].
        const CHILD_ADDED   = 0b0000_0001;
        /// Record [`TreeEvent::ChildRemoved`].
        const CHILD_REMOVED = 0b0000_0010;
        /// Record [`TreeEvent::DataAdded`].
        const DATA_ADDED    = 0b0000_0100;
        /// Record [`TreeEvent::DataRemoved`].
        const DATA_REMOVED  = 0b0000_1000;
        /// Both child events.
        const STRUCTURE = Self::CHILD_ADDED.bits() | Self::CHILD_REMOVED.bits();
        /// Both data events.
        const DATA = Self::DATA_ADDED.bits() | Self::DATA_REMOVED.bits();
    }
}

/// A structural change to the tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TreeEvent {
    /// `child` was attached to `parent` at slot `index`.
    ChildAdded {
        /// Receiving node.
        parent: NodeId,
        /// Slot position.
        index: usize,
        /// Attached node.
        child: NodeId,
    },
    /// `child` was detached from slot `index` of `parent`.
    ChildRemoved {
        /// Former parent.
        parent: NodeId,
        /// Slot position.
        index: usize,
        /// Detached node.
        child: NodeId,
    },
    /// `count` elements were added to the data of `node`.
    DataAdded {
        /// Owner of the data.
        node: NodeId,
        /// Number of elements added.
        count: usize,
    },
    /// `count` elements were removed from the data of `node`.
    DataRemoved {
        /// Owner of the data.
        node: NodeId,
        /// Number of elements removed.
        count: usize,
    },
}

impl TreeEvent {
    /// The mask bit selecting this event.
    pub const fn kind(&self) -> EventMask {
        match self {
            Self::ChildAdded { .. } => EventMask::CHILD_ADDED,
            Self::ChildRemoved { .. } => EventMask::CHILD_REMOVED,
            Self::DataAdded { .. } => EventMask::DATA_ADDED,
            Self::DataRemoved { .. } => EventMask::DATA_REMOVED,
        }
    }
}
