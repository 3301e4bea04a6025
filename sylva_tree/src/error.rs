// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for tree mutations and queries.

use core::fmt;

use crate::types::NodeId;

/// Errors surfaced by [`Tree`](crate::Tree) operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TreeError {
    /// A child slot index past the node's arity.
    OutOfRange {
        /// Requested slot.
        index: usize,
        /// Number of slots on the node.
        count: usize,
    },
    /// The handle's slot was freed or reused.
    StaleNode(NodeId),
    /// The link would make a node its own ancestor or give it two parents.
    Cycle,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, count } => {
                write!(f, "child index {index} out of range for {count} slots")
            }
            Self::StaleNode(id) => write!(f, "stale node handle {id:?}"),
            Self::Cycle => f.write_str("node would be its own ancestor or have two parents"),
        }
    }
}

impl core::error::Error for TreeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn out_of_range_names_both_numbers() {
        let e = TreeError::OutOfRange { index: 5, count: 3 };
        assert_eq!(e.to_string(), "child index 5 out of range for 3 slots");
    }
}
