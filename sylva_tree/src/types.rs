// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the tree: node identifiers and zone enumerations.

use core::fmt::Debug;

/// Identifier for a node in a [`Tree`](crate::Tree).
///
/// A small, copyable handle made of a slot index and a generation counter.
///
/// - On creation, a fresh slot is allocated with generation `1`.
/// - On removal, the slot is freed; every `NodeId` that pointed to it is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a distinct `NodeId`.
/// - A slot whose generation reaches `u32::MAX` is retired on removal instead of reused.
///
/// Stale handles never alias a live node because the generation must match.
/// Use [`Tree::is_alive`](crate::Tree::is_alive) to check liveness.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Enumeration of the child slots of a node.
///
/// Slots are addressed both by zone and by position; `index` and `from_index`
/// convert between the two and must agree for every zone.
pub trait Partition: Copy + Eq + Debug + 'static {
    /// Number of child slots.
    const COUNT: usize;

    /// Position of the zone's slot, in `0..COUNT`.
    fn index(self) -> usize;

    /// The zone at `index`, or `None` past the last slot.
    fn from_index(index: usize) -> Option<Self>;
}

macro_rules! partition {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every zone, in slot order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];
        }

        impl Partition for $name {
            const COUNT: usize = Self::ALL.len();

            fn index(self) -> usize {
                self as usize
            }

            fn from_index(index: usize) -> Option<Self> {
                Self::ALL.get(index).copied()
            }
        }
    };
}

partition! {
    /// Two halves of a binary split.
    BinaryZone {
        /// Lower half along the split axis.
        Left,
        /// Upper half along the split axis.
        Right,
    }
}

partition! {
    /// Four quadrants around a center point, with `y` growing northwards.
    QuadZone {
        /// `x` below and `y` above the center.
        NorthWest,
        /// `x` and `y` above the center.
        NorthEast,
        /// `x` and `y` below the center.
        SouthWest,
        /// `x` above and `y` below the center.
        SouthEast,
    }
}

partition! {
    /// Eight octants around a center point; `Bottom` octants lie below the center in `z`.
    OctZone {
        /// North-west, below in `z`.
        NorthWestBottom,
        /// North-east, below in `z`.
        NorthEastBottom,
        /// South-west, below in `z`.
        SouthWestBottom,
        /// South-east, below in `z`.
        SouthEastBottom,
        /// North-west, above in `z`.
        NorthWestTop,
        /// North-east, above in `z`.
        NorthEastTop,
        /// South-west, above in `z`.
        SouthWestTop,
        /// South-east, above in `z`.
        SouthEastTop,
    }
}

/// Zones of `Z` plus one extra slot for elements straddling the split.
///
/// The icosep slot comes after the standard ones, so a node always has
/// `Z::COUNT + 1` child slots whether or not they are occupied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Icosep<Z> {
    /// One of the standard zones.
    Zone(Z),
    /// The intersection-separator slot.
    Icosep,
}

impl<Z: Partition> Partition for Icosep<Z> {
    const COUNT: usize = Z::COUNT + 1;

    fn index(self) -> usize {
        match self {
            Self::Zone(z) => z.index(),
            Self::Icosep => Z::COUNT,
        }
    }

    fn from_index(index: usize) -> Option<Self> {
        if index == Z::COUNT {
            Some(Self::Icosep)
        } else {
            Z::from_index(index).map(Self::Zone)
        }
    }
}

impl<Z> From<Z> for Icosep<Z> {
    fn from(zone: Z) -> Self {
        Self::Zone(zone)
    }
}
