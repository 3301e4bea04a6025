// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounds-driven spatial index over an icosep tree.
//!
//! Each node covers a region. A node holding more than
//! [`SpatialConfig::max_data_per_node`] entries splits: every entry moves to
//! the zone that contains it, and entries whose bounds straddle a split line
//! go to the icosep child. Icosep children are buckets and never split.
//!
//! Classification is a half-space test against the split lines, so entries
//! outside the root region are still stored and found.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use sylva_geom::{AlignedBox3, Point2, Point3, Rectangle};

use crate::data::DataPolicy;
use crate::error::TreeError;
use crate::tree::Tree;
use crate::types::{BinaryZone, Icosep, NodeId, OctZone, Partition, QuadZone};

/// A zone enumeration that knows how to split a region.
pub trait Splitter: Partition {
    /// Region and entry bounds.
    type Bounds: Copy + PartialEq + Debug;
    /// Point type accepted by point queries.
    type Point: Copy + Debug;

    /// Zone of `region` that holds `item`, or `None` when `item` straddles a split line.
    fn classify(region: &Self::Bounds, item: &Self::Bounds) -> Option<Self>;

    /// Sub-region covered by `zone`.
    fn zone_bounds(region: &Self::Bounds, zone: Self) -> Self::Bounds;

    /// Whether entries classified into `zone` of `region` can overlap `query`.
    fn may_overlap(region: &Self::Bounds, zone: Self, query: &Self::Bounds) -> bool;

    /// Closed overlap test between two bounds.
    fn overlaps(a: &Self::Bounds, b: &Self::Bounds) -> bool;

    /// Degenerate bounds around a point.
    fn point_bounds(p: Self::Point) -> Self::Bounds;
}

/// Lower (`false`) or upper (`true`) side of `mid` for the span `[lo, hi]`.
fn side(lo: f64, hi: f64, mid: f64) -> Option<bool> {
    if hi <= mid {
        Some(false)
    } else if lo >= mid {
        Some(true)
    } else {
        None
    }
}

/// Whether a query spanning `[lo, hi]` can reach entries on `upper` side of `mid`.
fn reaches(lo: f64, hi: f64, mid: f64, upper: bool) -> bool {
    if upper { hi >= mid } else { lo <= mid }
}

fn rect_overlaps(a: &Rectangle, b: &Rectangle) -> bool {
    a.min_x() <= b.max_x()
        && b.min_x() <= a.max_x()
        && a.min_y() <= b.max_y()
        && b.min_y() <= a.max_y()
}

/// `true` when the binary split of `region` runs across `x`.
fn splits_x(region: &Rectangle) -> bool {
    region.width() >= region.height()
}

impl Splitter for BinaryZone {
    type Bounds = Rectangle;
    type Point = Point2;

    /// Splits at the middle of the region's longer axis; `Left` is the lower half.
    fn classify(region: &Rectangle, item: &Rectangle) -> Option<Self> {
        let c = region.center();
        let upper = if splits_x(region) {
            side(item.min_x(), item.max_x(), c.x)?
        } else {
            side(item.min_y(), item.max_y(), c.y)?
        };
        Some(if upper { Self::Right } else { Self::Left })
    }

    fn zone_bounds(region: &Rectangle, zone: Self) -> Rectangle {
        let c = region.center();
        let (lo, hi) = (region.min(), region.max());
        match (splits_x(region), zone) {
            (true, Self::Left) => Rectangle::new(lo.x, lo.y, c.x, hi.y),
            (true, Self::Right) => Rectangle::new(c.x, lo.y, hi.x, hi.y),
            (false, Self::Left) => Rectangle::new(lo.x, lo.y, hi.x, c.y),
            (false, Self::Right) => Rectangle::new(lo.x, c.y, hi.x, hi.y),
        }
    }

    fn may_overlap(region: &Rectangle, zone: Self, query: &Rectangle) -> bool {
        let c = region.center();
        let upper = zone == Self::Right;
        if splits_x(region) {
            reaches(query.min_x(), query.max_x(), c.x, upper)
        } else {
            reaches(query.min_y(), query.max_y(), c.y, upper)
        }
    }

    fn overlaps(a: &Rectangle, b: &Rectangle) -> bool {
        rect_overlaps(a, b)
    }

    fn point_bounds(p: Point2) -> Rectangle {
        Rectangle::from_corners(p, p)
    }
}

impl QuadZone {
    const fn from_sides(east: bool, north: bool) -> Self {
        match (east, north) {
            (false, true) => Self::NorthWest,
            (true, true) => Self::NorthEast,
            (false, false) => Self::SouthWest,
            (true, false) => Self::SouthEast,
        }
    }

    const fn sides(self) -> (bool, bool) {
        match self {
            Self::NorthWest => (false, true),
            Self::NorthEast => (true, true),
            Self::SouthWest => (false, false),
            Self::SouthEast => (true, false),
        }
    }
}

impl Splitter for QuadZone {
    type Bounds = Rectangle;
    type Point = Point2;

    /// Splits at the region's center.
    fn classify(region: &Rectangle, item: &Rectangle) -> Option<Self> {
        let c = region.center();
        let east = side(item.min_x(), item.max_x(), c.x)?;
        let north = side(item.min_y(), item.max_y(), c.y)?;
        Some(Self::from_sides(east, north))
    }

    fn zone_bounds(region: &Rectangle, zone: Self) -> Rectangle {
        let c = region.center();
        let (east, north) = zone.sides();
        let (x0, x1) = if east { (c.x, region.max_x()) } else { (region.min_x(), c.x) };
        let (y0, y1) = if north { (c.y, region.max_y()) } else { (region.min_y(), c.y) };
        Rectangle::new(x0, y0, x1, y1)
    }

    fn may_overlap(region: &Rectangle, zone: Self, query: &Rectangle) -> bool {
        let c = region.center();
        let (east, north) = zone.sides();
        reaches(query.min_x(), query.max_x(), c.x, east)
            && reaches(query.min_y(), query.max_y(), c.y, north)
    }

    fn overlaps(a: &Rectangle, b: &Rectangle) -> bool {
        rect_overlaps(a, b)
    }

    fn point_bounds(p: Point2) -> Rectangle {
        Rectangle::from_corners(p, p)
    }
}

impl OctZone {
    fn from_sides(east: bool, north: bool, top: bool) -> Self {
        let quad = QuadZone::from_sides(east, north).index();
        Self::ALL[quad + if top { 4 } else { 0 }]
    }

    fn sides(self) -> (bool, bool, bool) {
        let i = self.index();
        let (east, north) = QuadZone::ALL[i % 4].sides();
        (east, north, i >= 4)
    }
}

impl Splitter for OctZone {
    type Bounds = AlignedBox3;
    type Point = Point3;

    /// Splits at the box's center.
    fn classify(region: &AlignedBox3, item: &AlignedBox3) -> Option<Self> {
        let c = region.center();
        let (lo, hi) = (item.min(), item.max());
        let east = side(lo.x, hi.x, c.x)?;
        let north = side(lo.y, hi.y, c.y)?;
        let top = side(lo.z, hi.z, c.z)?;
        Some(Self::from_sides(east, north, top))
    }

    fn zone_bounds(region: &AlignedBox3, zone: Self) -> AlignedBox3 {
        let c = region.center();
        let (lo, hi) = (region.min(), region.max());
        let (east, north, top) = zone.sides();
        let pick = |upper: bool, l: f64, m: f64, h: f64| if upper { (m, h) } else { (l, m) };
        let (x0, x1) = pick(east, lo.x, c.x, hi.x);
        let (y0, y1) = pick(north, lo.y, c.y, hi.y);
        let (z0, z1) = pick(top, lo.z, c.z, hi.z);
        AlignedBox3::from_corners(Point3::new(x0, y0, z0), Point3::new(x1, y1, z1))
    }

    fn may_overlap(region: &AlignedBox3, zone: Self, query: &AlignedBox3) -> bool {
        let c = region.center();
        let (lo, hi) = (query.min(), query.max());
        let (east, north, top) = zone.sides();
        reaches(lo.x, hi.x, c.x, east)
            && reaches(lo.y, hi.y, c.y, north)
            && reaches(lo.z, hi.z, c.z, top)
    }

    fn overlaps(a: &AlignedBox3, b: &AlignedBox3) -> bool {
        let (a0, a1, b0, b1) = (a.min(), a.max(), b.min(), b.max());
        a0.x <= b1.x
            && b0.x <= a1.x
            && a0.y <= b1.y
            && b0.y <= a1.y
            && a0.z <= b1.z
            && b0.z <= a1.z
    }

    fn point_bounds(p: Point3) -> AlignedBox3 {
        AlignedBox3::from_corners(p, p)
    }
}

/// Tuning for a [`SpatialTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpatialConfig {
    /// A node splits once it holds more entries than this.
    pub max_data_per_node: usize,
    /// Nodes at this depth never split.
    pub max_depth: usize,
    /// Backing container for node data.
    pub data_policy: DataPolicy,
}

impl Default for SpatialConfig {
    fn default() -> Self {
        Self {
            max_data_per_node: 8,
            max_depth: 12,
            data_policy: DataPolicy::Array,
        }
    }
}

/// An item stored in a [`SpatialTree`] with its bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry<B, D> {
    /// Bounds used for placement and queries.
    pub bounds: B,
    /// Caller payload.
    pub item: D,
}

/// Spatial index storing entries in an icosep tree over the zones of `Z`.
pub struct SpatialTree<D, Z: Splitter> {
    tree: Tree<Entry<Z::Bounds, D>, Icosep<Z>>,
    root: NodeId,
    bounds: Z::Bounds,
    config: SpatialConfig,
    len: usize,
}

impl<D, Z: Splitter> Debug for SpatialTree<D, Z> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpatialTree")
            .field("bounds", &self.bounds)
            .field("config", &self.config)
            .field("len", &self.len)
            .field("tree", &self.tree)
            .finish_non_exhaustive()
    }
}

impl<D, Z: Splitter> SpatialTree<D, Z> {
    /// An empty index whose root covers `bounds`.
    pub fn new(bounds: Z::Bounds, config: SpatialConfig) -> Self {
        let mut tree = Tree::with_policy(config.data_policy);
        let root = tree.new_node();
        Self {
            tree,
            root,
            bounds,
            config,
            len: 0,
        }
    }

    /// Region covered by the root.
    pub fn bounds(&self) -> Z::Bounds {
        self.bounds
    }

    /// Tuning in use.
    pub fn config(&self) -> SpatialConfig {
        self.config
    }

    /// Root node of the underlying tree.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Read access to the underlying node arena.
    pub fn tree(&self) -> &Tree<Entry<Z::Bounds, D>, Icosep<Z>> {
        &self.tree
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no entry is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn is_split(&self, id: NodeId) -> Result<bool, TreeError> {
        Ok(self.tree.child_at_index(id, 0)?.is_some())
    }

    fn child_or_new(&mut self, id: NodeId, zone: Icosep<Z>) -> Result<NodeId, TreeError> {
        if let Some(c) = self.tree.child_at(id, zone)? {
            return Ok(c);
        }
        let c = self.tree.new_node();
        self.tree.set_child_at(id, zone, Some(c))?;
        Ok(c)
    }

    /// Store `item` under `bounds`.
    pub fn insert(&mut self, bounds: Z::Bounds, item: D) -> Result<(), TreeError> {
        let entry = Entry { bounds, item };
        let mut node = self.root;
        let mut region = self.bounds;
        let mut depth = 0;
        loop {
            if !self.is_split(node)? {
                self.tree.add_data(node, entry)?;
                self.len += 1;
                if self.tree.data_count(node)? > self.config.max_data_per_node
                    && depth < self.config.max_depth
                {
                    self.split(node, region, depth)?;
                }
                return Ok(());
            }
            match Z::classify(&region, &bounds) {
                Some(zone) => {
                    node = self.child_or_new(node, Icosep::Zone(zone))?;
                    region = Z::zone_bounds(&region, zone);
                    depth += 1;
                }
                None => {
                    let ico = self.child_or_new(node, Icosep::Icosep)?;
                    self.tree.add_data(ico, entry)?;
                    self.len += 1;
                    return Ok(());
                }
            }
        }
    }

    fn split(&mut self, node: NodeId, region: Z::Bounds, depth: usize) -> Result<(), TreeError> {
        let entries = self.tree.take_data(node)?;
        tracing::trace!(?node, depth, count = entries.len(), "split");
        for entry in entries {
            let zone = match Z::classify(&region, &entry.bounds) {
                Some(z) => Icosep::Zone(z),
                None => Icosep::Icosep,
            };
            let child = self.child_or_new(node, zone)?;
            self.tree.add_data(child, entry)?;
        }
        for i in 0..Z::COUNT {
            let Some(zone) = Z::from_index(i) else {
                continue;
            };
            // Every standard slot is filled so that a split node is recognizable.
            let child = self.child_or_new(node, Icosep::Zone(zone))?;
            if self.tree.data_count(child)? > self.config.max_data_per_node
                && depth + 1 < self.config.max_depth
            {
                self.split(child, Z::zone_bounds(&region, zone), depth + 1)?;
            }
        }
        Ok(())
    }

    /// Remove one entry equal to `(bounds, item)`. Returns whether one was found.
    ///
    /// A split node whose subtree falls back under the node capacity is merged.
    pub fn remove(&mut self, bounds: &Z::Bounds, item: &D) -> Result<bool, TreeError>
    where
        D: PartialEq,
    {
        let mut path = vec![self.root];
        let mut node = self.root;
        let mut region = self.bounds;
        let target = loop {
            if !self.is_split(node)? {
                break node;
            }
            match Z::classify(&region, bounds) {
                Some(zone) => match self.tree.child_at(node, Icosep::Zone(zone))? {
                    Some(c) => {
                        node = c;
                        region = Z::zone_bounds(&region, zone);
                        path.push(c);
                    }
                    None => return Ok(false),
                },
                None => match self.tree.icosep_child(node)? {
                    Some(c) => break c,
                    None => return Ok(false),
                },
            }
        };
        let found = self
            .tree
            .remove_data_where(target, |e| e.bounds == *bounds && e.item == *item)?;
        if found.is_none() {
            return Ok(false);
        }
        self.len -= 1;
        for n in path {
            if self.is_split(n)? && self.subtree_len(n) <= self.config.max_data_per_node {
                self.merge(n)?;
                break;
            }
        }
        Ok(true)
    }

    fn subtree_len(&self, id: NodeId) -> usize {
        self.tree
            .depth_first(id)
            .map(|n| self.tree.data_count(n).unwrap_or(0))
            .sum()
    }

    fn merge(&mut self, node: NodeId) -> Result<(), TreeError> {
        let below: Vec<NodeId> = self.tree.depth_first(node).skip(1).collect();
        let mut entries = Vec::new();
        for n in below {
            entries.extend(self.tree.take_data(n)?);
        }
        tracing::trace!(?node, count = entries.len(), "merge");
        self.tree.clear(node)?;
        self.tree.set_data(node, entries)
    }

    /// Entries whose bounds overlap `query`, boundaries included.
    pub fn query_intersecting(
        &self,
        query: &Z::Bounds,
    ) -> impl Iterator<Item = &Entry<Z::Bounds, D>> + use<'_, D, Z> {
        let mut out = Vec::new();
        let mut stack = vec![(self.root, self.bounds)];
        while let Some((id, region)) = stack.pop() {
            let Ok(data) = self.tree.data(id) else {
                continue;
            };
            out.extend(data.iter().filter(|e| Z::overlaps(&e.bounds, query)));
            let Ok(children) = self.tree.children(id) else {
                continue;
            };
            for (i, child) in children.iter().enumerate() {
                let Some(c) = *child else {
                    continue;
                };
                match Icosep::<Z>::from_index(i) {
                    Some(Icosep::Zone(z)) => {
                        if Z::may_overlap(&region, z, query) {
                            stack.push((c, Z::zone_bounds(&region, z)));
                        }
                    }
                    Some(Icosep::Icosep) => stack.push((c, region)),
                    None => {}
                }
            }
        }
        out.into_iter()
    }

    /// Entries whose bounds contain `p`, boundaries included.
    pub fn query_point(&self, p: Z::Point) -> impl Iterator<Item = &Entry<Z::Bounds, D>> + '_ {
        self.query_intersecting(&Z::point_bounds(p))
    }

    /// Every entry, in depth-first node order.
    pub fn items(&self) -> impl Iterator<Item = &Entry<Z::Bounds, D>> + '_ {
        self.tree
            .depth_first(self.root)
            .filter_map(move |n| self.tree.data(n).ok())
            .flat_map(|d| d.iter())
    }

    /// Remove every entry and collapse the tree to its root.
    pub fn clear(&mut self) -> Result<(), TreeError> {
        self.tree.clear(self.root)?;
        self.len = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> SpatialConfig {
        SpatialConfig {
            max_data_per_node: 2,
            max_depth: 8,
            data_policy: DataPolicy::Array,
        }
    }

    fn quad() -> SpatialTree<u32, QuadZone> {
        SpatialTree::new(Rectangle::new(0.0, 0.0, 100.0, 100.0), small())
    }

    fn ids<'a, B: 'a>(it: impl Iterator<Item = &'a Entry<B, u32>>) -> Vec<u32> {
        let mut v: Vec<u32> = it.map(|e| e.item).collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn overflow_splits_and_straddlers_go_to_icosep() {
        let mut t = quad();
        t.insert(Rectangle::new(10.0, 60.0, 20.0, 70.0), 1).unwrap();
        t.insert(Rectangle::new(60.0, 60.0, 70.0, 70.0), 2).unwrap();
        assert!(t.tree().is_leaf(t.root()).unwrap());
        t.insert(Rectangle::new(10.0, 10.0, 20.0, 20.0), 3).unwrap();
        let root = t.root();
        assert_eq!(t.tree().not_null_child_count(root).unwrap(), 4);
        assert_eq!(t.tree().data_count(root).unwrap(), 0);
        let nw = t.tree().child_at(root, Icosep::Zone(QuadZone::NorthWest)).unwrap().unwrap();
        assert_eq!(t.tree().data(nw).unwrap().get(0).map(|e| e.item), Some(1));

        t.insert(Rectangle::new(45.0, 45.0, 55.0, 55.0), 4).unwrap();
        let ico = t.tree().icosep_child(root).unwrap().unwrap();
        assert_eq!(t.tree().data_count(ico).unwrap(), 1);
        assert_eq!(t.len(), 4);
        assert_eq!(t.tree().child_count(root).unwrap(), 5);
    }

    #[test]
    fn queries_visit_zones_and_icosep() {
        let mut t = quad();
        for (i, (x, y)) in [(10.0, 10.0), (80.0, 10.0), (10.0, 80.0), (80.0, 80.0)]
            .into_iter()
            .enumerate()
        {
            t.insert(Rectangle::new(x, y, x + 5.0, y + 5.0), i as u32).unwrap();
        }
        t.insert(Rectangle::new(40.0, 40.0, 60.0, 60.0), 9).unwrap();
        assert_eq!(ids(t.query_point(Point2::new(12.0, 12.0))), [0]);
        assert_eq!(ids(t.query_point(Point2::new(50.0, 50.0))), [9]);
        assert_eq!(ids(t.query_point(Point2::new(85.0, 85.0))), [3]);
        assert_eq!(
            ids(t.query_intersecting(&Rectangle::new(0.0, 0.0, 100.0, 40.0))),
            [0, 1, 9]
        );
        assert!(t.query_point(Point2::new(30.0, 30.0)).next().is_none());
        assert_eq!(ids(t.items()), [0, 1, 2, 3, 9]);
    }

    #[test]
    fn entries_outside_the_root_region_are_found() {
        let mut t = quad();
        for i in 0..5 {
            let x = 200.0 + f64::from(i) * 10.0;
            t.insert(Rectangle::new(x, -50.0, x + 1.0, -49.0), i).unwrap();
        }
        assert_eq!(ids(t.query_point(Point2::new(220.5, -49.5))), [2]);
        assert_eq!(
            ids(t.query_intersecting(&Rectangle::new(150.0, -60.0, 300.0, -40.0))),
            [0, 1, 2, 3, 4]
        );
    }

    #[test]
    fn removal_merges_small_subtrees() {
        let mut t = quad();
        let boxes = [
            Rectangle::new(10.0, 10.0, 11.0, 11.0),
            Rectangle::new(80.0, 10.0, 81.0, 11.0),
            Rectangle::new(10.0, 80.0, 11.0, 81.0),
        ];
        for (i, b) in boxes.iter().enumerate() {
            t.insert(*b, i as u32).unwrap();
        }
        assert!(!t.tree().is_leaf(t.root()).unwrap());
        assert!(!t.remove(&boxes[0], &7).unwrap());
        assert!(t.remove(&boxes[0], &0).unwrap());
        assert!(t.tree().is_leaf(t.root()).unwrap());
        assert_eq!(t.tree().len(), 1);
        assert_eq!(ids(t.items()), [1, 2]);
        assert_eq!(t.len(), 2);
        t.clear().unwrap();
        assert!(t.is_empty());
        assert_eq!(t.items().count(), 0);
    }

    #[test]
    fn identical_entries_stop_at_max_depth() {
        let config = SpatialConfig {
            max_data_per_node: 1,
            max_depth: 3,
            data_policy: DataPolicy::Linked,
        };
        let mut t = SpatialTree::<u32, QuadZone>::new(Rectangle::new(0.0, 0.0, 8.0, 8.0), config);
        let p = Rectangle::new(1.0, 1.0, 1.0, 1.0);
        for i in 0..6 {
            t.insert(p, i).unwrap();
        }
        assert_eq!(t.tree().max_height(t.root()).unwrap(), 4);
        assert_eq!(ids(t.query_point(Point2::new(1.0, 1.0))), [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn binary_splits_the_longer_axis() {
        let region = Rectangle::new(0.0, 0.0, 100.0, 10.0);
        assert_eq!(
            BinaryZone::classify(&region, &Rectangle::new(60.0, 0.0, 70.0, 10.0)),
            Some(BinaryZone::Right)
        );
        assert_eq!(
            BinaryZone::classify(&region, &Rectangle::new(45.0, 0.0, 55.0, 1.0)),
            None
        );
        assert_eq!(
            BinaryZone::zone_bounds(&region, BinaryZone::Left),
            Rectangle::new(0.0, 0.0, 50.0, 10.0)
        );
        let tall = Rectangle::new(0.0, 0.0, 10.0, 100.0);
        assert_eq!(
            BinaryZone::classify(&tall, &Rectangle::new(0.0, 10.0, 10.0, 20.0)),
            Some(BinaryZone::Left)
        );

        let mut t = SpatialTree::<u32, BinaryZone>::new(region, small());
        for i in 0..6 {
            let x = f64::from(i) * 15.0;
            t.insert(Rectangle::new(x, 2.0, x + 5.0, 3.0), i).unwrap();
        }
        // Closed overlap: the entry starting at x = 60 touches the query.
        assert_eq!(ids(t.query_intersecting(&Rectangle::new(40.0, 0.0, 60.0, 10.0))), [3, 4]);
    }

    #[test]
    fn octree_classifies_by_octant() {
        let region = AlignedBox3::from_corners(Point3::ORIGIN, Point3::new(10.0, 10.0, 10.0));
        let item = AlignedBox3::from_corners(Point3::new(6.0, 6.0, 1.0), Point3::new(7.0, 7.0, 2.0));
        assert_eq!(OctZone::classify(&region, &item), Some(OctZone::NorthEastBottom));
        assert_eq!(
            OctZone::zone_bounds(&region, OctZone::SouthWestTop),
            AlignedBox3::from_corners(Point3::new(0.0, 0.0, 5.0), Point3::new(5.0, 5.0, 10.0))
        );
        for z in OctZone::ALL {
            let (e, n, t) = z.sides();
            assert_eq!(OctZone::from_sides(e, n, t), *z);
        }

        let mut t = SpatialTree::<u32, OctZone>::new(region, small());
        for i in 0..4 {
            let c = f64::from(i) * 3.0;
            let b = AlignedBox3::from_corners(Point3::new(c, c, c), Point3::new(c + 0.5, c + 0.5, c + 0.5));
            t.insert(b, i).unwrap();
        }
        assert_eq!(ids(t.query_point(Point3::new(6.25, 6.25, 6.25))), [2]);
        assert_eq!(t.len(), 4);
    }
}
