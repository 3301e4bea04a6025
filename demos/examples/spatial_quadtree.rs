// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial quadtree.
//!
//! Fill an icosep quadtree with a grid of cells and a few straddling bars, then query it.
//!
//! Run:
//! - `cargo run -p sylva_demos --example spatial_quadtree`

use sylva_geom::{Point2, Rectangle};
use sylva_tree::{QuadZone, SpatialConfig, SpatialTree};

fn main() {
    let config = SpatialConfig {
        max_data_per_node: 4,
        ..SpatialConfig::default()
    };
    let mut index =
        SpatialTree::<String, QuadZone>::new(Rectangle::new(0.0, 0.0, 64.0, 64.0), config);

    for y in 0..8 {
        for x in 0..8 {
            let x0 = f64::from(x) * 8.0 + 1.0;
            let y0 = f64::from(y) * 8.0 + 1.0;
            index
                .insert(Rectangle::new(x0, y0, x0 + 6.0, y0 + 6.0), format!("cell {x},{y}"))
                .unwrap();
        }
    }
    // These cross the root's center lines and land in icosep buckets.
    index.insert(Rectangle::new(0.0, 30.0, 64.0, 34.0), "horizontal bar".into()).unwrap();
    index.insert(Rectangle::new(30.0, 0.0, 34.0, 64.0), "vertical bar".into()).unwrap();

    println!("entries: {}", index.len());
    println!("tree depth: {}", index.tree().max_height(index.root()).unwrap());

    let window = Rectangle::new(20.0, 20.0, 28.0, 28.0);
    let mut hits: Vec<&str> = index
        .query_intersecting(&window)
        .map(|e| e.item.as_str())
        .collect();
    hits.sort_unstable();
    println!("window {window:?} hits {hits:?}");

    let at_center: Vec<&str> = index
        .query_point(Point2::new(32.0, 32.0))
        .map(|e| e.item.as_str())
        .collect();
    println!("center hits {at_center:?}");
    assert_eq!(at_center.len(), 2, "only the two bars cover the center");

    let bar = Rectangle::new(0.0, 30.0, 64.0, 34.0);
    assert!(index.remove(&bar, &"horizontal bar".to_string()).unwrap());
    println!("after removal: {}", index.len());
}
