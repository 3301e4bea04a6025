// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path model: elements, iterators, flattening, and crossing numbers.

pub mod crossings;
pub mod element;
pub mod flatten;
pub mod iter;
mod shape;

pub use shape::Path;
