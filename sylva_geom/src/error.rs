// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by the geometry kernel.

use core::fmt;

/// Errors surfaced by shape construction, path building, and path iteration.
///
/// The kernel never retries or swallows these; they always reach the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeomError {
    /// A required argument was inconsistent (negative extent, zero axis, too few coordinates).
    InvalidArgument(&'static str),
    /// A drawing command was appended to a path that has no current subpath.
    MissingMoveTo,
    /// A path iterator was advanced past its last element.
    NoMoreElements,
    /// The operation is not supported by the receiver.
    Unsupported(&'static str),
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(what) => write!(f, "invalid argument: {what}"),
            Self::MissingMoveTo => f.write_str("missing initial move-to in path definition"),
            Self::NoMoreElements => f.write_str("no more path elements"),
            Self::Unsupported(what) => write!(f, "unsupported operation: {what}"),
        }
    }
}

impl core::error::Error for GeomError {}
