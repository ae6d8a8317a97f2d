// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Coordinate axes and the three orthogonal planes plates live in

use crate::error::OrthoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Plane whose normal is this axis
    pub fn normal_plane(self) -> Plane {
        match self {
            Axis::X => Plane::Yz,
            Axis::Y => Plane::Zx,
            Axis::Z => Plane::Xy,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        f.write_str(name)
    }
}

/// One of the three coordinate planes.
///
/// Each plane carries a local 2D frame `(u, v)`:
///
/// | plane | u | v | normal |
/// |-------|---|---|--------|
/// | `Xy`  | X | Y | Z      |
/// | `Yz`  | Y | Z | X      |
/// | `Zx`  | X | Z | Y      |
///
/// `Xy` is the base plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plane {
    Xy,
    Yz,
    Zx,
}

/// How a transverse cut divides a plate in its local frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitDirection {
    /// Cut line runs along v, dividing the plate's u span (its width)
    Vertical,
    /// Cut line runs along u, dividing the plate's v span (its height)
    Horizontal,
}

impl Plane {
    pub const ALL: [Plane; 3] = [Plane::Xy, Plane::Yz, Plane::Zx];

    pub fn normal(self) -> Axis {
        match self {
            Plane::Xy => Axis::Z,
            Plane::Yz => Axis::X,
            Plane::Zx => Axis::Y,
        }
    }

    /// Local `[u, v]` axes
    pub fn local_axes(self) -> [Axis; 2] {
        match self {
            Plane::Xy => [Axis::X, Axis::Y],
            Plane::Yz => [Axis::Y, Axis::Z],
            Plane::Zx => [Axis::X, Axis::Z],
        }
    }

    /// Direction in which a cut lying in `cut` divides a plate lying in `self`.
    /// A plate is never divided by a cut in its own plane.
    pub fn split_direction(self, cut: Plane) -> Option<SplitDirection> {
        use SplitDirection::{Horizontal, Vertical};

        match (self, cut) {
            (Plane::Xy, Plane::Xy) => None,
            (Plane::Xy, Plane::Yz) => Some(Vertical),
            (Plane::Xy, Plane::Zx) => Some(Horizontal),
            (Plane::Yz, Plane::Xy) => Some(Horizontal),
            (Plane::Yz, Plane::Yz) => None,
            (Plane::Yz, Plane::Zx) => Some(Vertical),
            (Plane::Zx, Plane::Xy) => Some(Horizontal),
            (Plane::Zx, Plane::Yz) => Some(Vertical),
            (Plane::Zx, Plane::Zx) => None,
        }
    }

    /// Planes whose cuts divide this plane's `[u, v]` spans respectively
    pub fn cutting_planes(self) -> [Plane; 2] {
        match self {
            Plane::Xy => [Plane::Yz, Plane::Zx],
            Plane::Yz => [Plane::Zx, Plane::Xy],
            Plane::Zx => [Plane::Yz, Plane::Xy],
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Plane::Xy => "XY",
            Plane::Yz => "YZ",
            Plane::Zx => "ZX",
        };
        f.write_str(name)
    }
}

impl FromStr for Plane {
    type Err = OrthoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xy" | "xoy" => Ok(Plane::Xy),
            "yz" | "yoz" => Ok(Plane::Yz),
            "zx" | "zox" => Ok(Plane::Zx),
            _ => Err(OrthoError::UnknownPlane(s.to_string())),
        }
    }
}
