// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Boundary classification of mesh points on the base plane

use super::{BoundingBox, Point3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a point relative to the base plate outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointKind {
    /// Not on the base plane
    Other,
    /// On the base plane, away from its outline
    BasePlate,
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    BottomLeft,
    TopRight,
    BottomRight,
}

impl PointKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PointKind::Other => "Other",
            PointKind::BasePlate => "BasePlate",
            PointKind::Left => "Left",
            PointKind::Right => "Right",
            PointKind::Top => "Top",
            PointKind::Bottom => "Bottom",
            PointKind::TopLeft => "TopLeft",
            PointKind::BottomLeft => "BottomLeft",
            PointKind::TopRight => "TopRight",
            PointKind::BottomRight => "BottomRight",
        }
    }

    /// Whether the point lies on the base plate outline
    pub fn is_boundary(&self) -> bool {
        !matches!(self, PointKind::Other | PointKind::BasePlate)
    }

    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            PointKind::TopLeft | PointKind::BottomLeft | PointKind::TopRight | PointKind::BottomRight
        )
    }
}

impl fmt::Display for PointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label every point by where it sits on the base plate outline.
///
/// The outline is the X/Y extent of the points at z = 0; points elsewhere are
/// [`PointKind::Other`]. Corner labels win over edge labels. The result is
/// parallel to `points`.
pub fn select(points: &[Point3]) -> Vec<PointKind> {
    let extent = BoundingBox::from_points(points.iter().filter(|p| p.z == 0));

    points
        .iter()
        .map(|point| {
            if point.z != 0 {
                return PointKind::Other;
            }
            let left = point.x == extent.min.x;
            let right = point.x == extent.max.x;
            let bottom = point.y == extent.min.y;
            let top = point.y == extent.max.y;

            match (left, right, bottom, top) {
                (_, true, true, _) => PointKind::BottomRight,
                (true, _, _, true) => PointKind::TopLeft,
                (_, true, _, true) => PointKind::TopRight,
                (true, _, true, _) => PointKind::BottomLeft,
                (_, _, true, _) => PointKind::Bottom,
                (_, _, _, true) => PointKind::Top,
                (_, true, _, _) => PointKind::Right,
                (true, _, _, _) => PointKind::Left,
                _ => PointKind::BasePlate,
            }
        })
        .collect()
}
