// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Plates, cuts and the plate splitter

use super::{Plane, Point3, SplitDirection};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle lying in `plane` at `offset` along the plane normal.
///
/// `origin` and the `width` x `height` extent are expressed in the plane's
/// local `(u, v)` frame (see [`Plane`]). The material label is carried along
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plate {
    pub width: u64,
    pub height: u64,
    pub origin: [u64; 2],
    pub plane: Plane,
    pub offset: u64,
    pub material: String,
}

/// Request to divide every transverse plate crossing `offset` along the
/// normal of `plane`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cut {
    pub plane: Plane,
    pub offset: u64,
}

impl Cut {
    pub fn new(plane: Plane, offset: u64) -> Self {
        Self { plane, offset }
    }
}

impl Plate {
    pub fn new(
        plane: Plane,
        offset: u64,
        origin: [u64; 2],
        width: u64,
        height: u64,
        material: impl Into<String>,
    ) -> Self {
        debug_assert!(width > 0 && height > 0, "degenerate plate {width}x{height}");
        Self {
            width,
            height,
            origin,
            plane,
            offset,
            material: material.into(),
        }
    }

    /// `[lo, hi]` along the local u axis
    pub fn span_u(&self) -> (u64, u64) {
        (self.origin[0], self.origin[0] + self.width)
    }

    /// `[lo, hi]` along the local v axis
    pub fn span_v(&self) -> (u64, u64) {
        (self.origin[1], self.origin[1] + self.height)
    }

    pub fn area(&self) -> u128 {
        self.width as u128 * self.height as u128
    }

    /// Divide the plate along `cut`.
    ///
    /// Returns `None` when the cut lies in the plate's own plane or when its
    /// offset is not strictly inside the plate's span; a cut on the boundary
    /// never produces an empty fragment. Otherwise the two returned plates
    /// tile the original exactly, lower fragment first.
    pub fn split(&self, cut: &Cut) -> Option<[Plate; 2]> {
        let direction = self.plane.split_direction(cut.plane)?;
        let d = cut.offset;
        let [u, v] = self.origin;

        match direction {
            SplitDirection::Vertical => {
                let (lo, hi) = self.span_u();
                if d <= lo || d >= hi {
                    return None;
                }
                Some([
                    self.fragment([u, v], d - lo, self.height),
                    self.fragment([d, v], hi - d, self.height),
                ])
            }
            SplitDirection::Horizontal => {
                let (lo, hi) = self.span_v();
                if d <= lo || d >= hi {
                    return None;
                }
                Some([
                    self.fragment([u, v], self.width, d - lo),
                    self.fragment([u, d], self.width, hi - d),
                ])
            }
        }
    }

    fn fragment(&self, origin: [u64; 2], width: u64, height: u64) -> Plate {
        Plate::new(
            self.plane,
            self.offset,
            origin,
            width,
            height,
            self.material.clone(),
        )
    }

    /// Map a local `(u, v)` coordinate into 3D
    pub fn to_world(&self, u: u64, v: u64) -> Point3 {
        let o = self.offset;
        match self.plane {
            Plane::Xy => Point3::new(u, v, o),
            Plane::Yz => Point3::new(o, u, v),
            Plane::Zx => Point3::new(u, o, v),
        }
    }

    /// Corners in 3D, ordered bottom-left, top-left, top-right, bottom-right
    /// in the local frame
    ///
    /// ```text
    ///  1-----2
    ///  |     |
    ///  0-----3
    /// ```
    pub fn corners(&self) -> [Point3; 4] {
        let (u0, u1) = self.span_u();
        let (v0, v1) = self.span_v();
        [
            self.to_world(u0, v0),
            self.to_world(u0, v1),
            self.to_world(u1, v1),
            self.to_world(u1, v0),
        ]
    }
}
