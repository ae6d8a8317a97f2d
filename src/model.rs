// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Model construction and mesh generation

use crate::error::{OrthoError, OrthoResult};
use crate::geometry::{partition, Axis, Cut, Mesh, Plane, Plate};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which footprint axis a stiffener or elevated plate runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Spans the full X extent, placed by an offset along Y
    #[serde(rename = "x")]
    ParallelX,
    /// Spans the full Y extent, placed by an offset along X
    #[serde(rename = "y")]
    ParallelY,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::ParallelX => f.write_str("x"),
            Orientation::ParallelY => f.write_str("y"),
        }
    }
}

impl FromStr for Orientation {
    type Err = OrthoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "x" => Ok(Orientation::ParallelX),
            "y" => Ok(Orientation::ParallelY),
            _ => Err(OrthoError::UnknownOrientation(s.to_string())),
        }
    }
}

/// Box-like structure: a base plate in the XY plane plus stiffeners and
/// elevated plates.
///
/// Every construction call appends one plate together with the cuts it
/// induces on the plates already present; nothing is split until
/// [`Model::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    width: u64,
    height: u64,
    plates: Vec<Plate>,
    cuts: Vec<Cut>,
}

impl Model {
    /// Create a model holding a single `width` x `height` base plate
    pub fn new(width: u64, height: u64, material: impl Into<String>) -> OrthoResult<Self> {
        let mut model = Self {
            width: 0,
            height: 0,
            plates: Vec::new(),
            cuts: Vec::new(),
        };
        model.init(width, height, material)?;
        Ok(model)
    }

    /// Reset to a single base plate covering the footprint at z = 0
    pub fn init(&mut self, width: u64, height: u64, material: impl Into<String>) -> OrthoResult<()> {
        if width == 0 || height == 0 {
            return Err(OrthoError::ZeroDimension { width, height });
        }

        self.width = width;
        self.height = height;
        self.cuts.clear();
        self.plates.clear();
        self.plates
            .push(Plate::new(Plane::Xy, 0, [0, 0], width, height, material));

        debug!("init {}x{} footprint", width, height);
        Ok(())
    }

    /// Insert a stiffener standing on the base plate.
    ///
    /// The stiffener rises `stiff_height` from z = 0 and spans the whole
    /// footprint along `orientation`, placed at `offset` along the other
    /// axis. Fails if `offset` lies beyond the footprint.
    ///
    /// ```text
    /// ParallelX:                 ParallelY:
    ///  Y                          Y
    ///  |  +------------------+    |      +
    ///  |  |    stiffener     |    |      |
    ///  |  +==================+    |      # stiffener
    ///  |  |     offset       |    |      #
    ///  |  +------------------+    |      +
    ///  *-----------------> X      *-------> X
    ///                             |<off->|
    /// ```
    pub fn add(
        &mut self,
        stiff_height: u64,
        material: impl Into<String>,
        offset: u64,
        orientation: Orientation,
    ) -> OrthoResult<()> {
        let (plane, axis, limit, length) = match orientation {
            Orientation::ParallelX => (Plane::Zx, Axis::Y, self.height, self.width),
            Orientation::ParallelY => (Plane::Yz, Axis::X, self.width, self.height),
        };
        if stiff_height == 0 {
            return Err(OrthoError::ZeroDimension {
                width: length,
                height: stiff_height,
            });
        }
        if offset > limit {
            return Err(OrthoError::OffsetOutOfBounds {
                axis,
                offset,
                limit,
            });
        }

        self.plates
            .push(Plate::new(plane, offset, [0, 0], length, stiff_height, material));
        self.cuts.push(Cut::new(plane, offset));
        self.cuts.push(Cut::new(Plane::Xy, 0));
        self.cuts.push(Cut::new(Plane::Xy, stiff_height));

        debug!(
            "stiffener {} at {}={} height {}",
            plane, axis, offset, stiff_height
        );
        Ok(())
    }

    /// Insert a plate parallel to the base plate, raised to `z_offset`.
    ///
    /// The plate spans the whole footprint along `orientation` and covers
    /// `[offset, offset + width]` along the other axis. Fails if that range
    /// runs past the footprint.
    ///
    /// ```text
    /// ParallelX:                   ParallelY:
    ///  Y                            Y
    ///  |   ---  +-------------+     |         +-------+
    ///  |   width|             |     |         |       |
    ///  |   ---  +-------------+     |         |       |
    ///  |   offset                   |         |       |
    ///  *-----------------> X        *---------+-------+--> X
    ///                               |<offset->|<width>|
    /// ```
    pub fn add_plate_on_z(
        &mut self,
        width: u64,
        z_offset: u64,
        material: impl Into<String>,
        offset: u64,
        orientation: Orientation,
    ) -> OrthoResult<()> {
        let (cut_plane, axis, limit) = match orientation {
            Orientation::ParallelX => (Plane::Zx, Axis::Y, self.height),
            Orientation::ParallelY => (Plane::Yz, Axis::X, self.width),
        };
        if width == 0 {
            let full = match orientation {
                Orientation::ParallelX => self.width,
                Orientation::ParallelY => self.height,
            };
            return Err(OrthoError::ZeroDimension {
                width: full,
                height: width,
            });
        }
        let end = match offset.checked_add(width) {
            Some(end) if end <= limit => end,
            _ => {
                return Err(OrthoError::SpanOutOfBounds {
                    axis,
                    offset,
                    width,
                    limit,
                })
            }
        };

        let plate = match orientation {
            Orientation::ParallelX => {
                Plate::new(Plane::Xy, z_offset, [0, offset], self.width, width, material)
            }
            Orientation::ParallelY => {
                Plate::new(Plane::Xy, z_offset, [offset, 0], width, self.height, material)
            }
        };
        self.plates.push(plate);
        self.cuts.push(Cut::new(cut_plane, offset));
        self.cuts.push(Cut::new(cut_plane, end));
        self.cuts.push(Cut::new(Plane::Xy, z_offset));

        debug!(
            "elevated plate at z={} covering {}={}..{}",
            z_offset, axis, offset, end
        );
        Ok(())
    }

    /// Split the plates against every cut and, when `max_span > 0`,
    /// subdivide until no plate is longer than `max_span` along either
    /// local axis.
    ///
    /// Works on a private copy; the model itself is left untouched.
    pub fn resolve_plates(&self, max_span: u64) -> Vec<Plate> {
        let mut work = self.clone();
        work.resolve(max_span);
        work.plates
    }

    /// Build the quad mesh for the current model.
    ///
    /// Repeated calls with different `max_span` values are independent of
    /// each other and of later construction calls.
    pub fn generate(&self, max_span: u64) -> Mesh {
        let plates = self.resolve_plates(max_span);
        let mut mesh = Mesh::from_plates(&plates);
        mesh.remove_coincident_faces();

        debug!(
            "generated {} points, {} rectangles (max span {})",
            mesh.point_count(),
            mesh.rectangle_count(),
            max_span
        );
        mesh
    }

    fn resolve(&mut self, max_span: u64) {
        self.plates = partition::apply_cuts(std::mem::take(&mut self.plates), &self.cuts);

        if max_span > 0 {
            let cuts = partition::subdivision_cuts(&self.plates, max_span);
            self.cuts.extend(cuts);
            self.resolve(0);
        }
    }

    pub fn width(&self) -> u64 {
        self.width
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    /// Plates as inserted, before any splitting
    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    /// Cuts in registration order
    pub fn cuts(&self) -> &[Cut] {
        &self.cuts
    }
}
