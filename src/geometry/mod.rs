// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - plates, partitioning, quad meshes and point classification

mod bbox;
mod classification;
mod mesh;
pub mod partition;
mod plane;
mod plate;

pub use bbox::BoundingBox;
pub use classification::{select, PointKind};
pub use mesh::{Mesh, Point3, Rectangle};
pub use plane::{Axis, Plane, SplitDirection};
pub use plate::{Cut, Plate};
