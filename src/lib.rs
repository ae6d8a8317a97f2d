// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Orthomesh
//!
//! Builds a rectilinear plate model of a box-like structure (a base plate
//! plus stiffeners and elevated plates) and turns it into a deduplicated
//! quad mesh with integer coordinates.
//!
//! ```
//! use orthomesh::{Model, Orientation};
//!
//! let mut model = Model::new(1800, 1200, "base")?;
//! model.add(100, "stiffener", 600, Orientation::ParallelX)?;
//! let mesh = model.generate(0);
//! assert_eq!(mesh.rectangle_count(), 3);
//! # Ok::<(), orthomesh::OrthoError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod model;

pub use config::MeshConfig;
pub use error::{OrthoError, OrthoResult};
pub use geometry::{select, Mesh, Plane, Plate, Point3, PointKind, Rectangle};
pub use io::{export_json, export_msh, export_stl, import_model_file, ExportFormat, ModelDescription};
pub use model::{Model, Orientation};

use anyhow::Result;

/// Build the model described by a TOML or JSON file and generate its mesh.
///
/// `max_span` overrides the span stored in the file; without either the
/// mesh is not subdivided.
pub fn generate_file(path: &str, max_span: Option<u64>) -> Result<Mesh> {
    let description = import_model_file(path)?;
    let model = description.build()?;
    let span = max_span.or(description.max_span).unwrap_or(0);
    Ok(model.generate(span))
}
