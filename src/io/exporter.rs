// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Export format selection

use crate::geometry::Mesh;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Supported mesh output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Gmsh MSH 2.2 ASCII
    #[default]
    Msh,
    /// Binary STL, two triangles per quad
    Stl,
    /// JSON dump of points and rectangles
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Msh => "msh",
            ExportFormat::Stl => "stl",
            ExportFormat::Json => "json",
        }
    }

    /// Detect format from a file extension
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        ext.parse().ok()
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "msh" | "gmsh" => Ok(ExportFormat::Msh),
            "stl" => Ok(ExportFormat::Stl),
            "json" => Ok(ExportFormat::Json),
            _ => Err(anyhow!("Unsupported format: {} (expected msh, stl or json)", s)),
        }
    }
}

/// Write `mesh` to `path` in the given format
pub fn export(mesh: &Mesh, path: &str, format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Msh => super::export_msh(mesh, path),
        ExportFormat::Stl => super::export_stl(mesh, path),
        ExportFormat::Json => super::export_json(mesh, path, true),
    }
}
