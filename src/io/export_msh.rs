// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Gmsh MSH 2.2 exporter

use crate::geometry::Mesh;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};

/// Gmsh element type for a 4-node quadrangle
const QUADRANGLE: u32 = 3;

/// Export mesh to an ASCII `.msh` file
pub fn export(mesh: &Mesh, path: &str) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create MSH file: {}", path))?;
    let mut writer = BufWriter::new(file);
    write_msh(mesh, &mut writer)?;
    writer.flush().context("Failed to write MSH file")?;
    Ok(())
}

/// Write mesh as MSH 2.2.
///
/// Each material becomes a 2D physical group, numbered from 1 in order of
/// first appearance. Node and element ids are 1-based.
pub fn write_msh<W: Write>(mesh: &Mesh, out: &mut W) -> Result<()> {
    let materials = mesh.materials();

    writeln!(out, "$MeshFormat")?;
    writeln!(out, "2.2 0 8")?;
    writeln!(out, "$EndMeshFormat")?;

    writeln!(out, "$PhysicalNames")?;
    writeln!(out, "{}", materials.len())?;
    for (index, material) in materials.iter().enumerate() {
        writeln!(out, "2 {} \"{}\"", index + 1, material.replace('"', "'"))?;
    }
    writeln!(out, "$EndPhysicalNames")?;

    writeln!(out, "$Nodes")?;
    writeln!(out, "{}", mesh.point_count())?;
    for (index, p) in mesh.points.iter().enumerate() {
        writeln!(out, "{} {} {} {}", index + 1, p.x, p.y, p.z)?;
    }
    writeln!(out, "$EndNodes")?;

    writeln!(out, "$Elements")?;
    writeln!(out, "{}", mesh.rectangle_count())?;
    for (index, r) in mesh.rectangles.iter().enumerate() {
        let group = materials
            .iter()
            .position(|m| *m == r.material)
            .map(|i| i + 1)
            .unwrap_or(0);
        writeln!(
            out,
            "{} {} 2 {} {} {} {} {} {}",
            index + 1,
            QUADRANGLE,
            group,
            group,
            r.indices[0] + 1,
            r.indices[1] + 1,
            r.indices[2] + 1,
            r.indices[3] + 1,
        )?;
    }
    writeln!(out, "$EndElements")?;

    Ok(())
}
