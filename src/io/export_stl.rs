// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! STL exporter

use crate::geometry::{Mesh, Point3};
use anyhow::{Context, Result};
use nalgebra::Vector3;
use std::fs::File;

/// Export mesh to binary STL, splitting every quad along its 0-2 diagonal
pub fn export(mesh: &Mesh, path: &str) -> Result<()> {
    let triangles = triangulate(mesh);

    let mut file = File::create(path).context("Failed to create STL file")?;
    stl_io::write_stl(&mut file, triangles.iter()).context("Failed to write STL file")?;

    Ok(())
}

fn triangulate(mesh: &Mesh) -> Vec<stl_io::Triangle> {
    let mut triangles = Vec::with_capacity(mesh.rectangle_count() * 2);

    for rectangle in &mesh.rectangles {
        let [p0, p1, p2, p3] = mesh.rectangle_corners(rectangle);
        triangles.push(stl_triangle(p0, p1, p2));
        triangles.push(stl_triangle(p0, p2, p3));
    }
    triangles
}

fn stl_triangle(a: Point3, b: Point3, c: Point3) -> stl_io::Triangle {
    use stl_io::{Normal, Vertex};

    let [a, b, c] = [a, b, c].map(|p| p.map(|coord| coord as f64));
    let normal = (b - a)
        .cross(&(c - a))
        .try_normalize(0.0)
        .unwrap_or_else(Vector3::zeros);

    let vertex = |p: nalgebra::Point3<f64>| Vertex::new([p.x as f32, p.y as f32, p.z as f32]);
    stl_io::Triangle {
        normal: Normal::new([normal.x as f32, normal.y as f32, normal.z as f32]),
        vertices: [vertex(a), vertex(b), vertex(c)],
    }
}
