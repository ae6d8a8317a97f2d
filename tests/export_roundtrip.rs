// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Round-trip export/import tests

use anyhow::Result;
use approx::assert_relative_eq;
use orthomesh::{generate_file, io, ExportFormat, Mesh, Model, Orientation};
use std::collections::HashSet;
use std::io::Write;
use tempfile::NamedTempFile;

const CROSS_TOML: &str = r#"
width = 1800
height = 1200
material = "deck"

[[members]]
kind = "stiffener"
height = 100
material = "horizontal"
offset = 600
orientation = "x"

[[members]]
kind = "stiffener"
height = 100
material = "vertical"
offset = 1000
orientation = "y"
"#;

fn cross_mesh() -> Result<Mesh> {
    let mut model = Model::new(1800, 1200, "deck")?;
    model.add(100, "horizontal", 600, Orientation::ParallelX)?;
    model.add(100, "vertical", 1000, Orientation::ParallelY)?;
    Ok(model.generate(0))
}

fn section<'a>(lines: &[&'a str], name: &str) -> Vec<&'a str> {
    let start = lines
        .iter()
        .position(|l| *l == format!("${}", name))
        .unwrap();
    let end = lines
        .iter()
        .position(|l| *l == format!("$End{}", name))
        .unwrap();
    lines[start + 1..end].to_vec()
}

#[test]
fn test_description_file_matches_api() -> Result<()> {
    let mut file = NamedTempFile::with_suffix(".toml")?;
    file.write_all(CROSS_TOML.as_bytes())?;
    let path = file.path().to_str().unwrap();

    let mesh = generate_file(path, None)?;
    assert_eq!(mesh, cross_mesh()?);

    // the same description as JSON
    let description = io::import_model_file(path)?;
    let mut json = NamedTempFile::with_suffix(".json")?;
    json.write_all(serde_json::to_string(&description)?.as_bytes())?;
    let from_json = generate_file(json.path().to_str().unwrap(), None)?;
    assert_eq!(from_json, mesh);

    Ok(())
}

#[test]
fn test_max_span_from_file() -> Result<()> {
    let mut file = NamedTempFile::with_suffix(".toml")?;
    write!(file, "max_span = 1000\n{}", CROSS_TOML)?;
    let path = file.path().to_str().unwrap();

    let from_file = generate_file(path, None)?;
    let overridden = generate_file(path, Some(0))?;

    assert_eq!(overridden, cross_mesh()?);
    assert!(from_file.rectangle_count() > overridden.rectangle_count());
    Ok(())
}

#[test]
fn test_invalid_member_is_reported() -> Result<()> {
    let mut file = NamedTempFile::with_suffix(".toml")?;
    write!(
        file,
        "width = 100\nheight = 100\n\n[[members]]\nkind = \"stiffener\"\nheight = 10\nmaterial = \"s\"\noffset = 500\norientation = \"x\"\n"
    )?;

    let err = generate_file(file.path().to_str().unwrap(), None).unwrap_err();
    assert!(err.to_string().contains("outside the footprint"), "{err}");
    Ok(())
}

#[test]
fn test_roundtrip_msh_export() -> Result<()> {
    let mesh = cross_mesh()?;

    let file = NamedTempFile::with_suffix(".msh")?;
    let path = file.path().to_str().unwrap();
    io::export(&mesh, path, ExportFormat::Msh)?;

    let text = std::fs::read_to_string(path)?;
    let lines: Vec<&str> = text.lines().collect();

    let names = section(&lines, "PhysicalNames");
    assert_eq!(names, vec!["3", "2 1 \"vertical\"", "2 2 \"horizontal\"", "2 3 \"deck\""]);

    let nodes = section(&lines, "Nodes");
    assert_eq!(nodes[0].parse::<usize>()?, mesh.point_count());
    for (line, p) in nodes[1..].iter().zip(&mesh.points) {
        let coords: Vec<u64> = line
            .split_whitespace()
            .skip(1)
            .map(str::parse)
            .collect::<Result<_, _>>()?;
        assert_eq!(coords, vec![p.x, p.y, p.z]);
    }

    let elements = section(&lines, "Elements");
    assert_eq!(elements[0].parse::<usize>()?, mesh.rectangle_count());
    for (line, r) in elements[1..].iter().zip(&mesh.rectangles) {
        let fields: Vec<usize> = line
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()?;
        assert_eq!(fields.len(), 9);
        assert_eq!(fields[1], 3);
        let nodes: Vec<usize> = r.indices.iter().map(|i| i + 1).collect();
        assert_eq!(&fields[5..], nodes.as_slice());
    }

    Ok(())
}

#[test]
fn test_roundtrip_stl_export() -> Result<()> {
    let mesh = cross_mesh()?;

    let file = NamedTempFile::with_suffix(".stl")?;
    let path = file.path().to_str().unwrap();
    io::export(&mesh, path, ExportFormat::Stl)?;

    let mut reader = std::fs::File::open(path)?;
    let stl = stl_io::read_stl(&mut reader)?;

    assert_eq!(stl.faces.len(), mesh.rectangle_count() * 2);
    // stl_io merges equal vertices on read; points only referenced by a
    // removed face are not written
    let referenced: HashSet<usize> = mesh
        .rectangles
        .iter()
        .flat_map(|r| r.indices)
        .collect();
    assert_eq!(stl.vertices.len(), referenced.len());

    for face in &stl.faces {
        let normal = &face.normal;
        let length = (normal[0] * normal[0] + normal[1] * normal[1] + normal[2] * normal[2]).sqrt();
        assert_relative_eq!(length, 1.0, epsilon = 1e-6);
        // every face is axis aligned
        let axis_aligned = (0..3).any(|i| (normal[i].abs() - 1.0).abs() < 1e-6);
        assert!(axis_aligned, "{:?}", normal);
    }

    Ok(())
}

#[test]
fn test_roundtrip_json_export() -> Result<()> {
    let mesh = cross_mesh()?;

    let file = NamedTempFile::with_suffix(".json")?;
    let path = file.path().to_str().unwrap();
    io::export(&mesh, path, ExportFormat::Json)?;

    let text = std::fs::read_to_string(path)?;
    let back: Mesh = serde_json::from_str(&text)?;
    assert_eq!(back, mesh);

    let value: serde_json::Value = serde_json::from_str(&text)?;
    let kinds = value["kinds"].as_array().unwrap();
    assert_eq!(kinds.len(), mesh.point_count());
    assert!(kinds.iter().any(|k| k == "TopRight"));

    Ok(())
}
