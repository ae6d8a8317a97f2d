// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! JSON exporter

use crate::geometry::{select, Mesh, Point3, PointKind, Rectangle};
use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct MeshDocument<'a> {
    points: &'a [Point3],
    rectangles: &'a [Rectangle],
    #[serde(skip_serializing_if = "Option::is_none")]
    kinds: Option<Vec<PointKind>>,
}

/// Serialize a mesh, optionally with the boundary label of every point
pub fn to_json_string(mesh: &Mesh, with_kinds: bool) -> Result<String> {
    let document = MeshDocument {
        points: &mesh.points,
        rectangles: &mesh.rectangles,
        kinds: with_kinds.then(|| select(&mesh.points)),
    };
    serde_json::to_string_pretty(&document).context("Failed to serialize mesh")
}

/// Export mesh to a JSON file
pub fn export(mesh: &Mesh, path: &str, with_kinds: bool) -> Result<()> {
    let json = to_json_string(mesh, with_kinds)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write JSON file: {}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Model;
    use serde_json::Value;

    #[test]
    fn test_json_document() -> Result<()> {
        let mesh = Model::new(1800, 1200, "base")?.generate(0);
        let value: Value = serde_json::from_str(&to_json_string(&mesh, true)?)?;

        assert_eq!(value["points"][2], serde_json::json!([1800, 1200, 0]));
        assert_eq!(value["rectangles"][0]["indices"], serde_json::json!([0, 1, 2, 3]));
        assert_eq!(value["rectangles"][0]["material"], "base");
        assert_eq!(value["kinds"][0], "BottomLeft");
        Ok(())
    }

    #[test]
    fn test_json_without_kinds() -> Result<()> {
        let mesh = Model::new(10, 10, "base")?.generate(0);
        let value: Value = serde_json::from_str(&to_json_string(&mesh, false)?)?;
        assert!(value.get("kinds").is_none());

        let back: Mesh = serde_json::from_value(value)?;
        assert_eq!(back, mesh);
        Ok(())
    }
}
