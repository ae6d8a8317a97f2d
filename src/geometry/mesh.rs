// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Quad mesh representation and assembly

use super::{BoundingBox, Plate};
use ahash::{AHashMap, AHashSet};
use log::debug;
use serde::{Deserialize, Serialize};

/// Integer mesh vertex. Identity is exact coordinate equality.
pub type Point3 = nalgebra::Point3<u64>;

/// Quad face: four point indices plus the material of its source plate.
///
/// Corners follow the plate's local bottom-left, top-left, top-right,
/// bottom-right order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle {
    pub indices: [usize; 4],
    pub material: String,
}

impl Rectangle {
    pub fn new(indices: [usize; 4], material: impl Into<String>) -> Self {
        Self {
            indices,
            material: material.into(),
        }
    }
}

/// Deduplicated point pool plus the quads referencing it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mesh {
    pub points: Vec<Point3>,
    pub rectangles: Vec<Rectangle>,
}

/// Exact-coordinate lookup used while assembling a mesh
#[derive(Debug, Default)]
struct PointPool {
    points: Vec<Point3>,
    index: AHashMap<Point3, usize>,
}

impl PointPool {
    fn intern(&mut self, point: Point3) -> usize {
        if let Some(&index) = self.index.get(&point) {
            return index;
        }
        let index = self.points.len();
        self.points.push(point);
        self.index.insert(point, index);
        index
    }
}

impl Mesh {
    /// Build one quad per plate, in plate order, sharing points between
    /// quads that touch.
    pub fn from_plates(plates: &[Plate]) -> Self {
        let mut pool = PointPool::default();
        let mut rectangles = Vec::with_capacity(plates.len());

        for plate in plates {
            let indices = plate.corners().map(|corner| pool.intern(corner));
            rectangles.push(Rectangle::new(indices, plate.material.clone()));
        }

        debug!(
            "assembled {} rectangles over {} points",
            rectangles.len(),
            pool.points.len()
        );

        Self {
            points: pool.points,
            rectangles,
        }
    }

    /// Drop faces that duplicate an earlier face above or across the base
    /// plane.
    ///
    /// Two such faces count as duplicates when their first corner is the
    /// same point. Faces lying flat on the base plane are never touched.
    /// Points are left as they are. Returns the number of faces removed.
    pub fn remove_coincident_faces(&mut self) -> usize {
        let before = self.rectangles.len();
        let points = &self.points;
        let mut first_corners = AHashSet::new();

        self.rectangles.retain(|rectangle| {
            if is_flat_on_base(points, rectangle) {
                return true;
            }
            first_corners.insert(rectangle.indices[0])
        });

        let removed = before - self.rectangles.len();
        if removed > 0 {
            debug!("removed {} coincident faces", removed);
        }
        removed
    }

    /// Whether `rectangle` lies in the base plane at zero elevation
    pub fn is_on_base_plane(&self, rectangle: &Rectangle) -> bool {
        is_flat_on_base(&self.points, rectangle)
    }

    pub fn rectangle_corners(&self, rectangle: &Rectangle) -> [Point3; 4] {
        rectangle.indices.map(|i| self.points[i])
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn rectangle_count(&self) -> usize {
        self.rectangles.len()
    }

    /// Distinct materials in order of first appearance
    pub fn materials(&self) -> Vec<&str> {
        let mut materials: Vec<&str> = Vec::new();
        for rectangle in &self.rectangles {
            if !materials.contains(&rectangle.material.as_str()) {
                materials.push(&rectangle.material);
            }
        }
        materials
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.points)
    }
}

// Axis-aligned quads: two opposite corners at z = 0 put the whole face there.
fn is_flat_on_base(points: &[Point3], rectangle: &Rectangle) -> bool {
    points[rectangle.indices[0]].z == 0 && points[rectangle.indices[2]].z == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Plane;

    #[test]
    fn test_single_plate() {
        let plate = Plate::new(Plane::Xy, 0, [0, 0], 1800, 1200, "base");
        let mesh = Mesh::from_plates(&[plate]);

        assert_eq!(
            mesh.points,
            vec![
                Point3::new(0, 0, 0),
                Point3::new(0, 1200, 0),
                Point3::new(1800, 1200, 0),
                Point3::new(1800, 0, 0),
            ]
        );
        assert_eq!(mesh.rectangles, vec![Rectangle::new([0, 1, 2, 3], "base")]);
    }

    #[test]
    fn test_shared_edge_shares_points() {
        let left = Plate::new(Plane::Xy, 0, [0, 0], 100, 50, "a");
        let right = Plate::new(Plane::Xy, 0, [100, 0], 100, 50, "b");
        let mesh = Mesh::from_plates(&[left, right]);

        assert_eq!(mesh.point_count(), 6);
        assert_eq!(mesh.rectangles[0].indices, [0, 1, 2, 3]);
        assert_eq!(mesh.rectangles[1].indices, [3, 2, 4, 5]);
        assert_eq!(mesh.materials(), vec!["a", "b"]);
    }

    #[test]
    fn test_remove_coincident_faces() {
        let cap = Plate::new(Plane::Xy, 100, [0, 0], 600, 1200, "cap");
        let base = Plate::new(Plane::Xy, 0, [0, 0], 600, 1200, "base");
        let mut mesh = Mesh::from_plates(&[cap.clone(), base.clone(), cap, base]);

        assert_eq!(mesh.remove_coincident_faces(), 1);
        assert_eq!(mesh.rectangle_count(), 3);
        assert_eq!(mesh.point_count(), 8);
        assert_eq!(mesh.rectangles[0].material, "cap");
        // base faces are never merged
        assert_eq!(
            mesh.rectangles
                .iter()
                .filter(|r| mesh.is_on_base_plane(r))
                .count(),
            2
        );
    }

    #[test]
    fn test_standing_face_is_not_on_base() {
        let stiffener = Plate::new(Plane::Zx, 600, [0, 0], 1800, 100, "stiff");
        let mesh = Mesh::from_plates(&[stiffener]);
        assert!(!mesh.is_on_base_plane(&mesh.rectangles[0]));
        assert_eq!(
            mesh.rectangle_corners(&mesh.rectangles[0])[2],
            Point3::new(1800, 600, 100)
        );
    }
}
