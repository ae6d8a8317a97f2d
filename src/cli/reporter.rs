// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::geometry::{Mesh, Point3, PointKind};
use colored::*;
use std::fmt::Write;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Point table: `ID X Y Z`
    pub fn render_points(points: &[Point3]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{:>4} {:>6} {:>6} {:>6}", "ID", "X", "Y", "Z");
        for (index, p) in points.iter().enumerate() {
            let _ = writeln!(out, "{:>4} {:>6} {:>6} {:>6}", index, p.x, p.y, p.z);
        }
        out
    }

    /// Rectangle table: `ID P1 P2 P3 P4 Material`
    pub fn render_rectangles(mesh: &Mesh) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:>4} {:>4} {:>4} {:>4} {:>4} {:>12}",
            "ID", "P1", "P2", "P3", "P4", "Material"
        );
        for (index, r) in mesh.rectangles.iter().enumerate() {
            let [p1, p2, p3, p4] = r.indices;
            let _ = writeln!(
                out,
                "{:>4} {:>4} {:>4} {:>4} {:>4} {:>12}",
                index, p1, p2, p3, p4, r.material
            );
        }
        out
    }

    /// Point table with a boundary label column
    pub fn render_selection(points: &[Point3], kinds: &[PointKind]) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:>4} {:>6} {:>6} {:>6} {}",
            "ID", "X", "Y", "Z", "Kind"
        );
        for (index, (p, kind)) in points.iter().zip(kinds).enumerate() {
            let _ = writeln!(
                out,
                "{:>4} {:>6} {:>6} {:>6} {}",
                index, p.x, p.y, p.z, kind
            );
        }
        out
    }

    /// Print both tables of a mesh
    pub fn print_mesh(mesh: &Mesh) {
        println!("{}", "Points".bold());
        print!("{}", Self::render_points(&mesh.points));
        println!("{}", "Rectangles".bold());
        print!("{}", Self::render_rectangles(mesh));
    }

    /// Print the point table with labels
    pub fn print_selection(points: &[Point3], kinds: &[PointKind]) {
        println!("{}", "Boundary".bold());
        print!("{}", Self::render_selection(points, kinds));
    }

    /// Report a generated mesh
    pub fn report_summary(model: &str, mesh: &Mesh, duration: Duration) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "Model:".bold(), model.cyan());
        println!("{}", "━".repeat(80).bright_black());
        println!(
            "  {} {}",
            "Points:".bright_black(),
            mesh.point_count().to_string().cyan()
        );
        println!(
            "  {} {}",
            "Rectangles:".bright_black(),
            mesh.rectangle_count().to_string().cyan()
        );
        println!(
            "  {} {}",
            "Materials:".bright_black(),
            mesh.materials().join(", ")
        );
        let size = mesh.bounding_box().size();
        println!(
            "  {} {} x {} x {}",
            "Extent:".bright_black(),
            size.x,
            size.y,
            size.z
        );
        println!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("\n{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::select;
    use crate::model::Model;

    #[test]
    fn test_render_tables() {
        let mesh = Model::new(1800, 1200, "base").unwrap().generate(0);

        let points = Reporter::render_points(&mesh.points);
        let lines: Vec<&str> = points.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "  ID      X      Y      Z");
        assert_eq!(lines[3], "   2   1800   1200      0");

        let rectangles = Reporter::render_rectangles(&mesh);
        assert_eq!(
            rectangles.lines().nth(1),
            Some("   0    0    1    2    3         base")
        );
    }

    #[test]
    fn test_render_selection() {
        let mesh = Model::new(1800, 1200, "base").unwrap().generate(0);
        let kinds = select(&mesh.points);
        let text = Reporter::render_selection(&mesh.points, &kinds);

        assert!(text.lines().nth(1).unwrap().ends_with("BottomLeft"));
        assert!(text.lines().nth(3).unwrap().ends_with("TopRight"));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(
            Reporter::format_duration(Duration::from_micros(500)),
            "500µs"
        );
        assert_eq!(
            Reporter::format_duration(Duration::from_millis(5)),
            "5.00ms"
        );
        assert_eq!(Reporter::format_duration(Duration::from_secs(2)), "2.00s");
    }
}
