// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - model descriptions in, meshes out

mod export_json;
mod export_msh;
mod export_stl;
mod exporter;
mod importer;

pub use export_json::{export as export_json, to_json_string};
pub use export_msh::{export as export_msh, write_msh};
pub use export_stl::export as export_stl;
pub use exporter::{export, ExportFormat};
pub use importer::{import_model_file, Member, ModelDescription};
