// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Model description files (TOML or JSON)

use crate::error::OrthoResult;
use crate::model::{Model, Orientation};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Declarative model: a footprint plus construction steps replayed in order.
///
/// ```toml
/// width = 1800
/// height = 1200
/// material = "base"
///
/// [[members]]
/// kind = "stiffener"
/// height = 100
/// material = "horizontal"
/// offset = 600
/// orientation = "x"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescription {
    pub width: u64,
    pub height: u64,
    #[serde(default = "default_material")]
    pub material: String,
    /// Subdivision span to use when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_span: Option<u64>,
    #[serde(default)]
    pub members: Vec<Member>,
}

/// One construction step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Member {
    /// See [`Model::add`]
    Stiffener {
        height: u64,
        material: String,
        offset: u64,
        orientation: Orientation,
    },
    /// See [`Model::add_plate_on_z`]
    Cap {
        width: u64,
        z: u64,
        material: String,
        offset: u64,
        orientation: Orientation,
    },
}

fn default_material() -> String {
    "base".to_string()
}

impl ModelDescription {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse TOML model description")
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        serde_json::from_str(source).context("Failed to parse JSON model description")
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize model description")
    }

    /// Replay the description into a fresh model
    pub fn build(&self) -> OrthoResult<Model> {
        let mut model = Model::new(self.width, self.height, self.material.as_str())?;
        for member in &self.members {
            match member {
                Member::Stiffener {
                    height,
                    material,
                    offset,
                    orientation,
                } => model.add(*height, material.as_str(), *offset, *orientation)?,
                Member::Cap {
                    width,
                    z,
                    material,
                    offset,
                    orientation,
                } => model.add_plate_on_z(*width, *z, material.as_str(), *offset, *orientation)?,
            }
        }
        Ok(model)
    }
}

/// Read a model description; `.json` files are parsed as JSON, anything
/// else as TOML.
pub fn import_model_file(path: &str) -> Result<ModelDescription> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read model file: {}", path))?;

    let is_json = Path::new(path)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let description = if is_json {
        ModelDescription::from_json_str(&source)
    } else {
        ModelDescription::from_toml_str(&source)
    };
    description.with_context(|| format!("Invalid model file: {}", path))
}
