// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh generation configuration

use crate::io::ExportFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "orthomesh.toml";

/// Mesh generation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    /// Largest plate span after subdivision; 0 disables subdivision
    pub max_span: u64,
    /// Output format when none is given and the output path has no known extension
    pub format: ExportFormat,
    /// Directory for outputs given without a path
    pub output_dir: PathBuf,
    /// Verbose output
    pub verbose: bool,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            max_span: 0,
            format: ExportFormat::Msh,
            output_dir: PathBuf::from("."),
            verbose: false,
        }
    }
}

impl MeshConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: MeshConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `orthomesh.toml` if present, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config = if Path::new(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `ORTHOMESH_*` overrides read through `var`
    pub fn with_env_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(max_span) = var("ORTHOMESH_MAX_SPAN") {
            self.max_span = max_span
                .trim()
                .parse()
                .with_context(|| format!("Invalid ORTHOMESH_MAX_SPAN: {}", max_span))?;
        }

        if let Some(format) = var("ORTHOMESH_FORMAT") {
            self.format = format.parse()?;
        }

        if let Some(output_dir) = var("ORTHOMESH_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(output_dir);
        }

        if let Some(verbose) = var("ORTHOMESH_VERBOSE") {
            self.verbose = verbose.parse().unwrap_or(false);
        }

        Ok(self)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Resolve an output path: relative paths land in `output_dir`
    pub fn output_path(&self, output: impl AsRef<Path>) -> PathBuf {
        let output = output.as_ref();
        if output.is_absolute() || output.parent().map_or(false, |p| !p.as_os_str().is_empty()) {
            output.to_path_buf()
        } else {
            self.output_dir.join(output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_file_uses_defaults() -> Result<()> {
        let config: MeshConfig = toml::from_str("max_span = 250\nformat = \"stl\"")?;
        assert_eq!(config.max_span, 250);
        assert_eq!(config.format, ExportFormat::Stl);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(!config.verbose);
        Ok(())
    }

    #[test]
    fn test_env_overrides() -> Result<()> {
        let config = MeshConfig::default().with_env_overrides(|key| match key {
            "ORTHOMESH_MAX_SPAN" => Some("500".into()),
            "ORTHOMESH_FORMAT" => Some("json".into()),
            "ORTHOMESH_VERBOSE" => Some("true".into()),
            _ => None,
        })?;
        assert_eq!(config.max_span, 500);
        assert_eq!(config.format, ExportFormat::Json);
        assert!(config.verbose);

        let bad = MeshConfig::default().with_env_overrides(|key| {
            (key == "ORTHOMESH_MAX_SPAN").then(|| "lots".to_string())
        });
        assert!(bad.is_err());
        Ok(())
    }

    #[test]
    fn test_save_and_reload() -> Result<()> {
        let file = NamedTempFile::with_suffix(".toml")?;
        let config = MeshConfig {
            max_span: 1000,
            format: ExportFormat::Stl,
            output_dir: PathBuf::from("out"),
            verbose: true,
        };
        config.save(file.path())?;
        assert_eq!(MeshConfig::from_file(file.path())?, config);
        Ok(())
    }

    #[test]
    fn test_output_path() {
        let config = MeshConfig {
            output_dir: PathBuf::from("out"),
            ..MeshConfig::default()
        };
        assert_eq!(config.output_path("mesh.msh"), PathBuf::from("out/mesh.msh"));
        assert_eq!(config.output_path("dir/mesh.msh"), PathBuf::from("dir/mesh.msh"));
    }
}
