// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Orthomesh CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use orthomesh::cli::Reporter;
use orthomesh::{io, select, ExportFormat, MeshConfig, ModelDescription};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "orthomesh")]
#[command(about = "Orthomesh - rectilinear plate and stiffener quad mesher", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ./orthomesh.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a model description and export its mesh
    Generate {
        /// Model description (.toml or .json)
        model: String,

        /// Output file
        #[arg(short, long)]
        output: Option<String>,

        /// Output format (msh, stl, json)
        #[arg(short, long)]
        format: Option<String>,

        /// Subdivide plates longer than this span; 0 disables
        #[arg(long)]
        max_span: Option<u64>,
    },

    /// Print the point and rectangle tables of a model's mesh
    Report {
        /// Model description (.toml or .json)
        model: String,

        /// Subdivide plates longer than this span; 0 disables
        #[arg(long)]
        max_span: Option<u64>,

        /// Also label every point by its position on the base plate outline
        #[arg(long)]
        select: bool,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => MeshConfig::from_file(path)?
            .with_env_overrides(|key| std::env::var(key).ok())?,
        None => MeshConfig::load()?,
    };
    config.verbose |= cli.verbose;

    let default_filter = if config.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match &cli.command {
        Commands::Generate {
            model,
            output,
            format,
            max_span,
        } => {
            generate_command(&config, model, output.as_deref(), format.as_deref(), *max_span)?;
        }
        Commands::Report {
            model,
            max_span,
            select,
        } => {
            report_command(&config, model, *max_span, *select)?;
        }
        Commands::Version => {
            println!("Orthomesh v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn load_description(path: &str) -> Result<ModelDescription> {
    if !Path::new(path).exists() {
        Reporter::report_error(&format!("Model file not found: {}", path));
        std::process::exit(1);
    }
    io::import_model_file(path)
}

fn generate_command(
    config: &MeshConfig,
    model_path: &str,
    output: Option<&str>,
    format: Option<&str>,
    max_span: Option<u64>,
) -> Result<()> {
    let description = load_description(model_path)?;
    let model = description
        .build()
        .with_context(|| format!("Invalid model: {}", model_path))?;
    let span = max_span.or(description.max_span).unwrap_or(config.max_span);

    let format = match format {
        Some(name) => name.parse::<ExportFormat>()?,
        None => output
            .and_then(ExportFormat::from_path)
            .unwrap_or(config.format),
    };

    let output = match output {
        Some(path) => PathBuf::from(path),
        None => {
            let stem = Path::new(model_path)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "mesh".to_string());
            PathBuf::from(format!("{}.{}", stem, format))
        }
    };
    let output = config.output_path(output);

    if config.verbose {
        Reporter::report_info(&format!("Generating {} (max span {})", model_path, span));
    }

    let start = Instant::now();
    let mesh = model.generate(span);
    let duration = start.elapsed();

    io::export(&mesh, &output.to_string_lossy(), format)?;

    if config.verbose {
        Reporter::report_summary(model_path, &mesh, duration);
    }
    Reporter::success(&format!(
        "Generated {} -> {} ({} points, {} rectangles)",
        model_path,
        output.display(),
        mesh.point_count(),
        mesh.rectangle_count()
    ));

    Ok(())
}

fn report_command(
    config: &MeshConfig,
    model_path: &str,
    max_span: Option<u64>,
    with_selection: bool,
) -> Result<()> {
    let description = load_description(model_path)?;
    let model = description
        .build()
        .with_context(|| format!("Invalid model: {}", model_path))?;
    let span = max_span.or(description.max_span).unwrap_or(config.max_span);

    let start = Instant::now();
    let mesh = model.generate(span);
    let duration = start.elapsed();

    Reporter::print_mesh(&mesh);
    if with_selection {
        let kinds = select(&mesh.points);
        Reporter::print_selection(&mesh.points, &kinds);
    }
    if config.verbose {
        Reporter::report_summary(model_path, &mesh, duration);
    }

    Ok(())
}
