//! LaunchGrid CLI — validate and inspect campaign blueprint files.

use anyhow::Context;
use clap::{Parser, Subcommand};
use launchgrid_blueprint::{codec, validation, LaunchBlueprint};
use launchgrid_catalog::resolve_placements;
use launchgrid_core::config::AppConfig;
use launchgrid_matrix::{budget, calculator};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "launchgrid")]
#[command(about = "Bulk campaign matrix and blueprint toolkit")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a blueprint file and print the full report
    Validate {
        /// Path to a blueprint JSON file
        file: PathBuf,
    },
    /// Show matrix counts and budget distribution for a blueprint
    Inspect {
        /// Path to a blueprint JSON file
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "launchgrid=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    match cli.command {
        Command::Validate { file } => validate(&file, &config),
        Command::Inspect { file } => inspect(&file),
    }
}

fn read_blueprint(file: &PathBuf) -> anyhow::Result<LaunchBlueprint> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let doc = codec::import(&json).context("parsing blueprint")?;
    Ok(doc)
}

fn validate(file: &PathBuf, config: &AppConfig) -> anyhow::Result<()> {
    let doc = read_blueprint(file)?;
    let report = validation::validate_blueprint(&doc, &config.validation);

    println!("version: {}", report.version);
    for issue in &report.errors {
        println!("error   [{}] {}", issue.path, issue.message);
    }
    for issue in &report.warnings {
        println!("warning [{}] {}", issue.path, issue.message);
    }
    for migration in &report.migrations {
        println!("migrate: {migration}");
    }

    if report.is_valid {
        info!("blueprint is valid");
        Ok(())
    } else {
        anyhow::bail!(
            "blueprint failed validation with {} error(s)",
            report.errors.len()
        );
    }
}

fn inspect(file: &PathBuf) -> anyhow::Result<()> {
    let doc = read_blueprint(file)?;
    let partial = codec::restore(&doc);

    if let Some(meta) = &doc.metadata {
        println!("name: {}", meta.name);
        println!("file: {}", codec::suggested_filename(&meta.name));
    }

    let audiences = partial
        .audiences
        .as_ref()
        .map(|a| a.iter().filter(|e| e.enabled).count())
        .unwrap_or(0);
    let placements = partial.placements.clone().unwrap_or_default();
    let creatives = partial.creative_shells.len();
    let copy_variants = partial.copy_variants.as_ref().map_or(0, Vec::len);

    let counts = calculator::expand(
        calculator::MatrixInput {
            audiences: audiences as u32,
            placements: placements.len() as u32,
            creatives: creatives as u32,
            copy_variants: copy_variants as u32,
        },
        partial.dimensions.unwrap_or_default(),
    );

    println!(
        "matrix: {} audiences x {} placements -> {} ad sets, {} ads{}",
        audiences,
        placements.len(),
        counts.ad_sets,
        counts.total_ads,
        if counts.soft_limit_exceeded {
            " (soft limit exceeded)"
        } else {
            ""
        }
    );

    for preset in &placements {
        println!(
            "placement {:?}: {}",
            preset,
            resolve_placements(*preset).join(", ")
        );
    }

    if let Some(campaign) = &partial.campaign {
        if let (Some(total), Some(blocks)) = (campaign.total_budget, &partial.budget_blocks) {
            let dist = budget::distribute(total, blocks);
            for alloc in &dist.allocations {
                println!(
                    "budget {:?} '{}': {:.2} ({:.1}%)",
                    alloc.stage, alloc.label, alloc.amount, alloc.percentage
                );
            }
            if dist.over_allocated {
                println!("budget over-allocated by {:.1}%", -dist.remainder_percent);
            } else if dist.remainder_percent > 0.0 {
                println!("budget unallocated: {:.1}%", dist.remainder_percent);
            }
        }
    }

    let reattach: Vec<&str> = partial
        .creative_shells
        .iter()
        .filter(|s| s.needs_reattach)
        .map(|s| s.name.as_str())
        .collect();
    if !reattach.is_empty() {
        println!("creatives needing file re-attach: {}", reattach.join(", "));
    }

    Ok(())
}
