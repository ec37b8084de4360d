// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{bail, Result};

use crate::{
    archive,
    config::options::{ExportFormat, ExportOptions, ExtractOptions},
    core::net::XnatClient,
    file,
    progress::PrintProgress,
    scrape,
};

/// Build a complete PET/CT study sheet for one XNAT project.
#[derive(Debug, Parser)]
#[command(name = "study-sheet", version)]
pub struct SheetArgs {
    /// XNAT server URL (e.g. https://example.xnat.com)
    #[arg(long)]
    pub url: String,

    /// XNAT username
    #[arg(long)]
    pub username: String,

    /// XNAT password
    #[arg(long, env = "XNAT_PASS", hide_env_values = true)]
    pub password: String,

    /// XNAT project ID
    #[arg(long)]
    pub project: String,

    /// Output file
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Only include experiments whose label contains this text
    #[arg(long)]
    pub filter: Option<String>,

    /// Only include experiments whose label contains "split"
    #[arg(long)]
    pub split_only: bool,

    /// Output format: csv or tsv
    #[arg(long, default_value = "csv")]
    pub format: ExportFormat,
}

/// Check whether cached transfer stats match what landed in the archive.
#[derive(Debug, Parser)]
#[command(name = "archive-check", version)]
pub struct ArchiveArgs {
    /// The folder holding per-project source_stats.json caches
    #[arg(long = "cache", alias = "cf")]
    pub cache: PathBuf,

    /// The archive root folder
    #[arg(long = "archive", alias = "a")]
    pub archive: PathBuf,

    /// Only check this project
    #[arg(long = "project", alias = "p")]
    pub project: Option<String>,
}

pub fn run_sheet() -> Result<()> {
    run_sheet_with(SheetArgs::parse())
}

pub fn run_sheet_with(args: SheetArgs) -> Result<()> {
    let client = XnatClient::new(&args.url, &args.username, &args.password)?;
    let opts = ExtractOptions::new(args.filter, args.split_only);

    let mut export = ExportOptions::default();
    export.format = args.format;
    export.set_path(&args.output.to_string_lossy());

    println!("Starting extraction for project: {}", args.project);
    println!("{}", "-".repeat(60));

    let mut progress = PrintProgress::new();
    let summary = match scrape::collect_study_sheet(&client, &args.project, &opts, Some(&mut progress)) {
        Ok(s) => s,
        Err(e) => bail!("could not list experiments for {}: {e}", args.project),
    };

    println!("{}", "-".repeat(60));
    if summary.experiments == 0 {
        println!("No experiments found. Exiting.");
        return Ok(());
    }
    if summary.is_empty() {
        println!("No PET/CT scan data found in project");
        return Ok(());
    }

    let path = file::write_export(&export, &summary.rows)?;
    println!("Successfully extracted {} PET/CT scans", summary.rows.len());
    println!("Data written to: {}", path.display());
    Ok(())
}

pub fn run_archive() -> Result<()> {
    run_archive_with(ArchiveArgs::parse())
}

pub fn run_archive_with(args: ArchiveArgs) -> Result<()> {
    if let Some(project) = &args.project {
        match archive::validate_one(&args.cache, &args.archive, project) {
            Some(status) => println!("{status}"),
            None => logf!("Archive: {project} is not a project folder in {}", args.cache.display()),
        }
        return Ok(());
    }

    let report = archive::validate_all(&args.cache, &args.archive)?;
    for (project, _) in &report.checked {
        println!("{project}");
    }
    print!("\n{report}");
    Ok(())
}
