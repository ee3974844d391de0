//! Batch command - consolidated report over many complaint PDFs.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use futures_util::stream::{self, StreamExt};
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use cyfra_core::{BatchOutcome, ComplaintAnalyzer, ExtractionResult, ReportBuilder, ReportFormat};

use super::load_config;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern matching the complaint PDFs
    #[arg(required = true)]
    input: String,

    /// Report file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ReportKind,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ReportKind {
    /// CSV with a header row
    Csv,
    /// JSON array of objects
    Json,
    /// Aligned text table
    Table,
}

impl From<ReportKind> for ReportFormat {
    fn from(kind: ReportKind) -> Self {
        match kind {
            ReportKind::Csv => ReportFormat::Csv,
            ReportKind::Json => ReportFormat::Json,
            ReportKind::Table => ReportFormat::Table,
        }
    }
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let analyzer = Arc::new(ComplaintAnalyzer::from_config(&config)?);

    let files = find_pdfs(&args.input)?;
    if files.is_empty() {
        anyhow::bail!("No matching PDF files found for pattern: {}", args.input);
    }

    eprintln!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let jobs = args.jobs.max(1);
    let results: Vec<(String, anyhow::Result<ExtractionResult>)> = stream::iter(files)
        .map(|path| {
            let analyzer = Arc::clone(&analyzer);
            let pb = pb.clone();
            async move {
                let name = display_name(&path);
                let result = tokio::task::spawn_blocking(move || analyze_file(&analyzer, &path))
                    .await
                    .unwrap_or_else(|e| Err(anyhow::anyhow!("worker failed: {}", e)));
                pb.inc(1);
                (name, result)
            }
        })
        .buffered(jobs)
        .collect()
        .await;

    pb.finish_and_clear();

    let mut outcome = BatchOutcome::new();
    for (name, result) in results {
        outcome.push(name, result);
    }

    if !outcome.failures.is_empty() {
        eprintln!("{}", style("Failed files:").red());
        for failure in &outcome.failures {
            eprintln!("  - {}: {}", failure.name, failure.error);
        }
    }

    if outcome.is_empty() {
        anyhow::bail!("No valid PDFs were processed");
    }

    let builder = ReportBuilder::with_config(analyzer.schema(), &config.report);
    let report = builder.render(&outcome.records(), args.format.into())?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &report)?;
        eprintln!(
            "{} Report written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        print!("{}", report);
    }

    eprintln!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        outcome.total(),
        start.elapsed()
    );
    eprintln!(
        "   {} successful, {} failed",
        style(outcome.documents.len()).green(),
        style(outcome.failures.len()).red()
    );

    Ok(())
}

/// Files matching the pattern with a `.pdf` extension, in glob order.
fn find_pdfs(pattern: &str) -> anyhow::Result<Vec<PathBuf>> {
    let files = glob(pattern)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.is_file()
                && p
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
        })
        .collect();
    Ok(files)
}

fn analyze_file(analyzer: &ComplaintAnalyzer, path: &Path) -> anyhow::Result<ExtractionResult> {
    let result = analyzer.analyze_file(path)?;
    debug!(
        "{}: {} fields missing",
        path.display(),
        result.warnings.len()
    );
    Ok(result)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
