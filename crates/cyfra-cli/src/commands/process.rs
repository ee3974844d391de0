//! Process command - extract fields from a single complaint PDF.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use cyfra_core::models::config::ReportConfig;
use cyfra_core::{ComplaintAnalyzer, ExtractionResult, ReportBuilder, ReportFormat};

use super::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input complaint PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Print the extracted document text before the record
    #[arg(long)]
    show_text: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON object in field order
    Json,
    /// CSV with a header row
    Csv,
    /// One "Field: value" line per field
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    if extension != "pdf" {
        anyhow::bail!("Unsupported file format: {}", extension);
    }

    info!("Processing file: {}", args.input.display());

    let analyzer = ComplaintAnalyzer::from_config(&config)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?);

    pb.set_message("Loading PDF...");
    let data = fs::read(&args.input)?;

    pb.set_message("Extracting text...");
    let text = analyzer.extract_text(&data)?;

    pb.set_message("Extracting fields...");
    let result = analyzer.parse_text(&text);

    pb.finish_and_clear();

    if args.show_text {
        println!("{}", style("Extracted text:").bold());
        println!("{}", text.trim());
        println!();
    }

    if text.trim().is_empty() {
        eprintln!(
            "{} No text could be extracted; the PDF may be scanned",
            style("⚠").yellow()
        );
    }

    for warning in &result.warnings {
        debug!("{}", warning);
    }

    let output = format_result(&result, &analyzer, &config.report, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!(
        "Total processing time: {:?} (parsing {}ms)",
        start.elapsed(),
        result.processing_time_ms
    );

    Ok(())
}

fn format_result(
    result: &ExtractionResult,
    analyzer: &ComplaintAnalyzer,
    report: &ReportConfig,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&result.record)?),
        OutputFormat::Csv => {
            let builder = ReportBuilder::with_config(analyzer.schema(), report);
            Ok(builder.render(std::slice::from_ref(&result.record), ReportFormat::Csv)?)
        }
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_text(result: &ExtractionResult) -> String {
    let width = result
        .record
        .fields()
        .map(|f| f.chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for (field, value) in result.record.iter() {
        output.push_str(&format!("{:<width$}  {}\n", format!("{}:", field), value, width = width + 1));
    }

    if !result.warnings.is_empty() {
        output.push('\n');
        output.push_str(&format!("{} of {} fields missing\n", result.warnings.len(), result.record.len()));
    }

    output
}
