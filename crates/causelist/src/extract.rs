use crate::prelude::{eprintln, println, *};
use causelist_core::causelist::{extract_cases, summarize_by_court, CaseRecord, CourtSummary};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

#[derive(Debug, clap::Args, Clone)]
pub struct ExtractOptions {
    /// Causelist HTML files to read
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Include a per-court summary
    #[arg(long)]
    pub summary: bool,
}

#[derive(Debug, serde::Serialize)]
struct ExtractOutput<'a> {
    data: &'a [CaseRecord],
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<Vec<CourtSummary>>,
}

pub async fn run(options: ExtractOptions, global: crate::Global) -> Result<()> {
    let progress = progress_bar(options.files.len());
    let mut records = Vec::new();

    for file in &options.files {
        progress.set_message(file.display().to_string());
        let extracted = extract_file(file).await?;

        log::info!("{}: extracted {} cases", file.display(), extracted.len());
        if global.verbose {
            progress.suspend(|| {
                eprintln!("{}: {} cases", file.display(), extracted.len());
            });
        }

        records.extend(extracted);
        progress.inc(1);
    }

    progress.finish_and_clear();

    let summary = options.summary.then(|| summarize_by_court(&records));

    if options.json {
        let output = ExtractOutput {
            data: &records,
            summary,
        };
        if output.summary.is_some() {
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", serde_json::to_string_pretty(output.data)?);
        }
    } else {
        output_formatted(&records, summary.as_deref());
    }

    Ok(())
}

/// Read one causelist from disk and run the extractor on the blocking pool.
pub async fn extract_file(path: &Path) -> Result<Vec<CaseRecord>> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| f!("Failed to read {}", path.display()))?;
    let html = String::from_utf8_lossy(&bytes).into_owned();

    tokio::task::spawn_blocking(move || extract_cases(&html))
        .await
        .with_context(|| f!("Extraction failed for {}", path.display()))
}

fn progress_bar(len: usize) -> ProgressBar {
    if len < 2 || !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) =
        ProgressStyle::default_bar().template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb
}

fn output_formatted(records: &[CaseRecord], summary: Option<&[CourtSummary]>) {
    println!("Found {} case(s):\n", records.len());

    if records.is_empty() {
        println!("{}", "No case data found.".yellow());
        return;
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["Court", "Item", "Case No", "Title", "Stage"]);
    for record in records {
        table.add_row(prettytable::row![
            &record.court_no,
            &record.item_no,
            &record.case_no,
            &record.case_title,
            &record.stage
        ]);
    }
    table.printstd();

    if let Some(summary) = summary {
        println!("\n{}", "SUMMARY BY COURT".bright_yellow().bold());

        let mut table = new_table();
        table.add_row(prettytable::row!["Court", "Cases", "Stages"]);
        for court in summary {
            table.add_row(prettytable::row![
                &court.court_no,
                court.count,
                court.stages.join(", ")
            ]);
        }
        table.printstd();
    }
}
