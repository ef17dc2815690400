//! Preview command handler

use anyhow::{Context, Result};
use colored::*;

use super::PreviewCommands;
use crate::config::ImportConfig;
use crate::transfer::{FacadeLog, SourceRecord, TargetDraft, TransformOutcome};

/// Running totals printed after the drafts
#[derive(Debug, Default)]
struct PreviewStats {
    records: usize,
    applied: usize,
    skipped: usize,
    malformed: usize,
    failed: usize,
}

impl PreviewStats {
    fn add(&mut self, outcome: &TransformOutcome) {
        self.records += 1;
        self.applied += outcome.report.mapping.applied_count();
        self.skipped += outcome.report.mapping.skipped_count();
        self.malformed += outcome.report.mapping.malformed.len();
    }
}

/// Read a CSV export, run every row through the transform unit and print
/// each draft as a JSON line. Nothing is persisted.
pub fn handle_preview_command(args: PreviewCommands) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    if !args.input.exists() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }

    let mut config = ImportConfig::load_or_default(args.config.as_deref())?;
    if args.suppress_automation {
        config.governance.suppress_automation = true;
    }

    let ctx = config.mapping_context();
    let unit = config.transform_unit();

    let mut reader = csv::Reader::from_path(&args.input)
        .with_context(|| format!("Failed to open CSV file: {}", args.input.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read CSV header: {}", args.input.display()))?
        .clone();

    for rule in &ctx.rules {
        if !headers.iter().any(|h| h == rule.source_field) {
            log::warn!(
                "Column '{}' not in {}, rule {} will never apply",
                rule.source_field,
                args.input.display(),
                rule
            );
        }
    }

    let mut stats = PreviewStats::default();
    let limit = args.limit.unwrap_or(usize::MAX);

    for (index, row) in reader.records().take(limit).enumerate() {
        // Header is line 1
        let line = index + 2;
        let row = row.with_context(|| format!("Failed to read CSV line {}", line))?;
        let source = SourceRecord::from_csv_row(&headers, &row);

        match unit.transform(&source, &ctx, &FacadeLog, TargetDraft::new()) {
            Ok(outcome) => {
                let json = outcome.draft.to_json();
                let text = if args.pretty {
                    serde_json::to_string_pretty(&json)?
                } else {
                    serde_json::to_string(&json)?
                };
                println!("{}", text);
                stats.add(&outcome);
            }
            Err(e) => {
                eprintln!("{} line {}: {}", "Error".red().bold(), line, e);
                stats.records += 1;
                stats.failed += 1;
            }
        }
    }

    eprintln!();
    eprintln!(
        "{} {} record(s): {} field(s) mapped, {} skipped",
        "Previewed".green().bold(),
        stats.records,
        stats.applied.to_string().cyan(),
        stats.skipped.to_string().dimmed()
    );
    if config.governance.suppress_automation {
        eprintln!("{}", "Automation suppressed for all drafts".yellow());
    }
    if stats.malformed > 0 {
        eprintln!(
            "{} {} timestamp(s) did not match '{}' and were copied unchanged",
            "Warning:".yellow().bold(),
            stats.malformed,
            config.validation.date_format
        );
    }
    if stats.failed > 0 {
        anyhow::bail!("{} record(s) failed to transform", stats.failed);
    }

    Ok(())
}
