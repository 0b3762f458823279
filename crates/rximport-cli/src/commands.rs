//! Subcommand implementations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{debug, info};

use rximport_ingest::read_csv_table;
use rximport_map::{auto_map_headers, nearest_fields};
use rximport_model::{ImportConfig, MatchSource, TargetField};
use rximport_parse::{is_compound_line, parse_compound_product_line};

use crate::cli::{MapArgs, ParseArgs};
use crate::summary::{apply_table_style, header_cell, right_cell};

pub fn run_map(args: &MapArgs) -> Result<()> {
    let table = read_csv_table(&args.file)?;
    if table.headers.is_empty() {
        bail!("no header row found in {}", args.file.display());
    }
    debug!(
        columns = table.headers.len(),
        rows = table.rows.len(),
        "mapping dataset"
    );

    let result = auto_map_headers(&table.headers, &TargetField::ALL, &table.rows);

    let mut report = Table::new();
    report.set_header(vec![
        header_cell("Column"),
        header_cell("Field"),
        header_cell("Confidence"),
        header_cell("Matched by"),
    ]);
    apply_table_style(&mut report);
    for column in &result.columns {
        match &column.field_match {
            Some(found) => {
                let source = match found.source {
                    MatchSource::Synonym => "synonym",
                    MatchSource::ValuePattern => "values",
                };
                report.add_row(vec![
                    comfy_table::Cell::new(&column.header),
                    comfy_table::Cell::new(found.field.as_str()),
                    right_cell(&format!("{:.0}%", found.confidence * 100.0)),
                    comfy_table::Cell::new(source),
                ]);
            }
            None => {
                report.add_row(vec![
                    comfy_table::Cell::new(&column.header),
                    comfy_table::Cell::new("-"),
                    right_cell("-"),
                    comfy_table::Cell::new("unmapped"),
                ]);
            }
        }
    }
    println!("{report}");

    let unmapped = result.unmapped_headers();
    if !unmapped.is_empty() {
        println!("Unmapped columns ({}):", unmapped.len());
        for header in &unmapped {
            let hints = nearest_fields(header, args.hints);
            if hints.is_empty() {
                println!("  {header}");
            } else {
                let suggestions: Vec<String> = hints
                    .iter()
                    .map(|hint| format!("{} ({:.0}%)", hint.field, hint.score * 100.0))
                    .collect();
                println!("  {header} (closest fields: {})", suggestions.join(", "));
            }
        }
    }

    info!(
        mapped = result.mapped_count(),
        unmapped = unmapped.len(),
        "mapping complete"
    );

    if let Some(path) = &args.json {
        let source = args.file.display().to_string();
        write_config(path, &ImportConfig::from_result(&source, &result))?;
        println!("Import config written to {}", path.display());
    }
    Ok(())
}

fn write_config(path: &Path, config: &ImportConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config).context("serialize import config")?;
    fs::write(path, json).with_context(|| format!("write config: {}", path.display()))
}

pub fn run_parse(args: &ParseArgs) -> Result<()> {
    let lines: Vec<String> = match (&args.line, &args.file) {
        (Some(line), None) => vec![line.clone()],
        (None, Some(path)) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("read lines: {}", path.display()))?;
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()
        }
        _ => bail!("provide a product line or --file"),
    };

    let mut report = Table::new();
    report.set_header(vec![
        header_cell("Name"),
        header_cell("Qty"),
        header_cell("Price"),
        header_cell("Expiry"),
        header_cell("Batch"),
        header_cell("Category"),
    ]);
    apply_table_style(&mut report);
    for line in &lines {
        let parsed = if is_compound_line(line) {
            parse_compound_product_line(line)
        } else {
            rximport_model::ParsedProductLine::name_only(line.trim())
        };
        report.add_row(vec![
            comfy_table::Cell::new(&parsed.name),
            right_cell(&parsed.quantity.map(|q| q.to_string()).unwrap_or_default()),
            right_cell(&parsed.price.map(|p| format!("{p:.2}")).unwrap_or_default()),
            comfy_table::Cell::new(parsed.expiry.as_deref().unwrap_or_default()),
            comfy_table::Cell::new(parsed.batch_number.as_deref().unwrap_or_default()),
            comfy_table::Cell::new(
                parsed.category.map(|c| c.to_string()).unwrap_or_default(),
            ),
        ]);
    }
    println!("{report}");
    Ok(())
}

pub fn run_fields() -> Result<()> {
    let mut report = Table::new();
    report.set_header(vec![header_cell("Field"), header_cell("Synonyms")]);
    apply_table_style(&mut report);
    for field in TargetField::ALL {
        report.add_row(vec![
            comfy_table::Cell::new(field.as_str()),
            comfy_table::Cell::new(field.synonyms().join(", ")),
        ]);
    }
    println!("{report}");
    Ok(())
}
