//! Interactive column and chart selection

use super::Console;
use crate::charts::ChartKind;
use crate::error::SheetflowResult;
use crate::table::Table;

/// Split a comma-separated answer into trimmed, non-empty names
pub fn parse_column_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse chart codes, returning recognised kinds and the rejected tokens
pub fn parse_chart_codes(raw: &str) -> (Vec<ChartKind>, Vec<String>) {
    let mut kinds = Vec::new();
    let mut rejected = Vec::new();

    for token in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match token.parse::<u8>().ok().and_then(ChartKind::from_code) {
            Some(kind) if !kinds.contains(&kind) => kinds.push(kind),
            Some(_) => {}
            None => rejected.push(token.to_string()),
        }
    }

    (kinds, rejected)
}

/// Prompt until every entered column exists in `table`
pub fn choose_columns(table: &Table, console: &dyn Console) -> SheetflowResult<Vec<String>> {
    loop {
        console.echo("Available columns:");
        console.echo(&format!("{:?}", table.column_names()));
        let raw = console.input("Enter the columns to analyze, separated by commas")?;
        let columns = parse_column_list(&raw);

        if columns.is_empty() {
            console.warn("No columns entered. Please try again.");
            continue;
        }

        let invalid: Vec<&str> = columns
            .iter()
            .map(String::as_str)
            .filter(|c| !table.has_column(c))
            .collect();
        if invalid.is_empty() {
            tracing::info!("Columns selected for charts: {:?}", columns);
            return Ok(columns);
        }

        console.warn(&format!("Invalid columns: {invalid:?}. Please try again."));
    }
}

/// Show the chart menu and read the requested kinds once
pub fn choose_charts(console: &dyn Console) -> SheetflowResult<Vec<ChartKind>> {
    console.echo("Available charts:");
    for kind in ChartKind::ALL {
        console.echo(&format!("{}. {}", kind.code(), kind.label()));
    }

    let raw = console.input("Enter the numbers of the charts to generate, separated by commas")?;
    let (kinds, rejected) = parse_chart_codes(&raw);
    if !rejected.is_empty() {
        tracing::warn!("Ignoring unknown chart codes: {:?}", rejected);
        console.warn(&format!("Ignoring unknown chart codes: {rejected:?}"));
    }
    Ok(kinds)
}
