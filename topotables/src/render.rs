//! Terminal summary rendering using outstanding

use outstanding::Theme;
use serde::Serialize;
use topotableslib::GenerateResult;

/// Include template at compile time
const SUMMARY_TEMPLATE: &str = include_str!("../templates/summary.jinja");

/// One generated table
#[derive(Debug, Serialize)]
struct SummaryRow {
    /// "wrote" or "built" (dry-run)
    status: &'static str,
    /// Path relative to the output root
    path: String,
    rows: usize,
}

/// Data context for the summary template
#[derive(Debug, Serialize)]
struct SummaryContext {
    tables: Vec<SummaryRow>,
    summary: String,
}

/// The summary is plain text, no styles registered
fn create_theme() -> Theme {
    Theme::new()
}

fn build_context(result: &GenerateResult, dry_run: bool) -> SummaryContext {
    let status = if dry_run { "built" } else { "wrote" };
    let tables = result
        .tables
        .iter()
        .map(|t| SummaryRow {
            status,
            path: t.filename.clone(),
            rows: t.rows.len(),
        })
        .collect();

    let summary = if dry_run {
        format!("{} tables built (dry-run, nothing written)", result.tables.len())
    } else {
        format!(
            "{} tables written to {}",
            result.written.len(),
            result.root.display()
        )
    };

    SummaryContext { tables, summary }
}

/// Render the run summary shown after generation.
pub fn render_summary(result: &GenerateResult, dry_run: bool) -> anyhow::Result<String> {
    let context = build_context(result, dry_run);
    let theme = create_theme();
    outstanding::render(SUMMARY_TEMPLATE, &context, &theme)
        .map_err(|e| anyhow::anyhow!("failed to render summary: {e}"))
}

/// Render the full result as pretty JSON.
pub fn render_json(result: &GenerateResult) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
