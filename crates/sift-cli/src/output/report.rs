//! Human-readable reports for `--format table`.

use sift_core::entities::HistoryRecord;
use sift_core::responses::{AnalyzeResponse, HistoryListResponse};

use super::table::{TableOptions, paint, render_entity_table, truncate_text, verdict_color};

pub const EMPTY_HISTORY: &str = "No analysis history yet. Analyze an article to see it here.";

const BAR_CELLS: usize = 20;
const EXCERPT_CHARS: usize = 60;

/// Verdict headline, confidence meter, and factor list for one analysis.
#[must_use]
pub fn analysis(response: &AnalyzeResponse, options: TableOptions) -> String {
    let result = &response.result;
    let headline = result.verdict.headline();
    let headline = match verdict_color(result.verdict.as_str()) {
        Some(code) if options.color => paint(headline, code),
        _ => headline.to_string(),
    };

    let mut lines = vec![
        headline,
        format!(
            "Confidence: {}% {}",
            result.confidence,
            confidence_bar(result.confidence)
        ),
        format!("Score: {}/100", result.score),
        String::new(),
        String::from("Factors:"),
    ];
    lines.extend(
        result
            .factors
            .iter()
            .map(|factor| format!("  [{}] {}", factor.icon, factor.text)),
    );

    if let Some(saved) = &response.saved {
        lines.push(String::new());
        lines.push(format!("Saved to history as {}", saved.id));
    }
    lines.join("\n")
}

/// History rows, newest first, or the empty-state message.
#[must_use]
pub fn history(response: &HistoryListResponse, options: TableOptions) -> String {
    if response.records.is_empty() {
        return EMPTY_HISTORY.to_string();
    }

    let headers = ["id", "verdict", "confidence", "date", "title", "excerpt"];
    let rows = response
        .records
        .iter()
        .map(|record| {
            vec![
                record.id.to_string(),
                record.verdict.to_string(),
                format!("{}%", record.confidence),
                record.created_at.format("%Y-%m-%d").to_string(),
                display_title(record),
                excerpt(&record.content),
            ]
        })
        .collect::<Vec<_>>();

    let mut out = render_entity_table(&headers, &rows, options);
    if usize::try_from(response.total).is_ok_and(|total| total > rows.len()) {
        out.push_str(&format!("\n({} of {} shown)", rows.len(), response.total));
    }
    out
}

/// Full view of one saved record.
#[must_use]
pub fn record(record: &HistoryRecord, options: TableOptions) -> String {
    let headers = ["key", "value"];
    let rows = vec![
        vec!["id".to_string(), record.id.to_string()],
        vec!["verdict".to_string(), record.verdict.to_string()],
        vec!["confidence".to_string(), format!("{}%", record.confidence)],
        vec!["date".to_string(), record.created_at.to_rfc3339()],
        vec!["title".to_string(), display_title(record)],
        vec!["source".to_string(), record.source.clone()],
    ];
    let mut out = render_entity_table(&headers, &rows, options);
    out.push_str("\n\n");
    out.push_str(&record.content);
    out
}

fn confidence_bar(confidence: u8) -> String {
    let filled = (usize::from(confidence.min(100)) * BAR_CELLS).div_ceil(100);
    format!(
        "[{}{}]",
        "#".repeat(filled),
        ".".repeat(BAR_CELLS - filled)
    )
}

fn display_title(record: &HistoryRecord) -> String {
    if record.title.trim().is_empty() {
        String::from("(untitled)")
    } else {
        record.title.clone()
    }
}

fn excerpt(content: &str) -> String {
    let flat = content.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_text(&flat, EXCERPT_CHARS)
}
