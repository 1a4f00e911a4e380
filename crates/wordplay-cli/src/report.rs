//! Rendering of validation results and session history.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use wordplay_model::{History, RootWord, ValidationOutcome};

/// Result of one word in a `check` run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckEntry {
    /// Text as typed.
    pub input: String,
    /// Normalized word that was validated.
    pub word: String,
    pub outcome: ValidationOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckEntry {
    pub fn new(input: &str, word: &str, outcome: ValidationOutcome, root: &RootWord) -> Self {
        let rejection = outcome.rejection();
        Self {
            input: input.to_string(),
            word: word.to_string(),
            outcome,
            title: rejection.and_then(|reason| reason.title()),
            message: rejection.and_then(|reason| reason.message(root)),
        }
    }
}

/// All results of a `check` run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub root: RootWord,
    pub language: String,
    pub entries: Vec<CheckEntry>,
    /// Accepted words, most recent first.
    pub history: Vec<String>,
}

impl CheckReport {
    pub fn accepted_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.outcome.is_accepted())
            .count()
    }
}

/// One line per word, in submission order.
pub fn render_plain(report: &CheckReport) -> String {
    let mut out = format!("root: {} ({})\n", report.root, report.language);
    for entry in &report.entries {
        let line = match entry.outcome {
            ValidationOutcome::Accepted => {
                format!("{}: accepted ({} letters)", entry.word, entry.word.chars().count())
            }
            ValidationOutcome::Rejected(_) => match (entry.title, &entry.message) {
                (Some(title), Some(message)) => format!("{}: {title}. {message}", entry.word),
                _ => "(blank): ignored".to_string(),
            },
        };
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(&format!(
        "accepted {} of {}\n",
        report.accepted_count(),
        report.entries.len()
    ));
    out
}

pub fn render_json(report: &CheckReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Table of accepted words with their letter counts, most recent first.
pub fn history_table(history: &History) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Word"), header_cell("Letters")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let total = history.len();
    for (idx, word) in history.iter().enumerate() {
        table.add_row(vec![
            dim_cell(total - idx),
            Cell::new(word),
            Cell::new(word.chars().count()).fg(Color::Green),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(60);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
