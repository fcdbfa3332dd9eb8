//! Fixed-width table formatting for index rows.

use crate::model::sep::Sep;
use crate::render::constants::{AUTHOR_WIDTH, TITLE_WIDTH};
use once_cell::sync::Lazy;

/// Separator rule delimiting table bodies.
pub(crate) static TABLE_RULE: Lazy<String> = Lazy::new(|| {
    format!(
        "== ====  {} {}",
        "=".repeat(TITLE_WIDTH),
        "=".repeat(AUTHOR_WIDTH)
    )
});

/// Formats one table line from pre-rendered column values.
pub(crate) fn format_row(
    type_code: &str,
    status_code: &str,
    number: &str,
    title: &str,
    authors: &str,
) -> String {
    format!(
        "{type_code:>1}{status_code:>1} {number:>4}  {title:<width$} {authors}",
        width = TITLE_WIDTH
    )
}

/// Formats the row for one record.
pub(crate) fn sep_row(sep: &Sep) -> String {
    let type_code = sep.kind.code().to_string();
    let status_code = sep
        .status
        .code()
        .map(|code| code.to_string())
        .unwrap_or_default();
    let surnames: Vec<&str> = sep
        .authors
        .iter()
        .map(|author| author.surname.as_str())
        .collect();
    format_row(
        &type_code,
        &status_code,
        &sep.number.to_string(),
        &abbreviated_title(&sep.title),
        &surnames.join(", "),
    )
}

/// Column header block: rule, header row, rule.
pub(crate) fn column_headers() -> [String; 3] {
    [
        TABLE_RULE.clone(),
        format_row(".", ".", "SEP", "SEP Title", "SEP Author(s)"),
        TABLE_RULE.clone(),
    ]
}

/// Truncates over-wide titles to the column width, marking the cut.
fn abbreviated_title(title: &str) -> String {
    if title.chars().count() <= TITLE_WIDTH {
        return title.to_string();
    }
    let mut cut: String = title.chars().take(TITLE_WIDTH - 4).collect();
    cut.push_str(" ...");
    cut
}
