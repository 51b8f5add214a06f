//! Pipe-table flattening.
//!
//! Slack has no table syntax, so tables are laid out as fixed-width text
//! inside a code fence where the monospace font keeps columns aligned.

/// Fence used around formatted tables.
const FENCE: &str = "```";

/// Wrap `body` in a code fence.
fn fenced(body: &str) -> String {
    format!("{FENCE}\n{body}\n{FENCE}")
}

/// Split one table line into trimmed cells.
///
/// A single leading and trailing pipe is dropped; the rest are separators.
/// Whitespace outside the outer pipes is kept, so an indented row starts
/// with an empty cell.
fn split_row(line: &str) -> Vec<String> {
    let line = line.strip_prefix('|').unwrap_or(line);
    let line = line.strip_suffix('|').unwrap_or(line);
    line.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// Format pipe-table markup as an aligned, fenced text block.
///
/// Ragged rows are padded with empty cells. Markdown separator rows
/// (`---|---`) are not special and are laid out like any other row.
///
/// # Examples
///
/// ```
/// use md2slack::slack::format_table;
///
/// assert_eq!(format_table("| a | bb |\n| ccc | d |"), "```\na   | bb\nccc | d \n```");
/// assert_eq!(format_table("   \n"), "```\n```");
/// ```
pub fn format_table(markup: &str) -> String {
    let mut rows: Vec<Vec<String>> = markup
        .trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(split_row)
        .collect();

    if rows.is_empty() {
        tracing::debug!("table markup has no rows");
        return format!("{FENCE}\n{FENCE}");
    }

    let max_cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(max_cols, String::new());
    }

    let widths: Vec<usize> = (0..max_cols)
        .map(|col| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let body = rows
        .iter()
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{:<width$}", cell))
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>()
        .join("\n");

    fenced(&body)
}
