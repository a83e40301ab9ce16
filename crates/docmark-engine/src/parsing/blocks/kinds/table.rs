use regex::Regex;
use std::sync::LazyLock;

static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|[\s\-:|]+\|$").expect("table separator regex"));

/// GitHub-flavoured pipe table.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';
    pub const SEPARATOR_CELL: &'static str = "---";

    /// A line both starting and ending with `|`.
    pub fn is_row(line: &str) -> bool {
        let t = line.trim();
        t.len() >= 2 && t.starts_with(Self::PIPE) && t.ends_with(Self::PIPE)
    }

    /// `| --- | :-: |` style alignment row.
    pub fn is_separator(line: &str) -> bool {
        SEPARATOR_REGEX.is_match(line.trim())
    }

    /// Cell texts between the outer pipes, trimmed.
    pub fn split_cells(line: &str) -> Vec<&str> {
        let t = line.trim();
        let inner = t
            .strip_prefix(Self::PIPE)
            .and_then(|s| s.strip_suffix(Self::PIPE))
            .unwrap_or(t);
        inner.split(Self::PIPE).map(str::trim).collect()
    }

    pub fn render_row<S: AsRef<str>>(cells: &[S]) -> String {
        let cells: Vec<&str> = cells.iter().map(AsRef::as_ref).collect();
        format!("| {} |", cells.join(" | "))
    }

    pub fn render_separator(columns: usize) -> String {
        Self::render_row(&vec![Self::SEPARATOR_CELL; columns.max(1)])
    }
}
