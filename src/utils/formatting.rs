//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));

pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Printable width of a cell: ANSI escapes contribute nothing, wide
/// characters count double.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Left-align within `width` printable columns. Colored strings keep
/// their escapes; padding is computed on the visible text only.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = display_width(s);
    let fill = width.saturating_sub(w);
    format!("{}{}", s, " ".repeat(fill))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = display_width(s);
    let fill = width.saturating_sub(w);
    format!("{}{}", " ".repeat(fill), s)
}
