//! Column layout for text tables.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

/// Column configuration: header text, fixed display width, alignment.
///
/// # Examples
///
/// ```
/// use assetdesk_cli::views::{Alignment, Column};
///
/// let columns = vec![
///     Column::new("ID", 6),
///     Column::new("Qty", 4).align(Alignment::Right),
/// ];
/// assert_eq!(columns[1].fit("12"), "  12");
/// ```
#[derive(Debug, Clone)]
pub struct Column {
    pub header: String,
    /// Width in terminal columns.
    pub width: usize,
    pub align: Alignment,
}

impl Column {
    /// Create a new column with explicit width.
    pub fn new(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
            align: Alignment::Left,
        }
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Pad or truncate `text` to exactly this column's display width.
    pub fn fit(&self, text: &str) -> String {
        let text = truncate(text, self.width);
        let pad = " ".repeat(self.width.saturating_sub(text.width()));
        match self.align {
            Alignment::Left => format!("{text}{pad}"),
            Alignment::Right => format!("{pad}{text}"),
        }
    }
}

/// Cut `text` to at most `width` display columns, marking the cut with `…`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        // Leave one column for the ellipsis
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_pads_left_aligned() {
        assert_eq!(Column::new("Name", 6).fit("pump"), "pump  ");
    }

    #[test]
    fn test_fit_truncates() {
        assert_eq!(Column::new("Name", 6).fit("compressor"), "compr…");
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        // Each CJK character is two columns wide
        assert_eq!(truncate("泵站设备", 5), "泵站…");
        assert_eq!(truncate("泵站", 4), "泵站");
        assert_eq!(truncate("abc", 0), "");
    }
}
