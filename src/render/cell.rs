//! Cell: one character of the grid plus its style.
//!
//! Styling is deliberately tiny. The only attribute a widget can ask for is the
//! highlight used by [`ListWidget`](crate::widgets::ListWidget) for the selected row.

// ---------------------------------------------------------------------------
// CellStyle
// ---------------------------------------------------------------------------

/// Visual style for a single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellStyle {
    pub underline: bool,
}

impl CellStyle {
    /// The terminal's default style.
    pub const DEFAULT: CellStyle = CellStyle { underline: false };

    /// The highlight style: underlined.
    pub const HIGHLIGHT: CellStyle = CellStyle { underline: true };
}

// ---------------------------------------------------------------------------
// StyledCell
// ---------------------------------------------------------------------------

/// A single terminal cell: one character with associated style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledCell {
    pub ch: char,
    pub style: CellStyle,
}

impl StyledCell {
    /// Create a new styled cell.
    pub const fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }

    /// A blank (space) cell with default style.
    pub const fn blank() -> Self {
        Self { ch: ' ', style: CellStyle::DEFAULT }
    }
}

impl Default for StyledCell {
    fn default() -> Self {
        Self::blank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_is_plain() {
        assert_eq!(CellStyle::default(), CellStyle::DEFAULT);
        assert!(!CellStyle::DEFAULT.underline);
        assert!(CellStyle::HIGHLIGHT.underline);
    }

    #[test]
    fn blank_cell() {
        let cell = StyledCell::blank();
        assert_eq!(cell.ch, ' ');
        assert_eq!(cell.style, CellStyle::DEFAULT);
        assert_eq!(StyledCell::default(), cell);
    }
}
