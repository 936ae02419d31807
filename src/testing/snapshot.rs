//! Snapshot rendering helpers.
//!
//! Functions for converting rendered widget output into plain-text strings
//! suitable for snapshot testing and assertions.

use crate::render::Grid;
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render a widget into a blank `width` x `height` grid and return its text.
///
/// The widget is drawn at its current rect; nothing is resized. Each row
/// becomes one line in the output string, with trailing spaces trimmed. Lines
/// are separated by `'\n'` and the final line has no trailing newline.
///
/// # Examples
///
/// ```
/// use termpane::geometry::Rect;
/// use termpane::testing::render_to_string;
/// use termpane::widget::Widget;
/// use termpane::widgets::ListWidget;
///
/// let mut list = ListWidget::new(["one", "two"]);
/// list.resize(Rect::new(0, 0, 4, 1));
/// assert_eq!(render_to_string(&list, 5, 2), "one\ntwo");
/// ```
pub fn render_to_string(widget: &dyn Widget, width: u16, height: u16) -> String {
    let mut grid = Grid::new(width, height);
    widget.render(&mut grid);
    grid_to_string(&grid)
}

/// Convert a grid to a plain text string.
///
/// Each row is right-trimmed of spaces, and rows are joined with `'\n'`.
/// A grid with no cells yields the empty string.
pub fn grid_to_string(grid: &Grid) -> String {
    if grid.width == 0 || grid.height == 0 {
        return String::new();
    }
    (0..grid.height)
        .map(|y| {
            let row: String = (0..grid.width)
                .filter_map(|x| grid.get_cell(x, y))
                .map(|cell| cell.ch)
                .collect();
            row.trim_end_matches(' ').to_owned()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Like [`grid_to_string`] but marks highlighted cells with `_` in a second
/// line under each row that has any. Rows without highlights are emitted alone.
pub fn grid_to_marked_string(grid: &Grid) -> String {
    let mut out = Vec::new();
    for y in 0..grid.height {
        let cells: Vec<_> = (0..grid.width).filter_map(|x| grid.get_cell(x, y)).collect();
        let row: String = cells.iter().map(|c| c.ch).collect();
        out.push(row.trim_end_matches(' ').to_owned());
        if cells.iter().any(|c| c.style.underline) {
            let marks: String = cells
                .iter()
                .map(|c| if c.style.underline { '_' } else { ' ' })
                .collect();
            out.push(marks.trim_end_matches(' ').to_owned());
        }
    }
    out.join("\n")
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::render::{CellStyle, Surface};
    use crate::widgets::{ListWidget, TextWidget};

    #[test]
    fn empty_grid_is_empty_string() {
        assert_eq!(grid_to_string(&Grid::new(0, 3)), "");
        assert_eq!(grid_to_string(&Grid::new(3, 0)), "");
    }

    #[test]
    fn blank_rows_are_kept() {
        assert_eq!(grid_to_string(&Grid::new(2, 3)), "\n\n");
    }

    #[test]
    fn interior_spaces_survive_trim() {
        let mut grid = Grid::new(5, 1);
        grid.set_content(0, 0, 'a', CellStyle::DEFAULT);
        grid.set_content(3, 0, 'b', CellStyle::DEFAULT);
        assert_eq!(grid_to_string(&grid), "a  b");
    }

    #[test]
    fn render_to_string_uses_widget_rect() {
        let mut text = TextWidget::new("hi");
        text.resize(Rect::new(1, 1, 2, 1));
        assert_eq!(render_to_string(&text, 4, 2), "\n hi");
    }

    #[test]
    fn marked_string_shows_highlight() {
        let mut list = ListWidget::new(["aa", "bb"]).with_selected(1);
        list.resize(Rect::new(0, 0, 2, 1));
        let mut grid = Grid::new(3, 2);
        list.render(&mut grid);
        insta::assert_snapshot!(grid_to_marked_string(&grid), @r"
        aa
        bb
        __
        ");
    }
}
