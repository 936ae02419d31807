//! BorderedWidget: a one-cell frame, with an optional title, around another widget.

use crate::geometry::Rect;
use crate::render::{CellStyle, Surface};
use crate::widget::{AnyWidget, Widget};

const HLINE: char = '─';
const VLINE: char = '│';
const UL_CORNER: char = '┌';
const UR_CORNER: char = '┐';
const LL_CORNER: char = '└';
const LR_CORNER: char = '┘';

// ---------------------------------------------------------------------------
// BorderedWidget
// ---------------------------------------------------------------------------

/// Decorates an owned inner widget with a box-drawing frame.
///
/// The inner widget always gets the outer rect shrunk by one cell on every side.
/// The frame is drawn after the inner widget, so it is never overdrawn by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderedWidget {
    rect: Rect,
    title: Option<String>,
    inner: Box<AnyWidget>,
}

impl BorderedWidget {
    /// Frame `inner` with no title.
    pub fn new(inner: impl Into<AnyWidget>) -> Self {
        Self {
            rect: Rect::default(),
            title: None,
            inner: Box::new(inner.into()),
        }
    }

    /// Set the title drawn into the top border.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The framed widget.
    pub fn inner(&self) -> &AnyWidget {
        &self.inner
    }

    /// The framed widget, mutably.
    pub fn inner_mut(&mut self) -> &mut AnyWidget {
        &mut self.inner
    }
}

impl Widget for BorderedWidget {
    fn widget_type(&self) -> &'static str {
        "Bordered"
    }

    fn render(&self, surface: &mut dyn Surface) {
        self.inner.render(surface);

        if self.rect.is_empty() {
            return;
        }
        let (x0, y0, x1, y1) = self.rect.values();
        let style = CellStyle::DEFAULT;

        for i in x0 + 1..x1 {
            surface.set_content(i, y0, HLINE, style);
            surface.set_content(i, y1, HLINE, style);
        }
        if let Some(title) = &self.title {
            for (i, ch) in (x0 + 1..x1).zip(title.chars()) {
                surface.set_content(i, y0, ch, style);
            }
        }
        for j in y0 + 1..y1 {
            surface.set_content(x0, j, VLINE, style);
            surface.set_content(x1, j, VLINE, style);
        }

        surface.set_content(x0, y0, UL_CORNER, style);
        surface.set_content(x1, y0, UR_CORNER, style);
        surface.set_content(x0, y1, LL_CORNER, style);
        surface.set_content(x1, y1, LR_CORNER, style);
    }

    fn resize(&mut self, rect: Rect) {
        self.rect = rect;
        self.inner.resize(rect.shrink(1));
    }

    fn rect(&self) -> Rect {
        self.rect
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Grid;
    use crate::testing::snapshot::render_to_string;
    use crate::widgets::{ListWidget, TextWidget};
    use pretty_assertions::assert_eq;

    fn framed_text(text: &str, rect: Rect) -> BorderedWidget {
        let mut w = BorderedWidget::new(TextWidget::new(text));
        w.resize(rect);
        w
    }

    #[test]
    fn resize_shrinks_inner_by_one() {
        let w = framed_text("abc", Rect::new(0, 0, 4, 4));
        assert_eq!(w.rect(), Rect::new(0, 0, 4, 4));
        assert_eq!(w.inner().rect(), Rect::new(1, 1, 3, 3));
    }

    #[test]
    fn resize_at_offset() {
        let w = framed_text("", Rect::new(10, 5, 30, 9));
        assert_eq!(w.inner().rect(), Rect::new(11, 6, 29, 8));
    }

    #[test]
    fn corners_and_content() {
        let w = framed_text("abc", Rect::new(0, 0, 4, 4));
        let mut grid = Grid::new(5, 5);
        w.render(&mut grid);
        assert_eq!(grid.get_cell(0, 0).unwrap().ch, '┌');
        assert_eq!(grid.get_cell(4, 0).unwrap().ch, '┐');
        assert_eq!(grid.get_cell(0, 4).unwrap().ch, '└');
        assert_eq!(grid.get_cell(4, 4).unwrap().ch, '┘');
        assert_eq!(
            render_to_string(&w, 5, 5),
            "┌───┐\n│abc│\n│   │\n│   │\n└───┘"
        );
    }

    #[test]
    fn title_overwrites_top_border() {
        let w = framed_text("", Rect::new(0, 0, 9, 2)).with_title("log");
        assert_eq!(w.title(), Some("log"));
        assert_eq!(
            render_to_string(&w, 10, 3),
            "┌log─────┐\n│        │\n└────────┘"
        );
    }

    #[test]
    fn long_title_is_truncated_to_interior() {
        let w = framed_text("", Rect::new(0, 0, 4, 2)).with_title("overflowing");
        assert_eq!(render_to_string(&w, 5, 3), "┌ove┐\n│   │\n└───┘");
    }

    #[test]
    fn frame_is_drawn_over_inner() {
        // Inner rect deliberately forced over the frame.
        let mut w = framed_text("", Rect::new(0, 0, 2, 2));
        w.inner_mut().resize(Rect::new(0, 0, 2, 2));
        if let AnyWidget::Text(text) = w.inner_mut() {
            text.set_text("xxxxxxxxx");
        }
        assert_eq!(render_to_string(&w, 3, 3), "┌─┐\n│x│\n└─┘");
    }

    #[test]
    fn tiny_rect_gives_empty_inner() {
        let w = framed_text("abc", Rect::new(0, 0, 1, 1));
        assert!(w.inner().rect().is_empty());
        assert_eq!(render_to_string(&w, 2, 2), "┌┐\n└┘");
    }

    #[test]
    fn single_cell_rect_keeps_last_corner() {
        let w = framed_text("abc", Rect::new(0, 0, 0, 0));
        assert_eq!(render_to_string(&w, 1, 1), "┘");
    }

    #[test]
    fn inverted_rect_draws_nothing() {
        let w = framed_text("abc", Rect::new(3, 3, 1, 1));
        let mut grid = Grid::new(4, 4);
        w.render(&mut grid);
        assert_eq!(grid, Grid::new(4, 4));
    }

    #[test]
    fn wraps_list() {
        let mut w = BorderedWidget::new(ListWidget::new(["one", "two", "three"]));
        w.resize(Rect::new(0, 0, 6, 3));
        assert_eq!(
            render_to_string(&w, 7, 4),
            "┌─────┐\n│one  │\n│two  │\n└─────┘"
        );
    }
}
