//! TextWidget: a flat string flowed into a rectangle.
//!
//! Text runs left to right across the full width, then continues on the next row,
//! with no regard for word boundaries. Anything past `width * height` characters is
//! cut off; cells past the end of the text are blanked.

use crate::geometry::Rect;
use crate::render::{CellStyle, Surface};
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// TextWidget
// ---------------------------------------------------------------------------

/// A widget that wraps fixed text into its rect.
///
/// # Examples
///
/// ```
/// use termpane::geometry::Rect;
/// use termpane::testing::render_to_string;
/// use termpane::widget::Widget;
/// use termpane::widgets::TextWidget;
///
/// let mut text = TextWidget::new("abcdef");
/// text.resize(Rect::new(0, 0, 2, 1));
/// assert_eq!(render_to_string(&text, 3, 2), "abc\ndef");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextWidget {
    rect: Rect,
    text: Vec<char>,
}

impl TextWidget {
    /// Create a text widget. Its rect stays empty until the first resize.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            rect: Rect::default(),
            text: text.as_ref().chars().collect(),
        }
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: impl AsRef<str>) {
        self.text = text.as_ref().chars().collect();
    }

    /// The current text.
    pub fn text(&self) -> String {
        self.text.iter().collect()
    }
}

impl Widget for TextWidget {
    fn widget_type(&self) -> &'static str {
        "Text"
    }

    fn render(&self, surface: &mut dyn Surface) {
        let (x0, y0, x1, y1) = self.rect.values();
        let width = self.rect.width() as usize;
        for j in y0..=y1 {
            for i in x0..=x1 {
                let idx = (j - y0) as usize * width + (i - x0) as usize;
                let ch = self.text.get(idx).copied().unwrap_or(' ');
                surface.set_content(i, j, ch, CellStyle::DEFAULT);
            }
        }
    }

    fn resize(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn rect(&self) -> Rect {
        self.rect
    }
}

// ===========================================================================
// Tests
// ===========================================================================
