//! ListWidget: a scrollable column of lines with one highlighted row.

use crate::geometry::Rect;
use crate::render::{CellStyle, Surface};
use crate::widget::{ScrollState, Widget};

// ---------------------------------------------------------------------------
// ListWidget
// ---------------------------------------------------------------------------

/// A vertically scrolling list of lines.
///
/// Only lines are ever added from outside (see [`push_line`](Self::push_line)).
/// Selection and scrolling change exclusively through [`down`](Self::down),
/// [`up`](Self::up), [`first`](Self::first) and [`last`](Self::last). A resize
/// leaves them alone so a transient shrink does not lose the scroll position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListWidget {
    rect: Rect,
    lines: Vec<String>,
    scroll: ScrollState,
}

impl ListWidget {
    /// Create a list holding `lines`, with the first line selected.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rect: Rect::default(),
            lines: lines.into_iter().map(Into::into).collect(),
            scroll: ScrollState::default(),
        }
    }

    /// Start with `selected` highlighted (clamped to the last line).
    pub fn with_selected(mut self, selected: usize) -> Self {
        self.scroll = ScrollState::new(selected.min(self.lines.len().saturating_sub(1)));
        self
    }

    /// Append a line at the bottom. Selection and offset are unchanged.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// All lines, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Index of the highlighted line.
    pub fn selected(&self) -> usize {
        self.scroll.selected
    }

    /// Stored index of the first visible line.
    pub fn offset(&self) -> usize {
        self.scroll.offset
    }

    /// Number of rows the viewport shows.
    pub fn visible_height(&self) -> usize {
        self.rect.height() as usize
    }

    /// Select the next line.
    pub fn down(&mut self) {
        self.scroll.down(self.lines.len(), self.visible_height());
    }

    /// Select the previous line.
    pub fn up(&mut self) {
        self.scroll.up(self.lines.len(), self.visible_height());
    }

    /// Select the first line and scroll to the top.
    pub fn first(&mut self) {
        self.scroll.first();
    }

    /// Select the last line and scroll to the bottom.
    pub fn last(&mut self) {
        self.scroll.last(self.lines.len(), self.visible_height());
    }
}

impl Widget for ListWidget {
    fn widget_type(&self) -> &'static str {
        "List"
    }

    fn render(&self, surface: &mut dyn Surface) {
        let (x0, y0, x1, y1) = self.rect.values();
        let width = self.rect.width() as usize;
        let offset = self
            .scroll
            .visible_offset(self.lines.len(), self.visible_height());

        for j in y0..=y1 {
            let idx = offset + (j - y0) as usize;
            let Some(line) = self.lines.get(idx) else {
                continue;
            };
            let style = if idx == self.scroll.selected {
                CellStyle::HIGHLIGHT
            } else {
                CellStyle::DEFAULT
            };
            for (i, ch) in (x0..=x1).zip(line.chars().take(width)) {
                surface.set_content(i, j, ch, style);
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
