//! SplitWidget: two panes side by side or stacked, divided at a percentage.

use crate::geometry::Rect;
use crate::render::Surface;
use crate::widget::{AnyWidget, Widget};

// ---------------------------------------------------------------------------
// Axis
// ---------------------------------------------------------------------------

/// Direction of the dividing line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal divider: the first child on top, the second below.
    Horizontal,
    /// Vertical divider: the first child on the left, the second on the right.
    Vertical,
}

// ---------------------------------------------------------------------------
// SplitWidget
// ---------------------------------------------------------------------------

/// Partitions its rect between two owned children.
///
/// The split coordinate is `origin + extent * ratio / 100` along the axis. The
/// first child covers the origin up to and including the split coordinate, the
/// second starts right after it (never beyond the far edge). `ratio` is a
/// percentage and is not validated; values outside `0..=100` produce rects that
/// reach past this widget's own rect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitWidget {
    rect: Rect,
    ratio: i32,
    axis: Axis,
    first: Box<AnyWidget>,
    second: Box<AnyWidget>,
}

impl SplitWidget {
    /// Split between `first` and `second` at `ratio` percent along `axis`.
    pub fn new(
        first: impl Into<AnyWidget>,
        second: impl Into<AnyWidget>,
        axis: Axis,
        ratio: i32,
    ) -> Self {
        Self {
            rect: Rect::default(),
            ratio,
            axis,
            first: Box::new(first.into()),
            second: Box::new(second.into()),
        }
    }

    /// The split percentage.
    pub fn ratio(&self) -> i32 {
        self.ratio
    }

    /// The divider direction.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Left or top child.
    pub fn first(&self) -> &AnyWidget {
        &self.first
    }

    /// Right or bottom child.
    pub fn second(&self) -> &AnyWidget {
        &self.second
    }

    /// Both children, mutably.
    pub fn children_mut(&mut self) -> (&mut AnyWidget, &mut AnyWidget) {
        (&mut self.first, &mut self.second)
    }

    /// The rects the children receive for `rect`.
    pub fn partition(&self, rect: Rect) -> (Rect, Rect) {
        let (x0, y0, x1, y1) = rect.values();
        match self.axis {
            Axis::Horizontal => {
                let split = y0 + (y1 - y0) * self.ratio / 100;
                (
                    Rect::new(x0, y0, x1, split),
                    Rect::new(x0, (split + 1).min(y1), x1, y1),
                )
            }
            Axis::Vertical => {
                let split = x0 + (x1 - x0) * self.ratio / 100;
                (
                    Rect::new(x0, y0, split, y1),
                    Rect::new((split + 1).min(x1), y0, x1, y1),
                )
            }
        }
    }
}

impl Widget for SplitWidget {
    fn widget_type(&self) -> &'static str {
        "Split"
    }

    fn render(&self, surface: &mut dyn Surface) {
        self.first.render(surface);
        self.second.render(surface);
    }

    fn resize(&mut self, rect: Rect) {
        self.rect = rect;
        let (first, second) = self.partition(rect);
        self.first.resize(first);
        self.second.resize(second);
    }

    fn rect(&self) -> Rect {
        self.rect
    }
}

// ===========================================================================
// Tests
// ===========================================================================
