//! Pilot: programmatic interaction with a headless Compositor.
//!
//! The `Pilot` pairs a [`Compositor`] with an in-memory [`Grid`] and provides
//! methods to simulate key presses, terminal resizes and producer appends, then
//! draw frames to text for snapshot testing. Every call goes through the same
//! entry points the render loop uses.

use crate::compositor::{Compositor, CompositorConfig};
use crate::event::{DataEvent, InputEvent, Key, KeyEvent, Modifiers};
use crate::geometry::{Rect, Size};
use crate::render::{Grid, Surface};
use crate::widget::AnyWidget;

use super::snapshot::{grid_to_marked_string, grid_to_string};

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless compositor driver for testing.
///
/// # Examples
///
/// ```
/// use termpane::event::Key;
/// use termpane::testing::Pilot;
/// use termpane::widgets::{BorderedWidget, ListWidget};
///
/// let mut pilot = Pilot::new(8, 4);
/// pilot.push(BorderedWidget::new(ListWidget::new(["a", "b", "c"])));
/// pilot.press_key(Key::Char('j'));
/// assert_eq!(pilot.render(), "┌──────┐\n│a     │\n│b     │\n└──────┘");
/// ```
pub struct Pilot {
    compositor: Compositor,
    grid: Grid,
}

impl Pilot {
    /// Create a headless compositor on a `width` x `height` grid.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_compositor(Compositor::new(CompositorConfig::default()), width, height)
    }

    /// Drive an existing compositor, e.g. one with a layout installed.
    pub fn with_compositor(compositor: Compositor, width: u16, height: u16) -> Self {
        let grid = Grid::new(width, height);
        let mut pilot = Self { compositor, grid };
        pilot.relayout();
        pilot
    }

    /// Add a top-level widget and lay the tree out again. Returns its index.
    pub fn push(&mut self, widget: impl Into<AnyWidget>) -> usize {
        let index = self.compositor.push(widget);
        self.relayout();
        index
    }

    fn relayout(&mut self) {
        let size = self.grid.size();
        self.compositor.resize(Rect::from_size(size));
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Simulate a key press with no modifiers.
    pub fn press_key(&mut self, key: Key) {
        self.press_key_with(key, Modifiers::NONE);
    }

    /// Simulate a key press with the given modifiers.
    pub fn press_key_with(&mut self, key: Key, modifiers: Modifiers) {
        self.compositor
            .handle_input(InputEvent::Key(KeyEvent::new(key, modifiers)));
    }

    /// Simulate pressing each character of `keys` in turn.
    pub fn press_keys(&mut self, keys: &str) {
        for ch in keys.chars() {
            self.press_key(Key::Char(ch));
        }
    }

    /// Simulate a terminal resize to the given dimensions.
    pub fn resize(&mut self, width: u16, height: u16) {
        let size = Size::from((width, height));
        self.grid.resize(size);
        self.compositor.handle_input(InputEvent::Resize(size));
    }

    /// Simulate a producer appending `line` to top-level widget `target`.
    pub fn append(&mut self, target: usize, line: impl Into<String>) {
        self.compositor.handle_data(DataEvent::append(target, line));
    }

    // ── Query ────────────────────────────────────────────────────────

    /// Borrow the underlying compositor immutably.
    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    /// Borrow the underlying compositor mutably.
    pub fn compositor_mut(&mut self) -> &mut Compositor {
        &mut self.compositor
    }

    /// Whether the compositor is still running (has not quit).
    pub fn is_running(&self) -> bool {
        self.compositor.is_running()
    }

    /// The grid as of the last [`render`](Self::render).
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    // ── Render helpers ───────────────────────────────────────────────

    /// Draw one frame and return the screen as text.
    pub fn render(&mut self) -> String {
        self.draw();
        grid_to_string(&self.grid)
    }

    /// Draw one frame and return the screen with highlight marks.
    pub fn render_marked(&mut self) -> String {
        self.draw();
        grid_to_marked_string(&self.grid)
    }

    fn draw(&mut self) {
        self.compositor
            .draw(&mut self.grid)
            .expect("grid show is infallible");
    }
}

// ===========================================================================
// Tests
// ===========================================================================
