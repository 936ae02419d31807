//! Scroll state for a vertically scrolling, single-selection viewport.
//!
//! `ScrollState` tracks the first visible line (`offset`) and the highlighted line
//! (`selected`). It knows nothing about the lines themselves: every operation takes
//! the current line count and viewport height, so the owner can resize or append
//! without touching the state.
//!
//! After any navigation call the state satisfies
//! `offset <= selected < offset + height`, `selected < len` (when `len > 0`) and
//! `offset <= max(0, len - height)`. A resize can break that temporarily; the
//! state is re-clamped lazily by [`ScrollState::visible_offset`] and at the start
//! of the next navigation call, never eagerly.

/// Offset and selection of a scrolling list viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Index of the first visible line.
    pub offset: usize,
    /// Index of the highlighted line.
    pub selected: usize,
}

impl ScrollState {
    /// Create a state with the given selection and a zero offset.
    pub fn new(selected: usize) -> Self {
        Self { offset: 0, selected }
    }

    /// The offset to draw from: the stored offset clamped to the content, then
    /// nudged so the selected line is inside the viewport.
    pub fn visible_offset(&self, len: usize, height: usize) -> usize {
        let height = height.max(1);
        let mut offset = self.offset.min(len.saturating_sub(height));
        if self.selected < offset {
            offset = self.selected;
        } else if self.selected >= offset + height {
            offset = self.selected + 1 - height;
        }
        offset
    }

    /// Move the selection one line down, scrolling if it leaves the viewport.
    pub fn down(&mut self, len: usize, height: usize) {
        if len == 0 {
            return;
        }
        let height = height.max(1);
        self.offset = self.visible_offset(len, height);
        if self.selected + 1 < len {
            self.selected += 1;
            if self.selected >= self.offset + height {
                self.offset += 1;
            }
        }
    }

    /// Move the selection one line up, scrolling if it leaves the viewport.
    pub fn up(&mut self, len: usize, height: usize) {
        self.offset = self.visible_offset(len, height);
        if self.selected > 0 {
            self.selected -= 1;
            if self.selected < self.offset {
                self.offset -= 1;
            }
        }
    }

    /// Jump to the first line.
    pub fn first(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    /// Jump to the last line, scrolled so it sits at the bottom of the viewport.
    pub fn last(&mut self, len: usize, height: usize) {
        self.selected = len.saturating_sub(1);
        self.offset = len.saturating_sub(height.max(1));
    }
}

// ===========================================================================
// Tests
// ===========================================================================
