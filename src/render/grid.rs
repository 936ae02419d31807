//! Grid: an in-memory screen buffer of styled cells.
//!
//! The `Grid` is a full 2D buffer of [`StyledCell`]s. It implements [`Surface`],
//! so it works both as a headless render target in tests and as the frame buffer
//! behind the terminal [`Driver`](super::Driver). The `diff` method compares two
//! frames and produces only the [`CellUpdate`]s needed to transition between them.

use std::io;

use crate::geometry::Size;

use super::cell::{CellStyle, StyledCell};
use super::surface::Surface;

// ---------------------------------------------------------------------------
// CellUpdate
// ---------------------------------------------------------------------------

/// A single cell that changed between frames.
///
/// Used by the driver to emit minimal terminal escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellUpdate {
    pub x: u16,
    pub y: u16,
    pub cell: StyledCell,
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A screen buffer. `cells[y][x]` is the cell at column x, row y.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<StyledCell>>,
    /// Grid width in columns.
    pub width: u16,
    /// Grid height in rows.
    pub height: u16,
    frames: usize,
}

impl Grid {
    /// Create a blank grid of the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            cells: Self::blank_cells(width, height),
            width,
            height,
            frames: 0,
        }
    }

    /// Get the cell at (x, y), or `None` if out of bounds.
    pub fn get_cell(&self, x: u16, y: u16) -> Option<&StyledCell> {
        self.cells.get(y as usize).and_then(|row| row.get(x as usize))
    }

    /// Number of times [`Surface::show`] has been called on this grid.
    pub fn frames_shown(&self) -> usize {
        self.frames
    }

    /// Compare this frame against a previous frame and return only the changed cells.
    ///
    /// Cells outside the previous frame's bounds always count as changed.
    pub fn diff(&self, previous: &Grid) -> Vec<CellUpdate> {
        let mut updates = Vec::new();
        for (y, row) in self.cells.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let unchanged = previous
                    .cells
                    .get(y)
                    .and_then(|prev_row| prev_row.get(x))
                    .is_some_and(|prev| prev == cell);
                if !unchanged {
                    updates.push(CellUpdate {
                        x: x as u16,
                        y: y as u16,
                        cell: *cell,
                    });
                }
            }
        }
        updates
    }

    /// Every cell of the grid as an update, for full repaints.
    pub fn all_cells(&self) -> Vec<CellUpdate> {
        self.diff(&Grid::new(0, 0))
    }

    fn blank_cells(width: u16, height: u16) -> Vec<Vec<StyledCell>> {
        vec![vec![StyledCell::blank(); width as usize]; height as usize]
    }
}

impl Surface for Grid {
    fn size(&self) -> Size {
        Size::new(self.width as i32, self.height as i32)
    }

    fn set_content(&mut self, x: i32, y: i32, ch: char, style: CellStyle) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(cell) = self
            .cells
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
        {
            *cell = StyledCell::new(ch, style);
        }
    }

    fn fill(&mut self, ch: char, style: CellStyle) {
        for row in &mut self.cells {
            row.fill(StyledCell::new(ch, style));
        }
    }

    fn show(&mut self) -> io::Result<()> {
        self.frames += 1;
        Ok(())
    }

    fn sync(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn resize(&mut self, size: Size) {
        self.width = size.width.clamp(0, u16::MAX as i32) as u16;
        self.height = size.height.clamp(0, u16::MAX as i32) as u16;
        self.cells = Self::blank_cells(self.width, self.height);
    }
}

// ===========================================================================
// Tests
// ===========================================================================
