//! Surface: the capability widgets draw through.
//!
//! Every widget receives a `&mut dyn Surface` in its render call instead of
//! reaching for a global screen. [`Grid`](super::Grid) is the in-memory
//! implementation, [`Driver`](super::Driver) the crossterm one.

use std::io;

use crate::geometry::Size;

use super::cell::CellStyle;

/// A character grid that can be written cell by cell and flushed.
pub trait Surface {
    /// Current grid dimensions.
    fn size(&self) -> Size;

    /// Write one cell. Coordinates outside the grid are ignored.
    fn set_content(&mut self, x: i32, y: i32, ch: char, style: CellStyle);

    /// Overwrite every cell with `ch` in `style`.
    fn fill(&mut self, ch: char, style: CellStyle);

    /// Flush pending writes to wherever the grid is displayed.
    fn show(&mut self) -> io::Result<()>;

    /// Force the next [`show`](Self::show) to repaint everything.
    fn sync(&mut self) -> io::Result<()>;

    /// Reallocate the grid after the display changed size. Contents are cleared.
    fn resize(&mut self, size: Size);
}
