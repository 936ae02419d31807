//! Crossterm terminal output backend.
//!
//! The `Driver` owns the terminal for the lifetime of the UI: it enters raw mode and
//! the alternate screen, keeps a front [`Grid`] that widgets draw into, and on
//! [`show`](Surface::show) writes only the cells that changed since the last frame.
//! Dropping the driver restores the terminal, so every exit path (including a panic
//! unwinding through the render loop) leaves the user's shell usable.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::error::{Error, Result};
use crate::geometry::Size;

use super::cell::CellStyle;
use super::grid::{CellUpdate, Grid};
use super::surface::Surface;

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Terminal backend using crossterm.
///
/// Writes are queued into a `BufWriter<Stdout>` and sent in one flush per frame.
/// The driver does NOT take over the terminal on creation; call [`enter`](Self::enter).
pub struct Driver {
    writer: BufWriter<Stdout>,
    front: Grid,
    back: Grid,
    full_repaint: bool,
    mouse: bool,
    entered: bool,
}

impl Driver {
    /// Create a driver sized to the current terminal.
    pub fn new(mouse: bool) -> Result<Self> {
        let (width, height) = Self::terminal_size().map_err(Error::Terminal)?;
        Ok(Self {
            writer: BufWriter::new(io::stdout()),
            front: Grid::new(width, height),
            back: Grid::new(width, height),
            full_repaint: true,
            mouse,
            entered: false,
        })
    }

    /// Enable raw mode, switch to the alternate screen, hide the cursor and, if
    /// configured, start mouse reporting.
    pub fn enter(&mut self) -> Result<()> {
        if self.entered {
            return Ok(());
        }
        terminal::enable_raw_mode().map_err(Error::Terminal)?;
        // From here on `leave` (and `Drop`) must undo raw mode even if a later step fails.
        self.entered = true;
        self.full_repaint = true;
        execute!(self.writer, EnterAlternateScreen, cursor::Hide, Clear(ClearType::All))
            .map_err(Error::Terminal)?;
        if self.mouse {
            execute!(self.writer, EnableMouseCapture).map_err(Error::Terminal)?;
        }
        tracing::debug!(target: "termpane::driver", mouse = self.mouse, "terminal entered");
        Ok(())
    }

    /// Undo everything [`enter`](Self::enter) did. Safe to call more than once.
    ///
    /// Every restore step runs even if an earlier one fails; the first error is
    /// returned afterwards.
    pub fn leave(&mut self) -> io::Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        let mouse = if self.mouse {
            execute!(self.writer, DisableMouseCapture)
        } else {
            Ok(())
        };
        let screen = execute!(self.writer, cursor::Show, LeaveAlternateScreen);
        let raw = terminal::disable_raw_mode();
        let result = first_error([mouse, screen, raw]);
        match &result {
            Ok(()) => tracing::debug!(target: "termpane::driver", "terminal restored"),
            Err(err) => tracing::warn!(target: "termpane::driver", %err, "terminal restore incomplete"),
        }
        result
    }

    /// Whether the driver currently owns the terminal.
    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Get the terminal size (columns, rows) via crossterm.
    pub fn terminal_size() -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Queue a batch of cell updates. Call `flush` on the writer afterwards.
    fn apply_updates(&mut self, updates: &[CellUpdate]) -> io::Result<()> {
        let mut current = CellStyle::DEFAULT;
        for update in updates {
            queue!(self.writer, cursor::MoveTo(update.x, update.y))?;
            if update.cell.style != current {
                self.apply_cell_style(update.cell.style)?;
                current = update.cell.style;
            }
            queue!(self.writer, Print(update.cell.ch))?;
        }
        if current != CellStyle::DEFAULT {
            queue!(self.writer, SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }

    fn apply_cell_style(&mut self, style: CellStyle) -> io::Result<()> {
        if style.underline {
            queue!(self.writer, SetAttribute(Attribute::Underlined))
        } else {
            queue!(self.writer, SetAttribute(Attribute::Reset))
        }
    }
}

impl Surface for Driver {
    fn size(&self) -> Size {
        self.front.size()
    }

    fn set_content(&mut self, x: i32, y: i32, ch: char, style: CellStyle) {
        self.front.set_content(x, y, ch, style);
    }

    fn fill(&mut self, ch: char, style: CellStyle) {
        self.front.fill(ch, style);
    }

    fn show(&mut self) -> io::Result<()> {
        let updates = if self.full_repaint {
            self.full_repaint = false;
            self.front.all_cells()
        } else {
            self.front.diff(&self.back)
        };
        self.apply_updates(&updates)?;
        self.writer.flush()?;
        self.back = self.front.clone();
        Ok(())
    }

    fn sync(&mut self) -> io::Result<()> {
        queue!(self.writer, Clear(ClearType::All))?;
        self.full_repaint = true;
        Ok(())
    }

    fn resize(&mut self, size: Size) {
        self.front.resize(size);
        self.back.resize(size);
        self.full_repaint = true;
    }
}

impl Drop for Driver {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

/// The first failure among already-performed steps.
fn first_error(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    steps.into_iter().find(io::Result::is_err).unwrap_or(Ok(()))
}

/// Best-effort terminal restoration for contexts that cannot reach the driver,
/// such as a panic hook. Errors are ignored: there is nothing left to report them to.
pub fn restore_terminal() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableMouseCapture, cursor::Show, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_terminal_size_does_not_panic() {
        // There may be no terminal in CI; the call must fail gracefully.
        let _ = Driver::terminal_size();
    }

    #[test]
    fn leave_without_enter_is_noop() {
        if let Ok(mut driver) = Driver::new(false) {
            assert!(!driver.is_entered());
            assert!(driver.leave().is_ok());
        }
    }

    #[test]
    fn first_error_keeps_earliest_failure() {
        let steps = [
            Ok(()),
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "mouse")),
            Err(io::Error::new(io::ErrorKind::Other, "screen")),
        ];
        let err = first_error(steps).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(first_error([Ok(()), Ok(())]).is_ok());
    }

    #[test]
    fn leave_clears_entered_once() {
        // Without a tty, raw mode was never enabled, so disabling it is a no-op.
        let mut driver = Driver {
            writer: BufWriter::new(io::stdout()),
            front: Grid::new(1, 1),
            back: Grid::new(1, 1),
            full_repaint: false,
            mouse: false,
            entered: true,
        };
        let _ = driver.leave();
        assert!(!driver.is_entered());
        assert!(driver.leave().is_ok());
    }

    #[test]
    fn driver_draws_into_front_grid() {
        if let Ok(mut driver) = Driver::new(false) {
            driver.resize(Size::new(4, 2));
            driver.set_content(1, 1, 'z', CellStyle::DEFAULT);
            assert_eq!(driver.size(), Size::new(4, 2));
            assert_eq!(driver.front.get_cell(1, 1).unwrap().ch, 'z');
        }
    }
}
