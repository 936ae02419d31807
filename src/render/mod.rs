//! Rendering pipeline: cells, the surface capability, the in-memory grid and the
//! terminal driver.

pub mod cell;
pub mod driver;
pub mod grid;
pub mod surface;

pub use cell::{CellStyle, StyledCell};
pub use driver::Driver;
pub use grid::{CellUpdate, Grid};
pub use surface::Surface;
