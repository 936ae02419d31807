//! Built-in widgets: Text, List, Bordered, Split.

pub mod bordered;
pub mod list;
pub mod split;
pub mod text;

pub use bordered::BorderedWidget;
pub use list::ListWidget;
pub use split::{Axis, SplitWidget};
pub use text::TextWidget;
