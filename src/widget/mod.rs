//! Widget system: trait, the closed node set, list scroll state.

pub mod node;
pub mod scroll;
pub mod traits;

pub use node::AnyWidget;
pub use scroll::ScrollState;
pub use traits::Widget;
