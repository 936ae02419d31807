//! Event system: terminal input, key bindings, data events from producers.

pub mod binding;
pub mod data;
pub mod input;

pub use binding::{Action, KeyBindingRegistry};
pub use data::{DataEvent, DataSender};
pub use input::{InputEvent, Key, KeyEvent, Modifiers, MouseAction, MouseEvent};
