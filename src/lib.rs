//! # termpane
//!
//! A minimal terminal widget compositor. Widgets own rectangular regions of a
//! character grid and draw themselves into a [`Surface`](render::Surface); a
//! [`Compositor`](compositor::Compositor) owns the tree, lays it out on resize,
//! and redraws everything once per event while merging keyboard input with lines
//! appended by background producers.
//!
//! ## Core Systems
//!
//! - **[`geometry`]**: inclusive-corner `Rect`, plus `Size` and `Region` at the terminal boundary
//! - **[`widget`]**: the `Widget` trait, the closed `AnyWidget` tree node, list scroll state
//! - **[`widgets`]**: Text, List, Bordered and Split widgets
//! - **[`event`]**: input events, key bindings, producer data channel
//! - **[`render`]**: cell grid surface and the crossterm driver
//! - **[`compositor`]**: configuration and the render/event loop
//! - **[`logging`]**: file logging and the terminal-restoring panic hook
//! - **[`testing`]**: headless `Pilot` and snapshot helpers

// Foundation
pub mod error;
pub mod geometry;

// Widget system
pub mod widget;
pub mod widgets;

// Events
pub mod event;

// Rendering
pub mod render;

// Application
pub mod compositor;
pub mod logging;

// Testing
pub mod testing;

pub use error::{Error, Result};
