//! Widget trait: render, resize, rect.
//!
//! The `Widget` trait is the contract every node of the widget tree fulfils. A
//! widget owns its [`Rect`] and draws itself into whatever [`Surface`] it is
//! handed; composites forward both calls to the children they own.

use crate::geometry::Rect;
use crate::render::Surface;

/// Core trait implemented by all widgets.
///
/// Widget is object-safe so tests and tools can hold `&dyn Widget`, but the tree
/// itself stores the closed [`AnyWidget`](super::AnyWidget) set.
pub trait Widget {
    /// Short type name used in logs (e.g. "List", "Split").
    fn widget_type(&self) -> &'static str;

    /// Draw into `surface` within the current rect.
    ///
    /// Must never fail: content that does not fit is truncated, and an empty
    /// rect draws nothing.
    fn render(&self, surface: &mut dyn Surface);

    /// Replace the widget's rect, propagating to children where there are any.
    fn resize(&mut self, rect: Rect);

    /// The rect assigned by the last resize.
    fn rect(&self) -> Rect;
}

// ===========================================================================
// Tests
// ===========================================================================
