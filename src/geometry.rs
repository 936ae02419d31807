//! Core geometry types: Size, Region, Rect.
//!
//! Widgets are laid out with [`Rect`], an inclusive corner pair. Terminal sizes and
//! origin+size rectangles ([`Region`]) only appear at the boundary with backends and
//! layout helpers, and are converted to `Rect` there.

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A 2D size in terminal cells (width x height).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// A zero-sized size.
    pub const ZERO: Size = Size { width: 0, height: 0 };

    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Total area (width * height).
    #[inline]
    pub const fn area(self) -> i32 {
        self.width * self.height
    }

    /// Whether the point (x, y) is inside `0..width` and `0..height`.
    #[inline]
    pub const fn contains(self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }
}

impl From<(u16, u16)> for Size {
    fn from((width, height): (u16, u16)) -> Self {
        Size::new(width as i32, height as i32)
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A rectangular region in terminal cells defined by position and size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    /// An empty region at the origin.
    pub const EMPTY: Region = Region { x: 0, y: 0, width: 0, height: 0 };

    /// Create a new region.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// The right edge (exclusive): `x + width`.
    #[inline]
    pub const fn right(self) -> i32 {
        self.x + self.width
    }

    /// The bottom edge (exclusive): `y + height`.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y + self.height
    }

    /// The dimensions as a [`Size`].
    #[inline]
    pub const fn size(self) -> Size {
        Size { width: self.width, height: self.height }
    }
}

impl From<Rect> for Region {
    fn from(rect: Rect) -> Self {
        Region::new(rect.x0, rect.y0, rect.width(), rect.height())
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A rectangle on screen with absolute, inclusive corner coordinates.
///
/// `x` grows left to right and `y` top to bottom. A rect with `x1 < x0` or
/// `y1 < y0` is empty: it is a valid value (shrinking a tiny rect produces one)
/// but covers no cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    /// Create a rect from its top-left and bottom-right corners (inclusive).
    #[inline]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// The rect covering a whole grid of `size`, anchored at the origin.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self { x0: 0, y0: 0, x1: size.width - 1, y1: size.height - 1 }
    }

    /// Decompose into `(x0, y0, x1, y1)`.
    #[inline]
    pub const fn values(self) -> (i32, i32, i32, i32) {
        (self.x0, self.y0, self.x1, self.y1)
    }

    /// Number of columns covered, zero for an empty rect.
    #[inline]
    pub const fn width(self) -> i32 {
        let w = self.x1 - self.x0 + 1;
        if w > 0 { w } else { 0 }
    }

    /// Number of rows covered, zero for an empty rect.
    #[inline]
    pub const fn height(self) -> i32 {
        let h = self.y1 - self.y0 + 1;
        if h > 0 { h } else { 0 }
    }

    /// Whether the rect covers no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    /// Whether the cell (x, y) lies inside this rect.
    #[inline]
    pub const fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    /// Move every edge `n` cells inward. The result may be empty.
    #[inline]
    pub const fn shrink(self, n: i32) -> Rect {
        Rect { x0: self.x0 + n, y0: self.y0 + n, x1: self.x1 - n, y1: self.y1 - n }
    }
}

impl From<Region> for Rect {
    fn from(region: Region) -> Self {
        Rect::new(
            region.x,
            region.y,
            region.x + region.width - 1,
            region.y + region.height - 1,
        )
    }
}

// ===========================================================================
// Tests
// ===========================================================================
