#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All coordinates are terminal cells (0-indexed, origin at top-left). Edge
//! arithmetic saturates at `u16::MAX` instead of wrapping, and areas are
//! widened to `u32` so `width * height` never overflows.

/// A point in terminal coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
}

impl Position {
    /// The top-left corner of the screen.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new position.
    #[inline]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl From<(u16, u16)> for Position {
    fn from((x, y): (u16, u16)) -> Self {
        Self::new(x, y)
    }
}

impl From<Rect> for Position {
    fn from(rect: Rect) -> Self {
        rect.as_position()
    }
}

/// Width and height in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Size {
    /// A size with no extent.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Area in cells, widened so it cannot overflow.
    #[inline]
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Check if either dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Clamp both dimensions to at most `max`.
    #[inline]
    pub fn clamp_max(self, max: Size) -> Size {
        Size::new(self.width.min(max.width), self.height.min(max.height))
    }

    /// Clamp both dimensions to at least `min`.
    #[inline]
    pub fn clamp_min(self, min: Size) -> Size {
        Size::new(self.width.max(min.width), self.height.max(min.height))
    }
}

impl From<(u16, u16)> for Size {
    fn from((width, height): (u16, u16)) -> Self {
        Self::new(width, height)
    }
}

impl From<Rect> for Size {
    fn from(rect: Rect) -> Self {
        rect.as_size()
    }
}

/// Symmetric padding: `horizontal` is applied to both the left and right
/// sides, `vertical` to both the top and bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Margin {
    /// Cells removed from the left and from the right.
    pub horizontal: u16,
    /// Cells removed from the top and from the bottom.
    pub vertical: u16,
}

impl Margin {
    /// Create a margin from its horizontal and vertical components.
    pub const fn new(horizontal: u16, vertical: u16) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Same margin on every side.
    pub const fn uniform(value: u16) -> Self {
        Self::new(value, value)
    }
}

impl From<u16> for Margin {
    fn from(value: u16) -> Self {
        Self::uniform(value)
    }
}

/// A rectangle for layout bounds and hit testing.
///
/// Uses terminal coordinates (0-indexed, origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// A zero-sized rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Left edge (inclusive). Alias for `self.x`.
    #[inline]
    pub const fn left(&self) -> u16 {
        self.x
    }

    /// Top edge (inclusive). Alias for `self.y`.
    #[inline]
    pub const fn top(&self) -> u16 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Area in cells.
    #[inline]
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Top-left corner.
    #[inline]
    pub const fn as_position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Dimensions without the origin.
    #[inline]
    pub const fn as_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if a point is inside the rectangle.
    ///
    /// The left and top edges are inside, the right and bottom edges are not.
    #[inline]
    pub const fn contains(&self, position: Position) -> bool {
        position.x >= self.x
            && position.x < self.right()
            && position.y >= self.y
            && position.y < self.bottom()
    }

    /// Shrink the rectangle by `margin` on every side.
    ///
    /// When the margin does not fit, the result has zero size and sits
    /// inside `self`, as close to the margin offset as the size allows.
    pub const fn inner(&self, margin: Margin) -> Rect {
        let doubled_horizontal = margin.horizontal.saturating_mul(2);
        let doubled_vertical = margin.vertical.saturating_mul(2);
        if self.width < doubled_horizontal || self.height < doubled_vertical {
            let dx = if margin.horizontal < self.width / 2 {
                margin.horizontal
            } else {
                self.width / 2
            };
            let dy = if margin.vertical < self.height / 2 {
                margin.vertical
            } else {
                self.height / 2
            };
            return Rect::new(self.x.saturating_add(dx), self.y.saturating_add(dy), 0, 0);
        }
        Rect {
            x: self.x.saturating_add(margin.horizontal),
            y: self.y.saturating_add(margin.vertical),
            width: self.width - doubled_horizontal,
            height: self.height - doubled_vertical,
        }
    }

    /// Grow the rectangle by `margin` on every side.
    ///
    /// The origin stops at 0 and the far edges stop at `u16::MAX`.
    pub const fn outer(&self, margin: Margin) -> Rect {
        let x = self.x.saturating_sub(margin.horizontal);
        let y = self.y.saturating_sub(margin.vertical);
        let right = self.right().saturating_add(margin.horizontal);
        let bottom = self.bottom().saturating_add(margin.vertical);
        Rect {
            x,
            y,
            width: right - x,
            height: bottom - y,
        }
    }

    /// Compute the intersection with another rectangle.
    ///
    /// Non-overlapping rectangles yield a zero-area rectangle placed at the
    /// larger of the two origins.
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect {
            x,
            y,
            width: right.saturating_sub(x),
            height: bottom.saturating_sub(y),
        }
    }

    /// Compute the intersection with another rectangle, returning `None` if no overlap.
    #[inline]
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let inter = self.intersection(other);
        (!inter.is_empty()).then_some(inter)
    }

    /// Check whether the two rectangles share at least one cell.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.intersection(other).is_empty()
    }

    /// Create a new rectangle that is the union of this rectangle and another.
    ///
    /// The result is the smallest rectangle that contains both.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());

        Rect {
            x,
            y,
            width: right.saturating_sub(x),
            height: bottom.saturating_sub(y),
        }
    }

    /// Move and shrink this rectangle so it fits inside `other`.
    ///
    /// The size is capped to `other`'s size first, then the origin is pushed
    /// inside `other`'s bounds.
    pub fn clamp(&self, other: &Rect) -> Rect {
        let width = self.width.min(other.width);
        let height = self.height.min(other.height);
        let x = self
            .x
            .clamp(other.x, other.right().saturating_sub(width).max(other.x));
        let y = self
            .y
            .clamp(other.y, other.bottom().saturating_sub(height).max(other.y));
        Rect::new(x, y, width, height)
    }

    /// Iterate over the one-row strips of this rectangle, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = Rect> + '_ {
        (self.y..self.bottom()).map(move |y| Rect::new(self.x, y, self.width, 1))
    }

    /// Iterate over the one-column strips of this rectangle, left to right.
    pub fn columns(&self) -> impl Iterator<Item = Rect> + '_ {
        (self.x..self.right()).map(move |x| Rect::new(x, self.y, 1, self.height))
    }
}

impl From<(Position, Size)> for Rect {
    fn from((position, size): (Position, Size)) -> Self {
        Rect::new(position.x, position.y, size.width, size.height)
    }
}
