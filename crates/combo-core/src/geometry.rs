#![forbid(unsafe_code)]

//! Geometric primitives used for pointer hit testing.

/// A rectangle for layout bounds and hit testing.
///
/// Uses host coordinates (0-indexed, origin at top-left). For a terminal host
/// one unit is one cell; for a list each row is one unit tall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
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

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// The rectangle directly below this one, same width, `height` rows tall.
    #[inline]
    pub const fn below(&self, height: u16) -> Rect {
        Rect::new(self.x, self.bottom(), self.width, height)
    }

    /// The single-row rectangle at `index` rows from the top, if it fits.
    pub fn row(&self, index: usize) -> Option<Rect> {
        let offset = u16::try_from(index).ok()?;
        if offset >= self.height {
            return None;
        }
        Some(Rect::new(self.x, self.y + offset, self.width, 1))
    }

    /// Row index (from the top) containing the point, if the point is inside.
    pub fn row_at(&self, x: u16, y: u16) -> Option<usize> {
        self.contains(x, y).then(|| usize::from(y - self.y))
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
}
