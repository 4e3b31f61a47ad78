use core::fmt;

use bytemuck::{Pod, Zeroable};

use crate::error::{GeomError, Result};
use crate::Vector2;

/// Axis-aligned rectangle with top-left origin, binary-compatible with the
/// render boundary's four-float record.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Builds from a sequence of exactly four components
    /// (x, y, width, height).
    pub fn from_components<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = f32>,
    {
        let mut buf = [0.0f32; 4];
        let mut n = 0;
        for v in values {
            if n < buf.len() {
                buf[n] = v;
            }
            n += 1;
        }
        if n != buf.len() {
            return Err(GeomError::InvalidArity { expected: buf.len(), actual: n });
        }
        Ok(Self::new(buf[0], buf[1], buf[2], buf[3]))
    }

    /// Builds from edge coordinates.
    #[inline]
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    // ── Derived accessors ───────────────────────────────────────────────────

    /// The right edge, `x + width`.
    #[inline]
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    /// Moves the rectangle so its right edge lands on `value`; width is
    /// unchanged.
    #[inline]
    pub fn set_right(&mut self, value: f32) {
        self.x = value - self.width;
    }

    /// The bottom edge, `y + height`.
    #[inline]
    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    /// Moves the rectangle so its bottom edge lands on `value`; height is
    /// unchanged.
    #[inline]
    pub fn set_bottom(&mut self, value: f32) {
        self.y = value - self.height;
    }

    #[inline]
    pub fn center(self) -> Vector2 {
        Vector2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Repositions the rectangle around `value`; size is unchanged.
    #[inline]
    pub fn set_center(&mut self, value: impl Into<Vector2>) {
        let c = value.into();
        self.x = c.x - self.width * 0.5;
        self.y = c.y - self.height * 0.5;
    }

    #[inline]
    pub fn pos(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn set_pos(&mut self, value: impl Into<Vector2>) {
        let p = value.into();
        self.x = p.x;
        self.y = p.y;
    }

    #[inline]
    pub fn size(self) -> Vector2 {
        Vector2::new(self.width, self.height)
    }

    #[inline]
    pub fn set_size(&mut self, value: impl Into<Vector2>) {
        let s = value.into();
        self.width = s.x;
        self.height = s.y;
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.width, self.height]
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    // ── Geometry ────────────────────────────────────────────────────────────

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.x;
        let mut y = self.y;
        let mut w = self.width;
        let mut h = self.height;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rectangle::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vector2) -> bool {
        let r = self.normalized();
        p.x >= r.x && p.y >= r.y && p.x < r.x + r.width && p.y < r.y + r.height
    }

    #[inline]
    pub fn intersect(self, other: Rectangle) -> Option<Rectangle> {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.x.max(b.x);
        let y0 = a.y.max(b.y);
        let x1 = a.right().min(b.right());
        let y1 = a.bottom().min(b.bottom());

        let w = x1 - x0;
        let h = y1 - y0;

        if w <= 0.0 || h <= 0.0 {
            None
        } else {
            Some(Rectangle::new(x0, y0, w, h))
        }
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.width, self.height)
    }
}

impl From<[f32; 4]> for Rectangle {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl From<Rectangle> for [f32; 4] {
    #[inline]
    fn from(r: Rectangle) -> Self {
        r.to_array()
    }
}

impl From<(f32, f32, f32, f32)> for Rectangle {
    #[inline]
    fn from((x, y, w, h): (f32, f32, f32, f32)) -> Self {
        Self::new(x, y, w, h)
    }
}

/// Position and size pair.
impl From<(Vector2, Vector2)> for Rectangle {
    #[inline]
    fn from((pos, size): (Vector2, Vector2)) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }
}
