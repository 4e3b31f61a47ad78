use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Rem, RemAssign, Sub,
    SubAssign,
};

use bytemuck::{Pod, Zeroable};

use crate::error::{GeomError, Result};
use crate::swizzle::{self, Alphabet, Swizzle};

/// 2D vector, binary-compatible with the render boundary's two-float record.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    #[inline]
    pub const fn one() -> Self {
        Self::new(1.0, 1.0)
    }

    /// Builds from a sequence of exactly two components.
    pub fn from_components<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = f32>,
    {
        let mut buf = [0.0f32; 2];
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
        Ok(Self::new(buf[0], buf[1]))
    }

    /// Reads components by swizzle name over the `xy` / `uv` alphabets.
    ///
    /// One character yields [`Swizzle::Scalar`]; two to four yield a vector
    /// of the matching arity, so `"yx"` reverses the pair and `"xxyy"`
    /// widens it to a [`Vector4`](crate::Vector4).
    pub fn get(&self, name: &str) -> Result<Swizzle> {
        let lanes = swizzle::read_lanes(name, Alphabet::Vec2)?;
        let src = self.to_array();
        let mut vals = [0.0f32; 4];
        for (slot, lane) in lanes.iter().enumerate() {
            vals[slot] = src[lane];
        }
        Ok(swizzle::pack_read(vals, lanes.len()))
    }

    /// Writes components by swizzle name.
    ///
    /// The name may not repeat a component, and `values` must match its
    /// length exactly.
    pub fn set(&mut self, name: &str, values: &[f32]) -> Result<()> {
        let lanes = swizzle::write_lanes(name, Alphabet::Vec2, values.len())?;
        let mut dst = self.to_array();
        for (lane, &v) in lanes.iter().zip(values) {
            dst[lane] = v;
        }
        *self = Self::from(dst);
        Ok(())
    }

    /// Component by position; out-of-range indexes are an error.
    #[inline]
    pub fn component(&self, index: usize) -> Result<f32> {
        self.to_array()
            .get(index)
            .copied()
            .ok_or(GeomError::IndexOutOfRange { index, len: 2 })
    }

    #[inline]
    pub fn set_component(&mut self, index: usize, value: f32) -> Result<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            _ => return Err(GeomError::IndexOutOfRange { index, len: 2 }),
        }
        Ok(())
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Borrows the components as an array without copying; slice it for
    /// sub-range access.
    #[inline]
    pub fn as_array(&self) -> &[f32; 2] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [f32; 2] {
        bytemuck::cast_mut(self)
    }

    /// Elementwise floored division.
    ///
    /// Differs from `/` plus truncation for mixed-sign operands:
    /// `-7.0` over `2.0` floors to `-4.0`.
    #[inline]
    pub fn floor_div(self, rhs: impl Into<Self>) -> Self {
        let rhs = rhs.into();
        Self::new((self.x / rhs.x).floor(), (self.y / rhs.y).floor())
    }

    /// Elementwise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Conversions ─────────────────────────────────────────────────────────────

impl From<[f32; 2]> for Vector2 {
    #[inline]
    fn from(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }
}

impl From<Vector2> for [f32; 2] {
    #[inline]
    fn from(v: Vector2) -> Self {
        v.to_array()
    }
}

impl From<(f32, f32)> for Vector2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Splats the scalar across both components.
impl From<f32> for Vector2 {
    #[inline]
    fn from(s: f32) -> Self {
        Self::new(s, s)
    }
}

// ── Operators ───────────────────────────────────────────────────────────────

impl Add for Vector2 {
    type Output = Vector2;
    #[inline]
    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<f32> for Vector2 {
    type Output = Vector2;
    #[inline]
    fn add(self, rhs: f32) -> Vector2 {
        Vector2::new(self.x + rhs, self.y + rhs)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    #[inline]
    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub<f32> for Vector2 {
    type Output = Vector2;
    #[inline]
    fn sub(self, rhs: f32) -> Vector2 {
        Vector2::new(self.x - rhs, self.y - rhs)
    }
}

impl Mul for Vector2 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: f32) -> Vector2 {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div for Vector2 {
    type Output = Vector2;
    #[inline]
    fn div(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Div<f32> for Vector2 {
    type Output = Vector2;
    #[inline]
    fn div(self, rhs: f32) -> Vector2 {
        Vector2::new(self.x / rhs, self.y / rhs)
    }
}

impl Rem for Vector2 {
    type Output = Vector2;
    #[inline]
    fn rem(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x % rhs.x, self.y % rhs.y)
    }
}

impl Rem<f32> for Vector2 {
    type Output = Vector2;
    #[inline]
    fn rem(self, rhs: f32) -> Vector2 {
        Vector2::new(self.x % rhs, self.y % rhs)
    }
}

impl AddAssign for Vector2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vector2) {
        *self = *self + rhs;
    }
}

impl AddAssign<f32> for Vector2 {
    #[inline]
    fn add_assign(&mut self, rhs: f32) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector2) {
        *self = *self - rhs;
    }
}

impl SubAssign<f32> for Vector2 {
    #[inline]
    fn sub_assign(&mut self, rhs: f32) {
        *self = *self - rhs;
    }
}

impl MulAssign for Vector2 {
    #[inline]
    fn mul_assign(&mut self, rhs: Vector2) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for Vector2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign for Vector2 {
    #[inline]
    fn div_assign(&mut self, rhs: Vector2) {
        *self = *self / rhs;
    }
}

impl DivAssign<f32> for Vector2 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl RemAssign for Vector2 {
    #[inline]
    fn rem_assign(&mut self, rhs: Vector2) {
        *self = *self % rhs;
    }
}

impl RemAssign<f32> for Vector2 {
    #[inline]
    fn rem_assign(&mut self, rhs: f32) {
        *self = *self % rhs;
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    #[inline]
    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

/// Panics when `index` is 2 or more; use [`Vector2::component`] for the
/// checked form.
impl Index<usize> for Vector2 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.as_array()[index]
    }
}

impl IndexMut<usize> for Vector2 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.as_array_mut()[index]
    }
}
