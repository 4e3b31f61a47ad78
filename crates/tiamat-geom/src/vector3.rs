use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Rem, RemAssign, Sub,
    SubAssign,
};

use bytemuck::{Pod, Zeroable};

use crate::error::{GeomError, Result};
use crate::swizzle::{self, Alphabet, Swizzle};
use crate::Vector2;

/// 3D vector, binary-compatible with the render boundary's three-float record.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn one() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Builds from a sequence of exactly three components.
    pub fn from_components<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = f32>,
    {
        let mut buf = [0.0f32; 3];
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
        Ok(Self::new(buf[0], buf[1], buf[2]))
    }

    /// Reads components by swizzle name over the `xyz` / `uv` / `rgb`
    /// alphabets.
    pub fn get(&self, name: &str) -> Result<Swizzle> {
        let lanes = swizzle::read_lanes(name, Alphabet::Vec3)?;
        let src = self.to_array();
        let mut vals = [0.0f32; 4];
        for (slot, lane) in lanes.iter().enumerate() {
            vals[slot] = src[lane];
        }
        Ok(swizzle::pack_read(vals, lanes.len()))
    }

    /// Writes components by swizzle name.
    pub fn set(&mut self, name: &str, values: &[f32]) -> Result<()> {
        let lanes = swizzle::write_lanes(name, Alphabet::Vec3, values.len())?;
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
            .ok_or(GeomError::IndexOutOfRange { index, len: 3 })
    }

    #[inline]
    pub fn set_component(&mut self, index: usize, value: f32) -> Result<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => return Err(GeomError::IndexOutOfRange { index, len: 3 }),
        }
        Ok(())
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Borrows the components as an array without copying; slice it for
    /// sub-range access.
    #[inline]
    pub fn as_array(&self) -> &[f32; 3] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [f32; 3] {
        bytemuck::cast_mut(self)
    }

    /// Elementwise floored division.
    #[inline]
    pub fn floor_div(self, rhs: impl Into<Self>) -> Self {
        let rhs = rhs.into();
        Self::new(
            (self.x / rhs.x).floor(),
            (self.y / rhs.y).floor(),
            (self.z / rhs.z).floor(),
        )
    }

    /// Elementwise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ── Conversions ─────────────────────────────────────────────────────────────

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl From<(f32, f32, f32)> for Vector3 {
    #[inline]
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

/// Extends a pair with an explicit `z`.
impl From<(Vector2, f32)> for Vector3 {
    #[inline]
    fn from((v, z): (Vector2, f32)) -> Self {
        Self::new(v.x, v.y, z)
    }
}

/// Splats the scalar across all three components.
impl From<f32> for Vector3 {
    #[inline]
    fn from(s: f32) -> Self {
        Self::new(s, s, s)
    }
}

// ── Operators ───────────────────────────────────────────────────────────────

impl Add for Vector3 {
    type Output = Vector3;
    #[inline]
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Add<f32> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn add(self, rhs: f32) -> Vector3 {
        Vector3::new(self.x + rhs, self.y + rhs, self.z + rhs)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    #[inline]
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Sub<f32> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn sub(self, rhs: f32) -> Vector3 {
        Vector3::new(self.x - rhs, self.y - rhs, self.z - rhs)
    }
}

impl Mul for Vector3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: f32) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div for Vector3 {
    type Output = Vector3;
    #[inline]
    fn div(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Div<f32> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn div(self, rhs: f32) -> Vector3 {
        Vector3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Rem for Vector3 {
    type Output = Vector3;
    #[inline]
    fn rem(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x % rhs.x, self.y % rhs.y, self.z % rhs.z)
    }
}

impl Rem<f32> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn rem(self, rhs: f32) -> Vector3 {
        Vector3::new(self.x % rhs, self.y % rhs, self.z % rhs)
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vector3) {
        *self = *self + rhs;
    }
}

impl AddAssign<f32> for Vector3 {
    #[inline]
    fn add_assign(&mut self, rhs: f32) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector3) {
        *self = *self - rhs;
    }
}

impl SubAssign<f32> for Vector3 {
    #[inline]
    fn sub_assign(&mut self, rhs: f32) {
        *self = *self - rhs;
    }
}

impl MulAssign for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Vector3) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign for Vector3 {
    #[inline]
    fn div_assign(&mut self, rhs: Vector3) {
        *self = *self / rhs;
    }
}

impl DivAssign<f32> for Vector3 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl RemAssign for Vector3 {
    #[inline]
    fn rem_assign(&mut self, rhs: Vector3) {
        *self = *self % rhs;
    }
}

impl RemAssign<f32> for Vector3 {
    #[inline]
    fn rem_assign(&mut self, rhs: f32) {
        *self = *self % rhs;
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    #[inline]
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

/// Panics when `index` is 3 or more; use [`Vector3::component`] for the
/// checked form.
impl Index<usize> for Vector3 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.as_array()[index]
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.as_array_mut()[index]
    }
}
