use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Rem, RemAssign, Sub,
    SubAssign,
};

use bytemuck::{Pod, Zeroable};

use crate::error::{GeomError, Result};
use crate::swizzle::{self, Alphabet, Swizzle};
use crate::{Vector2, Vector3};

/// 4D vector, binary-compatible with the render boundary's four-float record.
///
/// The boundary also uses this layout for quaternions, which is why
/// [`zero`](Self::zero) is not the all-zero value.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector4 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// `(0, 0, 0, 1)`.
    ///
    /// Invariant:
    /// - `w = 1` keeps the value usable as a rotation identity on the
    ///   quaternion side of the boundary; the all-zero quaternion is
    ///   degenerate.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn one() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Builds from a sequence of exactly four components.
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

    /// Reads components by swizzle name over the `xyzw` / `uv` / `rgba`
    /// alphabets.
    pub fn get(&self, name: &str) -> Result<Swizzle> {
        let lanes = swizzle::read_lanes(name, Alphabet::Vec4)?;
        let src = self.to_array();
        let mut vals = [0.0f32; 4];
        for (slot, lane) in lanes.iter().enumerate() {
            vals[slot] = src[lane];
        }
        Ok(swizzle::pack_read(vals, lanes.len()))
    }

    /// Writes components by swizzle name.
    pub fn set(&mut self, name: &str, values: &[f32]) -> Result<()> {
        let lanes = swizzle::write_lanes(name, Alphabet::Vec4, values.len())?;
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
            .ok_or(GeomError::IndexOutOfRange { index, len: 4 })
    }

    #[inline]
    pub fn set_component(&mut self, index: usize, value: f32) -> Result<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            3 => self.w = value,
            _ => return Err(GeomError::IndexOutOfRange { index, len: 4 }),
        }
        Ok(())
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Borrows the components as an array without copying; slice it for
    /// sub-range access.
    #[inline]
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [f32; 4] {
        bytemuck::cast_mut(self)
    }

    /// The first three components.
    #[inline]
    pub const fn xyz(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Elementwise floored division.
    #[inline]
    pub fn floor_div(self, rhs: impl Into<Self>) -> Self {
        let rhs = rhs.into();
        Self::new(
            (self.x / rhs.x).floor(),
            (self.y / rhs.y).floor(),
            (self.z / rhs.z).floor(),
            (self.w / rhs.w).floor(),
        )
    }

    /// Elementwise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs(), self.w.abs())
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

// ── Conversions ─────────────────────────────────────────────────────────────

impl From<[f32; 4]> for Vector4 {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl From<Vector4> for [f32; 4] {
    #[inline]
    fn from(v: Vector4) -> Self {
        v.to_array()
    }
}

impl From<(f32, f32, f32, f32)> for Vector4 {
    #[inline]
    fn from((x, y, z, w): (f32, f32, f32, f32)) -> Self {
        Self::new(x, y, z, w)
    }
}

/// Extends a triple with an explicit `w`.
impl From<(Vector3, f32)> for Vector4 {
    #[inline]
    fn from((v, w): (Vector3, f32)) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }
}

/// Concatenates two pairs.
impl From<(Vector2, Vector2)> for Vector4 {
    #[inline]
    fn from((a, b): (Vector2, Vector2)) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }
}

/// Splats the scalar across all four components.
impl From<f32> for Vector4 {
    #[inline]
    fn from(s: f32) -> Self {
        Self::new(s, s, s, s)
    }
}

// ── Operators ───────────────────────────────────────────────────────────────

impl Add for Vector4 {
    type Output = Vector4;
    #[inline]
    fn add(self, rhs: Vector4) -> Vector4 {
        Vector4::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Add<f32> for Vector4 {
    type Output = Vector4;
    #[inline]
    fn add(self, rhs: f32) -> Vector4 {
        Vector4::new(self.x + rhs, self.y + rhs, self.z + rhs, self.w + rhs)
    }
}

impl Sub for Vector4 {
    type Output = Vector4;
    #[inline]
    fn sub(self, rhs: Vector4) -> Vector4 {
        Vector4::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Sub<f32> for Vector4 {
    type Output = Vector4;
    #[inline]
    fn sub(self, rhs: f32) -> Vector4 {
        Vector4::new(self.x - rhs, self.y - rhs, self.z - rhs, self.w - rhs)
    }
}

impl Mul for Vector4 {
    type Output = Vector4;
    #[inline]
    fn mul(self, rhs: Vector4) -> Vector4 {
        Vector4::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z, self.w * rhs.w)
    }
}

impl Mul<f32> for Vector4 {
    type Output = Vector4;
    #[inline]
    fn mul(self, rhs: f32) -> Vector4 {
        Vector4::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Div for Vector4 {
    type Output = Vector4;
    #[inline]
    fn div(self, rhs: Vector4) -> Vector4 {
        Vector4::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z, self.w / rhs.w)
    }
}

impl Div<f32> for Vector4 {
    type Output = Vector4;
    #[inline]
    fn div(self, rhs: f32) -> Vector4 {
        Vector4::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

impl Rem for Vector4 {
    type Output = Vector4;
    #[inline]
    fn rem(self, rhs: Vector4) -> Vector4 {
        Vector4::new(self.x % rhs.x, self.y % rhs.y, self.z % rhs.z, self.w % rhs.w)
    }
}

impl Rem<f32> for Vector4 {
    type Output = Vector4;
    #[inline]
    fn rem(self, rhs: f32) -> Vector4 {
        Vector4::new(self.x % rhs, self.y % rhs, self.z % rhs, self.w % rhs)
    }
}

impl AddAssign for Vector4 {
    #[inline]
    fn add_assign(&mut self, rhs: Vector4) {
        *self = *self + rhs;
    }
}

impl AddAssign<f32> for Vector4 {
    #[inline]
    fn add_assign(&mut self, rhs: f32) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector4 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector4) {
        *self = *self - rhs;
    }
}

impl SubAssign<f32> for Vector4 {
    #[inline]
    fn sub_assign(&mut self, rhs: f32) {
        *self = *self - rhs;
    }
}

impl MulAssign for Vector4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Vector4) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for Vector4 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign for Vector4 {
    #[inline]
    fn div_assign(&mut self, rhs: Vector4) {
        *self = *self / rhs;
    }
}

impl DivAssign<f32> for Vector4 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl RemAssign for Vector4 {
    #[inline]
    fn rem_assign(&mut self, rhs: Vector4) {
        *self = *self % rhs;
    }
}

impl RemAssign<f32> for Vector4 {
    #[inline]
    fn rem_assign(&mut self, rhs: f32) {
        *self = *self % rhs;
    }
}

impl Neg for Vector4 {
    type Output = Vector4;
    #[inline]
    fn neg(self) -> Vector4 {
        Vector4::new(-self.x, -self.y, -self.z, -self.w)
    }
}

/// Panics when `index` is 4 or more; use [`Vector4::component`] for the
/// checked form.
impl Index<usize> for Vector4 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.as_array()[index]
    }
}

impl IndexMut<usize> for Vector4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.as_array_mut()[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32, z: f32, w: f32) -> Vector4 {
        Vector4::new(x, y, z, w)
    }

    // ── Construction ────────────────────────────────────────────────────────

    #[test]
    fn zero_is_the_identity_quaternion() {
        assert_eq!(Vector4::zero(), v(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn from_components_requires_four() {
        assert_eq!(
            Vector4::from_components([1.0, 2.0, 3.0, 4.0]),
            Ok(v(1.0, 2.0, 3.0, 4.0))
        );
        assert_eq!(
            Vector4::from_components([1.0, 2.0, 3.0, 4.0, 5.0]),
            Err(GeomError::InvalidArity { expected: 4, actual: 5 })
        );
    }

    #[test]
    fn component_round_trip() {
        let mut q = Vector4::zero();
        for i in 0..4 {
            q.set_component(i, i as f32).unwrap();
        }
        assert_eq!(q, v(0.0, 1.0, 2.0, 3.0));
        assert_eq!(q[3], 3.0);
        assert_eq!(
            q.component(4),
            Err(GeomError::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn composes_from_smaller_vectors() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, 4.0);
        assert_eq!(Vector4::from((a, b)), v(1.0, 2.0, 3.0, 4.0));
        assert_eq!(
            Vector4::from((Vector3::new(1.0, 2.0, 3.0), 4.0)),
            v(1.0, 2.0, 3.0, 4.0)
        );
    }

    // ── Swizzled access ─────────────────────────────────────────────────────

    #[test]
    fn get_full_reversal() {
        let q = v(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.get("wzyx"), Ok(Swizzle::Vector4(v(4.0, 3.0, 2.0, 1.0))));
        assert_eq!(q.get("a"), Ok(Swizzle::Scalar(4.0)));
    }

    #[test]
    fn get_narrows() {
        let q = v(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.get("xyz"), Ok(Swizzle::Vector3(q.xyz())));
        assert_eq!(q.get("wx"), Ok(Swizzle::Vector2(Vector2::new(4.0, 1.0))));
    }

    #[test]
    fn set_by_color_letters() {
        let mut q = v(0.0, 0.0, 0.0, 0.0);
        q.set("rgba", &[0.1, 0.2, 0.3, 0.4]).unwrap();
        assert_eq!(q, v(0.1, 0.2, 0.3, 0.4));
        assert_eq!(
            q.set("ra", &[0.0, 0.0, 0.0]),
            Err(GeomError::LengthMismatch { expected: 2, actual: 3 })
        );
    }

    // ── Arithmetic ──────────────────────────────────────────────────────────

    #[test]
    fn arithmetic_covers_w() {
        let a = v(1.0, 2.0, 3.0, 4.0);
        let b = v(2.0, 2.0, 2.0, 2.0);
        assert_eq!(a + b, v(3.0, 4.0, 5.0, 6.0));
        assert_eq!(a * 2.0, v(2.0, 4.0, 6.0, 8.0));
        assert_eq!(-a, v(-1.0, -2.0, -3.0, -4.0));
        assert_eq!(a.floor_div(2.0), v(0.0, 1.0, 1.0, 2.0));
    }

    #[test]
    fn assign_ops() {
        let mut a = v(1.0, 2.0, 3.0, 4.0);
        a += 1.0;
        a *= v(2.0, 2.0, 2.0, 2.0);
        assert_eq!(a, v(4.0, 6.0, 8.0, 10.0));
    }

    // ── Layout ──────────────────────────────────────────────────────────────

    #[test]
    fn layout_matches_four_floats() {
        assert_eq!(core::mem::size_of::<Vector4>(), 16);
        assert_eq!(core::mem::align_of::<Vector4>(), 4);
        let q = v(1.0, 2.0, 3.0, 4.0);
        assert_eq!(bytemuck::cast::<Vector4, [f32; 4]>(q), [1.0, 2.0, 3.0, 4.0]);
    }
}
