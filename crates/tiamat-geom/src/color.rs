use core::fmt;
use core::ops::{Index, IndexMut};

use bytemuck::{Pod, Zeroable};

use crate::error::{GeomError, Result};
use crate::swizzle::{self, Alphabet};
use crate::{colorspace, Vector4};

/// 8-bit RGBA color, binary-compatible with the render boundary's
/// four-byte record.
///
/// Invariant:
/// - Channels are straight alpha, `0`–`255`.
/// - The packed form is `0xRRGGBBAA`; [`from_packed`](Self::from_packed) and
///   [`to_packed`](Self::to_packed) round-trip exactly.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Tagged result of a swizzled read on a [`Color`].
///
/// Two or three channels come back as plain arrays; naming all four yields
/// a full `Color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSwizzle {
    Scalar(u8),
    Pair([u8; 2]),
    Triple([u8; 3]),
    Color(Color),
}

impl Color {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black, the boundary's zero color.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0, 0, 0, 255)
    }

    /// Opaque white.
    #[inline]
    pub const fn one() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// Builds from a sequence of exactly four channel values, keeping the
    /// low byte of each.
    ///
    /// The boundary's channels are 8-bit, so wider integers wrap exactly as
    /// the native record would store them.
    pub fn from_components<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = i64>,
    {
        let mut buf = [0u8; 4];
        let mut n = 0;
        for v in values {
            if n < buf.len() {
                buf[n] = v as u8;
            }
            n += 1;
        }
        if n != buf.len() {
            return Err(GeomError::InvalidArity { expected: buf.len(), actual: n });
        }
        Ok(Self::new(buf[0], buf[1], buf[2], buf[3]))
    }

    /// Unpacks `0xRRGGBBAA`.
    #[inline]
    pub const fn from_packed(value: u32) -> Self {
        Self::new(
            (value >> 24) as u8,
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        )
    }

    /// Packs into `0xRRGGBBAA`.
    #[inline]
    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 24)
            | ((self.g as u32) << 16)
            | ((self.b as u32) << 8)
            | self.a as u32
    }

    /// Reads channels by swizzle name over the `rgba` alphabet.
    pub fn get(&self, name: &str) -> Result<ColorSwizzle> {
        let lanes = swizzle::read_lanes(name, Alphabet::Rgba)?;
        let src = self.to_array();
        let mut vals = [0u8; 4];
        for (slot, lane) in lanes.iter().enumerate() {
            vals[slot] = src[lane];
        }
        Ok(match lanes.len() {
            1 => ColorSwizzle::Scalar(vals[0]),
            2 => ColorSwizzle::Pair([vals[0], vals[1]]),
            3 => ColorSwizzle::Triple([vals[0], vals[1], vals[2]]),
            _ => ColorSwizzle::Color(Color::new(vals[0], vals[1], vals[2], vals[3])),
        })
    }

    /// Writes channels by swizzle name.
    ///
    /// The name may not repeat a channel, and `values` must match its
    /// length exactly.
    pub fn set(&mut self, name: &str, values: &[u8]) -> Result<()> {
        let lanes = swizzle::write_lanes(name, Alphabet::Rgba, values.len())?;
        let mut dst = self.to_array();
        for (lane, &v) in lanes.iter().zip(values) {
            dst[lane] = v;
        }
        *self = Self::from(dst);
        Ok(())
    }

    /// Channel by position; out-of-range indexes are an error.
    #[inline]
    pub fn component(&self, index: usize) -> Result<u8> {
        self.to_array()
            .get(index)
            .copied()
            .ok_or(GeomError::IndexOutOfRange { index, len: 4 })
    }

    #[inline]
    pub fn set_component(&mut self, index: usize, value: u8) -> Result<()> {
        match index {
            0 => self.r = value,
            1 => self.g = value,
            2 => self.b = value,
            3 => self.a = value,
            _ => return Err(GeomError::IndexOutOfRange { index, len: 4 }),
        }
        Ok(())
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Borrows the channels as an array without copying; slice it for
    /// sub-range access.
    #[inline]
    pub fn as_array(&self) -> &[u8; 4] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [u8; 4] {
        bytemuck::cast_mut(self)
    }

    // ── Colorspace views ────────────────────────────────────────────────────

    /// Channels as normalized floats, alpha in the fourth slot.
    pub fn normalized(&self) -> Vector4 {
        Vector4::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        )
    }

    /// Writes normalized channels back; accepts 3 or 4 values.
    ///
    /// Each value is scaled by 255 and truncated. A fourth value replaces
    /// alpha; with three, alpha keeps its current value.
    pub fn set_normalized(&mut self, values: &[f32]) -> Result<()> {
        check_triplet(values)?;
        self.r = (values[0] * 255.0) as u8;
        self.g = (values[1] * 255.0) as u8;
        self.b = (values[2] * 255.0) as u8;
        if let Some(&a) = values.get(3) {
            self.a = (a * 255.0) as u8;
        }
        Ok(())
    }

    /// Hue, saturation, value, and normalized alpha.
    pub fn hsv(&self) -> Vector4 {
        let n = self.normalized();
        let (h, s, v) = colorspace::rgb_to_hsv(n.x, n.y, n.z);
        Vector4::new(h, s, v, n.w)
    }

    /// Writes from hue / saturation / value; accepts 3 or 4 values.
    ///
    /// Only the triplet is converted; a fourth value is accepted for
    /// symmetry with the getter and ignored, so alpha never changes here.
    pub fn set_hsv(&mut self, values: &[f32]) -> Result<()> {
        check_triplet(values)?;
        let (r, g, b) = colorspace::hsv_to_rgb(values[0], values[1], values[2]);
        self.set_normalized(&[r, g, b])
    }

    /// Hue, lightness, saturation, and normalized alpha.
    pub fn hls(&self) -> Vector4 {
        let n = self.normalized();
        let (h, l, s) = colorspace::rgb_to_hls(n.x, n.y, n.z);
        Vector4::new(h, l, s, n.w)
    }

    /// Writes from hue / lightness / saturation; accepts 3 or 4 values.
    pub fn set_hls(&mut self, values: &[f32]) -> Result<()> {
        check_triplet(values)?;
        let (r, g, b) = colorspace::hls_to_rgb(values[0], values[1], values[2]);
        self.set_normalized(&[r, g, b])
    }

    /// Luma, in-phase, quadrature, and normalized alpha.
    pub fn yiq(&self) -> Vector4 {
        let n = self.normalized();
        let (y, i, q) = colorspace::rgb_to_yiq(n.x, n.y, n.z);
        Vector4::new(y, i, q, n.w)
    }

    /// Writes from luma / in-phase / quadrature; accepts 3 or 4 values.
    pub fn set_yiq(&mut self, values: &[f32]) -> Result<()> {
        check_triplet(values)?;
        let (r, g, b) = colorspace::yiq_to_rgb(values[0], values[1], values[2]);
        self.set_normalized(&[r, g, b])
    }

    /// Copy with alpha replaced by `alpha` (clamped to `[0, 1]`) times 255,
    /// matching the boundary's fade helper.
    #[inline]
    pub fn fade(self, alpha: f32) -> Self {
        Self::new(self.r, self.g, self.b, (alpha.clamp(0.0, 1.0) * 255.0) as u8)
    }
}

/// Colorspace setters take the bare triplet or the full getter tuple.
fn check_triplet(values: &[f32]) -> Result<()> {
    if values.len() < 3 || values.len() > 4 {
        let expected = if values.len() < 3 { 3 } else { 4 };
        return Err(GeomError::LengthMismatch { expected, actual: values.len() });
    }
    Ok(())
}

// ── Predefined palette ──────────────────────────────────────────────────────

/// The native library's named colors.
impl Color {
    pub const LIGHTGRAY: Color = Color::new(200, 200, 200, 255);
    pub const GRAY: Color = Color::new(130, 130, 130, 255);
    pub const DARKGRAY: Color = Color::new(80, 80, 80, 255);
    pub const YELLOW: Color = Color::new(253, 249, 0, 255);
    pub const GOLD: Color = Color::new(255, 203, 0, 255);
    pub const ORANGE: Color = Color::new(255, 161, 0, 255);
    pub const PINK: Color = Color::new(255, 109, 194, 255);
    pub const RED: Color = Color::new(230, 41, 55, 255);
    pub const MAROON: Color = Color::new(190, 33, 55, 255);
    pub const GREEN: Color = Color::new(0, 228, 48, 255);
    pub const LIME: Color = Color::new(0, 158, 47, 255);
    pub const DARKGREEN: Color = Color::new(0, 117, 44, 255);
    pub const SKYBLUE: Color = Color::new(102, 191, 255, 255);
    pub const BLUE: Color = Color::new(0, 121, 241, 255);
    pub const DARKBLUE: Color = Color::new(0, 82, 172, 255);
    pub const PURPLE: Color = Color::new(200, 122, 255, 255);
    pub const VIOLET: Color = Color::new(135, 60, 190, 255);
    pub const DARKPURPLE: Color = Color::new(112, 31, 126, 255);
    pub const BEIGE: Color = Color::new(211, 176, 131, 255);
    pub const BROWN: Color = Color::new(127, 106, 79, 255);
    pub const DARKBROWN: Color = Color::new(76, 63, 47, 255);
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const BLANK: Color = Color::new(0, 0, 0, 0);
    pub const MAGENTA: Color = Color::new(255, 0, 255, 255);
    pub const RAYWHITE: Color = Color::new(245, 245, 245, 255);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl From<[u8; 4]> for Color {
    #[inline]
    fn from(a: [u8; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl From<Color> for [u8; 4] {
    #[inline]
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    #[inline]
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::new(r, g, b, a)
    }
}

/// Panics when `index` is 4 or more; use [`Color::component`] for the
/// checked form.
impl Index<usize> for Color {
    type Output = u8;
    #[inline]
    fn index(&self, index: usize) -> &u8 {
        &self.as_array()[index]
    }
}

impl IndexMut<usize> for Color {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        &mut self.as_array_mut()[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Construction ────────────────────────────────────────────────────────

    #[test]
    fn zero_is_opaque_black() {
        assert_eq!(Color::zero(), Color::new(0, 0, 0, 255));
        assert_eq!(Color::one(), Color::WHITE);
    }

    #[test]
    fn from_components_keeps_the_low_byte() {
        assert_eq!(
            Color::from_components([300, -1, 0, 255]),
            Ok(Color::new(44, 255, 0, 255))
        );
    }

    #[test]
    fn from_components_requires_four() {
        assert_eq!(
            Color::from_components([1, 2, 3]),
            Err(GeomError::InvalidArity { expected: 4, actual: 3 })
        );
    }

    // ── Packed form ─────────────────────────────────────────────────────────

    #[test]
    fn packed_layout_is_rrggbbaa() {
        assert_eq!(Color::new(0xAA, 0xBB, 0xCC, 0xDD).to_packed(), 0xAABBCCDD);
        assert_eq!(Color::from_packed(0x11223344), Color::new(0x11, 0x22, 0x33, 0x44));
        assert_eq!(Color::RED.to_packed(), 0xE62937FF);
    }

    #[test]
    fn packed_round_trips_for_the_palette() {
        for c in [
            Color::LIGHTGRAY,
            Color::GOLD,
            Color::MAROON,
            Color::SKYBLUE,
            Color::DARKPURPLE,
            Color::BLANK,
            Color::RAYWHITE,
        ] {
            assert_eq!(Color::from_packed(c.to_packed()), c);
        }
    }

    // ── Swizzled access ─────────────────────────────────────────────────────

    #[test]
    fn get_by_channel_count() {
        let c = Color::new(10, 20, 30, 40);
        assert_eq!(c.get("g"), Ok(ColorSwizzle::Scalar(20)));
        assert_eq!(c.get("ar"), Ok(ColorSwizzle::Pair([40, 10])));
        assert_eq!(c.get("bgr"), Ok(ColorSwizzle::Triple([30, 20, 10])));
        assert_eq!(
            c.get("abgr"),
            Ok(ColorSwizzle::Color(Color::new(40, 30, 20, 10)))
        );
    }

    #[test]
    fn positional_letters_do_not_apply() {
        let c = Color::zero();
        assert_eq!(c.get("x"), Err(GeomError::InvalidComponent('x')));
        assert_eq!(c.get("uv"), Err(GeomError::InvalidComponent('u')));
    }

    #[test]
    fn set_reorders_channels() {
        let mut c = Color::zero();
        c.set("ab", &[128, 7]).unwrap();
        assert_eq!(c, Color::new(0, 0, 7, 128));
        assert_eq!(c.set("rr", &[1, 2]), Err(GeomError::DuplicateComponent('r')));
        assert_eq!(
            c.set("rgb", &[1, 2]),
            Err(GeomError::LengthMismatch { expected: 3, actual: 2 })
        );
    }

    #[test]
    fn component_round_trip() {
        let mut c = Color::zero();
        for i in 0..4 {
            c.set_component(i, 10 * i as u8).unwrap();
        }
        assert_eq!(c, Color::new(0, 10, 20, 30));
        assert_eq!(c.component(2), Ok(20));
        assert_eq!(
            c.component(4),
            Err(GeomError::IndexOutOfRange { index: 4, len: 4 })
        );
        c[3] = 255;
        assert_eq!(c.a, 255);
        assert_eq!(&c.as_array()[1..3], &[10, 20]);
    }

    // ── Colorspace views ────────────────────────────────────────────────────

    #[test]
    fn normalized_divides_by_255() {
        let c = Color::new(51, 102, 153, 204);
        let n = c.normalized();
        assert_eq!(n, Vector4::new(51.0 / 255.0, 102.0 / 255.0, 153.0 / 255.0, 204.0 / 255.0));
    }

    #[test]
    fn set_normalized_preserves_alpha_for_triplets() {
        let mut c = Color::new(0, 0, 0, 200);
        c.set_normalized(&[1.0, 0.5, 0.0]).unwrap();
        assert_eq!(c, Color::new(255, 127, 0, 200));
        c.set_normalized(&[0.0, 0.0, 0.0, 1.0]).unwrap();
        assert_eq!(c.a, 255);
    }

    #[test]
    fn set_normalized_rejects_bad_counts() {
        let mut c = Color::zero();
        assert_eq!(
            c.set_normalized(&[0.5, 0.5]),
            Err(GeomError::LengthMismatch { expected: 3, actual: 2 })
        );
        assert_eq!(
            c.set_normalized(&[0.5; 5]),
            Err(GeomError::LengthMismatch { expected: 4, actual: 5 })
        );
    }

    #[test]
    fn hsv_of_pure_red() {
        let hsv = Color::new(255, 0, 0, 255).hsv();
        assert!((hsv.x - 0.0).abs() < 1e-6);
        assert!((hsv.y - 1.0).abs() < 1e-6);
        assert!((hsv.z - 1.0).abs() < 1e-6);
        assert!((hsv.w - 1.0).abs() < 1e-6);
    }

    fn channels_close(a: Color, b: Color) -> bool {
        // Normalized round-trips truncate, so allow one step per channel.
        (a.r as i16 - b.r as i16).abs() <= 1
            && (a.g as i16 - b.g as i16).abs() <= 1
            && (a.b as i16 - b.b as i16).abs() <= 1
            && a.a == b.a
    }

    #[test]
    fn hsv_set_get_round_trip() {
        let source = Color::new(180, 90, 30, 255);
        let mut c = Color::zero();
        c.set_hsv(&source.hsv().to_array()).unwrap();
        assert!(channels_close(c, source), "{c} vs {source}");
    }

    #[test]
    fn hls_set_get_round_trip() {
        let source = Color::SKYBLUE;
        let mut c = Color::zero();
        c.set_hls(&source.hls().to_array()).unwrap();
        assert!(channels_close(c, source), "{c} vs {source}");
    }

    #[test]
    fn yiq_set_get_round_trip() {
        let source = Color::VIOLET;
        let mut c = Color::zero();
        c.set_yiq(&source.yiq().to_array()).unwrap();
        assert!(channels_close(c, source), "{c} vs {source}");
    }

    #[test]
    fn colorspace_setters_leave_alpha_alone() {
        let mut c = Color::new(10, 20, 30, 77);
        c.set_hsv(&[0.5, 0.5, 0.5]).unwrap();
        assert_eq!(c.a, 77);
        c.set_yiq(&[0.3, 0.0, 0.0, 0.9]).unwrap();
        assert_eq!(c.a, 77);
    }

    // ── fade ────────────────────────────────────────────────────────────────

    #[test]
    fn fade_replaces_alpha() {
        assert_eq!(Color::WHITE.fade(0.5).a, 127);
        assert_eq!(Color::WHITE.fade(2.0).a, 255);
        assert_eq!(Color::WHITE.fade(-1.0).a, 0);
        assert_eq!(Color::RED.fade(0.0).r, 230);
    }

    // ── Layout ──────────────────────────────────────────────────────────────

    #[test]
    fn layout_matches_four_bytes() {
        assert_eq!(core::mem::size_of::<Color>(), 4);
        assert_eq!(core::mem::align_of::<Color>(), 1);
        assert_eq!(bytemuck::bytes_of(&Color::new(1, 2, 3, 4)), &[1, 2, 3, 4]);
    }

    #[test]
    fn display_formats_as_tuple() {
        assert_eq!(Color::new(1, 2, 3, 4).to_string(), "(1, 2, 3, 4)");
    }
}
