//! RGB to HSV / HLS / YIQ conversions on normalized components.
//!
//! All channels are `f32` in `[0, 1]` except YIQ's `i`/`q`, which are signed.
//! Hue is a fraction of a full turn in `[0, 1)`, not degrees, in both the
//! HSV and HLS encodings, and `0.0` means red.

const ONE_THIRD: f32 = 1.0 / 3.0;
const ONE_SIXTH: f32 = 1.0 / 6.0;
const TWO_THIRD: f32 = 2.0 / 3.0;

/// Converts normalized RGB to hue / saturation / value.
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let range = maxc - minc;
    let v = maxc;
    if range == 0.0 {
        return (0.0, 0.0, v);
    }
    let s = range / maxc;
    let rc = (maxc - r) / range;
    let gc = (maxc - g) / range;
    let bc = (maxc - b) / range;
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    ((h / 6.0).rem_euclid(1.0), s, v)
}

/// Converts hue / saturation / value back to normalized RGB.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    if s == 0.0 {
        return (v, v, v);
    }
    // The fractional sector offset comes from the untruncated index.
    let i = (h * 6.0) as i32;
    let f = h * 6.0 - i as f32;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i.rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Converts normalized RGB to hue / lightness / saturation.
pub fn rgb_to_hls(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let sum = maxc + minc;
    let range = maxc - minc;
    let l = sum / 2.0;
    if range == 0.0 {
        return (0.0, l, 0.0);
    }
    let s = if l <= 0.5 { range / sum } else { range / (2.0 - sum) };
    let rc = (maxc - r) / range;
    let gc = (maxc - g) / range;
    let bc = (maxc - b) / range;
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    ((h / 6.0).rem_euclid(1.0), l, s)
}

/// Converts hue / lightness / saturation back to normalized RGB.
pub fn hls_to_rgb(h: f32, l: f32, s: f32) -> (f32, f32, f32) {
    if s == 0.0 {
        return (l, l, l);
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;
    (
        hls_channel(m1, m2, h + ONE_THIRD),
        hls_channel(m1, m2, h),
        hls_channel(m1, m2, h - ONE_THIRD),
    )
}

fn hls_channel(m1: f32, m2: f32, hue: f32) -> f32 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRD {
        m1 + (m2 - m1) * (TWO_THIRD - hue) * 6.0
    } else {
        m1
    }
}

/// Converts normalized RGB to luma / in-phase / quadrature.
///
/// `y` stays in `[0, 1]`; `i` and `q` are signed chroma axes.
pub fn rgb_to_yiq(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let y = 0.30 * r + 0.59 * g + 0.11 * b;
    let i = 0.74 * (r - y) - 0.27 * (b - y);
    let q = 0.48 * (r - y) + 0.41 * (b - y);
    (y, i, q)
}

/// Converts luma / in-phase / quadrature back to normalized RGB.
///
/// The coefficients are the exact inverse of the forward matrix; channels
/// are clamped to `[0, 1]` afterwards because valid YIQ combinations can
/// land slightly outside the RGB cube.
pub fn yiq_to_rgb(y: f32, i: f32, q: f32) -> (f32, f32, f32) {
    let r = y + 0.946_882_2 * i + 0.623_556_6 * q;
    let g = y - 0.274_787_64 * i - 0.635_691_1 * q;
    let b = y - 1.108_545 * i + 1.709_007 * q;
    (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
}
