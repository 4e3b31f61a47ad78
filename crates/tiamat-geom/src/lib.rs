//! Geometry and color value types for the **native render boundary**.
//!
//! Every type here is a `#[repr(C)]` plain-value record matching the
//! boundary's layout byte for byte (checked by `bytemuck` casts in the
//! tests), with a convenience surface on top: elementwise arithmetic,
//! swizzled component access (`"xy"`, `"uv"`, `"rgba"`), packed color
//! integers, and colorspace views. The boundary's own pipeline (drawing,
//! GPU resources, windowing) is out of scope; these are the values that
//! cross it.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`vector2`] / [`vector3`] / [`vector4`] | `Vector2`, `Vector3`, `Vector4` |
//! | [`color`] | `Color`, `ColorSwizzle`, the predefined palette |
//! | [`colorspace`] | RGB ↔ HSV / HLS / YIQ conversion functions |
//! | [`rect`] | `Rectangle` |
//! | [`matrix`] | `Matrix` |
//! | [`swizzle`] | swizzle-name parsing, `Swizzle` read results |
//! | [`error`] | `GeomError`, `Result` |
//!
//! # Quick start
//!
//! ```rust
//! use tiamat_geom::{Color, Rectangle, Swizzle, Vector2};
//!
//! let world = Rectangle::new(0.0, 0.0, 640.0, 480.0);
//! let mut target = world.center();
//! target.set("yx", &[10.0, 20.0]).unwrap();
//! assert_eq!(target, Vector2::new(20.0, 10.0));
//!
//! let tint = Color::SKYBLUE.fade(0.5);
//! assert_eq!(tint.a, 127);
//!
//! match Vector2::new(3.0, 4.0).get("yxy").unwrap() {
//!     Swizzle::Vector3(v) => assert_eq!(v.to_array(), [4.0, 3.0, 4.0]),
//!     other => panic!("unexpected read: {other:?}"),
//! }
//! ```

pub mod color;
pub mod colorspace;
pub mod error;
pub mod matrix;
pub mod rect;
pub mod swizzle;
pub mod vector2;
pub mod vector3;
pub mod vector4;

pub use color::{Color, ColorSwizzle};
pub use error::{GeomError, Result};
pub use matrix::Matrix;
pub use rect::Rectangle;
pub use swizzle::Swizzle;
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;

/// π as the boundary's headers define it.
pub const PI: f32 = core::f32::consts::PI;

/// Degrees to radians.
pub const DEG2RAD: f32 = PI / 180.0;

/// Radians to degrees.
pub const RAD2DEG: f32 = 180.0 / PI;

#[cfg(test)]
mod api_tests {
    use super::*;

    #[test]
    fn constants_convert_angles() {
        assert!((90.0 * DEG2RAD - core::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((PI * RAD2DEG - 180.0).abs() < 1e-4);
    }

    #[test]
    fn errors_render_their_context() {
        let err = Vector3::from_components([1.0, 2.0]).unwrap_err();
        assert_eq!(err.to_string(), "expected 3 components, got 2");
        let err = Color::zero().get("xyz").unwrap_err();
        assert_eq!(err.to_string(), "invalid component 'x'");
    }

    #[test]
    fn vector_color_round_trip() {
        // Saturated channels survive the normalized view exactly.
        let c = Color::GOLD;
        let mut back = Color::BLANK;
        back.set_normalized(&c.normalized().to_array()).unwrap();
        assert_eq!(back.r, c.r);
        assert_eq!(back.a, 255);
    }

    #[test]
    fn rect_vector_composition() {
        let world = Rectangle::new(-320.0, -240.0, 640.0, 480.0);
        let half = world.size() / 2.0;
        assert_eq!(world.center() + half, Vector2::new(320.0, 240.0));
        assert!(world.contains(Vector2::zero()));
    }
}
