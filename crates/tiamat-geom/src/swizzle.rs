//! Swizzle-name parsing shared by the vector types and `Color`.
//!
//! A swizzle name is 1 to 4 characters drawn from a single alphabet group
//! (`xyzw`, `uv`, or `rgba`, trimmed to the value's arity). The first
//! character selects the group; every character then resolves to a storage
//! lane by its position within that group, so `"yx"` reverses a pair and
//! `"uv"` is another spelling of `"xy"`.

use crate::error::{GeomError, Result};
use crate::{Vector2, Vector3, Vector4};

// ── Alphabets ───────────────────────────────────────────────────────────────

/// Alphabet groups available to a value, keyed by its arity.
///
/// Groups within one alphabet never share characters, so the first character
/// of a name selects exactly one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Alphabet {
    /// Two lanes: `xy`, `uv`.
    Vec2,
    /// Three lanes: `xyz`, `uv`, `rgb`.
    Vec3,
    /// Four lanes: `xyzw`, `uv`, `rgba`.
    Vec4,
    /// Color channels only: `rgba`.
    Rgba,
}

impl Alphabet {
    fn groups(self) -> &'static [&'static str] {
        match self {
            Alphabet::Vec2 => &["xy", "uv"],
            Alphabet::Vec3 => &["xyz", "uv", "rgb"],
            Alphabet::Vec4 => &["xyzw", "uv", "rgba"],
            Alphabet::Rgba => &["rgba"],
        }
    }
}

// ── Lanes ───────────────────────────────────────────────────────────────────

/// Storage lanes selected by a parsed swizzle name, in name order.
///
/// Every lane index is below the alphabet's arity; callers may index their
/// component arrays with these without a further bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Lanes {
    buf: [u8; 4],
    len: u8,
}

impl Lanes {
    pub(crate) fn len(&self) -> usize {
        self.len as usize
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.buf[..self.len as usize].iter().map(|&l| l as usize)
    }
}

// ── Parsing ─────────────────────────────────────────────────────────────────

/// Parses a swizzle name for reading.
///
/// Duplicate characters are allowed (`"xxy"` broadcasts a lane). Fails with
/// `InvalidArity` when the name length is outside 1..=4 and
/// `InvalidComponent` when a character falls outside the group selected by
/// the first character.
pub(crate) fn read_lanes(name: &str, alphabet: Alphabet) -> Result<Lanes> {
    let len = name.chars().count();
    if len == 0 || len > 4 {
        let expected = if len == 0 { 1 } else { 4 };
        return Err(GeomError::InvalidArity { expected, actual: len });
    }

    let mut buf = [0u8; 4];
    let mut selected: Option<&str> = None;
    for (slot, c) in name.chars().enumerate() {
        let group = match selected {
            Some(g) => g,
            None => {
                let g = alphabet
                    .groups()
                    .iter()
                    .copied()
                    .find(|g| g.contains(c))
                    .ok_or(GeomError::InvalidComponent(c))?;
                selected = Some(g);
                g
            }
        };
        // Groups are ASCII, so the byte offset is the character's position.
        let lane = group.find(c).ok_or(GeomError::InvalidComponent(c))?;
        buf[slot] = lane as u8;
    }
    Ok(Lanes { buf, len: len as u8 })
}

/// Parses a swizzle name for writing and checks the incoming value count.
///
/// On top of the read rules, a write may not name the same storage lane
/// twice, and `values` must equal the name length.
pub(crate) fn write_lanes(name: &str, alphabet: Alphabet, values: usize) -> Result<Lanes> {
    let lanes = read_lanes(name, alphabet)?;
    let mut seen = [false; 4];
    for (c, lane) in name.chars().zip(lanes.iter()) {
        if seen[lane] {
            return Err(GeomError::DuplicateComponent(c));
        }
        seen[lane] = true;
    }
    if values != lanes.len() {
        return Err(GeomError::LengthMismatch { expected: lanes.len(), actual: values });
    }
    Ok(lanes)
}

// ── Read result ─────────────────────────────────────────────────────────────

/// Tagged result of a swizzled read on a vector.
///
/// One named character yields the bare component; two to four yield a vector
/// of the matching arity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Swizzle {
    Scalar(f32),
    Vector2(Vector2),
    Vector3(Vector3),
    Vector4(Vector4),
}

impl Swizzle {
    /// Number of components carried by this result.
    pub fn len(&self) -> usize {
        match self {
            Swizzle::Scalar(_) => 1,
            Swizzle::Vector2(_) => 2,
            Swizzle::Vector3(_) => 3,
            Swizzle::Vector4(_) => 4,
        }
    }

    /// The components in name order, padded with zeros past [`len`].
    ///
    /// [`len`]: Swizzle::len
    pub fn to_array(&self) -> [f32; 4] {
        match *self {
            Swizzle::Scalar(s) => [s, 0.0, 0.0, 0.0],
            Swizzle::Vector2(v) => [v.x, v.y, 0.0, 0.0],
            Swizzle::Vector3(v) => [v.x, v.y, v.z, 0.0],
            Swizzle::Vector4(v) => [v.x, v.y, v.z, v.w],
        }
    }
}

/// Builds the tagged read result from gathered components.
///
/// `count` matches a parsed name length, so it is always 1..=4.
pub(crate) fn pack_read(vals: [f32; 4], count: usize) -> Swizzle {
    match count {
        1 => Swizzle::Scalar(vals[0]),
        2 => Swizzle::Vector2(Vector2::new(vals[0], vals[1])),
        3 => Swizzle::Vector3(Vector3::new(vals[0], vals[1], vals[2])),
        _ => Swizzle::Vector4(Vector4::new(vals[0], vals[1], vals[2], vals[3])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lanes(name: &str, alphabet: Alphabet) -> Vec<usize> {
        read_lanes(name, alphabet).unwrap().iter().collect()
    }

    // ── Group selection ─────────────────────────────────────────────────────

    #[test]
    fn positional_names_map_to_their_positions() {
        assert_eq!(lanes("xy", Alphabet::Vec2), vec![0, 1]);
        assert_eq!(lanes("yx", Alphabet::Vec2), vec![1, 0]);
        assert_eq!(lanes("xyzw", Alphabet::Vec4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn uv_is_an_alias_for_the_first_two_lanes() {
        assert_eq!(lanes("uv", Alphabet::Vec2), vec![0, 1]);
        assert_eq!(lanes("vu", Alphabet::Vec3), vec![1, 0]);
    }

    #[test]
    fn color_letters_map_positionally() {
        assert_eq!(lanes("rgb", Alphabet::Vec3), vec![0, 1, 2]);
        assert_eq!(lanes("agbr", Alphabet::Rgba), vec![3, 1, 2, 0]);
    }

    #[test]
    fn reads_may_repeat_a_lane() {
        assert_eq!(lanes("xxy", Alphabet::Vec2), vec![0, 0, 1]);
    }

    #[test]
    fn first_character_locks_the_group() {
        assert_eq!(read_lanes("xv", Alphabet::Vec2), Err(GeomError::InvalidComponent('v')));
        assert_eq!(read_lanes("ux", Alphabet::Vec2), Err(GeomError::InvalidComponent('x')));
        assert_eq!(read_lanes("rx", Alphabet::Vec4), Err(GeomError::InvalidComponent('x')));
    }

    // ── Arity limits ────────────────────────────────────────────────────────

    #[test]
    fn letters_beyond_the_arity_are_invalid() {
        assert_eq!(read_lanes("z", Alphabet::Vec2), Err(GeomError::InvalidComponent('z')));
        assert_eq!(read_lanes("w", Alphabet::Vec3), Err(GeomError::InvalidComponent('w')));
        assert_eq!(read_lanes("a", Alphabet::Vec3), Err(GeomError::InvalidComponent('a')));
        assert_eq!(read_lanes("g", Alphabet::Vec2), Err(GeomError::InvalidComponent('g')));
    }

    #[test]
    fn name_length_outside_one_to_four_is_an_arity_error() {
        assert_eq!(
            read_lanes("", Alphabet::Vec4),
            Err(GeomError::InvalidArity { expected: 1, actual: 0 })
        );
        assert_eq!(
            read_lanes("xyzwx", Alphabet::Vec4),
            Err(GeomError::InvalidArity { expected: 4, actual: 5 })
        );
    }

    // ── Write rules ─────────────────────────────────────────────────────────

    #[test]
    fn writes_reject_duplicate_lanes() {
        assert_eq!(
            write_lanes("xx", Alphabet::Vec2, 2),
            Err(GeomError::DuplicateComponent('x'))
        );
        assert_eq!(
            write_lanes("uvu", Alphabet::Vec3, 3),
            Err(GeomError::DuplicateComponent('u'))
        );
    }

    #[test]
    fn writes_check_the_value_count_after_duplicates() {
        assert_eq!(
            write_lanes("xy", Alphabet::Vec2, 3),
            Err(GeomError::LengthMismatch { expected: 2, actual: 3 })
        );
        assert!(write_lanes("yx", Alphabet::Vec2, 2).is_ok());
    }
}
