//! Fixed-Point 2D Vector
//!
//! Positions in cell-grid coordinates (`x` = column, `y` = row) used to
//! interpolate tile animations. The renderer scales these to pixels.

use std::fmt;
use serde::{Serialize, Deserialize};

use super::fixed::{Fixed, FIXED_SCALE, fixed_lerp, to_float};

/// 2D vector with fixed-point components.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FixedVec2 {
    /// X component (column, Q16.16 fixed-point)
    pub x: Fixed,
    /// Y component (row, Q16.16 fixed-point)
    pub y: Fixed,
}

impl FixedVec2 {
    /// Create a new vector from fixed-point components.
    #[inline]
    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }

    /// Create a vector from integer components.
    #[inline]
    pub const fn from_ints(x: i32, y: i32) -> Self {
        Self {
            x: x << FIXED_SCALE,
            y: y << FIXED_SCALE,
        }
    }

    /// Linear interpolation between two vectors.
    /// t = 0 returns self, t = FIXED_ONE returns other.
    #[inline]
    pub fn lerp(self, other: Self, t: Fixed) -> Self {
        Self {
            x: fixed_lerp(self.x, other.x, t),
            y: fixed_lerp(self.y, other.y, t),
        }
    }

    /// Convert to float tuple for rendering.
    #[inline]
    pub fn to_floats(self) -> (f32, f32) {
        (to_float(self.x), to_float(self.y))
    }
}

impl fmt::Debug for FixedVec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (fx, fy) = self.to_floats();
        write!(f, "Vec2({:.3}, {:.3})", fx, fy)
    }
}

impl fmt::Display for FixedVec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (fx, fy) = self.to_floats();
        write!(f, "({:.3}, {:.3})", fx, fy)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixed::{to_fixed, FIXED_HALF, FIXED_ONE};

    #[test]
    fn test_vec2_from_ints() {
        let v = FixedVec2::from_ints(3, -1);
        assert_eq!(v, FixedVec2::new(to_fixed(3.0), to_fixed(-1.0)));
        assert_eq!(v.x, 3 * FIXED_ONE);
    }

    #[test]
    fn test_vec2_lerp_endpoints() {
        let from = FixedVec2::from_ints(3, 0);
        let to = FixedVec2::from_ints(0, 0);

        assert_eq!(from.lerp(to, 0), from);
        assert_eq!(from.lerp(to, FIXED_ONE), to);
        assert_eq!(from.lerp(to, FIXED_HALF), FixedVec2::new(to_fixed(1.5), 0));
    }

    #[test]
    fn test_vec2_to_floats() {
        let v = FixedVec2::new(to_fixed(1.25), to_fixed(-0.5));
        assert_eq!(v.to_floats(), (1.25, -0.5));
    }
}
