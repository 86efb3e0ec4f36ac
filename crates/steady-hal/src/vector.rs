//! Fixed-point motion vector types.
//!
//! The stabilizer hardware reports motion in 1/256-pixel units. The
//! compensation vector additionally arrives split into integer and
//! fractional parts per axis, and that split is part of the stable
//! boundary with the ISP crop stage, so it is preserved here field for
//! field rather than collapsed into a single scaled value.

use serde::{Deserialize, Serialize};

/// Fixed-point subpixel scale: true motion = raw value / 256.
pub const MOTION_SCALE: u32 = 256;

/// A raw 256-scaled fixed-point motion value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Q8(u32);

impl Q8 {
    pub const ZERO: Self = Self(0);

    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Motion in pixels.
    pub fn as_pixels(self) -> f32 {
        self.0 as f32 / MOTION_SCALE as f32
    }
}

/// One axis of the compensation motion vector, split into integer pixels
/// and a 1/256-pixel fraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CmvComponent {
    pub int: u32,
    pub frac: u32,
}

impl CmvComponent {
    pub const ZERO: Self = Self { int: 0, frac: 0 };

    /// Combined subpixel motion in pixels.
    pub fn as_pixels(self) -> f32 {
        self.int as f32 + self.frac as f32 / MOTION_SCALE as f32
    }
}

/// Result of one stabilization cycle: the compensation motion vector and
/// the crop target it was computed for.
///
/// The all-zero value means "no stabilization applied".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compensation {
    pub x: CmvComponent,
    pub y: CmvComponent,
    pub target_width: u32,
    pub target_height: u32,
}

impl Compensation {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Raw global motion vector between the current and previous frame,
/// 256-scaled fixed point per axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalMotion {
    pub x: Q8,
    pub y: Q8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_q8_scale() {
        assert_eq!(Q8::from_raw(384).as_pixels(), 1.5);
        assert_eq!(Q8::from_raw(384).raw(), 384);
    }

    #[test]
    fn test_q8_zero() {
        assert_eq!(Q8::ZERO, Q8::default());
        assert_eq!(Q8::ZERO.as_pixels(), 0.0);
    }

    #[test]
    fn test_cmv_component_combines_int_and_frac() {
        let cmv = CmvComponent { int: 2, frac: 128 };
        assert_eq!(cmv.as_pixels(), 2.5);
    }

    #[test]
    fn test_compensation_default_is_zero() {
        let cmv = Compensation::default();
        assert!(cmv.is_zero());
        assert_eq!(cmv.x, CmvComponent::ZERO);
        assert_eq!(cmv.y, CmvComponent::ZERO);
        assert_eq!(cmv.target_width, 0);
        assert_eq!(cmv.target_height, 0);
    }
}
