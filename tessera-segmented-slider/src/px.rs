//! Pixel-space coordinates for the slider track.
//!
//! Hosts report pointer positions and track widths in physical pixels,
//! usually with sub-pixel precision on touch screens, so [`Px`] wraps an
//! `f32` rather than an integer.
//!
//! # Coordinate System
//!
//! - Origin at the left edge of the slider track
//! - X-axis increases to the right
//! - Negative values are allowed; pointer positions left of the track are
//!   clamped by the gesture controller, not by this type
//!
//! # Example
//!
//! ```
//! use tessera_segmented_slider::Px;
//!
//! let track = Px::new(360.0);
//! let handle = Px::new(30.0);
//!
//! let usable = track - handle * 3.0;
//! assert_eq!(usable, Px::new(270.0));
//! assert_eq!(usable.to_f32(), 270.0);
//! ```

use std::{
    fmt,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

/// A physical pixel coordinate or length along the slider track.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Px(pub f32);

impl Px {
    /// A constant representing zero pixels.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Px` from an `f32` value.
    pub const fn new(value: f32) -> Self {
        Px(value)
    }

    /// Returns the raw `f32` value.
    pub fn to_f32(self) -> f32 {
        self.0
    }

    /// Returns `true` when the value is neither infinite nor NaN.
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Returns the value, or zero if it is negative or NaN.
    ///
    /// ```
    /// use tessera_segmented_slider::Px;
    ///
    /// assert_eq!(Px::new(-4.0).positive(), Px::ZERO);
    /// assert_eq!(Px::new(12.5).positive(), Px::new(12.5));
    /// ```
    pub fn positive(self) -> Self {
        if self.0 > 0.0 { self } else { Self::ZERO }
    }

    /// Returns the smaller of two pixel values.
    pub fn min(self, other: Self) -> Self {
        Px(self.0.min(other.0))
    }

    /// Returns the larger of two pixel values.
    pub fn max(self, other: Self) -> Self {
        Px(self.0.max(other.0))
    }

    /// Restricts the value to `[min, max]`.
    ///
    /// Unlike [`f32::clamp`] this never panics: when `min > max` the lower
    /// bound wins, which is what drag clamping wants for collapsed segments.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.min(max).max(min)
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl From<f32> for Px {
    fn from(value: f32) -> Self {
        Px(value)
    }
}

impl From<Px> for f32 {
    fn from(value: Px) -> Self {
        value.0
    }
}

impl Add for Px {
    type Output = Px;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Px;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Self::Output {
        Px(self.0 * rhs)
    }
}

impl Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Self::Output {
        Px(self.0 / rhs)
    }
}

impl Neg for Px {
    type Output = Px;

    fn neg(self) -> Self::Output {
        Px(-self.0)
    }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Px {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}
