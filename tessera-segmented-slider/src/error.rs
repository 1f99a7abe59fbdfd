//! Configuration errors.
//!
//! Only configuration can fail. Pointer handling never returns an error:
//! misses, out-of-range drags and degenerate geometry are clamped or
//! ignored by the gesture controller.

use thiserror::Error;

/// A rejected slider configuration.
///
/// Every setter that returns this error leaves the previous configuration
/// in place.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderConfigError {
    /// The range is empty, inverted or not finite.
    #[error("range end ({end}) must be greater than range start ({start})")]
    InvalidRange {
        /// Requested range start.
        start: f32,
        /// Requested range end.
        end: f32,
    },
    /// Segment values are normalized by dividing by the range end.
    #[error("range end must be positive to normalize segment values, got {0}")]
    NonPositiveRangeEnd(f32),
    /// Snapping divides by the step size.
    #[error("step size must be a positive finite number, got {0}")]
    InvalidStepSize(f32),
    /// A segment value or minimum is NaN or infinite.
    #[error("segment {index} has a non-finite value or minimum")]
    NonFiniteSegment {
        /// Position of the offending segment.
        index: usize,
    },
    /// A segment minimum is negative.
    #[error("segment {index} has a negative minimum {minimum}")]
    NegativeMinimum {
        /// Position of the offending segment.
        index: usize,
        /// The rejected minimum, in host units.
        minimum: f32,
    },
    /// A segment starts below its own minimum.
    #[error("segment {index} value {value} is below its minimum {minimum}")]
    BelowMinimum {
        /// Position of the offending segment.
        index: usize,
        /// The rejected value, in host units.
        value: f32,
        /// The segment minimum, in host units.
        minimum: f32,
    },
    /// Handle width and touch slop are pixel lengths.
    #[error("{name} must be a non-negative finite pixel length, got {value}")]
    InvalidPixelLength {
        /// Which option was rejected.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
}
