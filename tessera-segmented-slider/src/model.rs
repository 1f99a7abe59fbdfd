//! Segment values, range bounds and step size.
//!
//! ## Usage
//!
//! Hosts describe segments in their own units; [`ValueModel`] stores them
//! as percentages of the track so redistribution can work in a fixed
//! `0..=100` space.

use smallvec::SmallVec;
use tracing::warn;

use crate::{Color, SliderConfigError, SnapRule};

/// Drift, in percentage points, between the normalized segment total and
/// 100 beyond which a new segment list is reported as not covering the
/// track.
pub const SUM_TOLERANCE: f32 = 0.01;

/// One proportional, colored division of the track.
///
/// Values passed to [`ValueModel::set_segments`] are in host units; values
/// read back from the model are percentages of the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Color token handed back to the host for painting.
    pub color: Color,
    /// Size of the segment.
    pub value: f32,
    /// Smallest size a drag may shrink this segment to.
    pub minimum: f32,
}

impl Segment {
    /// Creates a segment with no minimum.
    pub fn new(color: impl Into<Color>, value: f32) -> Self {
        Self {
            color: color.into(),
            value,
            minimum: 0.0,
        }
    }

    /// Sets the minimum size of the segment.
    pub fn minimum(mut self, minimum: f32) -> Self {
        self.minimum = minimum;
        self
    }
}

/// A segment as reported to the host after a change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentValue {
    /// Color token of the segment.
    pub color: Color,
    /// Size of the segment, in percent of the track.
    pub value: f32,
}

/// Segment values reported in one change notification.
pub type SegmentValues = SmallVec<[SegmentValue; 8]>;

/// Ordered segment list plus the range and step configuration.
///
/// Redistribution conserves the sum of all segment values. Hosts that
/// supply values covering the whole range keep that sum at 100.
///
/// Only `range_end` takes part in normalization; `range_start` is used by
/// [`ValueModel::map_fraction_to_value`] alone.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueModel {
    segments: Vec<Segment>,
    range_start: f32,
    range_end: f32,
    step_size: f32,
    snap_rule: SnapRule,
}

impl Default for ValueModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueModel {
    /// Creates an empty model over the range `0..100` with a step of 1.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            range_start: 0.0,
            range_end: 100.0,
            step_size: 1.0,
            snap_rule: SnapRule::default(),
        }
    }

    /// Replaces the segment list.
    ///
    /// Every value and minimum is normalized to a percentage of the track
    /// with `value / range_end * 100`; `range_start` is not subtracted.
    /// The list is stored as written even when the values do not add up to
    /// the range end, in which case a warning is logged. An empty list is
    /// accepted; layout and drags are no-ops until segments are supplied.
    pub fn set_segments(
        &mut self,
        segments: impl IntoIterator<Item = Segment>,
    ) -> Result<(), SliderConfigError> {
        let segments = normalize_segments(segments, self.range_end).inspect_err(|err| {
            warn!("rejected segment list: {err}");
        })?;
        self.segments = segments;
        Ok(())
    }

    /// Sets the absolute range used to normalize segment values.
    ///
    /// Existing segments are not renormalized.
    pub fn set_range(&mut self, start: f32, end: f32) -> Result<(), SliderConfigError> {
        validate_range(start, end).inspect_err(|err| warn!("rejected range: {err}"))?;
        self.range_start = start;
        self.range_end = end;
        Ok(())
    }

    /// Sets the snapping granularity, in percentage points.
    pub fn set_step_size(&mut self, step: f32) -> Result<(), SliderConfigError> {
        validate_step_size(step).inspect_err(|err| warn!("rejected step size: {err}"))?;
        self.step_size = step;
        Ok(())
    }

    /// Sets how released handles snap onto the step grid.
    pub fn set_snap_rule(&mut self, rule: SnapRule) {
        self.snap_rule = rule;
    }

    /// Returns the segments, with values in percent.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` when no segments are configured.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of draggable handles.
    pub fn handle_count(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }

    /// Returns the configured range start.
    pub fn range_start(&self) -> f32 {
        self.range_start
    }

    /// Returns the configured range end.
    pub fn range_end(&self) -> f32 {
        self.range_end
    }

    /// Returns the snapping granularity, in percentage points.
    pub fn step_size(&self) -> f32 {
        self.step_size
    }

    /// Returns the active snap rule.
    pub fn snap_rule(&self) -> SnapRule {
        self.snap_rule
    }

    /// Returns the sum of all segment values, in percent.
    pub fn total(&self) -> f32 {
        self.segments.iter().map(|segment| segment.value).sum()
    }

    /// Returns the sum of segment values up to and including `index`.
    pub fn sum_through(&self, index: usize) -> f32 {
        self.segments
            .iter()
            .take(index.saturating_add(1))
            .map(|segment| segment.value)
            .sum()
    }

    /// Returns the color and percentage of every segment, in order.
    pub fn segment_values(&self) -> SegmentValues {
        self.segments
            .iter()
            .map(|segment| SegmentValue {
                color: segment.color,
                value: segment.value,
            })
            .collect()
    }

    /// Converts the value of the segment at `index` back into host units.
    ///
    /// This inverts normalization, `value * range_end / 100`, and like it
    /// ignores `range_start`.
    ///
    /// ```
    /// use tessera_segmented_slider::{Color, Segment, ValueModel};
    ///
    /// let mut model = ValueModel::new();
    /// model.set_range(0.0, 200.0).unwrap();
    /// model
    ///     .set_segments([Segment::new(Color::RED, 60.0), Segment::new(Color::BLUE, 140.0)])
    ///     .unwrap();
    /// assert_eq!(model.segments()[0].value, 30.0);
    /// assert_eq!(model.absolute_value(0), Some(60.0));
    /// ```
    pub fn absolute_value(&self, index: usize) -> Option<f32> {
        self.segments
            .get(index)
            .map(|segment| segment.value * self.range_end / 100.0)
    }

    /// Maps a track fraction (`0.0..=1.0`) onto the configured range.
    ///
    /// Unlike segment normalization this honours `range_start`:
    /// `range_start + fraction * (range_end - range_start)`.
    pub fn map_fraction_to_value(&self, fraction: f32) -> f32 {
        self.range_start + fraction * (self.range_end - self.range_start)
    }

    /// Borrows the two segments on either side of handle `index`.
    pub(crate) fn handle_pair_mut(
        &mut self,
        index: usize,
    ) -> Option<(&mut Segment, &mut Segment)> {
        if index.checked_add(1)? >= self.segments.len() {
            return None;
        }
        let (left, right) = self.segments.split_at_mut(index + 1);
        Some((&mut left[index], &mut right[0]))
    }

    /// Validates and installs a complete configuration in one step.
    pub(crate) fn replace(
        &mut self,
        segments: impl IntoIterator<Item = Segment>,
        range: (f32, f32),
        step_size: f32,
        snap_rule: SnapRule,
    ) -> Result<(), SliderConfigError> {
        validate_range(range.0, range.1)?;
        validate_step_size(step_size)?;
        let segments = normalize_segments(segments, range.1)?;
        *self = Self {
            segments,
            range_start: range.0,
            range_end: range.1,
            step_size,
            snap_rule,
        };
        Ok(())
    }
}

fn validate_range(start: f32, end: f32) -> Result<(), SliderConfigError> {
    if !(start.is_finite() && end.is_finite()) || end <= start {
        return Err(SliderConfigError::InvalidRange { start, end });
    }
    if end <= 0.0 {
        return Err(SliderConfigError::NonPositiveRangeEnd(end));
    }
    Ok(())
}

fn validate_step_size(step: f32) -> Result<(), SliderConfigError> {
    if step.is_finite() && step > 0.0 {
        Ok(())
    } else {
        Err(SliderConfigError::InvalidStepSize(step))
    }
}

fn normalize_segments(
    segments: impl IntoIterator<Item = Segment>,
    range_end: f32,
) -> Result<Vec<Segment>, SliderConfigError> {
    let mut normalized = Vec::new();
    for (index, segment) in segments.into_iter().enumerate() {
        if !(segment.value.is_finite() && segment.minimum.is_finite()) {
            return Err(SliderConfigError::NonFiniteSegment { index });
        }
        if segment.minimum < 0.0 {
            return Err(SliderConfigError::NegativeMinimum {
                index,
                minimum: segment.minimum,
            });
        }
        if segment.value < segment.minimum {
            return Err(SliderConfigError::BelowMinimum {
                index,
                value: segment.value,
                minimum: segment.minimum,
            });
        }
        normalized.push(Segment {
            color: segment.color,
            value: segment.value * 100.0 / range_end,
            minimum: segment.minimum * 100.0 / range_end,
        });
    }

    if !normalized.is_empty() {
        let total: f32 = normalized.iter().map(|segment| segment.value).sum();
        if (total - 100.0).abs() > SUM_TOLERANCE {
            warn!(total, "segment values do not add up to 100% of the range end");
        }
    }
    Ok(normalized)
}
