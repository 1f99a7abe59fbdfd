//! Host-supplied slider configuration.

use derive_setters::Setters;

use crate::{Px, Segment, SnapRule};

/// Default handle width, in pixels.
pub const DEFAULT_HANDLE_WIDTH: Px = Px(30.0);

/// Arguments for [`SegmentedSliderController`](crate::SegmentedSliderController).
///
/// ```
/// use tessera_segmented_slider::{Color, Px, Segment, SliderOptions, SnapRule};
///
/// let options = SliderOptions::default()
///     .segments([
///         Segment::new(Color::RED, 60.0),
///         Segment::new(Color::BLUE, 140.0).minimum(20.0),
///     ])
///     .range_end(200.0)
///     .step_size(5.0)
///     .snap_rule(SnapRule::Nearest)
///     .handle_width(Px(24.0));
/// assert_eq!(options.segments.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct SliderOptions {
    /// Segments, left to right, in host units.
    #[setters(skip)]
    pub segments: Vec<Segment>,
    /// Lower bound of the host value range. Only used when mapping a track
    /// fraction to a value; normalization ignores it.
    pub range_start: f32,
    /// Upper bound of the host value range. Segment values are divided by
    /// this to get percentages.
    pub range_end: f32,
    /// Snapping granularity applied on release, in percentage points.
    pub step_size: f32,
    /// How released handles snap onto the step grid.
    pub snap_rule: SnapRule,
    /// Width of each handle, in pixels.
    pub handle_width: Px,
    /// Extra pixels accepted on both sides of a handle during hit-testing.
    pub touch_slop: Px,
    /// Ignore all pointer input.
    pub disabled: bool,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
            range_start: 0.0,
            range_end: 100.0,
            step_size: 1.0,
            snap_rule: SnapRule::default(),
            handle_width: DEFAULT_HANDLE_WIDTH,
            touch_slop: Px::ZERO,
            disabled: false,
        }
    }
}

impl SliderOptions {
    /// Replaces the segment list.
    pub fn segments(mut self, segments: impl IntoIterator<Item = Segment>) -> Self {
        self.segments = segments.into_iter().collect();
        self
    }

    /// Appends one segment.
    pub fn segment(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    /// Sets both range bounds.
    pub fn range(self, start: f32, end: f32) -> Self {
        self.range_start(start).range_end(end)
    }
}
