//! Pixel geometry derived from a [`ValueModel`] and the track width.
//!
//! ## Usage
//!
//! Compute a fresh [`SliderLayout`] for every hit-test and every paint.
//! Layouts are plain snapshots: they do not observe the model, so a layout
//! computed before a value change is stale afterwards.

use smallvec::SmallVec;

use crate::{Px, ValueModel};

/// Horizontal span occupied by one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSpan {
    /// Left edge of the segment.
    pub start: Px,
    /// Width of the segment.
    pub width: Px,
}

impl SegmentSpan {
    /// Right edge of the segment.
    pub fn end(&self) -> Px {
        self.start + self.width
    }
}

/// Hit-box of the handle between `segment_index` and `segment_index + 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleZone {
    /// Left edge of the handle.
    pub start: Px,
    /// Right edge of the handle.
    pub end: Px,
    /// Index of the segment to the left of the handle.
    pub segment_index: usize,
}

impl HandleZone {
    /// Horizontal centre of the handle.
    pub fn center(&self) -> Px {
        (self.start + self.end) / 2.0
    }

    /// Returns `true` when `x` lies within the zone widened by `slop` on
    /// each side.
    pub fn contains(&self, x: Px, slop: Px) -> bool {
        x >= self.start - slop && x <= self.end + slop
    }
}

/// Segment spans and handle zones for one track width.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderLayout {
    track_width: Px,
    handle_width: Px,
    available_width: Px,
    spans: SmallVec<[SegmentSpan; 8]>,
    handles: SmallVec<[HandleZone; 8]>,
}

impl SliderLayout {
    /// Lays out `model` on a track `track_width` pixels wide.
    ///
    /// Every handle is `handle_width` pixels wide and sits directly after
    /// the segment to its left. The remaining width is shared by the
    /// segments in proportion to their values.
    pub fn compute(model: &ValueModel, track_width: Px, handle_width: Px) -> Self {
        let track_width = track_width.positive();
        let handle_width = handle_width.positive();
        let available_width =
            (track_width - handle_width * model.handle_count() as f32).positive();

        let mut spans = SmallVec::with_capacity(model.len());
        let mut handles = SmallVec::with_capacity(model.handle_count());
        let mut cursor = Px::ZERO;
        let last = model.len().saturating_sub(1);
        for (index, segment) in model.segments().iter().enumerate() {
            let width = available_width * segment.value / 100.0;
            let span = SegmentSpan {
                start: cursor,
                width: width.positive(),
            };
            spans.push(span);
            cursor = span.end();

            if index < last {
                handles.push(HandleZone {
                    start: cursor,
                    end: cursor + handle_width,
                    segment_index: index,
                });
                cursor += handle_width;
            }
        }

        Self {
            track_width,
            handle_width,
            available_width,
            spans,
            handles,
        }
    }

    /// Total width of the track.
    pub fn track_width(&self) -> Px {
        self.track_width
    }

    /// Width of a single handle.
    pub fn handle_width(&self) -> Px {
        self.handle_width
    }

    /// Width shared by the segments once every handle is placed.
    pub fn available_width(&self) -> Px {
        self.available_width
    }

    /// Segment spans, left to right.
    pub fn spans(&self) -> &[SegmentSpan] {
        &self.spans
    }

    /// Handle zones, left to right.
    pub fn handles(&self) -> &[HandleZone] {
        &self.handles
    }

    /// Returns the first handle whose zone, widened by `slop`, contains `x`.
    pub fn hit_test(&self, x: Px, slop: Px) -> Option<&HandleZone> {
        self.handles.iter().find(|zone| zone.contains(x, slop))
    }

    /// Range a dragged handle centre may move in without overlapping its
    /// neighbours: from the right edge of the previous handle (or the track
    /// start) to the left edge of the next handle (or the track end).
    pub fn drag_bounds(&self, handle_index: usize) -> (Px, Px) {
        let min = handle_index
            .checked_sub(1)
            .and_then(|previous| self.handles.get(previous))
            .map_or(Px::ZERO, |zone| zone.end);
        let max = self
            .handles
            .get(handle_index + 1)
            .map_or(self.track_width, |zone| zone.start);
        (min, max)
    }

    /// Converts a handle centre position into the cumulative percentage of
    /// the segments left of that handle.
    ///
    /// Returns `None` when there is no width left for the segments.
    pub fn percentage_at(&self, handle_index: usize, center_x: Px) -> Option<f32> {
        if self.available_width <= Px::ZERO {
            return None;
        }
        let track_x = center_x - self.handle_offset(handle_index);
        Some(track_x.to_f32() * 100.0 / self.available_width.to_f32())
    }

    /// Inverse of [`percentage_at`](Self::percentage_at): the centre
    /// position of `handle_index` when the segments left of it add up to
    /// `percentage`.
    pub fn center_for_percentage(&self, handle_index: usize, percentage: f32) -> Px {
        self.available_width * percentage / 100.0 + self.handle_offset(handle_index)
    }

    // Handles left of `handle_index` plus half of the handle itself.
    fn handle_offset(&self, handle_index: usize) -> Px {
        self.handle_width * handle_index as f32 + self.handle_width / 2.0
    }
}
