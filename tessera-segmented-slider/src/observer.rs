//! Instrumentation hooks for the gesture state machine.
//!
//! ## Usage
//!
//! Install a [`SliderObserver`] on the controller to watch drag sessions
//! without touching the host callbacks. [`TracingObserver`] is installed by
//! default and forwards every hook to `tracing`.

use tracing::{debug, trace};

use crate::{Px, Redistribution};

/// Why a drag session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEnd {
    /// The pointer was lifted.
    Released,
    /// The host cancelled the gesture.
    Cancelled,
}

/// Receives state machine events at fixed instrumentation points.
///
/// Every method has an empty default body. Observers only see the event;
/// they cannot reach back into the controller while it is handling one.
pub trait SliderObserver {
    /// A pointer-down landed on the handle after segment `handle_index`.
    fn drag_started(&mut self, _handle_index: usize, _x: Px) {}

    /// A pointer-down landed outside every handle zone.
    fn hit_missed(&mut self, _x: Px) {}

    /// A dragged handle position was pulled back into its bounds.
    fn position_clamped(&mut self, _handle_index: usize, _requested: Px, _clamped: Px) {}

    /// Value moved between the two segments around a handle.
    fn redistributed(&mut self, _step: &Redistribution, _snapped: bool) {}

    /// The drag session on `handle_index` ended.
    fn drag_ended(&mut self, _handle_index: usize, _reason: DragEnd) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SliderObserver for NoopObserver {}

/// Observer that forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SliderObserver for TracingObserver {
    fn drag_started(&mut self, handle_index: usize, x: Px) {
        debug!(handle_index, x = x.to_f32(), "segmented slider drag started");
    }

    fn hit_missed(&mut self, x: Px) {
        trace!(x = x.to_f32(), "pointer down outside every handle");
    }

    fn position_clamped(&mut self, handle_index: usize, requested: Px, clamped: Px) {
        trace!(
            handle_index,
            requested = requested.to_f32(),
            clamped = clamped.to_f32(),
            "handle position clamped"
        );
    }

    fn redistributed(&mut self, step: &Redistribution, snapped: bool) {
        trace!(
            handle_index = step.handle_index,
            target = step.target,
            left = step.left,
            right = step.right,
            clamped = step.clamped,
            snapped,
            "segments redistributed"
        );
    }

    fn drag_ended(&mut self, handle_index: usize, reason: DragEnd) {
        debug!(handle_index, ?reason, "segmented slider drag ended");
    }
}
