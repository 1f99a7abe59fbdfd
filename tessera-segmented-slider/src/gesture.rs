//! Pointer handling for the segmented slider.
//!
//! ## Usage
//!
//! The host forwards single-pointer events and the current track width;
//! the controller hit-tests handles, redistributes values while a handle
//! is dragged and calls back into the host synchronously.
//!
//! ```
//! use tessera_segmented_slider::{
//!     Color, Px, Segment, SegmentValue, SegmentedSliderController, SliderHost, SliderOptions,
//! };
//!
//! #[derive(Default)]
//! struct Host {
//!     latest: Vec<f32>,
//!     repaints: usize,
//! }
//!
//! impl SliderHost for Host {
//!     fn on_value_changed(&mut self, _handle_index: usize, segments: &[SegmentValue]) {
//!         self.latest = segments.iter().map(|segment| segment.value).collect();
//!     }
//!
//!     fn request_repaint(&mut self) {
//!         self.repaints += 1;
//!     }
//! }
//!
//! let options = SliderOptions::default()
//!     .segments([Segment::new(Color::RED, 50.0), Segment::new(Color::BLUE, 50.0)])
//!     .step_size(5.0)
//!     .handle_width(Px(20.0));
//! let mut slider = SegmentedSliderController::with_options(options).unwrap();
//! slider.layout(Px(220.0));
//!
//! let mut host = Host::default();
//! slider.pointer_down(Px(110.0), &mut host);
//! slider.pointer_up(Px(170.0), &mut host);
//! assert_eq!(host.latest, vec![80.0, 20.0]);
//! assert_eq!(host.repaints, 1);
//! ```

use tracing::warn;

use crate::{
    DragEnd, Px, Redistribution, Segment, SegmentValue, SegmentValues, SliderConfigError,
    SliderLayout, SliderObserver, SliderOptions, TracingObserver, ValueModel,
    options::DEFAULT_HANDLE_WIDTH, redistribute,
};

/// Callbacks from the slider core into the host view.
///
/// Both methods run synchronously inside the pointer handler that caused
/// them. The controller stays mutably borrowed for the whole call, so a
/// host cannot start another drag step from inside a notification.
pub trait SliderHost {
    /// Segment values changed after the handle at `handle_index` moved.
    fn on_value_changed(&mut self, handle_index: usize, segments: &[SegmentValue]);

    /// The slider needs to be painted again.
    fn request_repaint(&mut self);
}

/// A single-pointer event in track coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// The pointer touched down.
    Down(Px),
    /// The pointer moved while down.
    Move(Px),
    /// The pointer was lifted.
    Up(Px),
    /// The host cancelled the gesture.
    Cancel(Px),
}

/// An active drag on one handle.
///
/// The pointer x itself is treated as the handle centre once the drag has
/// started, so a handle grabbed off-centre jumps under the pointer on the
/// first move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    /// Index of the segment left of the dragged handle.
    pub handle_index: usize,
}

/// State of the gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    /// No handle is being dragged.
    Idle,
    /// A handle is being dragged.
    Dragging(DragSession),
}

/// Touch state machine and value owner of a segmented slider.
pub struct SegmentedSliderController {
    model: ValueModel,
    track_width: Px,
    handle_width: Px,
    touch_slop: Px,
    disabled: bool,
    session: Option<DragSession>,
    observer: Box<dyn SliderObserver>,
}

impl Default for SegmentedSliderController {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentedSliderController {
    /// Creates a controller with no segments and a zero-width track.
    pub fn new() -> Self {
        Self {
            model: ValueModel::new(),
            track_width: Px::ZERO,
            handle_width: DEFAULT_HANDLE_WIDTH,
            touch_slop: Px::ZERO,
            disabled: false,
            session: None,
            observer: Box::new(TracingObserver),
        }
    }

    /// Creates a controller from a complete configuration.
    pub fn with_options(options: SliderOptions) -> Result<Self, SliderConfigError> {
        let mut controller = Self::new();
        controller.set_slider_options(options)?;
        Ok(controller)
    }

    /// Replaces the whole configuration.
    ///
    /// On success any drag in progress is cancelled. On error nothing
    /// changes.
    pub fn set_slider_options(&mut self, options: SliderOptions) -> Result<(), SliderConfigError> {
        let result = validate_pixel_length("handle width", options.handle_width)
            .and_then(|()| validate_pixel_length("touch slop", options.touch_slop))
            .and_then(|()| {
                self.model.replace(
                    options.segments,
                    (options.range_start, options.range_end),
                    options.step_size,
                    options.snap_rule,
                )
            });
        if let Err(err) = result {
            warn!("rejected segmented slider options: {err}");
            return Err(err);
        }
        self.handle_width = options.handle_width;
        self.touch_slop = options.touch_slop;
        self.disabled = options.disabled;
        self.end_session(DragEnd::Cancelled);
        Ok(())
    }

    /// Replaces the segment list; see [`ValueModel::set_segments`].
    ///
    /// On success any drag in progress is cancelled.
    pub fn set_segments(
        &mut self,
        segments: impl IntoIterator<Item = Segment>,
    ) -> Result<(), SliderConfigError> {
        self.model.set_segments(segments)?;
        self.end_session(DragEnd::Cancelled);
        Ok(())
    }

    /// Sets the absolute value range; see [`ValueModel::set_range`].
    pub fn set_range(&mut self, start: f32, end: f32) -> Result<(), SliderConfigError> {
        self.model.set_range(start, end)
    }

    /// Sets the snapping granularity; see [`ValueModel::set_step_size`].
    pub fn set_step_size(&mut self, step: f32) -> Result<(), SliderConfigError> {
        self.model.set_step_size(step)
    }

    /// Enables or disables pointer input. Disabling cancels any drag.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.end_session(DragEnd::Cancelled);
        }
    }

    /// Installs the instrumentation sink.
    pub fn set_observer(&mut self, observer: impl SliderObserver + 'static) {
        self.observer = Box::new(observer);
    }

    /// Records the current track width, in pixels.
    pub fn layout(&mut self, track_width: Px) {
        if !track_width.is_finite() {
            warn!("ignoring non-finite track width {track_width}");
            self.track_width = Px::ZERO;
            return;
        }
        self.track_width = track_width.positive();
    }

    /// Computes the layout for the current values and track width.
    pub fn current_layout(&self) -> SliderLayout {
        SliderLayout::compute(&self.model, self.track_width, self.handle_width)
    }

    /// Returns the value model.
    pub fn model(&self) -> &ValueModel {
        &self.model
    }

    /// Returns the color and percentage of every segment.
    pub fn segment_values(&self) -> SegmentValues {
        self.model.segment_values()
    }

    /// Returns the state of the gesture state machine.
    pub fn state(&self) -> GestureState {
        match self.session {
            Some(session) => GestureState::Dragging(session),
            None => GestureState::Idle,
        }
    }

    /// Returns the handle being dragged, if any.
    pub fn active_handle_index(&self) -> Option<usize> {
        self.session.map(|session| session.handle_index)
    }

    /// Returns `true` while a handle is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Returns `true` when pointer input is ignored.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Dispatches a pointer event. Returns whether the event was consumed.
    pub fn handle_pointer_event(
        &mut self,
        event: PointerEvent,
        host: &mut impl SliderHost,
    ) -> bool {
        match event {
            PointerEvent::Down(x) => self.pointer_down(x, host),
            PointerEvent::Move(x) => self.pointer_move(x, host),
            PointerEvent::Up(x) => self.pointer_up(x, host),
            PointerEvent::Cancel(x) => self.pointer_cancel(x, host),
        }
    }

    /// Starts a drag when `x` hits a handle.
    ///
    /// The event is consumed even on a miss so that a parent does not
    /// start scrolling underneath the slider.
    pub fn pointer_down(&mut self, x: Px, _host: &mut impl SliderHost) -> bool {
        if self.disabled {
            return false;
        }
        // A down without a matching up means the host lost the pointer.
        self.end_session(DragEnd::Cancelled);

        let layout = self.current_layout();
        match layout.hit_test(x, self.touch_slop) {
            Some(zone) => {
                self.session = Some(DragSession {
                    handle_index: zone.segment_index,
                });
                self.observer.drag_started(zone.segment_index, x);
            }
            None => self.observer.hit_missed(x),
        }
        true
    }

    /// Moves the dragged handle without snapping.
    pub fn pointer_move(&mut self, x: Px, host: &mut impl SliderHost) -> bool {
        if self.disabled {
            return false;
        }
        self.drag_step(x, false, host);
        true
    }

    /// Moves the dragged handle, snaps it and ends the drag.
    pub fn pointer_up(&mut self, x: Px, host: &mut impl SliderHost) -> bool {
        self.finish(x, DragEnd::Released, host)
    }

    /// Same as [`pointer_up`](Self::pointer_up), reported as a cancellation.
    pub fn pointer_cancel(&mut self, x: Px, host: &mut impl SliderHost) -> bool {
        self.finish(x, DragEnd::Cancelled, host)
    }

    fn finish(&mut self, x: Px, reason: DragEnd, host: &mut impl SliderHost) -> bool {
        if self.disabled {
            return false;
        }
        self.drag_step(x, true, host);
        self.end_session(reason);
        true
    }

    fn drag_step(
        &mut self,
        x: Px,
        nearest: bool,
        host: &mut impl SliderHost,
    ) -> Option<Redistribution> {
        let session = self.session?;
        let handle_index = session.handle_index;
        // Values may have changed since the last event.
        let layout = self.current_layout();

        let (min_bound, max_bound) = layout.drag_bounds(handle_index);
        let center = x.clamp(min_bound, max_bound);
        if center != x {
            self.observer.position_clamped(handle_index, x, center);
        }

        let percentage = layout.percentage_at(handle_index, center)?;
        let step = redistribute(&mut self.model, handle_index, percentage, nearest)?;
        self.observer.redistributed(&step, nearest);

        let values = self.model.segment_values();
        host.on_value_changed(handle_index, &values);
        host.request_repaint();
        Some(step)
    }

    fn end_session(&mut self, reason: DragEnd) {
        if let Some(session) = self.session.take() {
            self.observer.drag_ended(session.handle_index, reason);
        }
    }
}

fn validate_pixel_length(name: &'static str, value: Px) -> Result<(), SliderConfigError> {
    if value.is_finite() && value >= Px::ZERO {
        Ok(())
    } else {
        Err(SliderConfigError::InvalidPixelLength {
            name,
            value: value.to_f32(),
        })
    }
}
