//! Headless core of a segmented range slider.
//!
//! A segmented slider is a horizontal track split into contiguous,
//! proportional segments separated by draggable handles. Dragging a handle
//! moves value between the two segments next to it; the total never
//! changes.
//!
//! This crate owns the values, the pixel layout and the drag state machine.
//! Painting and pointer capture stay with the host, which talks to the core
//! through [`SegmentedSliderController`] and [`SliderHost`].
//!
//! # Example
//!
//! ```
//! use tessera_segmented_slider::{
//!     Color, PointerEvent, Px, Segment, SegmentValue, SegmentedSliderController, SliderHost,
//!     SliderOptions,
//! };
//!
//! struct Repaint(bool);
//!
//! impl SliderHost for Repaint {
//!     fn on_value_changed(&mut self, _handle_index: usize, _segments: &[SegmentValue]) {}
//!
//!     fn request_repaint(&mut self) {
//!         self.0 = true;
//!     }
//! }
//!
//! let options = SliderOptions::default()
//!     .segments([
//!         Segment::new(Color::RED, 30.0),
//!         Segment::new(Color::GREEN, 30.0),
//!         Segment::new(Color::BLUE, 40.0).minimum(10.0),
//!     ])
//!     .step_size(5.0);
//! let mut slider = SegmentedSliderController::with_options(options).unwrap();
//! slider.layout(Px(360.0));
//!
//! let handle = slider.current_layout().handles()[0];
//! let mut host = Repaint(false);
//! slider.handle_pointer_event(PointerEvent::Down(handle.center()), &mut host);
//! slider.handle_pointer_event(PointerEvent::Up(handle.center() + Px(30.0)), &mut host);
//!
//! assert!(host.0);
//! assert!((slider.model().total() - 100.0).abs() < 1e-3);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

mod color;
mod error;
mod gesture;
mod layout;
mod model;
mod observer;
mod options;
mod px;
mod redistribute;
mod snap;

pub use color::Color;
pub use error::SliderConfigError;
pub use gesture::{DragSession, GestureState, PointerEvent, SegmentedSliderController, SliderHost};
pub use layout::{HandleZone, SegmentSpan, SliderLayout};
pub use model::{SUM_TOLERANCE, Segment, SegmentValue, SegmentValues, ValueModel};
pub use observer::{DragEnd, NoopObserver, SliderObserver, TracingObserver};
pub use options::{DEFAULT_HANDLE_WIDTH, SliderOptions};
pub use px::Px;
pub use redistribute::{Redistribution, redistribute};
pub use snap::{LEGACY_ROUND_DOWN_THRESHOLD, SnapRule, find_nearest};
