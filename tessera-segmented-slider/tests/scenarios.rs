//! End-to-end drag scenarios driven through the public controller API.

use std::{cell::RefCell, rc::Rc};

use tessera_segmented_slider::{
    Color, DragEnd, GestureState, PointerEvent, Px, Segment, SegmentValue,
    SegmentedSliderController, SliderHost, SliderObserver, SliderOptions, ValueModel,
};

#[derive(Default)]
struct RecordingHost {
    changes: Vec<Vec<f32>>,
    repaints: usize,
}

impl SliderHost for RecordingHost {
    fn on_value_changed(&mut self, _handle_index: usize, segments: &[SegmentValue]) {
        self.changes
            .push(segments.iter().map(|segment| segment.value).collect());
    }

    fn request_repaint(&mut self) {
        self.repaints += 1;
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Observed {
    Started(usize),
    Missed,
    Clamped(usize),
    Redistributed { snapped: bool, clamped: bool },
    Ended(usize, DragEnd),
}

#[derive(Clone, Default)]
struct RecordingObserver(Rc<RefCell<Vec<Observed>>>);

impl SliderObserver for RecordingObserver {
    fn drag_started(&mut self, handle_index: usize, _x: Px) {
        self.0.borrow_mut().push(Observed::Started(handle_index));
    }

    fn hit_missed(&mut self, _x: Px) {
        self.0.borrow_mut().push(Observed::Missed);
    }

    fn position_clamped(&mut self, handle_index: usize, _requested: Px, _clamped: Px) {
        self.0.borrow_mut().push(Observed::Clamped(handle_index));
    }

    fn redistributed(&mut self, step: &tessera_segmented_slider::Redistribution, snapped: bool) {
        self.0.borrow_mut().push(Observed::Redistributed {
            snapped,
            clamped: step.clamped,
        });
    }

    fn drag_ended(&mut self, handle_index: usize, reason: DragEnd) {
        self.0.borrow_mut().push(Observed::Ended(handle_index, reason));
    }
}

fn values(slider: &SegmentedSliderController) -> Vec<f32> {
    slider
        .model()
        .segments()
        .iter()
        .map(|segment| segment.value)
        .collect()
}

fn assert_close(actual: &[f32], expected: &[f32]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-3, "{actual:?} vs {expected:?}");
    }
}

fn four_segments(minimums: [f32; 4]) -> SegmentedSliderController {
    let colors = [Color::RED, Color::GREEN, Color::BLUE, Color::BLACK];
    let values = [30.0, 30.0, 20.0, 20.0];
    let options = SliderOptions::default()
        .segments(
            colors
                .into_iter()
                .zip(values)
                .zip(minimums)
                .map(|((color, value), minimum)| Segment::new(color, value).minimum(minimum)),
        )
        .step_size(5.0)
        .handle_width(Px(20.0));
    let mut slider = SegmentedSliderController::with_options(options).unwrap();
    // 3 handles of 20px leave 400px for the segments.
    slider.layout(Px(460.0));
    slider
}

#[test]
fn normalization_divides_by_range_end() {
    let mut model = ValueModel::new();
    model.set_segments([Segment::new(Color::RED, 30.0)]).unwrap();
    assert_eq!(model.segments()[0].value, 30.0);

    model.set_range(0.0, 200.0).unwrap();
    model.set_segments([Segment::new(Color::RED, 60.0)]).unwrap();
    assert_eq!(model.segments()[0].value, 30.0);

    model
        .set_segments([Segment::new(Color::RED, 60.0), Segment::new(Color::BLUE, 140.0)])
        .unwrap();
    assert_eq!(model.total(), 100.0);
}

#[test]
fn dragging_first_handle_to_fifty_percent() {
    let mut slider = four_segments([0.0; 4]);
    let observer = RecordingObserver::default();
    slider.set_observer(observer.clone());
    let mut host = RecordingHost::default();

    let layout = slider.current_layout();
    let rest = layout.handles()[0].center();
    let target = layout.center_for_percentage(0, 50.0);

    assert!(slider.handle_pointer_event(PointerEvent::Down(rest), &mut host));
    assert_eq!(slider.active_handle_index(), Some(0));

    // Halfway there: unsnapped feedback.
    let halfway = layout.center_for_percentage(0, 41.0);
    slider.handle_pointer_event(PointerEvent::Move(halfway), &mut host);
    assert_close(&values(&slider), &[41.0, 19.0, 20.0, 20.0]);

    slider.handle_pointer_event(PointerEvent::Move(target), &mut host);
    slider.handle_pointer_event(PointerEvent::Up(target), &mut host);
    assert_close(&values(&slider), &[50.0, 10.0, 20.0, 20.0]);
    assert!((slider.model().total() - 100.0).abs() < 1e-3);
    assert_eq!(slider.state(), GestureState::Idle);

    assert_eq!(host.changes.len(), 3);
    assert_eq!(host.repaints, 3);
    assert_eq!(
        observer.0.borrow().last(),
        Some(&Observed::Ended(0, DragEnd::Released))
    );
    assert_eq!(
        observer.0.borrow()[3],
        Observed::Redistributed {
            snapped: true,
            clamped: false
        }
    );
}

#[test]
fn release_snaps_with_the_fixed_threshold() {
    let mut slider = four_segments([0.0; 4]);
    let mut host = RecordingHost::default();
    let layout = slider.current_layout();

    slider.pointer_down(layout.handles()[0].center(), &mut host);
    // 52.9 has a remainder of 2.9 against a step of 5: rounds down.
    slider.pointer_up(layout.center_for_percentage(0, 52.9), &mut host);
    assert_close(&values(&slider), &[50.0, 10.0, 20.0, 20.0]);

    let layout = slider.current_layout();
    slider.pointer_down(layout.handles()[0].center(), &mut host);
    // 43.2 has a remainder of 3.2: rounds up.
    slider.pointer_up(layout.center_for_percentage(0, 43.2), &mut host);
    assert_close(&values(&slider), &[45.0, 15.0, 20.0, 20.0]);
}

#[test]
fn minimum_stops_the_shrinking_segment() {
    let mut slider = four_segments([10.0, 0.0, 0.0, 0.0]);
    let observer = RecordingObserver::default();
    slider.set_observer(observer.clone());
    let mut host = RecordingHost::default();
    let layout = slider.current_layout();

    slider.pointer_down(layout.handles()[0].center(), &mut host);
    slider.pointer_move(layout.center_for_percentage(0, 5.0), &mut host);

    // Segment 0 stops at 10; segment 1 gains only the 20 points given up.
    assert_close(&values(&slider), &[10.0, 50.0, 20.0, 20.0]);
    assert!(observer.0.borrow().contains(&Observed::Redistributed {
        snapped: false,
        clamped: true
    }));

    slider.pointer_up(layout.center_for_percentage(0, 5.0), &mut host);
    assert_close(&values(&slider), &[10.0, 50.0, 20.0, 20.0]);
}

#[test]
fn inner_handle_cannot_cross_its_neighbours() {
    let mut slider = four_segments([0.0; 4]);
    let observer = RecordingObserver::default();
    slider.set_observer(observer.clone());
    let mut host = RecordingHost::default();
    let layout = slider.current_layout();

    slider.pointer_down(layout.handles()[1].center(), &mut host);
    slider.pointer_move(Px(0.0), &mut host);
    assert!(observer.0.borrow().contains(&Observed::Clamped(1)));

    let after = values(&slider);
    assert!(after[1] >= 0.0);
    assert_close(&[after[0], after[3]], &[30.0, 20.0]);
    assert!((slider.model().total() - 100.0).abs() < 1e-3);

    let handles = slider.current_layout().handles().to_vec();
    assert!(handles[0].end <= handles[1].start);
}

#[test]
fn pointer_down_between_handles_is_a_miss() {
    let mut slider = four_segments([0.0; 4]);
    let observer = RecordingObserver::default();
    slider.set_observer(observer.clone());
    let mut host = RecordingHost::default();
    let layout = slider.current_layout();

    // Handle 0 spans 120..140px; 10px outside its half-width on both sides.
    let centre = layout.handles()[0].center();
    for x in [centre - Px(20.0), centre + Px(20.0)] {
        assert!(slider.pointer_down(x, &mut host), "miss is still consumed");
        assert_eq!(slider.active_handle_index(), None);
        slider.pointer_move(x + Px(40.0), &mut host);
        slider.pointer_up(x + Px(40.0), &mut host);
    }

    assert!(host.changes.is_empty());
    assert_eq!(host.repaints, 0);
    assert_eq!(
        observer.0.borrow().as_slice(),
        &[Observed::Missed, Observed::Missed]
    );
    assert_close(&values(&slider), &[30.0, 30.0, 20.0, 20.0]);
}

#[test]
fn touch_slop_widens_hit_zones() {
    let options = SliderOptions::default()
        .segments([Segment::new(Color::RED, 50.0), Segment::new(Color::BLUE, 50.0)])
        .handle_width(Px(20.0))
        .touch_slop(Px(8.0));
    let mut slider = SegmentedSliderController::with_options(options).unwrap();
    slider.layout(Px(220.0));
    let mut host = RecordingHost::default();

    assert!(slider.pointer_down(Px(93.0), &mut host));
    assert_eq!(slider.active_handle_index(), Some(0));
}

#[test]
fn empty_slider_consumes_events_without_changes() {
    let mut slider = SegmentedSliderController::new();
    slider.layout(Px(300.0));
    let mut host = RecordingHost::default();
    assert!(slider.pointer_down(Px(150.0), &mut host));
    assert!(slider.pointer_move(Px(200.0), &mut host));
    assert!(slider.pointer_up(Px(200.0), &mut host));
    assert!(host.changes.is_empty());
    assert!(slider.current_layout().spans().is_empty());
}

#[test]
fn values_map_back_to_host_units() {
    let options = SliderOptions::default()
        .segments([Segment::new(Color::RED, 60.0), Segment::new(Color::BLUE, 140.0)])
        .range(0.0, 200.0)
        .step_size(5.0)
        .handle_width(Px(20.0));
    let mut slider = SegmentedSliderController::with_options(options).unwrap();
    slider.layout(Px(220.0));
    let mut host = RecordingHost::default();

    let layout = slider.current_layout();
    slider.pointer_down(layout.handles()[0].center(), &mut host);
    slider.pointer_up(layout.center_for_percentage(0, 50.0), &mut host);

    let model = slider.model();
    assert!((model.absolute_value(0).unwrap() - 100.0).abs() < 1e-3);
    assert!((model.absolute_value(1).unwrap() - 100.0).abs() < 1e-3);
    assert_eq!(model.map_fraction_to_value(0.5), 100.0);
}
