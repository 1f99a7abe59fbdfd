mod host;

use tessera_segmented_slider::{
    Color, PointerEvent, Px, Segment, SegmentedSliderController, SliderOptions,
};
use tracing::{error, info};

use crate::host::{ConsoleHost, render_track};

const TRACK_WIDTH: Px = Px(360.0);

fn main() {
    init_tracing();

    let options = SliderOptions::default()
        .segments([
            Segment::new(Color::from_rgb_u8(0xE5, 0x39, 0x35), 20.0),
            Segment::new(Color::from_rgb_u8(0xFB, 0x8C, 0x00), 20.0).minimum(10.0),
            Segment::new(Color::from_rgb_u8(0x43, 0xA0, 0x47), 20.0),
            Segment::new(Color::from_rgb_u8(0x1E, 0x88, 0xE5), 40.0),
        ])
        .range(0.0, 100.0)
        .step_size(5.0)
        .handle_width(Px(12.0));

    let mut slider = match SegmentedSliderController::with_options(options) {
        Ok(slider) => slider,
        Err(err) => {
            error!("invalid slider options: {err}");
            return;
        }
    };
    slider.layout(TRACK_WIDTH);

    let mut host = ConsoleHost::default();
    println!("{}", render_track(&slider, 2.0));

    // Drag the second handle right, then squeeze the second segment
    // against its minimum with the first handle.
    let second = slider.current_layout().handles()[1].center();
    let first = slider.current_layout().handles()[0].center();
    let script = [
        PointerEvent::Down(second),
        PointerEvent::Move(second + Px(25.0)),
        PointerEvent::Move(second + Px(52.0)),
        PointerEvent::Up(second + Px(52.0)),
        PointerEvent::Down(first),
        PointerEvent::Move(first + Px(200.0)),
        PointerEvent::Up(first + Px(200.0)),
        PointerEvent::Down(Px(5.0)),
    ];

    for event in script {
        let consumed = slider.handle_pointer_event(event, &mut host);
        info!(?event, consumed, active = ?slider.active_handle_index(), "pointer event");
        host.frame(&slider);
    }

    let model = slider.model();
    for index in 0..model.len() {
        if let Some(value) = model.absolute_value(index) {
            info!(index, value, "final value");
        }
    }
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,example=info,tessera_segmented_slider=debug",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
