use tessera_segmented_slider::{SegmentValue, SegmentedSliderController, SliderHost};
use tracing::info;

/// Stand-in for a view: logs every change and paints the track as text.
#[derive(Default)]
pub struct ConsoleHost {
    pub repaint_requested: bool,
}

impl SliderHost for ConsoleHost {
    fn on_value_changed(&mut self, handle_index: usize, segments: &[SegmentValue]) {
        let values: Vec<String> = segments
            .iter()
            .map(|segment| format!("{:.1}", segment.value))
            .collect();
        info!(handle_index, values = %values.join(" | "), "segments changed");
    }

    fn request_repaint(&mut self) {
        self.repaint_requested = true;
    }
}

impl ConsoleHost {
    /// Paints the slider if a repaint was requested since the last frame.
    pub fn frame(&mut self, slider: &SegmentedSliderController) {
        if !std::mem::take(&mut self.repaint_requested) {
            return;
        }
        println!("{}", render_track(slider, 2.0));
    }
}

const SEGMENT_GLYPHS: [char; 4] = ['#', '=', '-', '.'];

/// Renders one character per `px_per_char` pixels, `|` for handles.
pub fn render_track(slider: &SegmentedSliderController, px_per_char: f32) -> String {
    let layout = slider.current_layout();
    let mut line = String::new();
    for (index, span) in layout.spans().iter().enumerate() {
        let glyph = SEGMENT_GLYPHS[index % SEGMENT_GLYPHS.len()];
        let chars = (span.width.to_f32() / px_per_char).round() as usize;
        line.extend(std::iter::repeat_n(glyph, chars));
        if index < layout.handles().len() {
            line.push('|');
        }
    }
    line
}
