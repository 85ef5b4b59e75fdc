use crate::control::describe_mode;
use crate::core::{Canvas, FlowState, Rgba};

const TEXT_SIZE: f32 = 14.0;
const LINE_HEIGHT: f32 = 20.0;
const MARGIN: f32 = 10.0;

pub fn overlay_lines(flow: &FlowState) -> Vec<String> {
    vec![
        "Press 'C': focus Field -> City".to_string(),
        "Press 'U': focus City -> Field".to_string(),
        "Press 'B': bidirectional flow".to_string(),
        "Use UP/DOWN arrows to change the flow speed.".to_string(),
        format!("Current mode: {}", describe_mode(flow.get_mode())),
        format!("Flow speed: {:.1}", flow.get_base_speed()),
    ]
}

pub fn draw_overlay(canvas: &mut dyn Canvas, flow: &FlowState) {
    for (i, line) in overlay_lines(flow).iter().enumerate() {
        let y = MARGIN + i as f32 * LINE_HEIGHT;
        canvas.text(line, MARGIN, y, TEXT_SIZE, Rgba::BLACK);
    }
}

#[cfg(test)]
mod overlay_tests {
    use super::*;
    use crate::core::FlowMode;
    use crate::render::{DrawCall, RecordingCanvas};

    #[test]
    fn reports_current_mode_and_speed() {
        let mut flow = FlowState::new(0.2, 4, 1);

        let lines = overlay_lines(&flow);
        assert_eq!(lines[4], "Current mode: Bidirectional");
        assert_eq!(lines[5], "Flow speed: 0.8");

        flow.set_mode(FlowMode::UrbanToRural);
        flow.increase_speed();
        let lines = overlay_lines(&flow);
        assert_eq!(lines[4], "Current mode: City to Field");
        assert_eq!(lines[5], "Flow speed: 1.0");

        flow.set_mode(FlowMode::RuralToUrban);
        assert_eq!(overlay_lines(&flow)[4], "Current mode: Field to City");
    }

    #[test]
    fn lines_stack_from_top_left() {
        let mut canvas = RecordingCanvas::new();
        draw_overlay(&mut canvas, &FlowState::new(0.2, 4, 1));

        assert_eq!(canvas.calls().len(), 6);
        assert_eq!(
            canvas.calls()[2],
            DrawCall::Text {
                text: "Press 'B': bidirectional flow".to_string(),
                x: 10.0,
                y: 50.0,
                size: 14.0,
                color: Rgba::BLACK
            }
        );
    }
}
