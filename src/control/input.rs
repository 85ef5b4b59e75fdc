use log::info;

use crate::core::{FlowMode, FlowState};

/// Key identity as reported by the host, independent of the windowing backend.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Other,
}

pub fn describe_mode(mode: FlowMode) -> &'static str {
    match mode {
        FlowMode::Bidirectional => "Bidirectional",
        FlowMode::RuralToUrban => "Field to City",
        FlowMode::UrbanToRural => "City to Field",
    }
}

/// Applies a key press to the flow settings. Returns whether anything changed.
pub fn handle_key(flow: &mut FlowState, key: Key) -> bool {
    let mode = match key {
        Key::Char(c) => match c.to_ascii_lowercase() {
            'c' => Some(FlowMode::RuralToUrban),
            'u' => Some(FlowMode::UrbanToRural),
            'b' => Some(FlowMode::Bidirectional),
            _ => None,
        },
        Key::Up => {
            flow.increase_speed();
            info!("flow speed: {:.1}", flow.get_base_speed());
            return true;
        }
        Key::Down => {
            let before = flow.get_speed_steps();
            flow.decrease_speed();
            info!("flow speed: {:.1}", flow.get_base_speed());
            return before != flow.get_speed_steps();
        }
        Key::Other => None,
    };

    match mode {
        Some(mode) => {
            flow.set_mode(mode);
            info!("mode: {}", describe_mode(mode));
            true
        }
        None => false,
    }
}
