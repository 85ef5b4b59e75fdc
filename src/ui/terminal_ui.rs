use log::debug;

use crate::World;
use crate::control::describe_mode;
use crate::core::Origin;

#[derive(PartialEq, Clone, Debug)]
pub struct DisplayData {
    pub frame: u64,
    pub mode: String,
    pub base_speed: f32,
    pub rural_entities: usize,
    pub urban_entities: usize,
}

impl DisplayData {
    pub fn snapshot(world: &World) -> Self {
        DisplayData {
            frame: world.get_frame(),
            mode: describe_mode(world.get_flow().get_mode()).to_string(),
            base_speed: world.get_flow().get_base_speed(),
            rural_entities: world.count_by_origin(Origin::Rural),
            urban_entities: world.count_by_origin(Origin::Urban),
        }
    }
}

pub fn format_status(data: &DisplayData) -> String {
    format!(
        "frame {} | mode: {} | speed: {:.1} | field-born: {} | city-born: {}",
        data.frame, data.mode, data.base_speed, data.rural_entities, data.urban_entities
    )
}

pub fn log_to_terminal(world: &World) {
    debug!("{}", format_status(&DisplayData::snapshot(world)));
}
