use rand::RngCore;

use crate::World;
use crate::core::Canvas;
use crate::render::draw_scene;
use crate::ui::draw_overlay;

/// Paints one frame of `world`: backdrop, houses, buildings, entities, then the
/// settings overlay. `rng` only drives window flicker; the world is untouched.
pub fn render(world: &World, canvas: &mut dyn Canvas, rng: &mut dyn RngCore) {
    let config = world.get_config();
    draw_scene(canvas, config.width, config.height);

    for house in world.get_rural_structures() {
        house.render(canvas);
    }
    for building in world.get_urban_structures() {
        building.render(canvas, rng);
    }

    for entity in world.get_entities() {
        entity.render(canvas);
    }

    draw_overlay(canvas, world.get_flow());
}
