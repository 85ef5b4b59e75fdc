use rand::Rng;

use crate::core::{Canvas, FlowState, Origin, Rgba, lerp};
use crate::simulation::SimConfig;

/// Color an entity eases toward once it has crossed into the other zone.
const URBAN_ARRIVAL_COLOR: Rgba = Rgba::rgb(200.0, 200.0, 255.0);
const RURAL_ARRIVAL_COLOR: Rgba = Rgba::rgb(150.0, 255.0, 150.0);
const URBAN_ARRIVAL_SIZE: f32 = 18.0;
const RURAL_ARRIVAL_SIZE: f32 = 22.0;

#[derive(PartialEq, Clone, Debug)]
pub struct TransitEntity {
    origin: Origin,
    x: f32,
    y: f32,
    direction: f32,
    individual_speed: f32,
    size: f32,
    color: Rgba,
}

impl TransitEntity {
    pub fn new(
        origin: Origin,
        x: f32,
        y: f32,
        individual_speed: f32,
        size: f32,
        color: Rgba,
    ) -> Self {
        Self {
            origin,
            x,
            y,
            direction: origin.direction(),
            individual_speed,
            size,
            color,
        }
    }

    /// Rolls a fresh entity in its origin's third of the canvas.
    pub fn spawn(origin: Origin, config: &SimConfig, rng: &mut impl Rng) -> Self {
        let size = rng.gen_range(15.0..25.0);
        let individual_speed = rng.gen_range(0.8..1.5);
        let color = Rgba::rgb(
            rng.gen_range(200.0..255.0),
            rng.gen_range(100.0..200.0),
            rng.gen_range(50.0..150.0),
        );
        let x = match origin {
            Origin::Rural => rng.gen_range(0.0..config.width / 3.0),
            Origin::Urban => rng.gen_range(config.width * 2.0 / 3.0..config.width),
        };

        Self::new(origin, x, config.lane_y(), individual_speed, size, color)
    }

    pub fn get_speed(&self, flow: &FlowState, config: &SimConfig) -> f32 {
        let speed = self.individual_speed * flow.get_base_speed();
        if flow.get_mode().boosts(self.origin) {
            speed * config.boost
        } else {
            speed
        }
    }

    pub fn update(&mut self, flow: &FlowState, config: &SimConfig) {
        self.x += self.direction * self.get_speed(flow, config);

        let midline = config.midline();
        let arrival = match self.origin {
            Origin::Rural if self.x > midline => Some((URBAN_ARRIVAL_COLOR, URBAN_ARRIVAL_SIZE)),
            Origin::Urban if self.x < midline => Some((RURAL_ARRIVAL_COLOR, RURAL_ARRIVAL_SIZE)),
            _ => None,
        };

        if let Some((color, size)) = arrival {
            self.color = self.color.lerp(color, config.ease);
            self.size = lerp(self.size, size, config.ease);
        }
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.fill_ellipse(self.x, self.y, self.size, self.size, self.color);
    }

    pub fn is_offscreen(&self, width: f32) -> bool {
        self.x < -self.size || self.x > width + self.size
    }

    pub fn get_origin(&self) -> Origin {
        self.origin
    }

    pub fn get_position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn get_direction(&self) -> f32 {
        self.direction
    }

    pub fn get_individual_speed(&self) -> f32 {
        self.individual_speed
    }

    pub fn get_size(&self) -> f32 {
        self.size
    }

    pub fn get_color(&self) -> Rgba {
        self.color
    }
}
