use rand::Rng;

use crate::core::{Canvas, Rgba, Translated, map_range};
use crate::simulation::SimConfig;

const HOUSE_WIDTH: f32 = 100.0;
const HOUSE_HEIGHT: f32 = 80.0;
const WINDOW_SIZE: f32 = 20.0;
/// Floor height and column pitch a building's window grid is derived from.
const WINDOW_CELL: f32 = 30.0;
const LIT_CHANCE: f64 = 0.7;

#[derive(PartialEq, Clone, Debug)]
pub struct RuralHouse {
    x: f32,
    y: f32,
}

impl RuralHouse {
    /// `(x, y)` is the top-left corner of the house body.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn get_position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        let mut local = Translated::new(canvas, self.x, self.y);

        local.fill_rect(0.0, 0.0, HOUSE_WIDTH, HOUSE_HEIGHT, Rgba::rgb(180.0, 140.0, 100.0));
        local.fill_triangle(
            (0.0, 0.0),
            (HOUSE_WIDTH, 0.0),
            (HOUSE_WIDTH / 2.0, -50.0),
            Rgba::rgb(120.0, 80.0, 50.0),
        );

        let frame = Rgba::rgb(80.0, 40.0, 20.0);
        local.fill_rect(HOUSE_WIDTH / 2.0 - 10.0, HOUSE_HEIGHT - 30.0, 20.0, 30.0, frame);

        local.fill_rect(15.0, 15.0, 30.0, 30.0, Rgba::rgb(200.0, 220.0, 255.0));
        local.line((15.0, 30.0), (45.0, 30.0), 1.0, frame);
        local.line((30.0, 15.0), (30.0, 45.0), 1.0, frame);
    }
}

#[derive(PartialEq, Clone, Debug)]
pub struct UrbanBuilding {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl UrbanBuilding {
    /// `(x, y)` is the bottom-left corner; the building rises `height` above it.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn spawn(x: f32, y: f32, rng: &mut impl Rng) -> Self {
        Self::new(x, y, rng.gen_range(80.0..120.0), rng.gen_range(100.0..180.0))
    }

    pub fn get_position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn get_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Rows and columns of the window grid.
    pub fn window_grid(&self) -> (u32, u32) {
        (
            (self.height / WINDOW_CELL).floor() as u32,
            (self.width / WINDOW_CELL).floor() as u32,
        )
    }

    /// Windows flicker: each one is re-rolled lit or dark on every call.
    pub fn render(&self, canvas: &mut dyn Canvas, rng: &mut dyn rand::RngCore) {
        let mut local = Translated::new(canvas, self.x, self.y);

        local.fill_rect(
            0.0,
            -self.height,
            self.width,
            self.height,
            Rgba::rgb(120.0, 120.0, 130.0),
        );

        let (rows, columns) = self.window_grid();
        if columns == 0 {
            return;
        }
        let pitch = self.width / columns as f32 * 0.8;

        for row in 0..rows {
            for column in 0..columns {
                let color = if rng.gen_bool(LIT_CHANCE) {
                    Rgba::rgba(255.0, 255.0, 100.0, rng.gen_range(180.0..255.0))
                } else {
                    Rgba::rgba(50.0, 50.0, 60.0, 100.0)
                };
                local.fill_rect(
                    5.0 + column as f32 * pitch,
                    -self.height + 5.0 + row as f32 * 25.0,
                    WINDOW_SIZE,
                    WINDOW_SIZE,
                    color,
                );
            }
        }
    }
}

/// Three houses spread over the field half of the canvas.
pub fn rural_row(config: &SimConfig) -> Vec<RuralHouse> {
    (0..3)
        .map(|i| {
            let x = map_range(i as f32, 0.0, 2.0, 80.0, config.width / 2.0 - 120.0);
            RuralHouse::new(x, config.height - 120.0)
        })
        .collect()
}

/// Three buildings of random size spread over the city half of the canvas.
pub fn urban_row(config: &SimConfig, rng: &mut impl Rng) -> Vec<UrbanBuilding> {
    (0..3)
        .map(|i| {
            let x = map_range(
                i as f32,
                0.0,
                2.0,
                config.width / 2.0 + 80.0,
                config.width - 150.0,
            );
            UrbanBuilding::spawn(x, config.height - 150.0, rng)
        })
        .collect()
}
