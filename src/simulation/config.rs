use thiserror::Error;

use crate::core::FlowState;

#[derive(PartialEq, Eq, Hash, Debug, Error)]
pub enum ConfigErr {
    #[error("invalid config: canvas width and height must be positive")]
    EmptyCanvas,
    #[error("invalid config: spawn interval must be at least one frame")]
    ZeroSpawnInterval,
    #[error("invalid config: speed step must be positive")]
    NonPositiveSpeedStep,
    #[error("invalid config: minimum speed must be at least one step")]
    ZeroSpeedFloor,
    #[error("invalid config: initial speed is below the minimum speed")]
    SpeedBelowFloor,
    #[error("invalid config: boost multiplier must be positive")]
    NonPositiveBoost,
}

#[derive(PartialEq, Clone, Debug)]
pub struct SimConfig {
    pub width: f32,
    pub height: f32,
    pub initial_entities: usize,
    /// Frames between two spawn rounds.
    pub spawn_interval: u64,
    pub boost: f32,
    /// Fraction of the remaining distance covered per frame once across the midline.
    pub ease: f32,
    /// Entities travel along `height - lane_offset`.
    pub lane_offset: f32,
    pub speed_step: f32,
    pub speed_steps: u32,
    pub min_speed_steps: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 500.0,
            initial_entities: 10,
            spawn_interval: 60,
            boost: 1.8,
            ease: 0.05,
            lane_offset: 70.0,
            speed_step: 0.2,
            speed_steps: 4,
            min_speed_steps: 1,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigErr> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ConfigErr::EmptyCanvas);
        }
        if self.spawn_interval == 0 {
            return Err(ConfigErr::ZeroSpawnInterval);
        }
        if self.speed_step <= 0.0 {
            return Err(ConfigErr::NonPositiveSpeedStep);
        }
        if self.min_speed_steps == 0 {
            return Err(ConfigErr::ZeroSpeedFloor);
        }
        if self.speed_steps < self.min_speed_steps {
            return Err(ConfigErr::SpeedBelowFloor);
        }
        if self.boost <= 0.0 {
            return Err(ConfigErr::NonPositiveBoost);
        }

        Ok(())
    }

    pub fn lane_y(&self) -> f32 {
        self.height - self.lane_offset
    }

    pub fn midline(&self) -> f32 {
        self.width / 2.0
    }

    pub fn flow_state(&self) -> FlowState {
        FlowState::new(self.speed_step, self.speed_steps, self.min_speed_steps)
    }
}
