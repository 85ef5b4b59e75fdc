#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Origin {
    Rural,
    Urban,
}

impl Origin {
    /// Horizontal sign of travel: rural entities head right, urban ones left.
    pub fn direction(&self) -> f32 {
        match self {
            Origin::Rural => 1.0,
            Origin::Urban => -1.0,
        }
    }
}

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub enum FlowMode {
    #[default]
    Bidirectional,
    RuralToUrban,
    UrbanToRural,
}

impl FlowMode {
    /// Whether entities born at `origin` keep spawning in this mode.
    pub fn spawns(&self, origin: Origin) -> bool {
        matches!(
            (self, origin),
            (FlowMode::Bidirectional, _)
                | (FlowMode::RuralToUrban, Origin::Rural)
                | (FlowMode::UrbanToRural, Origin::Urban)
        )
    }

    /// Whether entities born at `origin` get the speed boost in this mode.
    pub fn boosts(&self, origin: Origin) -> bool {
        matches!(
            (self, origin),
            (FlowMode::RuralToUrban, Origin::Rural) | (FlowMode::UrbanToRural, Origin::Urban)
        )
    }
}

/// User-controlled flow settings. The base speed is kept as a whole number of
/// `speed_step` increments so raising and lowering it is exact.
#[derive(PartialEq, Clone, Debug)]
pub struct FlowState {
    mode: FlowMode,
    speed_steps: u32,
    min_speed_steps: u32,
    speed_step: f32,
}

impl FlowState {
    pub fn new(speed_step: f32, speed_steps: u32, min_speed_steps: u32) -> Self {
        Self {
            mode: FlowMode::default(),
            speed_steps: speed_steps.max(min_speed_steps),
            min_speed_steps,
            speed_step,
        }
    }

    pub fn get_mode(&self) -> FlowMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: FlowMode) {
        self.mode = mode;
    }

    pub fn get_speed_steps(&self) -> u32 {
        self.speed_steps
    }

    pub fn get_base_speed(&self) -> f32 {
        self.speed_steps as f32 * self.speed_step
    }

    pub fn get_min_speed(&self) -> f32 {
        self.min_speed_steps as f32 * self.speed_step
    }

    pub fn increase_speed(&mut self) {
        self.speed_steps = self.speed_steps.saturating_add(1);
    }

    pub fn decrease_speed(&mut self) {
        self.speed_steps = self
            .speed_steps
            .saturating_sub(1)
            .max(self.min_speed_steps);
    }
}

#[cfg(test)]
mod state_tests {
    use super::*;

    fn default_flow() -> FlowState {
        FlowState::new(0.2, 4, 1)
    }

    #[test]
    fn starts_bidirectional_at_default_speed() {
        let flow = default_flow();

        assert_eq!(flow.get_mode(), FlowMode::Bidirectional);
        assert!((flow.get_base_speed() - 0.8).abs() < 1e-6, "base speed 0.8");
    }

    #[test]
    fn speed_never_drops_below_floor() {
        let mut flow = default_flow();

        for _ in 0..50 {
            flow.decrease_speed();
            assert!(
                flow.get_base_speed() >= flow.get_min_speed(),
                "speed {} fell under the floor",
                flow.get_base_speed()
            );
        }

        assert_eq!(flow.get_speed_steps(), 1, "clamped at one step");
        assert!((flow.get_base_speed() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn up_then_down_round_trips() {
        let mut flow = default_flow();
        let original = flow.get_base_speed();

        for _ in 0..7 {
            flow.increase_speed();
        }
        for _ in 0..7 {
            flow.decrease_speed();
        }

        assert_eq!(flow.get_base_speed(), original, "speed restored exactly");
    }

    #[test]
    fn initial_speed_is_clamped_to_floor() {
        let flow = FlowState::new(0.2, 0, 2);

        assert_eq!(flow.get_speed_steps(), 2);
    }

    #[test]
    fn spawn_gating_per_mode() {
        assert!(FlowMode::Bidirectional.spawns(Origin::Rural));
        assert!(FlowMode::Bidirectional.spawns(Origin::Urban));
        assert!(FlowMode::RuralToUrban.spawns(Origin::Rural));
        assert!(!FlowMode::RuralToUrban.spawns(Origin::Urban));
        assert!(!FlowMode::UrbanToRural.spawns(Origin::Rural));
        assert!(FlowMode::UrbanToRural.spawns(Origin::Urban));
    }

    #[test]
    fn boost_only_matches_focused_origin() {
        assert!(!FlowMode::Bidirectional.boosts(Origin::Rural));
        assert!(!FlowMode::Bidirectional.boosts(Origin::Urban));
        assert!(FlowMode::RuralToUrban.boosts(Origin::Rural));
        assert!(!FlowMode::RuralToUrban.boosts(Origin::Urban));
        assert!(FlowMode::UrbanToRural.boosts(Origin::Urban));
        assert!(!FlowMode::UrbanToRural.boosts(Origin::Rural));
    }
}
