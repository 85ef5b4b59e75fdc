use log::debug;
use rand::Rng;
use rand::rngs::SmallRng;

use crate::core::{FlowState, Origin};
use crate::simulation::structures::{rural_row, urban_row};
use crate::simulation::{RuralHouse, SimConfig, TransitEntity, UrbanBuilding};

/// Everything the animation mutates between frames.
pub struct World {
    config: SimConfig,
    flow: FlowState,
    rural_structures: Vec<RuralHouse>,
    urban_structures: Vec<UrbanBuilding>,
    entities: Vec<TransitEntity>,
    frame: u64,
    rng: SmallRng,
}

impl World {
    pub fn new(config: SimConfig, mut rng: SmallRng) -> Self {
        let rural_structures = rural_row(&config);
        let urban_structures = urban_row(&config, &mut rng);

        let entities = (0..config.initial_entities)
            .map(|_| {
                let origin = if rng.gen_bool(0.5) {
                    Origin::Rural
                } else {
                    Origin::Urban
                };
                TransitEntity::spawn(origin, &config, &mut rng)
            })
            .collect();

        Self {
            flow: config.flow_state(),
            config,
            rural_structures,
            urban_structures,
            entities,
            frame: 0,
            rng,
        }
    }

    pub fn advance(&mut self, frames: u64) {
        for _ in 0..frames {
            self.step();
        }
    }

    fn step(&mut self) {
        self.frame += 1;

        let flow = &self.flow;
        let config = &self.config;
        let before = self.entities.len();
        self.entities.retain_mut(|entity| {
            entity.update(flow, config);
            !entity.is_offscreen(config.width)
        });
        let pruned = before - self.entities.len();
        if pruned > 0 {
            debug!("frame {}: {} entities left the canvas", self.frame, pruned);
        }

        if self.frame % self.config.spawn_interval == 0 {
            let mode = self.flow.get_mode();
            for origin in [Origin::Rural, Origin::Urban] {
                if mode.spawns(origin) {
                    let entity = TransitEntity::spawn(origin, &self.config, &mut self.rng);
                    self.entities.push(entity);
                }
            }
        }
    }

    pub fn get_config(&self) -> &SimConfig {
        &self.config
    }

    pub fn get_flow(&self) -> &FlowState {
        &self.flow
    }

    pub fn get_flow_mut(&mut self) -> &mut FlowState {
        &mut self.flow
    }

    pub fn get_frame(&self) -> u64 {
        self.frame
    }

    pub fn get_entities(&self) -> &[TransitEntity] {
        &self.entities
    }

    pub fn get_rural_structures(&self) -> &[RuralHouse] {
        &self.rural_structures
    }

    pub fn get_urban_structures(&self) -> &[UrbanBuilding] {
        &self.urban_structures
    }

    pub fn count_by_origin(&self, origin: Origin) -> usize {
        self.entities
            .iter()
            .filter(|entity| entity.get_origin() == origin)
            .count()
    }

    #[cfg(test)]
    pub(crate) fn set_entities(&mut self, entities: Vec<TransitEntity>) {
        self.entities = entities;
    }
}

#[cfg(test)]
mod world_tests {
    use super::*;
    use crate::core::{FlowMode, Rgba};
    use rand::SeedableRng;

    fn seeded_world(seed: u64) -> World {
        World::new(SimConfig::default(), SmallRng::seed_from_u64(seed))
    }

    fn parked(origin: Origin) -> TransitEntity {
        // Far enough inside the canvas to survive a few hundred frames.
        let x = match origin {
            Origin::Rural => 10.0,
            Origin::Urban => 890.0,
        };
        TransitEntity::new(origin, x, 430.0, 0.8, 20.0, Rgba::rgb(220.0, 150.0, 100.0))
    }

    #[test]
    fn seeds_structures_and_initial_entities() {
        let world = seeded_world(1);

        assert_eq!(world.get_rural_structures().len(), 3);
        assert_eq!(world.get_urban_structures().len(), 3);
        assert_eq!(world.get_entities().len(), 10);
        assert_eq!(world.get_frame(), 0);

        let width = world.get_config().width;
        for entity in world.get_entities() {
            let (x, _) = entity.get_position();
            match entity.get_origin() {
                Origin::Rural => assert!(x < width / 3.0),
                Origin::Urban => assert!(x >= width * 2.0 / 3.0),
            }
        }
    }

    #[test]
    fn bidirectional_spawns_one_of_each_on_interval() {
        let mut world = seeded_world(2);
        world.set_entities(vec![parked(Origin::Rural), parked(Origin::Urban)]);

        world.advance(59);
        assert_eq!(world.get_entities().len(), 2, "nothing spawned before frame 60");

        world.advance(1);
        assert_eq!(world.get_frame(), 60);
        assert_eq!(world.get_entities().len(), 4);
        assert_eq!(world.count_by_origin(Origin::Rural), 2);
        assert_eq!(world.count_by_origin(Origin::Urban), 2);

        let appended: Vec<Origin> = world.get_entities()[2..]
            .iter()
            .map(|entity| entity.get_origin())
            .collect();
        assert_eq!(appended, vec![Origin::Rural, Origin::Urban]);
    }

    #[test]
    fn focused_mode_spawns_only_that_origin() {
        let mut world = seeded_world(3);
        world.set_entities(Vec::new());
        world.get_flow_mut().set_mode(FlowMode::RuralToUrban);

        world.advance(120);
        assert_eq!(world.count_by_origin(Origin::Rural), 2);
        assert_eq!(world.count_by_origin(Origin::Urban), 0);

        world.set_entities(Vec::new());
        world.get_flow_mut().set_mode(FlowMode::UrbanToRural);
        world.advance(60);
        assert_eq!(world.count_by_origin(Origin::Rural), 0);
        assert_eq!(world.count_by_origin(Origin::Urban), 1);
    }

    #[test]
    fn prunes_only_offscreen_entities() {
        let mut world = seeded_world(4);
        let leaving_right = TransitEntity::new(
            Origin::Rural,
            919.9,
            430.0,
            1.0,
            20.0,
            Rgba::rgb(220.0, 150.0, 100.0),
        );
        let leaving_left = TransitEntity::new(
            Origin::Urban,
            -19.9,
            430.0,
            1.0,
            20.0,
            Rgba::rgb(220.0, 150.0, 100.0),
        );
        world.set_entities(vec![
            parked(Origin::Rural),
            leaving_right,
            leaving_left,
            parked(Origin::Urban),
        ]);

        world.advance(1);

        let origins: Vec<Origin> = world
            .get_entities()
            .iter()
            .map(|entity| entity.get_origin())
            .collect();
        assert_eq!(origins, vec![Origin::Rural, Origin::Urban]);
        let (rural_x, _) = world.get_entities()[0].get_position();
        assert!(rural_x > 10.0, "survivors are still updated");
    }

    #[test]
    fn every_survivor_moves_exactly_once_per_frame() {
        let mut world = seeded_world(5);
        let before: Vec<f32> = world
            .get_entities()
            .iter()
            .map(|entity| entity.get_position().0)
            .collect();
        let expected: Vec<f32> = world
            .get_entities()
            .iter()
            .map(|entity| entity.get_speed(world.get_flow(), world.get_config()))
            .collect();

        world.advance(1);

        assert_eq!(world.get_entities().len(), before.len());
        for ((entity, x0), speed) in world.get_entities().iter().zip(before).zip(expected) {
            let moved = (entity.get_position().0 - x0).abs();
            assert!((moved - speed).abs() < 1e-4, "moved {moved}, expected {speed}");
        }
    }

    #[test]
    fn long_run_keeps_collection_bounded() {
        let mut world = seeded_world(6);

        world.advance(20_000);

        let width = world.get_config().width;
        assert!(
            world
                .get_entities()
                .iter()
                .all(|entity| !entity.is_offscreen(width))
        );
        assert!(world.get_entities().len() < 200);
    }
}
