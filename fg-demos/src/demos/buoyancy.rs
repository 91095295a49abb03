//! A cube dropped into water, nudged around with pushes.

use fg_core::forces::{Buoyancy, Gravity, Push};
use fg_core::scenes::BuoyancyScene;
use fg_core::{GeneratorHandle, Particle, ParticleHandle, ParticleWorld};

use crate::demo::{step_unless_paused, trigger_push, Demo, FrameOutcome, Readout};
use crate::input::Direction;

pub struct BuoyancyDemo {
    world: ParticleWorld,
    cube: ParticleHandle,
    push: GeneratorHandle,
    buoyancy: GeneratorHandle,
    paused: bool,
}

impl BuoyancyDemo {
    pub fn new(scene: &BuoyancyScene) -> Self {
        let mut world = ParticleWorld::new();
        let cube = world.add_particle(
            Particle::new(scene.start, scene.mass).with_damping(scene.damping),
        );

        let volume = scene.side * scene.side * scene.side;
        let gravity = world.add_generator(Gravity::new(scene.gravity));
        let push = world.add_generator(Push::new(scene.push.force, scene.push.duration));
        let buoyancy = world.add_generator(
            Buoyancy::new(scene.side, volume, scene.liquid_height, scene.liquid_density)
                .with_gravity(scene.gravity.magnitude()),
        );
        world.register(cube, gravity);
        world.register(cube, push);
        world.register(cube, buoyancy);

        Self {
            world,
            cube,
            push,
            buoyancy,
            paused: false,
        }
    }

    pub fn cube(&self) -> ParticleHandle {
        self.cube
    }

    pub fn submerged_fraction(&self) -> f64 {
        let buoyancy = match self.world.generator(self.buoyancy) {
            Some(fg_core::Generator::Buoyancy(b)) => b,
            _ => return 0.0,
        };
        self.world
            .particle(self.cube)
            .map(|p| buoyancy.submerged_fraction(p.position.y))
            .unwrap_or(0.0)
    }
}

impl Demo for BuoyancyDemo {
    fn title(&self) -> &'static str {
        "Buoyancy Demo"
    }

    fn update(&mut self, duration: f64) -> FrameOutcome {
        step_unless_paused(&mut self.world, self.paused, duration)
    }

    fn push(&mut self, direction: Direction) {
        trigger_push(&mut self.world, self.push, direction.vector());
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn readout(&self) -> Readout {
        let mut readout = Readout::default();
        if let Some(cube) = self.world.particle(self.cube) {
            readout.particle(cube);
        }
        readout.push("submerged", format!("{:.3}", self.submerged_fraction()));
        readout
    }

    fn world(&self) -> &ParticleWorld {
        &self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use fg_core::Vec3;

    #[test]
    fn test_dry_scene_nets_weight_only() {
        let scene = BuoyancyScene {
            gravity: Vec3::new(0.0, -10.0, 0.0),
            liquid_density: 0.0,
            ..BuoyancyScene::default()
        };
        let mut demo = BuoyancyDemo::new(&scene);

        demo.update(0.016);

        let force = demo.world().particle(demo.cube()).map(|p| p.accumulated_force());
        assert_eq!(force, Some(Vec3::new(0.0, -100.0, 0.0)));
    }

    #[test]
    fn test_water_stops_falling_cube() {
        let mut demo = BuoyancyDemo::new(&BuoyancyScene::default());
        let mut lowest = f64::MAX;

        for _ in 0..300 {
            demo.update(0.01);
            let y = demo.world().particle(demo.cube()).map(|p| p.position.y).unwrap_or(f64::NAN);
            lowest = lowest.min(y);
        }

        assert!(lowest < 0.5, "cube should reach the water, lowest y={}", lowest);
        assert!(lowest > -1.0, "water should stop the cube quickly, lowest y={}", lowest);
    }

    #[test]
    fn test_submerged_cube_rises() {
        let scene = BuoyancyScene {
            start: Vec3::new(0.0, -3.0, 0.0),
            ..BuoyancyScene::default()
        };
        let mut demo = BuoyancyDemo::new(&scene);
        assert_eq!(demo.submerged_fraction(), 1.0);

        demo.update(0.01);

        let vy = demo.world().particle(demo.cube()).map(|p| p.velocity.y).unwrap_or_default();
        assert!(vy > 0.0, "fully submerged cube should accelerate up, got vy={}", vy);
    }

    #[test]
    fn test_push_key_moves_cube_sideways() {
        let mut demo = BuoyancyDemo::new(&BuoyancyScene::default());
        demo.key(Key::Push(Direction::Right));

        demo.update(0.016);
        demo.update(0.016);

        let x = demo.world().particle(demo.cube()).map(|p| p.position.x).unwrap_or_default();
        assert!(x > 5.0, "push right should move +x, got {}", x);
    }

    #[test]
    fn test_pause_freezes_world() {
        let mut demo = BuoyancyDemo::new(&BuoyancyScene::default());
        demo.key(Key::Pause);

        assert_eq!(demo.update(0.016), FrameOutcome::Paused);
        assert_eq!(demo.world().ticks(), 0);

        demo.key(Key::Pause);
        assert!(matches!(demo.update(0.016), FrameOutcome::Tick(_)));
        assert_eq!(demo.world().ticks(), 1);
    }

    #[test]
    fn test_readout_lists_particle_state() {
        let demo = BuoyancyDemo::new(&BuoyancyScene::default());
        let readout = demo.readout();

        assert_eq!(readout.get("position"), Some("(5.0000, 5.0000, 5.0000)"));
        assert_eq!(readout.get("submerged"), Some("0.000"));
    }
}
