//! A helium-filled cube rising through thinning air.

use fg_core::forces::{AltitudeScale, AtmosphericLift, Gravity, Push};
use fg_core::scenes::LighterThanAirScene;
use fg_core::{GeneratorHandle, Particle, ParticleHandle, ParticleWorld};

use crate::demo::{step_unless_paused, trigger_push, Demo, FrameOutcome, Readout};
use crate::input::Direction;

pub struct LighterThanAirDemo {
    world: ParticleWorld,
    cube: ParticleHandle,
    push: GeneratorHandle,
    lift: GeneratorHandle,
    gravity: f64,
    paused: bool,
}

impl LighterThanAirDemo {
    pub fn new(scene: &LighterThanAirScene) -> Self {
        let volume = scene.side * scene.side * scene.side;
        let lift = AtmosphericLift::new(volume, AltitudeScale::new(scene.altitude_scale));

        let mut world = ParticleWorld::new();
        let cube = world.add_particle(
            Particle::new(scene.start, lift.rest_mass()).with_damping(scene.damping),
        );
        let gravity = world.add_generator(Gravity::new(scene.gravity));
        let push = world.add_generator(Push::new(scene.push.force, scene.push.duration));
        let lift = world.add_generator(lift);
        world.register(cube, gravity);
        world.register(cube, push);
        world.register(cube, lift);

        Self {
            world,
            cube,
            push,
            lift,
            gravity: scene.gravity.magnitude(),
            paused: false,
        }
    }

    pub fn cube(&self) -> ParticleHandle {
        self.cube
    }

    pub fn lift(&self) -> Option<&AtmosphericLift> {
        self.world.generator(self.lift).and_then(fg_core::Generator::as_lift)
    }

    /// Game altitude where lift balances the cube's weight, if any.
    pub fn equilibrium_altitude(&self) -> Option<f64> {
        self.lift().and_then(|lift| lift.equilibrium_altitude(self.gravity))
    }
}

impl Demo for LighterThanAirDemo {
    fn title(&self) -> &'static str {
        "Helium Demo"
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
            readout.push("mass", format!("{:.8}", cube.mass()));
        }
        if let Some(lift) = self.lift() {
            readout.push("world position", format!("{:.3}", lift.world_altitude()));
            readout.push("air density", format!("{:.8}", lift.air_density()));
            readout.push("air force", format!("{:.8}", lift.lift_force()));
            readout.push(
                "helium density",
                format!("{:.8}", lift.atmosphere().helium_density(0.0)),
            );
        }
        readout
    }

    fn world(&self) -> &ParticleWorld {
        &self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fg_core::forces::Atmosphere;
    use fg_core::Vec3;

    fn light_gravity() -> LighterThanAirScene {
        LighterThanAirScene {
            start: Vec3::new(0.0, 1.0, 0.0),
            gravity: Vec3::new(0.0, -7.0, 0.0),
            ..LighterThanAirScene::default()
        }
    }

    #[test]
    fn test_mass_is_fixed_from_sea_level_helium() {
        let demo = LighterThanAirDemo::new(&LighterThanAirScene::default());
        let mass = demo.world().particle(demo.cube()).map(|p| p.mass()).unwrap_or_default();

        let expected = Atmosphere::STANDARD.helium_density(0.0);
        assert!((mass - expected).abs() < 1e-15, "mass {} vs {}", mass, expected);
    }

    #[test]
    fn test_lift_diagnostics_update_each_tick() {
        let mut demo = LighterThanAirDemo::new(&LighterThanAirScene::default());
        demo.update(0.016);

        let lift = demo.lift().expect("lift generator");
        assert_eq!(lift.world_altitude(), 100.0);
        assert!((lift.air_density() - Atmosphere::STANDARD.air_density(100.0)).abs() < 1e-18);
        assert!(demo.readout().get("air density").is_some());
    }

    #[test]
    fn test_standard_gravity_sinks_the_cube() {
        let mut demo = LighterThanAirDemo::new(&LighterThanAirScene::default());
        for _ in 0..100 {
            demo.update(0.016);
        }
        let y = demo.world().particle(demo.cube()).map(|p| p.position.y).unwrap_or_default();
        assert!(y < 10.0, "weight exceeds lift at 9.81, got y={}", y);
    }

    #[test]
    fn test_light_gravity_rises_toward_equilibrium() {
        let mut demo = LighterThanAirDemo::new(&light_gravity());
        let target = demo.equilibrium_altitude().expect("equilibrium exists");

        for _ in 0..200 {
            demo.update(0.016);
        }

        let y = demo.world().particle(demo.cube()).map(|p| p.position.y).unwrap_or_default();
        assert!(y > 1.0, "cube should climb, got y={}", y);
        assert!(target > 1.0, "equilibrium {} should be above the start", target);
    }

    #[test]
    fn test_light_gravity_settles_at_equilibrium() {
        let mut demo = LighterThanAirDemo::new(&light_gravity());
        let target = demo.equilibrium_altitude().expect("equilibrium exists");

        for _ in 0..16_000 {
            demo.update(0.016);
        }

        let y = demo.world().particle(demo.cube()).map(|p| p.position.y).unwrap_or_default();
        assert!(
            (y - target).abs() < 1e-3,
            "cube should rest where lift equals weight: y={} target={}",
            y,
            target
        );
    }
}
