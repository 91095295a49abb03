//! A heavy ball with no generators attached: it coasts on its own velocity.

use fg_core::scenes::UpliftScene;
use fg_core::{Particle, ParticleHandle, ParticleWorld};

use crate::demo::{step_unless_paused, Demo, FrameOutcome, Readout};

pub struct UpliftDemo {
    world: ParticleWorld,
    ball: ParticleHandle,
    paused: bool,
}

impl UpliftDemo {
    pub fn new(scene: &UpliftScene) -> Self {
        let mut world = ParticleWorld::new();
        let ball = world.add_particle(
            Particle::new(scene.start, scene.mass)
                .with_velocity(scene.velocity)
                .with_damping(scene.damping),
        );
        Self {
            world,
            ball,
            paused: false,
        }
    }

    pub fn ball(&self) -> ParticleHandle {
        self.ball
    }
}

impl Demo for UpliftDemo {
    fn title(&self) -> &'static str {
        "Uplift Demo"
    }

    fn update(&mut self, duration: f64) -> FrameOutcome {
        step_unless_paused(&mut self.world, self.paused, duration)
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn readout(&self) -> Readout {
        let mut readout = Readout::default();
        if let Some(ball) = self.world.particle(self.ball) {
            readout.particle(ball);
            readout.push("mass", ball.mass());
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
    use fg_core::{TickOutcome, Vec3};

    #[test]
    fn test_ball_at_rest_stays_at_rest() {
        let mut demo = UpliftDemo::new(&UpliftScene::default());

        let outcome = demo.update(0.016);

        assert_eq!(outcome, FrameOutcome::Tick(TickOutcome::Advanced { generators: 0 }));
        let position = demo.world().particle(demo.ball()).map(|p| p.position);
        assert_eq!(position, Some(Vec3::new(150.0, 50.0, 50.0)));
    }

    #[test]
    fn test_moving_ball_coasts_and_slows() {
        let scene = UpliftScene {
            velocity: Vec3::new(0.0, 10.0, 0.0),
            ..UpliftScene::default()
        };
        let mut demo = UpliftDemo::new(&scene);
        for _ in 0..10 {
            demo.update(0.1);
        }

        let ball = demo.world().particle(demo.ball()).expect("ball");
        assert!(ball.position.y > 50.0);
        assert!(ball.velocity.y < 10.0 && ball.velocity.y > 9.0, "vy={}", ball.velocity.y);
    }
}
