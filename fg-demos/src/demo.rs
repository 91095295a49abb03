//! The interface every demo scene implements.

use std::fmt;

use fg_core::{Generator, GeneratorHandle, Particle, ParticleWorld, TickOutcome, Vec3};
use tracing::warn;

use crate::input::Direction;

/// What happened to one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// The demo is paused; the world was not touched.
    Paused,
    Tick(TickOutcome),
}

/// One labelled display value.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadoutLine {
    pub label: &'static str,
    pub value: String,
}

/// Values a renderer would overlay on the scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Readout {
    pub lines: Vec<ReadoutLine>,
}

impl Readout {
    pub fn push(&mut self, label: &'static str, value: impl fmt::Display) {
        self.lines.push(ReadoutLine {
            label,
            value: value.to_string(),
        });
    }

    /// Position, velocity and acceleration of `particle`.
    pub fn particle(&mut self, particle: &Particle) {
        self.push("acceleration", particle.last_acceleration());
        self.push("velocity", particle.velocity);
        self.push("position", particle.position);
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", line.label, line.value)?;
        }
        Ok(())
    }
}

/// A headless demo scene.
pub trait Demo {
    fn title(&self) -> &'static str;

    /// Advance one frame of `duration` seconds.
    fn update(&mut self, duration: f64) -> FrameOutcome;

    /// React to a push direction. Scenes without a push ignore it.
    fn push(&mut self, _direction: Direction) {}

    fn toggle_pause(&mut self);

    fn is_paused(&self) -> bool;

    fn readout(&self) -> Readout;

    fn world(&self) -> &ParticleWorld;

    fn key(&mut self, key: crate::input::Key) {
        match key {
            crate::input::Key::Push(direction) => self.push(direction),
            crate::input::Key::Pause => self.toggle_pause(),
        }
    }
}

/// Step `world` unless paused.
pub(crate) fn step_unless_paused(world: &mut ParticleWorld, paused: bool, duration: f64) -> FrameOutcome {
    if paused {
        FrameOutcome::Paused
    } else {
        FrameOutcome::Tick(world.step(duration))
    }
}

/// Trigger the push generator behind `handle`.
pub(crate) fn trigger_push(world: &mut ParticleWorld, handle: GeneratorHandle, direction: Vec3) {
    match world.generator_mut(handle).and_then(Generator::as_push_mut) {
        Some(push) => push.push(direction),
        None => warn!(?handle, "push handle does not refer to a push generator"),
    }
}
