//! The five demo scenes.

pub mod buoyancy;
pub mod lighter_than_air;
pub mod overcrowding;
pub mod spring;
pub mod uplift;

pub use buoyancy::BuoyancyDemo;
pub use lighter_than_air::LighterThanAirDemo;
pub use overcrowding::OvercrowdingDemo;
pub use spring::SpringDemo;
pub use uplift::UpliftDemo;
