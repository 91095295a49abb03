//! # FG Demos
//!
//! Headless demo scenes built on `fg-core`, plus the frame loop that drives
//! them from the command line.
//!
//! - `demo`: the `Demo` trait and readouts
//! - `demos`: buoyancy, lighter-than-air, overcrowding, spring, uplift
//! - `input`: key mapping and scheduled key presses
//! - `timing`: fixed and wall-clock frame durations
//! - `runner`: the frame loop

pub mod demo;
pub mod demos;
pub mod input;
pub mod runner;
pub mod timing;

use clap::ValueEnum;
use fg_core::scenes::{
    BuoyancyScene, LighterThanAirScene, OvercrowdingScene, SceneConfig, SceneError, SceneLoader,
    SpringScene, UpliftScene,
};

pub use demo::{Demo, FrameOutcome, Readout};

/// Which scene to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoKind {
    Buoyancy,
    LighterThanAir,
    Overcrowding,
    Spring,
    Uplift,
}

impl DemoKind {
    pub const ALL: [DemoKind; 5] = [
        DemoKind::Buoyancy,
        DemoKind::LighterThanAir,
        DemoKind::Overcrowding,
        DemoKind::Spring,
        DemoKind::Uplift,
    ];

    /// Scene directory name under the scenes root.
    pub fn scene_kind(self) -> &'static str {
        match self {
            DemoKind::Buoyancy => BuoyancyScene::KIND,
            DemoKind::LighterThanAir => LighterThanAirScene::KIND,
            DemoKind::Overcrowding => OvercrowdingScene::KIND,
            DemoKind::Spring => SpringScene::KIND,
            DemoKind::Uplift => UpliftScene::KIND,
        }
    }
}

/// Build a demo from the named scene, or from defaults when `scene` is `None`.
pub fn build_demo(
    kind: DemoKind,
    loader: &SceneLoader,
    scene: Option<&str>,
) -> Result<Box<dyn Demo>, SceneError> {
    let demo: Box<dyn Demo> = match kind {
        DemoKind::Buoyancy => Box::new(demos::BuoyancyDemo::new(&loader.load_or_default(scene)?)),
        DemoKind::LighterThanAir => {
            Box::new(demos::LighterThanAirDemo::new(&loader.load_or_default(scene)?))
        }
        DemoKind::Overcrowding => {
            Box::new(demos::OvercrowdingDemo::new(&loader.load_or_default(scene)?))
        }
        DemoKind::Spring => Box::new(demos::SpringDemo::new(&loader.load_or_default(scene)?)),
        DemoKind::Uplift => Box::new(demos::UpliftDemo::new(&loader.load_or_default(scene)?)),
    };
    Ok(demo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn loader() -> SceneLoader {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("..");
        path.push("scenes");
        SceneLoader::new(path)
    }

    #[test]
    fn test_every_kind_builds_from_default_scene() {
        for kind in DemoKind::ALL {
            let demo = build_demo(kind, &loader(), Some("default"));
            assert!(demo.is_ok(), "{:?} failed: {:?}", kind, demo.err());
        }
    }

    #[test]
    fn test_every_kind_builds_without_scene_file() {
        let loader = SceneLoader::new("/nonexistent");
        for kind in DemoKind::ALL {
            assert!(build_demo(kind, &loader, None).is_ok(), "{:?}", kind);
        }
    }

    #[test]
    fn test_missing_scene_is_not_found() {
        let result = build_demo(DemoKind::Spring, &loader(), Some("no_such_scene"));
        assert!(matches!(result, Err(SceneError::NotFound(_))));
    }

    #[test]
    fn test_titles() {
        let demo = build_demo(DemoKind::Uplift, &loader(), None).expect("uplift");
        assert_eq!(demo.title(), "Uplift Demo");
    }
}
