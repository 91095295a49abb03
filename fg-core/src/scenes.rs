//! Scene configuration loader.
//!
//! Loads demo parameters from YAML files so scenes can be tuned without
//! recompiling. Every field has a default matching the stock demo, and
//! missing fields fall back to it, so a scene file only lists what it
//! changes.
//!
//! ## Directory Structure
//!
//! ```text
//! scenes/
//! ├── buoyancy/
//! │   └── default.yaml
//! ├── lighter_than_air/
//! │   ├── default.yaml
//! │   └── light_gravity.yaml
//! ├── overcrowding/
//! ├── spring/
//! └── uplift/
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::types::{constants, Vec3};

/// Error type for scene loading operations.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("scene not found: {0}")]
    NotFound(String),
    #[error("invalid scene value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

fn require_positive(field: &'static str, value: f64) -> Result<(), SceneError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SceneError::Invalid {
            field,
            reason: format!("must be positive and finite, got {}", value),
        })
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), SceneError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SceneError::Invalid {
            field,
            reason: format!("must be non-negative and finite, got {}", value),
        })
    }
}

fn require_damping(field: &'static str, value: f64) -> Result<(), SceneError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SceneError::Invalid {
            field,
            reason: format!("must be within [0, 1], got {}", value),
        })
    }
}

/// A scene kind: one directory of YAML files, one config type.
pub trait SceneConfig: DeserializeOwned + Default {
    /// Subdirectory under the scene root.
    const KIND: &'static str;

    /// Reject values the simulation cannot run with.
    fn validate(&self) -> Result<(), SceneError>;
}

// =============================================================================
// Scene configs
// =============================================================================

/// Parameters of a transient push.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushConfig {
    /// Force magnitude while the push is active.
    pub force: f64,
    /// Seconds a single key press keeps pushing.
    pub duration: f64,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            force: 20.0,
            duration: 0.5,
        }
    }
}

impl PushConfig {
    fn validate(&self) -> Result<(), SceneError> {
        require_non_negative("push.force", self.force)?;
        require_non_negative("push.duration", self.duration)
    }
}

/// A cube dropped onto a liquid surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuoyancyScene {
    pub start: Vec3,
    pub mass: f64,
    pub damping: f64,
    pub side: f64,
    pub liquid_height: f64,
    pub liquid_density: f64,
    pub gravity: Vec3,
    pub push: PushConfig,
}

impl Default for BuoyancyScene {
    fn default() -> Self {
        Self {
            start: Vec3::new(5.0, 5.0, 5.0),
            mass: 10.0,
            damping: 0.9,
            side: 1.0,
            liquid_height: 0.0,
            liquid_density: 1000.0,
            gravity: constants::GRAVITY_VECTOR,
            push: PushConfig::default(),
        }
    }
}

impl SceneConfig for BuoyancyScene {
    const KIND: &'static str = "buoyancy";

    fn validate(&self) -> Result<(), SceneError> {
        require_positive("mass", self.mass)?;
        require_damping("damping", self.damping)?;
        require_positive("side", self.side)?;
        require_non_negative("liquid_density", self.liquid_density)?;
        self.push.validate()
    }
}

/// A helium-filled cube in a standard atmosphere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LighterThanAirScene {
    pub start: Vec3,
    pub damping: f64,
    pub side: f64,
    /// World meters per game unit of altitude.
    pub altitude_scale: f64,
    pub gravity: Vec3,
    pub push: PushConfig,
}

impl Default for LighterThanAirScene {
    fn default() -> Self {
        Self {
            start: Vec3::new(0.0, 10.0, 0.0),
            damping: 0.9,
            side: 1.0,
            altitude_scale: 10.0,
            gravity: constants::GRAVITY_VECTOR,
            push: PushConfig::default(),
        }
    }
}

impl SceneConfig for LighterThanAirScene {
    const KIND: &'static str = "lighter_than_air";

    fn validate(&self) -> Result<(), SceneError> {
        require_damping("damping", self.damping)?;
        require_positive("side", self.side)?;
        require_positive("altitude_scale", self.altitude_scale)?;
        self.push.validate()
    }
}

/// Particles released together that spread out under crowd separation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OvercrowdingScene {
    pub particle_count: usize,
    pub mass: f64,
    pub damping: f64,
    pub crowding_radius: f64,
    pub spring_constant: f64,
    /// Particles reaching this distance from the origin bounce back.
    pub world_radius: f64,
    pub speed_min: f64,
    pub speed_max: f64,
    /// Fixed RNG seed; a fresh one is drawn when absent.
    pub seed: Option<u64>,
}

impl Default for OvercrowdingScene {
    fn default() -> Self {
        Self {
            particle_count: 2,
            mass: 1.0,
            damping: 0.5,
            crowding_radius: 25.0,
            spring_constant: 200.0,
            world_radius: 250.0,
            speed_min: 1.0,
            speed_max: 1.0,
            seed: None,
        }
    }
}

impl SceneConfig for OvercrowdingScene {
    const KIND: &'static str = "overcrowding";

    fn validate(&self) -> Result<(), SceneError> {
        require_positive("mass", self.mass)?;
        require_damping("damping", self.damping)?;
        require_positive("crowding_radius", self.crowding_radius)?;
        require_non_negative("spring_constant", self.spring_constant)?;
        require_positive("world_radius", self.world_radius)?;
        require_non_negative("speed_min", self.speed_min)?;
        require_non_negative("speed_max", self.speed_max)?;
        if self.speed_min > self.speed_max {
            return Err(SceneError::Invalid {
                field: "speed_min",
                reason: format!(
                    "must not exceed speed_max ({} > {})",
                    self.speed_min, self.speed_max
                ),
            });
        }
        Ok(())
    }
}

/// A ball on a fatiguing spring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringScene {
    pub start: Vec3,
    pub anchor: Vec3,
    pub mass: f64,
    pub damping: f64,
    pub spring_constant: f64,
    pub rest_length: f64,
    pub max_distance: f64,
    pub push: PushConfig,
}

impl Default for SpringScene {
    fn default() -> Self {
        Self {
            start: Vec3::new(150.0, 0.0, 200.0),
            anchor: Vec3::new(150.0, 0.0, 300.0),
            mass: 1.0,
            damping: 0.5,
            spring_constant: 2.0,
            rest_length: 100.0,
            max_distance: 200.0,
            push: PushConfig {
                force: 200.0,
                duration: 0.5,
            },
        }
    }
}

impl SceneConfig for SpringScene {
    const KIND: &'static str = "spring";

    fn validate(&self) -> Result<(), SceneError> {
        require_positive("mass", self.mass)?;
        require_damping("damping", self.damping)?;
        require_non_negative("spring_constant", self.spring_constant)?;
        require_non_negative("rest_length", self.rest_length)?;
        require_positive("max_distance", self.max_distance)?;
        self.push.validate()
    }
}

/// A heavy ball coasting with no generators at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpliftScene {
    pub start: Vec3,
    pub velocity: Vec3,
    pub mass: f64,
    pub damping: f64,
}

impl Default for UpliftScene {
    fn default() -> Self {
        Self {
            start: Vec3::new(150.0, 50.0, 50.0),
            velocity: Vec3::ZERO,
            mass: 200.0,
            damping: 0.99,
        }
    }
}

impl SceneConfig for UpliftScene {
    const KIND: &'static str = "uplift";

    fn validate(&self) -> Result<(), SceneError> {
        require_positive("mass", self.mass)?;
        require_damping("damping", self.damping)
    }
}

// =============================================================================
// Loader
// =============================================================================

/// Scene loader with configurable base directory.
pub struct SceneLoader {
    base_path: PathBuf,
}

impl SceneLoader {
    /// The base path should contain one subdirectory per scene kind.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Load and validate a scene by name (without .yaml extension).
    ///
    /// # Example
    /// ```ignore
    /// let loader = SceneLoader::new("scenes");
    /// let scene: SpringScene = loader.load("default")?;
    /// ```
    pub fn load<S: SceneConfig>(&self, name: &str) -> Result<S, SceneError> {
        let path = self
            .base_path
            .join(S::KIND)
            .join(format!("{}.yaml", name));
        if !path.exists() {
            return Err(SceneError::NotFound(format!("{}/{}", S::KIND, name)));
        }
        let contents = fs::read_to_string(&path)?;
        let scene = Self::parse::<S>(&contents)?;
        debug!(kind = S::KIND, scene = name, path = %path.display(), "scene loaded");
        Ok(scene)
    }

    /// Parse and validate a scene from YAML text.
    pub fn parse<S: SceneConfig>(contents: &str) -> Result<S, SceneError> {
        // An empty document means "all defaults".
        let scene: S = if contents.trim().is_empty() {
            S::default()
        } else {
            serde_yaml::from_str(contents)?
        };
        scene.validate()?;
        Ok(scene)
    }

    /// Load `name` if given, otherwise the built-in defaults.
    pub fn load_or_default<S: SceneConfig>(&self, name: Option<&str>) -> Result<S, SceneError> {
        match name {
            Some(name) => self.load(name),
            None => Ok(S::default()),
        }
    }

    /// List available scene names of one kind.
    pub fn list(&self, kind: &str) -> Result<Vec<String>, SceneError> {
        let path = self.base_path.join(kind);
        if !path.exists() {
            return Ok(vec![]);
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&path)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            if let Some(stem) = name.strip_suffix(".yaml") {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn get_scenes_path() -> PathBuf {
        let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(manifest_dir).join("..").join("scenes")
    }

    #[test]
    fn test_load_every_default_scene() {
        let loader = SceneLoader::new(get_scenes_path());

        let buoyancy: Result<BuoyancyScene, _> = loader.load("default");
        assert!(buoyancy.is_ok(), "buoyancy: {:?}", buoyancy.err());
        let lighter: Result<LighterThanAirScene, _> = loader.load("default");
        assert!(lighter.is_ok(), "lighter_than_air: {:?}", lighter.err());
        let crowd: Result<OvercrowdingScene, _> = loader.load("default");
        assert!(crowd.is_ok(), "overcrowding: {:?}", crowd.err());
        let spring: Result<SpringScene, _> = loader.load("default");
        assert!(spring.is_ok(), "spring: {:?}", spring.err());
        let uplift: Result<UpliftScene, _> = loader.load("default");
        assert!(uplift.is_ok(), "uplift: {:?}", uplift.err());
    }

    #[test]
    fn test_default_files_match_builtin_defaults() {
        let loader = SceneLoader::new(get_scenes_path());
        let spring: SpringScene = loader.load("default").expect("spring default");
        assert_eq!(spring, SpringScene::default());
    }

    #[test]
    fn test_load_nonexistent_scene() {
        let loader = SceneLoader::new(get_scenes_path());
        let result: Result<SpringScene, _> = loader.load("nonexistent_scene_xyz");

        match result {
            Err(SceneError::NotFound(name)) => assert_eq!(name, "spring/nonexistent_scene_xyz"),
            other => panic!("Expected NotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let scene: BuoyancyScene =
            SceneLoader::parse("liquid_density: 0.0\nstart: { x: 0.0, y: 2.0, z: 0.0 }\n")
                .expect("partial scene should parse");

        assert_eq!(scene.liquid_density, 0.0);
        assert_eq!(scene.start, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(scene.mass, 10.0);
        assert_eq!(scene.push, PushConfig::default());
    }

    #[test]
    fn test_empty_document_is_defaults() {
        let scene: UpliftScene = SceneLoader::parse("").expect("empty scene");
        assert_eq!(scene, UpliftScene::default());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let result: Result<BuoyancyScene, _> = SceneLoader::parse("mass: -1.0\n");
        assert!(matches!(result, Err(SceneError::Invalid { field: "mass", .. })));

        let result: Result<OvercrowdingScene, _> =
            SceneLoader::parse("speed_min: 5.0\nspeed_max: 1.0\n");
        assert!(matches!(result, Err(SceneError::Invalid { field: "speed_min", .. })));

        let result: Result<UpliftScene, _> = SceneLoader::parse("damping: 1.5\n");
        assert!(matches!(result, Err(SceneError::Invalid { field: "damping", .. })));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let result: Result<SpringScene, _> = SceneLoader::parse("mass: [not, a, number]\n");
        assert!(matches!(result, Err(SceneError::Parse(_))));
    }

    #[test]
    fn test_list_scenes() {
        let loader = SceneLoader::new(get_scenes_path());
        let names = loader.list(LighterThanAirScene::KIND).expect("list scenes");

        assert!(names.contains(&"default".to_string()));
        assert!(names.contains(&"light_gravity".to_string()));
        assert_eq!(loader.list("no_such_kind").map(|n| n.len()).ok(), Some(0));
    }
}
