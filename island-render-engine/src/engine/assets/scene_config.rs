use std::collections::HashSet;

use bevy::prelude::*;
use constants::{foliage, island, lighting, physics};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::physics::{BodyShape, BodySpec, PhysicsSettings, SurfaceMaterial};
use crate::engine::scene::height_field::HeightField;
use crate::engine::simulation::rest::RestSettings;
use crate::engine::simulation::slide::SlideSettings;
use crate::engine::simulation::spawner::ObjectId;

#[derive(Debug, Error)]
pub enum SceneConfigError {
    #[error("failed to parse scene config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("island radius must be positive, got {0}")]
    IslandRadius(f32),
    #[error("fixed timestep must be positive, got {0}")]
    FixedTimestep(f32),
    #[error("at least one physics sub-step per frame is required")]
    NoSubsteps,
    #[error("{what} must be a non-negative number, got {value}")]
    Negative { what: &'static str, value: f64 },
    #[error("object id {0:?} is used by more than one coconut")]
    DuplicateObject(ObjectId),
    #[error("coconut {0:?} needs a positive radius and mass")]
    InvalidBody(ObjectId),
}

/// How a coconut behaves once it reaches the island.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CoconutBehaviour {
    Slide(SlideSettings),
    Rest(RestSettings),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoconutConfig {
    pub id: ObjectId,
    pub position: [f32; 3],
    pub radius: f32,
    pub mass: f32,
    pub linear_damping: f32,
    pub angular_damping: f32,
    /// Seconds after start before the coconut gets a physics body.
    pub spawn_delay: f64,
    pub behaviour: CoconutBehaviour,
}

impl CoconutConfig {
    fn with_behaviour(id: u32, x: f32, spawn_delay: f64, behaviour: CoconutBehaviour) -> Self {
        Self {
            id: ObjectId(id),
            position: [x, physics::COCONUT_INITIAL_HEIGHT, 0.0],
            radius: physics::COCONUT_RADIUS,
            mass: physics::COCONUT_MASS,
            linear_damping: physics::COCONUT_LINEAR_DAMPING,
            angular_damping: physics::COCONUT_ANGULAR_DAMPING,
            spawn_delay,
            behaviour,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn body_spec(&self, material: SurfaceMaterial) -> BodySpec {
        BodySpec {
            shape: BodyShape::Ball {
                radius: self.radius,
            },
            mass: self.mass,
            material,
            position: self.position(),
            linear_damping: self.linear_damping,
            angular_damping: self.angular_damping,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafConfig {
    pub base_offset: [f32; 3],
    pub phase_offset: f32,
    pub rotation_degrees: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrunkConfig {
    pub position: [f32; 3],
    pub radius: f32,
    pub height: f32,
    pub base_angle: f32,
    pub bend_amount: f32,
}

impl Default for TrunkConfig {
    fn default() -> Self {
        Self {
            position: foliage::TRUNK_POSITION,
            radius: foliage::TRUNK_RADIUS,
            height: foliage::TRUNK_HEIGHT,
            base_angle: foliage::TRUNK_BASE_ANGLE,
            bend_amount: foliage::TRUNK_BEND_AMOUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoliageConfig {
    pub wind_intensity: f32,
    pub wind_speed: f32,
    /// Leaf ellipse width and length.
    pub leaf_size: [f32; 2],
    pub leaves: Vec<LeafConfig>,
    pub trunk: TrunkConfig,
}

impl Default for FoliageConfig {
    fn default() -> Self {
        let leaves = foliage::LEAF_BASE_OFFSETS
            .iter()
            .zip(foliage::LEAF_PHASE_OFFSETS)
            .zip(foliage::LEAF_ROTATIONS_DEGREES)
            .map(|((base_offset, phase_offset), rotation_degrees)| LeafConfig {
                base_offset: *base_offset,
                phase_offset,
                rotation_degrees,
            })
            .collect();

        Self {
            wind_intensity: foliage::WIND_INTENSITY,
            wind_speed: foliage::WIND_SPEED,
            leaf_size: [foliage::LEAF_WIDTH, foliage::LEAF_LENGTH],
            leaves,
            trunk: TrunkConfig::default(),
        }
    }
}

/// Sun start position and the sunset animation armed shortly after start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SunConfig {
    pub elevation: f32,
    pub azimuth: f32,
    pub target_elevation: f32,
    pub duration: f64,
    pub delay: f64,
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            elevation: lighting::SUN_ELEVATION,
            azimuth: lighting::SUN_AZIMUTH,
            target_elevation: lighting::SUNSET_ELEVATION,
            duration: lighting::SUNSET_DURATION,
            delay: lighting::SUNSET_DELAY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyConfig {
    pub turbidity: f32,
    pub rayleigh: f32,
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            turbidity: lighting::SKY_TURBIDITY,
            rayleigh: lighting::SKY_RAYLEIGH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterConfig {
    pub size: f32,
    pub time_step: f32,
    pub distortion_scale: f32,
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            size: lighting::WATER_SIZE,
            time_step: lighting::WATER_TIME_STEP,
            distortion_scale: lighting::WATER_DISTORTION_SCALE,
        }
    }
}

/// Complete scene description as a Bevy asset. Mirrors the JSON layout.
#[derive(Asset, TypePath, Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub island: HeightField,
    pub island_spin_rate: f32,
    pub physics: PhysicsSettings,
    pub coconuts: Vec<CoconutConfig>,
    pub foliage: FoliageConfig,
    pub sun: SunConfig,
    pub sky: SkyConfig,
    pub water: WaterConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            island: HeightField::default(),
            island_spin_rate: island::ISLAND_SPIN_RATE,
            physics: PhysicsSettings::default(),
            coconuts: vec![
                CoconutConfig::with_behaviour(
                    1,
                    -physics::COCONUT_OFFSET_X,
                    physics::SLIDING_COCONUT_SPAWN_DELAY,
                    CoconutBehaviour::Slide(SlideSettings::default()),
                ),
                CoconutConfig::with_behaviour(
                    2,
                    physics::COCONUT_OFFSET_X,
                    physics::RESTING_COCONUT_SPAWN_DELAY,
                    CoconutBehaviour::Rest(RestSettings::default()),
                ),
            ],
            foliage: FoliageConfig::default(),
            sun: SunConfig::default(),
            sky: SkyConfig::default(),
            water: WaterConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Parse and validate a JSON scene description.
    pub fn from_json(json: &str) -> Result<Self, SceneConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SceneConfigError> {
        if !positive(self.island.radius) {
            return Err(SceneConfigError::IslandRadius(self.island.radius));
        }
        if !positive(self.physics.fixed_timestep) {
            return Err(SceneConfigError::FixedTimestep(self.physics.fixed_timestep));
        }
        if self.physics.max_substeps == 0 {
            return Err(SceneConfigError::NoSubsteps);
        }
        non_negative("sun animation delay", self.sun.delay)?;
        non_negative("sun animation duration", self.sun.duration)?;

        let mut seen = HashSet::new();
        for coconut in &self.coconuts {
            if !seen.insert(coconut.id) {
                return Err(SceneConfigError::DuplicateObject(coconut.id));
            }
            if !positive(coconut.radius) || !positive(coconut.mass) {
                return Err(SceneConfigError::InvalidBody(coconut.id));
            }
            non_negative("spawn delay", coconut.spawn_delay)?;
        }

        Ok(())
    }
}

/// False for NaN as well as for zero and negatives.
fn positive(value: f32) -> bool {
    value > 0.0
}

fn non_negative(what: &'static str, value: f64) -> Result<(), SceneConfigError> {
    if value.is_nan() || value < 0.0 {
        return Err(SceneConfigError::Negative { what, value });
    }
    Ok(())
}
