use bevy::prelude::*;
use constants::physics::{
    COCONUT_ANGULAR_DAMPING, COCONUT_LINEAR_DAMPING, COCONUT_MASS, COCONUT_RADIUS,
    CONTACT_FRICTION, CONTACT_RESTITUTION,
};
use serde::{Deserialize, Serialize};

/// Contact properties shared by every collider in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceMaterial {
    pub friction: f32,
    pub restitution: f32,
}

impl Default for SurfaceMaterial {
    fn default() -> Self {
        Self {
            friction: CONTACT_FRICTION,
            restitution: CONTACT_RESTITUTION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BodyShape {
    Ball { radius: f32 },
}

/// Everything needed to construct one dynamic body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySpec {
    pub shape: BodyShape,
    pub mass: f32,
    pub material: SurfaceMaterial,
    pub position: Vec3,
    pub linear_damping: f32,
    pub angular_damping: f32,
}

impl BodySpec {
    /// A coconut-sized ball at `position` with the default damping and material.
    pub fn ball_at(position: Vec3) -> Self {
        Self {
            shape: BodyShape::Ball {
                radius: COCONUT_RADIUS,
            },
            mass: COCONUT_MASS,
            material: SurfaceMaterial::default(),
            position,
            linear_damping: COCONUT_LINEAR_DAMPING,
            angular_damping: COCONUT_ANGULAR_DAMPING,
        }
    }
}

/// Body transform snapshot in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPose {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl BodyPose {
    pub fn to_transform(&self) -> Transform {
        Transform::from_translation(self.translation).with_rotation(self.rotation)
    }
}
