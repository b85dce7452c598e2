use bevy::prelude::*;
use constants::island::REST_MARGIN;
use serde::{Deserialize, Serialize};

use super::context::SimulationContext;
use super::spawner::ObjectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestState {
    #[default]
    Falling,
    Resting,
}

impl RestState {
    /// Falling → Resting once the body is within `margin` of the surface.
    pub fn on_clearance(self, height: f32, surface: f32, margin: f32) -> Self {
        match self {
            RestState::Falling if height <= surface + margin => RestState::Resting,
            state => state,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestSettings {
    pub margin: f32,
}

impl Default for RestSettings {
    fn default() -> Self {
        Self {
            margin: REST_MARGIN,
        }
    }
}

/// Freezes one falling body on the island surface when it arrives there.
#[derive(Debug, Clone)]
pub struct RestController {
    object: ObjectId,
    settings: RestSettings,
    state: RestState,
}

impl RestController {
    pub fn new(object: ObjectId, settings: RestSettings) -> Self {
        Self {
            object,
            settings,
            state: RestState::Falling,
        }
    }

    pub fn object(&self) -> ObjectId {
        self.object
    }

    pub fn state(&self) -> RestState {
        self.state
    }

    /// Run one frame. Returns `Some(Resting)` on the frame the body comes to rest.
    pub fn update(&mut self, ctx: &mut SimulationContext) -> Option<RestState> {
        if self.state == RestState::Resting {
            return None;
        }
        let handle = ctx.body_of(self.object)?;
        let position = ctx.physics.translation(handle)?;
        let surface = ctx.field.height_at(position.x, position.z);

        self.state = self
            .state
            .on_clearance(position.y, surface, self.settings.margin);
        if self.state != RestState::Resting {
            return None;
        }

        ctx.physics.set_velocity(handle, Vec3::ZERO);
        ctx.physics.set_height(handle, surface);
        ctx.physics.freeze(handle);
        info!(
            "{:?} came to rest at ({:.2}, {:.2}, {:.2})",
            self.object, position.x, surface, position.z
        );
        Some(self.state)
    }
}
