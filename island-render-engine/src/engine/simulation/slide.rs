use std::f32::consts::SQRT_2;

use bevy::prelude::*;
use constants::island::{SLIDE_SPEED, SLIDE_TRIGGER_HEIGHT};
use constants::physics::COCONUT_RADIUS;
use serde::{Deserialize, Serialize};

use super::context::SimulationContext;
use super::spawner::ObjectId;
use crate::engine::scene::height_field::HeightField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideState {
    #[default]
    Falling,
    Sliding,
    Released,
}

impl SlideState {
    /// Falling → Sliding once the body drops below the trigger height.
    pub fn on_height(self, height: f32, trigger_height: f32) -> Self {
        match self {
            SlideState::Falling if height < trigger_height => SlideState::Sliding,
            state => state,
        }
    }

    /// Sliding → Released once the body reaches the rim.
    pub fn on_distance(self, distance: f32, release_distance: f32) -> Self {
        match self {
            SlideState::Sliding if distance >= release_distance => SlideState::Released,
            state => state,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideSettings {
    pub trigger_height: f32,
    pub speed: f32,
    pub object_radius: f32,
}

impl Default for SlideSettings {
    fn default() -> Self {
        Self {
            trigger_height: SLIDE_TRIGGER_HEIGHT,
            speed: SLIDE_SPEED,
            object_radius: COCONUT_RADIUS,
        }
    }
}

impl SlideSettings {
    /// Horizontal slide velocity (vx, vz): the speed split evenly across +X and +Z.
    pub fn horizontal_velocity(&self) -> Vec2 {
        let component = self.speed / SQRT_2;
        Vec2::new(component, component)
    }

    /// Horizontal distance from the axis at which the body leaves the dome.
    pub fn release_distance(&self, field: &HeightField) -> f32 {
        field.radius - self.object_radius
    }
}

/// Makes one falling body glide down the island surface until it reaches the rim.
#[derive(Debug, Clone)]
pub struct SlideController {
    object: ObjectId,
    settings: SlideSettings,
    state: SlideState,
}

impl SlideController {
    pub fn new(object: ObjectId, settings: SlideSettings) -> Self {
        Self {
            object,
            settings,
            state: SlideState::Falling,
        }
    }

    pub fn object(&self) -> ObjectId {
        self.object
    }

    pub fn state(&self) -> SlideState {
        self.state
    }

    /// Run one frame. Returns the new state when a transition happened.
    pub fn update(&mut self, ctx: &mut SimulationContext) -> Option<SlideState> {
        if self.state == SlideState::Released {
            return None;
        }
        let handle = ctx.body_of(self.object)?;
        let position = ctx.physics.translation(handle)?;
        let before = self.state;

        self.state = self
            .state
            .on_height(position.y, self.settings.trigger_height);

        if self.state == SlideState::Sliding {
            let field = ctx.field;
            let horizontal = self.settings.horizontal_velocity();
            let surface = field.sample(position.x, position.z);
            let vy = surface.slope_along(horizontal);

            ctx.physics
                .set_velocity(handle, Vec3::new(horizontal.x, vy, horizontal.y));
            ctx.physics.set_height(handle, surface.height);

            let distance = HeightField::horizontal_distance(position.x, position.z);
            self.state = self
                .state
                .on_distance(distance, self.settings.release_distance(&field));

            if self.state == SlideState::Released {
                ctx.physics.set_velocity(handle, Vec3::ZERO);
            }
        }

        (self.state != before).then(|| {
            info!("{:?} slide state {:?} -> {:?}", self.object, before, self.state);
            self.state
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::{BodySpec, PhysicsWorld};
    use approx::assert_relative_eq;
    use constants::physics::GRAVITY;

    const COCONUT: ObjectId = ObjectId(1);

    fn context_with_body_at(position: Vec3) -> SimulationContext {
        let mut ctx = SimulationContext::new(PhysicsWorld::new(GRAVITY), HeightField::default());
        ctx.spawner
            .schedule(COCONUT, 0.0, BodySpec::ball_at(position), 0.0);
        ctx.fire_due_spawns(0.0);
        ctx
    }

    #[test]
    fn transition_functions_only_move_forward() {
        assert_eq!(SlideState::Falling.on_height(7.9, 8.0), SlideState::Sliding);
        assert_eq!(SlideState::Falling.on_height(8.0, 8.0), SlideState::Falling);
        assert_eq!(SlideState::Released.on_height(0.0, 8.0), SlideState::Released);
        assert_eq!(SlideState::Sliding.on_distance(28.5, 28.5), SlideState::Released);
        assert_eq!(SlideState::Falling.on_distance(40.0, 28.5), SlideState::Falling);
    }

    #[test]
    fn does_nothing_without_a_body() {
        let mut ctx = SimulationContext::new(PhysicsWorld::new(GRAVITY), HeightField::default());
        let mut controller = SlideController::new(COCONUT, SlideSettings::default());
        assert_eq!(controller.update(&mut ctx), None);
        assert_eq!(controller.state(), SlideState::Falling);
    }

    #[test]
    fn stays_falling_above_trigger() {
        let mut ctx = context_with_body_at(Vec3::new(-5.0, 12.0, 0.0));
        let mut controller = SlideController::new(COCONUT, SlideSettings::default());
        assert_eq!(controller.update(&mut ctx), None);
        assert_relative_eq!(ctx.pose_of(COCONUT).unwrap().translation.y, 12.0);
    }

    #[test]
    fn entering_slide_snaps_to_surface_and_sets_tangent_velocity() {
        let mut ctx = context_with_body_at(Vec3::new(-5.0, 7.5, 0.0));
        let mut controller = SlideController::new(COCONUT, SlideSettings::default());

        assert_eq!(controller.update(&mut ctx), Some(SlideState::Sliding));

        let field = HeightField::default();
        let handle = ctx.body_of(COCONUT).unwrap();
        let position = ctx.physics.translation(handle).unwrap();
        assert_relative_eq!(position.y, field.height_at(-5.0, 0.0));

        let velocity = ctx.physics.velocity(handle).unwrap();
        let component = 5.0 / SQRT_2;
        assert_relative_eq!(velocity.x, component);
        assert_relative_eq!(velocity.z, component);
        let g = field.gradient_at(-5.0, 0.0);
        assert_relative_eq!(velocity.y, g.x * component + g.y * component);
    }

    #[test]
    fn releases_on_the_same_frame_at_exact_rim_distance() {
        let mut ctx = context_with_body_at(Vec3::new(28.5, 5.0, 0.0));
        let mut controller = SlideController::new(COCONUT, SlideSettings::default());

        assert_eq!(controller.update(&mut ctx), Some(SlideState::Released));
        assert_eq!(controller.state(), SlideState::Released);

        let handle = ctx.body_of(COCONUT).unwrap();
        assert_eq!(ctx.physics.velocity(handle).unwrap(), Vec3::ZERO);
    }

    #[test]
    fn sliding_body_reaching_the_rim_releases_that_frame() {
        let mut ctx = context_with_body_at(Vec3::new(-5.0, 7.5, 0.0));
        let mut controller = SlideController::new(COCONUT, SlideSettings::default());
        assert_eq!(controller.update(&mut ctx), Some(SlideState::Sliding));

        for _ in 0..10 {
            ctx.physics.step(1.0 / 60.0, 1.0 / 60.0, 3);
            assert_eq!(controller.update(&mut ctx), None);
            assert_eq!(controller.state(), SlideState::Sliding);
        }

        let handle = ctx.body_of(COCONUT).unwrap();
        ctx.physics.set_translation(handle, Vec3::new(28.5, 5.0, 0.0));
        assert_eq!(controller.update(&mut ctx), Some(SlideState::Released));

        let field = HeightField::default();
        let position = ctx.physics.translation(handle).unwrap();
        assert_relative_eq!(position.y, field.height_at(28.5, 0.0));
        assert_eq!(ctx.physics.velocity(handle).unwrap(), Vec3::ZERO);
    }

    #[test]
    fn released_body_is_never_overridden_again() {
        let mut ctx = context_with_body_at(Vec3::new(28.5, 5.0, 0.0));
        let mut controller = SlideController::new(COCONUT, SlideSettings::default());
        controller.update(&mut ctx);

        let handle = ctx.body_of(COCONUT).unwrap();
        ctx.physics.set_velocity(handle, Vec3::new(0.0, -3.0, 1.0));
        ctx.physics.set_translation(handle, Vec3::new(0.0, 1.0, 0.0));

        assert_eq!(controller.update(&mut ctx), None);
        assert_eq!(ctx.physics.velocity(handle).unwrap(), Vec3::new(0.0, -3.0, 1.0));
        assert_relative_eq!(ctx.physics.translation(handle).unwrap().y, 1.0);
    }
}
