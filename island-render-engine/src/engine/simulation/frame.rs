use bevy::prelude::*;

use super::context::SimulationContext;
use super::host::SceneHost;
use super::oscillator::{OscillatorBank, island_spin};
use super::rest::{RestController, RestState};
use super::slide::{SlideController, SlideState};
use super::spawner::ObjectId;
use super::sun::SunAnimator;
use super::timer::OneShotTimer;
use crate::engine::assets::scene_config::{CoconutBehaviour, SceneConfig, SunConfig};
use crate::engine::physics::{PhysicsSettings, PhysicsWorld};

/// Wall-clock input for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    /// Seconds since the host clock started.
    pub elapsed: f64,
    /// Seconds since the previous frame.
    pub delta: f32,
}

/// What happened during one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub substeps: u32,
    pub spawned: Vec<ObjectId>,
    pub slide_transitions: Vec<(ObjectId, SlideState)>,
    pub rest_transitions: Vec<(ObjectId, RestState)>,
    pub sun_elevation: f32,
}

/// Whole-scene simulation state, stepped once per rendered frame.
#[derive(Resource)]
pub struct IslandSimulation {
    context: SimulationContext,
    physics: PhysicsSettings,
    slide: Vec<SlideController>,
    rest: Vec<RestController>,
    foliage: OscillatorBank,
    sun: SunAnimator,
    sunset: SunConfig,
    sunset_cue: OneShotTimer,
    water_time_step: f32,
    island_spin_rate: f32,
    origin: f64,
    frames: u64,
}

impl IslandSimulation {
    /// Build the world from `config`, with `origin` as time zero on the host clock.
    pub fn new(config: &SceneConfig, origin: f64) -> Self {
        let mut context = SimulationContext::new(
            PhysicsWorld::from_settings(&config.physics),
            config.island,
        );

        let mut slide = Vec::new();
        let mut rest = Vec::new();
        for coconut in &config.coconuts {
            context.spawner.schedule(
                coconut.id,
                coconut.spawn_delay,
                coconut.body_spec(config.physics.material),
                0.0,
            );
            match coconut.behaviour {
                CoconutBehaviour::Slide(settings) => {
                    slide.push(SlideController::new(coconut.id, settings))
                }
                CoconutBehaviour::Rest(settings) => {
                    rest.push(RestController::new(coconut.id, settings))
                }
            }
        }

        info!(
            "Island simulation ready: {} sliding, {} resting coconut(s)",
            slide.len(),
            rest.len()
        );

        Self {
            context,
            physics: config.physics,
            slide,
            rest,
            foliage: OscillatorBank::from_config(&config.foliage),
            sun: SunAnimator::new(config.sun.elevation, config.sun.azimuth),
            sunset: config.sun.clone(),
            sunset_cue: OneShotTimer::armed(0.0, config.sun.delay),
            water_time_step: config.water.time_step,
            island_spin_rate: config.island_spin_rate,
            origin,
            frames: 0,
        }
    }

    /// Run one frame in the fixed order: timers, lighting, physics, mirroring,
    /// slide and rest controllers, foliage, render request.
    pub fn advance<H: SceneHost>(&mut self, clock: FrameClock, host: &mut H) -> FrameReport {
        let mut report = FrameReport {
            sun_elevation: self.sun.elevation(),
            ..default()
        };
        if !self.context.is_active() {
            return report;
        }
        let now = clock.elapsed - self.origin;

        report.spawned = self.context.fire_due_spawns(now);
        if self.sunset_cue.poll(now) {
            self.sun.arm(
                self.sun.elevation(),
                self.sunset.target_elevation,
                self.sunset.duration,
                now,
            );
        }

        report.sun_elevation = self.sun.update(now);
        let sun_position = self.sun.direction();
        host.update_sky(sun_position);
        host.update_water_sun(sun_position.normalize_or_zero());
        host.regenerate_environment();

        report.substeps = self.context.physics.step(
            self.physics.fixed_timestep,
            clock.delta,
            self.physics.max_substeps,
        );

        for (object, handle) in self.context.spawner.spawned() {
            if let Some(pose) = self.context.physics.pose(*handle) {
                host.mirror_body(*object, pose);
            }
        }

        for controller in &mut self.slide {
            if let Some(state) = controller.update(&mut self.context) {
                report.slide_transitions.push((controller.object(), state));
            }
        }
        for controller in &mut self.rest {
            if let Some(state) = controller.update(&mut self.context) {
                report.rest_transitions.push((controller.object(), state));
            }
        }

        self.foliage.advance(clock.delta);
        for (leaf, offset) in self.foliage.leaf_offsets().enumerate() {
            host.place_leaf(leaf, offset);
        }
        host.bend_trunk(self.foliage.trunk_angle(clock.elapsed));
        host.spin_island(island_spin(self.island_spin_rate, clock.elapsed));
        host.advance_water(self.water_time_step);

        host.request_render();
        self.frames += 1;

        report
    }

    /// Stop simulating. Pending spawns and the sunset cue are disarmed.
    pub fn shutdown(&mut self) {
        self.sunset_cue.disarm();
        self.context.deactivate();
    }

    pub fn is_active(&self) -> bool {
        self.context.is_active()
    }

    pub fn context(&self) -> &SimulationContext {
        &self.context
    }

    pub fn slide_state(&self, object: ObjectId) -> Option<SlideState> {
        self.slide
            .iter()
            .find(|c| c.object() == object)
            .map(SlideController::state)
    }

    pub fn rest_state(&self, object: ObjectId) -> Option<RestState> {
        self.rest
            .iter()
            .find(|c| c.object() == object)
            .map(RestController::state)
    }

    pub fn sun(&self) -> &SunAnimator {
        &self.sun
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
