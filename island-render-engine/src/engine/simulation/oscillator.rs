use bevy::prelude::*;

use crate::engine::assets::scene_config::FoliageConfig;

/// One swaying leaf: where it hangs and how far its oscillator leads phase zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoliageElement {
    pub base_offset: Vec3,
    pub phase_offset: f32,
}

/// Wind-driven sway for the palm leaves plus the trunk bend.
///
/// The shared phase only ever grows: `phase += frame_delta * wind_speed`.
#[derive(Debug, Clone)]
pub struct OscillatorBank {
    elements: Vec<FoliageElement>,
    amplitude: f32,
    wind_speed: f32,
    phase: f64,
    trunk_base_angle: f32,
    trunk_bend_amount: f32,
}

impl OscillatorBank {
    pub fn new(elements: Vec<FoliageElement>, amplitude: f32, wind_speed: f32) -> Self {
        Self {
            elements,
            amplitude,
            wind_speed,
            phase: 0.0,
            trunk_base_angle: 0.0,
            trunk_bend_amount: 0.0,
        }
    }

    pub fn from_config(config: &FoliageConfig) -> Self {
        let elements = config
            .leaves
            .iter()
            .map(|leaf| FoliageElement {
                base_offset: Vec3::from_array(leaf.base_offset),
                phase_offset: leaf.phase_offset,
            })
            .collect();

        Self::new(elements, config.wind_intensity, config.wind_speed)
            .with_trunk(config.trunk.base_angle, config.trunk.bend_amount)
    }

    pub fn with_trunk(mut self, base_angle: f32, bend_amount: f32) -> Self {
        self.trunk_base_angle = base_angle;
        self.trunk_bend_amount = bend_amount;
        self
    }

    /// Accumulate wind phase for one frame. Negative deltas are ignored.
    pub fn advance(&mut self, frame_delta: f32) {
        self.phase += f64::from(frame_delta.max(0.0)) * f64::from(self.wind_speed);
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Sway of element `index` at an arbitrary phase.
    pub fn displacement_at(&self, index: usize, phase: f64) -> Option<f32> {
        let element = self.elements.get(index)?;
        let angle = phase + f64::from(element.phase_offset);
        Some(self.amplitude * angle.sin() as f32)
    }

    /// Sway of element `index` at the current phase.
    pub fn displacement(&self, index: usize) -> Option<f32> {
        self.displacement_at(index, self.phase)
    }

    /// Current local position of every leaf: base offset swayed along X and Z.
    pub fn leaf_offsets(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.elements.iter().map(move |element| {
            let angle = self.phase + f64::from(element.phase_offset);
            let d = self.amplitude * angle.sin() as f32;
            element.base_offset + Vec3::new(d, 0.0, d)
        })
    }

    /// Trunk rotation about X for wall-clock time `seconds`.
    pub fn trunk_angle(&self, seconds: f64) -> f32 {
        self.trunk_base_angle + self.trunk_bend_amount * seconds.sin() as f32
    }
}

/// Island rotation about Y for wall-clock time `seconds`.
pub fn island_spin(rate: f32, seconds: f64) -> f32 {
    (f64::from(rate) * seconds) as f32
}
