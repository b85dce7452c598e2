use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use constants::lighting::{SUN_AZIMUTH, SUN_ELEVATION};

/// Active elevation interpolation. Discarded once it completes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunAnimation {
    pub start: f32,
    pub target: f32,
    pub started_at: f64,
    pub duration: f64,
}

impl SunAnimation {
    /// Value at `now` and whether the animation has finished.
    pub fn sample(&self, now: f64) -> (f32, bool) {
        let elapsed = now - self.started_at;
        if elapsed < self.duration {
            let fraction = (elapsed / self.duration).max(0.0) as f32;
            (self.start + (self.target - self.start) * fraction, false)
        } else {
            (self.target, true)
        }
    }
}

/// Sun elevation over time and the derived light direction.
#[derive(Debug, Clone)]
pub struct SunAnimator {
    elevation: f32,
    azimuth: f32,
    animation: Option<SunAnimation>,
}

impl Default for SunAnimator {
    fn default() -> Self {
        Self::new(SUN_ELEVATION, SUN_AZIMUTH)
    }
}

impl SunAnimator {
    pub fn new(elevation: f32, azimuth: f32) -> Self {
        Self {
            elevation,
            azimuth,
            animation: None,
        }
    }

    /// Start interpolating from `start` to `target` over `duration` seconds.
    /// Replaces any animation already running.
    pub fn arm(&mut self, start: f32, target: f32, duration: f64, now: f64) {
        self.elevation = start;
        self.animation = Some(SunAnimation {
            start,
            target,
            started_at: now,
            duration,
        });
        info!(
            "Sun animation armed: {:.1}° -> {:.1}° over {:.1}s",
            start, target, duration
        );
    }

    /// Advance to `now` and return the current elevation.
    pub fn update(&mut self, now: f64) -> f32 {
        if let Some(animation) = self.animation {
            let (value, finished) = animation.sample(now);
            self.elevation = value;
            if finished {
                self.animation = None;
                info!("Sun animation complete at {:.1}°", value);
            }
        }
        self.elevation
    }

    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Unit vector pointing at the sun.
    pub fn direction(&self) -> Vec3 {
        sun_direction(self.elevation, self.azimuth)
    }
}

/// Spherical to cartesian with polar angle measured from +Y and azimuth from +Z.
pub fn sun_direction(elevation_degrees: f32, azimuth_degrees: f32) -> Vec3 {
    let phi = (90.0 - elevation_degrees).to_radians();
    let theta = azimuth_degrees.to_radians();
    Vec3::new(
        phi.sin() * theta.sin(),
        phi.cos(),
        phi.sin() * theta.cos(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn starts_at_start_value() {
        let mut sun = SunAnimator::default();
        sun.arm(90.0, 5.0, 10.0, 1.0);
        assert_relative_eq!(sun.update(1.0), 90.0);
        assert!(sun.is_animating());
    }

    #[test]
    fn lands_exactly_on_target_and_disarms() {
        let mut sun = SunAnimator::default();
        sun.arm(90.0, 5.0, 10.0, 1.0);
        assert_eq!(sun.update(11.0), 5.0);
        assert!(!sun.is_animating());
        assert_eq!(sun.update(50.0), 5.0);
    }

    #[test]
    fn interpolates_monotonically_both_ways() {
        for (start, target) in [(90.0_f32, 5.0_f32), (5.0, 90.0)] {
            let mut sun = SunAnimator::default();
            sun.arm(start, target, 10.0, 0.0);
            let mut last = start;
            for tick in 1..=120 {
                let value = sun.update(f64::from(tick) * 0.1);
                if start > target {
                    assert!(value <= last);
                } else {
                    assert!(value >= last);
                }
                last = value;
            }
            assert_eq!(last, target);
        }
    }

    #[test]
    fn midpoint_is_halfway() {
        let mut sun = SunAnimator::default();
        sun.arm(90.0, 10.0, 10.0, 0.0);
        assert_relative_eq!(sun.update(5.0), 50.0);
    }

    #[test]
    fn zero_duration_snaps_immediately() {
        let mut sun = SunAnimator::default();
        sun.arm(90.0, 5.0, 0.0, 2.0);
        assert_eq!(sun.update(2.0), 5.0);
        assert!(!sun.is_animating());
    }

    #[test]
    fn zenith_points_up() {
        let dir = sun_direction(90.0, 180.0);
        assert_relative_eq!(dir.y, 1.0);
        assert_relative_eq!(dir.length(), 1.0);
    }

    #[test]
    fn low_sun_with_south_azimuth_points_toward_negative_z() {
        let dir = sun_direction(5.0, 180.0);
        assert!(dir.z < -0.9);
        assert!(dir.y > 0.0);
        assert_relative_eq!(dir.x, 0.0, epsilon = 1.0e-6);
        assert_relative_eq!(dir.length(), 1.0, epsilon = 1.0e-6);
    }
}
