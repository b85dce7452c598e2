/// Analytic height field for the squashed hemispherical island
use bevy::prelude::*;
use constants::island::{ISLAND_CENTRE_HEIGHT, ISLAND_RADIUS, ISLAND_VERTICAL_SCALE};
use serde::{Deserialize, Serialize};

/// Lower bound on the radicand used for the gradient, keeps the slope finite at the rim.
pub const GRADIENT_EPSILON: f32 = 1.0e-4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeightField {
    pub centre_height: f32,
    pub radius: f32,
    pub vertical_scale: f32,
}

/// Surface elevation and horizontal gradient at one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSample {
    pub height: f32,
    /// (∂y/∂x, ∂y/∂z)
    pub gradient: Vec2,
}

impl SurfaceSample {
    /// Vertical rate of change when moving horizontally with `velocity` (vx, vz).
    pub fn slope_along(&self, velocity: Vec2) -> f32 {
        self.gradient.dot(velocity)
    }
}

impl Default for HeightField {
    fn default() -> Self {
        Self {
            centre_height: ISLAND_CENTRE_HEIGHT,
            radius: ISLAND_RADIUS,
            vertical_scale: ISLAND_VERTICAL_SCALE,
        }
    }
}

impl HeightField {
    pub fn new(centre_height: f32, radius: f32, vertical_scale: f32) -> Self {
        Self {
            centre_height,
            radius,
            vertical_scale,
        }
    }

    /// Squared radius minus squared horizontal distance. Negative outside the dome.
    fn radicand(&self, x: f32, z: f32) -> f32 {
        self.radius * self.radius - (x * x + z * z)
    }

    /// Surface elevation at (x, z). Flat at `centre_height` on and beyond the rim.
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        self.centre_height + self.vertical_scale * self.radicand(x, z).max(0.0).sqrt()
    }

    /// Partial derivatives (∂y/∂x, ∂y/∂z) at (x, z).
    pub fn gradient_at(&self, x: f32, z: f32) -> Vec2 {
        let denom = self.radicand(x, z).max(GRADIENT_EPSILON).sqrt();
        Vec2::new(
            -self.vertical_scale * x / denom,
            -self.vertical_scale * z / denom,
        )
    }

    /// Height and gradient together, as the slide controller consumes them.
    pub fn sample(&self, x: f32, z: f32) -> SurfaceSample {
        SurfaceSample {
            height: self.height_at(x, z),
            gradient: self.gradient_at(x, z),
        }
    }

    /// Horizontal distance of (x, z) from the dome's axis.
    pub fn horizontal_distance(x: f32, z: f32) -> f32 {
        (x * x + z * z).sqrt()
    }

    /// Elevation of the apex.
    pub fn apex_height(&self) -> f32 {
        self.centre_height + self.vertical_scale * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn apex_matches_formula() {
        let field = HeightField::default();
        assert_relative_eq!(field.height_at(0.0, 0.0), -2.0 + 0.3 * 30.0);
        assert_relative_eq!(field.apex_height(), field.height_at(0.0, 0.0));
    }

    #[test]
    fn rim_and_beyond_are_flat() {
        let field = HeightField::default();
        assert_relative_eq!(field.height_at(30.0, 0.0), -2.0);
        assert_relative_eq!(field.height_at(40.0, 25.0), -2.0);
    }

    #[test]
    fn gradient_is_zero_at_apex_and_points_inward() {
        let field = HeightField::default();
        assert_eq!(field.gradient_at(0.0, 0.0), Vec2::ZERO);

        let g = field.gradient_at(10.0, -10.0);
        assert!(g.x < 0.0);
        assert!(g.y > 0.0);
    }

    #[test]
    fn gradient_stays_finite_past_the_rim() {
        let field = HeightField::default();
        let g = field.gradient_at(35.0, 0.0);
        assert!(g.x.is_finite());
        assert_relative_eq!(g.x, -0.3 * 35.0 / GRADIENT_EPSILON.sqrt());
    }

    #[test]
    fn gradient_matches_finite_difference() {
        let field = HeightField::default();
        let (x, z) = (7.0, 4.0);
        let h = 1.0e-2;
        let numeric_x = (field.height_at(x + h, z) - field.height_at(x - h, z)) / (2.0 * h);
        let numeric_z = (field.height_at(x, z + h) - field.height_at(x, z - h)) / (2.0 * h);
        let g = field.gradient_at(x, z);
        assert_relative_eq!(g.x, numeric_x, epsilon = 1.0e-3);
        assert_relative_eq!(g.y, numeric_z, epsilon = 1.0e-3);
    }

    #[test]
    fn sample_pairs_height_with_directional_derivative() {
        let field = HeightField::default();
        let v = Vec2::new(2.0, 3.0);
        let g = field.gradient_at(-5.0, 2.0);
        let sample = field.sample(-5.0, 2.0);
        assert_eq!(sample.height, field.height_at(-5.0, 2.0));
        assert_eq!(sample.gradient, g);
        assert_relative_eq!(sample.slope_along(v), g.x * 2.0 + g.y * 3.0);
    }
}
