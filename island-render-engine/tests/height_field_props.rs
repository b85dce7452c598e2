use bevy::prelude::*;
use island_render_engine::engine::scene::height_field::HeightField;
use island_render_engine::engine::simulation::oscillator::{FoliageElement, OscillatorBank};
use proptest::prelude::*;

fn field() -> HeightField {
    HeightField::default()
}

proptest! {
    #[test]
    fn height_never_rises_moving_outwards(
        angle in 0.0f32..std::f32::consts::TAU,
        inner in 0.0f32..40.0,
        step in 0.01f32..10.0,
    ) {
        let field = field();
        let direction = Vec2::from_angle(angle);
        let near = direction * inner;
        let far = direction * (inner + step);
        prop_assert!(field.height_at(far.x, far.y) <= field.height_at(near.x, near.y) + 1e-4);
    }

    #[test]
    fn height_is_bounded_by_rim_and_apex(x in -100.0f32..100.0, z in -100.0f32..100.0) {
        let field = field();
        let h = field.height_at(x, z);
        prop_assert!(h >= field.centre_height);
        prop_assert!(h <= field.apex_height() + 1e-4);
    }

    #[test]
    fn gradient_is_finite_everywhere(x in -100.0f32..100.0, z in -100.0f32..100.0) {
        let gradient = field().gradient_at(x, z);
        prop_assert!(gradient.x.is_finite() && gradient.y.is_finite());
    }

    #[test]
    fn gradient_points_inwards(x in -25.0f32..25.0, z in -25.0f32..25.0) {
        prop_assume!(x.abs() > 0.1 && z.abs() > 0.1);
        let gradient = field().gradient_at(x, z);
        prop_assert!(gradient.x * x < 0.0);
        prop_assert!(gradient.y * z < 0.0);
    }

    #[test]
    fn sway_stays_within_amplitude(
        phase_offset in -10.0f32..10.0,
        frames in proptest::collection::vec(0.0f32..0.2, 0..200),
    ) {
        let mut bank = OscillatorBank::new(
            vec![FoliageElement { base_offset: Vec3::ZERO, phase_offset }],
            0.2,
            2.5,
        );
        let mut last_phase = bank.phase();
        for delta in frames {
            bank.advance(delta);
            prop_assert!(bank.phase() >= last_phase);
            last_phase = bank.phase();
            let d = bank.displacement(0).unwrap_or(f32::NAN);
            prop_assert!(d.abs() <= 0.2 + 1e-6);
        }
    }
}
