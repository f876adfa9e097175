// Host-side tests for particle generation and field rotation.

use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::{
    rotation_angle, rotation_matrix, ParticleField, RotationAngle, PARTICLE_COUNT,
    PARTICLE_HALF_SPAN,
};

#[test]
fn generates_exactly_the_requested_count() {
    let mut rng = StdRng::seed_from_u64(7);
    let field = ParticleField::generate(PARTICLE_COUNT, &mut rng);
    assert_eq!(field.len(), 500);
}

#[test]
fn all_coordinates_stay_within_the_cube() {
    let mut rng = StdRng::seed_from_u64(7);
    let field = ParticleField::generate(PARTICLE_COUNT, &mut rng);
    for p in field.particles() {
        for c in [p.x, p.y, p.z] {
            assert!(
                (-PARTICLE_HALF_SPAN..PARTICLE_HALF_SPAN).contains(&c),
                "coordinate {c} out of bounds"
            );
        }
    }
}

#[test]
fn fixed_seed_reproduces_the_exact_field() {
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);
    let field_a = ParticleField::generate(64, &mut a);
    let field_b = ParticleField::generate(64, &mut b);
    assert_eq!(field_a.particles(), field_b.particles());
}

#[test]
fn regeneration_only_happens_when_count_changes() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut field = ParticleField::generate(100, &mut rng);
    let before = field.particles().to_vec();

    assert!(!field.regenerate_if_count_changed(100, &mut rng));
    assert_eq!(field.particles(), &before[..]);

    assert!(field.regenerate_if_count_changed(200, &mut rng));
    assert_eq!(field.len(), 200);
}

#[test]
fn rotation_is_a_pure_function_of_elapsed_time() {
    for t in [0.0, 0.016, 1.0, 33.3, 1e6] {
        assert_eq!(rotation_angle(t), rotation_angle(t));
    }
}

#[test]
fn rotation_rates_match_contract() {
    assert_eq!(
        rotation_angle(100.0),
        RotationAngle { x: 0.5, y: 0.2 }
    );
    assert_eq!(rotation_angle(0.0), RotationAngle::default());
}

#[test]
fn rotation_matrix_at_zero_is_identity() {
    let m = rotation_matrix(RotationAngle::default());
    assert_eq!(m, glam::Mat4::IDENTITY);
}
