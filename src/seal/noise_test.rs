use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

#[test]
fn zero_intensity_has_no_particles() {
    assert_eq!(particle_count(Size::new(300.0, 300.0), 0.0), 0);
    assert_eq!(particle_count(Size::new(300.0, 300.0), -3.0), 0);
    assert_eq!(particle_count(Size::new(300.0, 300.0), f64::NAN), 0);
}

#[test]
fn count_scales_with_intensity_and_area() {
    // 100 * 100 * 0.05 = 500 at full intensity.
    assert_eq!(particle_count(Size::new(100.0, 100.0), 100.0), 500);
    assert_eq!(particle_count(Size::new(100.0, 100.0), 40.0), 200);
    assert_eq!(particle_count(Size::new(200.0, 100.0), 40.0), 400);
}

#[test]
fn count_caps_intensity_at_hundred() {
    assert_eq!(particle_count(Size::new(100.0, 100.0), 400.0), 500);
}

#[test]
fn count_is_capped_on_huge_canvases() {
    assert_eq!(particle_count(Size::new(40_000.0, 40_000.0), 100.0), MAX_NOISE_PARTICLES);
    assert_eq!(particle_count(Size::new(f64::INFINITY, 100.0), 50.0), 0);
}

#[test]
fn particles_stay_in_bounds_and_radius_range() {
    let mut rng = SmallRng::seed_from_u64(7);
    let size = Size::new(280.0, 120.0);
    let particles = scatter(size, 60.0, &mut rng);
    assert_eq!(particles.len(), particle_count(size, 60.0));
    for p in &particles {
        assert!((0.0..size.width).contains(&p.center.x));
        assert!((0.0..size.height).contains(&p.center.y));
        assert!((NOISE_MIN_RADIUS..NOISE_MAX_RADIUS).contains(&p.radius));
    }
}

#[test]
fn same_seed_same_texture() {
    let size = Size::new(100.0, 100.0);
    let a = scatter(size, 10.0, &mut SmallRng::seed_from_u64(42));
    let b = scatter(size, 10.0, &mut SmallRng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn different_seeds_differ() {
    let size = Size::new(100.0, 100.0);
    let a = scatter(size, 10.0, &mut SmallRng::seed_from_u64(1));
    let b = scatter(size, 10.0, &mut SmallRng::seed_from_u64(2));
    assert_ne!(a, b);
}
