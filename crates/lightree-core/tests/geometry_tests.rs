// Target generation: tree/scatter bounds, mosaic layout, determinism.

use glam::Vec3;
use lightree_core::constants::*;
use lightree_core::geometry::{glyph, mosaic_points, scatter_point, tree_point};
use lightree_core::{FormationConfig, ParticleKind, TargetGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn config(date_text: &str) -> FormationConfig {
    FormationConfig {
        date_text: date_text.to_string(),
        ..FormationConfig::default()
    }
}

#[test]
fn tree_points_stay_on_the_cone() {
    let (height, radius) = (14.0, 6.0);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..5000 {
        let p = tree_point(&mut rng, height, radius);
        assert!(p.y >= -height / 2.0 - 1e-4 && p.y <= height / 2.0 + 1e-4);
        let r = (p.x * p.x + p.z * p.z).sqrt();
        // Fraction of the way up, recovered from y.
        let t = (p.y + height / 2.0) / height;
        let r_max = (radius * (1.0 - t)).max(TREE_MIN_RADIUS);
        assert!(r <= r_max * (TREE_RADIUS_JITTER_MIN + TREE_RADIUS_JITTER_SPAN) + 1e-3);
        assert!(r >= r_max * TREE_RADIUS_JITTER_MIN - 1e-3);
    }
}

#[test]
fn tree_apex_radius_is_clamped() {
    // A tiny radius would collapse every point onto the axis without the clamp.
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..1000 {
        let p = tree_point(&mut rng, 10.0, 0.01);
        let r = (p.x * p.x + p.z * p.z).sqrt();
        assert!(r >= TREE_MIN_RADIUS * TREE_RADIUS_JITTER_MIN - 1e-4);
    }
}

#[test]
fn tree_height_follows_power_law() {
    let mut rng = StdRng::seed_from_u64(11);
    let below = (0..4000)
        .map(|_| tree_point(&mut rng, 14.0, 6.0))
        .filter(|p| p.y < 0.0)
        .count();
    // P(u^0.85 < 0.5) = 0.5^(1/0.85), about 44%.
    assert!((1600..1950).contains(&below), "{below} of 4000 below the middle");
}

#[test]
fn scatter_points_fill_the_shell() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut sum = Vec3::ZERO;
    for _ in 0..5000 {
        let p = scatter_point(&mut rng, SCATTER_RADIUS_MIN, SCATTER_RADIUS_MAX);
        let r = p.length();
        assert!(r >= SCATTER_RADIUS_MIN - 1e-3 && r <= SCATTER_RADIUS_MAX + 1e-3);
        sum += p / r;
    }
    // Uniform directions average out near the origin.
    assert!((sum / 5000.0).length() < 0.05);
}

#[test]
fn dust_scatters_farther() {
    let mut generator = TargetGenerator::new(&config("1"));
    for _ in 0..500 {
        let seed = generator.spawn(ParticleKind::Dust);
        let r = seed.target_scatter.length();
        assert!(r >= DUST_SCATTER_RADIUS_MIN - 1e-3 && r <= DUST_SCATTER_RADIUS_MAX + 1e-3);
        assert!(seed.base_scale >= DUST_SCALE_MIN && seed.base_scale < DUST_SCALE_MAX);
    }
}

#[test]
fn glyph_cell_counts() {
    assert_eq!(mosaic_points("0").len(), 19);
    assert_eq!(mosaic_points("1").len(), 10);
    assert_eq!(mosaic_points("10").len(), 29);
    assert!(mosaic_points("").is_empty());
}

#[test]
fn unknown_characters_render_as_zero() {
    assert_eq!(glyph('x'), glyph('0'));
    assert_eq!(mosaic_points("x"), mosaic_points("0"));
    assert_eq!(mosaic_points("1-1").len(), 10 + 19 + 10);
}

#[test]
fn mosaic_is_centered_on_a_fixed_grid() {
    let points = mosaic_points("20251225");
    let min_x = points.iter().map(|p| p.x).fold(f32::MAX, f32::min);
    let max_x = points.iter().map(|p| p.x).fold(f32::MIN, f32::max);
    let min_y = points.iter().map(|p| p.y).fold(f32::MAX, f32::min);
    let max_y = points.iter().map(|p| p.y).fold(f32::MIN, f32::max);
    let half_width = (7.0 * MOSAIC_CHAR_SPACING + 4.0 * MOSAIC_CELL_PITCH) / 2.0;
    assert!((min_x + half_width).abs() < 1e-4);
    assert!((max_x - half_width).abs() < 1e-4);
    assert!((min_y + 3.0 * MOSAIC_CELL_PITCH).abs() < 1e-4);
    assert!((max_y - 3.0 * MOSAIC_CELL_PITCH).abs() < 1e-4);
    for p in &points {
        assert_eq!(p.z, 0.0);
        let rows = p.y / MOSAIC_CELL_PITCH;
        assert!((rows - rows.round()).abs() < 1e-4);
    }
}

#[test]
fn mosaic_layout_is_bit_identical_across_runs() {
    let a = mosaic_points("20251225");
    let b = mosaic_points("20251225");
    assert_eq!(a.len(), b.len());
    for (p, q) in a.iter().zip(&b) {
        assert_eq!(p.to_array().map(f32::to_bits), q.to_array().map(f32::to_bits));
    }
}

#[test]
fn same_seed_same_particles() {
    let cfg = config("20251225");
    let mut a = TargetGenerator::new(&cfg);
    let mut b = TargetGenerator::new(&cfg);
    let kinds = [ParticleKind::Gold, ParticleKind::Dust, ParticleKind::Photo];
    for i in 0..600 {
        let kind = kinds[i % 3];
        assert_eq!(a.spawn(kind), b.spawn(kind));
    }
}

#[test]
fn different_seed_different_layout() {
    let mut a = TargetGenerator::new(&config("1"));
    let mut b = TargetGenerator::new(&FormationConfig {
        seed: 99,
        ..config("1")
    });
    assert_ne!(
        a.spawn(ParticleKind::Gold).target_tree,
        b.spawn(ParticleKind::Gold).target_tree
    );
}

#[test]
fn mosaic_slots_go_in_creation_order_then_fall_back() {
    let mut generator = TargetGenerator::new(&config("1"));
    let cells = mosaic_points("1");
    assert_eq!(generator.remaining_slots(), cells.len());

    for cell in &cells {
        let seed = generator.spawn(ParticleKind::Gold);
        assert!(seed.in_mosaic);
        assert_eq!(seed.target_date, *cell);
    }
    assert_eq!(generator.remaining_slots(), 0);

    for (kind, factor) in [
        (ParticleKind::Gold, DATE_FALLBACK_GOLD),
        (ParticleKind::Photo, DATE_FALLBACK_PHOTO),
        (ParticleKind::Dust, DATE_FALLBACK_DUST),
    ] {
        let seed = generator.spawn(kind);
        assert!(!seed.in_mosaic);
        assert_eq!(seed.target_date, seed.target_scatter * factor);
    }
}

#[test]
fn intrinsic_traits_in_range() {
    let mut generator = TargetGenerator::new(&config("1"));
    for _ in 0..500 {
        let seed = generator.spawn(ParticleKind::Gold);
        assert!(seed.spin.abs().max_element() <= SPIN_MAX);
        assert!(seed.base_scale >= GOLD_SCALE_MIN && seed.base_scale < GOLD_SCALE_MAX);
        assert!(seed.twinkle_phase >= 0.0 && seed.twinkle_phase < std::f32::consts::TAU);
    }
    assert_eq!(generator.spawn(ParticleKind::Photo).base_scale, PHOTO_BASE_SCALE);
}
