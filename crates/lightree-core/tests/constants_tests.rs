// Sanity checks on tuning constants and their relationships.

use lightree_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn gesture_thresholds_are_ordered() {
    assert!(PINCH_DISTANCE > 0.0);
    assert!(PINCH_DISTANCE < HEART_TIP_DISTANCE);
    // Dead zone must exist between fist and open palm.
    assert!(FIST_SPREAD < OPEN_SPREAD);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rates_are_positive() {
    assert!(POSITION_RATE > 0.0);
    assert!(FOCUS_POSITION_RATE > POSITION_RATE);
    assert!(SCALE_RATE > 0.0);
    assert!(ORIENT_FOLLOW_RATE > 0.0);
    assert!(TREE_AUTO_YAW_RATE > IDLE_AUTO_YAW_RATE);
    assert!(SETTLE_DECAY_PER_TICK > 0.0 && SETTLE_DECAY_PER_TICK < 1.0);
    assert!(ROTATION_DECAY_PER_TICK > 0.0 && ROTATION_DECAY_PER_TICK < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scale_targets_are_ordered() {
    assert!(DATE_SCALE > 0.0);
    assert!(DATE_SCALE < GOLD_SCALE_MIN);
    assert!(PHOTO_SCATTER_SCALE > PHOTO_BASE_SCALE);
    assert!(FOCUS_SCALE > PHOTO_SCATTER_SCALE);
    assert!(TWINKLE_DEPTH > 0.0 && TWINKLE_DEPTH < 1.0);
    assert!(DUST_SCALE_MAX <= GOLD_SCALE_MIN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn layout_constants_are_consistent() {
    assert!(SCATTER_RADIUS_MIN < SCATTER_RADIUS_MAX);
    assert!(DUST_SCATTER_RADIUS_MIN < DUST_SCATTER_RADIUS_MAX);
    assert!(DUST_SCATTER_RADIUS_MAX > SCATTER_RADIUS_MAX);
    // Glyphs must not overlap their neighbours.
    assert!(MOSAIC_CHAR_SPACING > (GLYPH_COLUMNS - 1) as f32 * MOSAIC_CELL_PITCH);
    for f in [DATE_FALLBACK_GOLD, DATE_FALLBACK_PHOTO, DATE_FALLBACK_DUST] {
        assert!((1.2..=2.0).contains(&f));
    }
    // Focus subject sits between the camera and the formation.
    assert!(FOCUS_DISTANCE > 0.0 && FOCUS_DISTANCE < CAMERA_Z);
}
