use glam::Vec3;

// Shared formation and gesture tuning constants.
// The update algorithms read these by name; retune here, not in the loops.

// Tree layout
pub const TREE_HEIGHT_BIAS_EXP: f32 = 0.85; // t = u^exp, biases points toward the base
pub const TREE_MIN_RADIUS: f32 = 0.8; // keeps the apex from collapsing to a line
pub const TREE_RADIUS_JITTER_MIN: f32 = 0.8; // r = rMax * (min + span * u)
pub const TREE_RADIUS_JITTER_SPAN: f32 = 0.4;
pub const TREE_SPIRAL_TURNS_RAD: f32 = 45.0 * std::f32::consts::PI; // ~22.5 full turns base to apex

// Scatter shells (radius ranges)
pub const SCATTER_RADIUS_MIN: f32 = 10.0;
pub const SCATTER_RADIUS_MAX: f32 = 25.0;
pub const DUST_SCATTER_RADIUS_MIN: f32 = 15.0;
pub const DUST_SCATTER_RADIUS_MAX: f32 = 40.0;

// Date mosaic
pub const GLYPH_COLUMNS: usize = 5;
pub const GLYPH_ROWS: usize = 7;
pub const MOSAIC_CELL_PITCH: f32 = 0.6; // world units between lit cells
pub const MOSAIC_CHAR_SPACING: f32 = 4.0; // glyph origin to next glyph origin
pub const DATE_FALLBACK_GOLD: f32 = 1.2; // scatter multiplier once mosaic slots run out
pub const DATE_FALLBACK_PHOTO: f32 = 1.5;
pub const DATE_FALLBACK_DUST: f32 = 2.0;

// Intrinsic particle traits
pub const SPIN_MAX: f32 = 0.6; // rad/s per axis, drawn from [-max, max)
pub const GOLD_SCALE_MIN: f32 = 0.6;
pub const GOLD_SCALE_MAX: f32 = 1.0;
pub const DUST_SCALE_MIN: f32 = 0.12;
pub const DUST_SCALE_MAX: f32 = 0.3;
pub const PHOTO_BASE_SCALE: f32 = 1.0;

// Gesture thresholds (normalized image units)
pub const HEART_TIP_DISTANCE: f32 = 0.12; // both thumb tips and both index tips closer than this
pub const PINCH_DISTANCE: f32 = 0.05;
pub const FIST_SPREAD: f32 = 0.2; // avg wrist-to-fingertip below this closes into the tree
pub const OPEN_SPREAD: f32 = 0.4; // above this scatters

// Orientation
pub const ORIENT_FOLLOW_RATE: f32 = 2.0; // per second, hand-directed yaw/pitch
pub const ORIENT_YAW_RANGE: f32 = std::f32::consts::FRAC_PI_2; // pointer.x = ±1 maps to ±90°
pub const ORIENT_PITCH_RANGE: f32 = std::f32::consts::PI / 5.0; // pointer.y = ±1 maps to ±36°
pub const TREE_AUTO_YAW_RATE: f32 = 0.4; // rad/s
pub const IDLE_AUTO_YAW_RATE: f32 = 0.1; // rad/s, scatter/focus without a hand
pub const SETTLE_DECAY_PER_TICK: f32 = 0.05; // fraction removed per tick

// Particle motion
pub const POSITION_RATE: f32 = 2.5; // per second
pub const FOCUS_POSITION_RATE: f32 = 6.0;
pub const SCALE_RATE: f32 = 5.0;
pub const SPIN_FACTOR: f32 = 0.5;
pub const ROTATION_DECAY_PER_TICK: f32 = 0.05; // date mode straightens glyph cells

// Scale targets
pub const FOCUS_SCALE: f32 = 4.5;
pub const DATE_SCALE: f32 = 0.35;
pub const PHOTO_SCATTER_SCALE: f32 = 2.5;
pub const TWINKLE_FREQ: f32 = 3.0; // rad/s of the global clock
pub const TWINKLE_DEPTH: f32 = 0.4; // dust scale swings in [1 - depth, 1]

// Camera
pub const CAMERA_Z: f32 = 30.0;
pub const CAMERA_FOVY: f32 = std::f32::consts::FRAC_PI_4;
pub const FOCUS_DISTANCE: f32 = 10.0; // focus subject sits this far in front of the eye

#[inline]
pub fn camera_eye() -> Vec3 {
    Vec3::new(0.0, 0.0, CAMERA_Z)
}
