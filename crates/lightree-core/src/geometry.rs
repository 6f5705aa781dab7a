//! Per-particle destination points.
//!
//! Every particle gets its tree, scatter and date targets once, at creation,
//! from a seeded RNG. Mosaic slots are handed out in creation order; once they
//! are exhausted a particle's date target falls back to an enlarged copy of its
//! scatter point so it orbits the glyphs instead of piling onto them.

use glam::Vec3;
use rand::prelude::*;

use crate::config::FormationConfig;
use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    Gold,
    Dust,
    Photo,
}

impl ParticleKind {
    fn scatter_radius(self) -> (f32, f32) {
        match self {
            ParticleKind::Dust => (DUST_SCATTER_RADIUS_MIN, DUST_SCATTER_RADIUS_MAX),
            _ => (SCATTER_RADIUS_MIN, SCATTER_RADIUS_MAX),
        }
    }

    fn date_fallback_factor(self) -> f32 {
        match self {
            ParticleKind::Gold => DATE_FALLBACK_GOLD,
            ParticleKind::Photo => DATE_FALLBACK_PHOTO,
            ParticleKind::Dust => DATE_FALLBACK_DUST,
        }
    }
}

/// Fixed targets and traits of one particle; never changes after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSeed {
    pub kind: ParticleKind,
    pub target_tree: Vec3,
    pub target_scatter: Vec3,
    pub target_date: Vec3,
    /// `true` when `target_date` is a mosaic cell rather than the scatter fallback.
    pub in_mosaic: bool,
    pub spin: Vec3,
    pub base_scale: f32,
    pub twinkle_phase: f32,
}

pub struct TargetGenerator {
    rng: StdRng,
    tree_height: f32,
    tree_radius: f32,
    mosaic: Vec<Vec3>,
    next_slot: usize,
}

impl TargetGenerator {
    pub fn new(config: &FormationConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.seed),
            tree_height: config.tree_height,
            tree_radius: config.tree_radius,
            mosaic: mosaic_points(&config.date_text),
            next_slot: 0,
        }
    }

    pub fn mosaic(&self) -> &[Vec3] {
        &self.mosaic
    }

    pub fn remaining_slots(&self) -> usize {
        self.mosaic.len() - self.next_slot
    }

    pub fn spawn(&mut self, kind: ParticleKind) -> ParticleSeed {
        let target_tree = tree_point(&mut self.rng, self.tree_height, self.tree_radius);
        let (r_min, r_max) = kind.scatter_radius();
        let target_scatter = scatter_point(&mut self.rng, r_min, r_max);

        let (target_date, in_mosaic) = match self.mosaic.get(self.next_slot) {
            Some(&cell) => {
                self.next_slot += 1;
                (cell, true)
            }
            None => (target_scatter * kind.date_fallback_factor(), false),
        };

        let spin = Vec3::new(
            self.rng.gen_range(-SPIN_MAX..SPIN_MAX),
            self.rng.gen_range(-SPIN_MAX..SPIN_MAX),
            self.rng.gen_range(-SPIN_MAX..SPIN_MAX),
        );
        let base_scale = match kind {
            ParticleKind::Gold => self.rng.gen_range(GOLD_SCALE_MIN..GOLD_SCALE_MAX),
            ParticleKind::Dust => self.rng.gen_range(DUST_SCALE_MIN..DUST_SCALE_MAX),
            ParticleKind::Photo => PHOTO_BASE_SCALE,
        };
        let twinkle_phase = self.rng.gen::<f32>() * std::f32::consts::TAU;

        ParticleSeed {
            kind,
            target_tree,
            target_scatter,
            target_date,
            in_mosaic,
            spin,
            base_scale,
            twinkle_phase,
        }
    }
}

/// Point on a conical spiral around the Y axis, denser toward the base.
pub fn tree_point(rng: &mut impl Rng, height: f32, radius: f32) -> Vec3 {
    let t = rng.gen::<f32>().powf(TREE_HEIGHT_BIAS_EXP);
    let y = t * height - height / 2.0;
    let r_max = (radius * (1.0 - t)).max(TREE_MIN_RADIUS);
    let r = r_max * (TREE_RADIUS_JITTER_MIN + TREE_RADIUS_JITTER_SPAN * rng.gen::<f32>());
    let angle = t * TREE_SPIRAL_TURNS_RAD + rng.gen::<f32>() * std::f32::consts::PI;
    Vec3::new(r * angle.cos(), y, r * angle.sin())
}

/// Uniform direction on the sphere, radius uniform in `[r_min, r_max)`.
pub fn scatter_point(rng: &mut impl Rng, r_min: f32, r_max: f32) -> Vec3 {
    let theta = std::f32::consts::TAU * rng.gen::<f32>();
    let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
    let r = r_min + (r_max - r_min) * rng.gen::<f32>();
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

// 5x7 digits, one byte per row, bit 4 is the leftmost column.
const DIGIT_GLYPHS: [[u8; GLYPH_ROWS]; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
];

/// Bitmap rows for `c`; anything without a glyph renders as `'0'`.
pub fn glyph(c: char) -> &'static [u8; GLYPH_ROWS] {
    let index = c.to_digit(10).unwrap_or(0) as usize;
    &DIGIT_GLYPHS[index]
}

/// Lit cells of `text`, left to right then top to bottom per glyph, centered
/// on the origin in the z = 0 plane.
pub fn mosaic_points(text: &str) -> Vec<Vec3> {
    let chars = text.chars().count();
    if chars == 0 {
        return Vec::new();
    }
    let width = (chars - 1) as f32 * MOSAIC_CHAR_SPACING
        + (GLYPH_COLUMNS - 1) as f32 * MOSAIC_CELL_PITCH;
    let mid_row = (GLYPH_ROWS - 1) as f32 / 2.0;

    let mut points = Vec::new();
    for (i, c) in text.chars().enumerate() {
        let origin_x = i as f32 * MOSAIC_CHAR_SPACING - width / 2.0;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_COLUMNS {
                if bits & (1 << (GLYPH_COLUMNS - 1 - col)) == 0 {
                    continue;
                }
                points.push(Vec3::new(
                    origin_x + col as f32 * MOSAIC_CELL_PITCH,
                    (mid_row - row as f32) * MOSAIC_CELL_PITCH,
                    0.0,
                ));
            }
        }
    }
    points
}
