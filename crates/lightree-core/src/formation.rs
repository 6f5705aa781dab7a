//! Per-frame formation update.
//!
//! [`FormationState`] owns every particle, the shared orientation and the last
//! applied gesture reading. One call to [`FormationState::tick`] per rendered
//! frame advances everything; presenters read [`FormationState::frame`] only
//! between ticks.

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::config::FormationConfig;
use crate::constants::*;
use crate::error::Result;
use crate::geometry::{ParticleKind, ParticleSeed, TargetGenerator};
use crate::gesture::{GestureReading, Mode, PointerSignal};
use crate::photo::PhotoImage;
use crate::state::Camera;

/// Fraction of the remaining error removed this tick for a per-second `rate`.
/// Clamped to 1 so a long frame lands on the target instead of overshooting.
#[inline]
pub fn approach_factor(rate: f32, dt_sec: f32) -> f32 {
    (rate * dt_sec).clamp(0.0, 1.0)
}

#[inline]
fn approach(current: f32, target: f32, rate: f32, dt_sec: f32) -> f32 {
    current + (target - current) * approach_factor(rate, dt_sec)
}

/// Wrap to (-PI, PI] so decay toward zero takes the short way round.
#[inline]
fn wrap_angle(a: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let w = (a + PI).rem_euclid(TAU) - PI;
    if w <= -PI {
        w + TAU
    } else {
        w
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub id: u32,
    pub seed: ParticleSeed,
    pub photo: Option<PhotoImage>,
    pub position: Vec3,
    /// Euler XYZ angles in radians, each kept in (-PI, PI].
    pub rotation: Vec3,
    pub scale: f32,
}

impl Particle {
    fn new(id: u32, seed: ParticleSeed, photo: Option<PhotoImage>) -> Self {
        // New particles bloom out of their scatter point.
        let position = seed.target_scatter;
        Self {
            id,
            seed,
            photo,
            position,
            rotation: Vec3::ZERO,
            scale: 0.0,
        }
    }

    pub fn kind(&self) -> ParticleKind {
        self.seed.kind
    }

    fn mode_target(&self, mode: Mode) -> Vec3 {
        match mode {
            Mode::Tree => self.seed.target_tree,
            Mode::Scatter | Mode::Focus => self.seed.target_scatter,
            Mode::Date => self.seed.target_date,
        }
    }

    fn scale_target(&self, mode: Mode, is_subject: bool, clock: f32) -> f32 {
        let kind = self.seed.kind;
        match mode {
            Mode::Tree if kind == ParticleKind::Dust => 0.0,
            Mode::Focus if is_subject => FOCUS_SCALE,
            Mode::Date => DATE_SCALE,
            Mode::Scatter if kind == ParticleKind::Photo => PHOTO_SCATTER_SCALE,
            _ if kind == ParticleKind::Dust => {
                let wave = 0.5 + 0.5 * (clock * TWINKLE_FREQ + self.seed.twinkle_phase).sin();
                self.seed.base_scale * (1.0 - TWINKLE_DEPTH * wave)
            }
            _ => self.seed.base_scale,
        }
    }

    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }
}

/// Whole-formation rotation; yaw about Y, pitch about X.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FormationOrientation {
    pub yaw: f32,
    pub pitch: f32,
}

impl FormationOrientation {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.yaw) * Mat4::from_rotation_x(self.pitch)
    }

    pub fn update(&mut self, mode: Mode, pointer: PointerSignal, dt_sec: f32) {
        let settle = 1.0 - SETTLE_DECAY_PER_TICK;
        if pointer.detected && mode != Mode::Tree {
            // Follow the short way round after idle drift past ±PI.
            let yaw_gap = wrap_angle(pointer.x * ORIENT_YAW_RANGE - self.yaw);
            self.yaw =
                wrap_angle(self.yaw + yaw_gap * approach_factor(ORIENT_FOLLOW_RATE, dt_sec));
            self.pitch = approach(
                self.pitch,
                pointer.y * ORIENT_PITCH_RANGE,
                ORIENT_FOLLOW_RATE,
                dt_sec,
            );
            return;
        }
        match mode {
            Mode::Tree => {
                self.yaw = wrap_angle(self.yaw + TREE_AUTO_YAW_RATE * dt_sec);
                self.pitch *= settle;
            }
            Mode::Date => {
                self.yaw *= settle;
                self.pitch *= settle;
            }
            Mode::Scatter | Mode::Focus => {
                self.yaw = wrap_angle(self.yaw + IDLE_AUTO_YAW_RATE * dt_sec);
            }
        }
    }
}

/// One particle as handed to a presenter, in formation-local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleTransform {
    pub id: u32,
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
    pub kind: ParticleKind,
}

/// GPU-ready instance record.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub pos: [f32; 3],
    pub scale: f32,
    pub rotation: [f32; 4],
    pub kind: u32,
    pub _pad: [u32; 3],
}

impl From<&ParticleTransform> for ParticleInstance {
    fn from(t: &ParticleTransform) -> Self {
        Self {
            pos: t.position.to_array(),
            scale: t.scale,
            rotation: t.rotation.to_array(),
            kind: match t.kind {
                ParticleKind::Gold => 0,
                ParticleKind::Dust => 1,
                ParticleKind::Photo => 2,
            },
            _pad: [0; 3],
        }
    }
}

/// Read-only view of a completed tick.
pub struct FrameView<'a> {
    pub mode: Mode,
    pub formation: Mat4,
    pub focus_subject: Option<u32>,
    pub camera: &'a Camera,
    pub transforms: &'a [ParticleTransform],
}

/// Consumes completed ticks; all GPU work lives behind this.
pub trait Presenter {
    fn present(&mut self, frame: &FrameView<'_>);
}

pub struct FormationState {
    particles: Vec<Particle>,
    generator: TargetGenerator,
    orientation: FormationOrientation,
    reading: GestureReading,
    camera: Camera,
    clock: f32,
    latest_photo: Option<usize>,
    transforms: Vec<ParticleTransform>,
}

impl FormationState {
    pub fn new(config: &FormationConfig) -> Result<Self> {
        config.validate()?;
        let mut generator = TargetGenerator::new(config);
        let total = config.gold_count + config.dust_count;
        let mut particles = Vec::with_capacity(total);
        // Gold first so the ornaments claim the mosaic cells.
        let kinds = std::iter::repeat(ParticleKind::Gold)
            .take(config.gold_count)
            .chain(std::iter::repeat(ParticleKind::Dust).take(config.dust_count));
        for kind in kinds {
            let id = particles.len() as u32;
            particles.push(Particle::new(id, generator.spawn(kind), None));
        }
        log::info!(
            "[formation] {} gold, {} dust, {} mosaic cells for {:?}",
            config.gold_count,
            config.dust_count,
            generator.mosaic().len(),
            config.date_text
        );
        let mut state = Self {
            particles,
            generator,
            orientation: FormationOrientation::default(),
            reading: GestureReading::default(),
            camera: Camera::default(),
            clock: 0.0,
            latest_photo: None,
            transforms: Vec::with_capacity(total),
        };
        state.publish_transforms();
        Ok(state)
    }

    /// Append a photo particle. It is fully built before it joins the list.
    pub fn add_photo(&mut self, image: PhotoImage) -> u32 {
        let id = self.particles.len() as u32;
        let seed = self.generator.spawn(ParticleKind::Photo);
        let particle = Particle::new(id, seed, Some(image));
        log::info!(
            "[formation] photo {} -> particle {} (mosaic slot: {})",
            image.id,
            id,
            particle.seed.in_mosaic
        );
        self.latest_photo = Some(self.particles.len());
        self.particles.push(particle);
        self.publish_transforms();
        id
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn mode(&self) -> Mode {
        self.reading.mode
    }

    pub fn pointer(&self) -> PointerSignal {
        self.reading.pointer
    }

    pub fn orientation(&self) -> FormationOrientation {
        self.orientation
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }

    pub fn mosaic_len(&self) -> usize {
        self.generator.mosaic().len()
    }

    /// Index of the particle singled out in FOCUS mode: the newest photo.
    pub fn focus_subject(&self) -> Option<usize> {
        match self.reading.mode {
            Mode::Focus => self.latest_photo,
            _ => None,
        }
    }

    /// Camera focus point expressed in the formation's local frame.
    pub fn local_focus_point(&self) -> Vec3 {
        self.orientation
            .matrix()
            .inverse()
            .transform_point3(self.camera.focus_point())
    }

    pub fn tick(&mut self, reading: GestureReading, dt_sec: f32) {
        let dt_sec = dt_sec.max(0.0);
        self.reading = reading;
        self.clock += dt_sec;
        let mode = reading.mode;

        self.orientation.update(mode, reading.pointer, dt_sec);

        let subject = self.focus_subject();
        let focus_point = self.local_focus_point();
        // Local Euler XYZ angles that cancel the formation's yaw and pitch.
        let facing = Vec3::new(-self.orientation.pitch, -self.orientation.yaw, 0.0);
        let clock = self.clock;

        for (i, p) in self.particles.iter_mut().enumerate() {
            let is_subject = subject == Some(i);
            let (target, rate) = if is_subject {
                (focus_point, FOCUS_POSITION_RATE)
            } else {
                (p.mode_target(mode), POSITION_RATE)
            };
            p.position = p.position.lerp(target, approach_factor(rate, dt_sec));

            if is_subject {
                let gap = facing - p.rotation;
                let k = approach_factor(FOCUS_POSITION_RATE, dt_sec);
                p.rotation = Vec3::new(
                    wrap_angle(p.rotation.x + wrap_angle(gap.x) * k),
                    wrap_angle(p.rotation.y + wrap_angle(gap.y) * k),
                    wrap_angle(p.rotation.z + wrap_angle(gap.z) * k),
                );
            } else if mode == Mode::Date {
                p.rotation *= 1.0 - ROTATION_DECAY_PER_TICK;
            } else {
                let r = p.rotation + p.seed.spin * SPIN_FACTOR * dt_sec;
                p.rotation = Vec3::new(wrap_angle(r.x), wrap_angle(r.y), wrap_angle(r.z));
            }

            let scale_target = p.scale_target(mode, is_subject, clock);
            p.scale = approach(p.scale, scale_target, SCALE_RATE, dt_sec).max(0.0);
        }

        self.publish_transforms();
    }

    fn publish_transforms(&mut self) {
        self.transforms.clear();
        self.transforms
            .extend(self.particles.iter().map(|p| ParticleTransform {
                id: p.id,
                position: p.position,
                rotation: p.quat(),
                scale: p.scale,
                kind: p.seed.kind,
            }));
    }

    pub fn transforms(&self) -> &[ParticleTransform] {
        &self.transforms
    }

    pub fn frame(&self) -> FrameView<'_> {
        FrameView {
            mode: self.reading.mode,
            formation: self.orientation.matrix(),
            focus_subject: self.focus_subject().map(|i| self.particles[i].id),
            camera: &self.camera,
            transforms: &self.transforms,
        }
    }

    pub fn write_instances(&self, out: &mut Vec<ParticleInstance>) {
        out.clear();
        out.extend(self.transforms.iter().map(ParticleInstance::from));
    }
}
