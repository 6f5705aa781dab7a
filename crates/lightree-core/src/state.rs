//! View-side state shared between the formation engine and presenters.
//!
//! The engine only needs the camera to place the focus subject; presenters use
//! the same description to build their view/projection matrices so both sides
//! agree on where "in front of the camera" is.

use glam::{Mat4, Vec3};

use crate::constants::{camera_eye, CAMERA_FOVY, FOCUS_DISTANCE};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: camera_eye(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOVY,
            znear: 0.1,
            zfar: 200.0,
        }
    }
}

impl Camera {
    /// World to clip space, right-handed, depth in [0, 1].
    pub fn view_projection(&self) -> Mat4 {
        let projection =
            Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar);
        projection * Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Normalized device coordinates of a world-space point. The view axis
    /// lands on x = y = 0.
    pub fn project(&self, world: Vec3) -> Vec3 {
        self.view_projection().project_point3(world)
    }

    /// World-space point on the view axis, `FOCUS_DISTANCE` in front of the eye.
    pub fn focus_point(&self) -> Vec3 {
        let forward = (self.target - self.eye).normalize_or_zero();
        self.eye + forward * FOCUS_DISTANCE
    }
}
