use std::time::{Duration, Instant};

use lightree_core::{FrameView, Mode, ParticleInstance, ParticleKind, Presenter};

const SUMMARY_EVERY: Duration = Duration::from_secs(1);

/// Packs each frame into an instance buffer the way a GPU presenter would,
/// then logs a short summary instead of drawing.
pub struct LogPresenter {
    instances: Vec<ParticleInstance>,
    last_mode: Option<Mode>,
    last_summary: Instant,
    frames: u32,
}

impl LogPresenter {
    pub fn new() -> Self {
        Self {
            instances: Vec::new(),
            last_mode: None,
            last_summary: Instant::now(),
            frames: 0,
        }
    }
}

impl Presenter for LogPresenter {
    fn present(&mut self, frame: &FrameView<'_>) {
        self.instances.clear();
        self.instances
            .extend(frame.transforms.iter().map(ParticleInstance::from));
        let bytes: &[u8] = bytemuck::cast_slice(&self.instances);
        self.frames += 1;

        if self.last_mode != Some(frame.mode) {
            log::info!("[present] mode {} ({})", frame.mode, frame.mode.hint());
            self.last_mode = Some(frame.mode);
        }
        if self.last_summary.elapsed() < SUMMARY_EVERY {
            return;
        }
        let visible = frame.transforms.iter().filter(|t| t.scale > 0.01).count();
        let photos = frame
            .transforms
            .iter()
            .filter(|t| t.kind == ParticleKind::Photo)
            .count();
        let (_, rotation, _) = frame.formation.to_scale_rotation_translation();
        // Where the focus subject lands on screen, in NDC.
        let subject_ndc = frame.focus_subject.and_then(|id| {
            let t = frame.transforms.iter().find(|t| t.id == id)?;
            Some(frame.camera.project(frame.formation.transform_point3(t.position)))
        });
        log::info!(
            "[present] {} fps, mode {}, {} / {} visible, {} photo(s), focus {:?} at {:?}, upload {} KiB, rot {:?}",
            self.frames,
            frame.mode,
            visible,
            frame.transforms.len(),
            photos,
            frame.focus_subject,
            subject_ndc,
            bytes.len() / 1024,
            rotation.to_euler(glam::EulerRot::YXZ),
        );
        self.frames = 0;
        self.last_summary = Instant::now();
    }
}
