//! Stand-ins for the camera detector and the photo decoder.

use std::io::Cursor;
use std::thread;
use std::time::{Duration, Instant};

use glam::Vec2;
use image::{ImageFormat, Rgba, RgbaImage};
use lightree_core::gesture::{INDEX_TIP, LANDMARK_COUNT, THUMB_TIP};
use lightree_core::{
    Hand, HandDetector, HandFrame, Landmark, LightreeError, PhotoDecoder, PhotoImage,
};

// Detector latency; slower than the render loop on purpose.
const DETECT_LATENCY: Duration = Duration::from_millis(40);

#[derive(Clone, Copy, Debug)]
pub enum Pose {
    Open,
    Fist,
    Pinch,
    Heart,
    Away,
}

// (seconds held, pose)
const SCRIPT: [(f32, Pose); 6] = [
    (3.0, Pose::Away),
    (4.0, Pose::Open),
    (4.0, Pose::Pinch),
    (4.0, Pose::Heart),
    (3.0, Pose::Fist),
    (3.0, Pose::Away),
];

pub struct ScriptedDetector {
    start: Instant,
}

impl ScriptedDetector {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    fn pose_at(&self, t: f32) -> Pose {
        let total: f32 = SCRIPT.iter().map(|(d, _)| d).sum();
        let mut t = t.rem_euclid(total);
        for (held, pose) in SCRIPT {
            if t < held {
                return pose;
            }
            t -= held;
        }
        Pose::Away
    }
}

impl HandDetector for ScriptedDetector {
    fn detect(&mut self) -> lightree_core::Result<HandFrame> {
        thread::sleep(DETECT_LATENCY);
        let t = self.start.elapsed().as_secs_f32();
        // Palm drifts slowly so the pointer has something to follow.
        let palm = Vec2::new(0.5 + 0.25 * (t * 0.7).sin(), 0.5 + 0.15 * (t * 0.5).cos());
        let frame = match self.pose_at(t) {
            Pose::Away => HandFrame::empty(),
            Pose::Open => HandFrame::with_hands([synthetic_hand(palm, 0.5, false)]),
            Pose::Fist => HandFrame::with_hands([synthetic_hand(palm, 0.12, false)]),
            Pose::Pinch => HandFrame::with_hands([synthetic_hand(palm, 0.3, true)]),
            Pose::Heart => {
                let left = synthetic_hand(Vec2::new(0.42, 0.5), 0.3, false);
                let mut right = synthetic_hand(Vec2::new(0.58, 0.5), 0.3, false);
                // Bring thumb and index tips together between the hands.
                for tip in [THUMB_TIP, INDEX_TIP] {
                    let a = left.landmarks[tip];
                    right.landmarks[tip] = Landmark::new(a.x + 0.03, a.y, a.z);
                }
                HandFrame::with_hands([left, right])
            }
        };
        Ok(frame)
    }
}

/// Hand with every non-thumb fingertip `spread` away from the wrist.
fn synthetic_hand(palm: Vec2, spread: f32, pinch: bool) -> Hand {
    let wrist = palm + Vec2::new(0.0, 0.1);
    // thumb, index, middle, ring, pinky (image y grows downward)
    let dirs = [
        Vec2::new(-0.8, -0.6),
        Vec2::new(-0.3, -1.0),
        Vec2::new(0.0, -1.0),
        Vec2::new(0.3, -1.0),
        Vec2::new(0.6, -0.8),
    ];
    let mut points = vec![Landmark::default(); LANDMARK_COUNT];
    points[0] = Landmark::new(wrist.x, wrist.y, 0.0);
    for (finger, dir) in dirs.iter().enumerate() {
        let tip = wrist + dir.normalize() * spread;
        for joint in 0..4 {
            let f = (joint + 1) as f32 / 4.0;
            let p = wrist.lerp(tip, f);
            points[1 + finger * 4 + joint] = Landmark::new(p.x, p.y, 0.0);
        }
    }
    if pinch {
        points[THUMB_TIP] = points[INDEX_TIP];
    }
    Hand::new(points)
}

/// Reads only the encoded dimensions; pixel decoding is the presenter's job.
pub struct HeaderDecoder;

impl PhotoDecoder for HeaderDecoder {
    fn decode(&mut self, id: u64, payload: &[u8]) -> lightree_core::Result<PhotoImage> {
        let fail = |reason: String| LightreeError::PhotoDecode { id, reason };
        let (width, height) = image::io::Reader::new(Cursor::new(payload))
            .with_guessed_format()
            .map_err(|e| fail(e.to_string()))?
            .into_dimensions()
            .map_err(|e| fail(e.to_string()))?;
        if width == 0 || height == 0 {
            return Err(fail(format!("zero-sized image {width}x{height}")));
        }
        Ok(PhotoImage { id, width, height })
    }
}

/// Solid-colour PNG for feeding the intake.
pub fn sample_png(width: u32, height: u32) -> anyhow::Result<Vec<u8>> {
    let pixels = RgbaImage::from_pixel(width, height, Rgba([240, 200, 120, 255]));
    let mut bytes = Cursor::new(Vec::new());
    pixels.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}
