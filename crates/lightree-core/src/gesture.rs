//! Hand-landmark gesture classification.
//!
//! The detector hands us up to two hands per frame, each as 21 normalized
//! keypoints. Rules are evaluated in strict priority order and only ever look at
//! the first one or two hands:
//!
//! 1. two hands, thumb tips and index tips both touching: heart, [`Mode::Date`]
//! 2. first hand thumb/index pinch: [`Mode::Focus`]
//! 3. first hand fist: [`Mode::Tree`]; open palm: [`Mode::Scatter`]
//!
//! Anything else (including the dead zone between fist and open palm, and
//! frames with no hands) keeps the previous mode.

use std::fmt;

use glam::Vec2;
use smallvec::SmallVec;

use crate::constants::{FIST_SPREAD, HEART_TIP_DISTANCE, OPEN_SPREAD, PINCH_DISTANCE};

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

/// The four non-thumb fingertips used for the spread metric.
const FINGER_TIPS: [usize; 4] = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// One detected hand. A well-formed hand has [`LANDMARK_COUNT`] points; shorter
/// or non-finite data is tolerated and simply fails the rules that need it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hand {
    pub landmarks: SmallVec<[Landmark; LANDMARK_COUNT]>,
}

impl Hand {
    pub fn new(landmarks: impl IntoIterator<Item = Landmark>) -> Self {
        Self {
            landmarks: landmarks.into_iter().collect(),
        }
    }

    /// Landmark `index` if present and finite.
    pub fn landmark(&self, index: usize) -> Option<Landmark> {
        self.landmarks
            .get(index)
            .copied()
            .filter(Landmark::is_finite)
    }

    fn distance(&self, a: usize, b: usize) -> Option<f32> {
        Some(self.landmark(a)?.xy().distance(self.landmark(b)?.xy()))
    }

    /// Thumb tip to index tip.
    pub fn pinch_distance(&self) -> Option<f32> {
        self.distance(THUMB_TIP, INDEX_TIP)
    }

    /// Mean wrist distance to the four non-thumb fingertips.
    pub fn finger_spread(&self) -> Option<f32> {
        let mut sum = 0.0;
        for tip in FINGER_TIPS {
            sum += self.distance(WRIST, tip)?;
        }
        Some(sum / FINGER_TIPS.len() as f32)
    }
}

/// Latest detector result, first-detected hand first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HandFrame {
    pub hands: SmallVec<[Hand; 2]>,
}

impl HandFrame {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_hands(hands: impl IntoIterator<Item = Hand>) -> Self {
        Self {
            hands: hands.into_iter().collect(),
        }
    }

    pub fn first(&self) -> Option<&Hand> {
        self.hands.first()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Tree,
    Scatter,
    Focus,
    Date,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Tree, Mode::Scatter, Mode::Focus, Mode::Date];

    pub fn label(self) -> &'static str {
        match self {
            Mode::Tree => "TREE",
            Mode::Scatter => "SCATTER",
            Mode::Focus => "FOCUS",
            Mode::Date => "DATE",
        }
    }

    /// Gesture that selects this mode, for on-screen legends.
    pub fn hint(self) -> &'static str {
        match self {
            Mode::Tree => "make a fist",
            Mode::Scatter => "open your hand",
            Mode::Focus => "pinch thumb and index",
            Mode::Date => "two-hand heart",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the first hand points, remapped to [-1, 1] on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSignal {
    pub detected: bool,
    pub x: f32,
    pub y: f32,
}

impl PointerSignal {
    /// Same coordinates, flagged as not detected.
    pub fn lost(self) -> Self {
        Self {
            detected: false,
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureReading {
    pub mode: Mode,
    pub pointer: PointerSignal,
}

/// Classify one frame. Pure: the result depends only on `frame` and the
/// previous tick's reading.
pub fn classify(frame: &HandFrame, previous: GestureReading) -> GestureReading {
    let Some(first) = frame.first() else {
        return GestureReading {
            mode: previous.mode,
            pointer: previous.pointer.lost(),
        };
    };

    let mode = classify_mode(frame, first).unwrap_or(previous.mode);
    let pointer = match first.landmark(MIDDLE_MCP) {
        Some(palm) => PointerSignal {
            detected: true,
            x: (palm.x - 0.5) * 2.0,
            y: (palm.y - 0.5) * 2.0,
        },
        None => previous.pointer.lost(),
    };
    GestureReading { mode, pointer }
}

fn classify_mode(frame: &HandFrame, first: &Hand) -> Option<Mode> {
    if let Some(second) = frame.hands.get(1) {
        if is_heart(first, second) {
            return Some(Mode::Date);
        }
    }
    if first
        .pinch_distance()
        .is_some_and(|d| d < PINCH_DISTANCE)
    {
        return Some(Mode::Focus);
    }
    let spread = first.finger_spread()?;
    if spread < FIST_SPREAD {
        Some(Mode::Tree)
    } else if spread > OPEN_SPREAD {
        Some(Mode::Scatter)
    } else {
        None
    }
}

fn is_heart(a: &Hand, b: &Hand) -> bool {
    let tip_gap = |tip: usize| -> Option<f32> {
        Some(a.landmark(tip)?.xy().distance(b.landmark(tip)?.xy()))
    };
    match (tip_gap(THUMB_TIP), tip_gap(INDEX_TIP)) {
        (Some(thumbs), Some(indexes)) => {
            thumbs < HEART_TIP_DISTANCE && indexes < HEART_TIP_DISTANCE
        }
        _ => false,
    }
}

/// Carries the previous reading between ticks so hysteresis is explicit state.
#[derive(Clone, Debug, Default)]
pub struct GestureClassifier {
    previous: GestureReading,
}

impl GestureClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previous(&self) -> GestureReading {
        self.previous
    }

    pub fn mode(&self) -> Mode {
        self.previous.mode
    }

    pub fn update(&mut self, frame: &HandFrame) -> GestureReading {
        let reading = classify(frame, self.previous);
        if reading.mode != self.previous.mode {
            log::debug!(
                "[gesture] mode {} -> {} ({} hand(s))",
                self.previous.mode,
                reading.mode,
                frame.hands.len()
            );
        }
        self.previous = reading;
        reading
    }
}
