pub mod config;
pub mod constants;
pub mod detector;
pub mod error;
pub mod formation;
pub mod geometry;
pub mod gesture;
pub mod photo;
pub mod state;

pub use config::FormationConfig;
pub use detector::{spawn_detector, DetectorHandle, FrameMailbox, HandDetector};
pub use error::{LightreeError, Result};
pub use formation::*;
pub use geometry::{ParticleKind, ParticleSeed, TargetGenerator};
pub use gesture::{
    classify, GestureClassifier, GestureReading, Hand, HandFrame, Landmark, Mode, PointerSignal,
};
pub use photo::{PhotoDecoder, PhotoImage, PhotoIntake};
pub use state::*;
