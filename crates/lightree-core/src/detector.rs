//! Seam to the external hand-landmark detector.
//!
//! Detection may run slower than rendering. The detector thread publishes
//! each completed [`HandFrame`] into a [`FrameMailbox`]; the tick takes the
//! newest one, whole, at its start. Requests are self-paced: the next
//! detection starts only after the previous one returns.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};

use crate::error::{LightreeError, Result};
use crate::gesture::HandFrame;

pub trait HandDetector: Send + 'static {
    /// Run one detection. Blocks until the detector has a result.
    fn detect(&mut self) -> Result<HandFrame>;
}

/// Single-slot handoff; a newer frame replaces one nobody took yet.
#[derive(Clone, Default)]
pub struct FrameMailbox {
    slot: Arc<Mutex<Option<HandFrame>>>,
}

impl FrameMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, frame: HandFrame) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(frame);
    }

    pub fn take(&self) -> Option<HandFrame> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

pub struct DetectorHandle {
    stop: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl DetectorHandle {
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            _ = worker.join();
        }
    }
}

impl Drop for DetectorHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Run `detector` on its own thread until the handle is stopped or dropped.
/// Failed detections are logged and retried; the formation keeps its last mode.
pub fn spawn_detector<D: HandDetector>(
    mut detector: D,
    mailbox: FrameMailbox,
) -> Result<DetectorHandle> {
    let stop = Arc::new(AtomicBool::new(false));
    let stop_worker = Arc::clone(&stop);
    let worker = thread::Builder::new()
        .name("hand-detector".into())
        .spawn(move || {
            while !stop_worker.load(Ordering::Relaxed) {
                match detector.detect() {
                    Ok(frame) => mailbox.publish(frame),
                    Err(e) => log::warn!("[detector] {e}"),
                }
            }
        })
        .map_err(|e| LightreeError::Detector(format!("thread spawn failed: {e}")))?;
    Ok(DetectorHandle {
        stop,
        worker: Some(worker),
    })
}
