//! Photo intake.
//!
//! Payloads are opaque bytes; decoding belongs to whoever implements
//! [`PhotoDecoder`]. Decoding runs on a worker thread and finished photos are
//! drained at the top of a tick, so a particle is only ever created from a
//! fully decoded image. A payload that fails to decode yields nothing.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::error::{LightreeError, Result};

/// Metadata of a decoded photo. Pixels stay with the presenter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhotoImage {
    pub id: u64,
    pub width: u32,
    pub height: u32,
}

impl PhotoImage {
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

pub trait PhotoDecoder: Send + 'static {
    fn decode(&mut self, id: u64, payload: &[u8]) -> Result<PhotoImage>;
}

struct PhotoJob {
    id: u64,
    payload: Vec<u8>,
}

pub struct PhotoIntake {
    jobs: Option<Sender<PhotoJob>>,
    done: Receiver<Result<PhotoImage>>,
    worker: Option<JoinHandle<()>>,
    next_id: u64,
}

impl PhotoIntake {
    /// Start a decode worker. Payloads are decoded in submission order.
    pub fn spawn<D: PhotoDecoder>(mut decoder: D) -> Result<Self> {
        let (job_tx, job_rx) = mpsc::channel::<PhotoJob>();
        let (done_tx, done_rx) = mpsc::channel();
        let worker = thread::Builder::new()
            .name("photo-decode".into())
            .spawn(move || {
                for job in job_rx {
                    let result = decoder.decode(job.id, &job.payload);
                    if done_tx.send(result).is_err() {
                        break;
                    }
                }
            })
            .map_err(|e| LightreeError::PhotoDecode {
                id: 0,
                reason: format!("worker spawn failed: {e}"),
            })?;
        Ok(Self {
            jobs: Some(job_tx),
            done: done_rx,
            worker: Some(worker),
            next_id: 0,
        })
    }

    /// Queue a payload and return the id its photo will carry.
    pub fn submit(&mut self, payload: Vec<u8>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let sent = self
            .jobs
            .as_ref()
            .is_some_and(|tx| tx.send(PhotoJob { id, payload }).is_ok());
        if !sent {
            log::warn!("[photo] decode worker gone, dropping payload {id}");
        }
        id
    }

    /// Photos decoded since the last call, in submission order. Failures are
    /// logged and skipped.
    pub fn drain_ready(&self) -> Vec<PhotoImage> {
        let mut ready = Vec::new();
        for result in self.done.try_iter() {
            match result {
                Ok(image) => ready.push(image),
                Err(e) => log::warn!("[photo] {e}"),
            }
        }
        ready
    }
}

impl Drop for PhotoIntake {
    fn drop(&mut self) {
        // Closing the job channel ends the worker loop.
        self.jobs.take();
        if let Some(worker) = self.worker.take() {
            _ = worker.join();
        }
    }
}
