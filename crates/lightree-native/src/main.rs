use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use lightree_core::{
    spawn_detector, FormationConfig, FormationState, FrameMailbox, GestureClassifier,
    PhotoIntake, Presenter,
};

mod presenter;
mod sim;

const FRAME_TIME: Duration = Duration::from_micros(16_667);
const RUN_FOR: Duration = Duration::from_secs(21);
const PHOTO_AT: Duration = Duration::from_secs(5);

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = FormationConfig::default();
    let mut state = FormationState::new(&config).context("building formation")?;

    let mailbox = FrameMailbox::new();
    // Without a detector the formation still runs, parked in TREE.
    let detector = match spawn_detector(sim::ScriptedDetector::new(), mailbox.clone()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::warn!("running without gestures: {e}");
            None
        }
    };
    let mut intake = PhotoIntake::spawn(sim::HeaderDecoder).context("starting photo decoder")?;

    let mut classifier = GestureClassifier::new();
    let mut presenter = presenter::LogPresenter::new();
    let start = Instant::now();
    let mut last = start;
    let mut photos_sent = false;

    while start.elapsed() < RUN_FOR {
        let now = Instant::now();
        let dt = now - last;
        last = now;

        if let Some(frame) = mailbox.take() {
            classifier.update(&frame);
        }
        for image in intake.drain_ready() {
            state.add_photo(image);
        }
        state.tick(classifier.previous(), dt.as_secs_f32());
        presenter.present(&state.frame());

        if !photos_sent && start.elapsed() >= PHOTO_AT {
            intake.submit(sim::sample_png(640, 480).context("encoding sample photo")?);
            intake.submit(b"definitely not a png".to_vec());
            intake.submit(sim::sample_png(1080, 1350).context("encoding sample photo")?);
            photos_sent = true;
        }

        thread::sleep(FRAME_TIME.saturating_sub(now.elapsed()));
    }

    if let Some(detector) = detector {
        detector.stop();
    }
    log::info!(
        "done: {} particles, final mode {}",
        state.particles().len(),
        state.mode()
    );
    Ok(())
}
