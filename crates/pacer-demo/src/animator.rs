use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Context, Result};
use pacer_engine::surface::SurfaceHandle;

/// Animation steps per second; deliberately above the surface's cap.
const STEP_HZ: u32 = 120;

/// Phase advance per second, in radians.
const PHASE_SPEED: f32 = 0.8;

/// Background animation driver.
///
/// Advances a shared phase and flags the surface dirty on every step, from its
/// own thread. Paused animators neither advance nor mark dirty, so the surface
/// goes idle.
pub struct Animator {
    phase: Arc<AtomicU32>,
    paused: Arc<AtomicBool>,
    stop: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl Animator {
    /// Starts animating `phase` (an `f32` stored as bits) for `surface`.
    pub fn spawn(surface: SurfaceHandle, phase: Arc<AtomicU32>) -> Result<Self> {
        let paused = Arc::new(AtomicBool::new(false));
        let stop = Arc::new(AtomicBool::new(false));

        let worker = {
            let (phase, paused, stop) = (phase.clone(), paused.clone(), stop.clone());
            let step = Duration::from_secs(1) / STEP_HZ;
            let delta = PHASE_SPEED / STEP_HZ as f32;

            thread::Builder::new()
                .name("pacer-animator".into())
                .spawn(move || {
                    while !stop.load(Ordering::Acquire) {
                        if !paused.load(Ordering::Acquire) {
                            let next = f32::from_bits(phase.load(Ordering::Relaxed)) + delta;
                            phase.store((next % std::f32::consts::TAU).to_bits(), Ordering::Relaxed);
                            surface.mark_dirty();
                        }
                        thread::sleep(step);
                    }
                    log::debug!("animator stopped");
                })
                .context("failed to spawn animator thread")?
        };

        Ok(Self {
            phase,
            paused,
            stop,
            worker: Some(worker),
        })
    }

    /// Current phase in radians.
    pub fn phase(&self) -> f32 {
        f32::from_bits(self.phase.load(Ordering::Relaxed))
    }

    /// Flips the paused state and returns it.
    pub fn toggle_pause(&self) -> bool {
        !self.paused.fetch_xor(true, Ordering::AcqRel)
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::warn!("animator thread panicked");
            }
        }
    }
}
