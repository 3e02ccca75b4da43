use std::sync::Arc;
use std::sync::atomic::AtomicU32;
use std::time::{Duration, Instant};

use anyhow::Result;
use pacer_engine::host::{AppControl, HostApp, TickCtx};
use pacer_engine::paint::Color;
use pacer_engine::surface::{PacedSurface, PacingConfig, SurfaceStats};
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::animator::Animator;
use crate::painter::TracePainter;

const CLEAR: Color = Color::from_premul(0.02, 0.03, 0.04, 1.0);
const REPORT_EVERY: Duration = Duration::from_secs(1);

/// Demo application: one paced surface fed by a background animator.
pub struct DemoApp {
    surface: PacedSurface<TracePainter>,
    animator: Animator,
    reported: SurfaceStats,
    last_report: Instant,

    /// Ticks since the last report that found the window minimized.
    hidden_ticks: u64,
    /// Longest host tick gap since the last report, in seconds.
    longest_gap: f32,
}

impl DemoApp {
    pub fn new(pacing: PacingConfig) -> Result<Self> {
        // The painter reads the phase the animator advances.
        let phase = Arc::new(AtomicU32::new(0f32.to_bits()));
        let surface = PacedSurface::new(TracePainter::new(phase.clone()), pacing);
        let animator = Animator::spawn(surface.handle(), phase)?;

        Ok(Self {
            surface,
            animator,
            reported: SurfaceStats::default(),
            last_report: Instant::now(),
            hidden_ticks: 0,
            longest_gap: 0.0,
        })
    }

    fn on_key(&mut self, code: KeyCode) -> AppControl {
        match code {
            KeyCode::Escape => return AppControl::Exit,
            KeyCode::KeyL => {
                let limited = self.surface.handle().toggle_frame_rate_limit();
                log::info!("frame rate limit {}", if limited { "on" } else { "off" });
            }
            KeyCode::Space => {
                let paused = self.animator.toggle_pause();
                let state = if paused { "paused" } else { "resumed" };
                log::info!("animation {state} at phase {:.2} rad", self.animator.phase());
            }
            _ => {}
        }
        AppControl::Continue
    }

    fn report(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_report);
        if elapsed < REPORT_EVERY {
            return;
        }

        let stats = self.surface.stats();
        let delta = stats.since(&self.reported);
        log::info!(
            "{:.1} fps rendered / {} ticks (rate limited {}, idle {}, failed {}), longest gap {:.1} ms",
            delta.rendered as f64 / elapsed.as_secs_f64(),
            delta.ticks(),
            delta.skipped_rate_limited,
            delta.skipped_not_dirty,
            delta.failed,
            self.longest_gap * 1000.0,
        );
        if self.hidden_ticks > 0 {
            log::debug!("{} ticks while minimized", self.hidden_ticks);
        }

        self.reported = stats;
        self.last_report = now;
        self.hidden_ticks = 0;
        self.longest_gap = 0.0;
    }
}

impl HostApp for DemoApp {
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => self.on_key(*code),

            // New volume, new projection: redraw even when paused.
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                self.surface.mark_dirty();
                AppControl::Continue
            }

            _ => AppControl::Continue,
        }
    }

    fn on_tick(&mut self, ctx: &mut TickCtx<'_, '_>) -> AppControl {
        self.longest_gap = self.longest_gap.max(ctx.time.dt);
        if ctx.present(&mut self.surface, CLEAR).is_none() {
            self.hidden_ticks += 1;
        }
        self.report(ctx.time.now);
        AppControl::Continue
    }
}
