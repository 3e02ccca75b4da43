use std::time::{Duration, Instant};

use crate::coords::ViewBounds;
use crate::error::{ProjectionError, RenderError};
use crate::projection::ProjectionMatrix;
use crate::time::{Clock, SystemClock};

use super::{PacingConfig, RenderOutcome, SurfaceHandle, SurfaceStats};

/// Draw logic injected into a [`PacedSurface`].
///
/// `T` is the render target handle the host passes along with each tick (a GPU
/// frame, a CPU canvas, a recorder in tests). Closures of the matching shape
/// implement this trait directly.
pub trait Painter<T: ?Sized> {
    fn draw(
        &mut self,
        projection: &ProjectionMatrix,
        bounds: ViewBounds,
        target: &mut T,
    ) -> Result<(), RenderError>;
}

impl<T, F> Painter<T> for F
where
    T: ?Sized,
    F: FnMut(&ProjectionMatrix, ViewBounds, &mut T) -> Result<(), RenderError>,
{
    #[inline]
    fn draw(
        &mut self,
        projection: &ProjectionMatrix,
        bounds: ViewBounds,
        target: &mut T,
    ) -> Result<(), RenderError> {
        self(projection, bounds, target)
    }
}

/// Drawing surface gated by a dirty flag and an optional frame-rate cap.
///
/// The host calls [`on_tick`](Self::on_tick) once per display refresh
/// opportunity, from a single thread. Content producers flag changes through
/// [`SurfaceHandle`]s from any thread.
///
/// The projection for the tick's bounds is cached and rebuilt only when the
/// bounds change.
pub struct PacedSurface<P, C: Clock = SystemClock> {
    painter: P,
    clock: C,
    handle: SurfaceHandle,
    target_interval: Duration,

    /// Decision timestamp of the last successful render.
    last_render: Option<Instant>,
    projection: Option<(ViewBounds, ProjectionMatrix)>,
    stats: SurfaceStats,
}

impl<P> PacedSurface<P, SystemClock> {
    /// Creates a surface paced by the wall clock.
    pub fn new(painter: P, config: PacingConfig) -> Self {
        Self::with_clock(painter, config, SystemClock)
    }
}

impl<P, C: Clock> PacedSurface<P, C> {
    pub fn with_clock(painter: P, config: PacingConfig, clock: C) -> Self {
        Self {
            painter,
            clock,
            handle: SurfaceHandle::new(config.start_dirty, config.limit_frame_rate),
            target_interval: config.target_interval,
            last_render: None,
            projection: None,
            stats: SurfaceStats::default(),
        }
    }

    /// Returns a shareable handle to this surface's flags.
    pub fn handle(&self) -> SurfaceHandle {
        self.handle.clone()
    }

    #[inline]
    pub fn mark_dirty(&self) {
        self.handle.mark_dirty();
    }

    #[inline]
    pub fn set_frame_rate_limit(&self, enabled: bool) {
        self.handle.set_frame_rate_limit(enabled);
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.handle.is_dirty()
    }

    #[inline]
    pub fn is_frame_rate_limited(&self) -> bool {
        self.handle.is_frame_rate_limited()
    }

    pub fn target_interval(&self) -> Duration {
        self.target_interval
    }

    pub fn last_render(&self) -> Option<Instant> {
        self.last_render
    }

    pub fn stats(&self) -> SurfaceStats {
        self.stats
    }

    /// Runs one render decision.
    ///
    /// - not dirty: [`RenderOutcome::SkippedNotDirty`], nothing else happens
    /// - dirty, limited, and the last render is younger than the target
    ///   interval: [`RenderOutcome::SkippedRateLimited`], still dirty
    /// - otherwise the painter runs; on success the dirty flag is cleared and
    ///   the render timestamp advances
    ///
    /// A failed draw (or degenerate `bounds`) leaves both the flag and the
    /// timestamp as they were, so the next tick retries.
    pub fn on_tick<T>(&mut self, bounds: ViewBounds, target: &mut T) -> RenderOutcome
    where
        T: ?Sized,
        P: Painter<T>,
    {
        let outcome = self.decide_and_draw(bounds, target);
        self.stats.record(&outcome);

        match &outcome {
            RenderOutcome::Failed(e) => log::warn!("surface render failed: {e}"),
            other => log::trace!("surface tick: {other:?}"),
        }

        outcome
    }

    fn decide_and_draw<T>(&mut self, bounds: ViewBounds, target: &mut T) -> RenderOutcome
    where
        T: ?Sized,
        P: Painter<T>,
    {
        if !self.handle.is_dirty() {
            return RenderOutcome::SkippedNotDirty;
        }

        let now = self.clock.now();

        if self.handle.is_frame_rate_limited() {
            if let Some(last) = self.last_render {
                if now.saturating_duration_since(last) < self.target_interval {
                    return RenderOutcome::SkippedRateLimited;
                }
            }
        }

        let projection = match self.projection_for(bounds) {
            Ok(p) => p,
            Err(e) => return RenderOutcome::Failed(e.into()),
        };

        // Cleared before the draw: a `mark_dirty` landing mid-draw stays set.
        self.handle.take_dirty();

        match self.painter.draw(&projection, bounds, target) {
            Ok(()) => {
                self.last_render = Some(now);
                RenderOutcome::Rendered
            }
            Err(e) => {
                self.handle.mark_dirty();
                RenderOutcome::Failed(e)
            }
        }
    }

    fn projection_for(&mut self, bounds: ViewBounds) -> Result<ProjectionMatrix, ProjectionError> {
        if let Some((cached_bounds, m)) = self.projection {
            if cached_bounds == bounds {
                return Ok(m);
            }
        }

        let m = ProjectionMatrix::ortho(bounds)?;
        self.projection = Some((bounds, m));
        Ok(m)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::coords::Viewport;
    use crate::time::ManualClock;

    /// Records the projection of every draw.
    type Recorder = Vec<ProjectionMatrix>;

    fn record(p: &ProjectionMatrix, _: ViewBounds, out: &mut Recorder) -> Result<(), RenderError> {
        out.push(*p);
        Ok(())
    }

    fn bounds() -> ViewBounds {
        ViewBounds::from_viewport(Viewport::new(320.0, 240.0))
    }

    type RecordFn = fn(&ProjectionMatrix, ViewBounds, &mut Recorder) -> Result<(), RenderError>;

    /// Dirty, rate-limited surface at the default 30 fps.
    fn limited(clock: &ManualClock) -> PacedSurface<RecordFn, ManualClock> {
        PacedSurface::with_clock(record as RecordFn, PacingConfig::default(), clock.clone())
    }

    // ── dirty flag ────────────────────────────────────────────────────────

    #[test]
    fn clean_surface_never_draws() {
        let clock = ManualClock::new();
        let config = PacingConfig { start_dirty: false, ..PacingConfig::default() };
        let mut surface = PacedSurface::with_clock(record, config, clock.clone());
        let mut out = Recorder::new();

        for _ in 0..100 {
            assert_eq!(surface.on_tick(bounds(), &mut out), RenderOutcome::SkippedNotDirty);
            clock.advance(Duration::from_millis(16));
        }

        assert!(out.is_empty());
        assert_eq!(surface.last_render(), None);
        assert_eq!(surface.stats().skipped_not_dirty, 100);
    }

    #[test]
    fn render_clears_dirty_until_marked_again() {
        let clock = ManualClock::new();
        let mut surface = limited(&clock);
        surface.set_frame_rate_limit(false);
        let mut out = Recorder::new();

        assert_eq!(surface.on_tick(bounds(), &mut out), RenderOutcome::Rendered);
        assert!(!surface.is_dirty());
        assert_eq!(surface.on_tick(bounds(), &mut out), RenderOutcome::SkippedNotDirty);

        surface.mark_dirty();
        assert_eq!(surface.on_tick(bounds(), &mut out), RenderOutcome::Rendered);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn unlimited_renders_every_dirty_tick() {
        let clock = ManualClock::new();
        let mut surface = PacedSurface::with_clock(
            record,
            PacingConfig::default().unlimited(),
            clock.clone(),
        );
        let mut out = Recorder::new();

        for _ in 0..5 {
            surface.mark_dirty();
            assert_eq!(surface.on_tick(bounds(), &mut out), RenderOutcome::Rendered);
            clock.advance(Duration::from_millis(1));
        }
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn painter_receives_projection_for_bounds() {
        let clock = ManualClock::new();
        let mut surface = limited(&clock);
        let mut out = Recorder::new();

        surface.on_tick(bounds(), &mut out);
        assert_eq!(out, vec![ProjectionMatrix::ortho(bounds()).unwrap()]);
    }

    // ── rate limiting ─────────────────────────────────────────────────────

    #[test]
    fn first_render_is_never_rate_limited() {
        let clock = ManualClock::new();
        let mut surface = limited(&clock);
        let mut out = Recorder::new();
        assert_eq!(surface.on_tick(bounds(), &mut out), RenderOutcome::Rendered);
    }

    #[test]
    fn two_ticks_inside_interval_render_once() {
        let clock = ManualClock::new();
        let mut surface = limited(&clock);
        let mut out = Recorder::new();

        assert_eq!(surface.on_tick(bounds(), &mut out), RenderOutcome::Rendered);
        surface.mark_dirty();
        clock.advance(Duration::from_millis(10));
        assert_eq!(surface.on_tick(bounds(), &mut out), RenderOutcome::SkippedRateLimited);

        assert_eq!(out.len(), 1);
        // Rate-limited ticks keep the content stale.
        assert!(surface.is_dirty());
    }

    #[test]
    fn rate_limited_frame_renders_once_interval_elapses() {
        let clock = ManualClock::new();
        let mut surface = limited(&clock);
        let mut out = Recorder::new();
        let t0 = clock.now();

        surface.on_tick(bounds(), &mut out);
        surface.mark_dirty();

        clock.advance(Duration::from_millis(20));
        assert_eq!(surface.on_tick(bounds(), &mut out), RenderOutcome::SkippedRateLimited);
        clock.advance(Duration::from_millis(20));
        assert_eq!(surface.on_tick(bounds(), &mut out), RenderOutcome::Rendered);

        assert_eq!(surface.last_render(), Some(t0 + Duration::from_millis(40)));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn exact_interval_is_not_limited() {
        let clock = ManualClock::new();
        let config = PacingConfig {
            target_interval: Duration::from_millis(50),
            ..PacingConfig::default()
        };
        let mut surface = PacedSurface::with_clock(record, config, clock.clone());
        let mut out = Recorder::new();

        surface.on_tick(bounds(), &mut out);
        surface.mark_dirty();
        clock.advance(Duration::from_millis(50));
        assert_eq!(surface.on_tick(bounds(), &mut out), RenderOutcome::Rendered);
    }

    #[test]
    fn disabling_limit_lets_next_tick_render() {
        let clock = ManualClock::new();
        let mut surface = limited(&clock);
        let mut out = Recorder::new();

        surface.on_tick(bounds(), &mut out);
        surface.mark_dirty();
        assert_eq!(surface.on_tick(bounds(), &mut out), RenderOutcome::SkippedRateLimited);

        surface.set_frame_rate_limit(false);
        assert_eq!(surface.on_tick(bounds(), &mut out), RenderOutcome::Rendered);
    }

    #[test]
    fn fast_ticks_are_capped_to_target_rate() {
        let clock = ManualClock::new();
        let mut surface = limited(&clock);
        let mut out = Recorder::new();

        // One simulated second of 240 Hz ticks, always dirty.
        for _ in 0..240 {
            surface.mark_dirty();
            surface.on_tick(bounds(), &mut out);
            clock.advance(Duration::from_micros(4_167));
        }

        let rendered = surface.stats().rendered;
        assert!((29..=31).contains(&rendered), "rendered {rendered} frames");
        assert_eq!(surface.stats().ticks(), 240);
    }

    // ── failures ──────────────────────────────────────────────────────────

    #[test]
    fn failed_draw_keeps_dirty_and_timestamp() {
        let clock = ManualClock::new();
        let mut fail_next = true;
        let mut attempts = 0;
        let mut surface = PacedSurface::with_clock(
            |_: &ProjectionMatrix, _: ViewBounds, _: &mut ()| {
                attempts += 1;
                if fail_next {
                    fail_next = false;
                    Err(RenderError::context_unavailable("no drawable"))
                } else {
                    Ok(())
                }
            },
            PacingConfig::default(),
            clock.clone(),
        );

        let outcome = surface.on_tick(bounds(), &mut ());
        assert_eq!(
            outcome,
            RenderOutcome::Failed(RenderError::context_unavailable("no drawable"))
        );
        assert!(surface.is_dirty());
        assert_eq!(surface.last_render(), None);

        // The retry is not rate limited by the failed attempt.
        assert_eq!(surface.on_tick(bounds(), &mut ()), RenderOutcome::Rendered);
        assert!(!surface.is_dirty());

        let stats = surface.stats();
        assert_eq!((stats.failed, stats.rendered), (1, 1));
        drop(surface);
        assert_eq!(attempts, 2);
    }

    #[test]
    fn degenerate_bounds_fail_without_drawing() {
        let clock = ManualClock::new();
        let mut surface = limited(&clock);
        let mut out = Recorder::new();
        let empty = ViewBounds::from_viewport(Viewport::new(0.0, 0.0));

        let outcome = surface.on_tick(empty, &mut out);
        assert!(matches!(
            outcome,
            RenderOutcome::Failed(RenderError::InvalidVolume(
                ProjectionError::DegenerateVolume { .. }
            ))
        ));
        assert!(out.is_empty());
        assert!(surface.is_dirty());

        assert_eq!(surface.on_tick(bounds(), &mut out), RenderOutcome::Rendered);
    }

    #[test]
    fn failure_after_render_keeps_previous_timestamp() {
        let clock = ManualClock::new();
        let mut fail = false;
        let mut surface = PacedSurface::with_clock(
            |_: &ProjectionMatrix, _: ViewBounds, fail: &mut bool| {
                if *fail {
                    Err(RenderError::context_unavailable("surface lost"))
                } else {
                    Ok(())
                }
            },
            PacingConfig::default(),
            clock.clone(),
        );
        let interval = surface.target_interval();

        assert_eq!(surface.on_tick(bounds(), &mut fail), RenderOutcome::Rendered);
        let first = surface.last_render();
        assert!(first.is_some());

        clock.advance(interval / 2);
        surface.mark_dirty();
        clock.advance(interval);

        fail = true;
        assert!(matches!(surface.on_tick(bounds(), &mut fail), RenderOutcome::Failed(_)));
        assert_eq!(surface.last_render(), first);
        assert!(surface.is_dirty());

        // Pacing is still measured from the first render, which is long enough ago.
        fail = false;
        assert_eq!(surface.on_tick(bounds(), &mut fail), RenderOutcome::Rendered);
        assert_eq!(surface.last_render(), Some(clock.now()));

        // A fresh render restarts the interval.
        surface.mark_dirty();
        clock.advance(interval / 2);
        assert_eq!(surface.on_tick(bounds(), &mut fail), RenderOutcome::SkippedRateLimited);
    }

    #[test]
    fn rate_limit_is_checked_before_draw_attempt() {
        let clock = ManualClock::new();
        let mut surface = PacedSurface::with_clock(
            |_: &ProjectionMatrix, _: ViewBounds, fail: &mut bool| {
                if *fail { Err(RenderError::context_unavailable("busy")) } else { Ok(()) }
            },
            PacingConfig::default(),
            clock.clone(),
        );
        let interval = surface.target_interval();
        let mut fail = false;

        surface.on_tick(bounds(), &mut fail);
        let first = surface.last_render();

        fail = true;
        surface.mark_dirty();
        clock.advance(interval / 3);
        assert_eq!(surface.on_tick(bounds(), &mut fail), RenderOutcome::SkippedRateLimited);

        clock.advance(interval);
        assert!(matches!(surface.on_tick(bounds(), &mut fail), RenderOutcome::Failed(_)));
        assert_eq!(surface.last_render(), first);
    }

    // ── projection cache ──────────────────────────────────────────────────

    #[test]
    fn projection_follows_bounds_changes() {
        let clock = ManualClock::new();
        let mut surface = limited(&clock);
        surface.set_frame_rate_limit(false);
        let mut out = Recorder::new();
        let resized = ViewBounds::from_viewport(Viewport::new(1024.0, 768.0));

        surface.on_tick(bounds(), &mut out);
        surface.mark_dirty();
        surface.on_tick(bounds(), &mut out);
        surface.mark_dirty();
        surface.on_tick(resized, &mut out);

        assert_eq!(out[0], out[1]);
        assert_eq!(out[2], ProjectionMatrix::ortho(resized).unwrap());
        assert_ne!(out[1], out[2]);
    }

    #[test]
    fn degenerate_tick_keeps_cached_projection() {
        let clock = ManualClock::new();
        let mut surface = limited(&clock);
        surface.set_frame_rate_limit(false);
        let mut out = Recorder::new();
        let flat = ViewBounds::new(0.0, 10.0, 0.0, 10.0, 3.0, 3.0);

        surface.on_tick(bounds(), &mut out);
        surface.mark_dirty();
        assert!(matches!(surface.on_tick(flat, &mut out), RenderOutcome::Failed(_)));

        // Same bounds as before the failure: served from the cache.
        assert_eq!(surface.on_tick(bounds(), &mut out), RenderOutcome::Rendered);
        assert_eq!(out, vec![ProjectionMatrix::ortho(bounds()).unwrap(); 2]);

        // And the failed bounds never replaced it.
        surface.mark_dirty();
        assert!(matches!(surface.on_tick(flat, &mut out), RenderOutcome::Failed(_)));
        assert_eq!(out.len(), 2);
    }

    // ── concurrency ───────────────────────────────────────────────────────

    #[test]
    fn mark_dirty_during_draw_survives_render() {
        let clock = ManualClock::new();
        let config = PacingConfig::default().unlimited();
        let mut surface = PacedSurface::with_clock(
            |_: &ProjectionMatrix, _: ViewBounds, h: &mut SurfaceHandle| {
                // A producer flags new content while this frame is drawing.
                h.mark_dirty();
                Ok(())
            },
            config,
            clock,
        );
        let mut handle = surface.handle();

        assert_eq!(surface.on_tick(bounds(), &mut handle), RenderOutcome::Rendered);
        assert!(surface.is_dirty());
        assert_eq!(surface.on_tick(bounds(), &mut handle), RenderOutcome::Rendered);
    }

    #[test]
    fn flags_set_from_other_threads() {
        let clock = ManualClock::new();
        let config = PacingConfig { start_dirty: false, limit_frame_rate: false, ..Default::default() };
        let mut surface = PacedSurface::with_clock(record, config, clock);
        let mut out = Recorder::new();

        let workers: Vec<_> = (0..4)
            .map(|i| {
                let h = surface.handle();
                thread::spawn(move || {
                    h.mark_dirty();
                    if i == 0 {
                        h.set_frame_rate_limit(true);
                    }
                })
            })
            .collect();
        for w in workers {
            w.join().unwrap();
        }

        assert!(surface.is_frame_rate_limited());
        assert_eq!(surface.on_tick(bounds(), &mut out), RenderOutcome::Rendered);
        assert_eq!(surface.on_tick(bounds(), &mut out), RenderOutcome::SkippedNotDirty);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn handle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SurfaceHandle>();
    }
}
