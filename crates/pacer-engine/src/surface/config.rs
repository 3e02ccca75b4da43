use std::time::Duration;

/// Frame pacing policy for a [`PacedSurface`](super::PacedSurface).
#[derive(Debug, Clone, PartialEq)]
pub struct PacingConfig {
    /// Minimum time between two renders while rate limiting is enabled.
    pub target_interval: Duration,

    /// Initial value of the rate-limit flag.
    pub limit_frame_rate: bool,

    /// Initial value of the dirty flag.
    ///
    /// A freshly attached surface usually has nothing on screen yet, so this
    /// defaults to `true`.
    pub start_dirty: bool,
}

impl PacingConfig {
    /// Default cap used by the limiter: ~30 frames per second.
    pub const DEFAULT_FPS: f32 = 30.0;

    /// Rate-limited config targeting `fps` frames per second.
    ///
    /// Non-positive or non-finite rates fall back to [`Self::DEFAULT_FPS`].
    pub fn from_fps(fps: f32) -> Self {
        Self {
            target_interval: interval_for_fps(fps),
            ..Self::default()
        }
    }

    /// Same policy with rate limiting switched off initially.
    pub fn unlimited(mut self) -> Self {
        self.limit_frame_rate = false;
        self
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            target_interval: interval_for_fps(Self::DEFAULT_FPS),
            limit_frame_rate: true,
            start_dirty: true,
        }
    }
}

fn interval_for_fps(fps: f32) -> Duration {
    let fps = if fps.is_finite() && fps > 0.0 {
        fps
    } else {
        log::warn!("invalid frame rate {fps}; using {}", PacingConfig::DEFAULT_FPS);
        PacingConfig::DEFAULT_FPS
    };
    Duration::from_secs_f64(1.0 / f64::from(fps))
}
