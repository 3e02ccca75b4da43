use super::RenderOutcome;

/// Per-outcome tick counters.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SurfaceStats {
    pub rendered: u64,
    pub skipped_not_dirty: u64,
    pub skipped_rate_limited: u64,
    pub failed: u64,
}

impl SurfaceStats {
    pub(crate) fn record(&mut self, outcome: &RenderOutcome) {
        let slot = match outcome {
            RenderOutcome::Rendered => &mut self.rendered,
            RenderOutcome::SkippedNotDirty => &mut self.skipped_not_dirty,
            RenderOutcome::SkippedRateLimited => &mut self.skipped_rate_limited,
            RenderOutcome::Failed(_) => &mut self.failed,
        };
        *slot = slot.wrapping_add(1);
    }

    /// Total ticks observed.
    pub fn ticks(&self) -> u64 {
        self.rendered + self.skipped_not_dirty + self.skipped_rate_limited + self.failed
    }

    /// Counters accumulated since an earlier snapshot.
    pub fn since(&self, earlier: &SurfaceStats) -> SurfaceStats {
        SurfaceStats {
            rendered: self.rendered.saturating_sub(earlier.rendered),
            skipped_not_dirty: self.skipped_not_dirty.saturating_sub(earlier.skipped_not_dirty),
            skipped_rate_limited: self
                .skipped_rate_limited
                .saturating_sub(earlier.skipped_rate_limited),
            failed: self.failed.saturating_sub(earlier.failed),
        }
    }
}
