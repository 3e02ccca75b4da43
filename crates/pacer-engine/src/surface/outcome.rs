use crate::error::RenderError;

/// Result of one host tick.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    /// The painter ran and the frame was drawn.
    Rendered,
    /// Content was not stale; nothing happened.
    SkippedNotDirty,
    /// Content was stale but the previous render is too recent.
    SkippedRateLimited,
    /// The render attempt failed; the surface stays dirty and retries next tick.
    Failed(RenderError),
}
