use crate::error::RenderError;

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); the host should shut down.
    Fatal,
}

impl SurfaceErrorAction {
    #[inline]
    pub fn is_fatal(self) -> bool {
        self == SurfaceErrorAction::Fatal
    }
}

/// Describes a failed frame acquisition as a surface-level render error.
pub(crate) fn context_unavailable(err: &wgpu::SurfaceError, action: SurfaceErrorAction) -> RenderError {
    RenderError::context_unavailable(format!("surface frame acquisition failed ({err}); {action:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fatal_is_fatal() {
        assert!(SurfaceErrorAction::Fatal.is_fatal());
        assert!(!SurfaceErrorAction::SkipFrame.is_fatal());
        assert!(!SurfaceErrorAction::Reconfigured.is_fatal());
    }

    #[test]
    fn acquisition_failure_is_context_unavailable() {
        let e = context_unavailable(&wgpu::SurfaceError::Timeout, SurfaceErrorAction::SkipFrame);
        assert!(matches!(e, RenderError::RenderContextUnavailable { .. }));
        assert!(e.to_string().contains("SkipFrame"));
    }
}
