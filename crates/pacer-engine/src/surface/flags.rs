use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
struct Flags {
    should_update: AtomicBool,
    limit_frame_rate: AtomicBool,
}

/// Shared handle to a surface's update flags.
///
/// Cloneable and `Send + Sync`: animation timers, resize handlers or any other
/// producer of content changes can hold one on its own thread. Each flag is read
/// and written atomically; nothing ties the two flags together.
#[derive(Debug, Clone, Default)]
pub struct SurfaceHandle {
    flags: Arc<Flags>,
}

impl SurfaceHandle {
    pub(crate) fn new(should_update: bool, limit_frame_rate: bool) -> Self {
        Self {
            flags: Arc::new(Flags {
                should_update: AtomicBool::new(should_update),
                limit_frame_rate: AtomicBool::new(limit_frame_rate),
            }),
        }
    }

    /// Requests a redraw on the next eligible tick.
    #[inline]
    pub fn mark_dirty(&self) {
        self.flags.should_update.store(true, Ordering::Release);
    }

    /// Enables or disables rate limiting.
    #[inline]
    pub fn set_frame_rate_limit(&self, enabled: bool) {
        self.flags.limit_frame_rate.store(enabled, Ordering::Release);
    }

    /// Flips rate limiting and returns the new state.
    #[inline]
    pub fn toggle_frame_rate_limit(&self) -> bool {
        !self.flags.limit_frame_rate.fetch_xor(true, Ordering::AcqRel)
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.flags.should_update.load(Ordering::Acquire)
    }

    #[inline]
    pub fn is_frame_rate_limited(&self) -> bool {
        self.flags.limit_frame_rate.load(Ordering::Acquire)
    }

    /// Clears the dirty flag, returning its previous value.
    #[inline]
    pub(crate) fn take_dirty(&self) -> bool {
        self.flags.should_update.swap(false, Ordering::AcqRel)
    }
}
