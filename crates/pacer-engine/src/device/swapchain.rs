/// Presentation settings for the window's swapchain.
///
/// Only the knobs that change how often the host is offered a tick are exposed;
/// everything else uses wgpu defaults.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SwapchainConfig {
    /// Wait for vertical blank before presenting.
    ///
    /// With vsync off the host ticks as fast as the platform allows and the
    /// paced surface alone decides how many of those ticks draw.
    pub vsync: bool,

    /// Prefer an sRGB swapchain format when the surface offers one.
    pub prefer_srgb: bool,

    /// Frames the presentation engine may queue ahead of the display.
    pub max_frame_latency: u32,
}

impl SwapchainConfig {
    /// Upper bound applied to [`max_frame_latency`](Self::max_frame_latency).
    pub const MAX_FRAME_LATENCY: u32 = 3;

    /// Vsync off, other settings default.
    pub fn uncapped() -> Self {
        Self { vsync: false, ..Self::default() }
    }

    /// `AutoVsync` / `AutoNoVsync`, so wgpu picks whatever the backend supports.
    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }

    /// Latency hint clamped to `1..=MAX_FRAME_LATENCY`.
    pub fn frame_latency(&self) -> u32 {
        self.max_frame_latency.clamp(1, Self::MAX_FRAME_LATENCY)
    }
}

impl Default for SwapchainConfig {
    fn default() -> Self {
        Self {
            vsync: true,
            prefer_srgb: true,
            max_frame_latency: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vsync_selects_present_mode() {
        assert_eq!(SwapchainConfig::default().present_mode(), wgpu::PresentMode::AutoVsync);
        assert_eq!(SwapchainConfig::uncapped().present_mode(), wgpu::PresentMode::AutoNoVsync);
    }

    #[test]
    fn uncapped_keeps_other_defaults() {
        let c = SwapchainConfig::uncapped();
        assert!(c.prefer_srgb);
        assert_eq!(c.max_frame_latency, 2);
    }

    #[test]
    fn frame_latency_is_clamped() {
        let zero = SwapchainConfig { max_frame_latency: 0, ..Default::default() };
        let huge = SwapchainConfig { max_frame_latency: 16, ..Default::default() };
        assert_eq!(zero.frame_latency(), 1);
        assert_eq!(huge.frame_latency(), SwapchainConfig::MAX_FRAME_LATENCY);
    }
}
