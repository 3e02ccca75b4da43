use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use pacer_engine::coords::ViewBounds;
use pacer_engine::error::RenderError;
use pacer_engine::paint::Color;
use pacer_engine::projection::ProjectionMatrix;
use pacer_engine::render::{FrameTarget, TraceRenderer};
use pacer_engine::surface::Painter;

use crate::lissajous::lissajous;

const SAMPLES: usize = 1024;

/// Phase lag of the afterimage, in radians.
const AFTERIMAGE_LAG: f32 = 0.15;

/// Draws the animated trace plus a faint afterimage slightly behind it.
pub struct TracePainter {
    trace: TraceRenderer,
    afterimage: TraceRenderer,
    phase: Arc<AtomicU32>,
    color: Color,
}

impl TracePainter {
    pub fn new(phase: Arc<AtomicU32>) -> Self {
        Self {
            trace: TraceRenderer::new(),
            afterimage: TraceRenderer::new(),
            phase,
            color: Color::from_rgba_u8(80, 255, 120, 255),
        }
    }
}

impl<'a, 'w> Painter<FrameTarget<'a, 'w>> for TracePainter {
    fn draw(
        &mut self,
        projection: &ProjectionMatrix,
        bounds: ViewBounds,
        target: &mut FrameTarget<'a, 'w>,
    ) -> Result<(), RenderError> {
        let phase = f32::from_bits(self.phase.load(Ordering::Relaxed));
        let behind = lissajous(bounds, phase - AFTERIMAGE_LAG, SAMPLES);
        let current = lissajous(bounds, phase, SAMPLES);

        let (trace, afterimage, color) = (&mut self.trace, &mut self.afterimage, self.color);
        target.draw_frame(projection, bounds, |ctx, rt| {
            afterimage.render(ctx, rt, &behind, color.faded(0.25));
            trace.render(ctx, rt, &current, color);
        })
    }
}
