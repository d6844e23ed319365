mod frame;
mod hover;
mod null_renderer;
mod primitives;

pub use frame::HistogramFrame;
pub use hover::{BarHoverHandler, HoverTracker, NoopHover};
pub use null_renderer::NullRenderer;
pub use primitives::{AxisTick, PathPoint};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `HistogramFrame` and
/// the hover callbacks to wire onto each bar, so drawing code stays isolated
/// from layout math.
pub trait Renderer {
    fn render(&mut self, frame: &HistogramFrame, hover: &mut dyn BarHoverHandler)
    -> ChartResult<()>;
}
