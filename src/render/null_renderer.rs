use crate::error::ChartResult;
use crate::render::{BarHoverHandler, HistogramFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_bar_count: usize,
    pub last_path_len: usize,
}

impl Renderer for NullRenderer {
    fn render(
        &mut self,
        frame: &HistogramFrame,
        _hover: &mut dyn BarHoverHandler,
    ) -> ChartResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_bar_count = frame.bars.len();
        self.last_path_len = frame.integral_path.len();
        Ok(())
    }
}
