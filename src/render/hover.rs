use tracing::trace;

use crate::core::HistogramBar;
use crate::render::HistogramFrame;

/// Callbacks fired when the pointer enters or leaves a bar.
///
/// Tooltip presentation lives entirely on the implementor's side.
pub trait BarHoverHandler {
    fn on_hover_start(&mut self, bar: &HistogramBar);
    fn on_hover_end(&mut self, bar: &HistogramBar);
}

/// Hover handler that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHover;

impl BarHoverHandler for NoopHover {
    fn on_hover_start(&mut self, _bar: &HistogramBar) {}

    fn on_hover_end(&mut self, _bar: &HistogramBar) {}
}

/// Turns raw pointer positions into hover start/end transitions.
///
/// Backends feed it plot-space pointer positions; it remembers the bar that
/// is active and only notifies the handler when that changes. The active bar
/// is kept by value and matched by key, so a tracker may outlive the frame it
/// was first fed with: `on_hover_end` always receives the bar that started.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct HoverTracker {
    active: Option<HistogramBar>,
}

impl HoverTracker {
    #[must_use]
    pub fn active(&self) -> Option<&HistogramBar> {
        self.active.as_ref()
    }

    /// Handles a pointer move and returns the index of the bar now under the
    /// pointer.
    pub fn pointer_moved(
        &mut self,
        frame: &HistogramFrame,
        x: f64,
        y: f64,
        handler: &mut dyn BarHoverHandler,
    ) -> Option<usize> {
        let next = frame.bar_index_at(x, y);
        self.transition(next.map(|index| frame.bars[index]), handler);
        next
    }

    /// Handles the pointer leaving the surface.
    pub fn pointer_left(&mut self, handler: &mut dyn BarHoverHandler) {
        self.transition(None, handler);
    }

    fn transition(&mut self, next: Option<HistogramBar>, handler: &mut dyn BarHoverHandler) {
        let active_key = self.active.map(|bar| bar.upper_bound);
        if next.map(|bar| bar.upper_bound) == active_key {
            // Same bucket: keep the latest geometry.
            self.active = next;
            return;
        }

        if let Some(bar) = self.active.take() {
            trace!(upper_bound = bar.upper_bound, "bar hover end");
            handler.on_hover_end(&bar);
        }
        if let Some(bar) = next {
            trace!(upper_bound = bar.upper_bound, "bar hover start");
            handler.on_hover_start(&bar);
        }
        self.active = next;
    }
}
