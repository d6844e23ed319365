use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::{
    BucketSeries, LinearScale, Margin, PixelExactPositionMapper, RawBucketRecord, integral_series,
    project_histogram_bars, solve_band_layout,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{AxisTick, BarHoverHandler, HistogramFrame, PathPoint, Renderer};

use super::{
    CANVAS_HEIGHT, HistogramConfig, HistogramSnapshot, PLOT_WIDTH_SLACK_PX, X_AXIS_TICK_COUNT,
    Y_AXIS_TICK_COUNT,
};

/// Thin orchestration facade consumed by host applications.
///
/// `HistogramChart` sequences densification, band layout, pixel-exact
/// positioning and the integral overlay, then hands the resulting frame to
/// its renderer.
pub struct HistogramChart<R: Renderer> {
    renderer: R,
    config: HistogramConfig,
    series_metadata: IndexMap<String, String>,
}

impl<R: Renderer> HistogramChart<R> {
    pub fn new(renderer: R, config: HistogramConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            series_metadata: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> HistogramConfig {
        self.config
    }

    pub fn set_config(&mut self, config: HistogramConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn set_series_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.series_metadata.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn series_metadata(&self) -> &IndexMap<String, String> {
        &self.series_metadata
    }

    /// Builds the frame for `series` using the configured margin and width.
    pub fn build_frame(&self, series: &BucketSeries) -> ChartResult<Option<HistogramFrame>> {
        build_histogram_frame(series, self.config.margin, self.config.target_width())
    }

    /// Renders `series` using the configured margin and width.
    pub fn render(
        &mut self,
        series: &BucketSeries,
        hover: &mut dyn BarHoverHandler,
    ) -> ChartResult<()> {
        let margin = self.config.margin;
        let target_width = self.config.target_width();
        self.render_buckets(series, margin, target_width, hover)
    }

    /// Computes the frame for one render pass and passes it to the renderer.
    ///
    /// An empty series is a no-op: nothing reaches the renderer.
    pub fn render_buckets(
        &mut self,
        series: &BucketSeries,
        margin: Margin,
        target_width: f64,
        hover: &mut dyn BarHoverHandler,
    ) -> ChartResult<()> {
        let Some(frame) = build_histogram_frame(series, margin, target_width)? else {
            debug!("skip render of empty bucket series");
            return Ok(());
        };
        self.renderer.render(&frame, hover)
    }

    /// Coerces textual records, then renders them with the configured setup.
    pub fn render_records(
        &mut self,
        records: &[RawBucketRecord],
        hover: &mut dyn BarHoverHandler,
    ) -> ChartResult<()> {
        let series = BucketSeries::from_records(records)?;
        self.render(&series, hover)
    }

    /// Serializable snapshot of the frame `series` would render.
    pub fn snapshot(&self, series: &BucketSeries) -> ChartResult<Option<HistogramSnapshot>> {
        Ok(self.build_frame(series)?.map(|frame| HistogramSnapshot {
            frame,
            metadata: self.series_metadata.clone(),
        }))
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

/// Computes everything one histogram render pass needs.
///
/// Returns `Ok(None)` for an empty series. The plot width is the solved
/// content length plus [`PLOT_WIDTH_SLACK_PX`]; the plot height is
/// [`CANVAS_HEIGHT`] minus the vertical margins. When every frequency is zero
/// the frame carries no integral overlay.
pub fn build_histogram_frame(
    series: &BucketSeries,
    margin: Margin,
    target_width: f64,
) -> ChartResult<Option<HistogramFrame>> {
    margin.validate()?;
    let buckets = series.densify()?;
    let Some(key_domain) = buckets.key_domain() else {
        return Ok(None);
    };

    let layout = solve_band_layout(target_width, margin, buckets.len())?;
    let width = layout.len + PLOT_WIDTH_SLACK_PX;
    let height = CANVAS_HEIGHT - margin.vertical();
    if height <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "vertical margins must leave room inside the {CANVAS_HEIGHT}px canvas"
        )));
    }

    let mapper = PixelExactPositionMapper::new(key_domain, width, layout)?;
    let y_max = buckets.max_freq().unwrap_or(0.0);
    let y_scale = LinearScale::new((0.0, y_max), (height, 0.0))?;
    let bars = project_histogram_bars(&buckets, mapper, y_scale, height)?;

    let integral = match integral_series(&buckets, y_max) {
        Ok(points) => Some(points),
        Err(ChartError::DegenerateSeries { total }) => {
            warn!(total, "skipping integral overlay for all-zero series");
            None
        }
        Err(err) => return Err(err),
    };
    let integral_path = integral
        .iter()
        .flatten()
        .map(|point| {
            PathPoint::new(
                mapper.position(point.upper_bound as f64),
                y_scale.map(point.freq),
            )
        })
        .collect();

    let x_ticks = mapper
        .scale()
        .ticks(X_AXIS_TICK_COUNT)
        .into_iter()
        .map(|value| AxisTick::new(value, mapper.position(value)))
        .collect();
    let y_ticks = y_scale
        .ticks(Y_AXIS_TICK_COUNT)
        .into_iter()
        .map(|value| AxisTick::new(value, y_scale.map(value)))
        .collect();

    debug!(
        bucket_count = buckets.len(),
        width,
        height,
        band_size = layout.band_size,
        "built histogram frame"
    );

    Ok(Some(HistogramFrame {
        width,
        height,
        margin,
        x_domain: (key_domain.0 as f64, key_domain.1 as f64),
        y_domain: (0.0, y_max),
        layout,
        buckets,
        integral,
        bars,
        integral_path,
        x_ticks,
        y_ticks,
    }))
}
