mod chart;
mod config;
mod snapshot;

pub use chart::{HistogramChart, build_histogram_frame};
pub use config::{
    CANVAS_HEIGHT, DEFAULT_TARGET_WIDTH, HistogramConfig, PLOT_WIDTH_SLACK_PX, X_AXIS_TICK_COUNT,
    Y_AXIS_TICK_COUNT,
};
pub use snapshot::{
    HISTOGRAM_SNAPSHOT_JSON_SCHEMA_V1, HistogramSnapshot, HistogramSnapshotJsonContractV1,
};
