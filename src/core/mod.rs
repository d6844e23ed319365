pub mod band_layout;
pub mod bucket_series;
pub mod histogram_series;
pub mod integral;
pub mod position_mapper;
pub mod primitives;
pub mod scale;
pub mod types;

pub use band_layout::{
    MIN_BAND_WIDTH, MIN_PADDING_WIDTH, OUTER_BAND_PADDING, calc_len, solve_band_layout,
};
pub use bucket_series::{BucketSeries, MAX_DENSE_BUCKETS};
pub use histogram_series::{HistogramBar, project_histogram_bars};
pub use integral::integral_series;
pub use position_mapper::PixelExactPositionMapper;
pub use primitives::{RawBucketRecord, coerce_integer, coerce_number};
pub use scale::{LinearScale, TickValues};
pub use types::{Bucket, IntegralPoint, LayoutResult, Margin};
