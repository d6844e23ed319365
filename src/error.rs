use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid record field `{field}`: {value:?} is not a number")]
    InvalidRecord { field: &'static str, value: String },

    #[error(
        "bucket keys must be strictly ascending: index {index} has key {current} after {previous}"
    )]
    NonMonotonicInput {
        index: usize,
        previous: i64,
        current: i64,
    },

    #[error("dense bucket range spans {span} keys, limit is {limit}")]
    DenseRangeTooLarge { span: u64, limit: usize },

    #[error("band layout requires at least one bucket")]
    ZeroBucketCount,

    #[error("integral normalization is undefined for a series summing to {total}")]
    DegenerateSeries { total: f64 },
}
