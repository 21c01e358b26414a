use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("axis {axis} is out of bounds for an array of rank {ndim}")]
    AxisOutOfBounds { axis: usize, ndim: usize },

    #[error("structural mask needs an array of rank >= 2, got rank {ndim}")]
    MaskRank { ndim: usize },

    #[error("structural mask cell ({row}, {col}) is outside an array of shape {shape:?}")]
    MaskOutOfBounds {
        row: usize,
        col: usize,
        shape: Vec<usize>,
    },

    #[error("more than {n_samples} samples in lengths (total {total})")]
    LengthsExceedSamples { total: usize, n_samples: usize },

    #[error("invalid normalize options: {0}")]
    Config(#[from] serde_json::Error),
}
