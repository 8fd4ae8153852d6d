/// Errors surfaced by the miner.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AprioriError {
    #[error("invalid minimum support {min_support}: expected a value in [0, 1]")]
    InvalidThreshold { min_support: f64 },

    #[error("cannot shape level of {actual} items into {expected}")]
    ShapeMismatch { expected: String, actual: usize },
}

pub type AprioriResult<T> = Result<T, AprioriError>;
