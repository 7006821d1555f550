use thiserror::Error;

/// Errors surfaced by the sampling pipeline.
///
/// Both variants originate at the evaluator boundary; normalization is total
/// and never fails, and degenerate domains produce short sequences rather
/// than errors (see [`crate::range::step_range`]).
#[derive(Debug, Error)]
pub enum PlError {
    #[error("cannot bind variable '{name}' to {value}: {message}")]
    Bind {
        name: String,
        value: f64,
        message: String,
    },

    #[error("cannot evaluate '{expression}': {message}")]
    Evaluation {
        expression: String,
        message: String,
    },
}

pub type PlResult<T> = Result<T, PlError>;
