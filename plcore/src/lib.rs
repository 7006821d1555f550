//! Plcore: the expression-to-sample pipeline behind plotline.
//!
//! Given a single-variable expression such as `"y=x^2-4"`, the crate
//! rewrites it into evaluator-accepted syntax, walks a numeric domain with a
//! drift-free stepper, and evaluates the expression once per domain value to
//! produce an ordered sequence of `(x, y)` samples ready for charting.
//!
//! Pipeline shape
//!  - [`normalize`](normalize::normalize) turns informal notation (`^` for
//!    powers) into the engine's native syntax (`**`).
//!  - [`step_range`](range::step_range) yields the domain values, computing
//!    each as `start + i * step` against an integer counter so long runs do
//!    not accumulate rounding error.
//!  - [`Sampler`](sampler::Sampler) drives an [`Evaluator`](eval::Evaluator)
//!    across the domain and collects the samples.
//!
//! Evaluation is strictly sequential: the evaluator's variable binding is
//! private mutable state, so each concurrent sampling operation must own its
//! own `Sampler`.
//!
//! Example
//! ```
//! use plcore::prelude::*;
//!
//! let mut sampler = Sampler::new("y=x^2-4");
//! let points = sampler.sample_over(-2.0, 2.0, SampleOptions::default()).unwrap();
//! assert_eq!(points, vec![(-2.0, 0.0), (-1.0, -3.0), (0.0, -4.0), (1.0, -3.0), (2.0, 0.0)]);
//! ```

/// Error enum and result alias shared across the crate.
pub mod error;
/// Evaluator capability trait and the rhai-backed implementation.
pub mod eval;
/// Notation normalization from informal to evaluator-accepted syntax.
pub mod normalize;
/// Drift-free stepping over a floating-point domain.
pub mod range;
/// Orchestration: density policies and the sampling loop.
pub mod sampler;

/// One sample: the domain value and the evaluated result.
pub type Point = (f64, f64);

pub mod prelude {
    //! Convenient re-exports for end users.
    pub use crate::Point;
    pub use crate::error::{PlError, PlResult};
    pub use crate::eval::{Evaluator, RhaiEvaluator};
    pub use crate::normalize::normalize;
    pub use crate::range::step_range;
    pub use crate::sampler::{Density, SampleOptions, Sampler};
}
