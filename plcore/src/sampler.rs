//! Sampling orchestration.
//!
//! Role
//! - Hold the readable expression and its normalized form as a pair that is
//!   replaced wholesale; the normalized form is recomputed on every
//!   reassignment and never mutated independently.
//! - Resolve a density policy into a step size, walk the domain, and drive
//!   one evaluation per domain value.

use log::debug;
use strum::EnumIs;

use crate::Point;
use crate::error::PlResult;
use crate::eval::{Evaluator, RhaiEvaluator};
use crate::normalize::normalize;
use crate::range::step_range;

/// Density selection for a sampling run.
///
/// At most one policy applies; see [`Density::resolve`] for precedence. The
/// default requests none of them, which samples at unit step.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleOptions {
    /// Explicit point count. `Some(0)` is treated as "not provided": callers
    /// cannot request zero points.
    pub n: Option<u32>,
    /// 500 points across the domain.
    pub smooth: bool,
    /// 5000 points across the domain.
    pub very_smooth: bool,
}

impl SampleOptions {
    pub fn points(n: u32) -> Self {
        Self {
            n: Some(n),
            ..Self::default()
        }
    }

    pub fn smooth() -> Self {
        Self {
            smooth: true,
            ..Self::default()
        }
    }

    pub fn very_smooth() -> Self {
        Self {
            very_smooth: true,
            ..Self::default()
        }
    }
}

/// Resolved density policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIs)]
pub enum Density {
    /// Exactly `n` points across the domain.
    Count(u32),
    /// 500 points across the domain.
    Smooth,
    /// 5000 points across the domain.
    VerySmooth,
    /// One point per unit of x.
    Unit,
}

impl Density {
    /// Pick the policy from the requested options, first match winning:
    /// a non-zero `n`, then `smooth`, then `very_smooth`, then unit step.
    /// A zero `n` falls through rather than selecting a zero-point run.
    pub fn resolve(options: &SampleOptions) -> Self {
        match options.n {
            Some(n) if n != 0 => Density::Count(n),
            _ if options.smooth => Density::Smooth,
            _ if options.very_smooth => Density::VerySmooth,
            _ => Density::Unit,
        }
    }

    /// Step size this policy yields over `[x_min, x_max]`.
    ///
    /// `Count(1)` divides by zero and produces an infinite step; the stepper
    /// then terminates after the single point at `x_min`, which is the
    /// documented behavior for a one-point request.
    pub fn step_size(&self, x_min: f64, x_max: f64) -> f64 {
        match self {
            Density::Count(n) => (x_max - x_min) / (f64::from(*n) - 1.0),
            Density::Smooth => (x_max - x_min) / 499.0,
            Density::VerySmooth => (x_max - x_min) / 4999.0,
            Density::Unit => 1.0,
        }
    }
}

/// Drives an [`Evaluator`] across a domain to produce `(x, y)` samples.
///
/// A `Sampler` is stateless per call apart from the stored expression text:
/// every [`sample_over`](Sampler::sample_over) call rebinds the variable and
/// walks a fresh domain iterator. The evaluator's bindings are private
/// mutable state, so use one `Sampler` per concurrent sampling operation.
pub struct Sampler<E: Evaluator = RhaiEvaluator> {
    expression: String,
    normalized: String,
    evaluator: E,
}

impl Sampler<RhaiEvaluator> {
    /// Sampler over the default rhai-backed evaluator.
    pub fn new(expression: impl Into<String>) -> Self {
        Self::with_evaluator(expression, RhaiEvaluator::new())
    }
}

impl<E: Evaluator> Sampler<E> {
    /// Sampler over a caller-provided evaluation engine.
    pub fn with_evaluator(expression: impl Into<String>, evaluator: E) -> Self {
        let expression = expression.into();
        let normalized = normalize(&expression);
        Self {
            expression,
            normalized,
            evaluator,
        }
    }

    /// The expression as the user wrote it.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The evaluator-ready form, derived from [`expression`](Sampler::expression).
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Replace the expression; the normalized form is recomputed here so the
    /// pair can never go stale.
    pub fn set_expression(&mut self, expression: impl Into<String>) {
        self.expression = expression.into();
        self.normalized = normalize(&self.expression);
    }

    /// Sample over the default domain `[-500, 500]` at unit step.
    pub fn sample(&mut self) -> PlResult<Vec<Point>> {
        self.sample_over(-500.0, 500.0, SampleOptions::default())
    }

    /// Sample over `[x_min, x_max]` with the requested density.
    ///
    /// The endpoint handed to the stepper is over-extended by one step so
    /// `x_max` itself is reachable under the stepper's strict-less-than
    /// rule. Any bind or evaluation failure aborts the whole run; no
    /// partial sequence is returned.
    pub fn sample_over(
        &mut self,
        x_min: f64,
        x_max: f64,
        options: SampleOptions,
    ) -> PlResult<Vec<Point>> {
        let density = Density::resolve(&options);
        let step = density.step_size(x_min, x_max);
        debug!(
            "sampling '{}' over [{x_min}, {x_max}] with step {step} ({density:?})",
            self.normalized
        );

        // Warm-up binding: the engine has a valid `x` before the loop runs.
        self.evaluator.bind("x", 0.0)?;

        let mut points = Vec::new();
        for x in step_range(x_min, x_max + step, step) {
            self.evaluator.bind("x", x)?;
            let y = self.evaluator.evaluate(&self.normalized)?;
            points.push((x, y));
        }
        Ok(points)
    }
}
