//! Expression evaluation behind a narrow capability trait.
//!
//! Role
//! - Define the minimal surface the sampler needs from an arithmetic engine:
//!   bind a variable, evaluate an expression string, get a number back.
//! - Provide the default engine, a thin adapter over [`rhai`]. Rhai's native
//!   power operator is `**`, which is exactly what normalized expressions
//!   use.
//!
//! The bound-variable state lives inside the evaluator, so an evaluator
//! instance must not be shared across concurrent sampling operations.

use rhai::{Dynamic, Engine, Scope};

use crate::error::{PlError, PlResult};

/// Minimal arithmetic-engine capability.
///
/// Any engine that can hold named numeric bindings and evaluate an
/// expression string against them can back a
/// [`Sampler`](crate::sampler::Sampler).
pub trait Evaluator {
    /// Set or overwrite a variable's current value.
    fn bind(&mut self, name: &str, value: f64) -> PlResult<()>;

    /// Evaluate an already-normalized expression against current bindings.
    ///
    /// Failures (syntax errors, unknown symbols, engine runtime faults) are
    /// reported as [`PlError::Evaluation`]; there is no retry and no
    /// substitute value.
    fn evaluate(&mut self, expression: &str) -> PlResult<f64>;
}

/// Default evaluator: one persistent rhai engine and scope.
pub struct RhaiEvaluator {
    engine: Engine,
    scope: Scope<'static>,
}

impl RhaiEvaluator {
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
            scope: Scope::new(),
        }
    }
}

impl Default for RhaiEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator for RhaiEvaluator {
    fn bind(&mut self, name: &str, value: f64) -> PlResult<()> {
        self.scope.set_value(name.to_owned(), value);
        Ok(())
    }

    fn evaluate(&mut self, expression: &str) -> PlResult<f64> {
        let body = strip_label(expression);
        let value = self
            .engine
            .eval_expression_with_scope::<Dynamic>(&mut self.scope, body)
            .map_err(|err| PlError::Evaluation {
                expression: expression.to_owned(),
                message: err.to_string(),
            })?;
        value
            .clone()
            .as_float()
            .or_else(|_| value.as_int().map(|n| n as f64))
            .map_err(|type_name| PlError::Evaluation {
                expression: expression.to_owned(),
                message: format!("expression produced a non-numeric value of type {type_name}"),
            })
    }
}

/// Drop an inert `<identifier>=` label from the front of an expression.
///
/// `"y=x**2"` is a labeled way of writing `"x**2"`; the label carries no
/// meaning for sampling. Comparison operators (`==`, `<=`, `>=`, `!=`) and
/// left-hand sides that are not bare identifiers are left untouched.
fn strip_label(expression: &str) -> &str {
    let Some(idx) = expression.find('=') else {
        return expression;
    };
    if expression[idx + 1..].starts_with('=') {
        return expression;
    }
    if idx > 0 && matches!(expression.as_bytes()[idx - 1], b'<' | b'>' | b'!') {
        return expression;
    }
    let label = expression[..idx].trim();
    let mut chars = label.chars();
    let is_identifier = matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_');
    if is_identifier {
        expression[idx + 1..].trim_start()
    } else {
        expression
    }
}
