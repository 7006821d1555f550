//! Drift-free stepping over a floating-point domain.
//!
//! Role
//! - Produce the ordered domain values the sampler evaluates at.
//! - Compute every value as `start + i * step` against an integer counter;
//!   repeated addition would accumulate rounding error over long runs.

/// Iterate from `start` towards `end` in increments of `step`.
///
/// The first value is always `start`. Subsequent candidates are
/// `start + i * step` for `i = 1, 2, ...`; iteration stops once a candidate
/// plus half a step reaches `end`, so every yielded value is strictly below
/// `end` and a candidate landing within half a step of `end` is not emitted.
/// The half-step test absorbs rounding at the boundary: a step sized to
/// divide the span into `k` parts yields exactly `k` values regardless of
/// which side of `end` the `k`-th candidate rounds to.
///
/// Each call returns a fresh iterator; identical arguments produce
/// value-for-value identical sequences.
///
/// Degenerate inputs never fail and never produce an unbounded sequence: a
/// `step` that is not a finite positive number, or an `end` at or below
/// `start`, yields the single-element sequence `[start]`.
pub fn step_range(start: f64, end: f64, step: f64) -> StepRange {
    StepRange {
        start,
        end,
        step,
        index: 0,
    }
}

/// Iterator returned by [`step_range`].
#[derive(Debug, Clone)]
pub struct StepRange {
    start: f64,
    end: f64,
    step: f64,
    index: u64,
}

impl Iterator for StepRange {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index == 0 {
            self.index = 1;
            return Some(self.start);
        }
        // Also rejects NaN and zero steps, which would otherwise never
        // reach the termination test.
        if !(self.step > 0.0) {
            return None;
        }
        let candidate = self.start + self.index as f64 * self.step;
        if candidate + self.step / 2.0 >= self.end {
            return None;
        }
        self.index += 1;
        Some(candidate)
    }
}

impl std::iter::FusedIterator for StepRange {}
