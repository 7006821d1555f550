//! Notation normalization.
//!
//! Role
//! - Rewrite informal operator spellings into the syntax the evaluation
//!   engine accepts, before any evaluation happens.
//! - Stay total: every input string maps to an output string, nothing is
//!   rejected here.

/// Ordered rewrite table, applied as literal non-overlapping replacements.
/// New notational rules are added here without touching callers.
const REWRITES: &[(&str, &str)] = &[
    // Informal superscript: the engine's power operator is `**`.
    ("^", "**"),
];

/// Rewrite informal notation into evaluator-accepted syntax.
///
/// Deterministic and idempotent: no replacement target contains a source
/// pattern, so a second pass is a no-op.
///
/// ```
/// use plcore::normalize::normalize;
/// assert_eq!(normalize("x^2+4"), "x**2+4");
/// assert_eq!(normalize("y=x^2+4"), "y=x**2+4");
/// assert_eq!(normalize("x**2+4"), "x**2+4");
/// ```
pub fn normalize(expression: &str) -> String {
    let mut normalized = expression.to_owned();
    for (informal, native) in REWRITES {
        normalized = normalized.replace(informal, native);
    }
    normalized
}
