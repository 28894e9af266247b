use serde::Deserialize;
use std::fmt;

/// Controls how a benchmark parameter scales across the iterations of a sweep.
///
/// A growth function maps an iteration index `i` to a magnitude. It is a closed
/// set of variants rather than a closure so that sweeps can be described in
/// configuration files and compared for equality.
///
/// Construction through [`Growth::linear`] and [`Growth::scaled`] normalizes
/// non-positive parameters to `1`; [`Growth::evaluate`] applies the same rule
/// to values that arrive through deserialization.
///
/// All arithmetic saturates at `i64::MAX`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Growth {
    /// `step * (i + 1)`
    Linear { step: i64 },
    /// `2^i`
    Exponential,
    /// `value` for every index.
    Constant { value: i64 },
    /// `base * inner(i)`
    Scaled { base: i64, inner: Box<Growth> },
}

impl Growth {
    pub fn linear(step: i64) -> Self {
        Growth::Linear {
            step: positive_or_one(step),
        }
    }

    pub fn exponential() -> Self {
        Growth::Exponential
    }

    pub fn constant(value: i64) -> Self {
        Growth::Constant { value }
    }

    pub fn scaled(base: i64, inner: Growth) -> Self {
        Growth::Scaled {
            base: positive_or_one(base),
            inner: Box::new(inner),
        }
    }

    /// Evaluates the growth function at iteration index `i`.
    pub fn evaluate(&self, i: u32) -> i64 {
        match self {
            Growth::Linear { step } => positive_or_one(*step).saturating_mul(i64::from(i) + 1),
            Growth::Exponential => 1i64.checked_shl(i).filter(|v| *v > 0).unwrap_or(i64::MAX),
            Growth::Constant { value } => *value,
            Growth::Scaled { base, inner } => positive_or_one(*base).saturating_mul(inner.evaluate(i)),
        }
    }
}

impl fmt::Display for Growth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Growth::Linear { step } => write!(f, "{}*(i+1)", positive_or_one(*step)),
            Growth::Exponential => write!(f, "2^i"),
            Growth::Constant { value } => write!(f, "{}", value),
            Growth::Scaled { base, inner } => write!(f, "{}*{}", positive_or_one(*base), inner),
        }
    }
}

fn positive_or_one(v: i64) -> i64 {
    if v <= 0 { 1 } else { v }
}
