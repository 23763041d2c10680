use serde::{Deserialize, Serialize};

/// A rate whose denominator may have been zero.
///
/// Zero-count subgroups and zero-rate denominators are not errors. They
/// propagate through every derived metric as `Undefined`, so no division
/// by zero is ever performed and callers must match on the variant
/// before using a rate numerically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Rate {
    Defined(f64),
    Undefined,
}

impl Rate {
    /// Build a rate, guarding the zero denominator case.
    pub fn from_ratio(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            Rate::Undefined
        } else {
            Rate::Defined(numerator / denominator)
        }
    }

    /// The inner value, when defined.
    pub fn value(&self) -> Option<f64> {
        match self {
            Rate::Defined(value) => Some(*value),
            Rate::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Rate::Defined(_))
    }
}
