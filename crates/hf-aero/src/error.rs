//! Aerodynamic relation errors.

use hf_core::HfError;
use thiserror::Error;

/// Result type for aerodynamic relations.
pub type AeroResult<T> = Result<T, AeroError>;

/// Errors raised when a relation is asked for a value outside its regime.
///
/// Every relation checks its inputs before evaluating, so a caller receives
/// one of these instead of a NaN or a silently extrapolated fit.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AeroError {
    /// Input outside the relation's domain (subsonic Mach, γ ≤ 1, ...).
    #[error("Domain error for {what}: {value}")]
    Domain { what: &'static str, value: f64 },

    /// Parameter the empirical fit was never calibrated for.
    #[error("Unsupported parameter {what}: {value}")]
    UnsupportedParameter { what: &'static str, value: f64 },

    /// Degenerate arithmetic inside an otherwise valid input range.
    #[error("Numeric edge case: {what}")]
    NumericEdgeCase { what: &'static str },
}

impl From<HfError> for AeroError {
    fn from(err: HfError) -> Self {
        match err {
            HfError::NonFinite { what, value } => AeroError::Domain { what, value },
            HfError::InvalidArg { what } | HfError::Invariant { what } => {
                AeroError::NumericEdgeCase { what }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = AeroError::Domain {
            what: "Mach number",
            value: 0.5,
        };
        assert!(err.to_string().contains("Mach number"));
        assert!(err.to_string().contains("0.5"));

        let err = AeroError::UnsupportedParameter {
            what: "ratio of specific heats",
            value: 1.3,
        };
        assert!(err.to_string().contains("1.3"));
    }

    #[test]
    fn non_finite_maps_to_domain() {
        let err: AeroError = HfError::NonFinite {
            what: "pressure coefficient",
            value: f64::NAN,
        }
        .into();
        assert!(matches!(err, AeroError::Domain { .. }));
    }
}
