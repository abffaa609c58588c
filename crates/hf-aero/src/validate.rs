//! Precondition checks shared by every relation.

use crate::constants::{AIR_RATIO_OF_SPECIFIC_HEATS, AIR_RATIO_OF_SPECIFIC_HEATS_TOLERANCE};
use crate::error::{AeroError, AeroResult};
use hf_core::numeric::ensure_finite;
use std::f64::consts::FRAC_PI_2;

/// Slack on the ±π/2 inclination bound so degree-converted right angles pass.
const INCLINATION_BOUND_SLACK: f64 = 1e-12;

/// Ensure a computed value is finite, mapping the failure to a domain error.
pub fn check_result(value: f64, what: &'static str) -> AeroResult<f64> {
    Ok(ensure_finite(value, what)?)
}

/// γ must be finite and strictly greater than one.
pub fn check_gamma(gamma: f64) -> AeroResult<()> {
    if gamma.is_finite() && gamma > 1.0 {
        Ok(())
    } else {
        Err(AeroError::Domain {
            what: "ratio of specific heats",
            value: gamma,
        })
    }
}

/// γ must be that of air, for fits calibrated only at γ = 1.4.
pub fn check_air_gamma(gamma: f64) -> AeroResult<()> {
    check_gamma(gamma)?;
    if (gamma - AIR_RATIO_OF_SPECIFIC_HEATS).abs() <= AIR_RATIO_OF_SPECIFIC_HEATS_TOLERANCE {
        Ok(())
    } else {
        Err(AeroError::UnsupportedParameter {
            what: "ratio of specific heats (fit valid for 1.4 only)",
            value: gamma,
        })
    }
}

/// Mach number must be finite and at least `minimum`.
pub fn check_mach_at_least(mach_number: f64, minimum: f64) -> AeroResult<()> {
    if mach_number.is_finite() && mach_number >= minimum {
        Ok(())
    } else {
        Err(AeroError::Domain {
            what: "Mach number",
            value: mach_number,
        })
    }
}

/// Mach number must be finite and strictly above `minimum`.
pub fn check_mach_above(mach_number: f64, minimum: f64) -> AeroResult<()> {
    if mach_number.is_finite() && mach_number > minimum {
        Ok(())
    } else {
        Err(AeroError::Domain {
            what: "Mach number",
            value: mach_number,
        })
    }
}

/// Inclination must be finite and within [-π/2, π/2].
pub fn check_inclination(inclination_angle: f64) -> AeroResult<()> {
    if inclination_angle.is_finite()
        && inclination_angle.abs() <= FRAC_PI_2 + INCLINATION_BOUND_SLACK
    {
        Ok(())
    } else {
        Err(AeroError::Domain {
            what: "inclination angle",
            value: inclination_angle,
        })
    }
}

/// Value must be finite and strictly positive.
pub fn check_positive(value: f64, what: &'static str) -> AeroResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AeroError::Domain { what, value })
    }
}

/// Value must be finite and not negative.
pub fn check_non_negative(value: f64, what: &'static str) -> AeroResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AeroError::Domain { what, value })
    }
}
