//! Isentropic and Prandtl-Meyer relations for a calorically perfect gas.

use crate::constants::{
    MAXIMUM_PRANDTL_MEYER_FUNCTION_VALUE, PRANDTL_MEYER_PARAMETER_1, PRANDTL_MEYER_PARAMETER_2,
    PRANDTL_MEYER_PARAMETER_3, PRANDTL_MEYER_PARAMETER_4, PRANDTL_MEYER_PARAMETER_5,
};
use crate::error::{AeroError, AeroResult};
use crate::validate::{check_gamma, check_mach_at_least, check_result};
use hf_core::numeric::squared;

/// Ratio of local static pressure to stagnation pressure.
///
/// ```text
/// p / p0 = (1 + (γ - 1)/2 · M²)^(-γ/(γ - 1))
/// ```
///
/// Valid for any `M >= 0`; the result lies in (0, 1] and is exactly 1 at rest.
pub fn local_to_static_pressure_ratio(mach_number: f64, gamma: f64) -> AeroResult<f64> {
    check_gamma(gamma)?;
    check_mach_at_least(mach_number, 0.0)?;

    let ratio = (1.0 + 0.5 * (gamma - 1.0) * squared(mach_number)).powf(-gamma / (gamma - 1.0));
    check_result(ratio, "local-to-static pressure ratio")
}

/// Prandtl-Meyer function ν(M) in radians.
///
/// Zero at `M = 1` and monotonically increasing; subsonic Mach numbers are rejected.
pub fn prandtl_meyer_function(mach_number: f64, gamma: f64) -> AeroResult<f64> {
    check_gamma(gamma)?;
    check_mach_at_least(mach_number, 1.0)?;

    let mach_squared_minus_one = squared(mach_number) - 1.0;
    let gamma_ratio = (gamma + 1.0) / (gamma - 1.0);

    let nu = gamma_ratio.sqrt() * (mach_squared_minus_one / gamma_ratio).sqrt().atan()
        - mach_squared_minus_one.sqrt().atan();
    check_result(nu, "Prandtl-Meyer function")
}

/// Mach number recovered from a Prandtl-Meyer function value, γ = 1.4 only.
///
/// Uses a rational curve fit rather than iteration. Accepts
/// `ν ∈ [0, MAXIMUM_PRANDTL_MEYER_FUNCTION_VALUE]`; at the upper bound the flow
/// has expanded to vacuum and the result is `f64::INFINITY`.
pub fn inverse_prandtl_meyer_function(prandtl_meyer_function_value: f64) -> AeroResult<f64> {
    let nu = prandtl_meyer_function_value;
    if !(0.0..=MAXIMUM_PRANDTL_MEYER_FUNCTION_VALUE).contains(&nu) {
        return Err(AeroError::Domain {
            what: "Prandtl-Meyer function value",
            value: nu,
        });
    }

    if nu == MAXIMUM_PRANDTL_MEYER_FUNCTION_VALUE {
        return Ok(f64::INFINITY);
    }

    let y = (nu / MAXIMUM_PRANDTL_MEYER_FUNCTION_VALUE).powf(2.0 / 3.0);
    let numerator = 1.0
        + y * (PRANDTL_MEYER_PARAMETER_1
            + y * (PRANDTL_MEYER_PARAMETER_2 + y * PRANDTL_MEYER_PARAMETER_3));
    let denominator = 1.0 + y * (PRANDTL_MEYER_PARAMETER_4 + y * PRANDTL_MEYER_PARAMETER_5);

    if denominator <= 0.0 {
        // Only reachable within rounding of the upper bound.
        return Ok(f64::INFINITY);
    }
    check_result(numerator / denominator, "inverse Prandtl-Meyer Mach number")
}

/// Pressure coefficient at a stagnation point behind a normal shock (Rayleigh-Pitot).
pub fn stagnation_pressure_coefficient(mach_number: f64, gamma: f64) -> AeroResult<f64> {
    check_gamma(gamma)?;
    check_mach_at_least(mach_number, 1.0)?;

    let mach_squared = squared(mach_number);
    let pitot_term = squared(gamma + 1.0) * mach_squared
        / (4.0 * gamma * mach_squared - 2.0 * (gamma - 1.0));
    let pressure_ratio = pitot_term.powf(gamma / (gamma - 1.0))
        * (1.0 - gamma + 2.0 * gamma * mach_squared)
        / (gamma + 1.0);

    let cp = 2.0 / (gamma * mach_squared) * (pressure_ratio - 1.0);
    check_result(cp, "stagnation pressure coefficient")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn pressure_ratio_in_unit_interval(mach in 0.0_f64..30.0, gamma in 1.05_f64..1.8) {
            let ratio = local_to_static_pressure_ratio(mach, gamma).unwrap();
            prop_assert!(ratio > 0.0 && ratio <= 1.0);
        }

        #[test]
        fn prandtl_meyer_is_monotone(mach in 1.0_f64..20.0, step in 0.01_f64..2.0) {
            let lo = prandtl_meyer_function(mach, 1.4).unwrap();
            let hi = prandtl_meyer_function(mach + step, 1.4).unwrap();
            prop_assert!(hi > lo);
            prop_assert!(hi < MAXIMUM_PRANDTL_MEYER_FUNCTION_VALUE);
        }
    }
}
