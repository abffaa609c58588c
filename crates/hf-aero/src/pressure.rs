//! Local surface pressure-coefficient correlations.
//!
//! Each method maps the local inclination angle θ (radians, positive when the
//! surface faces into the flow) and the freestream state to a pressure
//! coefficient Cp. The caller picks a method suited to the local regime:
//! shock-based fits for compression, Prandtl-Meyer or van Dyke expansion for
//! surfaces turned away from the flow, vacuum and base values as floors.
//!
//! All methods assume a thermally and calorically perfect gas.

use crate::constants::{DAHLEM_BUCK_CORRECTION_MACH_LIMIT, MAXIMUM_PRANDTL_MEYER_FUNCTION_VALUE};
use crate::error::{AeroError, AeroResult};
use crate::isentropic::{
    inverse_prandtl_meyer_function, local_to_static_pressure_ratio, prandtl_meyer_function,
};
use crate::validate::{
    check_air_gamma, check_gamma, check_inclination, check_mach_above, check_mach_at_least,
    check_non_negative, check_result,
};
use hf_core::numeric::squared;
use hf_core::units::{degrees, rad};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_8, PI};

/// Direction in which the flow turns at a surface element.
///
/// Selects the branch of the van Dyke unified method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowTurn {
    /// Surface turned away from the flow (θ ≤ 0).
    Expansion,
    /// Surface turned into the flow (θ ≥ 0).
    Compression,
}

impl FlowTurn {
    /// Turn implied by the sign of the inclination angle.
    pub fn from_inclination(inclination_angle: f64) -> Self {
        if inclination_angle < 0.0 {
            FlowTurn::Expansion
        } else {
            FlowTurn::Compression
        }
    }
}

fn in_degrees(angle: f64) -> f64 {
    degrees(rad(angle))
}

fn check_compression_inclination(inclination_angle: f64) -> AeroResult<()> {
    check_inclination(inclination_angle)?;
    if inclination_angle < 0.0 {
        return Err(AeroError::Domain {
            what: "inclination angle (compression surfaces only)",
            value: inclination_angle,
        });
    }
    Ok(())
}

/// Newtonian theory: `Cp = 2 sin²θ`.
pub fn newtonian_pressure_coefficient(inclination_angle: f64) -> AeroResult<f64> {
    check_inclination(inclination_angle)?;
    Ok(2.0 * squared(inclination_angle.sin()))
}

/// Modified Newtonian theory: `Cp = Cp_stag · sin²θ`.
pub fn modified_newtonian_pressure_coefficient(
    inclination_angle: f64,
    stagnation_pressure_coefficient: f64,
) -> AeroResult<f64> {
    check_inclination(inclination_angle)?;
    check_non_negative(
        stagnation_pressure_coefficient,
        "stagnation pressure coefficient",
    )?;
    Ok(stagnation_pressure_coefficient * squared(inclination_angle.sin()))
}

/// Empirical fit to two-dimensional oblique-shock (wedge) theory, γ = 1.4 only.
pub fn empirical_tangent_wedge_pressure_coefficient(
    inclination_angle: f64,
    mach_number: f64,
    gamma: f64,
) -> AeroResult<f64> {
    check_air_gamma(gamma)?;
    check_compression_inclination(inclination_angle)?;
    check_mach_at_least(mach_number, 1.0)?;

    // Hypersonic similarity parameter
    let mach_sine = mach_number * inclination_angle.sin();
    let effective = 1.2 * mach_sine + (-0.6 * mach_sine).exp();

    let cp = (squared(effective) - 1.0) / (0.6 * squared(mach_number));
    check_result(cp, "tangent wedge pressure coefficient")
}

/// Empirical fit to conical-shock theory, γ = 1.4 only.
pub fn empirical_tangent_cone_pressure_coefficient(
    inclination_angle: f64,
    mach_number: f64,
    gamma: f64,
) -> AeroResult<f64> {
    check_air_gamma(gamma)?;
    check_compression_inclination(inclination_angle)?;
    check_mach_at_least(mach_number, 1.0)?;

    let mach_sine = mach_number * inclination_angle.sin();
    // Effective normal Mach number behind the conical shock
    let effective_squared = squared(1.090_909 * mach_sine + (-0.545_454_5 * mach_sine).exp());

    let cp = 48.0 * effective_squared * squared(inclination_angle.sin())
        / (23.0 * effective_squared - 5.0);
    check_result(cp, "tangent cone pressure coefficient")
}

/// Modified Dahlem-Buck correlation for hypersonic compression surfaces.
///
/// Newtonian above 22.5°, zero for surfaces facing away from the flow, and an
/// empirical blend in between. Below Mach 20 a Mach-dependent correction
/// factor `1 + a · θ_deg^n` is applied.
pub fn modified_dahlem_buck_pressure_coefficient(
    inclination_angle: f64,
    mach_number: f64,
) -> AeroResult<f64> {
    check_inclination(inclination_angle)?;
    check_mach_at_least(mach_number, 1.0)?;

    if inclination_angle <= 0.0 {
        return Ok(0.0);
    }

    let mut cp = if inclination_angle > FRAC_PI_8 {
        2.0 * squared(inclination_angle.sin())
    } else {
        (1.0 + (4.0 * inclination_angle.powf(0.75)).sin())
            / (4.0 * inclination_angle.cos() * (2.0 * inclination_angle).cos()).powf(0.75)
            * inclination_angle.sin().powf(1.25)
    };

    if mach_number < DAHLEM_BUCK_CORRECTION_MACH_LIMIT {
        let log_mach = mach_number.ln();
        let a = (6.0 - 0.3 * mach_number) + ((log_mach - 0.588) / 1.2 * PI).sin();
        let n = -1.15 - 0.5 * ((log_mach - 0.916) / 3.29 * PI).sin();
        cp *= 1.0 + a * in_degrees(inclination_angle).powf(n);
    }

    check_result(cp, "Dahlem-Buck pressure coefficient")
}

/// Hankey flat-surface correlation: modified Newtonian with an empirical,
/// inclination-dependent stagnation coefficient.
///
/// Compression surfaces only (θ ≥ 0); the stagnation fit grows without bound
/// for negative angles.
pub fn hankey_flat_surface_pressure_coefficient(
    inclination_angle: f64,
    mach_number: f64,
) -> AeroResult<f64> {
    check_compression_inclination(inclination_angle)?;
    check_mach_at_least(mach_number, 1.0)?;

    let mach_factor = mach_number.powf(0.3);
    let stagnation_cp = if inclination_angle < PI / 18.0 {
        (0.195 + 0.222_594 / mach_factor - 0.4) * in_degrees(inclination_angle) + 4.0
    } else {
        1.95 + 0.3925 / (mach_factor * inclination_angle.tan())
    };

    modified_newtonian_pressure_coefficient(inclination_angle, stagnation_cp)
}

/// Smyth correlation for swept and delta planforms.
///
/// Inclinations below 1° are evaluated at 1°.
pub fn smyth_delta_wing_pressure_coefficient(
    inclination_angle: f64,
    mach_number: f64,
) -> AeroResult<f64> {
    check_inclination(inclination_angle)?;
    check_mach_at_least(mach_number, 1.0)?;

    let minimum_angle = 1.0_f64.to_radians();
    let angle = if inclination_angle < minimum_angle {
        tracing::trace!(inclination_angle, "Smyth inclination clamped to 1 degree");
        minimum_angle
    } else {
        inclination_angle
    };

    let mach_sine = mach_number * angle.sin();
    let effective = 1.09 * mach_sine + (-0.49 * mach_sine).exp();
    let cp = 1.666_67 * (squared(effective) - 1.0) / squared(mach_number);
    check_result(cp, "Smyth delta wing pressure coefficient")
}

/// van Dyke unified hypersonic small-disturbance method.
///
/// Uses the similarity parameter `K = √(M² - 1) · |θ|`. The compression branch
/// needs θ ≥ 0 and the expansion branch θ ≤ 0. Expansion beyond
/// `K = 2/(γ - 1)` reaches vacuum, and the expansion result never drops below
/// the vacuum coefficient.
pub fn van_dyke_unified_pressure_coefficient(
    inclination_angle: f64,
    mach_number: f64,
    gamma: f64,
    turn: FlowTurn,
) -> AeroResult<f64> {
    check_gamma(gamma)?;
    check_inclination(inclination_angle)?;
    check_mach_above(mach_number, 1.0)?;

    let sign_matches = match turn {
        FlowTurn::Compression => inclination_angle >= 0.0,
        FlowTurn::Expansion => inclination_angle <= 0.0,
    };
    if !sign_matches {
        return Err(AeroError::Domain {
            what: "inclination angle sign for flow turn",
            value: inclination_angle,
        });
    }

    // Undisturbed flow.
    if inclination_angle == 0.0 {
        return Ok(0.0);
    }

    // θ²/K² is folded into 1/(M² - 1) so tiny angles do not underflow.
    let mach_factor = squared(mach_number) - 1.0;
    let magnitude = inclination_angle.abs();

    let cp = match turn {
        FlowTurn::Compression => {
            let half_gamma_plus_one = 0.5 * (gamma + 1.0);
            half_gamma_plus_one * squared(magnitude)
                + magnitude
                    * (squared(half_gamma_plus_one * magnitude) + 4.0 / mach_factor).sqrt()
        }
        FlowTurn::Expansion => {
            let vacuum = vacuum_pressure_coefficient(mach_number, gamma)?;
            let similarity = mach_factor.sqrt() * magnitude;
            if similarity >= 2.0 / (gamma - 1.0) {
                tracing::trace!(similarity, "van Dyke expansion reached vacuum");
                vacuum
            } else {
                let expansion = (1.0 - 0.5 * (gamma - 1.0) * similarity)
                    .powf(2.0 * gamma / (gamma - 1.0));
                let cp = 2.0 / (gamma * mach_factor) * (expansion - 1.0);
                check_result(cp, "van Dyke expansion pressure coefficient")?.max(vacuum)
            }
        }
    };

    check_result(cp, "van Dyke unified pressure coefficient")
}

/// Prandtl-Meyer expansion from freestream, γ = 1.4 only.
///
/// Computes the freestream Prandtl-Meyer value itself; see
/// [`prandtl_meyer_freestream_pressure_coefficient_with_freestream_function`]
/// to reuse one value across many panels.
pub fn prandtl_meyer_freestream_pressure_coefficient(
    inclination_angle: f64,
    mach_number: f64,
    gamma: f64,
) -> AeroResult<f64> {
    check_air_gamma(gamma)?;
    check_mach_at_least(mach_number, 1.0)?;
    let freestream_prandtl_meyer_function = prandtl_meyer_function(mach_number, gamma)?;
    prandtl_meyer_freestream_pressure_coefficient_with_freestream_function(
        inclination_angle,
        mach_number,
        gamma,
        freestream_prandtl_meyer_function,
    )
}

/// Prandtl-Meyer expansion from freestream using a precomputed freestream ν.
///
/// The local value is `ν = ν∞ - θ`; once it reaches the γ = 1.4 maximum the
/// flow has expanded to vacuum and the vacuum coefficient is returned.
pub fn prandtl_meyer_freestream_pressure_coefficient_with_freestream_function(
    inclination_angle: f64,
    mach_number: f64,
    gamma: f64,
    freestream_prandtl_meyer_function: f64,
) -> AeroResult<f64> {
    check_air_gamma(gamma)?;
    check_inclination(inclination_angle)?;
    check_mach_at_least(mach_number, 1.0)?;
    if !(0.0..=MAXIMUM_PRANDTL_MEYER_FUNCTION_VALUE).contains(&freestream_prandtl_meyer_function)
    {
        return Err(AeroError::Domain {
            what: "freestream Prandtl-Meyer function value",
            value: freestream_prandtl_meyer_function,
        });
    }

    let local_prandtl_meyer_function = freestream_prandtl_meyer_function - inclination_angle;

    if local_prandtl_meyer_function >= MAXIMUM_PRANDTL_MEYER_FUNCTION_VALUE {
        tracing::trace!(
            local_prandtl_meyer_function,
            "Prandtl-Meyer expansion reached vacuum"
        );
        return vacuum_pressure_coefficient(mach_number, gamma);
    }

    let local_mach_number = inverse_prandtl_meyer_function(local_prandtl_meyer_function)?;
    let local_ratio = local_to_static_pressure_ratio(local_mach_number, gamma)?;
    let freestream_ratio = local_to_static_pressure_ratio(mach_number, gamma)?;

    let cp = 2.0 / (gamma * squared(mach_number)) * (local_ratio / freestream_ratio - 1.0);
    check_result(cp, "Prandtl-Meyer pressure coefficient")
}

/// Pressure coefficient for zero local static pressure: `Cp = -2/(γM²)`.
///
/// No physical surface pressure can be lower.
pub fn vacuum_pressure_coefficient(mach_number: f64, gamma: f64) -> AeroResult<f64> {
    check_gamma(gamma)?;
    check_mach_at_least(mach_number, 1.0)?;
    Ok(-2.0 / (gamma * squared(mach_number)))
}

/// High-Mach approximation of the base pressure coefficient: `Cp = -1/M²`.
pub fn high_mach_base_pressure_coefficient(mach_number: f64) -> AeroResult<f64> {
    check_mach_at_least(mach_number, 1.0)?;
    Ok(-1.0 / squared(mach_number))
}

/// ACM empirical correlation: `Cp = θ_deg / (16 M²)`, floored at the base value `-1/M²`.
pub fn acm_empirical_pressure_coefficient(
    inclination_angle: f64,
    mach_number: f64,
) -> AeroResult<f64> {
    check_inclination(inclination_angle)?;
    check_mach_at_least(mach_number, 1.0)?;

    let cp = in_degrees(inclination_angle) / (16.0 * squared(mach_number));
    let minimum = high_mach_base_pressure_coefficient(mach_number)?;
    Ok(cp.max(minimum))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::FRAC_PI_2;

    proptest! {
        #[test]
        fn newtonian_monotone_on_quarter_turn(a in 0.0_f64..FRAC_PI_2, b in 0.0_f64..FRAC_PI_2) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                newtonian_pressure_coefficient(lo).unwrap()
                    <= newtonian_pressure_coefficient(hi).unwrap()
            );
        }

        #[test]
        fn compression_fits_are_non_negative(theta in 0.0_f64..FRAC_PI_2, mach in 1.0_f64..30.0) {
            prop_assert!(empirical_tangent_wedge_pressure_coefficient(theta, mach, 1.4).unwrap() >= 0.0);
            prop_assert!(empirical_tangent_cone_pressure_coefficient(theta, mach, 1.4).unwrap() >= 0.0);
            prop_assert!(smyth_delta_wing_pressure_coefficient(theta, mach).unwrap() >= 0.0);
        }
    }
}
