//! Rankine-Hugoniot relations across a shock wave.
//!
//! Ratio and jump relations take the Mach number normal to the shock. At
//! `M_n = 1` there is no shock and they return the identity exactly.

use crate::error::{AeroError, AeroResult};
use crate::validate::{check_gamma, check_mach_at_least, check_positive, check_result};
use hf_core::numeric::squared;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

fn check_normal_shock(normal_mach_number: f64, gamma: f64) -> AeroResult<()> {
    check_gamma(gamma)?;
    check_mach_at_least(normal_mach_number, 1.0)
}

/// Post- to pre-shock static pressure ratio.
pub fn shock_pressure_ratio(normal_mach_number: f64, gamma: f64) -> AeroResult<f64> {
    check_normal_shock(normal_mach_number, gamma)?;
    if normal_mach_number == 1.0 {
        return Ok(1.0);
    }
    let ratio = 1.0 + 2.0 * gamma / (gamma + 1.0) * (squared(normal_mach_number) - 1.0);
    check_result(ratio, "shock pressure ratio")
}

/// Post- to pre-shock density ratio; tends to `(γ+1)/(γ-1)` for strong shocks.
pub fn shock_density_ratio(normal_mach_number: f64, gamma: f64) -> AeroResult<f64> {
    check_normal_shock(normal_mach_number, gamma)?;
    if normal_mach_number == 1.0 {
        return Ok(1.0);
    }
    let mach_squared = squared(normal_mach_number);
    let ratio = (gamma + 1.0) * mach_squared / ((gamma - 1.0) * mach_squared + 2.0);
    check_result(ratio, "shock density ratio")
}

/// Post- to pre-shock temperature ratio, from the perfect-gas law.
pub fn shock_temperature_ratio(normal_mach_number: f64, gamma: f64) -> AeroResult<f64> {
    let pressure_ratio = shock_pressure_ratio(normal_mach_number, gamma)?;
    let density_ratio = shock_density_ratio(normal_mach_number, gamma)?;
    check_result(pressure_ratio / density_ratio, "shock temperature ratio")
}

/// Specific entropy jump across the shock [J/(kg·K)].
///
/// ```text
/// Δs = cp · ln(T2/T1) - R · ln(p2/p1),   cp = γR/(γ - 1)
/// ```
///
/// For very weak shocks the two logarithms cancel to rounding error; the jump
/// is clamped at zero so it never reports an entropy decrease.
pub fn shock_entropy_jump(
    normal_mach_number: f64,
    gamma: f64,
    specific_gas_constant: f64,
) -> AeroResult<f64> {
    check_positive(specific_gas_constant, "specific gas constant")?;
    let temperature_ratio = shock_temperature_ratio(normal_mach_number, gamma)?;
    let pressure_ratio = shock_pressure_ratio(normal_mach_number, gamma)?;

    let specific_heat_constant_pressure = gamma / (gamma - 1.0) * specific_gas_constant;
    let jump = specific_heat_constant_pressure * temperature_ratio.ln()
        - specific_gas_constant * pressure_ratio.ln();
    Ok(check_result(jump, "shock entropy jump")?.max(0.0))
}

/// Post- to pre-shock total pressure ratio, `exp(-Δs/R)`.
pub fn shock_total_pressure_ratio(
    normal_mach_number: f64,
    gamma: f64,
    specific_gas_constant: f64,
) -> AeroResult<f64> {
    let jump = shock_entropy_jump(normal_mach_number, gamma, specific_gas_constant)?;
    check_result(
        (-jump / specific_gas_constant).exp(),
        "shock total pressure ratio",
    )
}

/// Flow deflection angle behind an oblique shock of angle `shock_angle` (θ-β-M relation).
///
/// ```text
/// tan θ = 2 cot β (M² sin²β - 1) / (M² (γ + cos 2β) + 2)
/// ```
///
/// The shock angle must lie in (0, π/2] and be no weaker than the Mach wave
/// (`M sin β >= 1`).
pub fn shock_deflection_angle(shock_angle: f64, mach_number: f64, gamma: f64) -> AeroResult<f64> {
    check_gamma(gamma)?;
    check_mach_at_least(mach_number, 1.0)?;
    if !(shock_angle.is_finite() && shock_angle > 0.0 && shock_angle <= FRAC_PI_2) {
        return Err(AeroError::Domain {
            what: "shock angle",
            value: shock_angle,
        });
    }

    let normal_mach_squared = squared(mach_number * shock_angle.sin());
    // Rounding slack so β = asin(1/M) itself is accepted.
    if normal_mach_squared < 1.0 - 1e-12 {
        return Err(AeroError::Domain {
            what: "shock angle (below Mach angle)",
            value: shock_angle,
        });
    }

    let denominator = squared(mach_number) * (gamma + (2.0 * shock_angle).cos()) + 2.0;
    if denominator <= 0.0 || !denominator.is_finite() {
        return Err(AeroError::NumericEdgeCase {
            what: "deflection angle denominator",
        });
    }

    let cotangent = shock_angle.cos() / shock_angle.sin();
    let tangent = 2.0 * cotangent * (normal_mach_squared - 1.0).max(0.0) / denominator;
    check_result(tangent.atan(), "shock deflection angle")
}

/// Full set of shock jump properties for one normal Mach number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShockProperties {
    pub normal_mach_number: f64,
    pub pressure_ratio: f64,
    pub density_ratio: f64,
    pub temperature_ratio: f64,
    /// [J/(kg·K)]
    pub entropy_jump: f64,
    pub total_pressure_ratio: f64,
}

impl ShockProperties {
    /// Evaluate every ratio and jump relation for the given normal shock.
    pub fn solve(
        normal_mach_number: f64,
        gamma: f64,
        specific_gas_constant: f64,
    ) -> AeroResult<Self> {
        Ok(Self {
            normal_mach_number,
            pressure_ratio: shock_pressure_ratio(normal_mach_number, gamma)?,
            density_ratio: shock_density_ratio(normal_mach_number, gamma)?,
            temperature_ratio: shock_temperature_ratio(normal_mach_number, gamma)?,
            entropy_jump: shock_entropy_jump(normal_mach_number, gamma, specific_gas_constant)?,
            total_pressure_ratio: shock_total_pressure_ratio(
                normal_mach_number,
                gamma,
                specific_gas_constant,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_core::units::constants::R_AIR;

    #[test]
    fn no_shock_is_identity() {
        for gamma in [1.2, 1.4, 5.0 / 3.0] {
            assert_eq!(shock_pressure_ratio(1.0, gamma).unwrap(), 1.0);
            assert_eq!(shock_density_ratio(1.0, gamma).unwrap(), 1.0);
            assert_eq!(shock_temperature_ratio(1.0, gamma).unwrap(), 1.0);
            assert_eq!(shock_entropy_jump(1.0, gamma, R_AIR).unwrap(), 0.0);
            assert_eq!(shock_total_pressure_ratio(1.0, gamma, R_AIR).unwrap(), 1.0);
        }
    }

    #[test]
    fn mach_two_air() {
        assert!((shock_pressure_ratio(2.0, 1.4).unwrap() - 4.5).abs() < 1e-12);
        assert!((shock_density_ratio(2.0, 1.4).unwrap() - 8.0 / 3.0).abs() < 1e-12);
        assert!((shock_temperature_ratio(2.0, 1.4).unwrap() - 1.6875).abs() < 1e-12);
    }

    #[test]
    fn total_pressure_loss_mach_two() {
        // Normal-shock tables: p02/p01 = 0.7209 at M = 2.
        let ratio = shock_total_pressure_ratio(2.0, 1.4, R_AIR).unwrap();
        assert!((ratio - 0.7209).abs() < 1e-4, "ratio = {ratio}");
        assert!(shock_entropy_jump(2.0, 1.4, R_AIR).unwrap() > 0.0);
    }

    #[test]
    fn total_pressure_ratio_independent_of_gas_constant() {
        let air = shock_total_pressure_ratio(3.0, 1.4, R_AIR).unwrap();
        let other = shock_total_pressure_ratio(3.0, 1.4, 4124.0).unwrap();
        assert!((air - other).abs() < 1e-12);
    }

    #[test]
    fn weak_shock_never_gains_total_pressure() {
        for normal_mach_number in [1.0 + 1e-9, 1.0 + 1e-6, 1.0 + 1e-4] {
            let jump = shock_entropy_jump(normal_mach_number, 1.4, R_AIR).unwrap();
            assert!(jump >= 0.0, "M_n = {normal_mach_number}: Δs = {jump}");
            let ratio = shock_total_pressure_ratio(normal_mach_number, 1.4, R_AIR).unwrap();
            assert!(ratio <= 1.0, "M_n = {normal_mach_number}: p02/p01 = {ratio}");
        }
    }

    #[test]
    fn rejects_expansion_shock_and_bad_gas_constant() {
        assert!(matches!(
            shock_pressure_ratio(0.9, 1.4),
            Err(AeroError::Domain { .. })
        ));
        assert!(shock_entropy_jump(2.0, 1.4, 0.0).is_err());
        assert!(shock_density_ratio(2.0, 1.0).is_err());
    }

    #[test]
    fn deflection_angle_reference() {
        // M = 3, β = 30°: θ ≈ 12.77°
        let theta = shock_deflection_angle(30.0_f64.to_radians(), 3.0, 1.4).unwrap();
        assert!((theta.to_degrees() - 12.77).abs() < 0.05, "theta = {}", theta.to_degrees());
    }

    #[test]
    fn deflection_angle_vanishes_at_limits() {
        let mach_angle = (1.0_f64 / 2.0).asin();
        let theta = shock_deflection_angle(mach_angle, 2.0, 1.4).unwrap();
        assert!(theta.abs() < 1e-9);

        let normal = shock_deflection_angle(FRAC_PI_2, 2.0, 1.4).unwrap();
        assert!(normal.abs() < 1e-9);
    }

    #[test]
    fn deflection_angle_domain() {
        assert!(shock_deflection_angle(0.0, 2.0, 1.4).is_err());
        assert!(shock_deflection_angle(1.7, 2.0, 1.4).is_err());
        assert!(shock_deflection_angle(10.0_f64.to_radians(), 2.0, 1.4).is_err());
        assert!(shock_deflection_angle(0.6, 0.5, 1.4).is_err());
    }

    #[test]
    fn properties_bundle_matches_individual_relations() {
        let props = ShockProperties::solve(2.5, 1.4, R_AIR).unwrap();
        assert_eq!(props.pressure_ratio, shock_pressure_ratio(2.5, 1.4).unwrap());
        assert_eq!(
            props.total_pressure_ratio,
            shock_total_pressure_ratio(2.5, 1.4, R_AIR).unwrap()
        );
        assert!(ShockProperties::solve(0.5, 1.4, R_AIR).is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn shock_compresses_and_loses_total_pressure(mn in 1.01_f64..20.0, gamma in 1.1_f64..1.7) {
            prop_assert!(shock_pressure_ratio(mn, gamma).unwrap() > 1.0);
            let density = shock_density_ratio(mn, gamma).unwrap();
            prop_assert!(density > 1.0 && density < (gamma + 1.0) / (gamma - 1.0));
            let total = shock_total_pressure_ratio(mn, gamma, 287.0).unwrap();
            prop_assert!(total > 0.0 && total < 1.0);
        }
    }
}
