//! Fixed values shared by the relations.
//!
//! The five `PRANDTL_MEYER_PARAMETER_*` values are the coefficients of a
//! rational fit in `y = (ν / ν_max)^(2/3)` that inverts the Prandtl-Meyer
//! function for γ = 1.4 without iteration.

use std::f64::consts::FRAC_PI_2;

/// Ratio of specific heats for which the air-only fits were calibrated.
pub const AIR_RATIO_OF_SPECIFIC_HEATS: f64 = 1.4;

/// Allowed distance from [`AIR_RATIO_OF_SPECIFIC_HEATS`] before an air-only fit refuses γ.
pub const AIR_RATIO_OF_SPECIFIC_HEATS_TOLERANCE: f64 = 1e-9;

/// Maximum Prandtl-Meyer function value (M → ∞) for γ = 1.4, in radians.
///
/// Equals π/2 · (√6 − 1) ≈ 2.2769 rad (130.45°).
pub const MAXIMUM_PRANDTL_MEYER_FUNCTION_VALUE: f64 = FRAC_PI_2 * (SQRT_6 - 1.0);

/// Inverse Prandtl-Meyer fit, linear numerator coefficient.
pub const PRANDTL_MEYER_PARAMETER_1: f64 = 1.3604;
/// Inverse Prandtl-Meyer fit, quadratic numerator coefficient.
pub const PRANDTL_MEYER_PARAMETER_2: f64 = 0.0962;
/// Inverse Prandtl-Meyer fit, cubic numerator coefficient.
pub const PRANDTL_MEYER_PARAMETER_3: f64 = -0.5127;
/// Inverse Prandtl-Meyer fit, linear denominator coefficient.
pub const PRANDTL_MEYER_PARAMETER_4: f64 = -0.6722;
/// Inverse Prandtl-Meyer fit, quadratic denominator coefficient.
pub const PRANDTL_MEYER_PARAMETER_5: f64 = -0.3278;

// f64::sqrt is not const.
const SQRT_6: f64 = 2.449_489_742_783_178;

/// Mach number above which the Dahlem-Buck low-Mach correction is dropped.
pub const DAHLEM_BUCK_CORRECTION_MACH_LIMIT: f64 = 20.0;
