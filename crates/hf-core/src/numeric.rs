use crate::{HfError, HfResult};

/// Floating point type used throughout hyperflow.
pub type Real = f64;

/// Absolute/relative tolerance pair for float comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Tolerances {
    /// Tolerance for comparing against empirical curve fits, which are only
    /// good to a few parts in ten thousand.
    pub const CURVE_FIT: Tolerances = Tolerances {
        abs: 1e-6,
        rel: 2e-3,
    };
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> HfResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HfError::NonFinite { what, value: v })
    }
}

/// Square of a value, spelled out so formulas read like their textbook form.
#[inline]
pub fn squared(v: Real) -> Real {
    v * v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn curve_fit_tolerance_is_loose() {
        assert!(nearly_equal(2.0, 2.002, Tolerances::CURVE_FIT));
        assert!(!nearly_equal(2.0, 2.01, Tolerances::CURVE_FIT));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn squared_matches_powi() {
        assert_eq!(squared(3.0), 9.0);
        assert_eq!(squared(-0.5), 0.25);
    }
}
