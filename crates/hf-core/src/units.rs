// hf-core/src/units.rs

use uom::si::f64::Angle as UomAngle;

// Public canonical unit type (SI, f64)
pub type Angle = UomAngle;

#[inline]
pub fn rad(v: f64) -> Angle {
    use uom::si::angle::radian;
    Angle::new::<radian>(v)
}

#[inline]
pub fn deg(v: f64) -> Angle {
    use uom::si::angle::degree;
    Angle::new::<degree>(v)
}

/// Angle value in radians, the unit every hyperflow relation works in.
#[inline]
pub fn radians(angle: Angle) -> f64 {
    use uom::si::angle::radian;
    angle.get::<radian>()
}

/// Angle value in degrees, used by the empirical fits tabulated in degrees.
#[inline]
pub fn degrees(angle: Angle) -> f64 {
    use uom::si::angle::degree;
    angle.get::<degree>()
}

pub mod constants {
    /// Specific gas constant of dry air [J/(kg·K)].
    pub const R_AIR: f64 = 287.058;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_radian_conversion() {
        let a = deg(180.0);
        assert!((radians(a) - std::f64::consts::PI).abs() < 1e-12);
        assert!((degrees(rad(std::f64::consts::FRAC_PI_2)) - 90.0).abs() < 1e-9);
    }
}
