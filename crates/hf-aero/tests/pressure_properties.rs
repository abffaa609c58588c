//! Cross-method properties of the pressure-coefficient correlations.

use hf_aero::{
    AeroError, LocalFlow, PressureMethod, empirical_tangent_cone_pressure_coefficient,
    empirical_tangent_wedge_pressure_coefficient, inverse_prandtl_meyer_function,
    local_to_static_pressure_ratio, newtonian_pressure_coefficient,
    prandtl_meyer_freestream_pressure_coefficient, prandtl_meyer_function,
    vacuum_pressure_coefficient,
};
use hf_core::numeric::{Tolerances, nearly_equal};
use std::f64::consts::FRAC_PI_2;

fn inclination_grid() -> Vec<f64> {
    let n = 37;
    (0..n)
        .map(|i| -FRAC_PI_2 + i as f64 * (2.0 * FRAC_PI_2) / (n - 1) as f64)
        .map(|theta| theta.clamp(-FRAC_PI_2, FRAC_PI_2))
        .collect()
}

#[test]
fn vacuum_is_a_lower_bound_for_every_method() {
    for mach in [1.5, 3.0, 6.0, 12.0, 25.0] {
        let vacuum = vacuum_pressure_coefficient(mach, 1.4).unwrap();
        for theta in inclination_grid() {
            let flow = LocalFlow::air(theta, mach);
            for method in PressureMethod::ALL {
                // Methods outside their regime report an error; only defined values are bounded.
                if let Ok(cp) = method.evaluate(&flow) {
                    assert!(
                        cp >= vacuum,
                        "{method} at theta={theta}, M={mach}: cp={cp} < vacuum={vacuum}"
                    );
                }
            }
        }
    }
}

#[test]
fn inverse_prandtl_meyer_round_trip() {
    let mut mach = 1.0;
    while mach <= 5.0 {
        let nu = prandtl_meyer_function(mach, 1.4).unwrap();
        let recovered = inverse_prandtl_meyer_function(nu).unwrap();
        assert!(
            nearly_equal(recovered, mach, Tolerances::CURVE_FIT),
            "M={mach}: recovered {recovered}"
        );
        mach += 0.1;
    }
}

#[test]
fn pressure_ratio_reference_points() {
    for gamma in [1.1, 1.3, 1.4, 5.0 / 3.0] {
        assert_eq!(local_to_static_pressure_ratio(0.0, gamma).unwrap(), 1.0);
        assert_eq!(prandtl_meyer_function(1.0, gamma).unwrap(), 0.0);
    }
    let ratio = local_to_static_pressure_ratio(2.0, 1.4).unwrap();
    assert!((ratio - 0.1278).abs() < 1e-4);
}

#[test]
fn newtonian_reference_points_and_monotonicity() {
    assert!((newtonian_pressure_coefficient(FRAC_PI_2).unwrap() - 2.0).abs() < 1e-12);
    assert!((newtonian_pressure_coefficient(30.0_f64.to_radians()).unwrap() - 0.5).abs() < 1e-12);

    let mut previous = newtonian_pressure_coefficient(0.0).unwrap();
    for deg in 1..=90 {
        let cp = newtonian_pressure_coefficient((deg as f64).to_radians()).unwrap();
        assert!(cp >= previous, "not monotone at {deg} deg");
        previous = cp;
    }
}

#[test]
fn air_only_fits_reject_other_gases() {
    for gamma in [1.2, 1.3, 1.67] {
        assert!(matches!(
            empirical_tangent_wedge_pressure_coefficient(0.2, 5.0, gamma),
            Err(AeroError::UnsupportedParameter { .. })
        ));
        assert!(matches!(
            empirical_tangent_cone_pressure_coefficient(0.2, 5.0, gamma),
            Err(AeroError::UnsupportedParameter { .. })
        ));
        assert!(matches!(
            prandtl_meyer_freestream_pressure_coefficient(-0.2, 5.0, gamma),
            Err(AeroError::UnsupportedParameter { .. })
        ));
    }
}

#[test]
fn supersonic_methods_reject_subsonic_mach() {
    let flow = LocalFlow::air(0.2, 0.8);
    for method in PressureMethod::ALL {
        let result = method.evaluate(&flow);
        if method == PressureMethod::Newtonian {
            assert!(result.is_ok());
        } else {
            assert!(
                matches!(result, Err(AeroError::Domain { .. })),
                "{method}: {result:?}"
            );
        }
    }
}
