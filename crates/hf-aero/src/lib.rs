//! hf-aero: compressible-flow relations for supersonic and hypersonic surface pressures.
//!
//! Provides:
//! - Isentropic and Prandtl-Meyer relations
//! - Local pressure-coefficient correlations (Newtonian family, tangent wedge/cone,
//!   Dahlem-Buck, Hankey, Smyth, van Dyke unified, Prandtl-Meyer expansion, ACM,
//!   vacuum and base values)
//! - Rankine-Hugoniot shock relations and the θ-β-M deflection relation
//! - A serializable method selector and a parallel inclination sweep
//!
//! Every relation is a pure function of its scalar inputs, so all of them may be
//! called from any number of threads. Inputs are checked at the boundary and a
//! relation asked for a value outside its regime returns an [`AeroError`]
//! rather than NaN.
//!
//! Angles are in radians; a positive inclination faces into the flow.
//!
//! # Example
//!
//! ```
//! use hf_aero::{LocalFlow, PressureMethod, prandtl_meyer_function};
//!
//! let nu = prandtl_meyer_function(2.0, 1.4).unwrap();
//! assert!((nu - 0.4604).abs() < 1e-3);
//!
//! let flow = LocalFlow::air(10.0_f64.to_radians(), 6.0);
//! let cp = PressureMethod::EmpiricalTangentWedge.evaluate(&flow).unwrap();
//! assert!(cp > 0.0);
//! ```

pub mod constants;
pub mod error;
pub mod isentropic;
pub mod method;
pub mod pressure;
pub mod shock;
pub mod sweep;
pub mod validate;

// Re-exports for ergonomics
pub use constants::{
    AIR_RATIO_OF_SPECIFIC_HEATS, MAXIMUM_PRANDTL_MEYER_FUNCTION_VALUE, PRANDTL_MEYER_PARAMETER_1,
    PRANDTL_MEYER_PARAMETER_2, PRANDTL_MEYER_PARAMETER_3, PRANDTL_MEYER_PARAMETER_4,
    PRANDTL_MEYER_PARAMETER_5,
};
pub use error::{AeroError, AeroResult};
pub use isentropic::{
    inverse_prandtl_meyer_function, local_to_static_pressure_ratio, prandtl_meyer_function,
    stagnation_pressure_coefficient,
};
pub use method::{LocalFlow, PressureMethod, UnknownMethod};
pub use pressure::{
    FlowTurn, acm_empirical_pressure_coefficient, empirical_tangent_cone_pressure_coefficient,
    empirical_tangent_wedge_pressure_coefficient, hankey_flat_surface_pressure_coefficient,
    high_mach_base_pressure_coefficient, modified_dahlem_buck_pressure_coefficient,
    modified_newtonian_pressure_coefficient, newtonian_pressure_coefficient,
    prandtl_meyer_freestream_pressure_coefficient,
    prandtl_meyer_freestream_pressure_coefficient_with_freestream_function,
    smyth_delta_wing_pressure_coefficient, vacuum_pressure_coefficient,
    van_dyke_unified_pressure_coefficient,
};
pub use shock::{
    ShockProperties, shock_deflection_angle, shock_density_ratio, shock_entropy_jump,
    shock_pressure_ratio, shock_temperature_ratio, shock_total_pressure_ratio,
};
pub use sweep::{InclinationSweep, SweepOutcome, SweepPoint};
