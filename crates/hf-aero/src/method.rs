//! Uniform selection and evaluation of the pressure-coefficient correlations.
//!
//! A force-model assembler usually picks one correlation per surface part from
//! configuration (e.g. tangent wedge on the windward side, Prandtl-Meyer on the
//! leeward side). `PressureMethod` names those correlations as data so they can
//! be stored in configuration and evaluated against a `LocalFlow`.

use crate::constants::AIR_RATIO_OF_SPECIFIC_HEATS;
use crate::error::AeroResult;
use crate::isentropic::stagnation_pressure_coefficient;
use crate::pressure::{
    FlowTurn, acm_empirical_pressure_coefficient, empirical_tangent_cone_pressure_coefficient,
    empirical_tangent_wedge_pressure_coefficient, hankey_flat_surface_pressure_coefficient,
    high_mach_base_pressure_coefficient, modified_dahlem_buck_pressure_coefficient,
    modified_newtonian_pressure_coefficient, newtonian_pressure_coefficient,
    prandtl_meyer_freestream_pressure_coefficient, smyth_delta_wing_pressure_coefficient,
    vacuum_pressure_coefficient, van_dyke_unified_pressure_coefficient,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Flow state at one surface element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalFlow {
    /// Local inclination [rad], positive when facing into the flow
    pub inclination: f64,
    /// Freestream Mach number
    pub mach_number: f64,
    /// Ratio of specific heats
    #[serde(default = "default_gamma")]
    pub gamma: f64,
}

fn default_gamma() -> f64 {
    AIR_RATIO_OF_SPECIFIC_HEATS
}

impl LocalFlow {
    pub fn new(inclination: f64, mach_number: f64, gamma: f64) -> Self {
        Self {
            inclination,
            mach_number,
            gamma,
        }
    }

    /// Flow of air (γ = 1.4).
    pub fn air(inclination: f64, mach_number: f64) -> Self {
        Self::new(inclination, mach_number, AIR_RATIO_OF_SPECIFIC_HEATS)
    }
}

/// Named pressure-coefficient correlation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum PressureMethod {
    Newtonian,
    /// Uses the given stagnation coefficient, or the Rayleigh-Pitot value for the flow.
    ModifiedNewtonian {
        #[serde(default)]
        stagnation_pressure_coefficient: Option<f64>,
    },
    EmpiricalTangentWedge,
    EmpiricalTangentCone,
    ModifiedDahlemBuck,
    HankeyFlatSurface,
    SmythDeltaWing,
    /// Uses the given turn, or the one implied by the sign of the inclination.
    VanDykeUnified {
        #[serde(default)]
        turn: Option<FlowTurn>,
    },
    PrandtlMeyerFreestream,
    Vacuum,
    HighMachBase,
    AcmEmpirical,
}

impl PressureMethod {
    /// Every correlation with its defaults, in a stable order.
    pub const ALL: [PressureMethod; 12] = [
        PressureMethod::Newtonian,
        PressureMethod::ModifiedNewtonian {
            stagnation_pressure_coefficient: None,
        },
        PressureMethod::EmpiricalTangentWedge,
        PressureMethod::EmpiricalTangentCone,
        PressureMethod::ModifiedDahlemBuck,
        PressureMethod::HankeyFlatSurface,
        PressureMethod::SmythDeltaWing,
        PressureMethod::VanDykeUnified { turn: None },
        PressureMethod::PrandtlMeyerFreestream,
        PressureMethod::Vacuum,
        PressureMethod::HighMachBase,
        PressureMethod::AcmEmpirical,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PressureMethod::Newtonian => "newtonian",
            PressureMethod::ModifiedNewtonian { .. } => "modified_newtonian",
            PressureMethod::EmpiricalTangentWedge => "empirical_tangent_wedge",
            PressureMethod::EmpiricalTangentCone => "empirical_tangent_cone",
            PressureMethod::ModifiedDahlemBuck => "modified_dahlem_buck",
            PressureMethod::HankeyFlatSurface => "hankey_flat_surface",
            PressureMethod::SmythDeltaWing => "smyth_delta_wing",
            PressureMethod::VanDykeUnified { .. } => "van_dyke_unified",
            PressureMethod::PrandtlMeyerFreestream => "prandtl_meyer_freestream",
            PressureMethod::Vacuum => "vacuum",
            PressureMethod::HighMachBase => "high_mach_base",
            PressureMethod::AcmEmpirical => "acm_empirical",
        }
    }

    /// Whether the correlation is an air-only fit that rejects γ ≠ 1.4.
    pub fn requires_air(&self) -> bool {
        matches!(
            self,
            PressureMethod::EmpiricalTangentWedge
                | PressureMethod::EmpiricalTangentCone
                | PressureMethod::PrandtlMeyerFreestream
        )
    }

    /// Pressure coefficient for the given local flow.
    pub fn evaluate(&self, flow: &LocalFlow) -> AeroResult<f64> {
        let LocalFlow {
            inclination,
            mach_number,
            gamma,
        } = *flow;

        match *self {
            PressureMethod::Newtonian => newtonian_pressure_coefficient(inclination),
            PressureMethod::ModifiedNewtonian {
                stagnation_pressure_coefficient: stagnation_cp,
            } => {
                let stagnation_cp = match stagnation_cp {
                    Some(value) => value,
                    None => stagnation_pressure_coefficient(mach_number, gamma)?,
                };
                modified_newtonian_pressure_coefficient(inclination, stagnation_cp)
            }
            PressureMethod::EmpiricalTangentWedge => {
                empirical_tangent_wedge_pressure_coefficient(inclination, mach_number, gamma)
            }
            PressureMethod::EmpiricalTangentCone => {
                empirical_tangent_cone_pressure_coefficient(inclination, mach_number, gamma)
            }
            PressureMethod::ModifiedDahlemBuck => {
                modified_dahlem_buck_pressure_coefficient(inclination, mach_number)
            }
            PressureMethod::HankeyFlatSurface => {
                hankey_flat_surface_pressure_coefficient(inclination, mach_number)
            }
            PressureMethod::SmythDeltaWing => {
                smyth_delta_wing_pressure_coefficient(inclination, mach_number)
            }
            PressureMethod::VanDykeUnified { turn } => {
                let turn = turn.unwrap_or_else(|| FlowTurn::from_inclination(inclination));
                van_dyke_unified_pressure_coefficient(inclination, mach_number, gamma, turn)
            }
            PressureMethod::PrandtlMeyerFreestream => {
                prandtl_meyer_freestream_pressure_coefficient(inclination, mach_number, gamma)
            }
            PressureMethod::Vacuum => vacuum_pressure_coefficient(mach_number, gamma),
            PressureMethod::HighMachBase => high_mach_base_pressure_coefficient(mach_number),
            PressureMethod::AcmEmpirical => {
                acm_empirical_pressure_coefficient(inclination, mach_number)
            }
        }
    }
}

impl fmt::Display for PressureMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error for an unrecognised method name.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown pressure method: {0}")]
pub struct UnknownMethod(pub String);

impl FromStr for PressureMethod {
    type Err = UnknownMethod;

    /// Parses the snake_case name, with hyphens accepted in place of underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        PressureMethod::ALL
            .into_iter()
            .find(|method| method.name() == normalized)
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

/// Evaluate a method, reporting the method name on failure.
pub fn evaluate_logged(method: PressureMethod, flow: &LocalFlow) -> AeroResult<f64> {
    let result = method.evaluate(flow);
    if let Err(err) = &result {
        tracing::debug!(method = method.name(), ?flow, %err, "pressure coefficient undefined");
    }
    result
}
