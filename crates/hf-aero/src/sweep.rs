//! Inclination sweeps over one correlation.
//!
//! Evaluates a `PressureMethod` at evenly spaced inclinations for a fixed
//! freestream, in parallel. A point outside the method's regime is reported as
//! a failed point; it does not abort the sweep.

use crate::constants::AIR_RATIO_OF_SPECIFIC_HEATS;
use crate::error::{AeroError, AeroResult};
use crate::method::{LocalFlow, PressureMethod, evaluate_logged};
use crate::validate::check_inclination;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Definition of an inclination sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InclinationSweep {
    pub method: PressureMethod,
    pub mach_number: f64,
    #[serde(default = "default_gamma")]
    pub gamma: f64,
    /// First inclination [rad]
    pub start: f64,
    /// Last inclination [rad]
    pub end: f64,
    pub num_points: usize,
}

fn default_gamma() -> f64 {
    AIR_RATIO_OF_SPECIFIC_HEATS
}

/// One evaluated sweep point.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    pub inclination: f64,
    pub pressure_coefficient: AeroResult<f64>,
}

/// Evaluated sweep, ordered by inclination index.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepOutcome {
    pub points: Vec<SweepPoint>,
    pub num_successful: usize,
    pub num_failed: usize,
}

impl SweepOutcome {
    /// Inclinations and coefficients of the successful points.
    pub fn successful(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .filter_map(|p| {
                p.pressure_coefficient
                    .as_ref()
                    .ok()
                    .map(|cp| (p.inclination, *cp))
            })
            .collect()
    }
}

impl InclinationSweep {
    /// Check the sweep bounds before any point is evaluated.
    pub fn validate(&self) -> AeroResult<()> {
        if self.num_points < 2 {
            return Err(AeroError::Domain {
                what: "sweep point count",
                value: self.num_points as f64,
            });
        }
        check_inclination(self.start)?;
        check_inclination(self.end)?;
        Ok(())
    }

    /// Evenly spaced inclinations from `start` to `end` inclusive.
    pub fn points(&self) -> AeroResult<Vec<f64>> {
        self.validate()?;

        let delta = (self.end - self.start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| self.start + i as f64 * delta)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        Ok(points)
    }

    /// Evaluate every point in parallel.
    pub fn evaluate(&self) -> AeroResult<SweepOutcome> {
        let inclinations = self.points()?;
        tracing::debug!(
            method = self.method.name(),
            num_points = inclinations.len(),
            "evaluating inclination sweep"
        );

        let points: Vec<SweepPoint> = inclinations
            .par_iter()
            .map(|&inclination| {
                let flow = LocalFlow::new(inclination, self.mach_number, self.gamma);
                SweepPoint {
                    inclination,
                    pressure_coefficient: evaluate_logged(self.method, &flow),
                }
            })
            .collect();

        let num_successful = points
            .iter()
            .filter(|p| p.pressure_coefficient.is_ok())
            .count();
        let num_failed = points.len() - num_successful;

        Ok(SweepOutcome {
            points,
            num_successful,
            num_failed,
        })
    }
}
