use clap::{Parser, Subcommand};
use hf_aero::{
    AIR_RATIO_OF_SPECIFIC_HEATS, AeroError, InclinationSweep, LocalFlow, PressureMethod,
    ShockProperties, UnknownMethod, shock_deflection_angle,
};
use hf_core::units::{constants::R_AIR, deg, degrees, rad, radians};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Aero(#[from] AeroError),

    #[error(transparent)]
    Method(#[from] UnknownMethod),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "hf-cli")]
#[command(about = "HyperFlow CLI - supersonic/hypersonic surface pressure relations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one pressure-coefficient correlation
    Cp {
        /// Method name (e.g. newtonian, empirical_tangent_wedge, van_dyke_unified)
        method: String,
        /// Local inclination in degrees, positive facing into the flow
        #[arg(long, allow_negative_numbers = true)]
        inclination_deg: f64,
        /// Freestream Mach number
        #[arg(long)]
        mach: f64,
        /// Ratio of specific heats
        #[arg(long, default_value_t = AIR_RATIO_OF_SPECIFIC_HEATS)]
        gamma: f64,
    },
    /// Evaluate every correlation at one flow state
    Compare {
        /// Local inclination in degrees, positive facing into the flow
        #[arg(long, allow_negative_numbers = true)]
        inclination_deg: f64,
        /// Freestream Mach number
        #[arg(long)]
        mach: f64,
        /// Ratio of specific heats
        #[arg(long, default_value_t = AIR_RATIO_OF_SPECIFIC_HEATS)]
        gamma: f64,
    },
    /// Normal-shock jump properties
    Shock {
        /// Mach number normal to the shock
        #[arg(long)]
        normal_mach: f64,
        /// Ratio of specific heats
        #[arg(long, default_value_t = AIR_RATIO_OF_SPECIFIC_HEATS)]
        gamma: f64,
        /// Specific gas constant [J/(kg K)]
        #[arg(long, default_value_t = R_AIR)]
        gas_constant: f64,
    },
    /// Flow deflection behind an oblique shock
    Deflection {
        /// Shock angle in degrees
        #[arg(long)]
        shock_angle_deg: f64,
        /// Freestream Mach number
        #[arg(long)]
        mach: f64,
        /// Ratio of specific heats
        #[arg(long, default_value_t = AIR_RATIO_OF_SPECIFIC_HEATS)]
        gamma: f64,
    },
    /// Run an inclination sweep described by a JSON file
    Sweep {
        /// Path to the sweep JSON file (angles in radians)
        config_path: PathBuf,
    },
}

#[derive(Serialize)]
struct CpReport {
    method: String,
    inclination_deg: f64,
    mach_number: f64,
    gamma: f64,
    pressure_coefficient: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl CpReport {
    fn new(method: PressureMethod, flow: &LocalFlow, result: Result<f64, AeroError>) -> Self {
        let (pressure_coefficient, error) = match result {
            Ok(cp) => (Some(cp), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            method: method.name().to_string(),
            inclination_deg: degrees(rad(flow.inclination)),
            mach_number: flow.mach_number,
            gamma: flow.gamma,
            pressure_coefficient,
            error,
        }
    }
}

#[derive(Serialize)]
struct DeflectionReport {
    shock_angle_deg: f64,
    mach_number: f64,
    gamma: f64,
    deflection_angle_deg: f64,
}

#[derive(Serialize)]
struct SweepReport {
    method: String,
    num_successful: usize,
    num_failed: usize,
    points: Vec<CpReport>,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Cp {
            method,
            inclination_deg,
            mach,
            gamma,
        } => cmd_cp(&method, inclination_deg, mach, gamma),
        Commands::Compare {
            inclination_deg,
            mach,
            gamma,
        } => cmd_compare(inclination_deg, mach, gamma),
        Commands::Shock {
            normal_mach,
            gamma,
            gas_constant,
        } => cmd_shock(normal_mach, gamma, gas_constant),
        Commands::Deflection {
            shock_angle_deg,
            mach,
            gamma,
        } => cmd_deflection(shock_angle_deg, mach, gamma),
        Commands::Sweep { config_path } => cmd_sweep(&config_path),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_cp(method: &str, inclination_deg: f64, mach: f64, gamma: f64) -> CliResult<()> {
    let method: PressureMethod = method.parse()?;
    let flow = LocalFlow::new(radians(deg(inclination_deg)), mach, gamma);
    tracing::debug!(%method, ?flow, "evaluating pressure coefficient");

    let cp = method.evaluate(&flow)?;
    print_json(&CpReport::new(method, &flow, Ok(cp)))
}

fn cmd_compare(inclination_deg: f64, mach: f64, gamma: f64) -> CliResult<()> {
    let flow = LocalFlow::new(radians(deg(inclination_deg)), mach, gamma);
    let reports: Vec<CpReport> = PressureMethod::ALL
        .into_iter()
        .map(|method| CpReport::new(method, &flow, method.evaluate(&flow)))
        .collect();
    print_json(&reports)
}

fn cmd_shock(normal_mach: f64, gamma: f64, gas_constant: f64) -> CliResult<()> {
    let props = ShockProperties::solve(normal_mach, gamma, gas_constant)?;
    print_json(&props)
}

fn cmd_deflection(shock_angle_deg: f64, mach: f64, gamma: f64) -> CliResult<()> {
    let theta = shock_deflection_angle(radians(deg(shock_angle_deg)), mach, gamma)?;
    print_json(&DeflectionReport {
        shock_angle_deg,
        mach_number: mach,
        gamma,
        deflection_angle_deg: degrees(rad(theta)),
    })
}

fn cmd_sweep(config_path: &Path) -> CliResult<()> {
    tracing::info!("Loading sweep: {}", config_path.display());
    let text = std::fs::read_to_string(config_path).map_err(|source| CliError::Io {
        path: config_path.to_path_buf(),
        source,
    })?;
    let sweep: InclinationSweep = serde_json::from_str(&text)?;
    let outcome = sweep.evaluate()?;

    let points = outcome
        .points
        .into_iter()
        .map(|p| {
            let flow = LocalFlow::new(p.inclination, sweep.mach_number, sweep.gamma);
            CpReport::new(sweep.method, &flow, p.pressure_coefficient)
        })
        .collect();

    print_json(&SweepReport {
        method: sweep.method.name().to_string(),
        num_successful: outcome.num_successful,
        num_failed: outcome.num_failed,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn every_flag_has_help_text() {
        let cli = Cli::command();
        for subcommand in cli.get_subcommands() {
            for arg in subcommand.get_arguments() {
                if arg.get_id() == "help" {
                    continue;
                }
                assert!(
                    arg.get_help().is_some(),
                    "{} --{} has no help",
                    subcommand.get_name(),
                    arg.get_id()
                );
            }
        }
    }

    #[test]
    fn compare_accepts_negative_inclination() {
        let args = ["hf-cli", "compare", "--inclination-deg", "-15", "--mach", "6"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Compare {
                inclination_deg,
                mach,
                gamma,
            } => {
                assert_eq!(inclination_deg, -15.0);
                assert_eq!(mach, 6.0);
                assert_eq!(gamma, AIR_RATIO_OF_SPECIFIC_HEATS);
            }
            _ => panic!("expected compare"),
        }
    }
}
