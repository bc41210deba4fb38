//! # CLI Module
//!
//! Command line surface of liftorque.
//!
//! Both numeric flags are parsed by clap through [`parse_quantity`], so a
//! missing or malformed value is reported as a usage error before any
//! computation runs. The report goes to stdout; diagnostics go to stderr
//! through `tracing`.

use clap::Parser;
use liftorque_core::{
    parse_quantity, LiftError, LiftScenario, Quantity, TorqueCalculator, TorqueReport,
};
use std::io::Write;
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

// =============================================================================
// ARGUMENTS
// =============================================================================

/// Compute the torque a stepper motor needs to lift a mass.
#[derive(Debug, Parser)]
#[command(name = "liftorque", version, about, long_about = None)]
pub struct Cli {
    /// Mass of the object to lift (kg)
    #[arg(
        short = 'w',
        long = "weight",
        value_name = "KG",
        value_parser = parse_mass,
        allow_negative_numbers = true
    )]
    pub weight: f64,

    /// Rated torque of the stepper motor (kg·cm)
    #[arg(
        short = 't',
        long = "torque",
        value_name = "KGCM",
        value_parser = parse_rated_torque,
        allow_negative_numbers = true
    )]
    pub torque: f64,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Log computation steps to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_mass(raw: &str) -> Result<f64, LiftError> {
    parse_quantity(Quantity::Mass, raw)
}

fn parse_rated_torque(raw: &str) -> Result<f64, LiftError> {
    parse_quantity(Quantity::RatedTorque, raw)
}

// =============================================================================
// ERRORS
// =============================================================================

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Rejected input.
    #[error(transparent)]
    Lift(#[from] LiftError),

    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error. Input errors share clap's usage
    /// error status.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Lift(_) => ExitCode::from(2),
            Self::Io(_) | Self::Json(_) => ExitCode::FAILURE,
        }
    }
}

// =============================================================================
// LOGGING
// =============================================================================

/// Install the stderr tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects `debug` over the
/// default `warn`. Calling this twice is harmless.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Run one computation and write the report to `out`.
///
/// Returns the computed report so callers can inspect it.
pub fn cmd_compute<W: Write>(
    out: &mut W,
    mass_kg: f64,
    rated_torque_kgcm: f64,
    json: bool,
) -> Result<TorqueReport, CliError> {
    let scenario = LiftScenario::new(mass_kg, rated_torque_kgcm)?;
    tracing::debug!(
        mass_kg = scenario.mass_kg,
        rated_torque_kgcm = scenario.rated_torque_kgcm,
        "computing lift torque"
    );

    let report = TorqueCalculator::compute(&scenario);
    tracing::debug!(
        gravity_force_n = report.gravity_force_n,
        steady_torque_nm = report.steady_torque_nm,
        lift_force_n = report.lift_force_n,
        lift_torque_nm = report.lift_torque_nm,
        total_force_n = report.total_force_n,
        total_torque_nm = report.total_torque_nm,
        total_torque_kgcm = report.total_torque_kgcm,
        "lift torque computed"
    );

    write_report(out, &report, json)?;
    Ok(report)
}

/// Write a report as text or pretty-printed JSON.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &TorqueReport,
    json: bool,
) -> Result<(), CliError> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
    } else {
        out.write_all(report.to_text().as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

/// Entry point used by `main`: compute, print, map failures to an exit code.
pub fn run(cli: &Cli) -> ExitCode {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    run_with(cli, &mut stdout.lock(), &mut stderr.lock())
}

/// [`run`] with explicit report and error streams.
///
/// A failure is reported once, as a single `error:` line on `err`.
pub fn run_with<W: Write, E: Write>(cli: &Cli, out: &mut W, err: &mut E) -> ExitCode {
    match cmd_compute(out, cli.weight, cli.torque, cli.json) {
        Ok(_) => ExitCode::SUCCESS,
        Err(failure) => {
            // Nothing left to report to if stderr is gone too.
            let _ = writeln!(err, "error: {failure}");
            failure.exit_code()
        }
    }
}
