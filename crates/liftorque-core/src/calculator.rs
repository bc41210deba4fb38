//! # Torque Calculator
//!
//! Single-pass derivation of the forces and torques involved in lifting a
//! mass with a motor turning a shaft of radius [`SHAFT_RADIUS_M`].
//!
//! Pipeline (each step depends only on earlier ones):
//! 1. gravity force      = m · g
//! 2. steady torque      = gravity force · r
//! 3. lift force         = m · a
//! 4. lift torque        = lift force · r
//! 5. total force        = lift force + gravity force
//! 6. total torque (N·m) = total force · r
//! 7. total torque (kg·cm)

use crate::constants::{GRAVITATIONAL_ACCELERATION, REQUIRED_ACCELERATION, SHAFT_RADIUS_M};
use crate::report::TorqueReport;
use crate::scenario::LiftScenario;
use crate::units::nm_to_kgcm;

/// Stateless torque calculator.
pub struct TorqueCalculator;

impl TorqueCalculator {
    /// Derive every quantity of the lift model for a scenario.
    #[must_use]
    pub fn compute(scenario: &LiftScenario) -> TorqueReport {
        let mass_kg = scenario.mass_kg;

        let gravity_force_n = mass_kg * GRAVITATIONAL_ACCELERATION;
        let steady_torque_nm = gravity_force_n * SHAFT_RADIUS_M;

        let lift_force_n = mass_kg * REQUIRED_ACCELERATION;
        let lift_torque_nm = lift_force_n * SHAFT_RADIUS_M;

        let total_force_n = lift_force_n + gravity_force_n;
        let total_torque_nm = total_force_n * SHAFT_RADIUS_M;
        let total_torque_kgcm = nm_to_kgcm(total_torque_nm);

        TorqueReport {
            scenario: *scenario,
            gravity_force_n,
            steady_torque_nm,
            lift_force_n,
            lift_torque_nm,
            total_force_n,
            total_torque_nm,
            total_torque_kgcm,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
