//! # Report Module
//!
//! The result of one torque computation and its human-readable rendering.
//!
//! The report never states whether the motor is strong enough. It prints the
//! required torque next to the rated torque and leaves the comparison to the
//! reader.

use crate::constants::{REQUIRED_ACCELERATION, SHAFT_RADIUS_M};
use crate::scenario::LiftScenario;
use crate::units::kgcm_to_nm;
use serde::Serialize;
use std::fmt;

/// Every quantity derived from a [`LiftScenario`], in pipeline order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TorqueReport {
    /// The inputs this report was computed from.
    pub scenario: LiftScenario,
    /// Force of gravity on the object (N).
    pub gravity_force_n: f64,
    /// Torque to hold the object still (N·m).
    pub steady_torque_nm: f64,
    /// Force to accelerate the object upward (N).
    pub lift_force_n: f64,
    /// Torque to accelerate the object upward (N·m). Intermediate only.
    #[serde(skip)]
    pub lift_torque_nm: f64,
    /// Gravity plus lift force (N).
    pub total_force_n: f64,
    /// Torque to lift the object (N·m).
    pub total_torque_nm: f64,
    /// Torque to lift the object (kg·cm).
    pub total_torque_kgcm: f64,
}

impl TorqueReport {
    /// Format as plain text.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "object mass: {} kg (shaft radius {} m)\n\n",
            self.scenario.mass_kg, SHAFT_RADIUS_M
        ));
        output.push_str(&format!(
            "1. gravity pulls the object down with {:.6} N\n",
            self.gravity_force_n
        ));
        output.push_str(&format!(
            "2. holding the object still takes {:.6} N·m of torque\n",
            self.steady_torque_nm
        ));
        output.push_str(&format!(
            "3. lifting the object at {} m/s² takes:\n",
            REQUIRED_ACCELERATION
        ));
        output.push_str(&format!(
            "\t{:.6} N of force to accelerate the object\n",
            self.lift_force_n
        ));
        output.push_str(&format!("\t{:.6} N of force\n", self.total_force_n));
        output.push_str(&format!("\t{:.6} N·m of torque\n", self.total_torque_nm));
        output.push_str(&format!(
            "\t{:.6} kg·cm of torque\n",
            self.total_torque_kgcm
        ));
        output.push_str(&format!(
            "\nyour motor is rated at {} kg·cm ({:.6} N·m)\n",
            self.scenario.rated_torque_kgcm,
            kgcm_to_nm(self.scenario.rated_torque_kgcm)
        ));

        output
    }
}

impl fmt::Display for TorqueReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

// =============================================================================
// TESTS
// =============================================================================
