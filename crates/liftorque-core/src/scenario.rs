//! # Lift Scenario
//!
//! The validated input of one computation: the mass to lift and the rated
//! torque of the motor that is supposed to lift it.
//!
//! Validation rules:
//! - both values must be finite and must not carry a negative sign (`-0` included)
//! - the rated torque must be strictly positive
//! - the mass may be zero, but not so large that the lift force overflows
//!
//! A zero mass yields an all-zero report, which is physically degenerate but
//! well defined.

use crate::constants::{GRAVITATIONAL_ACCELERATION, REQUIRED_ACCELERATION};
use crate::error::{LiftError, Quantity};
use serde::Serialize;

/// One lift problem, fixed for the duration of a single invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LiftScenario {
    /// Mass of the object to lift (kg).
    pub mass_kg: f64,
    /// Rated torque of the stepper motor (kg·cm). Display only.
    pub rated_torque_kgcm: f64,
}

impl LiftScenario {
    /// Create a validated scenario.
    ///
    /// Returns [`LiftError::InvalidInput`] if either value is NaN, infinite
    /// or negative, if the rated torque is zero, or if the mass is too large
    /// for the derived forces to stay finite.
    pub fn new(mass_kg: f64, rated_torque_kgcm: f64) -> Result<Self, LiftError> {
        Ok(Self {
            mass_kg: validate(Quantity::Mass, mass_kg)?,
            rated_torque_kgcm: validate(Quantity::RatedTorque, rated_torque_kgcm)?,
        })
    }
}

/// Parse a command-line token as a value of the given quantity.
///
/// Surrounding whitespace is ignored. The parsed value goes through the same
/// checks as [`LiftScenario::new`], so a parse failure and a range failure
/// surface as the same error kind.
pub fn parse_quantity(quantity: Quantity, raw: &str) -> Result<f64, LiftError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LiftError::invalid(quantity, "value is empty"));
    }

    let value: f64 = trimmed.parse().map_err(|_| {
        LiftError::invalid(quantity, format!("expected a number, got {:?}", trimmed))
    })?;

    validate(quantity, value)
}

fn validate(quantity: Quantity, value: f64) -> Result<f64, LiftError> {
    if !value.is_finite() {
        return Err(LiftError::invalid(
            quantity,
            format!("{} is not a finite number", value),
        ));
    }
    if value.is_sign_negative() {
        return Err(LiftError::invalid(
            quantity,
            format!("{} {} is negative", value, quantity.unit()),
        ));
    }

    match quantity {
        Quantity::Mass => {
            // Same operations as the total force in the calculator; every
            // other derived value is smaller.
            let total_force_n =
                value * REQUIRED_ACCELERATION + value * GRAVITATIONAL_ACCELERATION;
            if !total_force_n.is_finite() {
                return Err(LiftError::invalid(
                    quantity,
                    format!("{} kg is too large to compute", value),
                ));
            }
        }
        Quantity::RatedTorque => {
            if value == 0.0 {
                return Err(LiftError::invalid(quantity, "must be greater than 0 kg·cm"));
            }
        }
    }

    Ok(value)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_inputs() {
        let scenario = LiftScenario::new(10.0, 40.0).unwrap();
        assert_eq!(scenario.mass_kg, 10.0);
        assert_eq!(scenario.rated_torque_kgcm, 40.0);
    }

    #[test]
    fn accepts_zero_mass() {
        assert!(LiftScenario::new(0.0, 40.0).is_ok());
    }

    #[test]
    fn rejects_negative_mass() {
        let err = LiftScenario::new(-1.0, 40.0).unwrap_err();
        assert_eq!(err.quantity(), Quantity::Mass);
    }

    #[test]
    fn rejects_negative_torque() {
        let err = LiftScenario::new(1.0, -40.0).unwrap_err();
        assert_eq!(err.quantity(), Quantity::RatedTorque);
    }

    #[test]
    fn rejects_zero_torque() {
        let err = LiftScenario::new(1.0, 0.0).unwrap_err();
        assert_eq!(err.quantity(), Quantity::RatedTorque);
        assert!(parse_quantity(Quantity::RatedTorque, "0").is_err());
    }

    #[test]
    fn rejects_negative_zero() {
        assert!(LiftScenario::new(-0.0, 40.0).is_err());
        assert!(LiftScenario::new(1.0, -0.0).is_err());

        let err = parse_quantity(Quantity::Mass, "-0").unwrap_err();
        assert!(err.to_string().contains("negative"));
        assert!(parse_quantity(Quantity::Mass, "-0.0").is_err());
    }

    #[test]
    fn rejects_mass_that_overflows() {
        let err = LiftScenario::new(1e308, 40.0).unwrap_err();
        assert_eq!(err.quantity(), Quantity::Mass);
        assert!(err.to_string().contains("too large"));
        assert!(parse_quantity(Quantity::Mass, "1e308").is_err());
    }

    #[test]
    fn accepts_large_mass_with_finite_forces() {
        assert!(LiftScenario::new(1e300, 40.0).is_ok());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(LiftScenario::new(f64::NAN, 1.0).is_err());
        assert!(LiftScenario::new(f64::INFINITY, 1.0).is_err());
        assert!(LiftScenario::new(1.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn parse_plain_and_padded_numbers() {
        assert_eq!(parse_quantity(Quantity::Mass, "10").unwrap(), 10.0);
        assert_eq!(parse_quantity(Quantity::Mass, " 2.5 ").unwrap(), 2.5);
        assert_eq!(parse_quantity(Quantity::RatedTorque, "4e1").unwrap(), 40.0);
    }

    #[test]
    fn parse_rejects_text() {
        let err = parse_quantity(Quantity::Mass, "ten").unwrap_err();
        assert!(matches!(
            err,
            LiftError::InvalidInput {
                quantity: Quantity::Mass,
                ..
            }
        ));
        assert!(err.to_string().contains("ten"));
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(parse_quantity(Quantity::RatedTorque, "   ").is_err());
    }

    #[test]
    fn parse_rejects_nan_literal() {
        // f64::from_str accepts "NaN" and "inf"; the range check must not.
        assert!(parse_quantity(Quantity::Mass, "NaN").is_err());
        assert!(parse_quantity(Quantity::Mass, "inf").is_err());
    }

    #[test]
    fn parse_rejects_negative() {
        let err = parse_quantity(Quantity::Mass, "-3").unwrap_err();
        assert!(err.to_string().contains("negative"));
    }
}
