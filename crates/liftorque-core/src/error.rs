//! # Error Types
//!
//! The engine has exactly one failure mode: an input quantity that is
//! missing, not a number, or outside the accepted range.

use std::fmt;
use thiserror::Error;

/// The input quantity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Mass of the object to lift (kg).
    Mass,
    /// Rated torque of the stepper motor (kg·cm).
    RatedTorque,
}

impl Quantity {
    /// Unit symbol used when displaying this quantity.
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::Mass => "kg",
            Self::RatedTorque => "kg·cm",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mass => f.write_str("mass"),
            Self::RatedTorque => f.write_str("rated torque"),
        }
    }
}

/// Errors from the lift torque engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiftError {
    /// An input could not be parsed or was out of range.
    #[error("invalid {quantity}: {reason}")]
    InvalidInput {
        /// Which input was rejected.
        quantity: Quantity,
        /// Human-readable explanation.
        reason: String,
    },
}

impl LiftError {
    pub(crate) fn invalid(quantity: Quantity, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            quantity,
            reason: reason.into(),
        }
    }

    /// The quantity this error refers to.
    #[must_use]
    pub fn quantity(&self) -> Quantity {
        match self {
            Self::InvalidInput { quantity, .. } => *quantity,
        }
    }
}
