//! # Physical Constants
//!
//! Fixed parameters of the lift model. They are read-only for the whole
//! process; nothing in the workspace overrides them.

/// Radius of the motor output shaft (m).
pub const SHAFT_RADIUS_M: f64 = 0.05;

/// Standard gravity (m/s²).
pub const GRAVITATIONAL_ACCELERATION: f64 = 9.80665;

/// Upward acceleration the motor must impart to the object (m/s²).
pub const REQUIRED_ACCELERATION: f64 = 3.0;

/// kg·cm per N·m.
pub const NM_TO_KGCM: f64 = 10.197162129779;
