//! # liftorque-core
//!
//! Torque computation engine for lifting a mass with a stepper motor.
//!
//! Given the mass of an object and the rated torque of a motor, the engine
//! derives the force of gravity on the object, the torque needed to hold it
//! still, and the total torque needed to accelerate it upward through a
//! shaft of fixed radius.
//!
//! This crate performs no I/O. Rendering the report to a terminal is the job
//! of the `liftorque` binary.
//!
//! ```
//! use liftorque_core::{LiftScenario, TorqueCalculator};
//!
//! let scenario = LiftScenario::new(10.0, 40.0)?;
//! let report = TorqueCalculator::compute(&scenario);
//! assert!((report.total_torque_nm - 6.403325).abs() < 1e-9);
//! # Ok::<(), liftorque_core::LiftError>(())
//! ```

pub mod calculator;
pub mod constants;
mod error;
pub mod report;
pub mod scenario;
pub mod units;

pub use calculator::TorqueCalculator;
pub use error::{LiftError, Quantity};
pub use report::TorqueReport;
pub use scenario::{parse_quantity, LiftScenario};
