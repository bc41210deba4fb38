//! # liftorque Library
//!
//! This library exposes the liftorque CLI module for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;

// Re-export liftorque_core for convenience
pub use liftorque_core;
