//! CycleSync core library
//!
//! Calculation core for fitness and cycle tracking: unit conversion, energy
//! estimates, macro math, injection rotation and scheduling, and progress
//! trends. Everything here is a pure computation over caller-supplied values;
//! the dashboard pages own all state and presentation.

pub mod error;
pub mod fitness;
pub mod measure;
pub mod models;

pub use error::{CalcError, CalcResult};
