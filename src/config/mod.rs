//! Configuration and parameters
//!
//! Compile-time constants and the per-variant simulation settings.

pub mod constants;
pub mod sim_params;

pub use constants::*;
pub use sim_params::*;
