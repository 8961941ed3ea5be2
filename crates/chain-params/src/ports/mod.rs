//! Ports (interfaces) for the parameter registry
//!
//! Outbound ports for the ambient inputs the registry consumes: wall-clock
//! time, randomness for seed staleness, and startup flags.

pub mod outbound;

pub use outbound::*;
