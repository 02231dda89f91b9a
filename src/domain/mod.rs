//! Domain layer: models, error taxonomy, and port traits.
//!
//! Everything in this module is free of I/O. Remote systems are reached
//! exclusively through the port traits in [`ports`], which the adapter
//! layer implements.

pub mod errors;
pub mod models;
pub mod ports;
