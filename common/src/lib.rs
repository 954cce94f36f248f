//! Shared building blocks for netsweep.
//!
//! Everything in here is free of concurrency and I/O policy: scan
//! configuration, the /24 range model, the static port table and the
//! handful of address helpers the other crates lean on.

#[macro_use]
mod macros;

pub mod config;
pub mod network;
pub mod utils;

pub use macros::{PRINT_TARGET, SUCCESS_TARGET};
