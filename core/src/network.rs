//! Concrete probers. Everything here talks to the OS network stack.

pub mod ping;
pub mod tcp;
