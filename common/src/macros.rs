//! Status macros on top of `tracing`.
//!
//! The CLI formatter picks the prefix from the event level. `success!` is
//! routed to its own target so it can be told apart from a plain `info!`.

/// Target used by [`success!`] events.
pub const SUCCESS_TARGET: &str = "netsweep::success";

/// Target used for raw terminal output that must not get a status prefix.
pub const PRINT_TARGET: &str = "netsweep::print";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: $crate::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}
