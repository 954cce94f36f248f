//! Cross-crate tests: the scan pipeline end to end with scripted probers,
//! and the real TCP prober against loopback sockets.

#[cfg(test)]
mod discovery;
#[cfg(test)]
mod probing;
#[cfg(test)]
mod util;
