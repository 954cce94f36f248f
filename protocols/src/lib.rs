//! Wire codecs netsweep speaks on its own behalf.
//!
//! Probing itself goes through the OS (TCP connect, `ping`), so the only
//! protocol built by hand is the DNS PTR exchange used for hostnames.

pub mod dns;
