//! Sweeps built on top of the [`scheduler`](crate::scheduler).
//!
//! * [`network::NetworkSweep`] walks the 254 host addresses of a /24 and
//!   keeps the ones a [`HostProber`](crate::prober::HostProber) calls alive.
//! * [`ports::PortSweep`] walks the static port table against one host and
//!   keeps the ports a [`PortProber`](crate::prober::PortProber) calls open.
//! * [`resolver`] turns a live address into a hostname, when it can.
//!
//! None of these keep state between calls; running a sweep twice scans twice.

pub mod network;
pub mod ports;
pub mod resolver;

pub use network::NetworkSweep;
pub use ports::PortSweep;
pub use resolver::{DnsResolver, HostnameLookup, NoLookup};
