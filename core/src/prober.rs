//! Single-target reachability checks.
//!
//! A prober answers one question about one target and always answers it:
//! every failure mode (timeout, refusal, missing privileges, a `ping` binary
//! that is not installed) is folded into `false` here, so the scheduler and
//! the sweeps only ever see clean booleans.

use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use netsweep_common::config::LivenessMethod;

use crate::network::{ping::PingProber, tcp::TcpProber};

/// Decides whether a host is alive.
#[async_trait]
pub trait HostProber: Send + Sync {
    /// `true` iff the host answered within `timeout`.
    async fn probe_host(&self, addr: Ipv4Addr, timeout: Duration) -> bool;
}

/// Decides whether a TCP port accepts connections.
#[async_trait]
pub trait PortProber: Send + Sync {
    /// `true` iff a TCP handshake with `addr:port` completed within `timeout`.
    ///
    /// Any established connection is closed before this returns.
    async fn probe_port(&self, addr: Ipv4Addr, port: u16, timeout: Duration) -> bool;
}

/// Picks the host prober for the configured liveness method.
pub fn host_prober(method: LivenessMethod) -> Arc<dyn HostProber> {
    match method {
        LivenessMethod::Ping => Arc::new(PingProber),
        LivenessMethod::Tcp => Arc::new(TcpProber),
    }
}

pub fn port_prober() -> Arc<dyn PortProber> {
    Arc::new(TcpProber)
}
