use std::net::Ipv4Addr;
use std::time::Duration;

use netsweep_common::config::{Config, LivenessMethod};
use netsweep_core::network::tcp::TcpProber;
use netsweep_core::prober::{self, HostProber, PortProber};
use netsweep_core::scanner::PortSweep;
use tokio::net::TcpListener;

const TIMEOUT: Duration = Duration::from_millis(1_000);

#[tokio::test]
async fn tcp_prober_tells_open_from_closed() -> anyhow::Result<()> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
    let open = listener.local_addr()?.port();

    let closed = {
        let tmp = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
        tmp.local_addr()?.port()
    };

    assert!(TcpProber.probe_port(Ipv4Addr::LOCALHOST, open, TIMEOUT).await);
    assert!(!TcpProber.probe_port(Ipv4Addr::LOCALHOST, closed, TIMEOUT).await);
    Ok(())
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn probe_port_leaves_no_socket_behind() -> anyhow::Result<()> {
    use crate::util::open_fd_count;

    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
    let port = listener.local_addr()?.port();

    // Warm up so lazily created runtime descriptors are not counted as leaks.
    assert!(TcpProber.probe_port(Ipv4Addr::LOCALHOST, port, TIMEOUT).await);

    let before = open_fd_count();
    for _ in 0..20 {
        assert!(TcpProber.probe_port(Ipv4Addr::LOCALHOST, port, TIMEOUT).await);
    }
    let after = open_fd_count();

    assert_eq!(before, after, "probe_port leaked descriptors");
    Ok(())
}

#[tokio::test]
async fn port_sweep_on_unreachable_host_is_empty_not_an_error() {
    // TEST-NET-3 is never routed; every connect fails or times out.
    let cfg = Config {
        port_timeout: Duration::from_millis(100),
        ..Config::default()
    };
    let sweep = PortSweep::new(prober::port_prober(), &cfg);

    assert!(sweep.sweep(Ipv4Addr::new(203, 0, 113, 1)).await.is_empty());
}

#[tokio::test]
async fn tcp_liveness_marks_loopback_alive() {
    let prober = prober::host_prober(LivenessMethod::Tcp);
    assert!(prober.probe_host(Ipv4Addr::LOCALHOST, TIMEOUT).await);
}
