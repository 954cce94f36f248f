use std::net::{IpAddr, Ipv4Addr, SocketAddr, UdpSocket};

/// Well-known public address used only to make the OS pick an outbound route.
/// No packet is sent: `connect` on a UDP socket just fixes the route.
const ROUTE_PROBE_ADDR: (Ipv4Addr, u16) = (Ipv4Addr::new(8, 8, 8, 8), 80);

/// Returns the IPv4 address of the interface that carries outbound traffic.
///
/// Falls back to `127.0.0.1` when the OS cannot tell (no route, no network).
pub fn local_ipv4() -> Ipv4Addr {
    match resolve_route_source_ip(ROUTE_PROBE_ADDR) {
        Ok(ip) => ip,
        Err(e) => {
            warn!("Could not detect local address ({e}), falling back to loopback");
            Ipv4Addr::LOCALHOST
        }
    }
}

fn resolve_route_source_ip(target: (Ipv4Addr, u16)) -> anyhow::Result<Ipv4Addr> {
    let socket: UdpSocket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
    socket.connect(target)?;
    let local: SocketAddr = socket.local_addr()?;

    match local.ip() {
        IpAddr::V4(ip) if !ip.is_unspecified() => Ok(ip),
        other => anyhow::bail!("route resolved to unusable source address {other}"),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_ipv4_never_returns_unspecified() {
        let ip = local_ipv4();
        assert!(!ip.is_unspecified());
    }

    #[test]
    fn route_to_loopback_uses_loopback_source() {
        let ip = resolve_route_source_ip((Ipv4Addr::LOCALHOST, 9)).unwrap();
        assert!(ip.is_loopback());
    }
}
