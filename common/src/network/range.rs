use std::net::Ipv4Addr;

use pnet::ipnetwork::Ipv4Network;

/// Prefix length of the only network shape netsweep sweeps.
pub const SUBNET_PREFIX: u8 = 24;

/// An inclusive run of IPv4 addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }

    /// Addresses in ascending order, both ends included.
    pub fn to_iter(&self) -> impl Iterator<Item = Ipv4Addr> + use<> {
        let start: u32 = self.start_addr.into();
        let end: u32 = self.end_addr.into();
        (start..=end).map(Ipv4Addr::from)
    }

    pub fn len(&self) -> usize {
        let start: u32 = self.start_addr.into();
        let end: u32 = self.end_addr.into();
        if end < start {
            0
        } else {
            (end - start) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.start_addr <= addr && addr <= self.end_addr
    }
}

/// The /24 network `sample` lives in, written as `a.b.c.0/24`.
pub fn subnet_of(sample: Ipv4Addr) -> Ipv4Network {
    let [a, b, c, _] = sample.octets();
    // A /24 prefix is always valid, so this cannot fail.
    match Ipv4Network::new(Ipv4Addr::new(a, b, c, 0), SUBNET_PREFIX) {
        Ok(net) => net,
        Err(_) => unreachable!("/{SUBNET_PREFIX} is a valid IPv4 prefix"),
    }
}

/// Usable host addresses of the /24 around `sample`: `.1` through `.254`.
///
/// The network and broadcast addresses are never part of the range.
pub fn subnet_hosts(sample: Ipv4Addr) -> Ipv4Range {
    let net: Ipv4Network = subnet_of(sample);
    let start: u32 = u32::from(net.network()).saturating_add(1);
    let end: u32 = u32::from(net.broadcast()).saturating_sub(1);
    Ipv4Range::new(Ipv4Addr::from(start), Ipv4Addr::from(end))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
