use std::net::Ipv4Addr;

/// Builds the `in-addr.arpa` name used in PTR queries.
pub fn reverse_address_to_ptr(ip: Ipv4Addr) -> String {
    let [a, b, c, d] = ip.octets();
    format!("{d}.{c}.{b}.{a}.in-addr.arpa")
}

pub fn is_private(ip: Ipv4Addr) -> bool {
    ip.is_private() || ip.is_loopback() || ip.is_link_local()
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
    fn ptr_name_reverses_octets() {
        let ip = Ipv4Addr::new(192, 168, 1, 50);
        assert_eq!(reverse_address_to_ptr(ip), "50.1.168.192.in-addr.arpa");
    }

    #[test]
    fn private_ranges() {
        assert!(is_private(Ipv4Addr::new(10, 1, 2, 3)));
        assert!(is_private(Ipv4Addr::new(192, 168, 0, 1)));
        assert!(is_private(Ipv4Addr::new(169, 254, 3, 4)));
        assert!(!is_private(Ipv4Addr::new(1, 1, 1, 1)));
    }
}
