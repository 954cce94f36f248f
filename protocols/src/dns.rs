use std::net::Ipv4Addr;

use dns_parser::{Packet, RData};
use pnet::packet::dns::{DnsClass, DnsQuery, DnsTypes, MutableDnsPacket, Opcode, Retcode};
use thiserror::Error;

use netsweep_common::utils::ip;

pub const DNS_HDR_LEN: usize = 12;
pub const DNS_PORT: u16 = 53;

const MAX_LABEL_LEN: usize = 63;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DnsError {
    #[error("truncated or malformed DNS packet")]
    Malformed,
    #[error("label '{0}' exceeds 63 bytes")]
    LabelTooLong(String),
    #[error("no PTR record in response")]
    NoPtrRecord,
}

/// Extracts the transaction id and the first PTR name from a DNS response.
///
/// Record counts in the header are checked against the body, so a short or
/// lying packet is an error rather than a panic.
pub fn get_hostname(payload: &[u8]) -> Result<(u16, String), DnsError> {
    let packet: Packet = Packet::parse(payload).map_err(|_| DnsError::Malformed)?;
    let hostname: String = packet
        .answers
        .iter()
        .find_map(|record| match &record.data {
            RData::PTR(ptr) => Some(ptr.0.to_string()).filter(|name| !name.is_empty()),
            _ => None,
        })
        .ok_or(DnsError::NoPtrRecord)?;

    Ok((packet.header.id, hostname))
}

/// Builds a recursive PTR query for `ip_addr` with the given transaction id.
pub fn create_ptr_packet(ip_addr: Ipv4Addr, id: u16) -> Result<Vec<u8>, DnsError> {
    let query: DnsQuery = create_ptr_query(ip_addr)?;
    let q_fixed_len: usize = 4;
    let qlen: usize = query.qname.len() + q_fixed_len;
    let total: usize = DNS_HDR_LEN + qlen;
    let mut buffer: Vec<u8> = vec![0u8; total];

    {
        let mut dns: MutableDnsPacket =
            MutableDnsPacket::new(&mut buffer).ok_or(DnsError::Malformed)?;
        dns.set_id(id);
        dns.set_is_response(0);
        dns.set_opcode(Opcode::StandardQuery);
        dns.set_is_authoriative(0);
        dns.set_is_truncated(0);
        dns.set_is_recursion_desirable(1);
        dns.set_is_recursion_available(0);
        dns.set_zero_reserved(0);
        dns.set_is_non_authenticated_data(0);
        dns.set_rcode(Retcode::NoError);
        dns.set_query_count(1);
        dns.set_response_count(0);
        dns.set_authority_rr_count(0);
        dns.set_additional_rr_count(0);
    }

    // The question section is written by hand after the fixed header.
    let mut cursor: usize = DNS_HDR_LEN;

    buffer[cursor..cursor + query.qname.len()].copy_from_slice(&query.qname);
    cursor += query.qname.len();

    let type_bytes: [u8; 2] = query.qtype.0.to_be_bytes();
    buffer[cursor..cursor + 2].copy_from_slice(&type_bytes);
    cursor += 2;

    let class_bytes: [u8; 2] = query.qclass.0.to_be_bytes();
    buffer[cursor..cursor + 2].copy_from_slice(&class_bytes);

    Ok(buffer)
}

fn create_ptr_query(ip_addr: Ipv4Addr) -> Result<DnsQuery, DnsError> {
    let ptr_string: String = ip::reverse_address_to_ptr(ip_addr);
    let qname: Vec<u8> = encode_dns_name(&ptr_string)?;
    Ok(DnsQuery {
        qname,
        qtype: DnsTypes::PTR,
        qclass: DnsClass(1),
        payload: Vec::new(),
    })
}

fn encode_dns_name(name: &str) -> Result<Vec<u8>, DnsError> {
    let mut encoded: Vec<u8> = Vec::with_capacity(name.len() + 2);
    for label in name.split('.') {
        if label.is_empty() {
            continue;
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DnsError::LabelTooLong(label.to_string()));
        }
        encoded.push(label.len() as u8);
        encoded.extend_from_slice(label.as_bytes());
    }
    encoded.push(0);
    Ok(encoded)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
