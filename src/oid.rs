//! Decoding of IP addresses embedded in SNMP table indexes.
//!
//! Tables indexed by `InetAddressType.InetAddress` (RFC 4001), such as
//! `cbgpPeer2Table`, encode the peer address into the OID suffix:
//!
//! - IPv4: `1.4.a.b.c.d`
//! - IPv6: `2.16.<16 decimal octets>`
//!
//! Both forms decode to a canonical textual address. IPv6 is rendered in
//! exploded lowercase form (`2001:0db8:...`, all eight groups, zero-padded)
//! so that decoded indexes compare equal to canonicalized user input.

use std::net::{IpAddr, Ipv6Addr};

use crate::error::{Error, Result};

/// Decode an `InetAddressType.InetAddress` OID index into a canonical
/// textual IP address.
///
/// ```
/// use routewatch::oid::decode_ip_index;
///
/// assert_eq!(decode_ip_index("1.4.10.0.0.1").unwrap(), "10.0.0.1");
/// ```
pub fn decode_ip_index(suffix: &str) -> Result<String> {
    let parts: Vec<&str> = suffix.split('.').collect();
    match parts.as_slice() {
        ["1", "4", octets @ ..] if octets.len() == 4 => {
            let bytes = parse_octets::<4>(octets, suffix)?;
            Ok(format!("{}.{}.{}.{}", bytes[0], bytes[1], bytes[2], bytes[3]))
        }
        ["2", "16", octets @ ..] if octets.len() == 16 => {
            let bytes = parse_octets::<16>(octets, suffix)?;
            Ok(explode_v6(&Ipv6Addr::from(bytes)))
        }
        _ => Err(Error::Index(suffix.to_string())),
    }
}

/// Canonicalize a user-supplied peer address to the form
/// [`decode_ip_index`] produces.
pub fn canonical_addr(arg: &str) -> Result<String> {
    match arg.parse::<IpAddr>() {
        Ok(IpAddr::V4(v4)) => Ok(v4.to_string()),
        Ok(IpAddr::V6(v6)) => Ok(explode_v6(&v6)),
        Err(_) => Err(Error::PeerAddress(arg.to_string())),
    }
}

/// Exploded lowercase IPv6 form: all eight groups, each zero-padded to four
/// hex digits.
fn explode_v6(addr: &Ipv6Addr) -> String {
    let groups: Vec<String> = addr
        .segments()
        .iter()
        .map(|segment| format!("{segment:04x}"))
        .collect();
    groups.join(":")
}

fn parse_octets<const N: usize>(parts: &[&str], suffix: &str) -> Result<[u8; N]> {
    let mut bytes = [0u8; N];
    for (slot, part) in bytes.iter_mut().zip(parts) {
        *slot = part
            .parse::<u8>()
            .map_err(|_| Error::Index(suffix.to_string()))?;
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_ipv4_index() {
        assert_eq!(decode_ip_index("1.4.192.0.2.1").unwrap(), "192.0.2.1");
    }

    #[test]
    fn decodes_ipv6_index_exploded() {
        // 2001:db8::1
        let suffix = "2.16.32.1.13.184.0.0.0.0.0.0.0.0.0.0.0.1";
        assert_eq!(
            decode_ip_index(suffix).unwrap(),
            "2001:0db8:0000:0000:0000:0000:0000:0001"
        );
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(decode_ip_index("1.4.10.0.0").is_err());
        assert!(decode_ip_index("2.16.1.2.3").is_err());
    }

    #[test]
    fn rejects_unknown_address_type() {
        assert!(decode_ip_index("3.4.10.0.0.1").is_err());
        assert!(decode_ip_index("").is_err());
    }

    #[test]
    fn rejects_octet_out_of_range() {
        assert!(decode_ip_index("1.4.10.0.0.256").is_err());
    }

    #[test]
    fn canonical_ipv4_passthrough() {
        assert_eq!(canonical_addr("10.0.0.1").unwrap(), "10.0.0.1");
    }

    #[test]
    fn canonical_ipv6_explodes_compressed_form() {
        assert_eq!(
            canonical_addr("2001:db8::1").unwrap(),
            "2001:0db8:0000:0000:0000:0000:0000:0001"
        );
    }

    #[test]
    fn canonical_rejects_garbage() {
        assert!(canonical_addr("not-an-ip").is_err());
    }

    #[test]
    fn decoded_index_matches_canonical_input() {
        let decoded = decode_ip_index("2.16.32.1.13.184.0.0.0.0.0.0.0.0.0.0.0.1").unwrap();
        let canonical = canonical_addr("2001:db8::1").unwrap();
        assert_eq!(decoded, canonical);
    }
}
