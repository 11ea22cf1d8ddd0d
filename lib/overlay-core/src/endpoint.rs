//! Endpoint records for remote peers

use std::net::IpAddr;

use ipnetwork::IpNetwork;
use macaddr::MacAddr6;

use crate::{CoreError, Result};

/// One peer's remote presence on an overlay network.
///
/// Created by the peer lifecycle manager once the host network service has
/// materialized the remote endpoint; owned exclusively by the network's
/// endpoint table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    /// Caller-supplied endpoint identifier, unique within the network.
    pub id: String,
    /// Identifier of the owning network.
    pub network_id: String,
    /// Routed address of the peer, always a host route.
    pub addr: IpNetwork,
    /// Hardware address of the peer.
    pub mac: MacAddr6,
    /// Handle assigned by the host network service on creation.
    pub handle: String,
    /// Always true for peer-created endpoints.
    pub remote: bool,
}

/// Derive the host route for a peer address: /32 for IPv4, /128 for IPv6.
pub fn host_route(ip: IpAddr) -> Result<IpNetwork> {
    let prefix = match ip {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    };
    IpNetwork::new(ip, prefix).map_err(|_| CoreError::AddressParse(ip.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_route_ipv4() {
        let route = host_route("10.0.0.5".parse().unwrap()).unwrap();
        assert_eq!(route.to_string(), "10.0.0.5/32");
    }

    #[test]
    fn test_host_route_ipv6() {
        let route = host_route("fd00::5".parse().unwrap()).unwrap();
        assert_eq!(route.prefix(), 128);
    }
}
