//! Wire payloads for the host network-configuration service

use std::net::IpAddr;

use macaddr::MacAddr6;
use serde::{Deserialize, Serialize};

use overlay_core::Result;

/// Request to create a remote endpoint on a virtual switch.
///
/// Field names follow the host service's JSON schema.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoteEndpointRequest {
    pub name: String,
    pub virtual_network: String,
    pub mac_address: String,
    #[serde(rename = "IPAddress")]
    pub ip_address: IpAddr,
    pub is_remote_endpoint: bool,
    /// Raw policy blobs; for peers, a single provider-address policy.
    pub policies: Vec<serde_json::Value>,
}

impl RemoteEndpointRequest {
    /// Assemble the creation request for a peer, attaching the
    /// provider-address policy that carries the VTEP.
    pub fn for_peer(
        eid: &str,
        switch_id: &str,
        peer_mac: MacAddr6,
        peer_ip: IpAddr,
        vtep: IpAddr,
    ) -> Result<Self> {
        let pa_policy = serde_json::to_value(ProviderAddressPolicy {
            policy_type: "PA".to_string(),
            provider_address: vtep,
        })?;

        Ok(Self {
            name: eid.to_string(),
            virtual_network: switch_id.to_string(),
            mac_address: peer_mac.to_string(),
            ip_address: peer_ip,
            is_remote_endpoint: true,
            policies: vec![pa_policy],
        })
    }
}

/// Encapsulation policy marking the endpoint as reachable through a
/// physical/underlay address (the VTEP).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProviderAddressPolicy {
    #[serde(rename = "Type")]
    pub policy_type: String,
    #[serde(rename = "PA")]
    pub provider_address: IpAddr,
}

/// Success payload of a remote-endpoint creation.
#[derive(Clone, Debug, Deserialize)]
pub struct RemoteEndpointResponse {
    /// Handle assigned by the host service; keys later delete calls.
    #[serde(rename = "ID")]
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peer_request_wire_format() {
        let req = RemoteEndpointRequest::for_peer(
            "e1",
            "switch-1",
            MacAddr6::new(0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff),
            "10.0.0.5".parse().unwrap(),
            "192.168.1.10".parse().unwrap(),
        )
        .unwrap();

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["Name"], "e1");
        assert_eq!(value["VirtualNetwork"], "switch-1");
        assert_eq!(value["MacAddress"], "AA:BB:CC:DD:EE:FF");
        assert_eq!(value["IPAddress"], "10.0.0.5");
        assert_eq!(value["IsRemoteEndpoint"], true);
        assert_eq!(value["Policies"][0]["Type"], "PA");
        assert_eq!(value["Policies"][0]["PA"], "192.168.1.10");
    }

    #[test]
    fn test_response_handle() {
        let resp: RemoteEndpointResponse = serde_json::from_str(r#"{"ID":"H1"}"#).unwrap();
        assert_eq!(resp.id, "H1");
    }
}
