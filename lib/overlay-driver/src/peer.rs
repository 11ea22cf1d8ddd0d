//! Peer lifecycle management
//!
//! Materializes and tears down remote endpoints in the host network service
//! and keeps the per-network endpoint tables consistent with the outcome.

use std::net::IpAddr;
use std::sync::Arc;

use macaddr::MacAddr6;
use tracing::{debug, info};

use overlay_core::{host_route, CoreError, Endpoint, NetworkTable, Result};

use crate::client::HostNetworkService;
use crate::platform::PlatformPolicy;
use crate::request::RemoteEndpointRequest;

/// Manages the remote presence of peers across the driver's networks.
pub struct PeerManager {
    networks: Arc<NetworkTable>,
    service: Arc<dyn HostNetworkService>,
    policy: PlatformPolicy,
}

impl PeerManager {
    pub fn new(
        networks: Arc<NetworkTable>,
        service: Arc<dyn HostNetworkService>,
        policy: PlatformPolicy,
    ) -> Self {
        Self {
            networks,
            service,
            policy,
        }
    }

    pub fn networks(&self) -> &NetworkTable {
        &self.networks
    }

    /// Materialize a peer as a remote endpoint on the given network.
    ///
    /// The caller-supplied mask is ignored; peers are always routed as host
    /// routes. An unknown network is a silent no-op, tolerating teardown
    /// races. With `update_table` false the call records intent only and
    /// touches neither the host service nor the table.
    #[allow(clippy::too_many_arguments)]
    pub async fn add_peer(
        &self,
        nid: &str,
        eid: &str,
        peer_ip: IpAddr,
        _peer_mask: u8,
        peer_mac: MacAddr6,
        vtep: IpAddr,
        update_table: bool,
    ) -> Result<()> {
        debug!("Enter add_peer for peer ip {} with mac {}", peer_ip, peer_mac);

        validate_id(nid, eid)?;

        let network = match self.networks.get(nid).await {
            Some(network) => network,
            // The network may have been torn down concurrently.
            None => return Ok(()),
        };

        if !update_table {
            return Ok(());
        }

        info!("Notifying host service of remote endpoint {}", eid);

        let request =
            RemoteEndpointRequest::for_peer(eid, network.switch_id(), peer_mac, peer_ip, vtep)?;
        let addr = host_route(peer_ip)?;

        // Evict any endpoint left under this address by a prior failed
        // teardown, so the create below cannot produce a duplicate.
        network.remove_endpoint_with_address(&addr).await;

        let response = {
            let _gate = self.policy.acquire().await;
            self.service.create_remote_endpoint(&request).await
        }?;

        network
            .add_endpoint(Endpoint {
                id: eid.to_string(),
                network_id: nid.to_string(),
                addr,
                mac: peer_mac,
                handle: response.id,
                remote: true,
            })
            .await;

        Ok(())
    }

    /// Tear down a peer's remote endpoint on the given network.
    ///
    /// An unknown network is a silent no-op; an unknown endpoint on a known
    /// network is a hard error. On a failed external call the table entry is
    /// kept so a retry can re-attempt the delete against the same handle.
    #[allow(clippy::too_many_arguments)]
    pub async fn delete_peer(
        &self,
        nid: &str,
        eid: &str,
        peer_ip: IpAddr,
        _peer_mask: u8,
        _peer_mac: MacAddr6,
        _vtep: IpAddr,
        update_table: bool,
    ) -> Result<()> {
        info!("Enter delete_peer for endpoint {} and peer ip {}", eid, peer_ip);

        validate_id(nid, eid)?;

        let network = match self.networks.get(nid).await {
            Some(network) => network,
            None => return Ok(()),
        };

        let ep = network
            .endpoint(eid)
            .await
            .ok_or_else(|| CoreError::EndpointNotFound(eid.to_string()))?;

        if !update_table {
            return Ok(());
        }

        // Deletes are keyed by the service-assigned handle, not the logical
        // endpoint id.
        {
            let _gate = self.policy.acquire().await;
            self.service.delete_remote_endpoint(&ep.handle).await
        }?;

        network.delete_endpoint(eid).await;

        Ok(())
    }
}

fn validate_id(nid: &str, eid: &str) -> Result<()> {
    if nid.is_empty() {
        return Err(CoreError::InvalidIdentifier(
            "invalid network id".to_string(),
        ));
    }
    if eid.is_empty() {
        return Err(CoreError::InvalidIdentifier(
            "invalid endpoint id".to_string(),
        ));
    }
    Ok(())
}
