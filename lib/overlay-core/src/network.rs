//! Per-network endpoint tables and the process-wide network table

use crate::Endpoint;
use ipnetwork::IpNetwork;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// A virtual overlay network and the endpoint table it owns.
///
/// The endpoint table is a cache of what this process believes the host
/// network service currently has; after a failed external call the two may
/// transiently disagree, so callers must not treat it as a source of truth
/// across errors.
pub struct Network {
    id: String,
    // Handle of the virtual switch backing this network in the host service
    switch_id: String,
    endpoints: RwLock<HashMap<String, Endpoint>>,
}

impl Network {
    pub fn new(id: impl Into<String>, switch_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            switch_id: switch_id.into(),
            endpoints: RwLock::new(HashMap::new()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn switch_id(&self) -> &str {
        &self.switch_id
    }

    /// Look up an endpoint by identifier.
    pub async fn endpoint(&self, eid: &str) -> Option<Endpoint> {
        let endpoints = self.endpoints.read().await;
        endpoints.get(eid).cloned()
    }

    /// Insert or replace an endpoint record.
    pub async fn add_endpoint(&self, ep: Endpoint) {
        let mut endpoints = self.endpoints.write().await;
        debug!("Adding endpoint {} to network {}", ep.id, self.id);
        endpoints.insert(ep.id.clone(), ep);
    }

    /// Remove an endpoint record by identifier.
    pub async fn delete_endpoint(&self, eid: &str) -> Option<Endpoint> {
        let mut endpoints = self.endpoints.write().await;
        debug!("Deleting endpoint {} from network {}", eid, self.id);
        endpoints.remove(eid)
    }

    /// Evict any endpoint already registered under the given address.
    ///
    /// Guards against duplicate remote endpoints left behind by a prior
    /// failed teardown.
    pub async fn remove_endpoint_with_address(&self, addr: &IpNetwork) -> Option<Endpoint> {
        let mut endpoints = self.endpoints.write().await;
        let stale = endpoints
            .values()
            .find(|ep| ep.addr == *addr)
            .map(|ep| ep.id.clone())?;
        debug!(
            "Evicting stale endpoint {} with address {} from network {}",
            stale, addr, self.id
        );
        endpoints.remove(&stale)
    }

    /// Get count of endpoints in the table.
    pub async fn endpoint_count(&self) -> usize {
        let endpoints = self.endpoints.read().await;
        endpoints.len()
    }
}

/// NetworkTable maintains the networks this driver currently knows about.
pub struct NetworkTable {
    networks: Arc<RwLock<HashMap<String, Arc<Network>>>>,
}

impl NetworkTable {
    pub fn new() -> Self {
        Self {
            networks: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a network.
    pub async fn insert(&self, network: Network) -> Arc<Network> {
        let network = Arc::new(network);
        let mut networks = self.networks.write().await;
        networks.insert(network.id().to_string(), Arc::clone(&network));
        debug!("Registered network: {}", network.id());
        network
    }

    /// Look up a network by identifier, `None` if the network is unknown.
    pub async fn get(&self, nid: &str) -> Option<Arc<Network>> {
        let networks = self.networks.read().await;
        networks.get(nid).cloned()
    }

    /// Remove a network on teardown.
    pub async fn remove(&self, nid: &str) -> Option<Arc<Network>> {
        let mut networks = self.networks.write().await;
        debug!("Removing network: {}", nid);
        networks.remove(nid)
    }

    /// Get count of registered networks.
    pub async fn network_count(&self) -> usize {
        let networks = self.networks.read().await;
        networks.len()
    }
}

impl Default for NetworkTable {
    fn default() -> Self {
        Self::new()
    }
}
