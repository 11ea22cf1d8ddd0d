//! Client seam for the host network-configuration service

use async_trait::async_trait;
use tracing::debug;

use overlay_core::{CoreError, Result};

use crate::request::{RemoteEndpointRequest, RemoteEndpointResponse};

/// The host-side service that manipulates virtual switch state.
///
/// Modeled as an injected trait so the lifecycle manager can be exercised
/// against a test double; both calls are synchronous RPCs from the caller's
/// point of view and may block on I/O to the host service.
#[async_trait]
pub trait HostNetworkService: Send + Sync {
    /// Create a remote endpoint, returning the service-assigned handle.
    async fn create_remote_endpoint(
        &self,
        request: &RemoteEndpointRequest,
    ) -> Result<RemoteEndpointResponse>;

    /// Delete a remote endpoint by its service-assigned handle.
    async fn delete_remote_endpoint(&self, handle: &str) -> Result<()>;
}

/// HTTP-backed implementation of [`HostNetworkService`].
pub struct HttpHostService {
    base_url: String,
    client: reqwest::Client,
}

impl HttpHostService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl HostNetworkService for HttpHostService {
    async fn create_remote_endpoint(
        &self,
        request: &RemoteEndpointRequest,
    ) -> Result<RemoteEndpointResponse> {
        let url = format!("{}/endpoints", self.base_url);
        debug!("POST {} for endpoint {}", url, request.name);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| CoreError::Service(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CoreError::Service(format!(
                "create remote endpoint {} returned {}",
                request.name,
                response.status()
            )));
        }

        response
            .json::<RemoteEndpointResponse>()
            .await
            .map_err(|e| CoreError::Service(e.to_string()))
    }

    async fn delete_remote_endpoint(&self, handle: &str) -> Result<()> {
        let url = format!("{}/endpoints/{}", self.base_url, handle);
        debug!("DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| CoreError::Service(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CoreError::Service(format!(
                "delete remote endpoint {} returned {}",
                handle,
                response.status()
            )));
        }

        Ok(())
    }
}
