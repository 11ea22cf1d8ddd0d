//! Remote-peer lifecycle management for the overlay driver
//!
//! This library provides:
//! - Wire payloads for the host network-configuration service
//! - The injected host-service client seam and its HTTP implementation
//! - The platform serialization policy for hosts that cannot process
//!   concurrent remote-endpoint mutations
//! - The peer lifecycle manager tying the above to the endpoint tables

pub mod client;
pub mod peer;
pub mod platform;
pub mod request;

pub use client::{HostNetworkService, HttpHostService};
pub use peer::PeerManager;
pub use platform::{PlatformPolicy, SerializationMode};
pub use request::{ProviderAddressPolicy, RemoteEndpointRequest, RemoteEndpointResponse};
