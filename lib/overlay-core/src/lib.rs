//! Core overlay-network state shared by the driver
//!
//! This library provides:
//! - Endpoint records for remote peers and their host routes
//! - Per-network endpoint tables and the process-wide network table
//! - The error taxonomy for peer lifecycle operations

pub mod endpoint;
pub mod error;
pub mod network;

pub use endpoint::{host_route, Endpoint};
pub use error::{CoreError, Result};
pub use network::{Network, NetworkTable};
