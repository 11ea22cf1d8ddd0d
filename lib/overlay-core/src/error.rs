use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("could not derive host route for {0}")]
    AddressParse(String),

    #[error("could not find endpoint with id {0}")]
    EndpointNotFound(String),

    #[error("host network service error: {0}")]
    Service(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
