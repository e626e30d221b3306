use ipnetwork::{IpNetworkError, Ipv4Network};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StackError>;

/// Configuration problems, all surfaced before any descriptor is declared
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(String),

    #[error("Malformed configuration: {0}")]
    Malformed(String),

    #[error("Invalid CIDR for {key}: {value}")]
    InvalidCidr {
        key: String,
        value: String,
        #[source]
        source: IpNetworkError,
    },

    #[error("Subnet {subnet} ({cidr}) is outside the VCN range {vcn}")]
    SubnetOutsideVcn {
        subnet: String,
        cidr: Ipv4Network,
        vcn: Ipv4Network,
    },

    #[error("Subnet {a} ({a_cidr}) overlaps subnet {b} ({b_cidr})")]
    SubnetOverlap {
        a: String,
        a_cidr: Ipv4Network,
        b: String,
        b_cidr: Ipv4Network,
    },

    #[error("Duplicate logical resource name: {0}")]
    DuplicateResource(String),

    #[error("Resource {resource} references {referenced}, which has not been declared")]
    UnknownReference { resource: String, referenced: String },
}

/// Failure raised by the reconciliation engine while materializing a
/// descriptor. Never retried here; the engine owns retry and backoff.
#[derive(Error, Debug)]
#[error("Provider error: {0}")]
pub struct ProviderError(pub String);

#[derive(Error, Debug)]
pub enum StackError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
