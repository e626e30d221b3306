//! Core stack machinery for the OKE network topology
//!
//! This library provides:
//! - Typed stack configuration with required-secret validation
//! - The region → (availability domain, service, image) lookup table
//! - CIDR layout validation (boundary containment, pairwise overlap)
//! - The declaration registry that collects resource descriptors and
//!   exported outputs for the external reconciliation engine

pub mod cidr;
pub mod config;
pub mod error;
pub mod region;
pub mod stack;

pub use cidr::validate_cidr_layout;
pub use config::{ConfigMap, StackConfig, SERVICE_CIDR};
pub use error::{ConfigurationError, ProviderError, Result, StackError};
pub use region::RegionProfile;
pub use stack::{ResourceDescriptor, Stack, StackPlan};
