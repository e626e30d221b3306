//! Stack configuration: named key-value options with typed accessors
//!
//! The configuration surface is a flat map of named options fed in by the
//! engine. Every recognized key has a fallback default except the two
//! secret-class values (`compartment_id`, `ssh_public_key`), which abort
//! startup when absent. The parsed [`StackConfig`] is an explicit value
//! passed down to the factories; nothing here is process-global.

use crate::error::ConfigurationError;
use crate::region::DEFAULT_REGION;
use ipnetwork::Ipv4Network;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Services-network label routed through the service gateway
pub const SERVICE_CIDR: &str = "all-kix-services-in-oracle-services-network";

const REQUIRED_SECRETS: &[&str] = &["compartment_id", "ssh_public_key"];

/// Raw named key-value options as handed over by the engine
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct ConfigMap(BTreeMap<String, serde_yaml::Value>);

impl ConfigMap {
    pub fn from_yaml(text: &str) -> Result<Self, ConfigurationError> {
        serde_yaml::from_str(text).map_err(|e| ConfigurationError::Malformed(e.to_string()))
    }

    pub fn insert(&mut self, key: &str, value: impl Into<serde_yaml::Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(serde_yaml::Value::as_str)
    }

    /// Integer option; a quoted integer is accepted too
    pub fn get_u32(&self, key: &str) -> Option<u32> {
        match self.0.get(key)? {
            serde_yaml::Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
            serde_yaml::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Fully resolved configuration for one stack instantiation
#[derive(Clone, Debug, PartialEq)]
pub struct StackConfig {
    pub region: String,

    /// Secret-class: compartment every resource is created in
    pub compartment_id: String,
    /// Secret-class: key installed on worker nodes
    pub ssh_public_key: String,

    pub vcn_cidr: Ipv4Network,
    pub node_subnet_cidr: Ipv4Network,
    pub service_lb_subnet_cidr: Ipv4Network,
    pub k8s_api_subnet_cidr: Ipv4Network,

    pub kubernetes_version: String,

    pub vcn_display_name: String,
    pub internet_gateway_display_name: String,
    pub nat_gateway_display_name: String,
    pub service_gateway_display_name: String,

    pub node_pool_name: String,
    pub node_pool_size: u32,
    pub node_shape: String,
    pub node_memory_gbs: u32,
    pub node_ocpus: u32,
}

fn parse_cidr(
    map: &ConfigMap,
    key: &str,
    default: &str,
) -> Result<Ipv4Network, ConfigurationError> {
    let value = map.get_str(key).unwrap_or(default).to_string();
    value
        .parse()
        .map_err(|source| ConfigurationError::InvalidCidr {
            key: key.to_string(),
            value,
            source,
        })
}

fn get_or(map: &ConfigMap, key: &str, default: &str) -> String {
    map.get_str(key).unwrap_or(default).to_string()
}

impl StackConfig {
    /// Resolve the configuration map into a typed config.
    ///
    /// Fails before any resource descriptor exists when a required secret
    /// is missing or a CIDR option does not parse.
    pub fn from_map(map: &ConfigMap) -> Result<Self, ConfigurationError> {
        let missing: Vec<&str> = REQUIRED_SECRETS
            .iter()
            .copied()
            .filter(|key| {
                map.get_str(key)
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .is_none()
            })
            .collect();
        if !missing.is_empty() {
            return Err(ConfigurationError::MissingRequired(missing.join(", ")));
        }

        Ok(StackConfig {
            region: get_or(map, "region", DEFAULT_REGION),
            compartment_id: get_or(map, "compartment_id", ""),
            ssh_public_key: get_or(map, "ssh_public_key", ""),
            vcn_cidr: parse_cidr(map, "vcn_cidr_block", "10.0.0.0/16")?,
            node_subnet_cidr: parse_cidr(map, "node_subnet_cidr", "10.0.10.0/24")?,
            service_lb_subnet_cidr: parse_cidr(map, "service_lb_subnet_cidr", "10.0.20.0/24")?,
            k8s_api_subnet_cidr: parse_cidr(map, "k8s_api_subnet_cidr", "10.0.0.0/28")?,
            kubernetes_version: get_or(map, "kubernetes_version", "v1.32.1"),
            vcn_display_name: get_or(map, "vcn_display_name", "oke-vcn-mgmt"),
            internet_gateway_display_name: get_or(map, "igw_display_name", "oke-igw-mgmt"),
            nat_gateway_display_name: get_or(map, "ngw_display_name", "oke-ngw-mgmt"),
            service_gateway_display_name: get_or(map, "sgw_display_name", "oke-sgw-mgmt"),
            node_pool_name: get_or(map, "node_pool_name", "pool1"),
            node_pool_size: map.get_u32("node_pool_size").unwrap_or(2),
            node_shape: get_or(map, "node_shape", "VM.Standard.A1.Flex"),
            node_memory_gbs: map.get_u32("node_memory_gbs").unwrap_or(12),
            node_ocpus: map.get_u32("node_ocpus").unwrap_or(2),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secrets_only() -> ConfigMap {
        let mut map = ConfigMap::default();
        map.insert("compartment_id", "ocid1.compartment.oc1..test");
        map.insert("ssh_public_key", "ssh-ed25519 AAAA test@host");
        map
    }

    #[test]
    fn test_defaults_applied() {
        let config = StackConfig::from_map(&secrets_only()).unwrap();
        assert_eq!(config.region, "ap-osaka-1");
        assert_eq!(config.vcn_cidr.to_string(), "10.0.0.0/16");
        assert_eq!(config.node_subnet_cidr.to_string(), "10.0.10.0/24");
        assert_eq!(config.service_lb_subnet_cidr.to_string(), "10.0.20.0/24");
        assert_eq!(config.k8s_api_subnet_cidr.to_string(), "10.0.0.0/28");
        assert_eq!(config.kubernetes_version, "v1.32.1");
        assert_eq!(config.node_pool_size, 2);
        assert_eq!(config.node_shape, "VM.Standard.A1.Flex");
        assert_eq!(config.node_memory_gbs, 12);
        assert_eq!(config.node_ocpus, 2);
    }

    #[test]
    fn test_missing_secrets_abort() {
        let err = StackConfig::from_map(&ConfigMap::default()).unwrap_err();
        match err {
            ConfigurationError::MissingRequired(keys) => {
                assert!(keys.contains("compartment_id"));
                assert!(keys.contains("ssh_public_key"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_secret_counts_as_missing() {
        let mut map = secrets_only();
        map.insert("ssh_public_key", "   ");
        let err = StackConfig::from_map(&map).unwrap_err();
        match err {
            ConfigurationError::MissingRequired(keys) => {
                assert_eq!(keys, "ssh_public_key");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_cidr_rejected() {
        let mut map = secrets_only();
        map.insert("vcn_cidr_block", "not-a-cidr");
        let err = StackConfig::from_map(&map).unwrap_err();
        match err {
            ConfigurationError::InvalidCidr { key, value, .. } => {
                assert_eq!(key, "vcn_cidr_block");
                assert_eq!(value, "not-a-cidr");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_quoted_integer_accepted() {
        let mut map = secrets_only();
        map.insert("node_pool_size", "5");
        let config = StackConfig::from_map(&map).unwrap();
        assert_eq!(config.node_pool_size, 5);
    }

    #[test]
    fn test_yaml_round_trip() {
        let map = ConfigMap::from_yaml(
            "compartment_id: ocid1.compartment.oc1..test\n\
             ssh_public_key: ssh-ed25519 AAAA\n\
             region: us-ashburn-1\n\
             node_pool_size: 3\n",
        )
        .unwrap();
        let config = StackConfig::from_map(&map).unwrap();
        assert_eq!(config.region, "us-ashburn-1");
        assert_eq!(config.node_pool_size, 3);
    }
}
