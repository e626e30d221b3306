use crate::reference::ResourceRef;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pod networking implementation used by the cluster and its node pools
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CniType {
    /// Pods get VCN-native IPs from a pod subnet
    OciVcnIpNative,
    Flannel,
}

/// Control plane tier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClusterType {
    BasicCluster,
    EnhancedCluster,
}

/// Placement of the Kubernetes API endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointConfig {
    pub is_public_ip_enabled: bool,
    pub subnet_id: ResourceRef,
}

/// Additional cluster options
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterOptions {
    /// Subnets load balancers for Services of type LoadBalancer are placed in
    pub service_lb_subnet_ids: Vec<ResourceRef>,
}

/// Pod network option entry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodNetworkOption {
    pub cni_type: CniType,
}

/// Arguments for the managed Kubernetes control plane
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterArgs {
    pub compartment_id: String,

    pub name: String,

    pub kubernetes_version: String,

    pub vcn_id: ResourceRef,

    pub options: ClusterOptions,

    pub endpoint_config: EndpointConfig,

    pub cluster_pod_network_options: Vec<PodNetworkOption>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub freeform_tags: BTreeMap<String, String>,

    #[serde(rename = "type")]
    pub cluster_type: ClusterType,
}
