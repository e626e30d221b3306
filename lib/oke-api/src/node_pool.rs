use crate::cluster::CniType;
use crate::reference::ResourceRef;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where nodes of the pool are placed
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementConfig {
    pub availability_domain: String,
    pub subnet_id: ResourceRef,
}

/// Pod networking for the pool's nodes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodNetworkOptionDetails {
    pub cni_type: CniType,
    pub pod_subnet_ids: Vec<ResourceRef>,
}

/// Size and placement of the pool
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeConfigDetails {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub freeform_tags: BTreeMap<String, String>,

    pub node_pool_pod_network_option_details: PodNetworkOptionDetails,

    pub placement_configs: Vec<PlacementConfig>,

    /// Number of nodes in the pool
    pub size: u32,
}

/// Flex-shape sizing of each node
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeShapeConfig {
    pub memory_in_gbs: u32,
    pub ocpus: u32,
}

/// Boot source selector for the pool's nodes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceType {
    Image,
}

/// Boot image for the pool's nodes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSourceDetails {
    pub image_id: String,
    pub source_type: SourceType,
}

/// Grace period for draining nodes on scale-down
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvictionSettings {
    /// ISO-8601 duration, e.g. "PT60M"
    pub eviction_grace_duration: String,
}

/// Kubernetes label applied to nodes as they join
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialNodeLabel {
    pub key: String,
    pub value: String,
}

/// Arguments for the worker node pool attached to a cluster
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePoolArgs {
    pub cluster_id: ResourceRef,

    pub compartment_id: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub freeform_tags: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub initial_node_labels: Vec<InitialNodeLabel>,

    pub kubernetes_version: String,

    pub name: String,

    pub node_config_details: NodeConfigDetails,

    pub node_eviction_node_pool_settings: EvictionSettings,

    /// Compute shape of each node (e.g. "VM.Standard.A1.Flex")
    pub node_shape: String,

    pub node_shape_config: NodeShapeConfig,

    pub node_source_details: NodeSourceDetails,

    pub ssh_public_key: String,
}
