//! Step 7: worker capacity attached to the cluster

use oke_api::{
    CniType, EvictionSettings, InitialNodeLabel, NodeConfigDetails, NodePoolArgs, NodeShapeConfig,
    NodeSourceDetails, PlacementConfig, PodNetworkOptionDetails, ResourceRef, SourceType,
};
use oke_core::{RegionProfile, Result, Stack, StackConfig};
use std::collections::BTreeMap;

pub struct NodePoolFactory<'a> {
    config: &'a StackConfig,
    region: &'static RegionProfile,
    cluster: ResourceRef,
    node_subnet: ResourceRef,
}

impl<'a> NodePoolFactory<'a> {
    pub fn new(
        config: &'a StackConfig,
        region: &'static RegionProfile,
        cluster: ResourceRef,
        node_subnet: ResourceRef,
    ) -> Self {
        Self {
            config,
            region,
            cluster,
            node_subnet,
        }
    }

    fn node_config_details(&self) -> NodeConfigDetails {
        let mut freeform_tags = BTreeMap::new();
        freeform_tags.insert(
            "oke_node_pool_name".to_string(),
            self.config.node_pool_name.clone(),
        );

        NodeConfigDetails {
            freeform_tags,
            node_pool_pod_network_option_details: PodNetworkOptionDetails {
                cni_type: CniType::OciVcnIpNative,
                pod_subnet_ids: vec![self.node_subnet.clone()],
            },
            placement_configs: vec![PlacementConfig {
                availability_domain: self.region.availability_domain.to_string(),
                subnet_id: self.node_subnet.clone(),
            }],
            size: self.config.node_pool_size,
        }
    }

    pub fn create(&self, stack: &mut Stack) -> Result<ResourceRef> {
        let mut freeform_tags = BTreeMap::new();
        freeform_tags.insert(
            "OKEnodePoolName".to_string(),
            self.config.node_pool_name.clone(),
        );

        stack.declare(
            "oci:containerengine:NodePool",
            "oke-node-pool",
            &NodePoolArgs {
                cluster_id: self.cluster.clone(),
                compartment_id: self.config.compartment_id.clone(),
                freeform_tags,
                initial_node_labels: vec![InitialNodeLabel {
                    key: "name".to_string(),
                    value: "mgmt".to_string(),
                }],
                kubernetes_version: self.config.kubernetes_version.clone(),
                name: self.config.node_pool_name.clone(),
                node_config_details: self.node_config_details(),
                node_eviction_node_pool_settings: EvictionSettings {
                    eviction_grace_duration: "PT60M".to_string(),
                },
                node_shape: self.config.node_shape.clone(),
                node_shape_config: NodeShapeConfig {
                    memory_in_gbs: self.config.node_memory_gbs,
                    ocpus: self.config.node_ocpus,
                },
                node_source_details: NodeSourceDetails {
                    image_id: self.region.image_id.to_string(),
                    source_type: SourceType::Image,
                },
                ssh_public_key: self.config.ssh_public_key.clone(),
            },
        )
    }
}
