//! Step 6: the managed Kubernetes control plane

use oke_api::{
    ClusterArgs, ClusterOptions, ClusterType, CniType, EndpointConfig, PodNetworkOption,
    ResourceRef,
};
use oke_core::{Result, Stack, StackConfig};
use std::collections::BTreeMap;

pub struct ClusterFactory<'a> {
    config: &'a StackConfig,
    vcn: ResourceRef,
    k8s_api_subnet: ResourceRef,
    service_lb_subnet: ResourceRef,
}

impl<'a> ClusterFactory<'a> {
    pub fn new(
        config: &'a StackConfig,
        vcn: ResourceRef,
        k8s_api_subnet: ResourceRef,
        service_lb_subnet: ResourceRef,
    ) -> Self {
        Self {
            config,
            vcn,
            k8s_api_subnet,
            service_lb_subnet,
        }
    }

    pub fn create(&self, stack: &mut Stack) -> Result<ResourceRef> {
        let mut freeform_tags = BTreeMap::new();
        freeform_tags.insert("OKEclusterName".to_string(), "mgmt".to_string());

        stack.declare(
            "oci:containerengine:Cluster",
            "oke-cluster",
            &ClusterArgs {
                compartment_id: self.config.compartment_id.clone(),
                name: "mgmt-cluster".to_string(),
                kubernetes_version: self.config.kubernetes_version.clone(),
                vcn_id: self.vcn.clone(),
                options: ClusterOptions {
                    service_lb_subnet_ids: vec![self.service_lb_subnet.clone()],
                },
                endpoint_config: EndpointConfig {
                    is_public_ip_enabled: true,
                    subnet_id: self.k8s_api_subnet.clone(),
                },
                cluster_pod_network_options: vec![PodNetworkOption {
                    cni_type: CniType::OciVcnIpNative,
                }],
                freeform_tags,
                cluster_type: ClusterType::BasicCluster,
            },
        )
    }
}
