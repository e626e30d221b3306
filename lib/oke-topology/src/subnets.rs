//! Step 5: the three CIDR partitions of the VCN

use crate::routing::RouteTables;
use crate::security::SecurityLists;
use oke_api::{ResourceRef, SubnetArgs};
use oke_core::{Result, Stack, StackConfig};

/// Handles to the three subnets, consumed by the cluster and node pool
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subnets {
    pub service_lb: ResourceRef,
    pub node: ResourceRef,
    pub k8s_api: ResourceRef,
}

pub struct SubnetFactory<'a> {
    config: &'a StackConfig,
    vcn: ResourceRef,
    route_tables: &'a RouteTables,
    security_lists: &'a SecurityLists,
}

struct SubnetSpec<'s> {
    logical_name: &'s str,
    cidr_block: String,
    display_name: &'s str,
    dns_label: &'s str,
    prohibit_public_ip_on_vnic: bool,
    route_table: ResourceRef,
    security_lists: Vec<ResourceRef>,
}

impl<'a> SubnetFactory<'a> {
    pub fn new(
        config: &'a StackConfig,
        vcn: ResourceRef,
        route_tables: &'a RouteTables,
        security_lists: &'a SecurityLists,
    ) -> Self {
        Self {
            config,
            vcn,
            route_tables,
            security_lists,
        }
    }

    fn declare(&self, stack: &mut Stack, spec: SubnetSpec<'_>) -> Result<ResourceRef> {
        stack.declare(
            "oci:core:Subnet",
            spec.logical_name,
            &SubnetArgs {
                cidr_block: spec.cidr_block,
                compartment_id: self.config.compartment_id.clone(),
                display_name: spec.display_name.to_string(),
                dns_label: spec.dns_label.to_string(),
                prohibit_public_ip_on_vnic: spec.prohibit_public_ip_on_vnic,
                route_table_id: spec.route_table,
                security_list_ids: spec.security_lists,
                vcn_id: self.vcn.clone(),
            },
        )
    }

    /// Load balancer subnet: private routing, public IPs allowed for LBs
    pub fn create_service_lb_subnet(&self, stack: &mut Stack) -> Result<ResourceRef> {
        self.declare(
            stack,
            SubnetSpec {
                logical_name: "service-lb-subnet",
                cidr_block: self.config.service_lb_subnet_cidr.to_string(),
                display_name: "oke-svc",
                dns_label: "lbsub",
                prohibit_public_ip_on_vnic: false,
                route_table: self.route_tables.private.clone(),
                security_lists: vec![self.security_lists.node.clone()],
            },
        )
    }

    /// Worker node subnet: private routing, no public IPs
    pub fn create_node_subnet(&self, stack: &mut Stack) -> Result<ResourceRef> {
        self.declare(
            stack,
            SubnetSpec {
                logical_name: "node-subnet",
                cidr_block: self.config.node_subnet_cidr.to_string(),
                display_name: "oke-node",
                dns_label: "nodesub",
                prohibit_public_ip_on_vnic: true,
                route_table: self.route_tables.private.clone(),
                security_lists: vec![self.security_lists.node.clone()],
            },
        )
    }

    /// API endpoint subnet: public routing, node and API security lists
    pub fn create_k8s_api_subnet(&self, stack: &mut Stack) -> Result<ResourceRef> {
        self.declare(
            stack,
            SubnetSpec {
                logical_name: "k8s-api-subnet",
                cidr_block: self.config.k8s_api_subnet_cidr.to_string(),
                display_name: "oke-api",
                dns_label: "apisub",
                prohibit_public_ip_on_vnic: false,
                route_table: self.route_tables.public.clone(),
                security_lists: vec![
                    self.security_lists.node.clone(),
                    self.security_lists.k8s_api.clone(),
                ],
            },
        )
    }

    pub fn create_all(&self, stack: &mut Stack) -> Result<Subnets> {
        Ok(Subnets {
            service_lb: self.create_service_lb_subnet(stack)?,
            node: self.create_node_subnet(stack)?,
            k8s_api: self.create_k8s_api_subnet(stack)?,
        })
    }
}
