//! Step 3: private and public route tables

use crate::gateways::GatewaySet;
use oke_api::{DestinationType, ResourceRef, RouteRule, RouteTableArgs};
use oke_core::{Result, Stack, StackConfig, SERVICE_CIDR};

/// Handles to the two route tables, consumed by the subnet factory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTables {
    pub private: ResourceRef,
    pub public: ResourceRef,
}

pub struct RouteTableFactory<'a> {
    config: &'a StackConfig,
    vcn: ResourceRef,
    gateways: &'a GatewaySet,
}

impl<'a> RouteTableFactory<'a> {
    pub fn new(config: &'a StackConfig, vcn: ResourceRef, gateways: &'a GatewaySet) -> Self {
        Self { config, vcn, gateways }
    }

    fn declare_table(
        &self,
        stack: &mut Stack,
        name: &str,
        route_rules: Vec<RouteRule>,
    ) -> Result<ResourceRef> {
        stack.declare(
            "oci:core:RouteTable",
            name,
            &RouteTableArgs {
                compartment_id: self.config.compartment_id.clone(),
                display_name: name.to_string(),
                route_rules,
                vcn_id: self.vcn.clone(),
            },
        )
    }

    /// Private table: default route via NAT, services network via the
    /// service gateway
    pub fn create_private(&self, stack: &mut Stack) -> Result<ResourceRef> {
        self.declare_table(
            stack,
            "route-table-private",
            vec![
                RouteRule {
                    description: "Internet-bound traffic via NAT".to_string(),
                    destination: "0.0.0.0/0".to_string(),
                    destination_type: DestinationType::CidrBlock,
                    network_entity_id: self.gateways.nat.clone(),
                },
                RouteRule {
                    description: "Oracle platform services".to_string(),
                    destination: SERVICE_CIDR.to_string(),
                    destination_type: DestinationType::ServiceCidrBlock,
                    network_entity_id: self.gateways.service.clone(),
                },
            ],
        )
    }

    /// Public table: default route straight out the internet gateway
    pub fn create_public(&self, stack: &mut Stack) -> Result<ResourceRef> {
        self.declare_table(
            stack,
            "route-table-public",
            vec![RouteRule {
                description: "Public internet traffic".to_string(),
                destination: "0.0.0.0/0".to_string(),
                destination_type: DestinationType::CidrBlock,
                network_entity_id: self.gateways.internet.clone(),
            }],
        )
    }

    pub fn create_all(&self, stack: &mut Stack) -> Result<RouteTables> {
        Ok(RouteTables {
            private: self.create_private(stack)?,
            public: self.create_public(stack)?,
        })
    }
}
