//! Step 2: the three gateways attached to the VCN

use oke_api::{GatewayArgs, GatewayKind, ResourceRef, ServiceEntry};
use oke_core::{RegionProfile, Result, Stack, StackConfig};

/// Handles to the three gateways, consumed by the route table factory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewaySet {
    pub internet: ResourceRef,
    pub nat: ResourceRef,
    pub service: ResourceRef,
}

pub struct GatewayFactory<'a> {
    config: &'a StackConfig,
    region: &'static RegionProfile,
    vcn: ResourceRef,
}

impl<'a> GatewayFactory<'a> {
    pub fn new(config: &'a StackConfig, region: &'static RegionProfile, vcn: ResourceRef) -> Self {
        Self { config, region, vcn }
    }

    pub fn create_internet_gateway(&self, stack: &mut Stack) -> Result<ResourceRef> {
        stack.declare(
            "oci:core:InternetGateway",
            "internet-gateway",
            &GatewayArgs {
                kind: GatewayKind::Internet,
                compartment_id: self.config.compartment_id.clone(),
                display_name: self.config.internet_gateway_display_name.clone(),
                enabled: Some(true),
                services: Vec::new(),
                vcn_id: self.vcn.clone(),
            },
        )
    }

    pub fn create_nat_gateway(&self, stack: &mut Stack) -> Result<ResourceRef> {
        stack.declare(
            "oci:core:NatGateway",
            "nat-gateway",
            &GatewayArgs {
                kind: GatewayKind::Nat,
                compartment_id: self.config.compartment_id.clone(),
                display_name: self.config.nat_gateway_display_name.clone(),
                enabled: None,
                services: Vec::new(),
                vcn_id: self.vcn.clone(),
            },
        )
    }

    pub fn create_service_gateway(&self, stack: &mut Stack) -> Result<ResourceRef> {
        stack.declare(
            "oci:core:ServiceGateway",
            "service-gateway",
            &GatewayArgs {
                kind: GatewayKind::Service,
                compartment_id: self.config.compartment_id.clone(),
                display_name: self.config.service_gateway_display_name.clone(),
                enabled: None,
                services: vec![ServiceEntry {
                    service_id: self.region.service_id.to_string(),
                }],
                vcn_id: self.vcn.clone(),
            },
        )
    }

    pub fn create_all(&self, stack: &mut Stack) -> Result<GatewaySet> {
        Ok(GatewaySet {
            internet: self.create_internet_gateway(stack)?,
            nat: self.create_nat_gateway(stack)?,
            service: self.create_service_gateway(stack)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deploy::tests::sample_config;
    use crate::network::VcnFactory;

    #[test]
    fn test_gateway_set() {
        let config = sample_config();
        let region = RegionProfile::lookup(&config.region);
        let mut stack = Stack::new();
        let vcn = VcnFactory::new(&config).create(&mut stack).unwrap();

        let set = GatewayFactory::new(&config, region, vcn)
            .create_all(&mut stack)
            .unwrap();

        assert_eq!(set.internet.as_str(), "${internet-gateway.id}");
        let igw = stack.descriptor("internet-gateway").unwrap();
        assert_eq!(igw.args["enabled"], true);

        let sgw = stack.descriptor("service-gateway").unwrap();
        assert_eq!(sgw.args["services"][0]["serviceId"], region.service_id);

        let ngw = stack.descriptor("nat-gateway").unwrap();
        assert_eq!(ngw.args["vcnId"], "${vcn.id}");
        assert!(ngw.args.get("enabled").is_none());
    }
}
