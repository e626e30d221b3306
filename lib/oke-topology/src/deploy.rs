//! Orchestrator: the seven creation steps in dependency order

use crate::cluster::ClusterFactory;
use crate::gateways::GatewayFactory;
use crate::network::VcnFactory;
use crate::node_pool::NodePoolFactory;
use crate::routing::RouteTableFactory;
use crate::security::SecurityListFactory;
use crate::subnets::SubnetFactory;
use oke_core::{validate_cidr_layout, RegionProfile, Result, Stack, StackConfig};
use tracing::info;

/// Build the full stack plan from a resolved configuration.
///
/// Validates the CIDR layout first; nothing is declared if it fails. Each
/// step threads its handles into the next, and any error propagates
/// immediately. There is no rollback here: recovery belongs to the engine's
/// own reconciliation on the next run.
pub fn build_stack(config: &StackConfig) -> Result<Stack> {
    validate_cidr_layout(
        config.vcn_cidr,
        &[
            ("node-subnet", config.node_subnet_cidr),
            ("service-lb-subnet", config.service_lb_subnet_cidr),
            ("k8s-api-subnet", config.k8s_api_subnet_cidr),
        ],
    )?;

    let region = RegionProfile::lookup(&config.region);
    let mut stack = Stack::new();

    let vcn = VcnFactory::new(config).create(&mut stack)?;
    info!(region = %config.region, "VCN declared");

    let gateways = GatewayFactory::new(config, region, vcn.clone()).create_all(&mut stack)?;
    info!("gateways declared");

    let route_tables =
        RouteTableFactory::new(config, vcn.clone(), &gateways).create_all(&mut stack)?;
    info!("route tables declared");

    let security_lists =
        SecurityListFactory::new(config, vcn.clone()).create_all(&mut stack)?;
    info!("security lists declared");

    let subnets = SubnetFactory::new(config, vcn.clone(), &route_tables, &security_lists)
        .create_all(&mut stack)?;
    info!("subnets declared");

    let cluster = ClusterFactory::new(
        config,
        vcn.clone(),
        subnets.k8s_api.clone(),
        subnets.service_lb.clone(),
    )
    .create(&mut stack)?;
    info!("cluster declared");

    let node_pool =
        NodePoolFactory::new(config, region, cluster.clone(), subnets.node.clone())
            .create(&mut stack)?;
    info!("node pool declared");

    stack.export("vcn_id", &vcn);
    stack.export("internet_gateway_id", &gateways.internet);
    stack.export("nat_gateway_id", &gateways.nat);
    stack.export("service_gateway_id", &gateways.service);
    stack.export("route_table_private_id", &route_tables.private);
    stack.export("route_table_public_id", &route_tables.public);
    stack.export("node_security_list_id", &security_lists.node);
    stack.export("k8s_api_security_list_id", &security_lists.k8s_api);
    stack.export("service_lb_security_list_id", &security_lists.service_lb);
    stack.export("service_lb_subnet_id", &subnets.service_lb);
    stack.export("node_subnet_id", &subnets.node);
    stack.export("k8s_api_subnet_id", &subnets.k8s_api);
    stack.export("oke_cluster_id", &cluster);
    stack.export("node_pool_id", &node_pool);

    Ok(stack)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::gateways::GatewaySet;
    use crate::routing::RouteTables;
    use crate::security::SecurityLists;
    use crate::subnets::Subnets;
    use oke_api::ResourceRef;
    use oke_core::{ConfigMap, ConfigurationError, StackError};

    pub(crate) fn sample_map() -> ConfigMap {
        let mut map = ConfigMap::default();
        map.insert("compartment_id", "ocid1.compartment.oc1..test");
        map.insert("ssh_public_key", "ssh-ed25519 AAAA test@host");
        map
    }

    pub(crate) fn sample_config() -> StackConfig {
        StackConfig::from_map(&sample_map()).unwrap()
    }

    pub(crate) fn stack_through_gateways(
        config: &StackConfig,
    ) -> (Stack, ResourceRef, GatewaySet) {
        let region = RegionProfile::lookup(&config.region);
        let mut stack = Stack::new();
        let vcn = VcnFactory::new(config).create(&mut stack).unwrap();
        let gateways = GatewayFactory::new(config, region, vcn.clone())
            .create_all(&mut stack)
            .unwrap();
        (stack, vcn, gateways)
    }

    pub(crate) fn stack_through_security_lists(
        config: &StackConfig,
    ) -> (Stack, ResourceRef, RouteTables, SecurityLists) {
        let (mut stack, vcn, gateways) = stack_through_gateways(config);
        let route_tables = RouteTableFactory::new(config, vcn.clone(), &gateways)
            .create_all(&mut stack)
            .unwrap();
        let security_lists = SecurityListFactory::new(config, vcn.clone())
            .create_all(&mut stack)
            .unwrap();
        (stack, vcn, route_tables, security_lists)
    }

    pub(crate) fn stack_through_subnets(
        config: &StackConfig,
    ) -> (Stack, ResourceRef, Subnets) {
        let (mut stack, vcn, route_tables, security_lists) =
            stack_through_security_lists(config);
        let subnets = SubnetFactory::new(config, vcn.clone(), &route_tables, &security_lists)
            .create_all(&mut stack)
            .unwrap();
        (stack, vcn, subnets)
    }

    pub(crate) fn stack_through_cluster(
        config: &StackConfig,
    ) -> (Stack, ResourceRef, Subnets) {
        let (mut stack, vcn, subnets) = stack_through_subnets(config);
        let cluster = ClusterFactory::new(
            config,
            vcn,
            subnets.k8s_api.clone(),
            subnets.service_lb.clone(),
        )
        .create(&mut stack)
        .unwrap();
        (stack, cluster, subnets)
    }

    #[test]
    fn test_full_stack_declares_fourteen_resources() {
        let stack = build_stack(&sample_config()).unwrap();
        assert_eq!(stack.descriptors().len(), 14);
        assert_eq!(stack.outputs().len(), 14);
    }

    #[test]
    fn test_exported_output_names_are_stable() {
        let stack = build_stack(&sample_config()).unwrap();
        for name in [
            "vcn_id",
            "internet_gateway_id",
            "nat_gateway_id",
            "service_gateway_id",
            "route_table_private_id",
            "route_table_public_id",
            "node_security_list_id",
            "k8s_api_security_list_id",
            "service_lb_security_list_id",
            "service_lb_subnet_id",
            "node_subnet_id",
            "k8s_api_subnet_id",
            "oke_cluster_id",
            "node_pool_id",
        ] {
            assert!(stack.outputs().contains_key(name), "missing output {name}");
        }
        assert_eq!(stack.outputs()["oke_cluster_id"], ResourceRef::id("oke-cluster"));
    }

    #[test]
    fn test_node_pool_references_cluster_and_node_subnet() {
        let stack = build_stack(&sample_config()).unwrap();
        let pool = stack.descriptor("oke-node-pool").unwrap();
        assert_eq!(pool.args["clusterId"], "${oke-cluster.id}");
        assert_eq!(
            pool.args["nodeConfigDetails"]["placementConfigs"][0]["subnetId"],
            "${node-subnet.id}"
        );
        assert_eq!(
            pool.args["nodeConfigDetails"]["nodePoolPodNetworkOptionDetails"]["podSubnetIds"][0],
            "${node-subnet.id}"
        );
    }

    #[test]
    fn test_identical_config_builds_identical_plans() {
        let a = serde_json::to_string(&build_stack(&sample_config()).unwrap().plan()).unwrap();
        let b = serde_json::to_string(&build_stack(&sample_config()).unwrap().plan()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_overlapping_subnets_abort_before_any_declaration() {
        let mut map = sample_map();
        map.insert("node_subnet_cidr", "10.0.10.0/24");
        map.insert("service_lb_subnet_cidr", "10.0.10.128/25");
        let config = StackConfig::from_map(&map).unwrap();
        let err = build_stack(&config).unwrap_err();
        match err {
            StackError::Configuration(ConfigurationError::SubnetOverlap {
                a,
                a_cidr,
                b,
                b_cidr,
            }) => {
                assert_eq!(a, "node-subnet");
                assert_eq!(a_cidr.to_string(), "10.0.10.0/24");
                assert_eq!(b, "service-lb-subnet");
                assert_eq!(b_cidr.to_string(), "10.0.10.128/25");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_subnet_outside_vcn_aborts() {
        let mut map = sample_map();
        map.insert("k8s_api_subnet_cidr", "192.168.0.0/28");
        let config = StackConfig::from_map(&map).unwrap();
        let err = build_stack(&config).unwrap_err();
        assert!(matches!(
            err,
            StackError::Configuration(ConfigurationError::SubnetOutsideVcn { subnet, .. })
                if subnet == "k8s-api-subnet"
        ));
    }

    #[test]
    fn test_unknown_region_still_builds() {
        let mut map = sample_map();
        map.insert("region", "mars-1");
        let config = StackConfig::from_map(&map).unwrap();
        let stack = build_stack(&config).unwrap();
        let pool = stack.descriptor("oke-node-pool").unwrap();
        // Falls back to the default region's placement and image.
        assert_eq!(
            pool.args["nodeConfigDetails"]["placementConfigs"][0]["availabilityDomain"],
            "PCHh:AP-OSAKA-1-AD-1"
        );
        let image = pool.args["nodeSourceDetails"]["imageId"].as_str().unwrap();
        assert!(image.contains("ap-osaka-1"));
    }

    #[test]
    fn test_every_reference_points_at_an_earlier_resource() {
        let stack = build_stack(&sample_config()).unwrap();
        let mut seen = std::collections::BTreeSet::new();
        for descriptor in stack.descriptors() {
            let json = serde_json::to_string(&descriptor.args).unwrap();
            for declared in stack.descriptors() {
                let token = format!("${{{}.id}}", declared.logical_name);
                if json.contains(&token) {
                    assert!(
                        seen.contains(&declared.logical_name),
                        "{} references {} before its declaration",
                        descriptor.logical_name,
                        declared.logical_name
                    );
                }
            }
            seen.insert(descriptor.logical_name.clone());
        }
    }
}
