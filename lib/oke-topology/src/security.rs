//! Step 4: traffic-class security lists
//!
//! Rule sets are table-driven: each traffic class has a fixed ordered list
//! of rule templates, so adding a rule is appending to the table. Order only
//! matters for readable diffs; the engine treats rules as a set.

use oke_api::{
    DestinationType, EgressRule, IcmpOptions, IngressRule, Protocol, ResourceRef, SecurityListArgs,
};
use oke_core::{Result, Stack, StackConfig, SERVICE_CIDR};

/// The three traffic classes that get their own security list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrafficClass {
    /// Worker node traffic
    Node,
    /// Kubernetes API endpoint traffic
    KubernetesApi,
    /// Service load balancer traffic (rules managed by the LB service)
    ServiceLb,
}

impl TrafficClass {
    pub fn logical_name(self) -> &'static str {
        match self {
            TrafficClass::Node => "node-security-list",
            TrafficClass::KubernetesApi => "k8s-api-security-list",
            TrafficClass::ServiceLb => "service-lb-security-list",
        }
    }
}

/// Handles to the three security lists, consumed by the subnet factory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecurityLists {
    pub node: ResourceRef,
    pub k8s_api: ResourceRef,
    pub service_lb: ResourceRef,
}

pub struct SecurityListFactory<'a> {
    config: &'a StackConfig,
    vcn: ResourceRef,
}

impl<'a> SecurityListFactory<'a> {
    pub fn new(config: &'a StackConfig, vcn: ResourceRef) -> Self {
        Self { config, vcn }
    }

    fn path_discovery_ingress(&self, source: &str) -> IngressRule {
        IngressRule {
            description: "Path discovery".to_string(),
            protocol: Protocol::Icmp,
            source: source.to_string(),
            icmp_options: Some(IcmpOptions::path_discovery()),
            stateless: false,
        }
    }

    fn path_discovery_egress(&self, destination: &str) -> EgressRule {
        EgressRule {
            description: "Path discovery".to_string(),
            protocol: Protocol::Icmp,
            destination: destination.to_string(),
            destination_type: None,
            icmp_options: Some(IcmpOptions::path_discovery()),
            stateless: false,
        }
    }

    /// Ordered ingress rule table for a traffic class
    pub fn ingress_rules(&self, class: TrafficClass) -> Vec<IngressRule> {
        let node_cidr = self.config.node_subnet_cidr.to_string();
        let api_cidr = self.config.k8s_api_subnet_cidr.to_string();
        let stateful = |description: &str, protocol, source: &str| IngressRule {
            description: description.to_string(),
            protocol,
            source: source.to_string(),
            icmp_options: None,
            stateless: false,
        };

        match class {
            TrafficClass::Node => vec![
                self.path_discovery_ingress(&api_cidr),
                stateful(
                    "TCP access from Kubernetes Control Plane",
                    Protocol::Tcp,
                    &api_cidr,
                ),
                stateful("Inbound SSH traffic to worker nodes", Protocol::Tcp, "0.0.0.0/0"),
                stateful(
                    "Allow pods on one worker node to communicate with pods on other worker nodes",
                    Protocol::All,
                    &node_cidr,
                ),
            ],
            TrafficClass::KubernetesApi => vec![
                self.path_discovery_ingress(&node_cidr),
                stateful(
                    "External access to Kubernetes API endpoint",
                    Protocol::Tcp,
                    "0.0.0.0/0",
                ),
                stateful(
                    "Kubernetes worker to Kubernetes API endpoint communication",
                    Protocol::Tcp,
                    &node_cidr,
                ),
            ],
            TrafficClass::ServiceLb => Vec::new(),
        }
    }

    /// Ordered egress rule table for a traffic class
    pub fn egress_rules(&self, class: TrafficClass) -> Vec<EgressRule> {
        let node_cidr = self.config.node_subnet_cidr.to_string();
        let api_cidr = self.config.k8s_api_subnet_cidr.to_string();
        let stateful = |description: &str, protocol, destination: &str, destination_type| {
            EgressRule {
                description: description.to_string(),
                protocol,
                destination: destination.to_string(),
                destination_type: Some(destination_type),
                icmp_options: None,
                stateless: false,
            }
        };

        match class {
            TrafficClass::Node => vec![
                self.path_discovery_egress(&api_cidr),
                stateful(
                    "Allow nodes to communicate with OKE",
                    Protocol::Tcp,
                    SERVICE_CIDR,
                    DestinationType::ServiceCidrBlock,
                ),
                stateful(
                    "Allow pods on one worker node to communicate with pods on other worker nodes",
                    Protocol::All,
                    &node_cidr,
                    DestinationType::CidrBlock,
                ),
                stateful(
                    "Access to Kubernetes API Endpoint",
                    Protocol::Tcp,
                    &api_cidr,
                    DestinationType::CidrBlock,
                ),
                stateful(
                    "Worker Nodes access to Internet",
                    Protocol::All,
                    "0.0.0.0/0",
                    DestinationType::CidrBlock,
                ),
            ],
            TrafficClass::KubernetesApi => vec![
                self.path_discovery_egress(&node_cidr),
                stateful(
                    "Allow Kubernetes Control Plane to communicate with OKE",
                    Protocol::Tcp,
                    SERVICE_CIDR,
                    DestinationType::ServiceCidrBlock,
                ),
                stateful(
                    "All traffic to worker nodes",
                    Protocol::Tcp,
                    &node_cidr,
                    DestinationType::CidrBlock,
                ),
            ],
            TrafficClass::ServiceLb => Vec::new(),
        }
    }

    pub fn create(&self, stack: &mut Stack, class: TrafficClass) -> Result<ResourceRef> {
        let name = class.logical_name();
        stack.declare(
            "oci:core:SecurityList",
            name,
            &SecurityListArgs {
                compartment_id: self.config.compartment_id.clone(),
                display_name: name.to_string(),
                ingress_security_rules: self.ingress_rules(class),
                egress_security_rules: self.egress_rules(class),
                vcn_id: self.vcn.clone(),
            },
        )
    }

    pub fn create_all(&self, stack: &mut Stack) -> Result<SecurityLists> {
        Ok(SecurityLists {
            node: self.create(stack, TrafficClass::Node)?,
            k8s_api: self.create(stack, TrafficClass::KubernetesApi)?,
            service_lb: self.create(stack, TrafficClass::ServiceLb)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deploy::tests::sample_config;
    use crate::network::VcnFactory;

    fn factory_fixture(config: &StackConfig) -> (Stack, ResourceRef) {
        let mut stack = Stack::new();
        let vcn = VcnFactory::new(config).create(&mut stack).unwrap();
        (stack, vcn)
    }

    #[test]
    fn test_node_rule_table() {
        let config = sample_config();
        let (_stack, vcn) = factory_fixture(&config);
        let factory = SecurityListFactory::new(&config, vcn);

        let ingress = factory.ingress_rules(TrafficClass::Node);
        assert_eq!(ingress.len(), 4);
        assert_eq!(ingress[0].protocol, Protocol::Icmp);
        assert_eq!(ingress[0].icmp_options, Some(IcmpOptions::path_discovery()));
        assert_eq!(ingress[0].source, "10.0.0.0/28");
        assert_eq!(ingress[2].source, "0.0.0.0/0");
        assert_eq!(ingress[3].protocol, Protocol::All);

        let egress = factory.egress_rules(TrafficClass::Node);
        assert_eq!(egress.len(), 5);
        assert_eq!(egress[1].destination, SERVICE_CIDR);
        assert_eq!(
            egress[1].destination_type,
            Some(DestinationType::ServiceCidrBlock)
        );
        assert_eq!(egress[4].destination, "0.0.0.0/0");
    }

    #[test]
    fn test_api_rule_table() {
        let config = sample_config();
        let (_stack, vcn) = factory_fixture(&config);
        let factory = SecurityListFactory::new(&config, vcn);

        let ingress = factory.ingress_rules(TrafficClass::KubernetesApi);
        assert_eq!(ingress.len(), 3);
        assert_eq!(ingress[0].source, "10.0.10.0/24");
        assert_eq!(ingress[1].source, "0.0.0.0/0");

        let egress = factory.egress_rules(TrafficClass::KubernetesApi);
        assert_eq!(egress.len(), 3);
        assert_eq!(egress[2].destination, "10.0.10.0/24");
    }

    #[test]
    fn test_service_lb_rules_empty() {
        let config = sample_config();
        let (_stack, vcn) = factory_fixture(&config);
        let factory = SecurityListFactory::new(&config, vcn);
        assert!(factory.ingress_rules(TrafficClass::ServiceLb).is_empty());
        assert!(factory.egress_rules(TrafficClass::ServiceLb).is_empty());
    }

    #[test]
    fn test_all_three_lists_declared() {
        let config = sample_config();
        let (mut stack, vcn) = factory_fixture(&config);
        let lists = SecurityListFactory::new(&config, vcn)
            .create_all(&mut stack)
            .unwrap();
        assert_eq!(lists.node.as_str(), "${node-security-list.id}");
        assert_eq!(lists.k8s_api.as_str(), "${k8s-api-security-list.id}");
        assert_eq!(lists.service_lb.as_str(), "${service-lb-security-list.id}");
        let lb = stack.descriptor("service-lb-security-list").unwrap();
        assert_eq!(lb.args["ingressSecurityRules"].as_array().unwrap().len(), 0);
    }
}
