use crate::reference::ResourceRef;
use crate::route_table::DestinationType;
use serde::{Deserialize, Serialize};

/// IP protocol selector, serialized as the provider's protocol numbers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Protocol {
    #[serde(rename = "1")]
    Icmp,
    #[serde(rename = "6")]
    Tcp,
    #[serde(rename = "all")]
    All,
}

/// ICMP type/code restriction for a rule
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IcmpOptions {
    #[serde(rename = "type")]
    pub icmp_type: u8,
    pub code: u8,
}

impl IcmpOptions {
    /// Destination-unreachable / fragmentation-needed, used for path MTU discovery
    pub fn path_discovery() -> Self {
        IcmpOptions { icmp_type: 3, code: 4 }
    }
}

/// Inbound rule of a security list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngressRule {
    pub description: String,

    pub protocol: Protocol,

    /// Source CIDR the rule admits traffic from
    pub source: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icmp_options: Option<IcmpOptions>,

    /// Stateless rules require a matching rule for return traffic
    pub stateless: bool,
}

/// Outbound rule of a security list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EgressRule {
    pub description: String,

    pub protocol: Protocol,

    /// Destination CIDR or services-network label
    pub destination: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_type: Option<DestinationType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icmp_options: Option<IcmpOptions>,

    pub stateless: bool,
}

/// Arguments for a security list attached to one or more subnets
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityListArgs {
    pub compartment_id: String,

    pub display_name: String,

    /// Ordered for readable diffs; the engine treats rules as a set
    pub ingress_security_rules: Vec<IngressRule>,

    pub egress_security_rules: Vec<EgressRule>,

    pub vcn_id: ResourceRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_wire_names() {
        assert_eq!(serde_json::to_string(&Protocol::Icmp).unwrap(), "\"1\"");
        assert_eq!(serde_json::to_string(&Protocol::Tcp).unwrap(), "\"6\"");
        assert_eq!(serde_json::to_string(&Protocol::All).unwrap(), "\"all\"");
    }

    #[test]
    fn test_path_discovery_options() {
        let opts = IcmpOptions::path_discovery();
        assert_eq!(opts.icmp_type, 3);
        assert_eq!(opts.code, 4);
        let value = serde_json::to_value(opts).unwrap();
        assert_eq!(value["type"], 3);
        assert_eq!(value["code"], 4);
    }
}
