use crate::reference::ResourceRef;
use serde::{Deserialize, Serialize};

/// The three egress/ingress paths out of a VCN
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GatewayKind {
    /// Bidirectional public internet access for public subnets
    Internet,
    /// Outbound-only internet access for private subnets
    Nat,
    /// Private path to Oracle platform services
    Service,
}

/// A platform service reachable through a service gateway
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEntry {
    /// OCID of the services-network entry for the region
    pub service_id: String,
}

/// Arguments for a gateway attached to the VCN
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayArgs {
    pub kind: GatewayKind,

    pub compartment_id: String,

    pub display_name: String,

    /// Only meaningful for internet gateways
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Only meaningful for service gateways
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<ServiceEntry>,

    pub vcn_id: ResourceRef,
}
