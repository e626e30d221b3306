use crate::reference::ResourceRef;
use serde::{Deserialize, Serialize};

/// How a route rule's destination field is interpreted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DestinationType {
    /// Destination is a CIDR literal
    CidrBlock,
    /// Destination is a services-network label
    ServiceCidrBlock,
}

/// A single (destination, target gateway) routing rule
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRule {
    pub description: String,

    /// CIDR literal or services-network label, per `destination_type`
    pub destination: String,

    pub destination_type: DestinationType,

    /// Gateway the matching traffic is sent to
    pub network_entity_id: ResourceRef,
}

/// Arguments for a route table governing subnet egress
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteTableArgs {
    pub compartment_id: String,

    pub display_name: String,

    /// Ordered for readable diffs; the engine treats rules as a set
    pub route_rules: Vec<RouteRule>,

    pub vcn_id: ResourceRef,
}
