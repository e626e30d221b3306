//! Resource argument records for the OKE network stack
//!
//! This library defines the declarative argument payloads handed to the
//! external reconciliation engine:
//! - Vcn: the virtual cloud network, CIDR owner of everything else
//! - Gateway: internet, NAT and platform-service egress/ingress paths
//! - RouteTable: destination → gateway rules attached to subnets
//! - SecurityList: stateful ingress/egress rule sets
//! - Subnet: CIDR partitions bound to a route table and security lists
//! - Cluster / NodePool: the managed control plane and its workers
//!
//! Every record here is a pure value: two identical configurations must
//! serialize to byte-identical payloads so the engine's diffing stays stable.

pub mod cluster;
pub mod gateway;
pub mod node_pool;
pub mod reference;
pub mod route_table;
pub mod security_list;
pub mod subnet;
pub mod vcn;

pub use cluster::{
    ClusterArgs, ClusterOptions, ClusterType, CniType, EndpointConfig, PodNetworkOption,
};
pub use gateway::{GatewayArgs, GatewayKind, ServiceEntry};
pub use node_pool::{
    EvictionSettings, InitialNodeLabel, NodeConfigDetails, NodePoolArgs, NodeShapeConfig,
    NodeSourceDetails, PlacementConfig, PodNetworkOptionDetails, SourceType,
};
pub use reference::ResourceRef;
pub use route_table::{DestinationType, RouteRule, RouteTableArgs};
pub use security_list::{EgressRule, IcmpOptions, IngressRule, Protocol, SecurityListArgs};
pub use subnet::SubnetArgs;
pub use vcn::VcnArgs;
