//! Resource factories and the deployment orchestrator
//!
//! One factory per creation step, each a pure mapping from configuration and
//! parent-resource handles to a declared descriptor:
//! 1. network: the VCN itself
//! 2. gateways: internet, NAT and service gateways
//! 3. routing: private and public route tables
//! 4. security: the three traffic-class security lists
//! 5. subnets: load-balancer, node and API subnets
//! 6. cluster: the managed control plane
//! 7. node_pool: worker capacity
//!
//! [`deploy::build_stack`] runs the steps in that order and exports the
//! resulting identifiers under their fixed output names.

pub mod cluster;
pub mod deploy;
pub mod gateways;
pub mod network;
pub mod node_pool;
pub mod routing;
pub mod security;
pub mod subnets;

pub use cluster::ClusterFactory;
pub use deploy::build_stack;
pub use gateways::{GatewayFactory, GatewaySet};
pub use network::VcnFactory;
pub use node_pool::NodePoolFactory;
pub use routing::{RouteTableFactory, RouteTables};
pub use security::{SecurityListFactory, SecurityLists, TrafficClass};
pub use subnets::{SubnetFactory, Subnets};
