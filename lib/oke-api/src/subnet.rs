use crate::reference::ResourceRef;
use serde::{Deserialize, Serialize};

/// Arguments for a subnet, a CIDR partition of the VCN bound to one route
/// table and one or more security lists
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubnetArgs {
    /// Sub-range of the VCN CIDR (validated before anything is declared)
    pub cidr_block: String,

    pub compartment_id: String,

    pub display_name: String,

    pub dns_label: String,

    /// Private subnets prohibit public IPs on attached VNICs
    pub prohibit_public_ip_on_vnic: bool,

    pub route_table_id: ResourceRef,

    pub security_list_ids: Vec<ResourceRef>,

    pub vcn_id: ResourceRef,
}
