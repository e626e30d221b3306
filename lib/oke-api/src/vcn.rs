use serde::{Deserialize, Serialize};

/// Arguments for the virtual cloud network, the CIDR boundary every other
/// network resource lives inside
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VcnArgs {
    /// Address range owned by the network (e.g. "10.0.0.0/16")
    pub cidr_block: String,

    /// Compartment the network is created in
    pub compartment_id: String,

    /// Human-readable name shown in the console
    pub display_name: String,

    /// DNS label for intra-VCN hostname resolution
    pub dns_label: String,
}
