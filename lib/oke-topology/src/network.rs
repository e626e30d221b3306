//! Step 1: the VCN, root of the resource graph

use oke_api::{ResourceRef, VcnArgs};
use oke_core::{Result, Stack, StackConfig};

pub struct VcnFactory<'a> {
    config: &'a StackConfig,
}

impl<'a> VcnFactory<'a> {
    pub fn new(config: &'a StackConfig) -> Self {
        Self { config }
    }

    pub fn create(&self, stack: &mut Stack) -> Result<ResourceRef> {
        stack.declare(
            "oci:core:Vcn",
            "vcn",
            &VcnArgs {
                cidr_block: self.config.vcn_cidr.to_string(),
                compartment_id: self.config.compartment_id.clone(),
                display_name: self.config.vcn_display_name.clone(),
                dns_label: "mgmt".to_string(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deploy::tests::sample_config;

    #[test]
    fn test_vcn_descriptor() {
        let config = sample_config();
        let mut stack = Stack::new();
        let vcn = VcnFactory::new(&config).create(&mut stack).unwrap();
        assert_eq!(vcn.as_str(), "${vcn.id}");
        let descriptor = stack.descriptor("vcn").unwrap();
        assert_eq!(descriptor.kind, "oci:core:Vcn");
        assert_eq!(descriptor.args["cidrBlock"], "10.0.0.0/16");
        assert_eq!(descriptor.args["dnsLabel"], "mgmt");
    }
}
