//! CIDR layout validation for the subnet partitioning of the VCN

use crate::error::ConfigurationError;
use ipnetwork::Ipv4Network;
use tracing::{error, info};

/// Validate that every subnet is contained in the VCN range and that no two
/// subnets overlap.
///
/// All containment checks run before any overlap check, and the first
/// violation wins, so the error for a given layout is reproducible. Nothing
/// may be declared against the stack until this has passed.
pub fn validate_cidr_layout(
    vcn: Ipv4Network,
    subnets: &[(&str, Ipv4Network)],
) -> Result<(), ConfigurationError> {
    for (name, cidr) in subnets {
        if !cidr.is_subnet_of(vcn) {
            let err = ConfigurationError::SubnetOutsideVcn {
                subnet: name.to_string(),
                cidr: *cidr,
                vcn,
            };
            error!(%vcn, subnet = name, cidr = %cidr, "CIDR validation failed: {err}");
            return Err(err);
        }
    }

    for (i, (a, a_cidr)) in subnets.iter().enumerate() {
        for (b, b_cidr) in &subnets[i + 1..] {
            if a_cidr.overlaps(*b_cidr) {
                let err = ConfigurationError::SubnetOverlap {
                    a: a.to_string(),
                    a_cidr: *a_cidr,
                    b: b.to_string(),
                    b_cidr: *b_cidr,
                };
                error!(%vcn, "CIDR validation failed: {err}");
                return Err(err);
            }
        }
    }

    info!(%vcn, subnets = subnets.len(), "CIDR layout validated");
    Ok(())
}
