//! Region lookup table for availability domains, service and image OCIDs

use tracing::warn;

/// Region used when the configured region has no table entry
pub const DEFAULT_REGION: &str = "ap-osaka-1";

/// Per-region identifiers needed to place a node pool and reach the
/// Oracle services network
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionProfile {
    pub availability_domain: &'static str,
    pub service_id: &'static str,
    pub image_id: &'static str,
}

const REGIONS: &[(&str, RegionProfile)] = &[
    (
        "ap-osaka-1",
        RegionProfile {
            availability_domain: "PCHh:AP-OSAKA-1-AD-1",
            service_id: "ocid1.service.oc1.ap-osaka-1.aaaaaaaanpw2x646vasmcdktlznzhf7mwmcgf4hhmw5zepgspmseokxjyj4q",
            image_id: "ocid1.image.oc1.ap-osaka-1.aaaaaaaa4xyxytwqlwbxp5rp5qvhi5snlomtjgyavitu3m36bp4neknjsloa",
        },
    ),
    (
        "ap-seoul-1",
        RegionProfile {
            availability_domain: "YnyK:AP-SEOUL-1-AD-1",
            service_id: "ocid1.service.oc1.ap-seoul-1.aaaaaaaac4kj7ddh5y7kfqbfzc6hzxfazezmvr4n6k7rqt7ifrfcjxnb2y4q",
            image_id: "ocid1.image.oc1.ap-seoul-1.aaaaaaaas5x3bpjnktaajrr7mvqjr3kh4zegqlqeqe5wbql4dqq4q2qj2o5a",
        },
    ),
    (
        "ap-tokyo-1",
        RegionProfile {
            availability_domain: "bJmJ:AP-TOKYO-1-AD-1",
            service_id: "ocid1.service.oc1.ap-tokyo-1.aaaaaaaanp2x646vasmcdktlznzhf7mwmcgf4hhmw5zepgspmseokxjyj4q",
            image_id: "ocid1.image.oc1.ap-tokyo-1.aaaaaaaa4xyxytwqlwbxp5rp5qvhi5snlomtjgyavitu3m36bp4neknjsloa",
        },
    ),
    (
        "us-ashburn-1",
        RegionProfile {
            availability_domain: "ZwDO:US-ASHBURN-1-AD-1",
            service_id: "ocid1.service.oc1.us-ashburn-1.aaaaaaaanp2x646vasmcdktlznzhf7mwmcgf4hhmw5zepgspmseokxjyj4q",
            image_id: "ocid1.image.oc1.us-ashburn-1.aaaaaaaa4xyxytwqlwbxp5rp5qvhi5snlomtjgyavitu3m36bp4neknjsloa",
        },
    ),
    (
        "us-phoenix-1",
        RegionProfile {
            availability_domain: "RWDJ:US-PHOENIX-1-AD-1",
            service_id: "ocid1.service.oc1.us-phoenix-1.aaaaaaaanp2x646vasmcdktlznzhf7mwmcgf4hhmw5zepgspmseokxjyj4q",
            image_id: "ocid1.image.oc1.us-phoenix-1.aaaaaaaa4xyxytwqlwbxp5rp5qvhi5snlomtjgyavitu3m36bp4neknjsloa",
        },
    ),
];

fn find(region: &str) -> Option<&'static RegionProfile> {
    REGIONS
        .iter()
        .find(|(name, _)| *name == region)
        .map(|(_, profile)| profile)
}

impl RegionProfile {
    /// Look up the profile for `region`.
    ///
    /// An unknown region is not an error: it degrades to the default
    /// region's profile with a warning so a misconfigured stack stays
    /// visible in the engine's logs.
    pub fn lookup(region: &str) -> &'static RegionProfile {
        match find(region) {
            Some(profile) => profile,
            None => {
                warn!(
                    region,
                    fallback = DEFAULT_REGION,
                    "unknown region, falling back to default region profile"
                );
                find(DEFAULT_REGION).unwrap_or(&REGIONS[0].1)
            }
        }
    }
}
