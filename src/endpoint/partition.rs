//! AWS partition table.

/// DNS data for one AWS partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// Partition id, e.g. `aws-cn`.
    pub name: &'static str,
    /// Standard DNS suffix.
    pub dns_suffix: &'static str,
    /// Dual-stack DNS suffix, `None` where dual-stack is unavailable.
    pub dual_stack_dns_suffix: Option<&'static str>,
    /// Whether FIPS endpoints exist.
    pub supports_fips: bool,
}

const AWS: Partition = Partition {
    name: "aws",
    dns_suffix: "amazonaws.com",
    dual_stack_dns_suffix: Some("api.aws"),
    supports_fips: true,
};

const AWS_CN: Partition = Partition {
    name: "aws-cn",
    dns_suffix: "amazonaws.com.cn",
    dual_stack_dns_suffix: Some("api.amazonwebservices.com.cn"),
    supports_fips: true,
};

const AWS_US_GOV: Partition = Partition {
    name: "aws-us-gov",
    dns_suffix: "amazonaws.com",
    dual_stack_dns_suffix: Some("api.aws"),
    supports_fips: true,
};

const AWS_ISO: Partition = Partition {
    name: "aws-iso",
    dns_suffix: "c2s.ic.gov",
    dual_stack_dns_suffix: None,
    supports_fips: true,
};

const AWS_ISO_B: Partition = Partition {
    name: "aws-iso-b",
    dns_suffix: "sc2s.sgov.gov",
    dual_stack_dns_suffix: None,
    supports_fips: true,
};

// Longest prefix first: `us-isob-` must win over `us-iso-`.
const PREFIXES: &[(&str, Partition)] = &[
    ("us-isob-", AWS_ISO_B),
    ("us-iso-", AWS_ISO),
    ("us-gov-", AWS_US_GOV),
    ("cn-", AWS_CN),
];

/// Partition a region belongs to.
///
/// ```
/// use aws_services::endpoint::partition_for_region;
///
/// assert_eq!(partition_for_region("cn-north-1").name, "aws-cn");
/// assert_eq!(partition_for_region("eu-west-1").name, "aws");
/// ```
pub fn partition_for_region(region: &str) -> Partition {
    PREFIXES
        .iter()
        .find(|(prefix, _)| region.starts_with(prefix))
        .map(|(_, partition)| *partition)
        .unwrap_or(AWS)
}

/// Whether `region` is usable as a single DNS label.
pub fn is_valid_host_label(region: &str) -> bool {
    !region.is_empty()
        && region.len() <= 63
        && region
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !region.starts_with('-')
        && !region.ends_with('-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_selection() {
        assert_eq!(partition_for_region("us-east-1").name, "aws");
        assert_eq!(partition_for_region("cn-northwest-1").name, "aws-cn");
        assert_eq!(partition_for_region("us-gov-west-1").name, "aws-us-gov");
        assert_eq!(partition_for_region("us-iso-east-1").name, "aws-iso");
        assert_eq!(partition_for_region("us-isob-east-1").name, "aws-iso-b");
    }

    #[test]
    fn test_host_labels() {
        assert!(is_valid_host_label("us-west-2"));
        assert!(is_valid_host_label("local"));
        assert!(!is_valid_host_label(""));
        assert!(!is_valid_host_label("us west"));
        assert!(!is_valid_host_label("-us-west-2"));
        assert!(!is_valid_host_label("evil.com/"));
    }
}
