use crate::core::address_family::AddressFamily;
use crate::core::json::{JsonAwsIpv4Prefix, JsonAwsIpv6Prefix};
use crate::core::records::PrefixRecord;

/*-------------------------------------------------------------------------------------------------
  AWS Prefix
-------------------------------------------------------------------------------------------------*/

/// AWS IP prefix record containing the prefix and the region, service, and network border group
/// associated with it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AwsPrefix {
    /// IPv4 or IPv6 CIDR literal, verbatim from the source document.
    pub prefix: String,

    /// Taken from the source list the prefix was published in.
    pub family: AddressFamily,

    /// AWS region the prefix is associated with.
    pub region: String,

    /// AWS service that uses the prefix.
    pub service: String,

    /// Network border group the prefix is advertised from.
    pub network_border_group: String,
}

impl From<&JsonAwsIpv4Prefix<'_>> for AwsPrefix {
    fn from(json: &JsonAwsIpv4Prefix<'_>) -> Self {
        Self {
            prefix: json.ip_prefix.to_string(),
            family: AddressFamily::IPv4,
            region: json.region.to_string(),
            service: json.service.to_string(),
            network_border_group: json.network_border_group.to_string(),
        }
    }
}

impl From<&JsonAwsIpv6Prefix<'_>> for AwsPrefix {
    fn from(json: &JsonAwsIpv6Prefix<'_>) -> Self {
        Self {
            prefix: json.ipv6_prefix.to_string(),
            family: AddressFamily::IPv6,
            region: json.region.to_string(),
            service: json.service.to_string(),
            network_border_group: json.network_border_group.to_string(),
        }
    }
}

impl PrefixRecord for AwsPrefix {
    const CSV_HEADER: &'static [&'static str] =
        &["Prefix", "Region", "Service", "Network Border Group"];

    fn prefixes(&self, filter: Option<AddressFamily>) -> Vec<&str> {
        if self.family.matches(filter) {
            vec![self.prefix.as_str()]
        } else {
            vec![]
        }
    }

    fn families(&self, filter: Option<AddressFamily>) -> Vec<AddressFamily> {
        if self.family.matches(filter) {
            vec![self.family]
        } else {
            vec![]
        }
    }

    fn csv_fields(&self, filter: Option<AddressFamily>) -> Option<Vec<String>> {
        self.family.matches(filter).then(|| {
            vec![
                self.prefix.clone(),
                self.region.clone(),
                self.service.clone(),
                self.network_border_group.clone(),
            ]
        })
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
