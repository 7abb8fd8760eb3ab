use crate::core::address_family::AddressFamily;
use crate::core::json::JsonGooglePrefix;
use crate::core::records::PrefixRecord;
use log::{trace, warn};

/*-------------------------------------------------------------------------------------------------
  Google Prefix
-------------------------------------------------------------------------------------------------*/

/// Google Cloud IP prefix record; Google publishes no metadata beyond the prefix.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GooglePrefix {
    pub prefix: String,

    /// Taken from the field (`ipv4Prefix` or `ipv6Prefix`) that carried the prefix.
    pub family: AddressFamily,
}

impl GooglePrefix {
    /// Build a record from a JSON prefix entry. Entries carrying neither prefix field, or both,
    /// yield `None`.
    pub fn from_json(json: &JsonGooglePrefix<'_>) -> Option<Self> {
        let ipv4_prefix = json.ipv4_prefix.as_deref().filter(|prefix| !prefix.is_empty());
        let ipv6_prefix = json.ipv6_prefix.as_deref().filter(|prefix| !prefix.is_empty());

        match (ipv4_prefix, ipv6_prefix) {
            (Some(prefix), None) => Some(GooglePrefix {
                prefix: prefix.to_string(),
                family: AddressFamily::IPv4,
            }),
            (None, Some(prefix)) => Some(GooglePrefix {
                prefix: prefix.to_string(),
                family: AddressFamily::IPv6,
            }),
            (None, None) => {
                trace!("Skipping Google prefix entry without a prefix");
                None
            }
            (Some(ipv4_prefix), Some(ipv6_prefix)) => {
                warn!(
                    "Skipping Google prefix entry with both ipv4Prefix {} and ipv6Prefix {}",
                    ipv4_prefix, ipv6_prefix
                );
                None
            }
        }
    }
}

impl PrefixRecord for GooglePrefix {
    const CSV_HEADER: &'static [&'static str] = &["Prefix"];

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
        self.family
            .matches(filter)
            .then(|| vec![self.prefix.clone()])
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
