use crate::core::address_family::{classify, AddressFamily};
use crate::core::json::JsonAzureValue;
use crate::core::records::{join_list, PrefixRecord};

/*-------------------------------------------------------------------------------------------------
  Azure Service Tag
-------------------------------------------------------------------------------------------------*/

/// Azure service tag record. A single service tag lists IPv4 and IPv6 prefixes together; the
/// family of each literal is decided when the record is formatted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AzureServiceTag {
    pub name: String,
    pub id: String,
    pub change_number: i64,
    pub region: String,
    pub region_id: i64,
    pub platform: String,
    pub system_service: String,
    pub address_prefixes: Vec<String>,
    pub network_features: Vec<String>,
}

impl From<&JsonAzureValue<'_>> for AzureServiceTag {
    fn from(json: &JsonAzureValue<'_>) -> Self {
        let properties = &json.properties;
        Self {
            name: json.name.to_string(),
            id: json.id.to_string(),
            change_number: properties.change_number,
            region: properties.region.to_string(),
            region_id: properties.region_id,
            platform: properties.platform.to_string(),
            system_service: properties.system_service.to_string(),
            address_prefixes: properties
                .address_prefixes
                .iter()
                .map(|prefix| prefix.to_string())
                .collect(),
            network_features: properties
                .network_features
                .iter()
                .map(|feature| feature.to_string())
                .collect(),
        }
    }
}

impl PrefixRecord for AzureServiceTag {
    const CSV_HEADER: &'static [&'static str] = &[
        "Name",
        "ID",
        "Change Number",
        "Region",
        "Region ID",
        "Platform",
        "System Service",
        "Prefixes",
        "Network Features",
    ];

    fn prefixes(&self, filter: Option<AddressFamily>) -> Vec<&str> {
        self.address_prefixes
            .iter()
            .map(String::as_str)
            .filter(|prefix| classify(prefix).matches(filter))
            .collect()
    }

    // Service tags always produce a row, even when no prefix matches the filter.
    fn csv_fields(&self, filter: Option<AddressFamily>) -> Option<Vec<String>> {
        Some(vec![
            self.name.clone(),
            self.id.clone(),
            self.change_number.to_string(),
            self.region.clone(),
            self.region_id.to_string(),
            self.platform.clone(),
            self.system_service.clone(),
            join_list(self.prefixes(filter)),
            join_list(&self.network_features),
        ])
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn test_azure_service_tag() -> AzureServiceTag {
        AzureServiceTag {
            name: "AzureCloud.westus".to_string(),
            id: "AzureCloud.westus".to_string(),
            change_number: 42,
            region: "westus".to_string(),
            region_id: 18,
            platform: "Azure".to_string(),
            system_service: "".to_string(),
            address_prefixes: vec!["13.64.0.0/11".to_string(), "2603:1000::/24".to_string()],
            network_features: vec!["API".to_string(), "NSG".to_string()],
        }
    }

    #[test]
    fn test_azure_prefixes_are_classified_per_literal() {
        let tag = test_azure_service_tag();
        assert_eq!(tag.prefixes(Some(AddressFamily::IPv4)), vec!["13.64.0.0/11"]);
        assert_eq!(tag.prefixes(Some(AddressFamily::IPv6)), vec!["2603:1000::/24"]);
        assert_eq!(tag.prefixes(None), vec!["13.64.0.0/11", "2603:1000::/24"]);
    }

    #[test]
    fn test_azure_csv_fields() {
        let tag = test_azure_service_tag();

        let ipv4_fields = tag.csv_fields(Some(AddressFamily::IPv4)).unwrap();
        assert_eq!(
            ipv4_fields,
            vec![
                "AzureCloud.westus",
                "AzureCloud.westus",
                "42",
                "westus",
                "18",
                "Azure",
                "",
                "13.64.0.0/11",
                "API, NSG",
            ]
        );

        let ipv6_fields = tag.csv_fields(Some(AddressFamily::IPv6)).unwrap();
        assert_eq!(ipv6_fields[7], "2603:1000::/24");

        let all_fields = tag.csv_fields(None).unwrap();
        assert_eq!(all_fields[7], "13.64.0.0/11, 2603:1000::/24");
    }

    #[test]
    fn test_azure_csv_row_kept_without_matching_prefixes() {
        let tag = AzureServiceTag {
            address_prefixes: vec!["13.64.0.0/11".to_string()],
            ..test_azure_service_tag()
        };
        let fields = tag.csv_fields(Some(AddressFamily::IPv6)).unwrap();
        assert_eq!(fields[7], "");
    }
}
