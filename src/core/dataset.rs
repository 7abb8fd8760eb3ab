use crate::core::address_family::AddressFamily;
use crate::core::errors::Result;
use crate::core::json;
use crate::core::records::{AwsPrefix, AzureServiceTag, GooglePrefix};
use crate::core::vendor::Vendor;
use chrono::{DateTime, Utc};
use log::{debug, info};

/*-------------------------------------------------------------------------------------------------
  Vendor Dataset
-------------------------------------------------------------------------------------------------*/

/// Normalized IP ranges document of one cloud vendor.
#[derive(Clone, Debug, PartialEq)]
pub enum VendorDataset {
    Aws(AwsIpRanges),
    Google(GoogleIpRanges),
    Azure(AzureServiceTags),
}

impl VendorDataset {
    /// Parse a raw JSON document using the parser of the selected vendor.
    pub fn from_json(vendor: Vendor, json: &[u8]) -> Result<Self> {
        info!("Parsing {} IP ranges ({} bytes)", vendor, json.len());
        let dataset = match vendor {
            Vendor::Aws => VendorDataset::Aws(AwsIpRanges::from_json(json)?),
            Vendor::Google => VendorDataset::Google(GoogleIpRanges::from_json(json)?),
            Vendor::Azure => VendorDataset::Azure(AzureServiceTags::from_json(json)?),
        };
        debug!("Parsed {} {} records", dataset.len(), vendor);
        Ok(dataset)
    }

    pub fn vendor(&self) -> Vendor {
        match self {
            VendorDataset::Aws(_) => Vendor::Aws,
            VendorDataset::Google(_) => Vendor::Google,
            VendorDataset::Azure(_) => Vendor::Azure,
        }
    }

    /// Number of normalized records in the dataset.
    pub fn len(&self) -> usize {
        match self {
            VendorDataset::Aws(aws) => aws.ipv4_prefixes.len() + aws.ipv6_prefixes.len(),
            VendorDataset::Google(google) => google.prefixes.len(),
            VendorDataset::Azure(azure) => azure.values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn metadata(&self) -> DatasetMetadata {
        let (sync_token, created, cloud) = match self {
            VendorDataset::Aws(aws) => (aws.sync_token.clone(), aws.create_date, None),
            VendorDataset::Google(google) => {
                (google.sync_token.clone(), google.creation_time, None)
            }
            VendorDataset::Azure(azure) => (
                azure.change_number.to_string(),
                None,
                Some(azure.cloud.clone()),
            ),
        };

        DatasetMetadata {
            vendor: self.vendor(),
            sync_token,
            created,
            cloud,
            records: self.len(),
        }
    }
}

/*--------------------------------------------------------------------------------------
  Dataset Metadata
--------------------------------------------------------------------------------------*/

/// Publication details of a [VendorDataset].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DatasetMetadata {
    pub vendor: Vendor,

    /// AWS and Google sync token, or the Azure change number.
    pub sync_token: String,

    /// Publication time; Azure does not publish one.
    pub created: Option<DateTime<Utc>>,

    /// Azure cloud name (`Public`).
    pub cloud: Option<String>,

    pub records: usize,
}

/*-------------------------------------------------------------------------------------------------
  AWS IP Ranges
-------------------------------------------------------------------------------------------------*/

/// AWS IP ranges; AWS publishes IPv4 and IPv6 prefixes in separate lists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AwsIpRanges {
    /// Publication time in Unix epoch time format.
    pub sync_token: String,
    pub create_date: Option<DateTime<Utc>>,
    pub ipv4_prefixes: Vec<AwsPrefix>,
    pub ipv6_prefixes: Vec<AwsPrefix>,
}

impl AwsIpRanges {
    pub fn from_json(json: &[u8]) -> Result<Self> {
        let json_ip_ranges = json::aws::parse(json)?;

        Ok(AwsIpRanges {
            sync_token: json_ip_ranges.sync_token.to_string(),
            create_date: json_ip_ranges.create_date,
            ipv4_prefixes: json_ip_ranges.prefixes.iter().map(AwsPrefix::from).collect(),
            ipv6_prefixes: json_ip_ranges
                .ipv6_prefixes
                .iter()
                .map(AwsPrefix::from)
                .collect(),
        })
    }

    /// Prefixes of the filtered family, selected structurally from the per-family lists; IPv4
    /// prefixes come first when both families are included.
    pub fn prefixes(&self, filter: Option<AddressFamily>) -> impl Iterator<Item = &AwsPrefix> {
        let ipv4: &[AwsPrefix] = match filter {
            None | Some(AddressFamily::IPv4) => &self.ipv4_prefixes,
            Some(AddressFamily::IPv6) => &[],
        };
        let ipv6: &[AwsPrefix] = match filter {
            None | Some(AddressFamily::IPv6) => &self.ipv6_prefixes,
            Some(AddressFamily::IPv4) => &[],
        };
        ipv4.iter().chain(ipv6.iter())
    }
}

/*-------------------------------------------------------------------------------------------------
  Google IP Ranges
-------------------------------------------------------------------------------------------------*/

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GoogleIpRanges {
    pub sync_token: String,
    pub creation_time: Option<DateTime<Utc>>,
    pub prefixes: Vec<GooglePrefix>,
}

impl GoogleIpRanges {
    pub fn from_json(json: &[u8]) -> Result<Self> {
        let json_ip_ranges = json::google::parse(json)?;

        Ok(GoogleIpRanges {
            sync_token: json_ip_ranges.sync_token.to_string(),
            creation_time: json_ip_ranges.creation_time,
            prefixes: json_ip_ranges
                .prefixes
                .iter()
                .filter_map(GooglePrefix::from_json)
                .collect(),
        })
    }

    /// Prefixes of the filtered family, selected by the field each prefix was published in.
    pub fn prefixes(&self, filter: Option<AddressFamily>) -> impl Iterator<Item = &GooglePrefix> {
        self.prefixes
            .iter()
            .filter(move |prefix| prefix.family.matches(filter))
    }
}

/*-------------------------------------------------------------------------------------------------
  Azure Service Tags
-------------------------------------------------------------------------------------------------*/

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AzureServiceTags {
    pub change_number: i64,
    pub cloud: String,
    pub values: Vec<AzureServiceTag>,
}

impl AzureServiceTags {
    pub fn from_json(json: &[u8]) -> Result<Self> {
        let json_service_tags = json::azure::parse(json)?;

        Ok(AzureServiceTags {
            change_number: json_service_tags.change_number,
            cloud: json_service_tags.cloud.to_string(),
            values: json_service_tags
                .values
                .iter()
                .map(AzureServiceTag::from)
                .collect(),
        })
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
