use crate::core::errors::{Error, Result};
use crate::core::vendor::Vendor;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::borrow::Cow;

/*-------------------------------------------------------------------------------------------------
  Parse JSON
-------------------------------------------------------------------------------------------------*/

pub fn parse(json: &[u8]) -> Result<JsonAwsIpRanges<'_>> {
    serde_json::from_slice(json).map_err(|source| Error::Parse {
        vendor: Vendor::Aws,
        source,
    })
}

/*-------------------------------------------------------------------------------------------------
  JSON Data Structures
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  AWS IP Ranges
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq)]
pub struct JsonAwsIpRanges<'j> {
    #[serde(rename = "syncToken", borrow)]
    pub sync_token: Cow<'j, str>,

    /// `None` when the published date does not match the expected format.
    #[serde(rename = "createDate", with = "crate::core::datetime::aws")]
    pub create_date: Option<DateTime<Utc>>,

    #[serde(borrow)]
    pub prefixes: Vec<JsonAwsIpv4Prefix<'j>>,

    #[serde(borrow)]
    pub ipv6_prefixes: Vec<JsonAwsIpv6Prefix<'j>>,
}

/*--------------------------------------------------------------------------------------
  AWS IPv4 Prefix
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq)]
pub struct JsonAwsIpv4Prefix<'j> {
    #[serde(borrow)]
    pub ip_prefix: Cow<'j, str>,
    #[serde(borrow)]
    pub region: Cow<'j, str>,
    #[serde(borrow)]
    pub service: Cow<'j, str>,
    #[serde(borrow)]
    pub network_border_group: Cow<'j, str>,
}

/*--------------------------------------------------------------------------------------
  AWS IPv6 Prefix
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq)]
pub struct JsonAwsIpv6Prefix<'j> {
    #[serde(borrow)]
    pub ipv6_prefix: Cow<'j, str>,
    #[serde(borrow)]
    pub region: Cow<'j, str>,
    #[serde(borrow)]
    pub service: Cow<'j, str>,
    #[serde(borrow)]
    pub network_border_group: Cow<'j, str>,
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
