use crate::core::errors::{Error, Result};
use crate::core::vendor::Vendor;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::borrow::Cow;

/*-------------------------------------------------------------------------------------------------
  Parse JSON
-------------------------------------------------------------------------------------------------*/

pub fn parse(json: &[u8]) -> Result<JsonGoogleIpRanges<'_>> {
    serde_json::from_slice(json).map_err(|source| Error::Parse {
        vendor: Vendor::Google,
        source,
    })
}

/*-------------------------------------------------------------------------------------------------
  JSON Data Structures
-------------------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JsonGoogleIpRanges<'j> {
    #[serde(borrow)]
    pub sync_token: Cow<'j, str>,

    /// `None` when the published time does not match the expected format.
    #[serde(with = "crate::core::datetime::google")]
    pub creation_time: Option<DateTime<Utc>>,

    #[serde(borrow)]
    pub prefixes: Vec<JsonGooglePrefix<'j>>,
}

/// Google prefix entry; carries an `ipv4Prefix` or an `ipv6Prefix`.
#[derive(Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JsonGooglePrefix<'j> {
    #[serde(default, borrow)]
    pub ipv4_prefix: Option<Cow<'j, str>>,

    #[serde(default, borrow)]
    pub ipv6_prefix: Option<Cow<'j, str>>,
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
