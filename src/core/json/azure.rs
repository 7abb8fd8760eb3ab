use crate::core::errors::{Error, Result};
use crate::core::vendor::Vendor;
use serde::Deserialize;
use std::borrow::Cow;

/*-------------------------------------------------------------------------------------------------
  Parse JSON
-------------------------------------------------------------------------------------------------*/

pub fn parse(json: &[u8]) -> Result<JsonAzureServiceTags<'_>> {
    serde_json::from_slice(json).map_err(|source| Error::Parse {
        vendor: Vendor::Azure,
        source,
    })
}

/*-------------------------------------------------------------------------------------------------
  JSON Data Structures
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Azure Service Tags
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JsonAzureServiceTags<'j> {
    pub change_number: i64,

    #[serde(borrow)]
    pub cloud: Cow<'j, str>,

    #[serde(borrow)]
    pub values: Vec<JsonAzureValue<'j>>,
}

/*--------------------------------------------------------------------------------------
  Azure Service Tag Value
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq)]
pub struct JsonAzureValue<'j> {
    #[serde(borrow)]
    pub name: Cow<'j, str>,

    #[serde(borrow)]
    pub id: Cow<'j, str>,

    #[serde(borrow)]
    pub properties: JsonAzureProperties<'j>,
}

/*--------------------------------------------------------------------------------------
  Azure Service Tag Properties
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JsonAzureProperties<'j> {
    pub change_number: i64,

    #[serde(borrow)]
    pub region: Cow<'j, str>,

    pub region_id: i64,

    #[serde(borrow)]
    pub platform: Cow<'j, str>,

    #[serde(borrow)]
    pub system_service: Cow<'j, str>,

    /// IPv4 and IPv6 prefixes, mixed in one list.
    #[serde(borrow)]
    pub address_prefixes: Vec<Cow<'j, str>>,

    #[serde(default, borrow)]
    pub network_features: Vec<Cow<'j, str>>,
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
