use crate::core::config::{Settings, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::core::dataset::VendorDataset;
use crate::core::errors::{Error, Result};
use crate::core::vendor::Vendor;
use log::info;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use std::time::Duration;

/*-------------------------------------------------------------------------------------------------
  Simple Interface
-------------------------------------------------------------------------------------------------*/

/// _**Simple library interface**_ that retrieves and parses a vendor's published IP ranges
/// using the default client configuration.
///
/// ```no_run
/// let dataset = cloudip::get_dataset(cloudip::Vendor::Google).unwrap();
/// println!("{} records", dataset.len());
/// ```
pub fn get_dataset(vendor: Vendor) -> Result<VendorDataset> {
    let client = Client::default();
    let json = client.fetch(vendor)?;
    VendorDataset::from_json(vendor, &json)
}

/*-------------------------------------------------------------------------------------------------
  Fetch
-------------------------------------------------------------------------------------------------*/

/// Retrieves the raw IP ranges document of a vendor.
pub trait Fetch {
    fn fetch(&self, vendor: Vendor) -> Result<Vec<u8>>;
}

/*-------------------------------------------------------------------------------------------------
  Client Builder
-------------------------------------------------------------------------------------------------*/

/// A builder for the [Client] struct.
///
/// ```
/// let client = cloudip::ClientBuilder::new()
///     .timeout(10) // 10 seconds
///     .user_agent("my-inventory-tool/1.0")
///     .build();
///
/// assert_eq!(client.timeout(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    timeout: u64,
    user_agent: String,
}

/*--------------------------------------------------------------------------------------
  Client Builder Implementation
--------------------------------------------------------------------------------------*/

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientBuilder {
    pub fn new() -> Self {
        ClientBuilder::default()
    }

    /// Create a builder initialized from loaded [Settings].
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            timeout: settings.timeout,
            user_agent: settings.user_agent.clone(),
        }
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Set the request timeout in seconds; defaults to `30`.
    pub fn timeout(&mut self, timeout: u64) -> &mut Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` header; defaults to `cloudip/<version>`.
    pub fn user_agent(&mut self, user_agent: &str) -> &mut Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /*-------------------------------------------------------------------------
      Build Method
    -------------------------------------------------------------------------*/

    pub fn build(&self) -> Client {
        Client {
            timeout: self.timeout,
            user_agent: self.user_agent.clone(),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Client
-------------------------------------------------------------------------------------------------*/

/// A blocking HTTP client that retrieves vendor IP ranges documents. Each call makes exactly one
/// request; failures are returned to the caller without retrying.
#[derive(Debug, Clone)]
pub struct Client {
    timeout: u64,
    user_agent: String,
}

impl Default for Client {
    fn default() -> Self {
        ClientBuilder::default().build()
    }
}

impl Client {
    pub fn new() -> Self {
        Client::default()
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    /// Request timeout in seconds.
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /*-------------------------------------------------------------------------
      Private Methods
    -------------------------------------------------------------------------*/

    fn get(&self, vendor: Vendor) -> reqwest::Result<Vec<u8>> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(self.timeout))
            .user_agent(self.user_agent.as_str())
            .build()?;

        let response = http
            .get(vendor.url())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .send()?
            .error_for_status()?;

        Ok(response.bytes()?.to_vec())
    }
}

impl Fetch for Client {
    fn fetch(&self, vendor: Vendor) -> Result<Vec<u8>> {
        info!("Get {} IP ranges: GET {}", vendor, vendor.url());
        self.get(vendor)
            .inspect(|json| info!("Get {} IP ranges: Ok ({} bytes)", vendor, json.len()))
            .map_err(|source| Error::Transport { vendor, source })
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
