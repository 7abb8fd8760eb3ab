use crate::core::vendor::Vendor;
use thiserror::Error;

/*-------------------------------------------------------------------------------------------------
  Errors and Results
-------------------------------------------------------------------------------------------------*/

/// Boxed error used as the source of sink failures, which can originate from `std::io` or the
/// `csv` writer.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that terminate a `cloudip` run. None of them are retried.
#[derive(Debug, Error)]
pub enum Error {
    /// The vendor dataset could not be retrieved (network, DNS, or HTTP status failure).
    #[error("unable to connect to {vendor}: {source}")]
    Transport {
        vendor: Vendor,
        #[source]
        source: reqwest::Error,
    },

    /// The response body does not match the vendor's JSON schema.
    #[error("JSON parse error on {vendor} IP info: {source}")]
    Parse {
        vendor: Vendor,
        #[source]
        source: serde_json::Error,
    },

    /// The output could not be created or written.
    #[error("unable to write {target}: {source}")]
    Sink {
        target: String,
        #[source]
        source: BoxError,
    },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn sink<E>(target: impl Into<String>, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Error::Sink {
            target: target.into(),
            source: source.into(),
        }
    }
}

/*--------------------------------------------------------------------------------------
  Log Error Function
--------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) fn log_error(error: &Error) {
    log::error!("{}", error);
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
