//! Retrieve the published IP ranges of Amazon Web Services, Google Cloud, and Microsoft Azure,
//! normalize each vendor's JSON schema into prefix records, and write them to the console or a
//! CSV file.
//!
//! ```no_run
//! use cloudip::{AddressFamily, Client, OutputMode, Pipeline, Vendor};
//!
//! let pipeline = Pipeline::new(Client::new(), Vendor::Azure, Some(AddressFamily::IPv6));
//! let report = pipeline.run(&OutputMode::Console)?;
//! eprintln!("{} IPv6 prefixes", report.summary.ipv6_prefixes);
//! # Ok::<(), cloudip::Error>(())
//! ```

mod core;

/*-------------------------------------------------------------------------------------------------
  Primary Interface
-------------------------------------------------------------------------------------------------*/

pub use crate::core::address_family::{classify, AddressFamily};
pub use crate::core::client::{get_dataset, Client, ClientBuilder, Fetch};
pub use crate::core::config::Settings;
pub use crate::core::dataset::{
    AwsIpRanges, AzureServiceTags, DatasetMetadata, GoogleIpRanges, VendorDataset,
};
pub use crate::core::errors::{Error, Result};
pub use crate::core::format::{RecordFormatter, Row};
pub use crate::core::json;
pub use crate::core::pipeline::{Pipeline, RunReport, RunSummary};
pub use crate::core::records::{AwsPrefix, AzureServiceTag, GooglePrefix, PrefixRecord};
pub use crate::core::sink::{ConsoleSink, CsvSink, OutputMode, OutputSink};
pub use crate::core::vendor::Vendor;
