/*-------------------------------------------------------------------------------------------------
  Core Modules
-------------------------------------------------------------------------------------------------*/

pub mod address_family;
pub mod client;
pub mod config;
pub mod dataset;
pub mod datetime;
pub mod errors;
pub mod format;
pub mod json;
pub mod pipeline;
pub mod records;
pub mod sink;
pub mod vendor;
