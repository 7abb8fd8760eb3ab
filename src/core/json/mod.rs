/*-------------------------------------------------------------------------------------------------
  Vendor JSON Documents
-------------------------------------------------------------------------------------------------*/

// The JSON structures borrow their strings from the fetched response body; the published
// documents contain no escaped characters in the fields retained here.

pub mod aws;
pub mod azure;
pub mod google;

pub use aws::{JsonAwsIpRanges, JsonAwsIpv4Prefix, JsonAwsIpv6Prefix};
pub use azure::{JsonAzureProperties, JsonAzureServiceTags, JsonAzureValue};
pub use google::{JsonGoogleIpRanges, JsonGooglePrefix};
