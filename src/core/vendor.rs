use std::fmt;

/*-------------------------------------------------------------------------------------------------
  Cloud Vendor
-------------------------------------------------------------------------------------------------*/

const AWS_URL: &str = "https://ip-ranges.amazonaws.com/ip-ranges.json";
const GOOGLE_URL: &str = "https://www.gstatic.com/ipranges/goog.json";
const AZURE_URL: &str = "https://download.microsoft.com/download/7/1/D/71D86715-5596-4529-9B13-DA13A5DE5B63/ServiceTags_Public_20220124.json";

/// Cloud vendor whose published IP ranges are retrieved.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, clap::ValueEnum)]
pub enum Vendor {
    /// Amazon Web Services `ip-ranges.json`
    Aws,
    /// Google Cloud `goog.json`
    Google,
    /// Microsoft Azure public Service Tags
    Azure,
}

impl Vendor {
    /// URL of the vendor's published IP ranges document.
    pub fn url(&self) -> &'static str {
        match self {
            Vendor::Aws => AWS_URL,
            Vendor::Google => GOOGLE_URL,
            Vendor::Azure => AZURE_URL,
        }
    }

    /// Display name used in log and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Vendor::Aws => "AWS",
            Vendor::Google => "Google",
            Vendor::Azure => "Azure",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
