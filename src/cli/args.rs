use clap::{ArgAction, Parser, ValueEnum};
use cloudip::{AddressFamily, OutputMode, Vendor};
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(
    name = "cloudip",
    author,
    version,
    about = "Fetch the public IP ranges of AWS, Azure, and Google.",
    long_about = None
)]
pub struct Args {
    /// Cloud vendor to export IP ranges from
    #[arg(short = 'v', long, value_enum)]
    pub vendor: Vendor,

    /// IP address family to export
    #[arg(short = 'i', long = "iptype", value_enum, default_value_t = IpType::All)]
    pub ip_type: IpType,

    /// Save the prefixes to a CSV file instead of printing them
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,

    /// Config file (default is $HOME/.cloudip.yaml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print a summary of the dataset and the exported prefixes
    #[arg(long)]
    pub summary: bool,

    /// Increase logging verbosity
    #[arg(long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/*--------------------------------------------------------------------------------------
  IP Type
--------------------------------------------------------------------------------------*/

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum IpType {
    /// IPv4 prefixes
    #[value(name = "4")]
    V4,

    /// IPv6 prefixes
    #[value(name = "6")]
    V6,

    /// IPv4 and IPv6 prefixes
    All,
}

/*--------------------------------------------------------------------------------------
  Args Implementation
--------------------------------------------------------------------------------------*/

impl Args {
    /// Address family filter; `None` includes both families.
    pub fn family_filter(&self) -> Option<AddressFamily> {
        match self.ip_type {
            IpType::V4 => Some(AddressFamily::IPv4),
            IpType::V6 => Some(AddressFamily::IPv6),
            IpType::All => None,
        }
    }

    pub fn output_mode(&self) -> OutputMode {
        match &self.file {
            Some(path) => OutputMode::CsvFile(path.clone()),
            None => OutputMode::Console,
        }
    }

    /// `stderrlog` verbosity (0 = errors only, 4 = trace); warnings by default.
    pub fn verbosity(&self) -> usize {
        if self.quiet {
            0
        } else {
            (1 + self.verbose as usize).min(4)
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["cloudip", "-v", "google"]).unwrap();
        assert_eq!(args.vendor, Vendor::Google);
        assert_eq!(args.family_filter(), None);
        assert_eq!(args.output_mode(), OutputMode::Console);
        assert_eq!(args.verbosity(), 1);
    }

    #[test]
    fn test_args_ip_type_and_file() {
        let args = Args::try_parse_from([
            "cloudip", "--vendor", "azure", "-i", "6", "-f", "azure.csv", "--verbose", "--verbose",
        ])
        .unwrap();
        assert_eq!(args.vendor, Vendor::Azure);
        assert_eq!(args.family_filter(), Some(AddressFamily::IPv6));
        assert_eq!(
            args.output_mode(),
            OutputMode::CsvFile(PathBuf::from("azure.csv"))
        );
        assert_eq!(args.verbosity(), 3);
    }

    #[test]
    fn test_args_quiet() {
        let args = Args::try_parse_from(["cloudip", "-v", "aws", "-q"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_args_rejects_unknown_ip_type() {
        assert!(Args::try_parse_from(["cloudip", "-v", "aws", "-i", "5"]).is_err());
    }

    #[test]
    fn test_args_vendor_is_required() {
        assert!(Args::try_parse_from(["cloudip", "-i", "4"]).is_err());
    }
}
