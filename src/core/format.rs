use crate::core::address_family::AddressFamily;
use crate::core::records::PrefixRecord;
use crate::core::sink::OutputMode;

/*-------------------------------------------------------------------------------------------------
  Record Formatter
-------------------------------------------------------------------------------------------------*/

/// A formatted output row; console rows carry a single prefix literal.
pub type Row = Vec<String>;

/// Renders [PrefixRecord]s into rows for the selected [OutputMode].
pub struct RecordFormatter;

impl RecordFormatter {
    /// Header row for the record type; only CSV output has one.
    pub fn header<R: PrefixRecord>(mode: &OutputMode) -> Option<&'static [&'static str]> {
        match mode {
            OutputMode::Console => None,
            OutputMode::CsvFile(_) => Some(R::CSV_HEADER),
        }
    }

    /// Format a record: one row per matching prefix literal on the console, or at most one CSV
    /// row per record.
    pub fn format<R: PrefixRecord>(
        record: &R,
        filter: Option<AddressFamily>,
        mode: &OutputMode,
    ) -> Vec<Row> {
        match mode {
            OutputMode::Console => record
                .prefixes(filter)
                .into_iter()
                .map(|prefix| vec![prefix.to_string()])
                .collect(),
            OutputMode::CsvFile(_) => record.csv_fields(filter).into_iter().collect(),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::records::aws::tests::test_aws_ipv4_prefix;
    use crate::core::records::azure::tests::test_azure_service_tag;
    use crate::core::records::{AwsPrefix, AzureServiceTag, GooglePrefix};
    use std::path::PathBuf;

    fn csv_mode() -> OutputMode {
        OutputMode::CsvFile(PathBuf::from("prefixes.csv"))
    }

    #[test]
    fn test_headers() {
        assert_eq!(RecordFormatter::header::<AwsPrefix>(&OutputMode::Console), None);
        assert_eq!(
            RecordFormatter::header::<AwsPrefix>(&csv_mode()).unwrap(),
            ["Prefix", "Region", "Service", "Network Border Group"]
        );
        assert_eq!(
            RecordFormatter::header::<GooglePrefix>(&csv_mode()).unwrap(),
            ["Prefix"]
        );
        assert_eq!(
            RecordFormatter::header::<AzureServiceTag>(&csv_mode())
                .unwrap()
                .join(","),
            "Name,ID,Change Number,Region,Region ID,Platform,System Service,Prefixes,Network Features"
        );
    }

    #[test]
    fn test_console_rows_discard_metadata() {
        let rows = RecordFormatter::format(
            &test_aws_ipv4_prefix(),
            Some(AddressFamily::IPv4),
            &OutputMode::Console,
        );
        assert_eq!(rows, vec![vec!["10.0.0.0/8".to_string()]]);
    }

    #[test]
    fn test_console_rows_for_azure_filter_each_literal() {
        let tag = test_azure_service_tag();

        let ipv4 = RecordFormatter::format(&tag, Some(AddressFamily::IPv4), &OutputMode::Console);
        assert_eq!(ipv4, vec![vec!["13.64.0.0/11".to_string()]]);

        let ipv6 = RecordFormatter::format(&tag, Some(AddressFamily::IPv6), &OutputMode::Console);
        assert_eq!(ipv6, vec![vec!["2603:1000::/24".to_string()]]);

        let all = RecordFormatter::format(&tag, None, &OutputMode::Console);
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_csv_row_per_record() {
        let tag = test_azure_service_tag();
        let rows = RecordFormatter::format(&tag, Some(AddressFamily::IPv4), &csv_mode());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][7], "13.64.0.0/11");

        let aws = RecordFormatter::format(
            &test_aws_ipv4_prefix(),
            Some(AddressFamily::IPv6),
            &csv_mode(),
        );
        assert!(aws.is_empty());
    }
}
