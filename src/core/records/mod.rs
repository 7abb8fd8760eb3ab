use crate::core::address_family::{classify, AddressFamily};

/*-------------------------------------------------------------------------------------------------
  Prefix Records
-------------------------------------------------------------------------------------------------*/

pub mod aws;
pub mod azure;
pub mod google;

pub use aws::AwsPrefix;
pub use azure::AzureServiceTag;
pub use google::GooglePrefix;

/// Separator used to join list-valued fields into a single CSV field.
pub const LIST_DELIMITER: &str = ", ";

/// A normalized vendor prefix record that can be rendered as console lines or a CSV row.
pub trait PrefixRecord {
    /// CSV column names for this record type.
    const CSV_HEADER: &'static [&'static str];

    /// Prefix literals in this record that belong to the filtered address family.
    fn prefixes(&self, filter: Option<AddressFamily>) -> Vec<&str>;

    /// Address family of each literal returned by [prefixes](Self::prefixes), in order.
    fn families(&self, filter: Option<AddressFamily>) -> Vec<AddressFamily> {
        self.prefixes(filter).into_iter().map(classify).collect()
    }

    /// CSV fields for this record, or `None` when the record is excluded by the filter.
    fn csv_fields(&self, filter: Option<AddressFamily>) -> Option<Vec<String>>;
}

/// Join list-valued fields with [LIST_DELIMITER], leaving no trailing delimiter.
pub(crate) fn join_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| item.as_ref().to_string())
        .collect::<Vec<String>>()
        .join(LIST_DELIMITER)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_list() {
        assert_eq!(join_list(["API", "NSG", "UDR"]), "API, NSG, UDR");
        assert_eq!(join_list(["API"]), "API");
        assert_eq!(join_list(Vec::<&str>::new()), "");
    }
}
