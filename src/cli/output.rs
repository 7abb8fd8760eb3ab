use cloudip::RunReport;
use comfy_table::presets::NOTHING;
use comfy_table::*;

/*-------------------------------------------------------------------------------------------------
  Output Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Summary Table
--------------------------------------------------------------------------------------*/

pub fn summary_table(report: &RunReport) -> Table {
    let metadata = &report.metadata;
    let summary = &report.summary;

    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Vendor").add_attribute(Attribute::Bold),
        Cell::new(metadata.vendor),
    ]);
    match &metadata.cloud {
        Some(cloud) => {
            table.add_row(vec![
                Cell::new("Change Number").add_attribute(Attribute::Bold),
                Cell::new(&metadata.sync_token),
            ]);
            table.add_row(vec![
                Cell::new("Cloud").add_attribute(Attribute::Bold),
                Cell::new(cloud),
            ]);
        }
        None => {
            table.add_row(vec![
                Cell::new("Sync Token").add_attribute(Attribute::Bold),
                Cell::new(&metadata.sync_token),
            ]);
        }
    }
    if let Some(created) = metadata.created {
        table.add_row(vec![
            Cell::new("Created").add_attribute(Attribute::Bold),
            Cell::new(created.format("%Y-%m-%d %H:%M:%S UTC")),
        ]);
    }
    table.add_row(vec![
        Cell::new("Records").add_attribute(Attribute::Bold),
        Cell::new(summary.records),
    ]);
    table.add_row(vec![
        Cell::new("IPv4 Prefixes").add_attribute(Attribute::Bold),
        Cell::new(summary.ipv4_prefixes),
    ]);
    table.add_row(vec![
        Cell::new("IPv6 Prefixes").add_attribute(Attribute::Bold),
        Cell::new(summary.ipv6_prefixes),
    ]);
    table.add_row(vec![
        Cell::new("Rows Written").add_attribute(Attribute::Bold),
        Cell::new(summary.rows),
    ]);

    // Right-align the values column
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    table
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use cloudip::{DatasetMetadata, RunSummary, Vendor};

    #[test]
    fn test_summary_table_for_azure() {
        let report = RunReport {
            metadata: DatasetMetadata {
                vendor: Vendor::Azure,
                sync_token: "184".to_string(),
                created: None,
                cloud: Some("Public".to_string()),
                records: 2,
            },
            summary: RunSummary {
                records: 2,
                rows: 2,
                ipv4_prefixes: 2,
                ipv6_prefixes: 1,
            },
        };

        let rendered = summary_table(&report).to_string();
        assert!(rendered.contains("Change Number"));
        assert!(rendered.contains("Public"));
        assert!(rendered.contains("Rows Written"));
        assert!(!rendered.contains("Created"));
    }
}
