use crate::core::address_family::AddressFamily;
use crate::core::client::Fetch;
use crate::core::dataset::{DatasetMetadata, VendorDataset};
use crate::core::errors::Result;
use crate::core::format::RecordFormatter;
use crate::core::records::PrefixRecord;
use crate::core::sink::{ConsoleSink, CsvSink, OutputMode, OutputSink};
use crate::core::vendor::Vendor;
use log::{debug, info};

/*-------------------------------------------------------------------------------------------------
  Run Report
-------------------------------------------------------------------------------------------------*/

/// Counts collected while emitting a dataset.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RunSummary {
    /// Records passed to the formatter.
    pub records: usize,

    /// Rows written to the sink, excluding the header.
    pub rows: usize,

    /// IPv4 prefix literals written.
    pub ipv4_prefixes: usize,

    /// IPv6 prefix literals written.
    pub ipv6_prefixes: usize,
}

impl RunSummary {
    fn count_prefixes<R: PrefixRecord>(&mut self, record: &R, filter: Option<AddressFamily>) {
        for family in record.families(filter) {
            match family {
                AddressFamily::IPv4 => self.ipv4_prefixes += 1,
                AddressFamily::IPv6 => self.ipv6_prefixes += 1,
            }
        }
    }
}

/// Result of a successful pipeline run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RunReport {
    pub metadata: DatasetMetadata,
    pub summary: RunSummary,
}

/*-------------------------------------------------------------------------------------------------
  Pipeline
-------------------------------------------------------------------------------------------------*/

/// Fetches, parses, and emits the IP ranges of one vendor.
pub struct Pipeline<F: Fetch> {
    fetcher: F,
    vendor: Vendor,
    filter: Option<AddressFamily>,
}

impl<F: Fetch> Pipeline<F> {
    /// Create a pipeline for `vendor`; a `filter` of `None` emits both address families.
    pub fn new(fetcher: F, vendor: Vendor, filter: Option<AddressFamily>) -> Self {
        Self {
            fetcher,
            vendor,
            filter,
        }
    }

    pub fn vendor(&self) -> Vendor {
        self.vendor
    }

    pub fn filter(&self) -> Option<AddressFamily> {
        self.filter
    }

    /// Fetch and parse the vendor dataset.
    pub fn load(&self) -> Result<VendorDataset> {
        let json = self.fetcher.fetch(self.vendor)?;
        VendorDataset::from_json(self.vendor, &json)
    }

    /// Run the pipeline, writing to the sink selected by `mode`. The CSV file is only created
    /// after the dataset has been fetched and parsed.
    pub fn run(&self, mode: &OutputMode) -> Result<RunReport> {
        let dataset = self.load()?;

        let summary = match mode {
            OutputMode::Console => {
                let mut sink = ConsoleSink::stdout();
                self.emit(&dataset, mode, &mut sink)?
            }
            OutputMode::CsvFile(path) => {
                let mut sink = CsvSink::create(path)?;
                self.emit(&dataset, mode, &mut sink)?
            }
        };

        Ok(RunReport {
            metadata: dataset.metadata(),
            summary,
        })
    }

    /// Format the dataset records for `mode` and write them to `sink`, in source order.
    pub fn emit(
        &self,
        dataset: &VendorDataset,
        mode: &OutputMode,
        sink: &mut dyn OutputSink,
    ) -> Result<RunSummary> {
        let summary = match dataset {
            VendorDataset::Aws(aws) => {
                emit_records(aws.prefixes(self.filter), self.filter, mode, sink)?
            }
            VendorDataset::Google(google) => {
                emit_records(google.prefixes(self.filter), self.filter, mode, sink)?
            }
            VendorDataset::Azure(azure) => {
                emit_records(azure.values.iter(), self.filter, mode, sink)?
            }
        };

        sink.finish()?;

        info!(
            "Wrote {} rows ({} IPv4 and {} IPv6 prefixes) from {} {} records",
            summary.rows,
            summary.ipv4_prefixes,
            summary.ipv6_prefixes,
            summary.records,
            self.vendor
        );
        Ok(summary)
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

fn emit_records<'r, R, I>(
    records: I,
    filter: Option<AddressFamily>,
    mode: &OutputMode,
    sink: &mut dyn OutputSink,
) -> Result<RunSummary>
where
    R: PrefixRecord + 'r,
    I: IntoIterator<Item = &'r R>,
{
    let mut summary = RunSummary::default();

    if let Some(header) = RecordFormatter::header::<R>(mode) {
        debug!("Writing header: {}", header.join(","));
        sink.write_header(header)?;
    }

    for record in records {
        summary.records += 1;
        summary.count_prefixes(record, filter);

        for row in RecordFormatter::format(record, filter, mode) {
            sink.write_row(&row)?;
            summary.rows += 1;
        }
    }

    Ok(summary)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
