use crate::core::errors::{Error, Result};
use log::{debug, info};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/*-------------------------------------------------------------------------------------------------
  Output Mode
-------------------------------------------------------------------------------------------------*/

/// Where the formatted prefixes are written; selected once per run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OutputMode {
    /// One prefix literal per line on standard output.
    Console,

    /// Vendor-specific CSV records written to a file, created or truncated.
    CsvFile(PathBuf),
}

/*-------------------------------------------------------------------------------------------------
  Output Sink
-------------------------------------------------------------------------------------------------*/

/// Destination for formatted rows.
pub trait OutputSink {
    fn write_header(&mut self, header: &[&str]) -> Result<()>;

    fn write_row(&mut self, row: &[String]) -> Result<()>;

    /// Flush buffered output. Called once after the last row.
    fn finish(&mut self) -> Result<()>;
}

/*--------------------------------------------------------------------------------------
  Console Sink
--------------------------------------------------------------------------------------*/

/// Writes each row as a line; headers are not printed.
///
/// A reader that closes the pipe early (`cloudip -v aws | head`) ends the output; the remaining
/// rows are discarded without error.
pub struct ConsoleSink<W: Write> {
    writer: W,
    closed: bool,
}

impl ConsoleSink<io::StdoutLock<'static>> {
    pub fn stdout() -> Self {
        Self::new(io::stdout().lock())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            closed: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn check(&mut self, result: io::Result<()>) -> Result<()> {
        match result {
            Err(error) if error.kind() == io::ErrorKind::BrokenPipe => {
                debug!("Console output closed by reader");
                self.closed = true;
                Ok(())
            }
            result => result.map_err(|error| Error::sink("stdout", error)),
        }
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn write_header(&mut self, _header: &[&str]) -> Result<()> {
        Ok(())
    }

    fn write_row(&mut self, row: &[String]) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        let result = writeln!(self.writer, "{}", row.join(","));
        self.check(result)
    }

    fn finish(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        let result = self.writer.flush();
        self.check(result)
    }
}

/*--------------------------------------------------------------------------------------
  CSV Sink
--------------------------------------------------------------------------------------*/

/// Writes rows as CSV records. Fields containing the delimiter (joined lists) are quoted.
///
/// The underlying [csv::Writer] flushes and releases its handle when dropped, so a run that
/// fails part-way through still closes the file.
pub struct CsvSink<W: Write> {
    target: String,
    writer: csv::Writer<W>,
}

impl CsvSink<File> {
    /// Create (or truncate) the CSV file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let target = path.display().to_string();
        info!("Saving prefixes to CSV file: {}", target);

        let writer = csv::Writer::from_path(path).map_err(|error| Error::sink(&target, error))?;
        Ok(Self { target, writer })
    }
}

impl<W: Write> CsvSink<W> {
    pub fn from_writer(target: impl Into<String>, writer: W) -> Self {
        Self {
            target: target.into(),
            writer: csv::Writer::from_writer(writer),
        }
    }

    /// Unwrap the underlying writer, flushing buffered records.
    pub fn into_inner(self) -> Result<W> {
        let target = self.target;
        self.writer
            .into_inner()
            .map_err(|error| Error::sink(target, error.into_error()))
    }
}

impl<W: Write> OutputSink for CsvSink<W> {
    fn write_header(&mut self, header: &[&str]) -> Result<()> {
        self.writer
            .write_record(header)
            .map_err(|error| Error::sink(&self.target, error))
    }

    fn write_row(&mut self, row: &[String]) -> Result<()> {
        self.writer
            .write_record(row)
            .map_err(|error| Error::sink(&self.target, error))
    }

    fn finish(&mut self) -> Result<()> {
        debug!("Flushing CSV output to {}", self.target);
        self.writer
            .flush()
            .map_err(|error| Error::sink(&self.target, error))
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|field| field.to_string()).collect()
    }

    #[test]
    fn test_console_sink_writes_lines_without_header() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.write_header(&["Prefix"]).unwrap();
        sink.write_row(&row(&["8.8.8.0/24"])).unwrap();
        sink.write_row(&row(&["2001:4860::/32"])).unwrap();
        sink.finish().unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "8.8.8.0/24\n2001:4860::/32\n");
    }

    /// Accepts `capacity` bytes, then fails every write with `kind`.
    struct ClosingWriter {
        written: Vec<u8>,
        capacity: usize,
        kind: io::ErrorKind,
    }

    impl ClosingWriter {
        fn new(capacity: usize, kind: io::ErrorKind) -> Self {
            Self {
                written: Vec::new(),
                capacity,
                kind,
            }
        }
    }

    impl Write for ClosingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written.len() + buf.len() > self.capacity {
                return Err(io::Error::from(self.kind));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_console_sink_stops_quietly_on_broken_pipe() {
        let mut sink = ConsoleSink::new(ClosingWriter::new(11, io::ErrorKind::BrokenPipe));
        sink.write_row(&row(&["8.8.8.0/24"])).unwrap();
        sink.write_row(&row(&["2001:4860::/32"])).unwrap();
        sink.write_row(&row(&["34.80.0.0/15"])).unwrap();
        sink.finish().unwrap();
        assert!(sink.closed);

        assert_eq!(sink.into_inner().written, b"8.8.8.0/24\n");
    }

    #[test]
    fn test_console_sink_reports_other_write_errors() {
        let mut sink = ConsoleSink::new(ClosingWriter::new(0, io::ErrorKind::PermissionDenied));
        let error = sink.write_row(&row(&["8.8.8.0/24"])).unwrap_err();
        assert!(matches!(error, Error::Sink { .. }));
        assert!(error.to_string().starts_with("unable to write stdout"));
    }

    #[test]
    fn test_csv_sink_quotes_joined_lists() {
        let mut sink = CsvSink::from_writer("memory", Vec::new());
        sink.write_header(&["Name", "Prefixes"]).unwrap();
        sink.write_row(&row(&["AzureCloud", "13.64.0.0/11, 2603:1000::/24"]))
            .unwrap();
        sink.write_row(&row(&["ActionGroup", "13.66.60.119/32"]))
            .unwrap();
        sink.finish().unwrap();

        let output = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert_eq!(
            output,
            "Name,Prefixes\n\
             AzureCloud,\"13.64.0.0/11, 2603:1000::/24\"\n\
             ActionGroup,13.66.60.119/32\n"
        );
    }

    #[test]
    fn test_csv_sink_creates_and_truncates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefixes.csv");
        fs::write(&path, "stale content that should disappear\n").unwrap();

        let mut sink = CsvSink::create(&path).unwrap();
        sink.write_header(&["Prefix"]).unwrap();
        sink.write_row(&row(&["8.8.8.0/24"])).unwrap();
        sink.finish().unwrap();
        drop(sink);

        assert_eq!(fs::read_to_string(&path).unwrap(), "Prefix\n8.8.8.0/24\n");
    }

    #[test]
    fn test_csv_sink_flushes_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dropped.csv");

        {
            let mut sink = CsvSink::create(&path).unwrap();
            sink.write_header(&["Prefix"]).unwrap();
            // Dropped without calling finish()
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "Prefix\n");
    }

    #[test]
    fn test_csv_sink_create_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("prefixes.csv");
        let error = CsvSink::create(&path).err().unwrap();
        assert!(matches!(error, Error::Sink { .. }));
    }
}
