//! JSON document writer
//!
//! Writes one JSON document per accommodation to any [`Write`]
//! destination, usually stdout.

use crate::error::{Error, Result};
use crate::model::Accommodation;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::Write;

/// Indent used for pretty output
const PRETTY_INDENT: &[u8] = b"    ";

/// Destination for mapped records
pub trait RecordSink {
    /// Emit one record
    ///
    /// Serialization failures are reported as [`Error::Mapping`] so the
    /// caller can skip the record; write failures are fatal.
    fn emit(&mut self, record: &Accommodation) -> Result<()>;
}

/// Layout of emitted documents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Multi-line, 4-space indent
    #[default]
    Pretty,
    /// One compact document per line
    Json,
}

/// Streams records as JSON documents
pub struct JsonWriter<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> JsonWriter<W> {
    /// Create a writer with the given layout
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    fn render(&self, record: &Accommodation) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(512);
        let outcome = match self.format {
            OutputFormat::Pretty => {
                let formatter = PrettyFormatter::with_indent(PRETTY_INDENT);
                let mut ser = Serializer::with_formatter(&mut buf, formatter);
                record.serialize(&mut ser)
            }
            OutputFormat::Json => {
                let mut ser = Serializer::new(&mut buf);
                record.serialize(&mut ser)
            }
        };
        outcome.map_err(|e| Error::mapping(record.meta.id.as_str(), e.to_string()))?;
        buf.push(b'\n');
        Ok(buf)
    }
}

impl<W: Write> RecordSink for JsonWriter<W> {
    fn emit(&mut self, record: &Accommodation) -> Result<()> {
        // Render fully before writing so a failed record leaves no partial output
        let buf = self.render(record)?;
        self.writer.write_all(&buf)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> std::fmt::Debug for JsonWriter<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonWriter")
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

/// Collects records in memory
impl RecordSink for Vec<Accommodation> {
    fn emit(&mut self, record: &Accommodation) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }
}
