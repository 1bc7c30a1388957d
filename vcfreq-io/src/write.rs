use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::report::AnnotatedReport;

pub trait ReportWrite {
    ///
    /// Write the report as tab-delimited text: metadata (if any), header, rows.
    ///
    /// # Arguments
    /// - writer: where to write
    fn write_to<W: Write>(&self, writer: W) -> std::io::Result<()>;

    ///
    /// Write the report to disk as a tab-delimited file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_tsv<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()>;

    ///
    /// Write the report to disk as a gzipped tab-delimited file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_tsv_gz<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()>;
}

impl ReportWrite for AnnotatedReport {
    fn write_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writer.write_all(self.metadata.as_bytes())?;
        writeln!(writer, "{}", self.columns.join("\t"))?;
        for row in &self.rows {
            writeln!(writer, "{}", row.join("\t"))?;
        }
        writer.flush()
    }

    fn write_tsv<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))
    }

    fn write_tsv_gz<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        self.write_to(&mut encoder)?;
        encoder.finish()?.flush()
    }
}

///
/// Write a report, gzip compressing when the path ends in `.gz`.
///
pub fn write_report<T: AsRef<Path>>(report: &AnnotatedReport, path: T) -> std::io::Result<()> {
    let path = path.as_ref();
    match path.extension().and_then(OsStr::to_str) {
        Some("gz") => report.write_tsv_gz(path),
        _ => report.write_tsv(path),
    }
}
