//! Append-only analyzed-comment store

use crate::StoreError;
use commentscope_domain::AnalyzedComment;
use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Column order of the analyzed file, fixed across runs
const HEADER: [&str; 12] = [
    "comment_id",
    "body",
    "source",
    "bias",
    "score",
    "date",
    "video_title",
    "author",
    "category",
    "frame",
    "confidence",
    "reasoning",
];

/// Scan the analyzed file for comment IDs already recorded
///
/// Returns the empty set when the file does not exist. Only the identity
/// column is inspected, so a file with odd values in other columns still
/// yields a usable skip-set.
pub fn load_processed_ids(path: &Path) -> Result<HashSet<String>, StoreError> {
    if !path.exists() {
        return Ok(HashSet::new());
    }

    let file = File::open(path).map_err(|e| StoreError::io(path, e))?;
    let mut reader = csv::Reader::from_reader(file);

    let id_index = reader
        .headers()?
        .iter()
        .position(|name| name == "comment_id");

    let mut ids = HashSet::new();
    if let Some(index) = id_index {
        for record in reader.records() {
            let record = record?;
            if let Some(id) = record.get(index) {
                ids.insert(id.to_string());
            }
        }
    }
    Ok(ids)
}

/// Read the full analyzed file (visualization input)
pub fn read_analyzed(path: &Path) -> Result<Vec<AnalyzedComment>, StoreError> {
    let file = File::open(path).map_err(|e| StoreError::io(path, e))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Append-only writer over the analyzed file
///
/// Rows are flushed to the file as they are appended, so completed work
/// survives an interrupted run. A fresh file gets the header immediately;
/// a resumed file is opened in append mode and the header is never
/// rewritten.
pub struct AnalysisWriter {
    writer: csv::Writer<File>,
    path: std::path::PathBuf,
}

impl AnalysisWriter {
    /// Open the analyzed file for writing
    ///
    /// With `resume` set, the existing file is opened for appending.
    /// Otherwise the file is created (truncating any previous content) and
    /// the header row is written and flushed before any records.
    pub fn open(path: &Path, resume: bool) -> Result<Self, StoreError> {
        let file = if resume {
            OpenOptions::new()
                .append(true)
                .open(path)
                .map_err(|e| StoreError::io(path, e))?
        } else {
            File::create(path).map_err(|e| StoreError::io(path, e))?
        };

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if !resume {
            writer.write_record(HEADER)?;
            writer.flush().map_err(|e| StoreError::io(path, e))?;
        }

        Ok(Self {
            writer,
            path: path.to_path_buf(),
        })
    }

    /// Append one row and flush it to the file before returning
    pub fn append(&mut self, record: &AnalyzedComment) -> Result<(), StoreError> {
        self.writer.serialize(record)?;
        self.writer
            .flush()
            .map_err(|e| StoreError::io(&self.path, e))
    }
}
