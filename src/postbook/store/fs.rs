use super::{DataStore, Diagnostic, LoadReport};
use crate::error::{PostbookError, Result};
use crate::model::{Record, FIELDS};
use crate::validate::{valid_age, valid_email, valid_phone};
use csv::StringRecord;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// CSV-backed store: one file, header row plus one row per record.
pub struct FileStore {
    path: PathBuf,
    records: Vec<Record>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn raw_line(row: &StringRecord) -> String {
        row.iter().collect::<Vec<_>>().join(",")
    }
}

fn skip(diagnostics: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    tracing::warn!("{diagnostic}");
    diagnostics.push(diagnostic);
}

impl DataStore for FileStore {
    fn reload(&mut self) -> Result<LoadReport> {
        // An unopenable file is the one hard failure; everything past this
        // point degrades to per-row diagnostics.
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(PostbookError::Csv)?;
        let headers = reader.headers().map_err(PostbookError::Csv)?.clone();

        let mut seen: HashSet<u32> = HashSet::new();
        let mut records = Vec::new();
        let mut diagnostics = Vec::new();

        for (i, row) in reader.records().enumerate() {
            let row_number = i + 1;
            let row = match row {
                Ok(row) => row,
                Err(err) => {
                    skip(
                        &mut diagnostics,
                        Diagnostic::CorruptRow {
                            row: row_number,
                            raw: err.to_string(),
                        },
                    );
                    continue;
                }
            };
            let record: Record = match row.deserialize(Some(&headers)) {
                Ok(record) => record,
                Err(_) => {
                    skip(
                        &mut diagnostics,
                        Diagnostic::CorruptRow {
                            row: row_number,
                            raw: Self::raw_line(&row),
                        },
                    );
                    continue;
                }
            };
            if seen.contains(&record.id) {
                skip(
                    &mut diagnostics,
                    Diagnostic::DuplicateId {
                        row: row_number,
                        id: record.id,
                        raw: Self::raw_line(&row),
                    },
                );
                continue;
            }
            if !(valid_age(&record.age) && valid_email(&record.email) && valid_phone(&record.phone))
            {
                skip(
                    &mut diagnostics,
                    Diagnostic::CorruptRow {
                        row: row_number,
                        raw: Self::raw_line(&row),
                    },
                );
                continue;
            }
            seen.insert(record.id);
            records.push(record);
        }

        let report = LoadReport {
            loaded: records.len(),
            diagnostics,
        };
        self.records = records;
        Ok(report)
    }

    fn persist(&mut self) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(PostbookError::Csv)?;
        writer.write_record(FIELDS).map_err(PostbookError::Csv)?;
        for record in &self.records {
            writer.serialize(record).map_err(PostbookError::Csv)?;
        }
        writer.flush().map_err(PostbookError::Io)?;
        Ok(())
    }

    fn records(&self) -> &[Record] {
        &self.records
    }

    fn records_mut(&mut self) -> &mut Vec<Record> {
        &mut self.records
    }
}
