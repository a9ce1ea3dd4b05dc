//! Streaming CSV split processor behind the `money-split` binary.
//!
//! Each input row names a value, a number of parts and optionally the number of
//! decimal places to split with. Rows are processed in order; rows that can't be
//! parsed or split are logged and skipped.

use crate::error::Result;
use crate::value::Value;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use serde::Deserialize;
use std::io::{Read, Write};

/// Raw split request as read from CSV.
#[derive(Debug, Deserialize)]
pub struct SplitRecord {
    /// Canonical text form, e.g. `12.34 ISO4217-EUR`
    pub value: String,

    /// Number of parts
    pub parts: i64,

    /// Decimal places of the split granularity. Defaults to the currency's
    /// smallest unit.
    pub decimals: Option<i32>,
}

impl SplitRecord {
    /// Parses the value and performs the split.
    pub fn split(&self) -> Result<Vec<Value>> {
        let value = Value::parse(self.value.trim())?;
        match self.decimals {
            Some(decimals) => value.split_with_decimals(self.parts, decimals),
            None => value.split(self.parts),
        }
    }
}

/// The parts of one successfully split row.
#[derive(Debug, Clone)]
pub struct SplitResult {
    /// 1-indexed CSV line of the request, counting the header
    pub row: usize,

    pub parts: Vec<Value>,
}

/// Collects split results in input order.
#[derive(Debug, Default)]
pub struct SplitBatch {
    results: Vec<SplitResult>,
}

impl SplitBatch {
    pub fn new() -> Self {
        SplitBatch {
            results: Vec::new(),
        }
    }

    /// Processes split requests from a CSV reader.
    ///
    /// Invalid records are logged at warn level and skipped.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<SplitRecord>().enumerate() {
            let row = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(record) => {
                    if let Err(e) = self.process_record(&record, row) {
                        warn!("Row {}: {}", row, e);
                    }
                }
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row, e);
                }
            }
        }

        Ok(())
    }

    /// Splits a single record and stores the parts.
    pub fn process_record(&mut self, record: &SplitRecord, row: usize) -> Result<()> {
        let parts = record.split()?;
        debug!(
            "Row {}: Split {} into {} parts",
            row,
            record.value,
            parts.len()
        );
        self.results.push(SplitResult { row, parts });
        Ok(())
    }

    pub fn results(&self) -> &[SplitResult] {
        &self.results
    }

    /// Writes one line per part: source row, part index and amount in
    /// canonical text form.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["row", "index", "amount"])?;

        for result in &self.results {
            for (index, part) in result.parts.iter().enumerate() {
                csv_writer.write_record([
                    result.row.to_string(),
                    index.to_string(),
                    part.to_string(),
                ])?;
            }
        }

        csv_writer.flush()?;
        Ok(())
    }
}
