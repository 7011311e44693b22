//! Document aggregates produced by parsing.
//!
//! A parsed file becomes a [`NachaDocument`]: the single artifact that
//! crosses the codec boundary in both directions. Diagnostics ride on
//! the document rather than failing the parse.

use crate::error::{Diagnostic, Result};
use crate::field;
use crate::record::{BatchControl, BatchHeader, EntryDetail, FileControl, FileHeader};
use serde::Serialize;
use std::io::Write;

/// A batch: header, entries in arrival order, and the control record
/// that closed it (absent when the input truncated or recovered).
#[derive(Debug, Clone, Default)]
pub struct Batch {
    pub header: BatchHeader,
    pub entries: Vec<EntryDetail>,
    pub control: Option<BatchControl>,
}

impl Batch {
    /// Entry plus addenda line count for this batch.
    pub fn entry_addenda_count(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| 1 + entry.addenda.len())
            .sum()
    }
}

/// The root aggregate: optional file header, ordered batches, optional
/// file control, filler count, and accumulated diagnostics.
#[derive(Debug, Clone, Default)]
pub struct NachaDocument {
    pub header: Option<FileHeader>,
    pub batches: Vec<Batch>,
    pub control: Option<FileControl>,

    /// All-nines filler lines seen at parse time.
    pub padding_lines: usize,

    pub diagnostics: Vec<Diagnostic>,
}

/// One entry rendered for the CSV summary.
#[derive(Serialize)]
struct EntryRow<'a> {
    batch: u32,
    trace_number: &'a str,
    transaction_code: &'a str,
    flow: String,
    class: String,
    routing: &'a str,
    account: &'a str,
    amount: String,
    individual_name: &'a str,
}

impl NachaDocument {
    /// Total entries across all batches.
    pub fn entry_count(&self) -> usize {
        self.batches.iter().map(|batch| batch.entries.len()).sum()
    }

    /// Writes a CSV summary of every entry, batch by batch.
    ///
    /// Amounts are rendered as signed 2-decimal values; classification
    /// columns come from the transaction code.
    pub fn write_summary<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        for batch in &self.batches {
            for entry in &batch.entries {
                csv_writer.serialize(EntryRow {
                    batch: batch.header.batch_number,
                    trace_number: &entry.trace_number,
                    transaction_code: &entry.transaction_code,
                    flow: entry.flow().to_string(),
                    class: entry.transfer_class().to_string(),
                    routing: &entry.receiving_dfi,
                    account: &entry.account_number,
                    amount: field::format_cents(entry.amount),
                    individual_name: &entry.individual_name,
                })?;
            }
        }

        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cents::Cents;
    use crate::record::AddendaRecord;

    #[test]
    fn test_entry_addenda_count_includes_addenda() {
        let mut batch = Batch::default();
        batch.entries.push(EntryDetail::default());
        batch.entries.push(EntryDetail {
            addenda: vec![AddendaRecord::default(), AddendaRecord::default()],
            ..Default::default()
        });
        assert_eq!(batch.entry_addenda_count(), 4);
    }

    #[test]
    fn test_write_summary_renders_classification_and_amount() {
        let mut document = NachaDocument::default();
        let mut batch = Batch {
            header: BatchHeader {
                batch_number: 1,
                ..Default::default()
            },
            ..Default::default()
        };
        batch.entries.push(EntryDetail {
            transaction_code: "27".to_string(),
            receiving_dfi: "07640125".to_string(),
            account_number: "00123".to_string(),
            amount: Cents::new(-250),
            individual_name: "JOHN ROE".to_string(),
            trace_number: "076401250000002".to_string(),
            ..Default::default()
        });
        document.batches.push(batch);

        let mut output = Vec::new();
        document.write_summary(&mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with(
            "batch,trace_number,transaction_code,flow,class,routing,account,amount,individual_name"
        ));
        assert!(text.contains("1,076401250000002,27,debit,card-to-bank,07640125,00123,-2.50,JOHN ROE"));
    }

    #[test]
    fn test_empty_document_counts() {
        let document = NachaDocument::default();
        assert_eq!(document.entry_count(), 0);
        assert!(document.header.is_none());
        assert!(document.control.is_none());
    }
}
