//! Sequential assembly of decoded records into a document.
//!
//! The assembler is a state machine advanced one line at a time: the
//! only mutable cursors are the open batch and its last entry. It never
//! aborts; irregular input degrades into diagnostics and the (possibly
//! partial) document is always returned.
//!
//! File-level monetary totals are accumulated while entries stream past
//! and take precedence over whatever the file control line claims.

use crate::cents::Cents;
use crate::decode::{self, DecodeError};
use crate::document::{Batch, NachaDocument};
use crate::error::{Diagnostic, DiagnosticKind};
use crate::record::RECORD_LEN;
use crate::transaction::TxFlow;
use log::{debug, warn};

/// Parses NACHA text into a document plus accumulated diagnostics.
///
/// Blank lines are skipped; every other line is decoded by its leading
/// record type character. Short and long lines are tolerated with a
/// diagnostic.
pub fn parse(text: &str) -> NachaDocument {
    let mut assembler = Assembler::new();
    for (index, raw) in text.lines().enumerate() {
        assembler.push_line(index + 1, raw);
    }
    assembler.finish()
}

struct Assembler {
    document: NachaDocument,
    current_batch: Option<Batch>,

    /// Line where the open batch's header appeared.
    batch_open_line: usize,

    /// Running file-level totals; authoritative over on-line values.
    total_debit: Cents,
    total_credit: Cents,

    /// Filler lines not yet known to be trailing.
    pending_padding: Vec<usize>,
}

impl Assembler {
    fn new() -> Self {
        Assembler {
            document: NachaDocument::default(),
            current_batch: None,
            batch_open_line: 0,
            total_debit: Cents::ZERO,
            total_credit: Cents::ZERO,
            pending_padding: Vec::new(),
        }
    }

    fn push_line(&mut self, line_no: usize, raw: &str) {
        if raw.trim().is_empty() {
            return;
        }

        let mut line = raw;
        let length = line.chars().count();
        if length < RECORD_LEN {
            self.diagnose(line_no, DiagnosticKind::ShortLine { length });
        } else if length > RECORD_LEN {
            self.diagnose(line_no, DiagnosticKind::LongLine { length });
            let cut = line
                .char_indices()
                .nth(RECORD_LEN)
                .map(|(byte, _)| byte)
                .unwrap_or(line.len());
            line = &line[..cut];
        }

        if decode::is_block_padding(line) {
            self.document.padding_lines += 1;
            self.pending_padding.push(line_no);
            return;
        }

        // A structured record after filler means that filler was not
        // trailing block padding after all.
        for padding_line in std::mem::take(&mut self.pending_padding) {
            self.diagnose(padding_line, DiagnosticKind::PaddingMidStream);
        }

        match line.chars().next() {
            Some('1') => self.on_file_header(line_no, line),
            Some('5') => self.on_batch_header(line_no, line),
            Some('6') => self.on_entry_detail(line_no, line),
            Some('7') => self.on_addenda(line_no, line),
            Some('8') => self.on_batch_control(line_no, line),
            Some('9') => self.on_file_control(line_no, line),
            Some(other) => self.diagnose(line_no, DiagnosticKind::UnrecognizedRecordType(other)),
            None => {}
        }
    }

    fn on_file_header(&mut self, line_no: usize, line: &str) {
        let (header, errors) = decode::file_header(line);
        self.record_faults(line_no, errors);
        if self.document.header.is_some() {
            debug!("line {}: file header replaces an earlier one", line_no);
        }
        self.document.header = Some(header);
    }

    fn on_batch_header(&mut self, line_no: usize, line: &str) {
        if let Some(batch) = self.current_batch.take() {
            warn!(
                "line {}: new batch opened while batch {} was still open; closing it without a control record",
                line_no, batch.header.batch_number
            );
            self.document.batches.push(batch);
        }

        let (header, errors) = decode::batch_header(line);
        self.record_faults(line_no, errors);
        self.current_batch = Some(Batch {
            header,
            entries: Vec::new(),
            control: None,
        });
        self.batch_open_line = line_no;
    }

    fn on_entry_detail(&mut self, line_no: usize, line: &str) {
        let batch = match self.current_batch.as_mut() {
            Some(batch) => batch,
            None => {
                self.diagnose(line_no, DiagnosticKind::OrphanEntryDetail);
                return;
            }
        };

        let (entry, errors) = decode::entry_detail(line);
        match entry.flow() {
            TxFlow::Debit => self.total_debit += entry.amount.abs(),
            TxFlow::Credit => self.total_credit += entry.amount.abs(),
            TxFlow::Unknown => {
                debug!(
                    "line {}: transaction code {:?} outside the documented table; amount kept out of totals",
                    line_no, entry.transaction_code
                );
            }
        }
        batch.entries.push(entry);
        self.record_faults(line_no, errors);
    }

    fn on_addenda(&mut self, line_no: usize, line: &str) {
        let entry = self
            .current_batch
            .as_mut()
            .and_then(|batch| batch.entries.last_mut());
        match entry {
            Some(entry) => {
                let (record, errors) = decode::addenda(line);
                entry.addenda.push(record);
                self.record_faults(line_no, errors);
            }
            None => self.diagnose(line_no, DiagnosticKind::OrphanAddenda),
        }
    }

    fn on_batch_control(&mut self, line_no: usize, line: &str) {
        match self.current_batch.take() {
            Some(mut batch) => {
                let (control, errors) = decode::batch_control(line);
                self.record_faults(line_no, errors);
                batch.control = Some(control);
                self.document.batches.push(batch);
            }
            None => self.diagnose(line_no, DiagnosticKind::OrphanBatchControl),
        }
    }

    fn on_file_control(&mut self, line_no: usize, line: &str) {
        let (mut control, errors) = decode::file_control(line);
        self.record_faults(line_no, errors);

        // Monetary totals come from the entries actually seen, not from
        // whatever the control line claims.
        control.total_debit = self.total_debit;
        control.total_credit = self.total_credit;

        if self.document.control.is_some() {
            debug!("line {}: file control replaces an earlier one", line_no);
        }
        self.document.control = Some(control);
    }

    fn finish(mut self) -> NachaDocument {
        if let Some(batch) = self.current_batch.take() {
            self.diagnose(
                self.batch_open_line,
                DiagnosticKind::TrailingBatchMissingControl,
            );
            self.document.batches.push(batch);
        }
        self.document
    }

    fn diagnose(&mut self, line: usize, kind: DiagnosticKind) {
        warn!("line {}: {}", line, kind);
        self.document.diagnostics.push(Diagnostic { line, kind });
    }

    fn record_faults(&mut self, line: usize, errors: Vec<DecodeError>) {
        for error in errors {
            self.diagnose(
                line,
                DiagnosticKind::MalformedField {
                    record: error.record,
                    field: error.field,
                },
            );
        }
    }
}
