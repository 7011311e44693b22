//! Per-record-type decoding of 94-character lines.
//!
//! Decoding never fails outright: a numeric field that does not convert
//! is substituted with zero and reported back by name, so a damaged
//! record still takes its place in the document. Text fields are sliced
//! and trimmed; slices past the end of a short line come back empty.

use crate::cents::Cents;
use crate::field;
use crate::record::{
    AddendaRecord, BatchControl, BatchHeader, EntryDetail, FileControl, FileHeader, RECORD_LEN,
};
use crate::transaction::TxFlow;

/// A numeric field that failed conversion while decoding one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeError {
    /// Record kind the field belongs to.
    pub record: &'static str,

    /// Field whose numeric conversion failed.
    pub field: &'static str,
}

/// Returns `true` for an all-nines block filler line, which is counted
/// separately and never becomes a file control record.
pub fn is_block_padding(line: &str) -> bool {
    line.len() == RECORD_LEN && line.bytes().all(|b| b == b'9')
}

fn cents_field(
    line: &str,
    start: usize,
    end: usize,
    record: &'static str,
    field_name: &'static str,
    errors: &mut Vec<DecodeError>,
) -> Cents {
    match field::to_cents(field::slice(line, start, end)) {
        Ok(cents) => cents,
        Err(_) => {
            errors.push(DecodeError {
                record,
                field: field_name,
            });
            Cents::ZERO
        }
    }
}

fn num_field(
    line: &str,
    start: usize,
    end: usize,
    record: &'static str,
    field_name: &'static str,
    errors: &mut Vec<DecodeError>,
) -> u64 {
    let text = field::slice(line, start, end);
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        errors.push(DecodeError {
            record,
            field: field_name,
        });
        return 0;
    }
    text.parse().unwrap_or(0)
}

/// Decodes a file header line (type `1`).
pub fn file_header(line: &str) -> (FileHeader, Vec<DecodeError>) {
    let mut errors = Vec::new();
    let header = FileHeader {
        priority_code: field::slice(line, 1, 3).to_string(),
        immediate_destination: field::slice(line, 3, 13).to_string(),
        immediate_origin: field::slice(line, 13, 23).to_string(),
        creation_date: field::slice(line, 23, 29).to_string(),
        creation_time: field::slice(line, 29, 33).to_string(),
        file_id_modifier: field::slice(line, 33, 34).to_string(),
        record_size: field::slice(line, 34, 37).to_string(),
        blocking_factor: num_field(line, 37, 39, "file header", "blocking factor", &mut errors)
            as u32,
        format_code: field::slice(line, 39, 40).to_string(),
        destination_name: field::slice(line, 40, 63).to_string(),
        origin_name: field::slice(line, 63, 86).to_string(),
        reference_code: field::slice(line, 86, 94).to_string(),
    };
    (header, errors)
}

/// Decodes a batch header line (type `5`).
pub fn batch_header(line: &str) -> (BatchHeader, Vec<DecodeError>) {
    let mut errors = Vec::new();
    let header = BatchHeader {
        service_class_code: field::slice(line, 1, 4).to_string(),
        company_name: field::slice(line, 4, 20).to_string(),
        company_discretionary_data: field::slice(line, 20, 40).to_string(),
        company_id: field::slice(line, 40, 50).to_string(),
        standard_entry_class: field::slice(line, 50, 53).to_string(),
        entry_description: field::slice(line, 53, 63).to_string(),
        company_descriptive_date: field::slice(line, 63, 69).to_string(),
        effective_entry_date: field::slice(line, 69, 75).to_string(),
        settlement_date: field::slice(line, 75, 78).to_string(),
        originator_status: field::slice(line, 78, 79).to_string(),
        originating_dfi: field::slice(line, 79, 87).to_string(),
        batch_number: num_field(line, 87, 94, "batch header", "batch number", &mut errors) as u32,
    };
    (header, errors)
}

/// Decodes an entry detail line (type `6`).
///
/// The amount is stored signed: debit-classified codes negate the
/// unsigned magnitude read from the amount field.
pub fn entry_detail(line: &str) -> (EntryDetail, Vec<DecodeError>) {
    let mut errors = Vec::new();
    let transaction_code = field::slice(line, 1, 3).to_string();
    let magnitude = cents_field(line, 29, 39, "entry detail", "amount", &mut errors);
    let amount = match crate::transaction::classify(&transaction_code).0 {
        TxFlow::Debit => -magnitude,
        TxFlow::Credit | TxFlow::Unknown => magnitude,
    };
    let entry = EntryDetail {
        transaction_code,
        receiving_dfi: field::slice(line, 3, 11).to_string(),
        check_digit: field::slice_raw(line, 11, 12).to_string(),
        account_number: field::slice(line, 12, 29).to_string(),
        amount,
        individual_id: field::slice(line, 39, 54).to_string(),
        individual_name: field::slice(line, 54, 76).to_string(),
        discretionary_data: field::slice(line, 76, 78).to_string(),
        addenda_indicator: field::slice(line, 78, 79).to_string(),
        trace_number: field::slice(line, 79, 94).to_string(),
        addenda: Vec::new(),
    };
    (entry, errors)
}

/// Decodes an addenda line (type `7`).
pub fn addenda(line: &str) -> (AddendaRecord, Vec<DecodeError>) {
    let mut errors = Vec::new();
    let record = AddendaRecord {
        type_code: field::slice(line, 1, 3).to_string(),
        payment_info: field::slice(line, 3, 83).to_string(),
        sequence_number: num_field(line, 83, 87, "addenda", "sequence number", &mut errors) as u32,
        entry_sequence_number: num_field(
            line,
            87,
            94,
            "addenda",
            "entry sequence number",
            &mut errors,
        ) as u32,
    };
    (record, errors)
}

/// Decodes a batch control line (type `8`).
pub fn batch_control(line: &str) -> (BatchControl, Vec<DecodeError>) {
    let mut errors = Vec::new();
    let control = BatchControl {
        service_class_code: field::slice(line, 1, 4).to_string(),
        entry_addenda_count: num_field(
            line,
            4,
            10,
            "batch control",
            "entry/addenda count",
            &mut errors,
        ) as u32,
        entry_hash: num_field(line, 10, 20, "batch control", "entry hash", &mut errors),
        total_debit: cents_field(line, 20, 32, "batch control", "total debit", &mut errors),
        total_credit: cents_field(line, 32, 44, "batch control", "total credit", &mut errors),
        company_id: field::slice(line, 44, 54).to_string(),
        originating_dfi: field::slice(line, 79, 87).to_string(),
        batch_number: num_field(line, 87, 94, "batch control", "batch number", &mut errors) as u32,
    };
    (control, errors)
}

/// Decodes a file control line (type `9`, non-padding).
///
/// The monetary totals read here are provisional; the assembler replaces
/// them with the running totals it accumulated over the entries.
pub fn file_control(line: &str) -> (FileControl, Vec<DecodeError>) {
    let mut errors = Vec::new();
    let control = FileControl {
        batch_count: num_field(line, 1, 7, "file control", "batch count", &mut errors) as u32,
        block_count: num_field(line, 7, 13, "file control", "block count", &mut errors) as u32,
        entry_addenda_count: num_field(
            line,
            13,
            21,
            "file control",
            "entry/addenda count",
            &mut errors,
        ) as u32,
        entry_hash: num_field(line, 21, 31, "file control", "entry hash", &mut errors),
        total_debit: cents_field(line, 31, 43, "file control", "total debit", &mut errors),
        total_credit: cents_field(line, 43, 55, "file control", "total credit", &mut errors),
        reserved: field::slice_raw(line, 55, 94).to_string(),
    };
    (control, errors)
}
