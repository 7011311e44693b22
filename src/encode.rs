//! Fixed-width serialization of typed records.
//!
//! Every encoder produces exactly 94 characters: numeric fields are
//! zero-padded on the left, text fields space-padded on the right, and
//! oversized values truncate to their field width.

use crate::field::{pad_left_zero, pad_right_space};
use crate::record::{
    AddendaRecord, BatchControl, BatchHeader, EntryDetail, FileControl, FileHeader, RECORD_LEN,
};

/// One all-nines block filler line.
pub fn block_padding() -> String {
    "9".repeat(RECORD_LEN)
}

impl FileHeader {
    /// Serializes as a type `1` record.
    pub fn encode(&self) -> String {
        let mut line = String::with_capacity(RECORD_LEN);
        line.push('1');
        line.push_str(&pad_left_zero(&self.priority_code, 2));
        line.push_str(&pad_left_zero(&self.immediate_destination, 10));
        line.push_str(&pad_left_zero(&self.immediate_origin, 10));
        line.push_str(&pad_left_zero(&self.creation_date, 6));
        line.push_str(&pad_left_zero(&self.creation_time, 4));
        line.push_str(&pad_right_space(&self.file_id_modifier, 1));
        line.push_str(&pad_left_zero(&self.record_size, 3));
        line.push_str(&pad_left_zero(&self.blocking_factor.to_string(), 2));
        line.push_str(&pad_left_zero(&self.format_code, 1));
        line.push_str(&pad_right_space(&self.destination_name, 23));
        line.push_str(&pad_right_space(&self.origin_name, 23));
        line.push_str(&pad_right_space(&self.reference_code, 8));
        line
    }
}

impl BatchHeader {
    /// Serializes as a type `5` record.
    pub fn encode(&self) -> String {
        let mut line = String::with_capacity(RECORD_LEN);
        line.push('5');
        line.push_str(&pad_left_zero(&self.service_class_code, 3));
        line.push_str(&pad_right_space(&self.company_name, 16));
        line.push_str(&pad_right_space(&self.company_discretionary_data, 20));
        line.push_str(&pad_right_space(&self.company_id, 10));
        line.push_str(&pad_right_space(&self.standard_entry_class, 3));
        line.push_str(&pad_right_space(&self.entry_description, 10));
        line.push_str(&pad_right_space(&self.company_descriptive_date, 6));
        line.push_str(&pad_left_zero(&self.effective_entry_date, 6));
        line.push_str(&pad_right_space(&self.settlement_date, 3));
        line.push_str(&pad_right_space(&self.originator_status, 1));
        line.push_str(&pad_left_zero(&self.originating_dfi, 8));
        line.push_str(&pad_left_zero(&self.batch_number.to_string(), 7));
        line
    }
}

impl EntryDetail {
    /// Serializes as a type `6` record. Addenda encode separately, one
    /// line each, immediately after their entry.
    pub fn encode(&self) -> String {
        let mut line = String::with_capacity(RECORD_LEN);
        line.push('6');
        line.push_str(&pad_left_zero(&self.transaction_code, 2));
        line.push_str(&pad_left_zero(&self.receiving_dfi, 8));
        line.push_str(&pad_right_space(&self.check_digit, 1));
        line.push_str(&pad_right_space(&self.account_number, 17));
        line.push_str(&pad_left_zero(&self.amount.magnitude().to_string(), 10));
        line.push_str(&pad_right_space(&self.individual_id, 15));
        line.push_str(&pad_right_space(&self.individual_name, 22));
        line.push_str(&pad_right_space(&self.discretionary_data, 2));
        line.push_str(&pad_left_zero(&self.addenda_indicator, 1));
        line.push_str(&pad_left_zero(&self.trace_number, 15));
        line
    }
}

impl AddendaRecord {
    /// Serializes as a type `7` record.
    pub fn encode(&self) -> String {
        let mut line = String::with_capacity(RECORD_LEN);
        line.push('7');
        line.push_str(&pad_left_zero(&self.type_code, 2));
        line.push_str(&pad_right_space(&self.payment_info, 80));
        line.push_str(&pad_left_zero(&self.sequence_number.to_string(), 4));
        line.push_str(&pad_left_zero(&self.entry_sequence_number.to_string(), 7));
        line
    }
}

impl BatchControl {
    /// Serializes as a type `8` record. The 25-character authentication
    /// and reserved region is emitted as spaces.
    pub fn encode(&self) -> String {
        let mut line = String::with_capacity(RECORD_LEN);
        line.push('8');
        line.push_str(&pad_left_zero(&self.service_class_code, 3));
        line.push_str(&pad_left_zero(&self.entry_addenda_count.to_string(), 6));
        line.push_str(&pad_left_zero(&self.entry_hash.to_string(), 10));
        line.push_str(&pad_left_zero(&self.total_debit.magnitude().to_string(), 12));
        line.push_str(&pad_left_zero(&self.total_credit.magnitude().to_string(), 12));
        line.push_str(&pad_right_space(&self.company_id, 10));
        line.push_str(&" ".repeat(25));
        line.push_str(&pad_left_zero(&self.originating_dfi, 8));
        line.push_str(&pad_left_zero(&self.batch_number.to_string(), 7));
        line
    }
}

impl FileControl {
    /// Serializes as a type `9` record.
    pub fn encode(&self) -> String {
        let mut line = String::with_capacity(RECORD_LEN);
        line.push('9');
        line.push_str(&pad_left_zero(&self.batch_count.to_string(), 6));
        line.push_str(&pad_left_zero(&self.block_count.to_string(), 6));
        line.push_str(&pad_left_zero(&self.entry_addenda_count.to_string(), 8));
        line.push_str(&pad_left_zero(&self.entry_hash.to_string(), 10));
        line.push_str(&pad_left_zero(&self.total_debit.magnitude().to_string(), 12));
        line.push_str(&pad_left_zero(&self.total_credit.magnitude().to_string(), 12));
        line.push_str(&pad_right_space(&self.reserved, 39));
        line
    }
}
