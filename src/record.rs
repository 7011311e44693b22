//! Typed records for the six NACHA record kinds.
//!
//! Fields the codec never interprets (dates, identifiers, names) stay as
//! the fixed-width text they arrived in; amounts are whole cents and
//! counts are plain integers. Classification of an entry is recomputed
//! from its transaction code on every access rather than stored, so it
//! can never drift from the code that produced it.

use crate::cents::Cents;
use crate::transaction::{classify, TransferClass, TxFlow};

/// Length of every logical record, in characters.
pub const RECORD_LEN: usize = 94;

/// File header record (type `1`). One per document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileHeader {
    pub priority_code: String,

    /// Routing identifier of the receiving point, 10 chars on the wire.
    pub immediate_destination: String,

    /// Routing identifier of the sending point, 10 chars on the wire.
    pub immediate_origin: String,

    /// File creation date, `YYMMDD`.
    pub creation_date: String,

    /// File creation time, `HHMM`.
    pub creation_time: String,

    pub file_id_modifier: String,

    /// Record size field, conventionally `094`.
    pub record_size: String,

    /// Records per physical block; drives generation padding.
    pub blocking_factor: u32,

    pub format_code: String,
    pub destination_name: String,
    pub origin_name: String,
    pub reference_code: String,
}

/// Batch header record (type `5`). Opens a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchHeader {
    pub service_class_code: String,
    pub company_name: String,
    pub company_discretionary_data: String,
    pub company_id: String,

    /// Standard entry class, e.g. `PPD` or `CCD`.
    pub standard_entry_class: String,

    pub entry_description: String,
    pub company_descriptive_date: String,
    pub effective_entry_date: String,
    pub settlement_date: String,
    pub originator_status: String,

    /// Originating DFI identifier, 8 digits.
    pub originating_dfi: String,

    pub batch_number: u32,
}

/// Entry detail record (type `6`). Owned by exactly one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDetail {
    pub transaction_code: String,

    /// Receiving DFI identifier, 8 digits; feeds the entry hash.
    pub receiving_dfi: String,

    /// Kept untrimmed; a space here is data, not padding.
    pub check_digit: String,

    pub account_number: String,

    /// Signed magnitude: negative for debit-classified codes.
    pub amount: Cents,

    pub individual_id: String,
    pub individual_name: String,
    pub discretionary_data: String,
    pub addenda_indicator: String,
    pub trace_number: String,

    /// Addenda records in arrival order.
    pub addenda: Vec<AddendaRecord>,
}

impl EntryDetail {
    /// Funds direction, recomputed from the transaction code.
    pub fn flow(&self) -> TxFlow {
        classify(&self.transaction_code).0
    }

    /// Transfer product, recomputed from the transaction code.
    pub fn transfer_class(&self) -> TransferClass {
        classify(&self.transaction_code).1
    }
}

/// Addenda record (type `7`). Continuation text for one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddendaRecord {
    pub type_code: String,
    pub payment_info: String,
    pub sequence_number: u32,
    pub entry_sequence_number: u32,
}

/// Batch control record (type `8`). Closes a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchControl {
    pub service_class_code: String,
    pub entry_addenda_count: u32,

    /// Sum of receiving DFI prefixes, modulo ten billion.
    pub entry_hash: u64,

    pub total_debit: Cents,
    pub total_credit: Cents,
    pub company_id: String,
    pub originating_dfi: String,
    pub batch_number: u32,
}

/// File control record (type `9`, excluding all-nines filler).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileControl {
    pub batch_count: u32,
    pub block_count: u32,
    pub entry_addenda_count: u32,
    pub entry_hash: u64,
    pub total_debit: Cents,
    pub total_credit: Cents,

    /// Trailing reserved region, passed through untrimmed.
    pub reserved: String,
}
