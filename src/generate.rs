//! Whole-file generation with recomputed controls and block padding.
//!
//! Callers supply a file header and (batch header, entries) pairs;
//! batch and file control records are always computed here, so emitted
//! totals reconcile no matter what the source data claimed.

use crate::cents::Cents;
use crate::encode;
use crate::error::{NachaError, Result};
use crate::record::{BatchControl, BatchHeader, EntryDetail, FileControl, FileHeader};
use crate::transaction::TxFlow;

/// Entry hashes wrap at ten billion.
const HASH_MODULUS: u64 = 10_000_000_000;

/// Emits a complete NACHA file as newline-joined 94-character records,
/// ending with zero or more all-nines filler lines.
///
/// Fails closed: a zero blocking factor or an empty batch list yields an
/// error and no partial output.
pub fn generate(header: &FileHeader, batches: &[(BatchHeader, Vec<EntryDetail>)]) -> Result<String> {
    if header.blocking_factor == 0 {
        return Err(NachaError::InvalidBlockingFactor {
            factor: header.blocking_factor,
        });
    }
    if batches.is_empty() {
        return Err(NachaError::EmptyFile);
    }

    let mut lines: Vec<String> = Vec::new();
    lines.push(header.encode());

    let mut file_hash: u64 = 0;
    let mut file_count: u64 = 0;
    let mut file_debit = Cents::ZERO;
    let mut file_credit = Cents::ZERO;

    for (batch_header, entries) in batches {
        lines.push(batch_header.encode());

        let mut batch_hash: u64 = 0;
        let mut batch_count: u64 = 0;
        let mut batch_debit = Cents::ZERO;
        let mut batch_credit = Cents::ZERO;

        for entry in entries {
            lines.push(entry.encode());
            batch_hash += routing_hash(&entry.receiving_dfi);
            batch_count += 1;
            match entry.flow() {
                TxFlow::Debit => batch_debit += entry.amount.abs(),
                TxFlow::Credit => batch_credit += entry.amount.abs(),
                TxFlow::Unknown => {}
            }
            for addendum in &entry.addenda {
                lines.push(addendum.encode());
                batch_count += 1;
            }
        }

        let control = BatchControl {
            service_class_code: batch_header.service_class_code.clone(),
            entry_addenda_count: batch_count as u32,
            entry_hash: batch_hash % HASH_MODULUS,
            total_debit: batch_debit,
            total_credit: batch_credit,
            company_id: batch_header.company_id.clone(),
            originating_dfi: batch_header.originating_dfi.clone(),
            batch_number: batch_header.batch_number,
        };
        lines.push(control.encode());

        file_hash += batch_hash;
        file_count += batch_count;
        file_debit += batch_debit;
        file_credit += batch_credit;
    }

    // The file control record occupies a line of the final block too.
    let total_lines = lines.len() + 1;
    let factor = header.blocking_factor as usize;
    let padding = (factor - (total_lines % factor)) % factor;
    let block_count = (total_lines + padding) / factor;

    let control = FileControl {
        batch_count: batches.len() as u32,
        block_count: block_count as u32,
        entry_addenda_count: file_count as u32,
        entry_hash: file_hash % HASH_MODULUS,
        total_debit: file_debit,
        total_credit: file_credit,
        reserved: String::new(),
    };
    lines.push(control.encode());

    for _ in 0..padding {
        lines.push(encode::block_padding());
    }

    Ok(lines.join("\n"))
}

/// First eight digits of a receiving DFI id, as a hash addend.
/// Identifiers that are not numeric contribute zero.
fn routing_hash(dfi: &str) -> u64 {
    let prefix: String = dfi.chars().take(8).collect();
    prefix.parse().unwrap_or(0)
}
