//! # NACHA Record Codec
//!
//! A codec for ACH (NACHA) payment files: fixed-width 94-character
//! records organized into a file → batches → entries/addenda hierarchy
//! with embedded entry hashes and monetary totals.
//!
//! ## Design Principles
//!
//! - **Integer cents**: amounts are whole cents internally; decimal
//!   strings appear only at the boundary
//! - **Tolerant parsing**: malformed input degrades into accumulated
//!   diagnostics, never a panic or an early abort
//! - **Authoritative totals**: control records are recomputed from the
//!   entries on generation and on parse; on-disk aggregates are never
//!   trusted for monetary fields
//!
//! ## Example
//!
//! ```
//! let document = nacha_codec::parse("");
//! assert!(document.header.is_none());
//! assert!(document.batches.is_empty());
//! assert!(document.diagnostics.is_empty());
//! ```

pub mod cents;
pub mod decode;
pub mod document;
pub mod encode;
pub mod error;
pub mod field;
pub mod generate;
pub mod parser;
pub mod record;
pub mod transaction;

pub use cents::Cents;
pub use document::{Batch, NachaDocument};
pub use error::{Diagnostic, DiagnosticKind, NachaError, Result};
pub use generate::generate;
pub use parser::parse;
pub use record::{
    AddendaRecord, BatchControl, BatchHeader, EntryDetail, FileControl, FileHeader, RECORD_LEN,
};
pub use transaction::{classify, TransferClass, TxFlow};
