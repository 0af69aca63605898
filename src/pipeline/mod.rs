//! Batch pipeline module.
//!
//! This module wires the full token → gate → transliterate → normalize →
//! record → output pipeline:
//!
//! ```text
//! line / cell
//!      │
//!      ▼
//! script::is_telugu()  ──false──▶  rejected list  (file mode)
//!      │                           false/null/null row (tabular mode)
//!      ▼
//! WordRecordBuilder::build()
//!      │        └─ engine failure → log::error!, null fields
//!      ▼
//! WordRecord { telugu, pronunciation, latin }
//!      │
//!      ├─ process_file()   → pretty JSON array on disk + BatchResult
//!      └─ process_column() → input Table + 3 appended columns
//! ```
//!
//! Per-token failures never abort a batch; only operation-level
//! preconditions (missing file, missing column, unwritable output) surface
//! as [`BatchError`].

pub mod batch;
pub mod record;
pub mod table;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use batch::{BatchError, BatchProcessor, BatchResult};
pub use record::{WordRecord, WordRecordBuilder};
pub use table::{Table, TableError};
