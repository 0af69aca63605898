//! Telugu → Latin transliteration pipeline.
//!
//! Converts Telugu-script tokens into an IAST romanization and a simplified
//! ASCII-friendly pronunciation hint, batching results into a JSON file or an
//! augmented in-memory table.
//!
//! # Architecture
//!
//! ```text
//! raw token
//!    │
//!    ▼
//! script::is_telugu()          ── gate: at least one char in U+0C00–U+0C7F
//!    │
//!    ▼
//! Transliterator (dyn trait)   ── Telugu → IAST, e.g. "నమస్కారం" → "namaskāraṃ"
//!    │
//!    ▼
//! pronounce::normalize()       ── ā→aa ī→ii ū→uu ṃ→m ḥ→h ṛ→ru
//!    │
//!    ▼
//! WordRecord { telugu, pronunciation, latin }
//!    │
//!    ▼
//! BatchProcessor               ── JSON array file  /  augmented Table
//! ```
//!
//! Data flows strictly one direction; every entity is an immutable value
//! type, so a batch run needs no locking and no shared state across tokens.
//!
//! # Error policy
//!
//! Per-token problems are fail-soft: a token that fails the script gate is
//! collected as rejected, and a gated-in token the engine cannot map gets a
//! record with `null` derived fields (logged at error level). Operation-level
//! precondition failures (missing input file, missing column, unwritable
//! output) are fail-fast typed [`BatchError`](pipeline::BatchError)s.
//!
//! # Quick start
//!
//! ```
//! use std::sync::Arc;
//! use telugu_to_latin::pipeline::BatchProcessor;
//! use telugu_to_latin::translit::TeluguIastEngine;
//!
//! let processor = BatchProcessor::new(Arc::new(TeluguIastEngine::new()));
//! let record = processor.builder().build("తెలుగు");
//! assert_eq!(record.latin.as_deref(), Some("telugu"));
//! ```

pub mod config;
pub mod pipeline;
pub mod pronounce;
pub mod script;
pub mod translit;

// ── Public re-exports ──────────────────────────────────────────────────────

pub use config::AppConfig;
pub use pipeline::{BatchProcessor, BatchResult, Table, WordRecord};
pub use script::is_telugu;
pub use translit::{Scheme, TeluguIastEngine, TranslitError, Transliterator};
