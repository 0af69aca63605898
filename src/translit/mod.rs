//! Transliteration engine module.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │              Transliterator (trait)                  │
//! │                                                     │
//! │   ┌──────────────────┐      ┌──────────────────┐    │
//! │   │ TeluguIastEngine │      │ MockTransliterator│    │
//! │   │  (table-driven)  │      │   (test-only)     │    │
//! │   └────────┬─────────┘      └──────────────────┘    │
//! │            │                                        │
//! │            ▼                                        │
//! │   transliterate(text, Telugu, Iast) → "namaskāraṃ"  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! [`Transliterator`] is the capability boundary: the rest of the pipeline
//! only ever sees `Arc<dyn Transliterator>`, so the bundled
//! [`TeluguIastEngine`] can be swapped for any other backend without touching
//! record or batch code.

pub mod engine;
pub mod iast;

// ── Public re-exports ──────────────────────────────────────────────────────

pub use engine::{Scheme, TranslitError, Transliterator};
pub use iast::TeluguIastEngine;

// test-only re-export so pipeline test modules can import the mock without
// `use telugu_to_latin::translit::engine::MockTransliterator`.
#[cfg(test)]
pub use engine::MockTransliterator;
