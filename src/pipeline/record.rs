//! Word records and the per-token builder.
//!
//! [`WordRecord`] is the atomic unit of output: one input token plus its two
//! derived fields. [`WordRecordBuilder`] produces it by composing the script
//! gate, the [`Transliterator`] capability and pronunciation normalization.
//!
//! Building is total — a token that fails the gate, or that the engine
//! cannot map, yields a record with `None` in both derived fields rather
//! than an error, so one bad token can never abort a batch.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::pronounce::normalize;
use crate::script::is_telugu;
use crate::translit::{Scheme, Transliterator};

// ---------------------------------------------------------------------------
// WordRecord
// ---------------------------------------------------------------------------

/// One converted token.
///
/// Field order is the stable JSON key order of the batch output; `None`
/// serialises as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    /// The original input token, verbatim.
    pub telugu: String,
    /// Simplified ASCII-leaning pronunciation hint, or `None` when the token
    /// was rejected or the engine failed.
    pub pronunciation: Option<String>,
    /// IAST romanization, or `None` when the token was rejected or the
    /// engine failed.
    pub latin: Option<String>,
}

impl WordRecord {
    /// A record for a token that produced no derived fields.
    fn empty(token: &str) -> Self {
        Self {
            telugu: token.to_string(),
            pronunciation: None,
            latin: None,
        }
    }

    /// Returns `true` when both derived fields are present.
    pub fn is_converted(&self) -> bool {
        self.pronunciation.is_some() && self.latin.is_some()
    }
}

// ---------------------------------------------------------------------------
// WordRecordBuilder
// ---------------------------------------------------------------------------

/// Builds a [`WordRecord`] per token against an injected engine.
///
/// Cheap to clone — the engine is shared behind an `Arc`.
#[derive(Clone)]
pub struct WordRecordBuilder {
    engine: Arc<dyn Transliterator>,
}

impl WordRecordBuilder {
    /// Create a builder over the given engine.
    pub fn new(engine: Arc<dyn Transliterator>) -> Self {
        Self { engine }
    }

    /// Convert one token.
    ///
    /// - Empty or non-Telugu tokens are rejected: both derived fields `None`.
    /// - Otherwise the engine runs once, and the pronunciation is derived
    ///   from that single IAST result.
    /// - An engine failure is logged at error level and degrades to `None`
    ///   fields — it is never propagated.
    pub fn build(&self, token: &str) -> WordRecord {
        if token.is_empty() || !is_telugu(token) {
            return WordRecord::empty(token);
        }

        match self
            .engine
            .transliterate(token, Scheme::Telugu, Scheme::Iast)
        {
            Ok(iast) => WordRecord {
                telugu: token.to_string(),
                pronunciation: Some(normalize(&iast)),
                latin: Some(iast),
            },
            Err(e) => {
                log::error!("transliteration failed for {token:?}: {e}");
                WordRecord::empty(token)
            }
        }
    }
}

impl std::fmt::Debug for WordRecordBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordRecordBuilder").finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translit::{MockTransliterator, TeluguIastEngine, TranslitError};

    fn real_builder() -> WordRecordBuilder {
        WordRecordBuilder::new(Arc::new(TeluguIastEngine::new()))
    }

    // --- reject branch -------------------------------------------------------

    #[test]
    fn empty_token_is_rejected() {
        let record = real_builder().build("");
        assert_eq!(record.telugu, "");
        assert_eq!(record.pronunciation, None);
        assert_eq!(record.latin, None);
    }

    #[test]
    fn ascii_token_is_rejected() {
        let record = real_builder().build("hello");
        assert_eq!(record.telugu, "hello");
        assert!(!record.is_converted());
    }

    #[test]
    fn rejected_token_never_reaches_the_engine() {
        // An engine that would fail loudly — the gate must short-circuit it.
        let builder = WordRecordBuilder::new(Arc::new(MockTransliterator::err(
            TranslitError::Engine("must not be called".into()),
        )));
        let record = builder.build("hello");
        assert_eq!(record, WordRecord::empty("hello"));
    }

    // --- process branch ------------------------------------------------------

    #[test]
    fn telugu_token_converts() {
        let record = real_builder().build("తెలుగు");
        assert_eq!(record.telugu, "తెలుగు");
        assert_eq!(record.latin.as_deref(), Some("telugu"));
        assert_eq!(record.pronunciation.as_deref(), Some("telugu"));
    }

    #[test]
    fn diacritics_are_normalized_in_pronunciation() {
        let record = real_builder().build("నమస్కారం");
        assert_eq!(record.latin.as_deref(), Some("namaskāraṃ"));
        assert_eq!(record.pronunciation.as_deref(), Some("namaskaaram"));
    }

    #[test]
    fn pronunciation_is_derived_from_latin() {
        // The round-trip shape property: pronunciation == normalize(latin).
        for token in ["తెలుగు", "నమస్కారం", "ధన్యవాదాలు", "శుభోదయం"] {
            let record = real_builder().build(token);
            let latin = record.latin.as_deref().expect("latin present");
            assert_eq!(record.pronunciation.as_deref(), Some(normalize(latin).as_str()));
        }
    }

    // --- fail-soft branch ----------------------------------------------------

    #[test]
    fn engine_failure_degrades_to_null_fields() {
        let builder = WordRecordBuilder::new(Arc::new(MockTransliterator::err(
            TranslitError::Engine("backend down".into()),
        )));
        let record = builder.build("తెలుగు");
        assert_eq!(record.telugu, "తెలుగు");
        assert_eq!(record.pronunciation, None);
        assert_eq!(record.latin, None);
    }

    #[test]
    fn malformed_telugu_degrades_to_null_fields() {
        // A lone virama passes the script gate but cannot be transliterated.
        let record = real_builder().build("\u{0C4D}");
        assert!(!record.is_converted());
        assert_eq!(record.telugu, "\u{0C4D}");
    }

    // --- serialization -------------------------------------------------------

    #[test]
    fn record_serialises_with_stable_keys_and_nulls() {
        let record = WordRecord::empty("hello");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"telugu":"hello","pronunciation":null,"latin":null}"#
        );
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = real_builder().build("తెలుగు");
        let json = serde_json::to_string(&record).unwrap();
        let back: WordRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
