//! Core transliteration trait, schemes and errors.
//!
//! # Overview
//!
//! [`Transliterator`] is the public interface used by the pipeline. It is
//! object-safe and `Send + Sync` so it can be held behind an
//! `Arc<dyn Transliterator>`.
//!
//! [`TeluguIastEngine`](crate::translit::TeluguIastEngine) is the bundled
//! production implementation.
//!
//! [`MockTransliterator`] (available under `#[cfg(test)]`) is a stub that
//! returns a pre-configured response — useful for unit-testing the pipeline's
//! failure handling without constructing malformed Telugu input.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Scheme
// ---------------------------------------------------------------------------

/// A supported transliteration scheme.
///
/// This pipeline only ever requests [`Scheme::Telugu`] → [`Scheme::Iast`];
/// the pair is still passed explicitly so the capability boundary matches a
/// general-purpose transliteration backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Telugu script (Unicode block U+0C00–U+0C7F).
    Telugu,
    /// International Alphabet of Sanskrit Transliteration — Latin script with
    /// diacritical marks (ā, ṃ, ś, …).
    Iast,
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scheme::Telugu => write!(f, "Telugu"),
            Scheme::Iast => write!(f, "IAST"),
        }
    }
}

// ---------------------------------------------------------------------------
// TranslitError
// ---------------------------------------------------------------------------

/// All errors that can arise from a transliteration backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslitError {
    /// The backend does not implement the requested scheme pair.
    #[error("unsupported scheme pair: {from} → {to}")]
    UnsupportedSchemes {
        /// Requested source scheme.
        from: Scheme,
        /// Requested target scheme.
        to: Scheme,
    },

    /// A character inside the source-script block has no mapping entry
    /// (reserved or unassigned codepoint).
    #[error("no mapping for codepoint U+{codepoint:04X}")]
    Unmappable {
        /// The offending codepoint.
        codepoint: u32,
    },

    /// A dependent vowel sign or virama appeared with no base consonant to
    /// attach to — the input is not well-formed script text.
    #[error("orphan sign U+{codepoint:04X} has no base consonant")]
    OrphanSign {
        /// The offending codepoint.
        codepoint: u32,
    },

    /// Opaque backend failure.
    #[error("transliteration engine error: {0}")]
    Engine(String),
}

// ---------------------------------------------------------------------------
// Transliterator trait
// ---------------------------------------------------------------------------

/// Object-safe, thread-safe interface for transliteration backends.
///
/// # Contract
///
/// - Deterministic: the same `(text, from, to)` triple always yields the
///   same result.
/// - Pure: no side effects, no interior state visible to callers.
/// - Backends reject scheme pairs they do not support with
///   [`TranslitError::UnsupportedSchemes`] rather than guessing.
pub trait Transliterator: Send + Sync {
    /// Transliterate `text` from the `from` scheme into the `to` scheme.
    fn transliterate(&self, text: &str, from: Scheme, to: Scheme) -> Result<String, TranslitError>;
}

// Compile-time assertion: Box<dyn Transliterator> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn Transliterator>) {}
};

// ---------------------------------------------------------------------------
// MockTransliterator  (test-only)
// ---------------------------------------------------------------------------

/// A test double that returns a pre-configured response regardless of input.
///
/// Only compiled for unit tests — doctests cannot see it.
///
/// ```ignore
/// let engine = MockTransliterator::ok("namaskāraṃ");
/// let result = engine.transliterate("నమస్కారం", Scheme::Telugu, Scheme::Iast);
/// assert_eq!(result.unwrap(), "namaskāraṃ");
/// ```
#[cfg(test)]
pub struct MockTransliterator {
    response: Result<String, TranslitError>,
}

#[cfg(test)]
impl MockTransliterator {
    /// Create a mock that always returns `Ok(text)`.
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            response: Ok(text.into()),
        }
    }

    /// Create a mock that always returns `Err(error)`.
    pub fn err(error: TranslitError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

#[cfg(test)]
impl Transliterator for MockTransliterator {
    fn transliterate(&self, _text: &str, from: Scheme, to: Scheme) -> Result<String, TranslitError> {
        // Enforce the scheme contract even in the mock so that callers are
        // tested against it.
        if (from, to) != (Scheme::Telugu, Scheme::Iast) {
            return Err(TranslitError::UnsupportedSchemes { from, to });
        }
        self.response.clone()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- MockTransliterator ---

    #[test]
    fn mock_ok_returns_configured_text() {
        let engine = MockTransliterator::ok("telugu");
        let out = engine.transliterate("తెలుగు", Scheme::Telugu, Scheme::Iast);
        assert_eq!(out.unwrap(), "telugu");
    }

    #[test]
    fn mock_err_returns_configured_error() {
        let engine = MockTransliterator::err(TranslitError::Engine("boom".into()));
        let err = engine
            .transliterate("తెలుగు", Scheme::Telugu, Scheme::Iast)
            .unwrap_err();
        assert!(matches!(err, TranslitError::Engine(_)));
    }

    #[test]
    fn mock_rejects_unsupported_scheme_pair() {
        let engine = MockTransliterator::ok("text");
        let err = engine
            .transliterate("text", Scheme::Iast, Scheme::Telugu)
            .unwrap_err();
        assert!(matches!(err, TranslitError::UnsupportedSchemes { .. }));
    }

    // --- Transliterator object safety ---

    #[test]
    fn box_dyn_transliterator_compiles() {
        // If this test compiles, the trait is object-safe.
        let engine: Box<dyn Transliterator> = Box::new(MockTransliterator::ok("ok"));
        let _ = engine.transliterate("క", Scheme::Telugu, Scheme::Iast);
    }

    // --- TranslitError display ---

    #[test]
    fn error_display_includes_codepoint() {
        let e = TranslitError::Unmappable { codepoint: 0x0C0D };
        assert!(e.to_string().contains("0C0D"));
    }

    #[test]
    fn error_display_includes_scheme_pair() {
        let e = TranslitError::UnsupportedSchemes {
            from: Scheme::Iast,
            to: Scheme::Telugu,
        };
        let msg = e.to_string();
        assert!(msg.contains("IAST") && msg.contains("Telugu"), "{msg}");
    }
}
