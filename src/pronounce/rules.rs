//! Fixed substitution rules for the pronunciation hint.
//!
//! IAST diacritics (ā, ṃ, ḥ, …) are unreadable to casual users and often
//! unrenderable in plain-text contexts, so the pipeline derives a simplified
//! form: long vowels are doubled, anusvara and visarga lose their dots, and
//! vocalic r gains its colloquial "ru" value. The result is a rough hint,
//! **not** a linguistically rigorous romanization — consonant diacritics like
//! ś, ṣ, ṭ are deliberately left alone.

// ---------------------------------------------------------------------------
// Substitution table
// ---------------------------------------------------------------------------

/// The substitutions applied by [`normalize`], in order.
///
/// Order is part of the contract, although no right-hand side here can
/// reintroduce a left-hand pattern (every replacement is plain ASCII while
/// every target is a precomposed diacritic character).
pub const SUBSTITUTIONS: [(&str, &str); 6] = [
    ("ā", "aa"),
    ("ī", "ii"),
    ("ū", "uu"),
    ("ṃ", "m"),
    ("ḥ", "h"),
    ("ṛ", "ru"),
];

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Apply the fixed substitution table to an IAST string.
///
/// Returns a new string; the input is never mutated. Total over any string —
/// text without the six targets comes back unchanged, which also makes the
/// function idempotent.
///
/// # Examples
///
/// ```
/// use telugu_to_latin::pronounce::normalize;
///
/// assert_eq!(normalize("namaskāraṃ"), "namaskaaram");
/// assert_eq!(normalize("śubhōdayaṃ"), "śubhōdayam");  // ś and ō untouched
/// ```
pub fn normalize(iast: &str) -> String {
    SUBSTITUTIONS
        .iter()
        .fold(iast.to_string(), |text, (from, to)| text.replace(from, to))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
