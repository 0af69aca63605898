//! Telugu script detection.
//!
//! A token counts as Telugu when it contains **at least one** character from
//! the Telugu Unicode block (U+0C00 – U+0C7F). This is deliberately a loose
//! gate, not a purity check: mixed tokens like `"తెలుగు 101"` pass, because
//! the downstream engine passes non-Telugu characters through verbatim.
//!
//! Detection is a total function — empty strings simply return `false`, and
//! there is no failure mode.

// ---------------------------------------------------------------------------
// Unicode ranges
// ---------------------------------------------------------------------------

/// First codepoint of the Telugu Unicode block (U+0C00, combining candrabindu
/// above).
const TELUGU_START: char = '\u{0C00}';

/// Last codepoint of the Telugu Unicode block (U+0C7F, the tuumu sign ౿).
const TELUGU_END: char = '\u{0C7F}';

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Returns `true` when `text` contains at least one Telugu character.
///
/// The empty string returns `false`.
///
/// # Examples
///
/// ```
/// use telugu_to_latin::script::is_telugu;
///
/// assert!(is_telugu("నమస్కారం"));
/// assert!(is_telugu("తెలుగు word"));   // mixed content still passes
/// assert!(!is_telugu("hello"));
/// assert!(!is_telugu(""));
/// ```
pub fn is_telugu(text: &str) -> bool {
    text.chars().any(is_telugu_char)
}

/// Returns `true` if `c` falls within the Telugu Unicode block
/// (U+0C00 – U+0C7F).
#[inline]
pub fn is_telugu_char(c: char) -> bool {
    (TELUGU_START..=TELUGU_END).contains(&c)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
