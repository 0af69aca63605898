//! Table-driven Telugu → IAST engine.
//!
//! Telugu is an abugida: a bare consonant letter carries an inherent "a"
//! vowel, a dependent vowel sign replaces that inherent vowel, and a virama
//! (్, U+0C4D) suppresses it to form clusters. The engine walks the input
//! once, tracking whether the last letter was a consonant still awaiting its
//! vowel:
//!
//! ```text
//! న   మ   స   ్   క   ా   ర   ం
//! na  ma  s   ∅   k   ā   ra  ṃ     →  "namaskāraṃ"
//! ```
//!
//! Characters outside the Telugu block pass through verbatim, so mixed
//! tokens like `"తెలుగు 101"` keep their ASCII tail. Telugu-block
//! codepoints with no table entry (reserved or rare sign codepoints) are an
//! error — silently dropping script characters would corrupt the output.

use crate::script::is_telugu_char;

use super::engine::{Scheme, TranslitError, Transliterator};

/// Telugu virama (pulli) — suppresses the inherent vowel of the preceding
/// consonant.
const VIRAMA: char = '\u{0C4D}';

// ---------------------------------------------------------------------------
// Character tables
// ---------------------------------------------------------------------------

/// IAST value of an independent (word-initial) vowel letter.
fn independent_vowel(c: char) -> Option<&'static str> {
    match c {
        'అ' => Some("a"),
        'ఆ' => Some("ā"),
        'ఇ' => Some("i"),
        'ఈ' => Some("ī"),
        'ఉ' => Some("u"),
        'ఊ' => Some("ū"),
        'ఋ' => Some("ṛ"),
        'ౠ' => Some("ṝ"),
        'ఌ' => Some("ḷ"),
        'ౡ' => Some("ḹ"),
        'ఎ' => Some("e"),
        'ఏ' => Some("ē"),
        'ఐ' => Some("ai"),
        'ఒ' => Some("o"),
        'ఓ' => Some("ō"),
        'ఔ' => Some("au"),
        _ => None,
    }
}

/// IAST value of a dependent vowel sign (matra).
fn vowel_sign(c: char) -> Option<&'static str> {
    match c {
        '\u{0C3E}' => Some("ā"),
        '\u{0C3F}' => Some("i"),
        '\u{0C40}' => Some("ī"),
        '\u{0C41}' => Some("u"),
        '\u{0C42}' => Some("ū"),
        '\u{0C43}' => Some("ṛ"),
        '\u{0C44}' => Some("ṝ"),
        '\u{0C46}' => Some("e"),
        '\u{0C47}' => Some("ē"),
        '\u{0C48}' => Some("ai"),
        '\u{0C4A}' => Some("o"),
        '\u{0C4B}' => Some("ō"),
        '\u{0C4C}' => Some("au"),
        '\u{0C62}' => Some("ḷ"),
        '\u{0C63}' => Some("ḹ"),
        _ => None,
    }
}

/// IAST value of a consonant letter, **without** the inherent "a".
fn consonant(c: char) -> Option<&'static str> {
    match c {
        'క' => Some("k"),
        'ఖ' => Some("kh"),
        'గ' => Some("g"),
        'ఘ' => Some("gh"),
        'ఙ' => Some("ṅ"),
        'చ' => Some("c"),
        'ఛ' => Some("ch"),
        'జ' => Some("j"),
        'ఝ' => Some("jh"),
        'ఞ' => Some("ñ"),
        'ట' => Some("ṭ"),
        'ఠ' => Some("ṭh"),
        'డ' => Some("ḍ"),
        'ఢ' => Some("ḍh"),
        'ణ' => Some("ṇ"),
        'త' => Some("t"),
        'థ' => Some("th"),
        'ద' => Some("d"),
        'ధ' => Some("dh"),
        'న' => Some("n"),
        'ప' => Some("p"),
        'ఫ' => Some("ph"),
        'బ' => Some("b"),
        'భ' => Some("bh"),
        'మ' => Some("m"),
        'య' => Some("y"),
        'ర' => Some("r"),
        'ఱ' => Some("ṟ"),
        'ల' => Some("l"),
        'ళ' => Some("ḷ"),
        'ఴ' => Some("ḻ"),
        'వ' => Some("v"),
        'శ' => Some("ś"),
        'ష' => Some("ṣ"),
        'స' => Some("s"),
        'హ' => Some("h"),
        _ => None,
    }
}

/// IAST value of a syllable modifier (emitted after the syllable's vowel).
fn modifier(c: char) -> Option<&'static str> {
    match c {
        '\u{0C01}' => Some("m̐"), // candrabindu
        '\u{0C02}' => Some("ṃ"),  // anusvara
        '\u{0C03}' => Some("ḥ"),  // visarga
        '\u{0C3D}' => Some("'"),  // avagraha
        _ => None,
    }
}

/// ASCII value of a Telugu digit (౦–౯, U+0C66–U+0C6F).
fn digit(c: char) -> Option<char> {
    let code = c as u32;
    if (0x0C66..=0x0C6F).contains(&code) {
        char::from_u32('0' as u32 + (code - 0x0C66))
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// TeluguIastEngine
// ---------------------------------------------------------------------------

/// Bundled production [`Transliterator`] for the Telugu → IAST pair.
///
/// Stateless and table-driven; every call walks the input once. Any other
/// scheme pair is rejected with [`TranslitError::UnsupportedSchemes`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TeluguIastEngine;

impl TeluguIastEngine {
    /// Create a new engine. Free — the engine carries no state.
    pub fn new() -> Self {
        Self
    }
}

impl Transliterator for TeluguIastEngine {
    fn transliterate(&self, text: &str, from: Scheme, to: Scheme) -> Result<String, TranslitError> {
        if (from, to) != (Scheme::Telugu, Scheme::Iast) {
            return Err(TranslitError::UnsupportedSchemes { from, to });
        }
        to_iast(text)
    }
}

/// Walk `text` once, emitting IAST and resolving each consonant's inherent
/// vowel against the following codepoint.
fn to_iast(text: &str) -> Result<String, TranslitError> {
    let mut out = String::with_capacity(text.len());
    // true while the previous letter was a consonant whose vowel is still
    // undecided (inherent "a" unless a vowel sign or virama follows).
    let mut inherent = false;

    for ch in text.chars() {
        if let Some(base) = consonant(ch) {
            if inherent {
                out.push('a');
            }
            out.push_str(base);
            inherent = true;
            continue;
        }

        if let Some(sign) = vowel_sign(ch) {
            if !inherent {
                return Err(TranslitError::OrphanSign {
                    codepoint: ch as u32,
                });
            }
            out.push_str(sign);
            inherent = false;
            continue;
        }

        if ch == VIRAMA {
            if !inherent {
                return Err(TranslitError::OrphanSign {
                    codepoint: ch as u32,
                });
            }
            inherent = false;
            continue;
        }

        // Anything else closes an open syllable with the inherent "a".
        if inherent {
            out.push('a');
            inherent = false;
        }

        if let Some(v) = independent_vowel(ch) {
            out.push_str(v);
        } else if let Some(m) = modifier(ch) {
            out.push_str(m);
        } else if let Some(d) = digit(ch) {
            out.push(d);
        } else if is_telugu_char(ch) {
            // Reserved / unassigned codepoint inside the block.
            return Err(TranslitError::Unmappable {
                codepoint: ch as u32,
            });
        } else {
            out.push(ch);
        }
    }

    if inherent {
        out.push('a');
    }

    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
