//! Script detection for Telugu text.
//!
//! Provides the validity gate that guards the rest of the pipeline: a token
//! is only handed to the [`Transliterator`](crate::translit::Transliterator)
//! when it contains at least one character from the Telugu Unicode block.

pub mod detect;

pub use detect::{is_telugu, is_telugu_char};
