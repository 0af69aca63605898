//! Pronunciation normalization.
//!
//! Turns an IAST romanization into a rough, ASCII-friendlier pronunciation
//! hint via a fixed ordered substitution table — see [`normalize`].

pub mod rules;

pub use rules::{normalize, SUBSTITUTIONS};
