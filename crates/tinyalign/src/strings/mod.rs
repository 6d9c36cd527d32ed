//! String distance metrics.
//!
//! Sequences are slices of any symbol type with `Eq`. Pass `str::as_bytes`
//! to compare strings byte by byte, or collect `str::chars` into a `Vec` to
//! compare them by Unicode scalar value.

mod hamming;
mod levenshtein;

pub use hamming::hamming_distance;
pub use levenshtein::{edit_distance, within_distance};
