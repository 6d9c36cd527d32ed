//! Hamming distance between sequences of equal length.

use crate::{number::UInt, Error};

/// Computes the Hamming distance between two sequences.
///
/// The Hamming distance is defined as the number of positions at which
/// the corresponding symbols are different. It is named after
/// Richard Hamming, who introduced it in his fundamental paper on
/// Hamming codes.
///
/// # Arguments
///
/// * `s` - The first sequence.
/// * `t` - The second sequence.
///
/// # Errors
///
/// * [`Error::LengthMismatch`] if `s` and `t` do not have the same length.
///   No prefix is compared in that case.
///
/// # Examples
///
/// ```
/// use tinyalign::hamming_distance;
///
/// let distance: u16 = hamming_distance(b"NAJIBEATSPEPPERS", b"NAJIBPEPPERSEATS").unwrap();
/// assert_eq!(distance, 10);
///
/// let distance: Result<u16, _> = hamming_distance(b"A", b"BC");
/// assert!(distance.is_err());
/// ```
///
/// # References
///
/// * [Hamming distance](https://en.wikipedia.org/wiki/Hamming_distance)
/// * [Hamming's paper](https://doi.org/10.1002/j.1538-7305.1950.tb00463.x)
pub fn hamming_distance<T: Eq, U: UInt>(s: &[T], t: &[T]) -> Result<U, Error> {
    if s.len() != t.len() {
        return Err(Error::LengthMismatch {
            left: s.len(),
            right: t.len(),
        });
    }
    Ok(U::from_usize(s.iter().zip(t).filter(|(a, b)| a != b).count()))
}
