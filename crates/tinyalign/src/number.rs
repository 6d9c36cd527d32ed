//! The `UInt` trait is used to represent the type in which a distance is
//! reported.
//!
//! We provide implementations for all primitive unsigned integers: `u8`,
//! `u16`, `u32`, `u64`, `u128`, `usize`.

use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// An unsigned integer type in which distances can be returned.
///
/// All distance arithmetic is done in `usize` and cast to `Self` once at the
/// end, so a narrow type such as `u8` will wrap for distances it cannot hold.
pub trait UInt: Copy + Default + Debug + Display + Hash + Eq + Ord + Send + Sync {
    /// The additive identity.
    const ZERO: Self;

    /// Casts a `usize` to `Self`. This may be a lossy conversion.
    fn from_usize(n: usize) -> Self;

    /// Returns the number as a `usize`. This may be a lossy conversion.
    fn as_usize(self) -> usize;
}

/// Macro to implement `UInt` for all unsigned integer types.
macro_rules! impl_uint {
    ($($ty:ty),*) => {
        $(
            #[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
            impl UInt for $ty {
                const ZERO: Self = 0;

                fn from_usize(n: usize) -> Self {
                    n as $ty
                }

                fn as_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    }
}

impl_uint!(u8, u16, u32, u64, u128, usize);
