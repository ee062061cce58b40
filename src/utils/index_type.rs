//! Compact index types for arena-linked chains.

use core::hash::Hash;
use std::fmt::Debug;

/// An integer type used as a **compact link between arena slots**.
///
/// Instead of boxed pointers, [`LinkedSteque`](crate::LinkedSteque) stores its nodes in a
/// `Vec` and links them by index. A narrow index type shrinks every node, at the price of
/// a lower ceiling on how many nodes can be alive at once: `NONE` itself is never a valid
/// slot, so a chain indexed by `u8` holds at most 255 nodes.
pub trait IndexType: Copy + Eq + Hash + Debug + 'static {
    /// Sentinel value meaning "no node" (the end of a chain, or an empty head/tail).
    const NONE: Self;

    /// Converts this index to a `usize` for slot access.
    fn as_usize(self) -> usize;

    /// Converts a `usize` slot number to this compact type.
    ///
    /// Returns `None` when `i` is not representable or collides with [`IndexType::NONE`].
    fn from_usize(i: usize) -> Option<Self>;

    /// Returns `true` if this index is the `NONE` sentinel.
    #[inline(always)]
    fn is_none(self) -> bool {
        self == Self::NONE
    }
}

macro_rules! impl_index_type {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IndexType for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline(always)]
                fn as_usize(self) -> usize {
                    self as usize
                }

                #[inline(always)]
                fn from_usize(i: usize) -> Option<Self> {
                    match <$ty>::try_from(i) {
                        Ok(idx) if idx != Self::NONE => Some(idx),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_index_type!(u8, u16, u32, usize);
