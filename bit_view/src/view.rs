//! Fixed-width bit view over an unsigned integer.
//!
//! # Examples
//!
//! ```rust
//! use bit_view::BitView;
//!
//! let view = BitView::new(32, 0xB710).expect("width is non-zero");
//! assert_eq!(view.to_string(), "0000 0000 0000 0000 1011 0111 0001 0000");
//! assert_eq!(view.byte_count(), 4);
//! assert_eq!(view.bit_at(4), Ok(true));
//! ```
//!
//! ## Masking policies
//!
//! ```rust
//! use bit_view::{BitView, MaskPolicy};
//!
//! let exact = BitView::new(4, 0x1F).unwrap();
//! let legacy = BitView::with_policy(4, 0x1F, MaskPolicy::Legacy).unwrap();
//!
//! // Both render the same four bits...
//! assert_eq!(exact.to_string_grouped(0), legacy.to_string_grouped(0));
//! // ...but the legacy mask keeps one bit above the width in storage.
//! assert_eq!(exact.as_bytes(), &[0x0F]);
//! assert_eq!(legacy.as_bytes(), &[0x1F]);
//! ```

use core::fmt;
use core::iter::FusedIterator;
use core::num::NonZeroUsize;
use core::ops::Index;

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec, vec::Vec};

use crate::BitViewError;
use crate::bit_ops;

type Result<T> = core::result::Result<T, BitViewError>;

/// Block size used by `Display` and `to_string()`.
pub const DEFAULT_BLOCK_SIZE: usize = 4;

/// How a value is truncated to the view's width at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MaskPolicy {
    /// Keep exactly the low `bit_width` bits.
    #[default]
    Exact,
    /// Widths below 64 keep `bit_width + 1` low bits (as far as the buffer
    /// reaches); widths of 64 and above store all 64 bits of the value.
    Legacy,
}

/// An unsigned value of a caller-chosen width, addressable bit by bit.
///
/// Bytes are stored little-endian; bit 0 is the least significant bit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitView {
    bit_width: usize,
    data: Vec<u8>,
    policy: MaskPolicy,
}

impl BitView {
    /// Creates a view of the low `bit_width` bits of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`BitViewError::InvalidBitWidth`] when `bit_width` is zero.
    pub fn new(bit_width: usize, value: u64) -> Result<Self> {
        Self::with_policy(bit_width, value, MaskPolicy::Exact)
    }

    /// Infallible form of [`BitView::new`].
    pub fn from_width(bit_width: NonZeroUsize, value: u64) -> Self {
        Self::build(bit_width, value, MaskPolicy::Exact)
    }

    /// Creates a view using the legacy one-bit-wider mask.
    pub fn with_legacy_mask(bit_width: usize, value: u64) -> Result<Self> {
        Self::with_policy(bit_width, value, MaskPolicy::Legacy)
    }

    pub fn with_policy(bit_width: usize, value: u64, policy: MaskPolicy) -> Result<Self> {
        let width =
            NonZeroUsize::new(bit_width).ok_or(BitViewError::InvalidBitWidth(bit_width))?;
        Ok(Self::build(width, value, policy))
    }

    fn build(bit_width: NonZeroUsize, value: u64, policy: MaskPolicy) -> Self {
        let bit_width = bit_width.get();
        let mut data = vec![0u8; bit_ops::byte_len(bit_width)];

        let stored = match policy {
            MaskPolicy::Exact => value & bit_ops::low_mask(bit_width),
            MaskPolicy::Legacy if bit_width < 64 => value & bit_ops::low_mask(bit_width + 1),
            MaskPolicy::Legacy => value,
        };
        bit_ops::write_le(&mut data, stored);

        Self {
            bit_width,
            data,
            policy,
        }
    }

    pub fn bit_count(&self) -> usize {
        self.bit_width
    }

    pub fn byte_count(&self) -> usize {
        self.data.len()
    }

    pub fn policy(&self) -> MaskPolicy {
        self.policy
    }

    /// Backing bytes, least significant first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns whether bit `position` (0 = least significant) is set.
    ///
    /// # Errors
    ///
    /// Returns [`BitViewError::IndexOutOfBounds`] if `position >= bit_count()`.
    pub fn bit_at(&self, position: usize) -> Result<bool> {
        if position >= self.bit_width {
            return Err(BitViewError::IndexOutOfBounds(position, self.bit_width));
        }
        Ok(bit_ops::get_bit(&self.data, position))
    }

    pub fn get(&self, position: usize) -> Option<bool> {
        self.bit_at(position).ok()
    }

    /// Iterates bits from least to most significant.
    pub fn iter(&self) -> Bits<'_> {
        Bits {
            view: self,
            front: 0,
            back: self.bit_width,
        }
    }

    /// Renders the bits MSB first, with a space between every `block_size`
    /// characters. Grouping is off when `block_size` is 0 or not smaller than
    /// the width.
    pub fn to_string_grouped(&self, block_size: usize) -> String {
        let grouping = block_size > 0 && block_size < self.bit_width;
        let separators = if grouping {
            (self.bit_width - 1) / block_size
        } else {
            0
        };

        let mut out = String::with_capacity(self.bit_width + separators);
        for (i, bit) in self.iter().rev().enumerate() {
            if grouping && i > 0 && i % block_size == 0 {
                out.push(' ');
            }
            out.push(if bit { '1' } else { '0' });
        }
        out
    }

    /// Rebuilds the view in place with a new width, keeping the current
    /// value and masking policy. Returns the new byte count.
    pub fn resize(&mut self, bit_width: usize) -> Result<usize> {
        *self = Self::with_policy(bit_width, self.to_u64(), self.policy)?;
        Ok(self.data.len())
    }

    /// The low `min(bit_count(), 64)` bits as an unsigned value.
    pub fn to_u64(&self) -> u64 {
        bit_ops::get_bits(&self.data, 0, self.bit_width.min(64))
    }

    /// The low `min(bit_count(), 64)` bits read as two's complement.
    pub fn to_i64(&self) -> i64 {
        let shift = 64 - self.bit_width.min(64);
        ((self.to_u64() << shift) as i64) >> shift
    }
}

impl fmt::Display for BitView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_grouped(DEFAULT_BLOCK_SIZE))
    }
}

impl Index<usize> for BitView {
    type Output = bool;

    fn index(&self, position: usize) -> &bool {
        match self.get(position) {
            Some(true) => &true,
            Some(false) => &false,
            None => panic!(
                "bit position {} out of bounds for width {}",
                position, self.bit_width
            ),
        }
    }
}

macro_rules! impl_from_uint {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BitView {
                fn from(value: $t) -> Self {
                    const WIDTH: NonZeroUsize = match NonZeroUsize::new(<$t>::BITS as usize) {
                        Some(w) => w,
                        None => panic!("integer types are never zero bits wide"),
                    };
                    Self::from_width(WIDTH, value as u64)
                }
            }
        )*
    };
}

impl_from_uint!(u8, u16, u32, u64);

pub struct Bits<'a> {
    view: &'a BitView,
    front: usize,
    back: usize,
}

impl<'a> Iterator for Bits<'a> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.front >= self.back {
            None
        } else {
            let bit = bit_ops::get_bit(&self.view.data, self.front);
            self.front += 1;
            Some(bit)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a> DoubleEndedIterator for Bits<'a> {
    fn next_back(&mut self) -> Option<bool> {
        if self.front >= self.back {
            None
        } else {
            self.back -= 1;
            Some(bit_ops::get_bit(&self.view.data, self.back))
        }
    }
}

impl<'a> ExactSizeIterator for Bits<'a> {}

impl<'a> FusedIterator for Bits<'a> {}

impl<'a> IntoIterator for &'a BitView {
    type Item = bool;
    type IntoIter = Bits<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_invocation_groups_by_four() -> Result<()> {
        let view = BitView::new(32, 0xB710)?;
        assert_eq!(
            view.to_string_grouped(4),
            "0000 0000 0000 0000 1011 0111 0001 0000"
        );
        assert_eq!(view.to_string(), view.to_string_grouped(DEFAULT_BLOCK_SIZE));
        Ok(())
    }

    #[test]
    fn zero_width_is_rejected() {
        assert_eq!(BitView::new(0, 1), Err(BitViewError::InvalidBitWidth(0)));
        assert_eq!(
            BitView::with_legacy_mask(0, 1),
            Err(BitViewError::InvalidBitWidth(0))
        );
    }

    #[test]
    fn byte_count_follows_width() -> Result<()> {
        for (width, bytes) in [(1, 1), (7, 1), (8, 1), (9, 2), (16, 2), (24, 3), (32, 4), (64, 8), (65, 9)] {
            assert_eq!(BitView::new(width, 0)?.byte_count(), bytes, "width {width}");
        }
        Ok(())
    }

    #[test]
    fn bit_at_reads_lsb_first() -> Result<()> {
        let view = BitView::new(8, 0b1000_0001)?;
        assert_eq!(view.bit_at(0), Ok(true));
        assert_eq!(view.bit_at(1), Ok(false));
        assert_eq!(view.bit_at(7), Ok(true));
        assert!(view[0]);
        assert!(!view[3]);
        Ok(())
    }

    #[test]
    fn out_of_range_position_is_an_error() -> Result<()> {
        let view = BitView::new(12, 0xFFF)?;
        assert_eq!(view.bit_at(12), Err(BitViewError::IndexOutOfBounds(12, 12)));
        assert_eq!(view.get(100), None);
        Ok(())
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_panics_past_width() {
        let view = BitView::from(0u8);
        let _ = view[8];
    }

    #[test]
    fn grouping_disabled_for_zero_or_wide_blocks() -> Result<()> {
        let view = BitView::new(8, 0xA5)?;
        assert_eq!(view.to_string_grouped(0), "10100101");
        assert_eq!(view.to_string_grouped(8), "10100101");
        assert_eq!(view.to_string_grouped(9), "10100101");
        assert_eq!(view.to_string_grouped(4), "1010 0101");
        Ok(())
    }

    #[test]
    fn partial_last_group_is_at_the_lsb_end() -> Result<()> {
        let view = BitView::new(10, 0x3FF)?;
        assert_eq!(view.to_string_grouped(4), "1111 1111 11");
        Ok(())
    }

    #[test]
    fn exact_mask_drops_high_bits() -> Result<()> {
        let view = BitView::new(4, 0xFF)?;
        assert_eq!(view.as_bytes(), &[0x0F]);
        assert_eq!(view.to_u64(), 0xF);
        Ok(())
    }

    #[test]
    fn legacy_mask_keeps_one_extra_bit() -> Result<()> {
        let view = BitView::with_legacy_mask(4, 0xFF)?;
        assert_eq!(view.as_bytes(), &[0x1F]);
        assert_eq!(view.to_string_grouped(0), "1111");
        assert_eq!(view.to_u64(), 0xF);

        // 12 bits fit in two bytes, so bit 12 survives in storage
        let view = BitView::with_legacy_mask(12, 0xFFFF)?;
        assert_eq!(view.as_bytes(), &[0xFF, 0x1F]);
        assert_eq!(view.to_string_grouped(0), "111111111111");

        // the extra bit of an 8-bit view has no byte to land in
        let view = BitView::with_legacy_mask(8, 0x1FF)?;
        assert_eq!(view.byte_count(), 1);
        assert_eq!(view.as_bytes(), &[0xFF]);
        assert_eq!(view.to_string_grouped(0), "11111111");

        // same at the 16-bit byte boundary
        let view = BitView::with_legacy_mask(16, 0x3_FFFF)?;
        assert_eq!(view.as_bytes(), &[0xFF, 0xFF]);

        // width 63 saturates the mask instead of overflowing
        let view = BitView::with_legacy_mask(63, u64::MAX)?;
        assert_eq!(view.as_bytes(), &[0xFF; 8]);
        Ok(())
    }

    #[test]
    fn wide_widths_store_the_full_value() -> Result<()> {
        let exact = BitView::new(72, u64::MAX)?;
        let legacy = BitView::with_legacy_mask(72, u64::MAX)?;
        assert_eq!(exact.byte_count(), 9);
        assert_eq!(exact.as_bytes(), legacy.as_bytes());
        assert_eq!(exact.as_bytes()[8], 0);
        assert_eq!(exact.to_string_grouped(0), format!("{}{}", "0".repeat(8), "1".repeat(64)));
        Ok(())
    }

    #[test]
    fn resize_rebuilds_in_place() -> Result<()> {
        let mut view = BitView::new(16, 0xABCD)?;
        assert_eq!(view.resize(8)?, 1);
        assert_eq!(view.bit_count(), 8);
        assert_eq!(view.to_u64(), 0xCD);

        assert_eq!(view.resize(24)?, 3);
        assert_eq!(view.to_string_grouped(0), "000000000000000011001101");

        assert_eq!(view.resize(0), Err(BitViewError::InvalidBitWidth(0)));
        assert_eq!(view.bit_count(), 24);
        Ok(())
    }

    #[test]
    fn signed_reading_sign_extends() -> Result<()> {
        assert_eq!(BitView::new(8, 0xFF)?.to_i64(), -1);
        assert_eq!(BitView::new(8, 0x7F)?.to_i64(), 127);
        assert_eq!(BitView::new(24, 0x80_0000)?.to_i64(), -0x80_0000);
        assert_eq!(BitView::new(64, u64::MAX)?.to_i64(), -1);
        assert_eq!(BitView::new(1, 1)?.to_i64(), -1);
        Ok(())
    }

    #[test]
    fn from_unsigned_integers_uses_their_width() {
        assert_eq!(BitView::from(0xA5u8).to_string(), "1010 0101");
        assert_eq!(BitView::from(1u16).bit_count(), 16);
        assert_eq!(BitView::from(0xB710u32), BitView::new(32, 0xB710).unwrap());
        assert_eq!(BitView::from(u64::MAX).byte_count(), 8);
    }

    #[test]
    fn iterator_is_exact_and_reversible() -> Result<()> {
        let view = BitView::new(5, 0b10110)?;
        let bits = view.iter();
        assert_eq!(bits.len(), 5);

        let lsb_first: Vec<bool> = view.iter().collect();
        assert_eq!(lsb_first, vec![false, true, true, false, true]);

        let msb_first: Vec<bool> = (&view).into_iter().rev().collect();
        assert_eq!(msb_first, vec![true, false, true, true, false]);
        Ok(())
    }
}
