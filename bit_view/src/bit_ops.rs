//! Bit-level helpers over little-endian byte slices.
//!
//! Bit `i` of a slice lives in byte `i / 8` at position `i % 8`.

/// Number of bytes needed to hold `bit_width` bits, never less than one.
#[inline]
pub const fn byte_len(bit_width: usize) -> usize {
    if bit_width < 8 { 1 } else { 1 + (bit_width - 1) / 8 }
}

/// Mask selecting the low `bit_width` bits of a `u64`.
#[inline]
pub const fn low_mask(bit_width: usize) -> u64 {
    if bit_width >= 64 {
        u64::MAX
    } else {
        (1u64 << bit_width) - 1
    }
}

/// Reads one bit. The caller guarantees `pos / 8 < slice.len()`.
#[inline(always)]
pub fn get_bit(slice: &[u8], pos: usize) -> bool {
    (slice[pos / 8] >> (pos % 8)) & 1 == 1
}

// slow but obviously correct; every caller reads at most 64 bits
pub fn set_bits(slice: &mut [u8], bit_offset: usize, bit_width: usize, value: u64) {
    let masked = value & low_mask(bit_width);

    for i in 0..bit_width {
        let bit = (masked >> i) & 1;
        let pos = bit_offset + i;
        let byte = pos / 8;
        let bit_in_byte = pos % 8;

        if bit == 1 {
            slice[byte] |= 1 << bit_in_byte;
        } else {
            slice[byte] &= !(1 << bit_in_byte);
        }
    }
}

/// Reads up to 64 bits starting at `bit_offset`. Bits past the end of the
/// slice read as zero.
pub fn get_bits(slice: &[u8], bit_offset: usize, bit_width: usize) -> u64 {
    let mut value = 0u64;

    for i in 0..bit_width.min(64) {
        let pos = bit_offset + i;
        if pos / 8 >= slice.len() {
            break;
        }
        if get_bit(slice, pos) {
            value |= 1u64 << i;
        }
    }

    value
}

/// Writes `value` little-endian into the first `min(slice.len(), 8)` bytes.
pub fn write_le(slice: &mut [u8], value: u64) {
    for (i, byte) in slice.iter_mut().take(8).enumerate() {
        *byte = ((value >> (i * 8)) & 0xFF) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_bits() {
        let mut buf = [0u8; 8];
        set_bits(&mut buf, 3, 5, 0b10101);
        assert_eq!(get_bits(&buf, 3, 5), 0b10101);
    }

    #[test]
    fn byte_len_boundaries() {
        assert_eq!(byte_len(1), 1);
        assert_eq!(byte_len(7), 1);
        assert_eq!(byte_len(8), 1);
        assert_eq!(byte_len(9), 2);
        assert_eq!(byte_len(32), 4);
        assert_eq!(byte_len(64), 8);
        assert_eq!(byte_len(65), 9);
    }

    #[test]
    fn low_mask_saturates_at_64() {
        assert_eq!(low_mask(0), 0);
        assert_eq!(low_mask(4), 0xF);
        assert_eq!(low_mask(63), u64::MAX >> 1);
        assert_eq!(low_mask(64), u64::MAX);
        assert_eq!(low_mask(100), u64::MAX);
    }

    #[test]
    fn write_le_stops_at_slice_end() {
        let mut buf = [0u8; 2];
        write_le(&mut buf, 0x0102_0304);
        assert_eq!(buf, [0x04, 0x03]);

        let mut wide = [0xAAu8; 10];
        write_le(&mut wide, u64::MAX);
        assert_eq!(&wide[..8], &[0xFF; 8]);
        assert_eq!(&wide[8..], &[0xAA, 0xAA]);
    }

    #[test]
    fn get_bits_past_end_reads_zero() {
        let buf = [0xFFu8];
        assert_eq!(get_bits(&buf, 4, 8), 0x0F);
    }
}
