//! RTCP receiver report block as a plain record of 32-bit words.
//!
//! The second word packs `fraction_lost` (top 8 bits) and `cumulative_lost`
//! (low 24 bits).
//!
//! ```
//! use rtcp_dump::ReceiverReportBlock;
//!
//! let block = ReceiverReportBlock::new(1, 2, 3, 4, 5, 6, 7)?;
//! assert_eq!(block.fraction_lost(), 2);
//! assert_eq!(block.cumulative_lost(), 3);
//! assert_eq!(block.packed_loss(), 0x0200_0003);
//! assert_eq!(block.words(), &[1, 0x0200_0003, 4, 5, 6, 7]);
//! # Ok::<(), rtcp_dump::RtcpError>(())
//! ```

use bit_view::bit_ops;
use bytemuck_derive::{Pod, Zeroable};

use crate::RtcpError;
use crate::ntp::NtpTimestamp;

pub const WORD_COUNT: usize = 6;
pub const FRACTION_LOST_BITS: usize = 8;
pub const CUMULATIVE_LOST_BITS: usize = 24;
pub const CUMULATIVE_LOST_MAX: u32 = (1 << CUMULATIVE_LOST_BITS) - 1;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct ReceiverReportBlock {
    pub ssrc: u32,
    loss: u32,
    pub highest_seq: u32,
    pub jitter: u32,
    /// Middle 32 bits of the last sender report's NTP timestamp (LSR).
    pub last_timestamp: u32,
    /// Delay since the last sender report (DLSR).
    pub delay: u32,
}

impl ReceiverReportBlock {
    /// Builds a block from its seven fields.
    ///
    /// # Errors
    ///
    /// Returns [`RtcpError::FieldOverflow`] if `cumulative_lost` needs more
    /// than 24 bits.
    pub fn new(
        ssrc: u32,
        fraction_lost: u8,
        cumulative_lost: u32,
        highest_seq: u32,
        jitter: u32,
        last_timestamp: u32,
        delay: u32,
    ) -> Result<Self, RtcpError> {
        let mut block = Self {
            ssrc,
            loss: 0,
            highest_seq,
            jitter,
            last_timestamp,
            delay,
        };
        block.set_fraction_lost(fraction_lost);
        block.set_cumulative_lost(cumulative_lost)?;
        Ok(block)
    }

    pub fn from_words(words: [u32; WORD_COUNT]) -> Self {
        bytemuck::cast(words)
    }

    pub fn words(&self) -> &[u32; WORD_COUNT] {
        bytemuck::cast_ref(self)
    }

    pub fn fraction_lost(&self) -> u8 {
        bit_ops::get_bits(&self.loss.to_le_bytes(), CUMULATIVE_LOST_BITS, FRACTION_LOST_BITS) as u8
    }

    pub fn cumulative_lost(&self) -> u32 {
        bit_ops::get_bits(&self.loss.to_le_bytes(), 0, CUMULATIVE_LOST_BITS) as u32
    }

    /// The raw second word: `fraction_lost << 24 | cumulative_lost`.
    pub fn packed_loss(&self) -> u32 {
        self.loss
    }

    pub fn set_fraction_lost(&mut self, fraction_lost: u8) {
        self.write_loss_bits(CUMULATIVE_LOST_BITS, FRACTION_LOST_BITS, fraction_lost as u64);
    }

    pub fn set_cumulative_lost(&mut self, cumulative_lost: u32) -> Result<(), RtcpError> {
        if cumulative_lost > CUMULATIVE_LOST_MAX {
            return Err(RtcpError::FieldOverflow {
                field: "cumulative_lost",
                value: cumulative_lost,
                bits: CUMULATIVE_LOST_BITS,
            });
        }
        self.write_loss_bits(0, CUMULATIVE_LOST_BITS, cumulative_lost as u64);
        Ok(())
    }

    /// The LSR field expanded to a full NTP timestamp.
    pub fn last_sr_timestamp(&self) -> NtpTimestamp {
        NtpTimestamp::from_compact(self.last_timestamp)
    }

    fn write_loss_bits(&mut self, bit_offset: usize, bit_width: usize, value: u64) {
        let mut bytes = self.loss.to_le_bytes();
        bit_ops::set_bits(&mut bytes, bit_offset, bit_width, value);
        self.loss = u32::from_le_bytes(bytes);
    }
}
