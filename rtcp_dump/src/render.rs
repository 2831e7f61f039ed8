//! Offset-annotated binary dump of a receiver report block.
//!
//! Each row is `OFFSET: BITS (0xVALUE)`, with the offset counted in bits and
//! printed as eight hex digits.
//!
//! ```
//! use rtcp_dump::{FieldRenderer, ReceiverReportBlock, RenderOptions};
//!
//! let block = ReceiverReportBlock::new(1, 2, 3, 4, 5, 6, 7)?;
//! let dump = FieldRenderer::new(RenderOptions::default()).render(&block);
//!
//! let second = dump.lines().nth(1).unwrap();
//! assert_eq!(
//!     second,
//!     "00000020: 0000 0010 0000 0000 0000 0000 0000 0011 (0x02000003)"
//! );
//! # Ok::<(), rtcp_dump::RtcpError>(())
//! ```

use core::fmt;
use core::num::NonZeroUsize;

use bit_view::{BitView, DEFAULT_BLOCK_SIZE, MaskPolicy};

use crate::RtcpError;
use crate::block::{CUMULATIVE_LOST_BITS, ReceiverReportBlock};

/// Rows in a dump. The last row has no field behind it and carries only its
/// offset.
pub const REPORT_LINES: usize = 7;
pub const WORD_BITS: usize = 32;
pub const TITLE: &str = "(RTCP) Receiver block ---------------------------";

const CUMULATIVE_LOST_WIDTH: NonZeroUsize = match NonZeroUsize::new(CUMULATIVE_LOST_BITS) {
    Some(w) => w,
    None => panic!("cumulative lost field has a width"),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prepend the title row.
    pub title: bool,
    /// Bits per space-separated group; 0 disables grouping.
    pub block_size: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: false,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FieldRenderer {
    options: RenderOptions,
}

impl FieldRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn render(&self, block: &ReceiverReportBlock) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.write_to(&mut out, block);
        out
    }

    /// Writes the dump row by row into any `fmt::Write` sink.
    pub fn write_to<W: fmt::Write>(&self, out: &mut W, block: &ReceiverReportBlock) -> fmt::Result {
        tracing::debug!(
            ssrc = block.ssrc,
            title = self.options.title,
            block_size = self.options.block_size,
            "rendering receiver report block"
        );

        if self.options.title {
            writeln!(out, "{TITLE}")?;
        }

        let block_size = self.options.block_size;
        let mut offset = 0usize;
        for line in 0..REPORT_LINES {
            write!(out, "{offset:08X}: ")?;

            if offset == WORD_BITS {
                let fraction = BitView::from(block.fraction_lost());
                let cumulative =
                    BitView::from_width(CUMULATIVE_LOST_WIDTH, u64::from(block.cumulative_lost()));
                write!(
                    out,
                    "{} {} (0x{:08X})",
                    fraction.to_string_grouped(block_size),
                    cumulative.to_string_grouped(block_size),
                    block.packed_loss()
                )?;
            } else if let Some(word) = word_for_line(block, line) {
                write!(
                    out,
                    "{} (0x{:08X})",
                    BitView::from(word).to_string_grouped(block_size),
                    word
                )?;
            }

            tracing::trace!(line, offset, "row rendered");
            writeln!(out)?;
            offset += WORD_BITS;
        }

        Ok(())
    }
}

/// Positional field table; row 1 is the packed loss word and is handled
/// by offset instead.
fn word_for_line(block: &ReceiverReportBlock, line: usize) -> Option<u32> {
    match line {
        0 => Some(block.ssrc),
        2 => Some(block.highest_seq),
        3 => Some(block.jitter),
        4 => Some(block.last_timestamp),
        5 => Some(block.delay),
        _ => None,
    }
}

pub fn render_block(block: &ReceiverReportBlock, options: &RenderOptions) -> String {
    FieldRenderer::new(*options).render(block)
}

/// Renders a single value of arbitrary width.
pub fn render_value(
    bit_width: usize,
    value: u64,
    policy: MaskPolicy,
    block_size: usize,
) -> Result<String, RtcpError> {
    let view = BitView::with_policy(bit_width, value, policy)?;
    Ok(view.to_string_grouped(block_size))
}

impl fmt::Display for ReceiverReportBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldRenderer::default().write_to(f, self)
    }
}
