//! # rtcp_dump
//!
//! Binary dumps of an RTCP receiver report block, one 32-bit word per row,
//! built on [`bit_view::BitView`].
//!
//! ```rust
//! use rtcp_dump::{ReceiverReportBlock, RenderOptions, render_block};
//!
//! let block = ReceiverReportBlock::new(1, 2, 3, 4, 5, 6, 7).expect("fields fit");
//! let dump = render_block(&block, &RenderOptions { title: true, ..Default::default() });
//!
//! assert_eq!(dump.lines().count(), 8);
//! assert!(dump.starts_with("(RTCP) Receiver block"));
//! ```
//!
//! ## Features
//! - `cli` (default): build the `rtcp_dump` binary (clap, anyhow, tracing-subscriber)

// Re-export the bit view so callers need a single dependency
pub use bit_view;

pub mod block;
pub mod error;
pub mod ntp;
pub mod render;

pub use block::ReceiverReportBlock;
pub use error::RtcpError;
pub use ntp::NtpTimestamp;
pub use render::{FieldRenderer, RenderOptions, render_block, render_value};
