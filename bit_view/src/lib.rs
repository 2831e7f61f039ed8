//! # bit_view
//!
//! A `no_std` compatible view of an unsigned integer as a fixed-width,
//! addressable sequence of bits, with MSB-first binary rendering.
//!
//! ```rust
//! use bit_view::BitView;
//!
//! let view = BitView::new(12, 0xABC).expect("Failed to create view");
//! assert_eq!(view.to_string(), "1010 1011 1100");
//! assert_eq!(view.to_string_grouped(0), "101010111100");
//! assert_eq!(view.bit_at(2), Ok(true));
//! ```
//!
//! ## Byte layout
//!
//! ```rust
//! use bit_view::BitView;
//!
//! // 9 bits need two bytes, stored least significant first
//! let view = BitView::new(9, 0x1FF).unwrap();
//! assert_eq!(view.as_bytes(), &[0xFF, 0x01]);
//! ```
//!

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::BitViewError;

pub mod bit_ops;

pub mod view;
pub use view::{BitView, Bits, DEFAULT_BLOCK_SIZE, MaskPolicy};
