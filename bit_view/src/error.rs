#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitViewError {
    #[cfg_attr(feature = "std", error("Bit width must be at least 1, got {0}"))]
    InvalidBitWidth(usize),

    #[cfg_attr(
        feature = "std",
        error("Bit position {0} is out of bounds for width {1}")
    )]
    IndexOutOfBounds(usize, usize),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitViewError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitViewError::InvalidBitWidth(n) => {
                write!(f, "Bit width must be at least 1, got {}", n)
            }
            BitViewError::IndexOutOfBounds(pos, width) => {
                write!(f, "Bit position {} is out of bounds for width {}", pos, width)
            }
        }
    }
}
