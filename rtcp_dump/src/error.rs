use bit_view::BitViewError;
use thiserror::Error;

/// Errors for building and rendering report blocks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RtcpError {
    #[error("Value {value} does not fit in the {bits}-bit {field} field")]
    FieldOverflow {
        field: &'static str,
        value: u32,
        bits: usize,
    },

    /// Error from the underlying bit view.
    #[error("bit view error: {0}")]
    BitView(#[from] BitViewError),
}
