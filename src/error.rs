use thiserror::Error;

/// Errors produced while encoding or decoding DNS wire data.
///
/// Decoding never panics or reads out of bounds on malformed input;
/// every structural violation surfaces as one of these variants.
/// Encoding errors are reported before any byte is written, so a
/// failed encode leaves the output untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WireError {
    /// The buffer ended before a required field was fully present.
    #[error("buffer too small: needed {expected} bytes at offset {offset}")]
    UnexpectedEof { expected: usize, offset: usize },

    /// A label exceeds the 63-octet limit.
    #[error("label of {0} octets exceeds the 63-octet limit")]
    LabelTooLong(usize),

    /// The encoded form of a name exceeds the 255-octet limit.
    #[error("encoded name of {0} octets exceeds the 255-octet limit")]
    NameTooLong(usize),

    /// An empty label inside a name (e.g. "a..b").
    #[error("empty label in domain name")]
    EmptyLabel,

    /// A length octet with high bits 01 or 10; only 00 (literal label)
    /// and 11 (compression pointer) are defined.
    #[error("reserved label type in length octet {0:#04x}")]
    ReservedLabelType(u8),

    /// A compression pointer whose target does not strictly precede
    /// the position it was reached from. Rejecting these guarantees
    /// termination without tracking visited offsets.
    #[error("compression pointer to offset {target} does not precede offset {limit}")]
    PointerOutOfRange { target: usize, limit: usize },

    /// A pointer's second octet lies past the end of the buffer.
    #[error("truncated compression pointer at offset {offset}")]
    TruncatedPointer { offset: usize },

    /// RDLENGTH disagrees with the fixed size the record type requires.
    #[error("RDATA of {found} octets for type {rtype}, expected {expected}")]
    RdataLengthMismatch {
        rtype: u16,
        expected: usize,
        found: usize,
    },

    /// RDATA longer than the 16-bit RDLENGTH field can describe.
    #[error("RDATA of {0} octets does not fit in RDLENGTH")]
    RdataTooLong(usize),

    /// Label bytes that are not valid UTF-8.
    #[error("label bytes are not valid UTF-8")]
    InvalidLabel,
}
