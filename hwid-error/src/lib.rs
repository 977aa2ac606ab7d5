//! Unified error handling for the hwid fingerprint codec.
//!
//! A single error type is shared across all hwid crates. It uses thiserror
//! for ergonomic error definitions with proper Display and Error trait impls.

/// Result type alias using HwidError
pub type Result<T> = std::result::Result<T, HwidError>;

/// Unified error type for all fingerprint codec operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HwidError {
    // ============================================================================
    // Decode Errors
    // ============================================================================
    /// The encoded string could not be tokenized or parsed: wrong token
    /// count, empty or mis-sized token, or non-hexadecimal characters.
    #[error("malformed fingerprint string: {reason}")]
    MalformedInput { reason: String },

    /// The decoded record's checksum slot disagrees with the checksum
    /// recomputed over the identification slots (tampered, corrupted, or
    /// wrong-key input).
    #[error("fingerprint checksum mismatch: expected {expected:#06x}, found {found:#06x}")]
    ChecksumMismatch { expected: u16, found: u16 },

    // ============================================================================
    // API Boundary Errors
    // ============================================================================
    /// The caller-supplied mask does not have one value per record slot.
    /// This indicates programmer error and is never degraded to "no match".
    #[error("key length mismatch: expected {expected} mask values, found {found}")]
    KeyLengthMismatch { expected: usize, found: usize },
}

impl HwidError {
    /// Create a malformed-input error from a reason string
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }
}
