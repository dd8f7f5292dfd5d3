//! SDK error types.
//!
//! Every failure of the codec, the account builder and the assembler is a
//! variant of [`SdkError`]. Errors are returned to the direct caller; nothing
//! is retried or recovered inside the SDK.

/// SDK errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SdkError {
    /// No schema is registered for the requested operation.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// An argument cannot be represented in its declared wire type.
    #[error("argument `{field}` out of range for {ty}: {value}")]
    ArgumentOutOfRange {
        /// Field path.
        field: String,
        /// Declared wire type.
        ty: &'static str,
        /// Offending value.
        value: String,
    },

    /// A fixed-size byte array has the wrong length.
    #[error("argument `{field}` must be {expected} bytes, got {actual}")]
    InvalidFixedLength {
        /// Field path.
        field: String,
        /// Declared length.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },

    /// An argument value does not have the shape of its declared type.
    #[error("argument `{field}` expects {expected}")]
    TypeMismatch {
        /// Field path.
        field: String,
        /// Declared wire type.
        expected: &'static str,
    },

    /// The number of arguments differs from the number of schema fields.
    #[error("expected {expected} arguments, got {actual}")]
    ArgumentCountMismatch {
        /// Number of schema fields.
        expected: usize,
        /// Number of supplied arguments.
        actual: usize,
    },

    /// Input ended before a field could be read.
    #[error("truncated input reading `{field}`: need {needed} bytes, {remaining} remaining")]
    TruncatedInput {
        /// Field path.
        field: String,
        /// Bytes required by the field.
        needed: usize,
        /// Bytes left in the input.
        remaining: usize,
    },

    /// Input has bytes left over after the last field.
    #[error("{0} trailing bytes after last field")]
    TrailingBytes(usize),

    /// Decoded enum tag does not name a declared variant.
    #[error("invalid enum tag {tag} for `{field}`")]
    InvalidEnumTag {
        /// Field path.
        field: String,
        /// Decoded tag.
        tag: u8,
    },

    /// Decoded bool byte is neither 0 nor 1.
    #[error("invalid bool value {byte} for `{field}`")]
    InvalidBool {
        /// Field path.
        field: String,
        /// Decoded byte.
        byte: u8,
    },

    /// An account role has no override, no supplied address and no default.
    #[error("missing required account: {0}")]
    MissingRequiredAccount(String),

    /// The target program id is the all-zero address.
    #[error("program id must not be empty")]
    EmptyProgramId,
}
