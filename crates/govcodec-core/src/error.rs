//! Error types for the GovCodec decode pipeline.
//!
//! `DecodeError` never escapes the action decoder's public `decode` call:
//! every variant is either a routing signal (fall back to manual decoding)
//! or is absorbed into a degraded-but-valid `DecodedAction`.

use thiserror::Error;

/// Errors from the schema-based decode path.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Routing signal, not a failure: the caller falls back to the manual
    /// word-slicing decoder.
    #[error("No schema registered for {address} / {signature}")]
    SchemaNotFound { address: String, signature: String },

    #[error("ABI decode failed: {reason}")]
    AbiDecodeFailed { reason: String },

    #[error("Invalid calldata: {reason}")]
    InvalidCalldata { reason: String },

    #[error("Unparseable declared type '{declared}': {reason}")]
    TypeParse { declared: String, reason: String },
}

/// Errors from schema registration.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Invalid ABI definition: {reason}")]
    InvalidAbi { reason: String },

    #[error("ABI definition contains no functions")]
    EmptyAbi,

    #[error("ABI JSON parse error: {0}")]
    Serde(#[from] serde_json::Error),
}
