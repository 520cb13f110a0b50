//! # govcodec-evm
//!
//! EVM calldata decoding for GovCodec.
//!
//! Two tiers:
//! - **Schema-based** (`schema_decoder`) — precise typed decoding against a
//!   `ContractRegistry` schema via alloy dyn-abi. Supports every ABI type
//!   including dynamic arrays, bytes, strings, and tuples.
//! - **Manual fallback** (`fallback`) — when no schema exists, slices the
//!   payload into fixed 32-byte words per the type list parsed out of the
//!   raw signature string. Best effort, never fails.

pub mod fallback;
pub mod normalizer;
pub mod schema_decoder;
pub mod selector;

pub use fallback::{decode_fallback, parse_signature, FallbackParameter};
pub use schema_decoder::{decode_with_schema, SchemaDecodedCall};
pub use selector::selector_for;
