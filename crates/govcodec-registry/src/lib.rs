//! # govcodec-registry
//!
//! Contract schema registry for GovCodec.
//!
//! - **In-memory registry** — thread-safe, process-lifetime store keyed by
//!   contract address, seeded with the built-in governance bundle
//! - **ABI-JSON import** — `register_schema` accepts standard Ethereum ABI
//!   JSON (from a static bundle or an external verified-source lookup) and
//!   converts it into `FunctionSchema` entries
//!
//! The public-facing read API is the `ContractRegistry` trait from
//! `govcodec-core`.

pub mod abi_json;
pub mod builtin;
pub mod memory;

pub use abi_json::parse_abi_functions;
pub use memory::MemoryRegistry;
