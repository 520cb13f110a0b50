//! # govcodec-core
//!
//! Core types and traits shared across all GovCodec crates: the call
//! descriptor input model, the decoded-action output model, the contract
//! schema model, and the `ContractRegistry` trait that concrete registries
//! implement.

pub mod call;
pub mod error;
pub mod schema;
pub mod types;

pub use call::{ActionCategory, CallDescriptor, DecodedAction, DecodedParameter};
pub use error::{DecodeError, RegistryError};
pub use schema::{
    base_type_of, ContractCategory, ContractEntry, ContractRegistry, FunctionSchema,
    ParameterSchema,
};
pub use types::DecodedValue;
