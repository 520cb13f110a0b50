//! Contract schema model — the in-memory representation of a contract's
//! known function signatures, plus the `ContractRegistry` trait concrete
//! registries implement (see `govcodec-registry`).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// How much we trust our knowledge of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractCategory {
    /// Part of the governance system itself (treasury, payer, token, ...)
    KnownInternal,
    /// A known third-party contract (stablecoin, wrapped token, ...)
    KnownExternal,
    #[default]
    Unknown,
}

/// Definition of a single function parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSchema {
    pub name: String,
    /// Declared ABI type, e.g. "address[]"
    pub declared_type: String,
    /// Base type with array suffixes stripped, e.g. "address"
    pub base_type: String,
}

impl ParameterSchema {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        let declared_type = declared_type.into();
        let base_type = base_type_of(&declared_type);
        Self {
            name: name.into(),
            declared_type,
            base_type,
        }
    }
}

/// A known function of a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSchema {
    /// Function name, e.g. "transfer"
    pub name: String,
    /// Canonical signature, e.g. "transfer(address,uint256)"
    pub signature: String,
    /// Ordered parameter definitions (order matters for ABI decode)
    pub params: Vec<ParameterSchema>,
    /// keccak256(signature)[..4]
    pub selector: [u8; 4],
    /// Optional human description of what the function does
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FunctionSchema {
    /// Declared parameter count.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Selector as a hex string ("0xaabbccdd")
    pub fn selector_hex(&self) -> String {
        format!("0x{}", hex::encode(self.selector))
    }
}

/// Everything the registry knows about one contract address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractEntry {
    /// Lowercase 0x-prefixed address
    pub address: String,
    /// Display name, e.g. "Treasury (Executor)"
    pub display_name: String,
    pub description: String,
    pub category: ContractCategory,
    /// signature → schema. Insertion order is presentation order.
    pub functions: IndexMap<String, FunctionSchema>,
}

impl ContractEntry {
    pub fn new(
        address: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
        category: ContractCategory,
    ) -> Self {
        Self {
            address: normalize_address(&address.into()),
            display_name: display_name.into(),
            description: description.into(),
            category,
            functions: IndexMap::new(),
        }
    }

    /// Add a function schema, keyed by its canonical signature.
    pub fn with_function(mut self, schema: FunctionSchema) -> Self {
        self.functions.insert(schema.signature.clone(), schema);
        self
    }

    /// Find a function by its 4-byte selector.
    pub fn function_by_selector(&self, selector: &[u8; 4]) -> Option<&FunctionSchema> {
        self.functions.values().find(|f| &f.selector == selector)
    }
}

/// A thread-safe read view of a contract schema registry.
///
/// Absence is always `None`, never an error: a missing entry is a routing
/// signal (fall back to manual decoding), not a failure.
pub trait ContractRegistry: Send + Sync {
    /// Look up a contract entry by address (case-insensitive).
    fn lookup(&self, address: &str) -> Option<ContractEntry>;

    /// Look up a function schema by address + exact canonical signature.
    fn lookup_function(&self, address: &str, signature: &str) -> Option<FunctionSchema>;

    /// Look up a function schema by address + 4-byte selector.
    fn lookup_function_by_selector(
        &self,
        address: &str,
        selector: &[u8; 4],
    ) -> Option<FunctionSchema>;

    /// Display name for an address, if registered. Used by the value
    /// formatter to annotate address parameters.
    fn display_name(&self, address: &str) -> Option<String> {
        self.lookup(address).map(|e| e.display_name)
    }
}

/// Lowercase an address for use as a registry key or comparison operand.
pub fn normalize_address(address: &str) -> String {
    address.trim().to_ascii_lowercase()
}

/// Derive the base type of a declared ABI type: array suffixes are
/// stripped ("address[]" → "address", "uint256[3][]" → "uint256") and any
/// component list collapses to "tuple".
pub fn base_type_of(declared: &str) -> String {
    let declared = declared.trim();
    if declared.starts_with('(') {
        return "tuple".to_string();
    }
    match declared.find('[') {
        Some(idx) => declared[..idx].to_string(),
        None => declared.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_type_strips_array_suffixes() {
        assert_eq!(base_type_of("address"), "address");
        assert_eq!(base_type_of("address[]"), "address");
        assert_eq!(base_type_of("uint256[3][]"), "uint256");
        assert_eq!(base_type_of("(address,uint256)[]"), "tuple");
    }

    #[test]
    fn entry_selector_lookup() {
        let schema = FunctionSchema {
            name: "transfer".into(),
            signature: "transfer(address,uint256)".into(),
            params: vec![
                ParameterSchema::new("to", "address"),
                ParameterSchema::new("amount", "uint256"),
            ],
            selector: [0xa9, 0x05, 0x9c, 0xbb],
            description: None,
        };
        let entry = ContractEntry::new(
            "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
            "USDC",
            "USD Coin",
            ContractCategory::KnownExternal,
        )
        .with_function(schema);

        // Address was lowercased on construction
        assert_eq!(entry.address, "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
        assert!(entry.function_by_selector(&[0xa9, 0x05, 0x9c, 0xbb]).is_some());
        assert!(entry.function_by_selector(&[0, 0, 0, 0]).is_none());
    }
}
