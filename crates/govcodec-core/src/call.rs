//! Input and output types for proposal action decoding.
//!
//! A governance proposal bundles an ordered list of raw on-chain calls
//! (`CallDescriptor`); decoding turns each into a `DecodedAction` suitable
//! for rendering.

use crate::types::DecodedValue;
use serde::{Deserialize, Serialize};

/// One raw executable action of a proposal, exactly as the governance
/// contract stores it. All fields are strings; malformed content is the
/// decoder's problem, never the descriptor's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallDescriptor {
    /// Target contract address (0x-prefixed hex)
    pub target: String,
    /// ETH value in wei, decimal string
    pub value: String,
    /// Canonical function signature, e.g. "transfer(address,uint256)".
    /// May be empty for bare ETH transfers or selector-only calls.
    pub signature: String,
    /// 0x-prefixed hex calldata. May be just "0x".
    pub calldata: String,
}

impl CallDescriptor {
    pub fn new(
        target: impl Into<String>,
        value: impl Into<String>,
        signature: impl Into<String>,
        calldata: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            value: value.into(),
            signature: signature.into(),
            calldata: calldata.into(),
        }
    }
}

/// One decoded function parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedParameter {
    pub name: String,
    /// Declared ABI type, e.g. "address[]"
    pub declared_type: String,
    /// Element/base type, e.g. "address"
    pub base_type: String,
    pub raw_value: DecodedValue,
    /// Formatted for display
    pub display_value: String,
    /// Whether this parameter denotes a payment/voting/ownership destination
    pub is_recipient: bool,
    /// Short display label, e.g. "Approved Spender". Only set for recipients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_role: Option<String>,
}

/// Coarse classification of an action, used by summaries and by the batch
/// correlator. `Stream` covers both stream creation (assigned at decode
/// time) and stream funding (assigned by correlation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionCategory {
    Payment,
    Stream,
    GovernanceAdmin,
    Mint,
    #[default]
    Unknown,
}

/// A fully decoded proposal action.
///
/// Produced synchronously from a `CallDescriptor` plus a registry snapshot;
/// never persisted, always recomputable. `category`, `summary`, and
/// parameter `recipient_role` are the only fields the batch correlator may
/// rewrite after decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedAction {
    pub target: String,
    pub contract_name: String,
    pub contract_description: String,
    /// ETH value in wei, decimal string (verbatim from the descriptor)
    pub value: String,
    /// e.g. "1.5 ETH"
    pub value_formatted: String,
    /// Empty for bare ETH transfers
    pub function_name: String,
    pub parameters: Vec<DecodedParameter>,
    /// Raw calldata, preserved verbatim
    pub calldata: String,
    pub category: ActionCategory,
    /// One-line natural-language description
    pub summary: String,
    pub is_known_contract: bool,
}

impl DecodedAction {
    /// Look up a decoded parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&DecodedParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Addresses of all parameters flagged as recipients, in declaration order.
    pub fn recipient_addresses(&self) -> Vec<&str> {
        self.parameters
            .iter()
            .filter(|p| p.is_recipient)
            .filter_map(|p| p.raw_value.as_address())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(name: &str, value: DecodedValue, is_recipient: bool) -> DecodedParameter {
        DecodedParameter {
            name: name.into(),
            declared_type: "address".into(),
            base_type: "address".into(),
            display_value: value.to_string(),
            raw_value: value,
            is_recipient,
            recipient_role: None,
        }
    }

    #[test]
    fn recipient_addresses_filters_flagged_params() {
        let action = DecodedAction {
            target: "0x1".into(),
            contract_name: "Token".into(),
            contract_description: String::new(),
            value: "0".into(),
            value_formatted: "0 ETH".into(),
            function_name: "transferFrom".into(),
            parameters: vec![
                param("from", DecodedValue::Address("0xaa".into()), false),
                param("to", DecodedValue::Address("0xbb".into()), true),
            ],
            calldata: "0x".into(),
            category: ActionCategory::Payment,
            summary: String::new(),
            is_known_contract: true,
        };
        assert_eq!(action.recipient_addresses(), vec!["0xbb"]);
        assert!(action.parameter("from").is_some());
        assert!(action.parameter("missing").is_none());
    }
}
