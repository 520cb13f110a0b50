//! The action decoder — orchestrates schema decoding, fallback decoding,
//! formatting, classification, and summary generation for one descriptor.
//!
//! `decode` is a total function: every input, however malformed, yields a
//! valid `DecodedAction`. Worst case is a generic summary with empty
//! parameters; the raw calldata is always preserved.

use govcodec_core::{
    ActionCategory, CallDescriptor, ContractRegistry, DecodedAction, DecodedParameter,
    DecodedValue,
};
use govcodec_evm::{decode_fallback, decode_with_schema, parse_signature};
use tracing::debug;

use crate::format::{format_wei, AmountConventions, ValueFormatter};
use crate::recipient;

/// Decodes one call descriptor into a `DecodedAction`.
pub struct ActionDecoder<'a> {
    registry: &'a dyn ContractRegistry,
    conventions: AmountConventions,
}

impl<'a> ActionDecoder<'a> {
    pub fn new(registry: &'a dyn ContractRegistry) -> Self {
        Self {
            registry,
            conventions: AmountConventions::default(),
        }
    }

    pub fn with_conventions(registry: &'a dyn ContractRegistry, conventions: AmountConventions) -> Self {
        Self {
            registry,
            conventions,
        }
    }

    /// Decode a descriptor. Never fails; pure w.r.t. the registry snapshot.
    pub fn decode(&self, descriptor: &CallDescriptor) -> DecodedAction {
        let entry = self.registry.lookup(&descriptor.target);
        let is_known_contract = entry.is_some();
        let (contract_name, contract_description) = match entry {
            Some(e) => (e.display_name, e.description),
            None => (
                truncate_address(&descriptor.target),
                "Unknown contract".to_string(),
            ),
        };

        let value_formatted = format_wei(&descriptor.value);

        let (function_name, parameters): (String, Vec<DecodedParameter>) =
            match decode_with_schema(descriptor, self.registry) {
                Ok(call) => {
                    let function_name = call.schema.name.clone();
                    let parameters = call
                        .schema
                        .params
                        .iter()
                        .zip(call.values)
                        .enumerate()
                        .map(|(i, (p, value))| {
                            self.parameter(
                                &function_name,
                                i,
                                p.name.clone(),
                                p.declared_type.clone(),
                                p.base_type.clone(),
                                value,
                            )
                        })
                        .collect();
                    (function_name, parameters)
                }
                Err(err) => {
                    debug!(target = %descriptor.target, signature = %descriptor.signature,
                           %err, "schema decode unavailable, using fallback");
                    let function_name = parse_signature(&descriptor.signature)
                        .map(|(name, _)| name)
                        .unwrap_or_default();
                    let parameters = decode_fallback(&descriptor.signature, &descriptor.calldata)
                        .into_iter()
                        .enumerate()
                        .map(|(i, p)| {
                            self.parameter(
                                &function_name,
                                i,
                                p.name,
                                p.declared_type,
                                p.base_type,
                                p.value,
                            )
                        })
                        .collect();
                    (function_name, parameters)
                }
            };

        let category = categorize(&function_name, &descriptor.value);
        let summary = summarize(
            &function_name,
            &parameters,
            &contract_name,
            &descriptor.value,
            &value_formatted,
        );

        DecodedAction {
            target: descriptor.target.clone(),
            contract_name,
            contract_description,
            value: descriptor.value.clone(),
            value_formatted,
            function_name,
            parameters,
            calldata: descriptor.calldata.clone(),
            category,
            summary,
            is_known_contract,
        }
    }

    fn parameter(
        &self,
        function_name: &str,
        index: usize,
        name: String,
        declared_type: String,
        base_type: String,
        value: DecodedValue,
    ) -> DecodedParameter {
        let formatter = ValueFormatter::new(self.registry, &self.conventions);
        let display_value = formatter.format(&value, &declared_type, function_name);
        let is_recipient = recipient::is_recipient(function_name, &name, &declared_type, index);
        let recipient_role =
            is_recipient.then(|| recipient::recipient_role(function_name, &name));

        DecodedParameter {
            name,
            declared_type,
            base_type,
            raw_value: value,
            display_value,
            is_recipient,
            recipient_role,
        }
    }
}

/// Classify an action by its function name (and value, for bare transfers).
fn categorize(function_name: &str, value: &str) -> ActionCategory {
    if function_name.is_empty() {
        return if has_nonzero_value(value) {
            ActionCategory::Payment
        } else {
            ActionCategory::Unknown
        };
    }
    match function_name {
        "transfer" | "transferFrom" | "safeTransferFrom" | "sendOrRegisterDebt" => {
            ActionCategory::Payment
        }
        f if f.starts_with("withdraw") || f.starts_with("deposit") => ActionCategory::Payment,
        f if f.starts_with("createStream") => ActionCategory::Stream,
        f if f.starts_with("mint") => ActionCategory::Mint,
        f if f.starts_with("set") || f.starts_with("_set") || f == "transferOwnership" => {
            ActionCategory::GovernanceAdmin
        }
        _ => ActionCategory::Unknown,
    }
}

/// Build the one-line summary from pattern-matched templates.
fn summarize(
    function_name: &str,
    parameters: &[DecodedParameter],
    contract_name: &str,
    value: &str,
    value_formatted: &str,
) -> String {
    let display_of = |name: &str| {
        parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.display_value.clone())
    };
    let first_recipient = parameters
        .iter()
        .find(|p| p.is_recipient)
        .map(|p| p.display_value.clone());
    let amount = display_of("amount")
        .or_else(|| display_of("tokenAmount"))
        .or_else(|| display_of("value"))
        .or_else(|| display_of("wad"));

    let or_unknown = |v: Option<String>| v.unwrap_or_else(|| "?".to_string());

    match function_name {
        "" => {
            if has_nonzero_value(value) {
                format!("Transfer {value_formatted} to {contract_name}")
            } else {
                format!("Call {contract_name}")
            }
        }
        "transfer" => format!(
            "Transfer {} to {}",
            or_unknown(amount),
            or_unknown(first_recipient)
        ),
        "transferFrom" | "safeTransferFrom" => format!(
            "Transfer {} from {} to {}",
            or_unknown(amount.or_else(|| display_of("tokenId"))),
            or_unknown(display_of("from")),
            or_unknown(display_of("to"))
        ),
        "approve" => format!(
            "Approve {} to spend {}",
            or_unknown(display_of("spender").or(first_recipient)),
            or_unknown(amount)
        ),
        "delegate" => format!(
            "Delegate votes to {}",
            or_unknown(display_of("delegatee").or(first_recipient))
        ),
        "sendOrRegisterDebt" => format!(
            "Pay {} to {}",
            or_unknown(amount),
            or_unknown(display_of("account").or(first_recipient))
        ),
        f if f.starts_with("createStream") => format!(
            "Create a payment stream to {} for {}",
            or_unknown(display_of("recipient").or(first_recipient)),
            or_unknown(amount)
        ),
        f if f.starts_with("mint") => match (amount, first_recipient) {
            (Some(a), Some(r)) => format!("Mint {a} to {r}"),
            (Some(a), None) => format!("Mint {a}"),
            _ => format!("Mint via {contract_name}"),
        },
        f if f.starts_with("withdraw") => match amount {
            Some(a) => format!("Withdraw {a} from {contract_name}"),
            None => format!("Withdraw from {contract_name}"),
        },
        f if f.starts_with("deposit") => {
            if has_nonzero_value(value) {
                format!("Deposit {value_formatted} into {contract_name}")
            } else {
                match amount {
                    Some(a) => format!("Deposit {a} into {contract_name}"),
                    None => format!("Deposit into {contract_name}"),
                }
            }
        }
        f if f.starts_with("set") || f.starts_with("_set") => {
            let setting = humanize_setting(f);
            match parameters.first() {
                Some(p) => format!("Set {setting} to {}", p.display_value),
                None => format!("Set {setting}"),
            }
        }
        f => format!("Call {f}() on {contract_name}"),
    }
}

fn has_nonzero_value(value: &str) -> bool {
    value.bytes().any(|b| (b'1'..=b'9').contains(&b))
        && value.bytes().all(|b| b.is_ascii_digit())
}

/// "_setVotingDelay" → "voting delay"
fn humanize_setting(function_name: &str) -> String {
    let stripped = function_name
        .trim_start_matches('_')
        .trim_start_matches("set");
    let mut out = String::with_capacity(stripped.len() + 4);
    for (i, c) in stripped.chars().enumerate() {
        if c.is_ascii_uppercase() && i != 0 {
            out.push(' ');
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

/// "0xd8da6bf26964af9d7eed9e03e53415d37aa96045" → "0xd8da6b…6045"
fn truncate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 12 {
        return address.to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}
