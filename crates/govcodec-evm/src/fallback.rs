//! Manual fallback decoder.
//!
//! Used when no schema exists for a call (unknown contract) or the schema
//! decode fails. The parameter type list is parsed out of the raw signature
//! string with a simple parenthesis/comma split — nested tuples are not
//! supported on this path — and the payload is sliced into fixed 32-byte
//! words, one per declared type.
//!
//! This path never fails: unrecoverable input degrades to an empty or
//! partially-typed parameter list, and the caller keeps the raw calldata
//! string so nothing is silently lost.

use alloy_primitives::{I256, U256};
use govcodec_core::{base_type_of, DecodedValue};

use crate::selector::{hex_bytes, selector_for};

/// One manually decoded parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackParameter {
    pub name: String,
    pub declared_type: String,
    pub base_type: String,
    pub value: DecodedValue,
}

/// Split a canonical signature into `(function_name, declared_types)`.
///
/// `"transfer(address,uint256)"` → `("transfer", ["address", "uint256"])`.
/// Returns `None` when there is no parenthesis group. Comma splitting is
/// flat, so nested tuple component lists come out wrong — a declared
/// limitation of the fallback path.
pub fn parse_signature(signature: &str) -> Option<(String, Vec<String>)> {
    let open = signature.find('(')?;
    let close = signature.rfind(')')?;
    if close < open {
        return None;
    }
    let name = signature[..open].trim().to_string();
    let inner = signature[open + 1..close].trim();
    let types = if inner.is_empty() {
        Vec::new()
    } else {
        inner.split(',').map(|t| t.trim().to_string()).collect()
    };
    Some((name, types))
}

/// Well-known parameter names by function, seeded from governance
/// conventions. Bytecode carries no parameter names, so this table is the
/// only source besides synthesized `param<i>` names.
fn well_known_names(function_name: &str) -> Option<&'static [&'static str]> {
    match function_name {
        "transfer" => Some(&["to", "amount"]),
        "transferFrom" | "safeTransferFrom" => Some(&["from", "to", "amount"]),
        "approve" => Some(&["spender", "amount"]),
        "delegate" => Some(&["delegatee"]),
        "mint" => Some(&["to", "amount"]),
        "burn" => Some(&["amount"]),
        "withdraw" => Some(&["to", "amount"]),
        "deposit" => Some(&["amount"]),
        "sendOrRegisterDebt" => Some(&["account", "amount"]),
        "setPendingAdmin" => Some(&["newPendingAdmin"]),
        "transferOwnership" => Some(&["newOwner"]),
        "createStream" => Some(&[
            "recipient",
            "tokenAmount",
            "tokenAddress",
            "startTime",
            "stopTime",
            "nonce",
            "predictedStreamAddress",
        ]),
        _ => None,
    }
}

/// Decode calldata against the type list parsed from `signature`.
///
/// Only four base types get semantic decoding — `address`, `uintN`/`intN`,
/// `bool`, `bytesN`; anything else yields the raw word as opaque hex.
///
/// Truncated calldata degrades to a partial list: each declared type is
/// decoded only while a full 32-byte word remains, so the result can hold
/// fewer parameters than the signature declares. Callers that need the
/// all-or-nothing reading should compare the result length against the
/// signature's arity.
pub fn decode_fallback(signature: &str, calldata: &str) -> Vec<FallbackParameter> {
    let Some((function_name, types)) = parse_signature(signature) else {
        return Vec::new();
    };
    if types.is_empty() {
        return Vec::new();
    }

    let Some(data) = hex_bytes(calldata) else {
        return Vec::new();
    };
    if data.is_empty() {
        return Vec::new();
    }

    // Skip the selector only when it is verifiably present: the signature
    // itself tells us what it must be.
    let own_selector = selector_for(signature);
    let words: &[u8] = if data.len() >= 4 && data[..4] == own_selector {
        &data[4..]
    } else {
        &data[..]
    };

    let names = well_known_names(&function_name);

    types
        .iter()
        .enumerate()
        .filter_map(|(i, declared)| {
            let word = words.get(i * 32..(i + 1) * 32)?;
            let name = names
                .and_then(|n| n.get(i).map(|s| s.to_string()))
                .unwrap_or_else(|| format!("param{i}"));
            let base_type = base_type_of(declared);
            Some(FallbackParameter {
                name,
                declared_type: declared.clone(),
                value: decode_word(word, declared, &base_type),
                base_type,
            })
        })
        .collect()
}

/// Decode one 32-byte word per its declared base type.
fn decode_word(word: &[u8], declared: &str, base_type: &str) -> DecodedValue {
    debug_assert_eq!(word.len(), 32);

    if base_type == "address" && declared == base_type {
        return DecodedValue::Address(format!("0x{}", hex::encode(&word[12..])));
    }

    if base_type == "bool" && declared == base_type {
        return DecodedValue::Bool(word.iter().any(|&b| b != 0));
    }

    if declared == base_type && base_type.starts_with("uint") {
        let u = U256::from_be_slice(word);
        return match u128::try_from(u) {
            Ok(v) => DecodedValue::Uint(v),
            Err(_) => DecodedValue::BigUint(u.to_string()),
        };
    }

    if declared == base_type && base_type.starts_with("int") {
        let i = I256::from_raw(U256::from_be_slice(word));
        return match i128::try_from(i) {
            Ok(v) => DecodedValue::Int(v),
            Err(_) => DecodedValue::BigInt(i.to_string()),
        };
    }

    // bytes1..bytes32: reinterpret the word's leading N bytes
    if declared == base_type && base_type.starts_with("bytes") {
        if let Ok(n) = base_type["bytes".len()..].parse::<usize>() {
            if (1..=32).contains(&n) {
                return DecodedValue::Bytes(word[..n].to_vec());
            }
        }
    }

    // Arrays, strings, dynamic bytes, tuples: no semantic decode here
    DecodedValue::Opaque(format!("0x{}", hex::encode(word)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_signature_basic() {
        let (name, types) = parse_signature("transfer(address,uint256)").unwrap();
        assert_eq!(name, "transfer");
        assert_eq!(types, vec!["address", "uint256"]);
    }

    #[test]
    fn parse_signature_no_params() {
        let (name, types) = parse_signature("pause()").unwrap();
        assert_eq!(name, "pause");
        assert!(types.is_empty());
    }

    #[test]
    fn parse_signature_without_parens_is_none() {
        assert!(parse_signature("not a signature").is_none());
        assert!(parse_signature("").is_none());
    }

    fn word_hex(body: &str) -> String {
        format!("{body:0>64}")
    }

    #[test]
    fn decodes_address_uint_bool_words() {
        let sig = "foo(address,uint256,bool)";
        let calldata = format!(
            "0x{}{}{}",
            word_hex("d8da6bf26964af9d7eed9e03e53415d37aa96045"),
            word_hex("f4240"),
            word_hex("1"),
        );
        let params = decode_fallback(sig, &calldata);
        assert_eq!(params.len(), 3);
        assert_eq!(params[0].name, "param0");
        assert_eq!(
            params[0].value,
            DecodedValue::Address("0xd8da6bf26964af9d7eed9e03e53415d37aa96045".into())
        );
        assert_eq!(params[1].value, DecodedValue::Uint(1_000_000));
        assert_eq!(params[2].value, DecodedValue::Bool(true));
    }

    #[test]
    fn well_known_names_applied_for_transfer() {
        let sig = "transfer(address,uint256)";
        let calldata = format!(
            "0x{}{}",
            word_hex("d8da6bf26964af9d7eed9e03e53415d37aa96045"),
            word_hex("f4240"),
        );
        let params = decode_fallback(sig, &calldata);
        assert_eq!(params[0].name, "to");
        assert_eq!(params[1].name, "amount");
    }

    #[test]
    fn selector_prefix_is_skipped_when_present() {
        let sig = "transfer(address,uint256)";
        let words = format!(
            "{}{}",
            word_hex("d8da6bf26964af9d7eed9e03e53415d37aa96045"),
            word_hex("f4240"),
        );
        let with = decode_fallback(sig, &format!("0xa9059cbb{words}"));
        let without = decode_fallback(sig, &format!("0x{words}"));
        assert_eq!(with, without);
        assert_eq!(with.len(), 2);
    }

    #[test]
    fn unsupported_type_yields_opaque_word() {
        let sig = "foo(string)";
        let calldata = format!("0x{}", word_hex("20"));
        let params = decode_fallback(sig, &calldata);
        assert_eq!(params.len(), 1);
        assert!(matches!(params[0].value, DecodedValue::Opaque(_)));
    }

    #[test]
    fn truncated_calldata_degrades_to_partial_list() {
        let sig = "transfer(address,uint256)";
        // Only one word supplied for two declared types
        let calldata = format!("0x{}", word_hex("d8da6bf26964af9d7eed9e03e53415d37aa96045"));
        let params = decode_fallback(sig, &calldata);
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn empty_and_malformed_inputs_yield_empty() {
        assert!(decode_fallback("transfer(address,uint256)", "0x").is_empty());
        assert!(decode_fallback("transfer(address,uint256)", "zz").is_empty());
        assert!(decode_fallback("", "0xa9059cbb").is_empty());
    }
}
