//! Standard Ethereum ABI-JSON → `FunctionSchema` conversion.
//!
//! This is the import path behind `register_schema`: block-explorer lookups
//! and static bundles both produce ABI JSON, which is parsed into raw serde
//! structs and converted to canonical signatures, selectors, and parameter
//! schemas.

use govcodec_core::{FunctionSchema, ParameterSchema, RegistryError};
use serde::Deserialize;
use tiny_keccak::{Hasher, Keccak};

// ─── Raw ABI serde types ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct AbiItem {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    inputs: Vec<AbiParam>,
}

#[derive(Debug, Deserialize)]
struct AbiParam {
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    ty: String,
    #[serde(default)]
    components: Vec<AbiParam>,
}

// ─── Conversion ───────────────────────────────────────────────────────────────

/// Parse an ABI JSON array into function schemas.
///
/// Non-function items (events, constructors, errors) are skipped.
///
/// # Errors
/// `Serde` for malformed JSON, `EmptyAbi` when no functions remain after
/// filtering, `InvalidAbi` for items that cannot form a canonical signature.
pub fn parse_abi_functions(raw_abi_json: &str) -> Result<Vec<FunctionSchema>, RegistryError> {
    let items: Vec<AbiItem> = serde_json::from_str(raw_abi_json)?;

    let mut schemas = Vec::new();
    for item in items.iter().filter(|i| i.kind == "function") {
        if item.name.is_empty() {
            return Err(RegistryError::InvalidAbi {
                reason: "function item without a name".into(),
            });
        }

        let canonical_types: Vec<String> = item
            .inputs
            .iter()
            .map(canonical_type)
            .collect::<Result<_, _>>()?;
        let signature = format!("{}({})", item.name, canonical_types.join(","));

        let params = item
            .inputs
            .iter()
            .zip(canonical_types.iter())
            .enumerate()
            .map(|(i, (p, ty))| {
                let name = if p.name.is_empty() {
                    format!("param{i}")
                } else {
                    p.name.clone()
                };
                ParameterSchema::new(name, ty.clone())
            })
            .collect();

        schemas.push(FunctionSchema {
            name: item.name.clone(),
            selector: selector_of(&signature),
            signature,
            params,
            description: None,
        });
    }

    if schemas.is_empty() {
        return Err(RegistryError::EmptyAbi);
    }
    Ok(schemas)
}

/// Canonical ABI type string for a parameter. `tuple` types expand their
/// component list: `tuple[] {address,uint256}` → `(address,uint256)[]`.
fn canonical_type(param: &AbiParam) -> Result<String, RegistryError> {
    if let Some(suffix) = param.ty.strip_prefix("tuple") {
        if param.components.is_empty() {
            return Err(RegistryError::InvalidAbi {
                reason: format!("tuple parameter '{}' has no components", param.name),
            });
        }
        let inner: Vec<String> = param
            .components
            .iter()
            .map(canonical_type)
            .collect::<Result<_, _>>()?;
        Ok(format!("({}){suffix}", inner.join(",")))
    } else {
        Ok(param.ty.clone())
    }
}

/// keccak256(signature)[..4]
fn selector_of(signature: &str) -> [u8; 4] {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(signature.as_bytes());
    hasher.finalize(&mut output);
    [output[0], output[1], output[2], output[3]]
}

#[cfg(test)]
mod tests {
    use super::*;

    const ERC20_ABI: &str = r#"[
        {
            "name": "transfer",
            "type": "function",
            "inputs": [
                {"name": "to", "type": "address"},
                {"name": "amount", "type": "uint256"}
            ],
            "outputs": [{"name": "", "type": "bool"}],
            "stateMutability": "nonpayable"
        },
        {
            "name": "Transfer",
            "type": "event",
            "inputs": []
        }
    ]"#;

    #[test]
    fn parses_functions_and_skips_events() {
        let schemas = parse_abi_functions(ERC20_ABI).unwrap();
        assert_eq!(schemas.len(), 1);
        assert_eq!(schemas[0].signature, "transfer(address,uint256)");
        assert_eq!(hex::encode(schemas[0].selector), "a9059cbb");
        assert_eq!(schemas[0].params[0].name, "to");
        assert_eq!(schemas[0].params[1].base_type, "uint256");
    }

    #[test]
    fn tuple_components_expand_in_signature() {
        let abi = r#"[
            {
                "name": "execute",
                "type": "function",
                "inputs": [
                    {
                        "name": "call",
                        "type": "tuple",
                        "components": [
                            {"name": "target", "type": "address"},
                            {"name": "amount", "type": "uint256"}
                        ]
                    }
                ]
            }
        ]"#;
        let schemas = parse_abi_functions(abi).unwrap();
        assert_eq!(schemas[0].signature, "execute((address,uint256))");
        assert_eq!(schemas[0].params[0].base_type, "tuple");
    }

    #[test]
    fn unnamed_params_are_synthesized() {
        let abi = r#"[
            {"name": "burn", "type": "function", "inputs": [{"name": "", "type": "uint256"}]}
        ]"#;
        let schemas = parse_abi_functions(abi).unwrap();
        assert_eq!(schemas[0].params[0].name, "param0");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_abi_functions("not json").is_err());
    }

    #[test]
    fn abi_without_functions_is_empty_abi() {
        let err = parse_abi_functions(r#"[{"name": "E", "type": "event"}]"#).unwrap_err();
        assert!(matches!(err, RegistryError::EmptyAbi));
    }
}
