//! Schema-based calldata decoder.
//!
//! Resolves a `FunctionSchema` from the registry (by exact signature, or by
//! the calldata's leading 4-byte selector when no signature was supplied)
//! and decodes the parameter words with alloy dyn-abi.
//!
//! Upstream data sources sometimes strip the selector and supply
//! parameter-only calldata. The rule here is explicit: calldata counts as
//! selector-prefixed iff its first 4 bytes equal the resolved schema's
//! selector; otherwise the whole payload is treated as parameter words
//! (equivalent to synthesizing the full payload by prefixing the selector).

use alloy_core::dyn_abi::{DynSolType, DynSolValue};
use govcodec_core::{CallDescriptor, ContractRegistry, DecodeError, DecodedValue, FunctionSchema};

use crate::normalizer;
use crate::selector::hex_bytes;

/// A successful schema decode. `values` is index-aligned with
/// `schema.params` and always has exactly `schema.arity()` entries.
#[derive(Debug, Clone)]
pub struct SchemaDecodedCall {
    pub schema: FunctionSchema,
    pub values: Vec<DecodedValue>,
}

/// Decode a call descriptor against the registry.
///
/// # Errors
/// `SchemaNotFound` when the target or function is unregistered (routing
/// signal — caller falls back to manual decoding); `InvalidCalldata` /
/// `AbiDecodeFailed` / `TypeParse` when the schema exists but the payload
/// does not decode cleanly (also routed to fallback, never surfaced).
pub fn decode_with_schema(
    descriptor: &CallDescriptor,
    registry: &dyn ContractRegistry,
) -> Result<SchemaDecodedCall, DecodeError> {
    let data = hex_bytes(&descriptor.calldata).ok_or_else(|| DecodeError::InvalidCalldata {
        reason: format!("malformed hex: {}", descriptor.calldata),
    })?;

    let schema = resolve_schema(descriptor, &data, registry)?;

    // Selector-presence check: only skip the first 4 bytes when they are
    // the schema's own selector.
    let param_data: &[u8] = if data.len() >= 4 && data[..4] == schema.selector {
        &data[4..]
    } else {
        &data[..]
    };

    let values = decode_param_words(&schema, param_data)?;

    Ok(SchemaDecodedCall { schema, values })
}

/// Resolve the target function schema: exact signature match first, then
/// selector match when the descriptor carries no signature.
fn resolve_schema(
    descriptor: &CallDescriptor,
    data: &[u8],
    registry: &dyn ContractRegistry,
) -> Result<FunctionSchema, DecodeError> {
    if !descriptor.signature.is_empty() {
        if let Some(schema) = registry.lookup_function(&descriptor.target, &descriptor.signature) {
            return Ok(schema);
        }
    } else if data.len() >= 4 {
        let selector: [u8; 4] = data[..4].try_into().expect("length checked");
        if let Some(schema) = registry.lookup_function_by_selector(&descriptor.target, &selector) {
            return Ok(schema);
        }
    }

    Err(DecodeError::SchemaNotFound {
        address: descriptor.target.clone(),
        signature: descriptor.signature.clone(),
    })
}

/// ABI-decode the parameter words of `schema` from `data`.
fn decode_param_words(
    schema: &FunctionSchema,
    data: &[u8],
) -> Result<Vec<DecodedValue>, DecodeError> {
    if schema.params.is_empty() {
        return Ok(Vec::new());
    }

    let types: Vec<DynSolType> = schema
        .params
        .iter()
        .map(|p| {
            DynSolType::parse(&p.declared_type).map_err(|e| DecodeError::TypeParse {
                declared: p.declared_type.clone(),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let tuple_type = DynSolType::Tuple(types);
    // abi_decode_params: function inputs are a parameter sequence, not a
    // standalone tuple encoding
    let decoded = tuple_type
        .abi_decode_params(data)
        .map_err(|e| DecodeError::AbiDecodeFailed {
            reason: format!("parameter decode: {e}"),
        })?;

    let values = match decoded {
        DynSolValue::Tuple(vals) => vals,
        other => vec![other],
    };

    if values.len() != schema.arity() {
        return Err(DecodeError::AbiDecodeFailed {
            reason: format!(
                "arity mismatch: schema declares {}, decoded {}",
                schema.arity(),
                values.len()
            ),
        });
    }

    Ok(values.into_iter().map(normalizer::normalize).collect())
}
