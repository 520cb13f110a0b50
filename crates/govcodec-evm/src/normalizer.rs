//! Converts alloy-core `DynSolValue` → GovCodec `DecodedValue`.

use alloy_core::dyn_abi::DynSolValue;
use govcodec_core::DecodedValue;

/// Convert a decoded `DynSolValue` into a `DecodedValue`.
pub fn normalize(val: DynSolValue) -> DecodedValue {
    match val {
        DynSolValue::Bool(b) => DecodedValue::Bool(b),

        // Values that fit in 128 bits stay native regardless of the declared
        // width, so a small uint256 and a small uint64 normalize identically.
        DynSolValue::Int(i, _) => match i128::try_from(i) {
            Ok(v) => DecodedValue::Int(v),
            Err(_) => DecodedValue::BigInt(i.to_string()),
        },

        DynSolValue::Uint(u, _) => match u128::try_from(u) {
            Ok(v) => DecodedValue::Uint(v),
            Err(_) => DecodedValue::BigUint(u.to_string()),
        },

        DynSolValue::FixedBytes(bytes, size) => {
            DecodedValue::Bytes(bytes[..size.min(32)].to_vec())
        }

        DynSolValue::Bytes(b) => DecodedValue::Bytes(b),

        DynSolValue::String(s) => DecodedValue::Str(s),

        DynSolValue::Address(a) => DecodedValue::Address(format!("{a:#x}")),

        DynSolValue::Array(vals) | DynSolValue::FixedArray(vals) => {
            DecodedValue::Array(vals.into_iter().map(normalize).collect())
        }

        DynSolValue::Tuple(fields) => {
            // Unnamed tuple fields get positional names "0", "1", ...
            let named: Vec<(String, DecodedValue)> = fields
                .into_iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), normalize(v)))
                .collect();
            DecodedValue::Tuple(named)
        }

        // Custom types (e.g. function selector) — fall back to bytes
        DynSolValue::Function(f) => DecodedValue::Bytes(f.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, I256, U256};

    #[test]
    fn normalize_uint256_small() {
        let v = normalize(DynSolValue::Uint(U256::from(42u64), 256));
        assert_eq!(v, DecodedValue::Uint(42));
    }

    #[test]
    fn normalize_uint256_large() {
        let big = U256::MAX;
        let v = normalize(DynSolValue::Uint(big, 256));
        assert_eq!(v, DecodedValue::BigUint(big.to_string()));
    }

    #[test]
    fn normalize_ignores_declared_width() {
        // The same numeric value yields the same variant whether declared
        // as uint64 or uint256.
        let narrow = normalize(DynSolValue::Uint(U256::from(1_000_000u64), 64));
        let wide = normalize(DynSolValue::Uint(U256::from(1_000_000u64), 256));
        assert_eq!(narrow, wide);
        assert_eq!(wide, DecodedValue::Uint(1_000_000));
    }

    #[test]
    fn normalize_int256_small_and_large() {
        let v = normalize(DynSolValue::Int(I256::try_from(-7i64).unwrap(), 256));
        assert_eq!(v, DecodedValue::Int(-7));

        let big = I256::MAX;
        let v = normalize(DynSolValue::Int(big, 256));
        assert_eq!(v, DecodedValue::BigInt(big.to_string()));
    }

    #[test]
    fn normalize_address_is_hex_prefixed() {
        let addr: Address = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"
            .parse()
            .unwrap();
        let v = normalize(DynSolValue::Address(addr));
        assert_eq!(
            v,
            DecodedValue::Address("0xd8da6bf26964af9d7eed9e03e53415d37aa96045".into())
        );
    }

    #[test]
    fn normalize_array() {
        let v = normalize(DynSolValue::Array(vec![
            DynSolValue::Bool(true),
            DynSolValue::Bool(false),
        ]));
        assert_eq!(
            v,
            DecodedValue::Array(vec![DecodedValue::Bool(true), DecodedValue::Bool(false)])
        );
    }
}
