//! The decoded value model.
//!
//! Calldata decoding produces heterogeneous values — integers of arbitrary
//! width, addresses, byte strings, nested arrays and tuples. GovCodec
//! represents all of them with a single closed union so consumers never
//! branch on dynamic types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A decoded parameter value.
///
/// Integers that fit in 128 bits use the native variants; wider values are
/// carried as decimal strings so no precision is lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum DecodedValue {
    Uint(u128),
    /// Large uints (> u128) stored as decimal string
    BigUint(String),
    Int(i128),
    /// Large ints (> i128) stored as decimal string
    BigInt(String),
    Bool(bool),
    Bytes(Vec<u8>),
    Str(String),
    /// EVM address — 20 bytes, hex with 0x prefix (lowercase)
    Address(String),
    Array(Vec<DecodedValue>),
    Tuple(Vec<(String, DecodedValue)>),
    /// A raw 32-byte word the fallback decoder could not interpret,
    /// kept as 0x-prefixed hex so no information is lost.
    Opaque(String),
}

impl DecodedValue {
    /// Returns the inner string if this is an Address value.
    pub fn as_address(&self) -> Option<&str> {
        match self {
            DecodedValue::Address(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Coerce to a u128 if this is a small Uint.
    pub fn as_u128(&self) -> Option<u128> {
        match self {
            DecodedValue::Uint(v) => Some(*v),
            _ => None,
        }
    }

    /// The decimal rendering of any integer variant, `None` otherwise.
    /// Used by the amount formatter, which works on decimal strings so it
    /// never needs big-integer arithmetic.
    pub fn as_decimal_str(&self) -> Option<String> {
        match self {
            DecodedValue::Uint(v) => Some(v.to_string()),
            DecodedValue::BigUint(s) => Some(s.clone()),
            DecodedValue::Int(v) => Some(v.to_string()),
            DecodedValue::BigInt(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedValue::Uint(v) => write!(f, "{v}"),
            DecodedValue::BigUint(v) => write!(f, "{v}"),
            DecodedValue::Int(v) => write!(f, "{v}"),
            DecodedValue::BigInt(v) => write!(f, "{v}"),
            DecodedValue::Bool(v) => write!(f, "{v}"),
            DecodedValue::Bytes(b) => write!(f, "0x{}", hex::encode(b)),
            DecodedValue::Str(s) => write!(f, "{s}"),
            DecodedValue::Address(a) => write!(f, "{a}"),
            DecodedValue::Array(v) => {
                let parts: Vec<_> = v.iter().map(|x| x.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            DecodedValue::Tuple(fields) => {
                let parts: Vec<_> = fields.iter().map(|(k, v)| format!("{k}: {v}")).collect();
                write!(f, "{{{}}}", parts.join(", "))
            }
            DecodedValue::Opaque(w) => write!(f, "{w}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_array_and_tuple() {
        let v = DecodedValue::Array(vec![DecodedValue::Uint(1), DecodedValue::Uint(2)]);
        assert_eq!(v.to_string(), "[1, 2]");

        let t = DecodedValue::Tuple(vec![
            ("a".into(), DecodedValue::Bool(true)),
            ("b".into(), DecodedValue::Str("x".into())),
        ]);
        assert_eq!(t.to_string(), "{a: true, b: x}");
    }

    #[test]
    fn decimal_str_covers_all_integer_variants() {
        assert_eq!(DecodedValue::Uint(42).as_decimal_str().unwrap(), "42");
        assert_eq!(
            DecodedValue::BigUint("340282366920938463463374607431768211457".into())
                .as_decimal_str()
                .unwrap(),
            "340282366920938463463374607431768211457"
        );
        assert_eq!(DecodedValue::Int(-7).as_decimal_str().unwrap(), "-7");
        assert!(DecodedValue::Bool(false).as_decimal_str().is_none());
    }

    #[test]
    fn serde_roundtrip() {
        let val = DecodedValue::Address("0xd8da6bf26964af9d7eed9e03e53415d37aa96045".into());
        let json = serde_json::to_string(&val).unwrap();
        let back: DecodedValue = serde_json::from_str(&json).unwrap();
        assert_eq!(val, back);
    }
}
