//! Function selector computation.
//!
//! The selector of an EVM function is the first 4 bytes of the keccak256
//! hash of its canonical signature string, e.g.:
//!   keccak256("transfer(address,uint256)")[..4] → 0xa9059cbb

use tiny_keccak::{Hasher, Keccak};

/// Compute the 4-byte selector of a canonical function signature.
/// Input: `"name(type1,type2,...)"` with no parameter names or spaces.
pub fn selector_for(signature: &str) -> [u8; 4] {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(signature.as_bytes());
    hasher.finalize(&mut output);
    [output[0], output[1], output[2], output[3]]
}

/// Decode 0x-prefixed (or bare) hex into bytes. Returns `None` on any
/// malformed input; callers treat that as "no calldata".
pub fn hex_bytes(hex_str: &str) -> Option<Vec<u8>> {
    let stripped = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    if stripped.is_empty() {
        return Some(Vec::new());
    }
    hex::decode(stripped).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erc20_transfer_selector() {
        assert_eq!(
            hex::encode(selector_for("transfer(address,uint256)")),
            "a9059cbb"
        );
    }

    #[test]
    fn approve_selector() {
        assert_eq!(
            hex::encode(selector_for("approve(address,uint256)")),
            "095ea7b3"
        );
    }

    #[test]
    fn hex_bytes_accepts_prefix_and_rejects_garbage() {
        assert_eq!(hex_bytes("0x"), Some(vec![]));
        assert_eq!(hex_bytes("0xff00"), Some(vec![0xff, 0x00]));
        assert_eq!(hex_bytes("zz"), None);
    }
}
