//! Display formatting for decoded values.
//!
//! Pure string work: the amount overlays operate on decimal strings so
//! arbitrary-width integers never need big-integer arithmetic.
//!
//! The function-name-keyed decimal conventions are a best-effort display
//! heuristic, not ground truth. They live in an explicit strategy table
//! (`AmountConventions`) so callers can replace or extend them.

use govcodec_core::{ContractRegistry, DecodedValue};
use std::collections::HashMap;

/// Raw integer amounts above this have no plausible un-scaled reading, so
/// the formatter assumes 18 decimals when no convention is registered.
const ASSUME_SCALED_THRESHOLD: &str = "1000000000000000"; // 10^15

/// Strategy table mapping function names to currency decimal counts.
///
/// 6-decimal entries render as USD (`$9,000.00`); any other count renders
/// as a generic token amount.
#[derive(Debug, Clone)]
pub struct AmountConventions {
    decimals_by_function: HashMap<String, u32>,
}

impl Default for AmountConventions {
    fn default() -> Self {
        let mut decimals_by_function = HashMap::new();
        // The payer disburses the 6-decimal payment token
        decimals_by_function.insert("sendOrRegisterDebt".to_string(), 6);
        Self {
            decimals_by_function,
        }
    }
}

impl AmountConventions {
    /// A table with no entries; only the 10^15 threshold fallback applies.
    pub fn empty() -> Self {
        Self {
            decimals_by_function: HashMap::new(),
        }
    }

    pub fn with(mut self, function_name: impl Into<String>, decimals: u32) -> Self {
        self.decimals_by_function
            .insert(function_name.into(), decimals);
        self
    }

    pub fn decimals_for(&self, function_name: &str) -> Option<u32> {
        self.decimals_by_function.get(function_name).copied()
    }
}

/// Formats decoded values for display. Needs the registry only for
/// address-name lookups.
pub struct ValueFormatter<'a> {
    registry: &'a dyn ContractRegistry,
    conventions: &'a AmountConventions,
}

impl<'a> ValueFormatter<'a> {
    pub fn new(registry: &'a dyn ContractRegistry, conventions: &'a AmountConventions) -> Self {
        Self {
            registry,
            conventions,
        }
    }

    /// Format one decoded value. `function_name` keys the amount overlay.
    pub fn format(&self, value: &DecodedValue, declared_type: &str, function_name: &str) -> String {
        match value {
            DecodedValue::Array(items) => {
                if items.len() > 3 {
                    return format!("[{} items]", items.len());
                }
                let elem_type = element_type(declared_type);
                let parts: Vec<String> = items
                    .iter()
                    .map(|v| self.format(v, elem_type, function_name))
                    .collect();
                format!("[{}]", parts.join(", "))
            }

            DecodedValue::Uint(_)
            | DecodedValue::BigUint(_)
            | DecodedValue::Int(_)
            | DecodedValue::BigInt(_) => {
                let dec = value.as_decimal_str().unwrap_or_default();
                self.format_integer(&dec, function_name)
            }

            DecodedValue::Bool(b) => b.to_string(),

            DecodedValue::Bytes(b) => {
                if b.len() > 33 {
                    format!(
                        "0x{}…{} ({} bytes)",
                        hex::encode(&b[..4]),
                        hex::encode(&b[b.len() - 4..]),
                        b.len()
                    )
                } else {
                    format!("0x{}", hex::encode(b))
                }
            }

            DecodedValue::Str(s) => {
                if s.chars().count() > 50 {
                    let truncated: String = s.chars().take(50).collect();
                    format!("{truncated}…")
                } else {
                    s.clone()
                }
            }

            DecodedValue::Address(a) => match self.registry.display_name(a) {
                Some(name) => format!("{a} ({name})"),
                None => a.clone(),
            },

            DecodedValue::Tuple(fields) => {
                let shown: Vec<String> = fields
                    .iter()
                    .take(2)
                    .map(|(k, v)| format!("{k}: {}", self.format(v, "", function_name)))
                    .collect();
                if fields.len() > 2 {
                    format!("{{ {}, … }}", shown.join(", "))
                } else {
                    format!("{{ {} }}", shown.join(", "))
                }
            }

            DecodedValue::Opaque(w) => w.clone(),
        }
    }

    fn format_integer(&self, dec: &str, function_name: &str) -> String {
        let grouped = group_digits(dec);
        if dec.starts_with('-') {
            return grouped;
        }

        if let Some(decimals) = self.conventions.decimals_for(function_name) {
            return if decimals == 6 {
                format!("{grouped} (${})", scale_decimal(dec, 6, 2))
            } else {
                format!("{grouped} ({} tokens)", scale_decimal(dec, decimals, 4))
            };
        }

        if exceeds_threshold(dec) {
            return format!("{grouped} ({} tokens)", scale_decimal(dec, 18, 4));
        }

        grouped
    }
}

/// Format a wei-denominated decimal string as ETH, trimming trailing
/// fractional zeros. Malformed input renders as "0 ETH".
pub fn format_wei(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || !v.bytes().all(|b| b.is_ascii_digit()) {
        return "0 ETH".to_string();
    }
    let v = v.trim_start_matches('0');
    if v.is_empty() {
        return "0 ETH".to_string();
    }

    let scaled = scale_decimal(v, 18, 18);
    let (int, frac) = scaled.split_once('.').unwrap_or((scaled.as_str(), ""));
    let frac = frac.trim_end_matches('0');
    if frac.is_empty() {
        format!("{int} ETH")
    } else {
        format!("{int}.{frac} ETH")
    }
}

/// Strip one trailing array suffix: "address[]" → "address", "uint8[3]" → "uint8".
fn element_type(declared: &str) -> &str {
    match declared.rfind('[') {
        Some(idx) => &declared[..idx],
        None => declared,
    }
}

/// Insert group separators into a decimal string: "9000000" → "9,000,000".
fn group_digits(dec: &str) -> String {
    let (sign, digits) = match dec.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", dec),
    };
    if digits.is_empty() {
        return dec.to_string();
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("{sign}{out}")
}

/// Divide a non-negative decimal string by 10^decimals and render with
/// exactly `frac_digits` fractional digits (truncated, not rounded). The
/// integer part is grouped.
fn scale_decimal(dec: &str, decimals: u32, frac_digits: usize) -> String {
    let decimals = decimals as usize;
    let padded = if dec.len() <= decimals {
        format!("{dec:0>width$}", width = decimals + 1)
    } else {
        dec.to_string()
    };
    let split = padded.len() - decimals;
    let int = &padded[..split];
    let mut frac: String = padded[split..].chars().take(frac_digits).collect();
    while frac.len() < frac_digits {
        frac.push('0');
    }

    if frac.is_empty() {
        group_digits(int)
    } else {
        format!("{}.{frac}", group_digits(int))
    }
}

/// True when the decimal string exceeds 10^15.
fn exceeds_threshold(dec: &str) -> bool {
    let t = ASSUME_SCALED_THRESHOLD;
    dec.len() > t.len() || (dec.len() == t.len() && dec > t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use govcodec_core::{ContractEntry, FunctionSchema};

    /// Registry stub that knows a single display name.
    struct OneName;

    impl ContractRegistry for OneName {
        fn lookup(&self, _: &str) -> Option<ContractEntry> {
            None
        }
        fn lookup_function(&self, _: &str, _: &str) -> Option<FunctionSchema> {
            None
        }
        fn lookup_function_by_selector(&self, _: &str, _: &[u8; 4]) -> Option<FunctionSchema> {
            None
        }
        fn display_name(&self, address: &str) -> Option<String> {
            (address == "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48").then(|| "USDC".to_string())
        }
    }

    fn fmt<'a>(conventions: &'a AmountConventions) -> ValueFormatter<'a> {
        ValueFormatter::new(&OneName, conventions)
    }

    #[test]
    fn six_decimal_amount_renders_as_usd() {
        let conventions = AmountConventions::default();
        let s = fmt(&conventions).format(
            &DecodedValue::Uint(9_000_000_000),
            "uint256",
            "sendOrRegisterDebt",
        );
        assert!(s.contains("$9,000.00"), "{s}");
    }

    #[test]
    fn large_unscaled_amount_assumes_18_decimals() {
        let conventions = AmountConventions::default();
        let s = fmt(&conventions).format(
            &DecodedValue::Uint(2_500_000_000_000_000_000),
            "uint256",
            "transfer",
        );
        assert!(s.contains("2.5000 tokens"), "{s}");
    }

    #[test]
    fn small_amount_is_just_grouped() {
        let conventions = AmountConventions::default();
        let s = fmt(&conventions).format(&DecodedValue::Uint(1234567), "uint256", "transfer");
        assert_eq!(s, "1,234,567");
    }

    #[test]
    fn known_address_gets_name_annotation() {
        let conventions = AmountConventions::default();
        let s = fmt(&conventions).format(
            &DecodedValue::Address("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".into()),
            "address",
            "transfer",
        );
        assert_eq!(s, "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48 (USDC)");
    }

    #[test]
    fn long_array_collapses_to_count() {
        let conventions = AmountConventions::default();
        let arr = DecodedValue::Array(vec![DecodedValue::Uint(1); 5]);
        assert_eq!(fmt(&conventions).format(&arr, "uint256[]", "f"), "[5 items]");

        let short = DecodedValue::Array(vec![DecodedValue::Uint(1), DecodedValue::Uint(2)]);
        assert_eq!(fmt(&conventions).format(&short, "uint256[]", "f"), "[1, 2]");
    }

    #[test]
    fn long_bytes_truncate() {
        let conventions = AmountConventions::default();
        let bytes = DecodedValue::Bytes((0u8..64).collect());
        let s = fmt(&conventions).format(&bytes, "bytes", "f");
        assert_eq!(s, "0x00010203…3c3d3e3f (64 bytes)");
    }

    #[test]
    fn tuple_truncates_after_two_fields() {
        let conventions = AmountConventions::default();
        let t = DecodedValue::Tuple(vec![
            ("a".into(), DecodedValue::Bool(true)),
            ("b".into(), DecodedValue::Bool(false)),
            ("c".into(), DecodedValue::Bool(true)),
        ]);
        let s = fmt(&conventions).format(&t, "", "f");
        assert_eq!(s, "{ a: true, b: false, … }");
    }

    #[test]
    fn long_string_truncates_with_ellipsis() {
        let conventions = AmountConventions::default();
        let s = fmt(&conventions).format(&DecodedValue::Str("x".repeat(60)), "string", "f");
        assert_eq!(s.chars().count(), 51);
        assert!(s.ends_with('…'));
    }

    #[test]
    fn wei_formatting() {
        assert_eq!(format_wei("0"), "0 ETH");
        assert_eq!(format_wei(""), "0 ETH");
        assert_eq!(format_wei("not a number"), "0 ETH");
        assert_eq!(format_wei("1000000000000000000"), "1 ETH");
        assert_eq!(format_wei("2500000000000000000"), "2.5 ETH");
        assert_eq!(format_wei("1"), "0.000000000000000001 ETH");
    }

    #[test]
    fn grouping_handles_signs_and_short_strings() {
        assert_eq!(group_digits("1"), "1");
        assert_eq!(group_digits("1000"), "1,000");
        assert_eq!(group_digits("-1234567"), "-1,234,567");
    }
}
