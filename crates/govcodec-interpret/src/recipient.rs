//! Recipient classification.
//!
//! Flags parameters that denote payment/voting/ownership destinations so
//! the rendering layer can resolve their identities. Two independent rules
//! qualify a parameter, and only `address`-typed parameters can qualify:
//! a static index table for well-known function shapes, or a match of the
//! parameter name against a fixed vocabulary.

/// Parameter names that denote a destination, matched case-insensitively.
const RECIPIENT_NAMES: &[&str] = &[
    "recipient",
    "to",
    "account",
    "spender",
    "delegatee",
    "receiver",
    "beneficiary",
    "owner",
    "newowner",
    "target",
    "destination",
];

/// Qualifying parameter indices for well-known function shapes.
fn table_indices(function_name: &str) -> Option<&'static [usize]> {
    match function_name {
        "transfer" | "approve" | "delegate" | "mint" | "sendOrRegisterDebt" | "createStream"
        | "transferOwnership" | "withdraw" => Some(&[0]),
        // index 0 is the source, never a recipient
        "transferFrom" | "safeTransferFrom" => Some(&[1]),
        _ => None,
    }
}

/// Whether the parameter denotes a recipient/destination address.
pub fn is_recipient(
    function_name: &str,
    param_name: &str,
    declared_type: &str,
    param_index: usize,
) -> bool {
    if declared_type != "address" {
        return false;
    }
    if table_indices(function_name).is_some_and(|ix| ix.contains(&param_index)) {
        return true;
    }
    let lower = param_name.to_ascii_lowercase();
    RECIPIENT_NAMES.contains(&lower.as_str())
}

/// Short display label for a recipient parameter.
pub fn recipient_role(function_name: &str, param_name: &str) -> String {
    let role = match function_name {
        "approve" | "increaseAllowance" => "Approved Spender",
        "delegate" => "Voting Delegate",
        "transferOwnership" => "New Owner",
        "createStream" => "Stream Recipient",
        "sendOrRegisterDebt" => "Payment Recipient",
        "mint" => "Mint Recipient",
        _ => match param_name.to_ascii_lowercase().as_str() {
            "spender" => "Approved Spender",
            "delegatee" => "Voting Delegate",
            "owner" | "newowner" => "New Owner",
            _ => "Recipient",
        },
    };
    role.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approve_index_zero_is_spender() {
        assert!(is_recipient("approve", "spender", "address", 0));
        assert_eq!(recipient_role("approve", "spender"), "Approved Spender");
    }

    #[test]
    fn transfer_from_flags_only_destination() {
        assert!(!is_recipient("transferFrom", "from", "address", 0));
        assert!(is_recipient("transferFrom", "to", "address", 1));
    }

    #[test]
    fn vocabulary_matches_case_insensitively() {
        assert!(is_recipient("someUnknownFn", "Beneficiary", "address", 3));
        assert!(is_recipient("someUnknownFn", "newOwner", "address", 2));
        assert!(!is_recipient("someUnknownFn", "deadline", "address", 0));
    }

    #[test]
    fn non_address_types_never_qualify() {
        assert!(!is_recipient("transfer", "to", "uint256", 0));
        assert!(!is_recipient("transfer", "to", "address[]", 0));
    }

    #[test]
    fn delegate_role() {
        assert!(is_recipient("delegate", "delegatee", "address", 0));
        assert_eq!(recipient_role("delegate", "delegatee"), "Voting Delegate");
    }

    #[test]
    fn default_role_is_recipient() {
        assert_eq!(recipient_role("transfer", "to"), "Recipient");
    }
}
