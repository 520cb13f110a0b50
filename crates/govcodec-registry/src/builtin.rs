//! Built-in contract bundle.
//!
//! Seeds the registry with the governance system's own contracts and the
//! external tokens proposals routinely touch, so decoding works out of the
//! box without any runtime lookups.

use govcodec_core::{ContractCategory, ContractEntry, FunctionSchema, ParameterSchema};
use tiny_keccak::{Hasher, Keccak};

/// Build a function schema from a flat canonical signature plus parameter
/// names. Built-in signatures never use tuple types, so a flat comma split
/// is exact here.
fn func(signature: &str, param_names: &[&str], description: &str) -> FunctionSchema {
    let open = signature.find('(').expect("builtin signature has parens");
    let close = signature.rfind(')').expect("builtin signature has parens");
    let name = &signature[..open];
    let inner = &signature[open + 1..close];

    let types: Vec<&str> = if inner.is_empty() {
        Vec::new()
    } else {
        inner.split(',').collect()
    };
    debug_assert_eq!(types.len(), param_names.len(), "{signature}");

    let params = param_names
        .iter()
        .zip(types.iter())
        .map(|(n, t)| ParameterSchema::new(*n, *t))
        .collect();

    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(signature.as_bytes());
    hasher.finalize(&mut output);

    FunctionSchema {
        name: name.to_string(),
        signature: signature.to_string(),
        params,
        selector: [output[0], output[1], output[2], output[3]],
        description: Some(description.to_string()),
    }
}

/// The built-in contract entries.
pub fn entries() -> Vec<ContractEntry> {
    vec![
        ContractEntry::new(
            "0xb1a32FC9F9D8b2cf86C068Cae13108809547ef71",
            "Treasury (Executor)",
            "Holds and disburses the DAO treasury; executes queued proposals",
            ContractCategory::KnownInternal,
        ),
        ContractEntry::new(
            "0xd97Bcd9f47cEe35c0a9ec1dc40C1269afc9E8E1D",
            "Payer",
            "Pays USDC from the treasury, registering debt when the balance is short",
            ContractCategory::KnownInternal,
        )
        .with_function(func(
            "sendOrRegisterDebt(address,uint256)",
            &["account", "amount"],
            "Pay USDC to an account, or register the shortfall as debt",
        ))
        .with_function(func(
            "withdrawPaymentToken()",
            &[],
            "Return the remaining payment-token balance to the treasury",
        )),
        ContractEntry::new(
            "0x4f2aCdc74f6941390d9b1804faBc3E780388cfe5",
            "Token Buyer",
            "Swaps treasury ETH for the payment token used by the Payer",
            ContractCategory::KnownInternal,
        )
        .with_function(func(
            "withdrawETH()",
            &[],
            "Return the unspent ETH balance to the treasury",
        )),
        ContractEntry::new(
            "0x0fd206FC7A7dBcD5661157eDCb1FFDD0D02A61ff",
            "Stream Factory",
            "Deploys time-based payment stream contracts at predicted addresses",
            ContractCategory::KnownInternal,
        )
        .with_function(func(
            "createStream(address,uint256,address,uint256,uint256,uint8,address)",
            &[
                "recipient",
                "tokenAmount",
                "tokenAddress",
                "startTime",
                "stopTime",
                "nonce",
                "predictedStreamAddress",
            ],
            "Create a payment stream; funds arrive via a separate transfer",
        )),
        ContractEntry::new(
            "0x9C8fF314C9Bc7F6e59A9d9225Fb22946427eDC03",
            "Governance Token",
            "The DAO's voting token",
            ContractCategory::KnownInternal,
        )
        .with_function(func(
            "delegate(address)",
            &["delegatee"],
            "Delegate voting power",
        ))
        .with_function(func(
            "transferFrom(address,address,uint256)",
            &["from", "to", "tokenId"],
            "Transfer a token",
        ))
        .with_function(func(
            "setMinter(address)",
            &["minter"],
            "Change the minter address",
        )),
        ContractEntry::new(
            "0x6f3E6272A167e8AcCb32072d08E0957F9c79223d",
            "DAO Proxy",
            "Governor proxy; admin setters gate voting parameters",
            ContractCategory::KnownInternal,
        )
        .with_function(func(
            "_setPendingAdmin(address)",
            &["newPendingAdmin"],
            "Stage an admin transfer",
        ))
        .with_function(func(
            "_setVotingDelay(uint256)",
            &["newVotingDelay"],
            "Change the voting delay",
        ))
        .with_function(func(
            "_setProposalThresholdBPS(uint256)",
            &["newProposalThresholdBPS"],
            "Change the proposal threshold",
        )),
        ContractEntry::new(
            "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
            "USDC",
            "USD Coin — 6-decimal stablecoin",
            ContractCategory::KnownExternal,
        )
        .with_function(func(
            "transfer(address,uint256)",
            &["to", "amount"],
            "Transfer tokens",
        ))
        .with_function(func(
            "approve(address,uint256)",
            &["spender", "amount"],
            "Approve a spender",
        ))
        .with_function(func(
            "transferFrom(address,address,uint256)",
            &["from", "to", "amount"],
            "Transfer tokens on behalf of a holder",
        )),
        ContractEntry::new(
            "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
            "WETH",
            "Wrapped Ether",
            ContractCategory::KnownExternal,
        )
        .with_function(func(
            "transfer(address,uint256)",
            &["to", "amount"],
            "Transfer tokens",
        ))
        .with_function(func("deposit()", &[], "Wrap ETH"))
        .with_function(func(
            "withdraw(uint256)",
            &["amount"],
            "Unwrap ETH",
        )),
    ]
}
