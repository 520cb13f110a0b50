//! Batch correlation — second-pass detection of cross-action relationships.
//!
//! Today one relationship is detected: a stream-creation action declares a
//! predicted stream address, and a later (or earlier) payment action funds
//! that address. The funding action is rewritten to say so.
//!
//! Correlation is a pure transform over the ordered batch: it returns a new
//! batch and never needs a third pass. Chains of more than one funding
//! relationship per stream are not resolved — a known limitation.

use govcodec_core::{ActionCategory, DecodedAction, DecodedParameter};
use std::collections::HashMap;
use tracing::debug;

/// Detect cross-action relationships and rewrite affected actions.
///
/// Only `category`, `summary`, and the matching parameter's
/// `recipient_role` are ever rewritten.
pub fn correlate(actions: Vec<DecodedAction>) -> Vec<DecodedAction> {
    // Scan pass: predicted stream address → creating action index
    let mut predicted: HashMap<String, usize> = HashMap::new();
    for (i, action) in actions.iter().enumerate() {
        if !action.function_name.starts_with("createStream") {
            continue;
        }
        if let Some(addr) = predicted_stream_address(action) {
            predicted.entry(addr.to_ascii_lowercase()).or_insert(i);
        }
    }
    if predicted.is_empty() {
        return actions;
    }

    // Rewrite pass
    actions
        .into_iter()
        .enumerate()
        .map(|(index, action)| rewrite_if_funding(index, action, &predicted))
        .collect()
}

/// The stream contract address a creation action declares: a parameter
/// whose name mentions "stream", else the last address parameter.
fn predicted_stream_address(action: &DecodedAction) -> Option<&str> {
    let named = action
        .parameters
        .iter()
        .find(|p| p.name.to_ascii_lowercase().contains("stream"))
        .and_then(|p| p.raw_value.as_address());
    named.or_else(|| {
        action
            .parameters
            .iter()
            .rev()
            .find_map(|p| p.raw_value.as_address())
    })
}

/// A payment-shaped action: a plain token transfer categorized as payment,
/// or the payer's debt-registration call.
fn is_payment_shaped(action: &DecodedAction) -> bool {
    action.category == ActionCategory::Payment || action.function_name == "sendOrRegisterDebt"
}

fn rewrite_if_funding(
    index: usize,
    mut action: DecodedAction,
    predicted: &HashMap<String, usize>,
) -> DecodedAction {
    if !is_payment_shaped(&action) {
        return action;
    }

    let matched = action.parameters.iter().enumerate().find_map(|(pi, p)| {
        if !p.is_recipient {
            return None;
        }
        let addr = p.raw_value.as_address()?.to_ascii_lowercase();
        let &creation = predicted.get(&addr)?;
        (creation != index).then_some((pi, creation))
    });

    let Some((param_index, creation_index)) = matched else {
        return action;
    };

    let n = creation_index + 1;
    debug!(action = index, creation = creation_index, "funding action matches stream");

    action.category = ActionCategory::Stream;
    action.summary = match amount_display(&action.parameters) {
        Some(amount) => format!("Fund stream #{n} with {amount}"),
        None => format!("Fund stream #{n}"),
    };
    action.parameters[param_index].recipient_role =
        Some(format!("Stream Contract (funding action #{n})"));
    action
}

fn amount_display(parameters: &[DecodedParameter]) -> Option<String> {
    parameters
        .iter()
        .find(|p| p.name == "amount" || p.name == "tokenAmount")
        .map(|p| p.display_value.clone())
}
