//! Batch entry points.
//!
//! Proposal data sources supply four parallel column arrays; decoding of
//! independent descriptors is an embarrassingly parallel map (Rayon), and
//! correlation runs as a strict second phase over the complete batch.

use govcodec_core::{CallDescriptor, ContractRegistry, DecodedAction};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::action::ActionDecoder;
use crate::correlate::correlate;
use crate::format::AmountConventions;

/// Assemble descriptors from the four column arrays of a proposal.
///
/// The arrays are supposed to be equal length; shorter inputs truncate the
/// batch to the minimum length (defensive, not an error).
pub fn descriptors_from_columns(
    targets: &[String],
    values: &[String],
    signatures: &[String],
    calldatas: &[String],
) -> Vec<CallDescriptor> {
    let len = targets
        .len()
        .min(values.len())
        .min(signatures.len())
        .min(calldatas.len());
    if [targets.len(), values.len(), signatures.len(), calldatas.len()]
        .iter()
        .any(|&l| l != len)
    {
        warn!(
            targets = targets.len(),
            values = values.len(),
            signatures = signatures.len(),
            calldatas = calldatas.len(),
            "column lengths differ, truncating batch to {len}"
        );
    }

    (0..len)
        .map(|i| {
            CallDescriptor::new(
                targets[i].clone(),
                values[i].clone(),
                signatures[i].clone(),
                calldatas[i].clone(),
            )
        })
        .collect()
}

/// Decode a full ordered batch: parallel per-action decode, then the
/// correlation pass over the complete result.
pub fn decode_actions(
    descriptors: &[CallDescriptor],
    registry: &dyn ContractRegistry,
    conventions: &AmountConventions,
) -> Vec<DecodedAction> {
    info!(actions = descriptors.len(), "decoding proposal batch");
    let decoder = ActionDecoder::with_conventions(registry, conventions.clone());
    let decoded: Vec<DecodedAction> = descriptors
        .par_iter()
        .map(|descriptor| decoder.decode(descriptor))
        .collect();
    correlate(decoded)
}

/// All addresses flagged as recipients across the batch, deduplicated,
/// in batch order. Fed to external identity resolution.
pub fn collect_recipients(actions: &[DecodedAction]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for action in actions {
        for addr in action.recipient_addresses() {
            let key = addr.to_ascii_lowercase();
            if seen.insert(key) {
                out.push(addr.to_string());
            }
        }
    }
    out
}

/// Short textual summary of the whole batch: the first two action
/// summaries, then a count of the rest.
pub fn batch_summary(actions: &[DecodedAction]) -> String {
    match actions {
        [] => "No actions".to_string(),
        [a] => a.summary.clone(),
        [a, b] => format!("{}; {}", a.summary, b.summary),
        [a, b, rest @ ..] => format!(
            "{}; {} …and {} more actions",
            a.summary,
            b.summary,
            rest.len()
        ),
    }
}
