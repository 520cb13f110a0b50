//! `govcodec decode`, `summary`, and `contracts` subcommands.

use anyhow::{bail, Context, Result};
use govcodec_core::CallDescriptor;
use govcodec_interpret::{
    batch_summary, collect_recipients, decode_actions, descriptors_from_columns,
    AmountConventions,
};
use govcodec_registry::MemoryRegistry;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// A proposal file: either column arrays or a list of descriptors.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProposalFile {
    Columns {
        targets: Vec<String>,
        values: Vec<String>,
        signatures: Vec<String>,
        calldatas: Vec<String>,
    },
    Descriptors(Vec<CallDescriptor>),
}

fn load_descriptors(path: &Path) -> Result<Vec<CallDescriptor>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let file: ProposalFile = serde_json::from_str(&content)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(match file {
        ProposalFile::Columns {
            targets,
            values,
            signatures,
            calldatas,
        } => descriptors_from_columns(&targets, &values, &signatures, &calldatas),
        ProposalFile::Descriptors(d) => d,
    })
}

pub fn run_decode(
    file: Option<PathBuf>,
    target: Option<String>,
    value: String,
    signature: String,
    calldata: String,
    json: bool,
) -> Result<()> {
    let descriptors = match (file, target) {
        (Some(path), None) => load_descriptors(&path)?,
        (None, Some(target)) => vec![CallDescriptor::new(target, value, signature, calldata)],
        (Some(_), Some(_)) => bail!("pass either --file or --target, not both"),
        (None, None) => bail!("pass --file <proposal.json> or --target <address>"),
    };

    let registry = MemoryRegistry::with_builtins();
    let actions = decode_actions(&descriptors, &registry, &AmountConventions::default());

    if json {
        println!("{}", serde_json::to_string_pretty(&actions)?);
        return Ok(());
    }

    for (i, action) in actions.iter().enumerate() {
        println!("Action #{}: {}", i + 1, action.summary);
        println!("  target:   {} ({})", action.target, action.contract_name);
        if action.value != "0" {
            println!("  value:    {}", action.value_formatted);
        }
        if !action.function_name.is_empty() {
            println!("  function: {}", action.function_name);
        }
        for p in &action.parameters {
            let role = p
                .recipient_role
                .as_deref()
                .map(|r| format!("  [{r}]"))
                .unwrap_or_default();
            println!("    {} ({}): {}{role}", p.name, p.declared_type, p.display_value);
        }
    }
    Ok(())
}

pub fn run_summary(file: &Path) -> Result<()> {
    let descriptors = load_descriptors(file)?;
    let registry = MemoryRegistry::with_builtins();
    let actions = decode_actions(&descriptors, &registry, &AmountConventions::default());

    println!("{}", batch_summary(&actions));
    let recipients = collect_recipients(&actions);
    if !recipients.is_empty() {
        println!("Recipients:");
        for addr in recipients {
            println!("  {addr}");
        }
    }
    Ok(())
}

pub fn run_contracts() -> Result<()> {
    let registry = MemoryRegistry::with_builtins();
    for entry in registry.all_entries() {
        println!("{}  {}", entry.address, entry.display_name);
        for schema in entry.functions.values() {
            println!("    {}  {}", schema.selector_hex(), schema.signature);
        }
    }
    Ok(())
}
