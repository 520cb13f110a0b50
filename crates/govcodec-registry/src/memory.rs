//! In-memory `ContractRegistry` implementation.
//!
//! Process-lifetime cache, thread-safe via `Arc<RwLock<Inner>>`: reads are
//! safe under concurrent decode calls, and runtime registration (e.g. from
//! an external verified-source lookup) cannot corrupt concurrent readers.
//!
//! Entries partition into *built-in* (seeded at construction, survive
//! `clear_external`) and *external* (registered at runtime, removable for
//! test isolation).

use govcodec_core::{
    schema::normalize_address, ContractCategory, ContractEntry, ContractRegistry, FunctionSchema,
    RegistryError,
};
use std::{
    collections::{hash_map::Entry, HashMap, HashSet},
    sync::{Arc, RwLock},
};
use tracing::{debug, warn};

use crate::abi_json;
use crate::builtin;

struct Inner {
    /// lowercase address → entry
    entries: HashMap<String, ContractEntry>,
    /// addresses seeded at construction; never removed by `clear_external`
    core: HashSet<String>,
}

/// Thread-safe in-memory contract registry.
#[derive(Clone)]
pub struct MemoryRegistry {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryRegistry {
    /// An empty registry with no built-in entries.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                entries: HashMap::new(),
                core: HashSet::new(),
            })),
        }
    }

    /// A registry seeded with the built-in governance contract bundle.
    pub fn with_builtins() -> Self {
        let reg = Self::new();
        {
            let mut inner = reg.inner.write().unwrap();
            for entry in builtin::entries() {
                inner.core.insert(entry.address.clone());
                inner.entries.insert(entry.address.clone(), entry);
            }
        }
        reg
    }

    /// Register an entry discovered at runtime.
    ///
    /// If the address already exists, its function table is merged (new
    /// signatures win) and name/description are upgraded only when the
    /// existing entry had none. Built-in entries stay built-in.
    pub fn register(&self, entry: ContractEntry) {
        let mut inner = self.inner.write().unwrap();
        match inner.entries.entry(entry.address.clone()) {
            Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                for (sig, schema) in entry.functions {
                    existing.functions.insert(sig, schema);
                }
                if existing.display_name.is_empty() {
                    existing.display_name = entry.display_name;
                }
                if existing.description.is_empty() {
                    existing.description = entry.description;
                }
            }
            Entry::Vacant(slot) => {
                debug!(address = %entry.address, name = %entry.display_name, "registering contract");
                slot.insert(entry);
            }
        }
    }

    /// Register a contract with schemas parsed from raw Ethereum ABI JSON.
    ///
    /// A malformed definition is logged and leaves the registry untouched;
    /// the error is surfaced to the registration caller only, never to
    /// decoders.
    pub fn register_schema(
        &self,
        address: &str,
        name: &str,
        description: &str,
        raw_abi_json: &str,
        category: ContractCategory,
    ) -> Result<usize, RegistryError> {
        let schemas = match abi_json::parse_abi_functions(raw_abi_json) {
            Ok(s) => s,
            Err(e) => {
                warn!(address, name, error = %e, "schema registration rejected");
                return Err(e);
            }
        };

        let count = schemas.len();
        let mut entry = ContractEntry::new(address, name, description, category);
        for schema in schemas {
            entry = entry.with_function(schema);
        }
        self.register(entry);
        Ok(count)
    }

    /// Remove all runtime-registered entries, leaving built-ins untouched.
    /// Intended for test isolation.
    pub fn clear_external(&self) {
        let mut inner = self.inner.write().unwrap();
        let core = inner.core.clone();
        inner.entries.retain(|addr, _| core.contains(addr));
    }

    /// Number of registered contracts.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All entries, sorted by address for stable output.
    pub fn all_entries(&self) -> Vec<ContractEntry> {
        let inner = self.inner.read().unwrap();
        let mut entries: Vec<ContractEntry> = inner.entries.values().cloned().collect();
        entries.sort_by(|a, b| a.address.cmp(&b.address));
        entries
    }
}

impl Default for MemoryRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl ContractRegistry for MemoryRegistry {
    fn lookup(&self, address: &str) -> Option<ContractEntry> {
        self.inner
            .read()
            .unwrap()
            .entries
            .get(&normalize_address(address))
            .cloned()
    }

    fn lookup_function(&self, address: &str, signature: &str) -> Option<FunctionSchema> {
        self.inner
            .read()
            .unwrap()
            .entries
            .get(&normalize_address(address))?
            .functions
            .get(signature)
            .cloned()
    }

    fn lookup_function_by_selector(
        &self,
        address: &str,
        selector: &[u8; 4],
    ) -> Option<FunctionSchema> {
        self.inner
            .read()
            .unwrap()
            .entries
            .get(&normalize_address(address))?
            .function_by_selector(selector)
            .cloned()
    }
}
