//! One-shot, handle-based configuration registry.
//!
//! Responsibilities:
//! - Validate option declarations and resolve them against an `EnvSource`.
//! - Publish the resolved values exactly once and hand out one `Handle` per option.
//! - Serve lock-free reads through `get` and the typed accessors.
//!
//! Does NOT handle:
//! - Reading `.env` files (see `dotenv.rs`).
//! - Rendering documentation (see `docs.rs`).
//!
//! Invariants / Assumptions:
//! - `init` runs entirely under one mutex; at most one call ever succeeds.
//! - The value store is built off to the side and published through a
//!   `OnceLock` only on success, so readers never observe a partial store and
//!   a failed `init` leaves the registry `Uninitialized`.
//! - Published values are never mutated or removed.

mod resolve;

#[cfg(test)]
mod tests;

use secrecy::SecretString;
use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};

use crate::error::RegistryError;
use crate::handle::{Handle, HandleFault};
use crate::option::OptionDecl;
use crate::source::{EnvSource, ProcessEnv};
use crate::store::ValueStore;
use crate::value::{Value, ValueType};

use resolve::resolve;

/// Id 0 is reserved for `Handle::default()`.
static NEXT_REGISTRY_ID: AtomicU64 = AtomicU64::new(1);

/// Lifecycle state of a registry. The only transition is
/// `Uninitialized -> Initialized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    Uninitialized,
    Initialized,
}

/// Typed configuration registry backed by an injected key-value source.
pub struct Registry<S = ProcessEnv> {
    id: u64,
    source: S,
    init_lock: Mutex<()>,
    store: OnceLock<ValueStore>,
}

impl Registry<ProcessEnv> {
    /// Create a registry that resolves options from the process environment.
    pub fn new() -> Self {
        Self::with_source(ProcessEnv)
    }
}

impl Default for Registry<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for Registry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("id", &self.id)
            .field("state", &self.state())
            .field("values", &self.len())
            .finish_non_exhaustive()
    }
}

impl<S: EnvSource> Registry<S> {
    /// Resolve `options` and publish the values.
    ///
    /// Returns one handle per declaration, in declaration order.
    ///
    /// # Errors
    ///
    /// - `AlreadyInitialized` if a previous call succeeded (whatever `options` is).
    /// - `NoOptions` if `options` is empty.
    /// - `EmptyOptionName` / `DuplicateOption` for bad names.
    /// - `DefaultNotNilWhenRequired`, `DefaultIsNilWhenNotRequired`,
    ///   `DefaultTypeMismatch` for malformed declarations.
    /// - `RequiredConfigNotSet` when a required key is absent.
    /// - `TypeConversion` when a present value cannot be parsed.
    pub fn init(&self, options: &[OptionDecl]) -> Result<Vec<Handle>, RegistryError> {
        // The guarded data is the OnceLock, which is only written on success,
        // so a poisoned lock carries no torn state.
        let _guard = self
            .init_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if self.store.get().is_some() {
            return Err(RegistryError::AlreadyInitialized);
        }
        if options.is_empty() {
            return Err(RegistryError::NoOptions);
        }

        let mut store = ValueStore::default();
        let mut seen = HashSet::with_capacity(options.len());
        let mut handles = Vec::with_capacity(options.len());

        for (index, decl) in options.iter().enumerate() {
            if decl.name.is_empty() {
                return Err(RegistryError::EmptyOptionName { index });
            }
            if !seen.insert(decl.name.as_str()) {
                return Err(RegistryError::DuplicateOption {
                    name: decl.name.clone(),
                });
            }

            let (value, origin) = resolve(decl, &self.source)?;
            let value_type = value.value_type();
            let slot = store.push(value);

            tracing::trace!(
                registry = self.id,
                option = %decl.name,
                value_type = %value_type,
                origin = origin.as_str(),
                slot,
                "resolved config option"
            );
            handles.push(Handle::new(self.id, value_type, slot));
        }

        if self.store.set(store).is_err() {
            return Err(RegistryError::AlreadyInitialized);
        }

        tracing::debug!(
            registry = self.id,
            options = handles.len(),
            "config registry initialized"
        );
        Ok(handles)
    }
}

impl<S> Registry<S> {
    /// Create a registry that resolves options from `source`.
    pub fn with_source(source: S) -> Self {
        Self {
            id: NEXT_REGISTRY_ID.fetch_add(1, Ordering::Relaxed),
            source,
            init_lock: Mutex::new(()),
            store: OnceLock::new(),
        }
    }

    /// Process-unique id carried by every handle this registry issues.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> RegistryState {
        if self.store.get().is_some() {
            RegistryState::Initialized
        } else {
            RegistryState::Uninitialized
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.state() == RegistryState::Initialized
    }

    /// Number of resolved values (0 before `init`).
    pub fn len(&self) -> usize {
        self.store.get().map_or(0, ValueStore::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the value behind `handle` without naming its type.
    pub fn get(&self, handle: Handle) -> Result<Value, RegistryError> {
        let store = self.checked(handle, None)?;
        store
            .get(handle.value_type, handle.slot)
            .ok_or_else(|| out_of_range(store, handle))
    }

    pub fn get_bool(&self, handle: Handle) -> Result<bool, RegistryError> {
        let store = self.checked(handle, Some(ValueType::Bool))?;
        store
            .bool_at(handle.slot)
            .ok_or_else(|| out_of_range(store, handle))
    }

    pub fn get_int(&self, handle: Handle) -> Result<i64, RegistryError> {
        let store = self.checked(handle, Some(ValueType::Int))?;
        store
            .int_at(handle.slot)
            .ok_or_else(|| out_of_range(store, handle))
    }

    pub fn get_float(&self, handle: Handle) -> Result<f64, RegistryError> {
        let store = self.checked(handle, Some(ValueType::Float))?;
        store
            .float_at(handle.slot)
            .ok_or_else(|| out_of_range(store, handle))
    }

    /// Borrow a string value; it lives as long as the registry.
    pub fn get_string(&self, handle: Handle) -> Result<&str, RegistryError> {
        let store = self.checked(handle, Some(ValueType::String))?;
        store
            .str_at(handle.slot)
            .ok_or_else(|| out_of_range(store, handle))
    }

    /// Read a string value wrapped so it is redacted from `Debug` output.
    pub fn get_secret(&self, handle: Handle) -> Result<SecretString, RegistryError> {
        self.get_string(handle)
            .map(|s| SecretString::new(s.to_string().into()))
    }

    /// Resolve the published store and reject handles that cannot refer to it.
    fn checked(
        &self,
        handle: Handle,
        expected: Option<ValueType>,
    ) -> Result<&ValueStore, RegistryError> {
        let store = self.store.get().ok_or(RegistryError::NotInitialized)?;

        if handle.registry != self.id {
            return Err(RegistryError::InvalidHandle {
                handle,
                reason: HandleFault::ForeignRegistry,
            });
        }
        match expected {
            Some(expected) if expected != handle.value_type => {
                Err(RegistryError::InvalidHandle {
                    handle,
                    reason: HandleFault::TypeMismatch {
                        expected,
                        actual: handle.value_type,
                    },
                })
            }
            _ => Ok(store),
        }
    }
}

fn out_of_range(store: &ValueStore, handle: Handle) -> RegistryError {
    RegistryError::InvalidHandle {
        handle,
        reason: HandleFault::SlotOutOfRange {
            len: store.len_of(handle.value_type),
        },
    }
}
