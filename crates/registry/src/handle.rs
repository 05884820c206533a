//! Opaque handles referencing resolved values.
//!
//! Invariants:
//! - Registry ids start at 1, so `Handle::default()` never resolves.
//! - A handle is only meaningful against the registry whose id it carries.

use std::fmt;

use crate::value::ValueType;

/// Stable coordinate of one resolved value inside a `Registry`.
///
/// Handles are produced by `Registry::init`, one per declaration, and are
/// cheap to copy into whatever struct needs to read configuration later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Handle {
    pub(crate) registry: u64,
    pub(crate) value_type: ValueType,
    pub(crate) slot: usize,
}

impl Handle {
    pub(crate) const fn new(registry: u64, value_type: ValueType, slot: usize) -> Self {
        Self {
            registry,
            value_type,
            slot,
        }
    }

    /// Type of the value this handle points at.
    pub const fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Index within the typed sequence of the owning registry.
    pub const fn slot(&self) -> usize {
        self.slot
    }

    /// Id of the registry that issued this handle (0 for the zero handle).
    pub const fn registry_id(&self) -> u64 {
        self.registry
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}#{}@registry-{}",
            self.value_type, self.slot, self.registry
        )
    }
}

/// Why a handle was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleFault {
    /// Issued by another registry, or never issued at all.
    ForeignRegistry,
    /// Slot beyond the stored values for its type.
    SlotOutOfRange { len: usize },
    /// Typed accessor called with a handle of another type.
    TypeMismatch {
        expected: ValueType,
        actual: ValueType,
    },
}

impl fmt::Display for HandleFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandleFault::ForeignRegistry => f.write_str("not issued by this registry"),
            HandleFault::SlotOutOfRange { len } => {
                write!(f, "slot out of range ({} values stored)", len)
            }
            HandleFault::TypeMismatch { expected, actual } => {
                write!(f, "expected a {} handle, got {}", expected, actual)
            }
        }
    }
}
