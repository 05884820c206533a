//! Per-type, append-only storage for resolved values.
//!
//! Responsibilities:
//! - Hold resolved values in one strongly typed sequence per primitive type.
//! - Hand out slot indices on append.
//!
//! Does NOT handle:
//! - Handle validation beyond bounds (registry identity lives in `registry`).
//!
//! Invariants:
//! - Sequences only grow; an index returned by `push` stays valid forever.

use crate::value::{Value, ValueType};

#[derive(Debug, Default)]
pub(crate) struct ValueStore {
    bools: Vec<bool>,
    ints: Vec<i64>,
    floats: Vec<f64>,
    strings: Vec<String>,
}

impl ValueStore {
    /// Append a value to the sequence for its type and return its slot.
    pub(crate) fn push(&mut self, value: Value) -> usize {
        match value {
            Value::Bool(b) => {
                self.bools.push(b);
                self.bools.len() - 1
            }
            Value::Int(i) => {
                self.ints.push(i);
                self.ints.len() - 1
            }
            Value::Float(x) => {
                self.floats.push(x);
                self.floats.len() - 1
            }
            Value::String(s) => {
                self.strings.push(s);
                self.strings.len() - 1
            }
        }
    }

    /// Number of values stored for `value_type`.
    pub(crate) fn len_of(&self, value_type: ValueType) -> usize {
        match value_type {
            ValueType::Bool => self.bools.len(),
            ValueType::Int => self.ints.len(),
            ValueType::Float => self.floats.len(),
            ValueType::String => self.strings.len(),
        }
    }

    /// Total number of values across all types.
    pub(crate) fn len(&self) -> usize {
        ValueType::ALL.iter().map(|t| self.len_of(*t)).sum()
    }

    pub(crate) fn get(&self, value_type: ValueType, slot: usize) -> Option<Value> {
        match value_type {
            ValueType::Bool => self.bool_at(slot).map(Value::Bool),
            ValueType::Int => self.int_at(slot).map(Value::Int),
            ValueType::Float => self.float_at(slot).map(Value::Float),
            ValueType::String => self.str_at(slot).map(|s| Value::String(s.to_string())),
        }
    }

    pub(crate) fn bool_at(&self, slot: usize) -> Option<bool> {
        self.bools.get(slot).copied()
    }

    pub(crate) fn int_at(&self, slot: usize) -> Option<i64> {
        self.ints.get(slot).copied()
    }

    pub(crate) fn float_at(&self, slot: usize) -> Option<f64> {
        self.floats.get(slot).copied()
    }

    pub(crate) fn str_at(&self, slot: usize) -> Option<&str> {
        self.strings.get(slot).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_are_assigned_per_type() {
        let mut store = ValueStore::default();
        assert_eq!(store.push(Value::Int(1)), 0);
        assert_eq!(store.push(Value::from("a")), 0);
        assert_eq!(store.push(Value::Int(2)), 1);
        assert_eq!(store.push(Value::Bool(true)), 0);

        assert_eq!(store.len_of(ValueType::Int), 2);
        assert_eq!(store.len_of(ValueType::Float), 0);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_get_returns_stored_value() {
        let mut store = ValueStore::default();
        let slot = store.push(Value::Float(2.5));

        assert_eq!(store.get(ValueType::Float, slot), Some(Value::Float(2.5)));
        assert_eq!(store.float_at(slot), Some(2.5));
        assert_eq!(store.get(ValueType::Float, slot + 1), None);
        assert_eq!(store.get(ValueType::Bool, slot), None);
    }
}
