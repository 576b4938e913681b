use std::fmt;

/// An opaque identifier for a field block.
///
/// Generated from a monotonic counter owned by the form builder. Identifiers
/// are never reused, even after the block they named is removed, and carry no
/// ordering meaning - block order is the builder's list order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldId(u64);

impl FieldId {
    /// Create a field id from a raw counter value.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw counter value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field{}", self.0)
    }
}

impl From<u64> for FieldId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}
