//! Group Partitioner
//!
//! Splits a population into the privileged subgroup and its complement
//! based on an exact match of the protected attribute value.
use crate::errors::FairlensError;
use std::fmt::Display;

/// Index sets for the privileged subgroup and the complement.
///
/// The two sets are disjoint and together cover every record exactly
/// once. The complement may hold several distinct attribute values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPartition {
    /// Indices of records whose attribute equals the privileged label.
    pub privileged: Vec<usize>,
    /// Indices of every other record.
    pub other: Vec<usize>,
}

impl GroupPartition {
    /// Partition records by exact match on the privileged label.
    ///
    /// An empty privileged match set is legitimate output, only an empty
    /// population is an error.
    pub fn by_label<L: PartialEq>(attribute: &[L], privileged: &L) -> Result<Self, FairlensError> {
        if attribute.is_empty() {
            return Err(FairlensError::EmptyPopulation);
        }
        let mut privileged_idx = Vec::new();
        let mut other_idx = Vec::new();
        for (i, value) in attribute.iter().enumerate() {
            if value == privileged {
                privileged_idx.push(i);
            } else {
                other_idx.push(i);
            }
        }
        Ok(GroupPartition {
            privileged: privileged_idx,
            other: other_idx,
        })
    }

    /// Diagnostic raised when the privileged label matched no records.
    /// Analysis still proceeds, the empty subgroup simply carries
    /// undefined rates.
    pub fn empty_group_diagnostic<L: Display>(&self, privileged: &L) -> Option<FairlensError> {
        if self.privileged.is_empty() {
            Some(FairlensError::EmptyGroup(privileged.to_string()))
        } else {
            None
        }
    }
}
