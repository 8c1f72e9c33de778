//! Errors returned by the reorganizer.

use ordo_ir::DeclShape;

/// Why a type body could not be reorganized.
///
/// No partial result accompanies an error: the caller keeps its original
/// member list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReorganizeError {
    /// The input contained a node that cannot appear in a type body.
    #[error("node {index} is a {shape}, not a type member")]
    NotAMember { index: usize, shape: DeclShape },
    /// The assembled sequence lost or duplicated members.
    #[error("reorganized body has {actual} members, expected {expected}")]
    CardinalityMismatch { expected: usize, actual: usize },
}
