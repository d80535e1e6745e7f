//! Error taxonomy for the quantum-information measures.
//!
//! Every measure either succeeds or fails before producing output; numerical
//! noise (tiny negative eigenvalues, near-zero terms) is absorbed by rounding
//! and never surfaces here.

use crate::core::types::StateKind;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuantInfError {
    /// The state is not of a kind the function accepts (e.g. a bra where a
    /// ket or operator is required).
    #[error("invalid state kind: expected {expected}, got {found}")]
    InvalidStateKind { expected: &'static str, found: StateKind },

    /// Schmidt decomposition needs at least two subsystem factors.
    #[error("state is not bipartite: dims describe {subsystems} subsystem(s)")]
    NotBipartite { subsystems: usize },

    /// A numeric parameter fell outside its domain.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Data shape and subsystem dims (or two operands) disagree.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// A subsystem index is out of range or repeated.
    #[error("invalid subsystem index {index} for {subsystems} subsystem(s)")]
    InvalidSubsystem { index: usize, subsystems: usize },
}

pub type Result<T> = std::result::Result<T, QuantInfError>;

impl QuantInfError {
    pub fn invalid_kind(expected: &'static str, found: StateKind) -> Self {
        QuantInfError::InvalidStateKind { expected, found }
    }

    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        QuantInfError::InvalidParameter { name, reason: reason.into() }
    }

    pub fn dimension_mismatch(message: impl Into<String>) -> Self {
        QuantInfError::DimensionMismatch(message.into())
    }
}
