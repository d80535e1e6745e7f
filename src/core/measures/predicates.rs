//! Purity and the pure/mixed predicates built on it.
use crate::core::error::Result;
use crate::core::measures::REDUCED_SUBSYSTEM;
use crate::core::ops::{self, ROUND_DIGITS};
use crate::core::types::{to_operator, DensityOp, QState};

pub(crate) fn operator_purity(rho: &DensityOp) -> f64 {
    ops::trace(&(&rho.m * &rho.m)).re
}

/// Tr(ρ²): 1 for a pure state, 1/d for the maximally mixed state.
///
/// Kets are promoted to |ψ⟩⟨ψ| first; bras are rejected.
pub fn purity(state: &QState) -> Result<f64> {
    let rho = to_operator(state)?;
    Ok(operator_purity(&rho))
}

/// Purity of the reduced state of subsystem 0.
pub fn purity_of_reduced(state: &QState) -> Result<f64> {
    let rho = to_operator(state)?;
    let reduced = ops::ptrace(&rho, &[REDUCED_SUBSYSTEM])?;
    Ok(operator_purity(&reduced))
}

/// True when the purity rounds to 1 at 8 decimal digits.
pub fn is_pure(state: &QState) -> Result<bool> {
    Ok(ops::round_to(purity(state)?, ROUND_DIGITS) == 1.0)
}

/// True when the reduced state of subsystem 0 is mixed.
///
/// For a pure global state this is an entanglement witness: the state is
/// entangled exactly when its reduction is mixed.
pub fn is_mixed_reduced(state: &QState) -> Result<bool> {
    Ok(ops::round_to(purity_of_reduced(state)?, ROUND_DIGITS) != 1.0)
}
