//! Von Neumann, linear and Rényi entropies, plus their entanglement
//! variants evaluated on the reduced state of subsystem 0.
use tracing::trace;

use crate::core::error::{QuantInfError, Result};
use crate::core::measures::predicates::operator_purity;
use crate::core::measures::REDUCED_SUBSYSTEM;
use crate::core::ops::{self, EPS};
use crate::core::types::{require_operator, to_operator, DensityOp, QState};

fn check_base(base: f64) -> Result<()> {
    if base.is_finite() && base > 0.0 && base != 1.0 {
        Ok(())
    } else {
        Err(QuantInfError::invalid_parameter("base", format!("log base must be positive and not 1, got {base}")))
    }
}

/// Eigenvalues above [`EPS`]; zero and noise-negative ones are dropped so
/// they never reach a logarithm or a fractional power.
fn support(rho: &DensityOp) -> Vec<f64> {
    let eigs = ops::eigenenergies(&rho.m);
    let kept: Vec<f64> = eigs.iter().copied().filter(|&l| l > EPS).collect();
    if kept.len() != eigs.len() {
        trace!(dropped = eigs.len() - kept.len(), "floored near-zero eigenvalues");
    }
    kept
}

/// −Σ λ log_base λ over the support (0·log 0 = 0).
pub(crate) fn operator_entropy(rho: &DensityOp, base: f64) -> f64 {
    -support(rho).iter().map(|&l| l * l.log(base)).sum::<f64>()
}

fn reduce(state: &QState) -> Result<DensityOp> {
    let rho = to_operator(state)?;
    ops::ptrace(&rho, &[REDUCED_SUBSYSTEM])
}

fn operator_linear_entropy(rho: &DensityOp, normalize: bool) -> Result<f64> {
    let le = 1.0 - operator_purity(rho);
    if !normalize {
        return Ok(le);
    }
    let d = rho.dim();
    if d == 1 {
        return Err(QuantInfError::invalid_parameter(
            "normalize",
            "normalized linear entropy is undefined for a 1-dimensional space",
        ));
    }
    let d = d as f64;
    Ok(le * d / (d - 1.0))
}

/// Von Neumann entropy S(ρ) = −Tr ρ log ρ.
pub fn entropy_vn(state: &QState, base: f64) -> Result<f64> {
    check_base(base)?;
    let rho = to_operator(state)?;
    Ok(operator_entropy(&rho, base))
}

/// 1 − Tr(ρ²).
///
/// With `normalize`, the result is scaled by d/(d−1) so the maximally mixed
/// state maps to 1. A 1-dimensional space has no such scaling and yields
/// `InvalidParameter`.
pub fn linear_entropy(state: &QState, normalize: bool) -> Result<f64> {
    let rho = to_operator(state)?;
    operator_linear_entropy(&rho, normalize)
}

/// Entropy of entanglement: von Neumann entropy of the reduced state.
/// 1 for a Bell pair in base 2.
pub fn entropy_entanglement(state: &QState, base: f64) -> Result<f64> {
    check_base(base)?;
    let reduced = reduce(state)?;
    Ok(operator_entropy(&reduced, base))
}

/// Linear entropy of the reduced state. Note the usual default here is
/// `normalize = true`, unlike [`linear_entropy`].
pub fn entropy_linear_entanglement(state: &QState, normalize: bool) -> Result<f64> {
    let reduced = reduce(state)?;
    operator_linear_entropy(&reduced, normalize)
}

/// Rényi entropy of order `alpha`, in bits:
/// S_α(ρ) = log₂(Σ λᵢ^α) / (1 − α).
///
/// `alpha == 1` is the von Neumann entropy, `alpha == 0` gives log₂ of the
/// rank and `alpha == ∞` the min-entropy −log₂ λ_max. Only operators are
/// accepted. Validated against two-level subsystems, although nothing here
/// depends on the dimension.
pub fn entropy_renyi(state: &QState, alpha: f64) -> Result<f64> {
    let rho = require_operator(state)?;
    if alpha.is_nan() || alpha < 0.0 {
        return Err(QuantInfError::invalid_parameter("alpha", format!("must be non-negative, got {alpha}")));
    }
    if alpha == 1.0 {
        return Ok(operator_entropy(rho, 2.0));
    }
    let eigs = support(rho);
    if alpha.is_infinite() {
        let max = eigs.iter().copied().fold(0.0_f64, f64::max);
        return Ok(-max.log2());
    }
    let sum: f64 = eigs.iter().map(|&l| l.powf(alpha)).sum();
    Ok(sum.log2() / (1.0 - alpha))
}

/// Rényi entropy of the reduced state of subsystem 0.
pub fn entropy_renyi_entanglement(state: &QState, alpha: f64) -> Result<f64> {
    let reduced = reduce(state)?;
    entropy_renyi(&QState::Oper(reduced), alpha)
}
