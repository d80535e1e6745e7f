//! Relative entropy between two density operators.
use nalgebra::SymmetricEigen;
use tracing::trace;

use crate::core::error::{QuantInfError, Result};
use crate::core::measures::entropy::operator_entropy;
use crate::core::ops::{self, EPS, ROUND_DIGITS};
use crate::core::types::{require_operator, DensityOp, QState};

fn same_shape(rho: &DensityOp, sigma: &DensityOp) -> Result<()> {
    if rho.dim() != sigma.dim() {
        return Err(QuantInfError::dimension_mismatch(format!(
            "operators of size {} and {} cannot be compared",
            rho.dim(),
            sigma.dim()
        )));
    }
    Ok(())
}

/// Kullback-Leibler distance of the two spectra, in bits:
/// |−S(ρ) − Σᵢ pᵢ log₂ qᵢ|.
///
/// `pᵢ` and `qᵢ` are the eigenvalues of ρ and σ, each sorted ascending and
/// paired by position; σ's are rounded to 8 digits and terms with `qᵢ == 0`
/// are skipped. This equals the quantum relative entropy only when ρ and σ
/// commute and the ascending order matches their common eigenbasis, and
/// skipping `qᵢ == 0` is only right when `pᵢ == 0` too. See
/// [`relative_entropy`] for the basis-aware form.
pub fn kl_distance(rho: &QState, sigma: &QState) -> Result<f64> {
    let rho = require_operator(rho)?;
    let sigma = require_operator(sigma)?;
    same_shape(rho, sigma)?;

    let r_eigs = ops::eigenenergies(&rho.m);
    let s_eigs: Vec<f64> = ops::eigenenergies(&sigma.m)
        .into_iter()
        .map(|q| ops::round_to(q, ROUND_DIGITS))
        .collect();

    let mut kl = -operator_entropy(rho, 2.0);
    for (&p, &q) in r_eigs.iter().zip(&s_eigs) {
        if q == 0.0 {
            trace!(p, "skipping term with zero sigma eigenvalue");
            continue;
        }
        kl -= p * q.log2();
    }
    Ok(kl.abs())
}

/// Quantum relative entropy S(ρ‖σ) = Tr ρ(log₂ρ − log₂σ).
///
/// Evaluated in σ's eigenbasis, so it holds for non-commuting pairs. Returns
/// `f64::INFINITY` when ρ has weight on the kernel of σ.
pub fn relative_entropy(rho: &QState, sigma: &QState) -> Result<f64> {
    let rho = require_operator(rho)?;
    let sigma = require_operator(sigma)?;
    same_shape(rho, sigma)?;

    let eig = SymmetricEigen::new(sigma.m.clone());
    let mut cross = 0.0;
    for (j, &mu) in eig.eigenvalues.iter().enumerate() {
        let v = eig.eigenvectors.column(j);
        let weight = (v.adjoint() * &rho.m * v)[(0, 0)].re;
        if mu <= EPS {
            if weight > EPS {
                trace!(mu, weight, "support of rho not contained in support of sigma");
                return Ok(f64::INFINITY);
            }
            continue;
        }
        cross += weight * mu.log2();
    }
    Ok((-operator_entropy(rho, 2.0) - cross).max(0.0))
}
