//! Partial-transpose entanglement witnesses.
//!
//! The default masks, [`PERES_HORODECKI_MASK`] and [`NEGATIVITY_MASK`],
//! transpose different factors.
//!
//! [`PERES_HORODECKI_MASK`]: super::PERES_HORODECKI_MASK
//! [`NEGATIVITY_MASK`]: super::NEGATIVITY_MASK
use tracing::trace;

use crate::core::error::Result;
use crate::core::ops::{self, EPS};
use crate::core::types::{require_operator, QState};

/// Peres-Horodecki (PPT) test: `true` when the partial transpose has a
/// negative eigenvalue, i.e. the state is entangled.
///
/// The criterion is necessary and sufficient only for 2×2 and 2×3 systems.
/// In larger systems `true` still proves entanglement, but `false` is
/// inconclusive (bound-entangled states have a positive partial transpose).
pub fn peres_horodecki(rho: &QState, mask: &[u8]) -> Result<bool> {
    let rho = require_operator(rho)?;
    let pt = ops::partial_transpose(rho, mask)?;
    let eigs = ops::eigenenergies(&pt.m);
    let min = eigs.first().copied().unwrap_or(0.0);
    trace!(min_eigenvalue = min, "peres-horodecki");
    // zero eigenvalues of separable states come back as ±1e-17
    Ok(min < -EPS)
}

/// (‖ρ^Γ‖₁ − 1) / 2, where ρ^Γ is the partial transpose over `mask`.
///
/// Zero for PPT states; above [`EPS`] exactly when [`peres_horodecki`]
/// flags the state under the same mask.
///
/// [`EPS`]: crate::core::ops::EPS
pub fn negativity(rho: &QState, mask: &[u8]) -> Result<f64> {
    let rho = require_operator(rho)?;
    let pt = ops::partial_transpose(rho, mask)?;
    Ok((ops::trace_norm(&pt.m) - 1.0) / 2.0)
}

/// log₂ ‖ρ^Γ‖₁
pub fn log_negativity(rho: &QState, mask: &[u8]) -> Result<f64> {
    let rho = require_operator(rho)?;
    let pt = ops::partial_transpose(rho, mask)?;
    Ok(ops::trace_norm(&pt.m).log2())
}
