//! Schmidt decomposition of bipartite pure states.
use nalgebra::{DMatrix, DVector};
use num_complex::Complex64 as C64;

use crate::core::error::{QuantInfError, Result};
use crate::core::types::{require_ket, Ket, QState};

/// |ψ⟩ = Σᵢ sᵢ |uᵢ⟩⊗|vᵢ⟩
#[derive(Clone, Debug)]
pub struct SchmidtDecomposition {
    /// Singular values in the order the SVD returns them (descending).
    pub coefficients: Vec<f64>,
    /// Kets of the first subsystem.
    pub left: Vec<Ket>,
    /// Kets of the remaining subsystem(s).
    pub right: Vec<Ket>,
}

impl SchmidtDecomposition {
    /// Number of coefficients above `tol`.
    pub fn rank(&self, tol: f64) -> usize {
        self.coefficients.iter().filter(|&&s| s > tol).count()
    }

    /// Rebuild Σᵢ sᵢ |uᵢ⟩⊗|vᵢ⟩.
    pub fn reconstruct(&self) -> Result<Ket> {
        let (Some(l0), Some(r0)) = (self.left.first(), self.right.first()) else {
            return Err(QuantInfError::dimension_mismatch("empty Schmidt decomposition"));
        };
        let (d1, d2) = (l0.len(), r0.len());
        let mut data = DVector::from_element(d1 * d2, C64::new(0.0, 0.0));
        for ((s, u), v) in self.coefficients.iter().zip(&self.left).zip(&self.right) {
            for a in 0..d1 {
                for b in 0..d2 {
                    data[a * d2 + b] += C64::from(*s) * u.data[a] * v.data[b];
                }
            }
        }
        let dims = l0.dims.iter().chain(&r0.dims).copied().collect();
        Ket::new(data, dims)
    }
}

/// Schmidt coefficients and vectors of a bipartite ket.
///
/// The ket is reshaped into a d₁×d₂ matrix (d₁ = first factor, d₂ = the
/// product of the rest) and decomposed as U·Σ·Vᴴ. Left vectors are the
/// columns of U, right vectors the rows of Vᴴ, so the reconstruction
/// reproduces the input exactly; each term still carries the SVD's phase
/// freedom uᵢ → e^{iθ}uᵢ, vᵢ → e^{-iθ}vᵢ.
pub fn schmidt_decomposition(state: &QState) -> Result<SchmidtDecomposition> {
    let ket = require_ket(state)?;
    if ket.dims.len() < 2 {
        return Err(QuantInfError::NotBipartite { subsystems: ket.dims.len() });
    }
    let d1 = ket.dims[0];
    let d2 = ket.len() / d1;
    let right_dims = ket.dims[1..].to_vec();

    let m = DMatrix::from_row_slice(d1, d2, ket.data.as_slice());
    let svd = m.svd(true, true);
    let Some(u) = svd.u else { unreachable!() };
    let Some(v_t) = svd.v_t else { unreachable!() };

    let coefficients: Vec<f64> = svd.singular_values.iter().copied().collect();
    let left = (0..coefficients.len())
        .map(|i| Ket::from_column(u.column(i).into_owned()))
        .collect();
    let right = (0..coefficients.len())
        .map(|i| Ket { data: v_t.row(i).transpose(), dims: right_dims.clone() })
        .collect();

    Ok(SchmidtDecomposition { coefficients, left, right })
}
