//! Kronecker products, partial trace / transpose and spectral helpers.
//!
//! Composite indices are row-major over `dims`: subsystem 0 is the most
//! significant digit, so for dims `[d0, d1]` the basis state |a⟩⊗|b⟩ sits at
//! `a * d1 + b`.
use nalgebra::{DMatrix, SymmetricEigen};
use num_complex::Complex64 as C64;
use tracing::debug;

use crate::core::error::{QuantInfError, Result};
use crate::core::types::{DensityOp, Ket};

/// Eigenvalues at or below this are treated as exact zeros inside logarithms.
pub const EPS: f64 = 1e-12;

/// Decimal digits used when comparing purities to 1 and flooring spectra.
pub const ROUND_DIGITS: i32 = 8;

#[inline]
fn c(r: f64, i: f64) -> C64 {
    C64::new(r, i)
}

/// Kronecker product A ⊗ B
pub fn kron(a: &DMatrix<C64>, b: &DMatrix<C64>) -> DMatrix<C64> {
    let (ar, ac) = (a.nrows(), a.ncols());
    let (br, bc) = (b.nrows(), b.ncols());
    let mut out = DMatrix::<C64>::from_element(ar * br, ac * bc, c(0.0, 0.0));
    for i in 0..ar {
        for j in 0..ac {
            let aij = a[(i, j)];
            for k in 0..br {
                for l in 0..bc {
                    out[(i * br + k, j * bc + l)] = aij * b[(k, l)];
                }
            }
        }
    }
    out
}

/// Product ket |a⟩⊗|b⟩⊗…; dims are concatenated in order.
pub fn tensor_kets(kets: &[Ket]) -> Result<Ket> {
    let (first, rest) = kets
        .split_first()
        .ok_or_else(|| QuantInfError::invalid_parameter("kets", "need at least one factor"))?;
    let mut data = DMatrix::from_column_slice(first.len(), 1, first.data.as_slice());
    let mut dims = first.dims.clone();
    for k in rest {
        let col = DMatrix::from_column_slice(k.len(), 1, k.data.as_slice());
        data = kron(&data, &col);
        dims.extend_from_slice(&k.dims);
    }
    Ket::new(data.column(0).into_owned(), dims)
}

/// |ψ⟩⟨ψ|
pub fn ket2dm(ket: &Ket) -> DensityOp {
    DensityOp { m: &ket.data * ket.data.adjoint(), dims: ket.dims.clone() }
}

pub fn trace(m: &DMatrix<C64>) -> C64 {
    m.diagonal().iter().copied().sum()
}

/// Round to `digits` decimal places.
pub fn round_to(x: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (x * scale).round() / scale
}

/// Eigenvalues of a Hermitian matrix, ascending.
pub fn eigenenergies(m: &DMatrix<C64>) -> Vec<f64> {
    let eig = SymmetricEigen::new(m.clone());
    let mut vals: Vec<f64> = eig.eigenvalues.iter().copied().collect();
    vals.sort_by(f64::total_cmp);
    vals
}

/// Trace norm ‖A‖₁ = Σ singular values.
pub fn trace_norm(m: &DMatrix<C64>) -> f64 {
    m.singular_values().iter().sum()
}

fn unravel(mut idx: usize, dims: &[usize], digits: &mut [usize]) {
    for (slot, &d) in digits.iter_mut().zip(dims).rev() {
        *slot = idx % d;
        idx /= d;
    }
}

fn ravel(digits: &[usize], dims: &[usize]) -> usize {
    digits.iter().zip(dims).fold(0, |acc, (&x, &d)| acc * d + x)
}

/// Reduced operator on the `keep` subsystems; all other factors are traced out.
pub fn ptrace(rho: &DensityOp, keep: &[usize]) -> Result<DensityOp> {
    let n = rho.dims.len();
    let mut sel = keep.to_vec();
    sel.sort_unstable();
    if sel.is_empty() {
        return Err(QuantInfError::invalid_parameter("keep", "must select at least one subsystem"));
    }
    for (pos, &k) in sel.iter().enumerate() {
        if k >= n || (pos > 0 && sel[pos - 1] == k) {
            return Err(QuantInfError::InvalidSubsystem { index: k, subsystems: n });
        }
    }
    let traced: Vec<usize> = (0..n).filter(|k| !sel.contains(k)).collect();
    let kept_dims: Vec<usize> = sel.iter().map(|&k| rho.dims[k]).collect();
    let traced_dims: Vec<usize> = traced.iter().map(|&k| rho.dims[k]).collect();
    let dk: usize = kept_dims.iter().product();
    let dt: usize = traced_dims.iter().product();
    debug!(dims = ?rho.dims, keep = ?sel, reduced = dk, "partial trace");

    // full[a * dt + t] = composite index of kept digit-string a and traced digit-string t
    let mut full = vec![0usize; dk * dt];
    let mut digits = vec![0usize; n];
    let mut kd = vec![0usize; sel.len()];
    let mut td = vec![0usize; traced.len()];
    for a in 0..dk {
        unravel(a, &kept_dims, &mut kd);
        for (&pos, &x) in sel.iter().zip(&kd) {
            digits[pos] = x;
        }
        for t in 0..dt {
            unravel(t, &traced_dims, &mut td);
            for (&pos, &x) in traced.iter().zip(&td) {
                digits[pos] = x;
            }
            full[a * dt + t] = ravel(&digits, &rho.dims);
        }
    }

    let mut out = DMatrix::<C64>::zeros(dk, dk);
    for a in 0..dk {
        for b in 0..dk {
            out[(a, b)] = (0..dt).map(|t| rho.m[(full[a * dt + t], full[b * dt + t])]).sum::<C64>();
        }
    }
    DensityOp::new(out, kept_dims)
}

/// Transpose the index pair of every subsystem whose mask entry is 1.
pub fn partial_transpose(rho: &DensityOp, mask: &[u8]) -> Result<DensityOp> {
    let n = rho.dims.len();
    if mask.len() != n {
        return Err(QuantInfError::dimension_mismatch(format!(
            "mask has {} entries for {} subsystems",
            mask.len(),
            n
        )));
    }
    if let Some(bad) = mask.iter().find(|&&f| f > 1) {
        return Err(QuantInfError::invalid_parameter("mask", format!("entries must be 0 or 1, got {bad}")));
    }
    debug!(dims = ?rho.dims, ?mask, "partial transpose");

    let dim = rho.dim();
    let mut out = DMatrix::<C64>::zeros(dim, dim);
    let mut di = vec![0usize; n];
    let mut dj = vec![0usize; n];
    for i in 0..dim {
        for j in 0..dim {
            unravel(i, &rho.dims, &mut di);
            unravel(j, &rho.dims, &mut dj);
            for (k, &flag) in mask.iter().enumerate() {
                if flag == 1 {
                    std::mem::swap(&mut di[k], &mut dj[k]);
                }
            }
            out[(ravel(&di, &rho.dims), ravel(&dj, &rho.dims))] = rho.m[(i, j)];
        }
    }
    DensityOp::new(out, rho.dims.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DVector;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn ket(v: &[f64], dims: Vec<usize>) -> Ket {
        Ket::new(DVector::from_iterator(v.len(), v.iter().map(|&x| c(x, 0.0))), dims).unwrap()
    }

    #[test]
    fn kron_shapes_and_entries() {
        let a = DMatrix::from_row_slice(2, 2, &[c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0), c(4.0, 0.0)]);
        let b = DMatrix::<C64>::identity(2, 2);
        let k = kron(&a, &b);
        assert_eq!(k.nrows(), 4);
        assert_eq!(k[(0, 2)], c(2.0, 0.0));
        assert_eq!(k[(3, 1)], c(3.0, 0.0));
        assert_eq!(k[(3, 0)], c(0.0, 0.0));
    }

    #[test]
    fn tensor_kets_concatenates_dims() {
        let zero = ket(&[1.0, 0.0], vec![2]);
        let two = ket(&[0.0, 0.0, 1.0], vec![3]);
        let prod = tensor_kets(&[zero, two]).unwrap();
        assert_eq!(prod.dims, vec![2, 3]);
        assert_eq!(prod.data[2], c(1.0, 0.0));
        assert!(tensor_kets(&[]).is_err());
    }

    #[test]
    fn ptrace_of_product_state_recovers_factor() {
        // |0⟩ ⊗ |+⟩
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let psi = ket(&[s, s, 0.0, 0.0], vec![2, 2]);
        let rho = ket2dm(&psi);

        let left = ptrace(&rho, &[0]).unwrap();
        assert_eq!(left.dims, vec![2]);
        assert!(approx_eq(left.m[(0, 0)].re, 1.0, 1e-12));
        assert!(approx_eq(left.m[(1, 1)].re, 0.0, 1e-12));

        let right = ptrace(&rho, &[1]).unwrap();
        for z in right.m.iter() {
            assert!(approx_eq(z.re, 0.5, 1e-12));
        }
    }

    #[test]
    fn ptrace_keeping_everything_is_identity_map() {
        let psi = ket(&[0.6, 0.0, 0.0, 0.8], vec![2, 2]);
        let rho = ket2dm(&psi);
        let same = ptrace(&rho, &[1, 0]).unwrap();
        assert_eq!(same.m, rho.m);
    }

    #[test]
    fn ptrace_rejects_bad_indices() {
        let rho = ket2dm(&ket(&[1.0, 0.0, 0.0, 0.0], vec![2, 2]));
        assert_eq!(
            ptrace(&rho, &[2]).unwrap_err(),
            QuantInfError::InvalidSubsystem { index: 2, subsystems: 2 }
        );
        assert!(ptrace(&rho, &[0, 0]).is_err());
        assert!(ptrace(&rho, &[]).is_err());
    }

    #[test]
    fn ptrace_three_parties() {
        // |0⟩|1⟩|0⟩ with dims [2, 2, 2], keep the middle qubit
        let mut v = vec![0.0; 8];
        v[0b010] = 1.0;
        let rho = ket2dm(&ket(&v, vec![2, 2, 2]));
        let mid = ptrace(&rho, &[1]).unwrap();
        assert!(approx_eq(mid.m[(1, 1)].re, 1.0, 1e-12));
        let outer = ptrace(&rho, &[0, 2]).unwrap();
        assert_eq!(outer.dims, vec![2, 2]);
        assert!(approx_eq(outer.m[(0, 0)].re, 1.0, 1e-12));
    }

    #[test]
    fn partial_transpose_of_bell_has_negative_eigenvalue() {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let rho = ket2dm(&ket(&[s, 0.0, 0.0, s], vec![2, 2]));
        let pt = partial_transpose(&rho, &[0, 1]).unwrap();
        let eigs = eigenenergies(&pt.m);
        assert!(approx_eq(eigs[0], -0.5, 1e-10));
        assert!(approx_eq(eigs[3], 0.5, 1e-10));
        // transposing both factors is the full transpose
        let full = partial_transpose(&rho, &[1, 1]).unwrap();
        assert_eq!(full.m, rho.m.transpose());
    }

    #[test]
    fn partial_transpose_mask_validation() {
        let rho = ket2dm(&ket(&[1.0, 0.0, 0.0, 0.0], vec![2, 2]));
        assert!(matches!(partial_transpose(&rho, &[1]), Err(QuantInfError::DimensionMismatch(_))));
        assert!(matches!(partial_transpose(&rho, &[2, 0]), Err(QuantInfError::InvalidParameter { .. })));
    }

    #[test]
    fn eigenenergies_ascending_and_trace_norm() {
        let m = DMatrix::from_row_slice(2, 2, &[c(0.25, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-0.75, 0.0)]);
        let eigs = eigenenergies(&m);
        assert!(approx_eq(eigs[0], -0.75, 1e-12));
        assert!(approx_eq(eigs[1], 0.25, 1e-12));
        assert!(approx_eq(trace_norm(&m), 1.0, 1e-12));
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(0.999_999_999_7, ROUND_DIGITS), 1.0);
        assert_eq!(round_to(-3e-12, ROUND_DIGITS), 0.0);
        assert_eq!(round_to(0.123_456_789, 4), 0.1235);
    }
}
