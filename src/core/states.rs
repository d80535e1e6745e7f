//! Standard states and builders: basis kets, Bell pairs, mixtures.
use nalgebra::{DMatrix, DVector};
use num_complex::Complex64 as C64;

use crate::core::error::{QuantInfError, Result};
use crate::core::ops::{ket2dm, tensor_kets};
use crate::core::types::{DensityOp, Ket};

#[inline]
fn c(r: f64, i: f64) -> C64 {
    C64::new(r, i)
}

/// Computational basis ket |n⟩ of a `dim`-level system.
pub fn basis(dim: usize, n: usize) -> Result<Ket> {
    if n >= dim {
        return Err(QuantInfError::invalid_parameter("n", format!("level {n} out of range for dimension {dim}")));
    }
    let mut v = DVector::from_element(dim, c(0.0, 0.0));
    v[n] = c(1.0, 0.0);
    Ket::new(v, vec![dim])
}

/// Product of basis kets, one `(dim, level)` pair per factor.
pub fn product_ket(levels: &[(usize, usize)]) -> Result<Ket> {
    let factors = levels.iter().map(|&(dim, n)| basis(dim, n)).collect::<Result<Vec<_>>>()?;
    tensor_kets(&factors)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BellKind {
    /// (|00⟩ + |11⟩)/√2
    PhiPlus,
    /// (|00⟩ − |11⟩)/√2
    PhiMinus,
    /// (|01⟩ + |10⟩)/√2
    PsiPlus,
    /// (|01⟩ − |10⟩)/√2
    PsiMinus,
}

pub fn bell_state(kind: BellKind) -> Ket {
    let s = std::f64::consts::FRAC_1_SQRT_2;
    let amps = match kind {
        BellKind::PhiPlus => [s, 0.0, 0.0, s],
        BellKind::PhiMinus => [s, 0.0, 0.0, -s],
        BellKind::PsiPlus => [0.0, s, s, 0.0],
        BellKind::PsiMinus => [0.0, s, -s, 0.0],
    };
    Ket {
        data: DVector::from_iterator(4, amps.iter().map(|&a| c(a, 0.0))),
        dims: vec![2, 2],
    }
}

/// I/d over the given subsystem dims.
pub fn maximally_mixed(dims: &[usize]) -> Result<DensityOp> {
    let d: usize = dims.iter().product();
    let m = DMatrix::<C64>::identity(d, d) * c(1.0 / d as f64, 0.0);
    DensityOp::new(m, dims.to_vec())
}

/// p·|Φ⁺⟩⟨Φ⁺| + (1−p)·I/4. Entangled iff p > 1/3.
pub fn werner_state(p: f64) -> Result<DensityOp> {
    if !(0.0..=1.0).contains(&p) {
        return Err(QuantInfError::invalid_parameter("p", format!("must lie in [0, 1], got {p}")));
    }
    let bell = ket2dm(&bell_state(BellKind::PhiPlus));
    let noise = maximally_mixed(&[2, 2])?;
    let m = bell.m * c(p, 0.0) + noise.m * c(1.0 - p, 0.0);
    DensityOp::new(m, vec![2, 2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basis_bounds() {
        let k = basis(3, 2).unwrap();
        assert_eq!(k.data[2], c(1.0, 0.0));
        assert!(basis(2, 2).is_err());
    }

    #[test]
    fn bell_states_are_normalized() {
        for kind in [BellKind::PhiPlus, BellKind::PhiMinus, BellKind::PsiPlus, BellKind::PsiMinus] {
            assert!((bell_state(kind).norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn product_ket_places_amplitude() {
        let k = product_ket(&[(2, 1), (3, 2)]).unwrap();
        assert_eq!(k.dims, vec![2, 3]);
        assert_eq!(k.data[5], c(1.0, 0.0));
    }

    #[test]
    fn werner_trace_is_one() {
        let w = werner_state(0.4).unwrap();
        assert!((w.trace().re - 1.0).abs() < 1e-12);
        assert!(werner_state(1.5).is_err());
    }
}
