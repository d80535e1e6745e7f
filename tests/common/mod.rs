//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use nalgebra::{DMatrix, DVector};
use num_complex::Complex64 as C64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use quantinf::core::types::{DensityOp, Ket, QState};

pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

fn random_c(rng: &mut StdRng) -> C64 {
    C64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0))
}

/// Normalized random ket with the given dims.
pub fn random_ket(rng: &mut StdRng, dims: &[usize]) -> Ket {
    let d: usize = dims.iter().product();
    let v = DVector::from_fn(d, |_, _| random_c(rng));
    let norm = v.norm();
    Ket::new(v / C64::from(norm), dims.to_vec()).unwrap()
}

/// G·Gᴴ / Tr(G·Gᴴ) for a random complex G: full rank with probability 1.
pub fn random_density(rng: &mut StdRng, dims: &[usize]) -> DensityOp {
    let d: usize = dims.iter().product();
    let g = DMatrix::from_fn(d, d, |_, _| random_c(rng));
    let m = &g * g.adjoint();
    let tr: C64 = m.diagonal().iter().copied().sum();
    DensityOp::new(m / tr, dims.to_vec()).unwrap()
}

pub fn diag(vals: &[f64]) -> QState {
    let n = vals.len();
    let m = DMatrix::from_fn(n, n, |i, j| if i == j { C64::new(vals[i], 0.0) } else { C64::new(0.0, 0.0) });
    DensityOp::new(m, vec![n]).unwrap().into()
}
