//! Quantum state representations: kets, bras and density operators, each
//! carrying the subsystem dims used to factor them into tensor blocks.
use std::borrow::Cow;
use std::fmt;

use nalgebra::{DMatrix, DVector, RowDVector};
use num_complex::Complex64 as C64;

use crate::core::error::{QuantInfError, Result};
use crate::core::ops;

/// Which representation a [`QState`] holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StateKind {
    Ket,
    Bra,
    Oper,
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateKind::Ket => write!(f, "ket"),
            StateKind::Bra => write!(f, "bra"),
            StateKind::Oper => write!(f, "operator"),
        }
    }
}

fn check_dims(dims: &[usize], len: usize, what: &str) -> Result<()> {
    if dims.is_empty() {
        return Err(QuantInfError::dimension_mismatch(format!("{what} dims must name at least one subsystem")));
    }
    if dims.iter().any(|&d| d == 0) {
        return Err(QuantInfError::dimension_mismatch(format!("{what} dims {dims:?} contain a zero factor")));
    }
    let total: usize = dims.iter().product();
    if total != len {
        return Err(QuantInfError::dimension_mismatch(format!(
            "{what} of size {len} does not factor as dims {dims:?} (product {total})"
        )));
    }
    Ok(())
}

/// Column state vector. Unit norm is assumed, not enforced.
#[derive(Clone, Debug, PartialEq)]
pub struct Ket {
    pub data: DVector<C64>,
    pub dims: Vec<usize>,
}

impl Ket {
    pub fn new(data: DVector<C64>, dims: Vec<usize>) -> Result<Self> {
        check_dims(&dims, data.len(), "ket")?;
        Ok(Self { data, dims })
    }

    /// Single-subsystem ket whose dims are just its length.
    pub fn from_column(data: DVector<C64>) -> Self {
        let dims = vec![data.len()];
        Self { data, dims }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.data.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt()
    }

    pub fn dag(&self) -> Bra {
        Bra { data: self.data.adjoint(), dims: self.dims.clone() }
    }
}

/// Row (dual) state vector.
#[derive(Clone, Debug, PartialEq)]
pub struct Bra {
    pub data: RowDVector<C64>,
    pub dims: Vec<usize>,
}

impl Bra {
    pub fn new(data: RowDVector<C64>, dims: Vec<usize>) -> Result<Self> {
        check_dims(&dims, data.len(), "bra")?;
        Ok(Self { data, dims })
    }

    pub fn dag(&self) -> Ket {
        Ket { data: self.data.adjoint(), dims: self.dims.clone() }
    }
}

/// Square operator, normally a density operator (Hermitian, unit trace).
/// Neither property is checked on construction.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityOp {
    pub m: DMatrix<C64>,
    pub dims: Vec<usize>,
}

impl DensityOp {
    pub fn new(m: DMatrix<C64>, dims: Vec<usize>) -> Result<Self> {
        if m.nrows() != m.ncols() {
            return Err(QuantInfError::dimension_mismatch(format!(
                "operator must be square, got {}x{}",
                m.nrows(),
                m.ncols()
            )));
        }
        check_dims(&dims, m.nrows(), "operator")?;
        Ok(Self { m, dims })
    }

    /// Hilbert-space dimension (matrix side length).
    pub fn dim(&self) -> usize {
        self.m.nrows()
    }

    pub fn trace(&self) -> C64 {
        ops::trace(&self.m)
    }
}

/// Tagged state value accepted by every measure.
#[derive(Clone, Debug, PartialEq)]
pub enum QState {
    Ket(Ket),
    Bra(Bra),
    Oper(DensityOp),
}

impl QState {
    pub fn kind(&self) -> StateKind {
        match self {
            QState::Ket(_) => StateKind::Ket,
            QState::Bra(_) => StateKind::Bra,
            QState::Oper(_) => StateKind::Oper,
        }
    }

    pub fn dims(&self) -> &[usize] {
        match self {
            QState::Ket(k) => &k.dims,
            QState::Bra(b) => &b.dims,
            QState::Oper(o) => &o.dims,
        }
    }
}

impl From<Ket> for QState {
    fn from(k: Ket) -> Self {
        QState::Ket(k)
    }
}

impl From<Bra> for QState {
    fn from(b: Bra) -> Self {
        QState::Bra(b)
    }
}

impl From<DensityOp> for QState {
    fn from(o: DensityOp) -> Self {
        QState::Oper(o)
    }
}

/// Kets become |ψ⟩⟨ψ|, operators pass through, anything else is rejected.
pub fn to_operator(state: &QState) -> Result<Cow<'_, DensityOp>> {
    match state {
        QState::Ket(k) => Ok(Cow::Owned(ops::ket2dm(k))),
        QState::Oper(o) => Ok(Cow::Borrowed(o)),
        QState::Bra(_) => Err(QuantInfError::invalid_kind("ket or operator", state.kind())),
    }
}

pub fn require_operator(state: &QState) -> Result<&DensityOp> {
    match state {
        QState::Oper(o) => Ok(o),
        _ => Err(QuantInfError::invalid_kind("operator", state.kind())),
    }
}

pub fn require_ket(state: &QState) -> Result<&Ket> {
    match state {
        QState::Ket(k) => Ok(k),
        _ => Err(QuantInfError::invalid_kind("ket", state.kind())),
    }
}
