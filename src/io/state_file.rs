//! On-disk state format (TOML or JSON, picked by extension).
//!
//! ```toml
//! kind = "ket"                     # "ket" | "bra" | "oper"
//! dims = [2, 2]
//! amplitudes = [[0.7071067811865476, 0.0], [0.0, 0.0], [0.0, 0.0], [0.7071067811865476, 0.0]]
//! ```
//!
//! Operators carry `rows = [[[re, im], ...], ...]` instead of `amplitudes`.
//! `dims` may be omitted for a single subsystem.
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use nalgebra::{DMatrix, DVector, RowDVector};
use num_complex::Complex64 as C64;
use serde::{Deserialize, Serialize};

use crate::core::error::QuantInfError;
use crate::core::types::{Bra, DensityOp, Ket, QState};

/// Complex number as `[re, im]`.
pub type Pair = [f64; 2];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StateFile {
    Ket {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dims: Option<Vec<usize>>,
        amplitudes: Vec<Pair>,
    },
    Bra {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dims: Option<Vec<usize>>,
        amplitudes: Vec<Pair>,
    },
    Oper {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dims: Option<Vec<usize>>,
        rows: Vec<Vec<Pair>>,
    },
}

fn to_c(p: &Pair) -> C64 {
    C64::new(p[0], p[1])
}

fn to_pair(z: &C64) -> Pair {
    [z.re, z.im]
}

impl StateFile {
    pub fn into_state(self) -> std::result::Result<QState, QuantInfError> {
        match self {
            StateFile::Ket { dims, amplitudes } => {
                let dims = dims.unwrap_or_else(|| vec![amplitudes.len()]);
                let data = DVector::from_iterator(amplitudes.len(), amplitudes.iter().map(to_c));
                Ok(Ket::new(data, dims)?.into())
            }
            StateFile::Bra { dims, amplitudes } => {
                let dims = dims.unwrap_or_else(|| vec![amplitudes.len()]);
                let data = RowDVector::from_iterator(amplitudes.len(), amplitudes.iter().map(to_c));
                Ok(Bra::new(data, dims)?.into())
            }
            StateFile::Oper { dims, rows } => {
                let n = rows.len();
                if let Some(bad) = rows.iter().position(|r| r.len() != n) {
                    return Err(QuantInfError::dimension_mismatch(format!(
                        "operator row {bad} has {} entries, expected {n}",
                        rows[bad].len()
                    )));
                }
                let dims = dims.unwrap_or_else(|| vec![n]);
                let m = DMatrix::from_row_iterator(n, n, rows.iter().flatten().map(to_c));
                Ok(DensityOp::new(m, dims)?.into())
            }
        }
    }
}

impl From<&QState> for StateFile {
    fn from(state: &QState) -> Self {
        match state {
            QState::Ket(k) => StateFile::Ket {
                dims: Some(k.dims.clone()),
                amplitudes: k.data.iter().map(to_pair).collect(),
            },
            QState::Bra(b) => StateFile::Bra {
                dims: Some(b.dims.clone()),
                amplitudes: b.data.iter().map(to_pair).collect(),
            },
            QState::Oper(o) => StateFile::Oper {
                dims: Some(o.dims.clone()),
                rows: o.m.row_iter().map(|r| r.iter().map(to_pair).collect()).collect(),
            },
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

pub fn parse_state(txt: &str, json: bool) -> Result<QState> {
    let file: StateFile = if json { serde_json::from_str(txt)? } else { toml::from_str(txt)? };
    Ok(file.into_state()?)
}

/// Read a state from a `.json` file, or TOML for any other extension.
pub fn read_state(path: &Path) -> Result<QState> {
    let txt = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_state(&txt, is_json(path)).with_context(|| format!("parsing state {}", path.display()))
}
