//! `quantinf schmidt`: Schmidt coefficients and vectors of a ket.
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::core::measures::{schmidt_decomposition, SchmidtDecomposition};
use crate::core::ops::EPS;
use crate::core::types::Ket;
use crate::core::QState;
use crate::io::state_file::{read_state, StateFile};

#[derive(Debug, Serialize)]
pub struct SchmidtReport {
    pub coefficients: Vec<f64>,
    pub rank: usize,
    pub left: Vec<StateFile>,
    pub right: Vec<StateFile>,
}

fn as_files(kets: &[Ket]) -> Vec<StateFile> {
    kets.iter().map(|k| StateFile::from(&QState::Ket(k.clone()))).collect()
}

impl From<&SchmidtDecomposition> for SchmidtReport {
    fn from(d: &SchmidtDecomposition) -> Self {
        Self {
            coefficients: d.coefficients.clone(),
            rank: d.rank(EPS),
            left: as_files(&d.left),
            right: as_files(&d.right),
        }
    }
}

fn fmt_ket(k: &Ket, precision: usize) -> String {
    let parts: Vec<String> = k
        .data
        .iter()
        .map(|z| format!("{:.p$}{:+.p$}i", z.re, z.im, p = precision))
        .collect();
    format!("[{}]", parts.join(", "))
}

pub fn render_table(d: &SchmidtDecomposition, precision: usize) -> String {
    let mut out = format!("{} {}\n", "schmidt rank:".bold(), d.rank(EPS));
    for (i, ((s, u), v)) in d.coefficients.iter().zip(&d.left).zip(&d.right).enumerate() {
        out.push_str(&format!("  {} {:.p$}\n", format!("s[{i}]").cyan(), s, p = precision));
        out.push_str(&format!("       u = {}\n", fmt_ket(u, precision)));
        out.push_str(&format!("       v = {}\n", fmt_ket(v, precision)));
    }
    out
}

pub fn main(input: &Path, format: OutputFormat, precision: usize) -> Result<()> {
    let state = read_state(input)?;
    let decomp = schmidt_decomposition(&state).with_context(|| format!("decomposing {}", input.display()))?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&SchmidtReport::from(&decomp))?),
        OutputFormat::Table => print!("{}", render_table(&decomp, precision)),
    }
    Ok(())
}
