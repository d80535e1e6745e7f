//! `quantinf measure`: every applicable measure of one state.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::core::error::QuantInfError;
use crate::core::measures::{self, LINEAR_ENTANGLEMENT_NORMALIZE};
use crate::core::QState;
use crate::io::atomic::atomic_write;
use crate::io::state_file::read_state;

#[derive(Clone, Debug)]
pub struct MeasureOpts {
    pub format: OutputFormat,
    pub base: f64,
    pub alpha: f64,
    pub precision: usize,
    pub negativity_mask: Vec<u8>,
    pub peres_mask: Vec<u8>,
    pub out: Option<PathBuf>,
}

/// `None` marks a measure that does not apply to the state.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct Report {
    pub kind: String,
    pub dims: Vec<usize>,
    pub purity: Option<f64>,
    pub is_pure: Option<bool>,
    pub purity_of_reduced: Option<f64>,
    pub is_mixed_reduced: Option<bool>,
    pub linear_entropy: Option<f64>,
    pub linear_entropy_normalized: Option<f64>,
    pub entropy_vn: Option<f64>,
    pub entropy_entanglement: Option<f64>,
    pub entropy_linear_entanglement: Option<f64>,
    pub entropy_renyi: Option<f64>,
    pub entropy_renyi_entanglement: Option<f64>,
    pub peres_horodecki: Option<bool>,
    pub negativity: Option<f64>,
    pub log_negativity: Option<f64>,
}

/// Shape and kind errors mean "not applicable"; a bad user-supplied
/// parameter is still an error.
fn applicable<T>(name: &str, r: std::result::Result<T, QuantInfError>) -> Result<Option<T>> {
    match r {
        Ok(v) => Ok(Some(v)),
        Err(e @ QuantInfError::InvalidParameter { name: "base" | "alpha" | "mask", .. }) => Err(e.into()),
        Err(e) => {
            debug!(measure = name, reason = %e, "measure not applicable");
            Ok(None)
        }
    }
}

pub fn evaluate(state: &QState, opts: &MeasureOpts) -> Result<Report> {
    let nm = &opts.negativity_mask;
    let pm = &opts.peres_mask;
    Ok(Report {
        kind: state.kind().to_string(),
        dims: state.dims().to_vec(),
        purity: applicable("purity", measures::purity(state))?,
        is_pure: applicable("is_pure", measures::is_pure(state))?,
        purity_of_reduced: applicable("purity_of_reduced", measures::purity_of_reduced(state))?,
        is_mixed_reduced: applicable("is_mixed_reduced", measures::is_mixed_reduced(state))?,
        linear_entropy: applicable("linear_entropy", measures::linear_entropy(state, false))?,
        linear_entropy_normalized: applicable("linear_entropy_normalized", measures::linear_entropy(state, true))?,
        entropy_vn: applicable("entropy_vn", measures::entropy_vn(state, opts.base))?,
        entropy_entanglement: applicable(
            "entropy_entanglement",
            measures::entropy_entanglement(state, opts.base),
        )?,
        entropy_linear_entanglement: applicable(
            "entropy_linear_entanglement",
            measures::entropy_linear_entanglement(state, LINEAR_ENTANGLEMENT_NORMALIZE),
        )?,
        entropy_renyi: applicable("entropy_renyi", measures::entropy_renyi(state, opts.alpha))?,
        entropy_renyi_entanglement: applicable(
            "entropy_renyi_entanglement",
            measures::entropy_renyi_entanglement(state, opts.alpha),
        )?,
        peres_horodecki: applicable("peres_horodecki", measures::peres_horodecki(state, pm))?,
        negativity: applicable("negativity", measures::negativity(state, nm))?,
        log_negativity: applicable("log_negativity", measures::log_negativity(state, nm))?,
    })
}

fn fmt_f(v: Option<f64>, precision: usize) -> String {
    v.map_or_else(|| "n/a".dimmed().to_string(), |x| format!("{x:.precision$}"))
}

fn fmt_b(v: Option<bool>) -> String {
    match v {
        Some(true) => "yes".to_string(),
        Some(false) => "no".to_string(),
        None => "n/a".dimmed().to_string(),
    }
}

pub fn render_table(r: &Report, opts: &MeasureOpts) -> String {
    let p = opts.precision;
    let rows: Vec<(String, String)> = vec![
        ("purity".into(), fmt_f(r.purity, p)),
        ("pure".into(), fmt_b(r.is_pure)),
        ("purity (reduced)".into(), fmt_f(r.purity_of_reduced, p)),
        ("mixed (reduced)".into(), fmt_b(r.is_mixed_reduced)),
        ("linear entropy".into(), fmt_f(r.linear_entropy, p)),
        ("linear entropy (normalized)".into(), fmt_f(r.linear_entropy_normalized, p)),
        (format!("von Neumann entropy (base {})", opts.base), fmt_f(r.entropy_vn, p)),
        ("entanglement entropy".into(), fmt_f(r.entropy_entanglement, p)),
        ("linear entanglement entropy".into(), fmt_f(r.entropy_linear_entanglement, p)),
        (format!("Rényi entropy (α = {})", opts.alpha), fmt_f(r.entropy_renyi, p)),
        (format!("Rényi entanglement (α = {})", opts.alpha), fmt_f(r.entropy_renyi_entanglement, p)),
        (format!("PPT entangled (mask {:?})", opts.peres_mask), fmt_b(r.peres_horodecki)),
        (format!("negativity (mask {:?})", opts.negativity_mask), fmt_f(r.negativity, p)),
        ("log negativity".into(), fmt_f(r.log_negativity, p)),
    ];
    let width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let mut out = format!("{} {} dims={:?}\n", "state:".bold(), r.kind, r.dims);
    for (k, v) in rows {
        let pad = width - k.chars().count();
        out.push_str(&format!("  {}{}  {}\n", k.cyan(), " ".repeat(pad), v));
    }
    out
}

pub fn main(input: &Path, opts: &MeasureOpts) -> Result<()> {
    let state = read_state(input)?;
    let report = evaluate(&state, opts).with_context(|| format!("measuring {}", input.display()))?;
    let json = serde_json::to_string_pretty(&report)?;

    if let Some(out) = &opts.out {
        atomic_write(out, json.as_bytes()).with_context(|| format!("writing {}", out.display()))?;
    }
    match opts.format {
        OutputFormat::Json => println!("{json}"),
        OutputFormat::Table => print!("{}", render_table(&report, opts)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::measures::{NEGATIVITY_MASK, PERES_HORODECKI_MASK};
    use crate::core::ops::ket2dm;
    use crate::core::states::{bell_state, BellKind};

    fn opts() -> MeasureOpts {
        MeasureOpts {
            format: OutputFormat::Json,
            base: 2.0,
            alpha: 2.0,
            precision: 6,
            negativity_mask: NEGATIVITY_MASK.to_vec(),
            peres_mask: PERES_HORODECKI_MASK.to_vec(),
            out: None,
        }
    }

    fn bell_oper() -> QState {
        ket2dm(&bell_state(BellKind::PhiPlus)).into()
    }

    #[test]
    fn non_binary_mask_is_an_error() {
        let opts = MeasureOpts { peres_mask: vec![2, 0], ..opts() };
        let err = evaluate(&bell_oper(), &opts).unwrap_err();
        assert!(err.to_string().contains("mask"), "{err}");
    }

    #[test]
    fn mask_of_other_length_is_not_applicable() {
        let opts = MeasureOpts { negativity_mask: vec![1, 0, 0], ..opts() };
        let r = evaluate(&bell_oper(), &opts).unwrap();
        assert_eq!(r.negativity, None);
        assert_eq!(r.log_negativity, None);
        assert_eq!(r.peres_horodecki, Some(true));
    }

    #[test]
    fn ket_report_leaves_operator_measures_empty() {
        let r = evaluate(&bell_state(BellKind::PhiPlus).into(), &opts()).unwrap();
        assert_eq!(r.is_pure, Some(true));
        assert_eq!(r.negativity, None);
    }
}
