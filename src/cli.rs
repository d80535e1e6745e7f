use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "quantinf",
    about = "Quantum information measures for bipartite states",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct QuantInfCli {
    /// Global: path to config (TOML); default: ~/.quantinf/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: debug logging to stderr (QUANTINF_LOG overrides)
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate every measure that applies to a state
    ///
    /// Examples:
    ///   quantinf measure bell.toml
    ///   quantinf measure rho.json --format json --out report.json
    Measure {
        /// State file (.toml or .json)
        #[arg(value_name = "STATE")]
        input: PathBuf,

        /// Output format (default from config)
        #[arg(long = "format", value_enum)]
        format: Option<OutputFormat>,

        /// Log base for the von Neumann entropies (default from config)
        #[arg(long = "base", value_name = "B")]
        base: Option<f64>,

        /// Rényi order evaluated alongside the other entropies
        #[arg(long = "alpha", value_name = "A", default_value_t = 2.0)]
        alpha: f64,

        /// Also write the JSON report to this file
        #[arg(short = 'o', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Schmidt coefficients and vectors of a bipartite ket
    Schmidt {
        #[arg(value_name = "STATE")]
        input: PathBuf,

        /// Output format (default from config)
        #[arg(long = "format", value_enum)]
        format: Option<OutputFormat>,
    },

    /// Relative entropy between two operators
    Kl {
        #[arg(value_name = "RHO")]
        rho: PathBuf,

        #[arg(value_name = "SIGMA")]
        sigma: PathBuf,

        /// Use Tr ρ(log ρ − log σ) instead of the eigenvalue-pairing distance
        #[arg(long = "rigorous", action = ArgAction::SetTrue)]
        rigorous: bool,
    },
}
