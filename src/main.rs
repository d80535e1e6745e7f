//! quantinf: evaluate quantum-information measures on states stored as TOML/JSON.
use clap::Parser; // trait import enables QuantInfCli::parse()
use colored::Colorize;

use quantinf::cli::{Command, QuantInfCli};
use quantinf::{commands, config, logging};

fn run(args: QuantInfCli) -> anyhow::Result<()> {
    let cfg = config::load(&args.config)?;

    match args.cmd {
        Command::Measure { input, format, base, alpha, out } => {
            let opts = commands::measure::MeasureOpts {
                format: format.unwrap_or(cfg.defaults.format),
                base: base.unwrap_or(cfg.defaults.base),
                alpha,
                precision: cfg.defaults.precision,
                negativity_mask: cfg.defaults.negativity_mask.clone(),
                peres_mask: cfg.defaults.peres_mask.clone(),
                out,
            };
            commands::measure::main(&input, &opts)
        }
        Command::Schmidt { input, format } => {
            commands::schmidt::main(&input, format.unwrap_or(cfg.defaults.format), cfg.defaults.precision)
        }
        Command::Kl { rho, sigma, rigorous } => commands::kl::main(&rho, &sigma, rigorous, cfg.defaults.precision),
    }
}

fn main() {
    let args = QuantInfCli::parse();
    logging::init(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("{} {:#}", "err:".red().bold(), e);
        std::process::exit(1);
    }
}
