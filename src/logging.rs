//! stderr logging for the CLI, gated by `QUANTINF_LOG` (an `EnvFilter`
//! directive such as `quantinf=trace`) or `--verbose`.
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "QUANTINF_LOG";

/// Filter used when `QUANTINF_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "quantinf=debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
