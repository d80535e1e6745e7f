//! `quantinf kl`: relative entropy between two operators.
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::measures::{kl_distance, relative_entropy};
use crate::io::state_file::read_state;

pub fn main(rho: &Path, sigma: &Path, rigorous: bool, precision: usize) -> Result<()> {
    let r = read_state(rho)?;
    let s = read_state(sigma)?;
    let d = (if rigorous { relative_entropy(&r, &s) } else { kl_distance(&r, &s) })
        .with_context(|| format!("comparing {} with {}", rho.display(), sigma.display()))?;
    println!("{d:.precision$}");
    Ok(())
}
