//! Quantum information measures for finite-dimensional bipartite states:
//! purity, entanglement entropies, negativity, Schmidt decomposition,
//! separability tests and relative entropy.
//!
//! ```
//! use quantinf::core::measures::{entropy_entanglement, DEFAULT_ENTROPY_BASE};
//! use quantinf::core::states::{bell_state, BellKind};
//! use quantinf::core::QState;
//!
//! let phi = QState::from(bell_state(BellKind::PhiPlus));
//! let s = entropy_entanglement(&phi, DEFAULT_ENTROPY_BASE).unwrap();
//! assert!((s - 1.0).abs() < 1e-9);
//! ```
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod logging;
