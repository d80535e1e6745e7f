//! Quantum-information core: state types, the linear-algebra layer they sit
//! on, and the measures computed from them.

pub mod error;
pub mod measures;
pub mod ops;
pub mod states;
pub mod types;

pub use error::{QuantInfError, Result};
pub use types::{to_operator, Bra, DensityOp, Ket, QState, StateKind};
