//! Scalar quantum-information measures of bipartite states.
//!
//! Every function is a stateless transform of one or two [`QState`]s. Where
//! a function reduces a bipartite state it keeps subsystem 0 and traces the
//! rest out; that choice is fixed.
//!
//! [`QState`]: crate::core::types::QState

pub mod entropy;
pub mod predicates;
pub mod relative;
pub mod schmidt;
pub mod separability;

pub use entropy::{
    entropy_entanglement, entropy_linear_entanglement, entropy_renyi, entropy_renyi_entanglement, entropy_vn,
    linear_entropy,
};
pub use predicates::{is_mixed_reduced, is_pure, purity, purity_of_reduced};
pub use relative::{kl_distance, relative_entropy};
pub use schmidt::{schmidt_decomposition, SchmidtDecomposition};
pub use separability::{log_negativity, negativity, peres_horodecki};

// Default partial-transpose masks. The two families disagree on which factor
// is transposed by default; callers with a different subsystem layout must
// pass a mask explicitly.

/// Default mask for [`peres_horodecki`]: transposes the second factor.
pub const PERES_HORODECKI_MASK: [u8; 2] = [0, 1];
/// Default mask for [`negativity`] and [`log_negativity`]: transposes the first factor.
pub const NEGATIVITY_MASK: [u8; 2] = [1, 0];

/// Log base used by the entanglement entropies unless told otherwise.
pub const DEFAULT_ENTROPY_BASE: f64 = 2.0;

/// Default for [`linear_entropy`]'s `normalize`.
pub const LINEAR_ENTROPY_NORMALIZE: bool = false;
/// Default for [`entropy_linear_entanglement`]'s `normalize` (opposite of the above).
pub const LINEAR_ENTANGLEMENT_NORMALIZE: bool = true;

/// Subsystem kept when a measure reduces a bipartite state.
pub(crate) const REDUCED_SUBSYSTEM: usize = 0;
