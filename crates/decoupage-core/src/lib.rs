//! # decoupage-core — Benin Territorial Breakdown
//!
//! Typed model of Benin's four-level administrative hierarchy
//! (départements → communes → arrondissements → quartiers), a loader for
//! the bundled JSON dataset with load-time validation, and hierarchical
//! lookup over the immutable in-memory tree.
//!
//! The tree is built once at startup and never mutated afterwards; all
//! lookup is a linear scan by integer id at each level, failing at the
//! first missing ancestor. The dataset is small and static, so no index
//! is built on top of the child lists.

pub mod error;
pub mod loader;
pub mod lookup;
pub mod model;

// Re-export primary types.
pub use error::{DatasetError, LookupError};
pub use lookup::{Decoupage, DecoupageStats};
pub use model::{Arrondissement, Commune, Departement, Quartier};
