//! # API Route Modules
//!
//! - `territoire` — the four read-only lookup endpoints descending the
//!   territorial tree: département by id, communes of a département,
//!   arrondissements of a commune, quartiers of an arrondissement.

pub mod territoire;
