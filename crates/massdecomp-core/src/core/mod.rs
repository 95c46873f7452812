//! # Core Module
//!
//! This module provides the stateless data model for integer mass
//! decomposition: the validated weighted alphabet, the decomposition result
//! type, and the small arithmetic helpers shared by the engine.
//!
//! ## Architecture
//!
//! - **Alphabet** ([`alphabet`]) - Validated, immutable list of strictly
//!   ascending positive integer weights
//! - **Decomposition** ([`decomposition`]) - One solution vector of per-letter
//!   counts, owned by the caller
//! - **Utilities** ([`utils`]) - gcd/lcm arithmetic used by the residue table
//!
//! Everything in this layer is plain data with no construction-time state;
//! the incremental residue table and the query machinery live in
//! [`crate::engine`].

pub mod alphabet;
pub mod decomposition;
pub mod utils;
