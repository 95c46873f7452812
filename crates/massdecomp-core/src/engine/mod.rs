//! # Engine Module
//!
//! This module implements the decomposition engine: the one-time construction
//! of the extended residue table and the read-only query machinery layered on
//! top of it.
//!
//! ## Architecture
//!
//! - **Residue Table** ([`residue_table`]) - Incremental construction of the
//!   Böcker–Lipták extended residue table, the witness vector, and the lcm
//!   cache
//! - **Decomposer** ([`decomposer`]) - Public query surface: existence,
//!   single-decomposition reconstruction, enumeration, and counting
//! - **Enumeration** ([`enumerate`]) - Depth-first search over alphabet
//!   letters, pruned by the residue table and lcm cache
//!
//! Construction runs to completion before any query; afterwards the engine
//! state is immutable and safe to share across threads without locking.

pub mod decomposer;
pub(crate) mod enumerate;
pub mod residue_table;
