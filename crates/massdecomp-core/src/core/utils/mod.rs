//! Arithmetic helpers for the core data model.

pub mod arith;
