//! # Mass Decomposition Core Library
//!
//! A library for the integer mass decomposition (money-changing) problem:
//! given an ordered alphabet of distinct positive integer weights and a
//! target mass, decide whether the mass is a non-negative integer combination
//! of the weights, reconstruct one such combination, enumerate all of them,
//! or count them.
//!
//! The implementation follows the extended residue table algorithm of Böcker
//! and Lipták, which answers existence queries in O(1) after
//! O(alphabet_size · smallest_weight) preprocessing.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers with a strict one-way data flow:
//!
//! - **[`core`]: The Foundation.** Stateless data models: the validated
//!   [`core::alphabet::Alphabet`], the [`core::decomposition::Decomposition`]
//!   result type, and small arithmetic utilities.
//!
//! - **[`engine`]: The Logic Core.** The stateful construction of the
//!   extended residue table and the query surface built on it, entered
//!   through [`engine::decomposer::MassDecomposer`].
//!
//! Callers supply an already scaled, strictly ascending integer alphabet;
//! converting real-valued masses into that form, and interpreting the
//! returned counts, belongs to the surrounding application.

pub mod core;
pub mod engine;
