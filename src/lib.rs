//! # u-percolation
//!
//! Node percolation on static networks with the Newman-Ziff algorithm.
//!
//! Nodes of a fixed network are occupied one at a time in random order.
//! After every step the size of the largest cluster seen so far is
//! recorded; averaging over many independent orders gives the expected
//! largest-cluster size, with its standard error, as a function of the
//! occupation fraction.
//!
//! ## Modules
//!
//! - [`random`] — PCG-XSH-RS generator, unbiased bounded sampling, shuffle
//! - [`collections`] — activation-driven union-by-size forest
//! - [`network`] — CSR adjacency and input parsers
//! - [`percolation`] — trial runner and one-call [`percolation::simulate`]
//! - [`stats`] — per-step sum / sum-of-squares accumulator
//! - [`config`] — seed and trial count
//! - [`output`] — `%g`-style table rendering
//!
//! ## Design Philosophy
//!
//! - **Reproducible**: the whole table is a pure function of network and seed
//! - **Allocation-free trials**: one context object owns every buffer
//! - **Property-based testing**: forest invariants verified via proptest

pub mod collections;
pub mod config;
pub mod network;
pub mod output;
pub mod percolation;
pub mod random;
pub mod stats;
