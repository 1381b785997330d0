//! Data structures used by the percolation engine.

pub mod union_find;

pub use union_find::ClusterTracker;
