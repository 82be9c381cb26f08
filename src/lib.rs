//! DOGS implementation of the Maximum Weight Clique problem:
//! random instance generation and exact resolution.

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// weighted instance base trait, cliques and checker
pub mod clique;

/// error types
pub mod error;

/// compact instance (adjacency lists + bitset matrix + weights)
pub mod compact_instance;

/// random G(n,p) instance generator
pub mod generator;

/// read/write weighted graph files
pub mod dimacs;

/// read/write solution reports
pub mod report;

/// helper and utility methods for executables
pub mod util;

/// search algorithms for the maximum weight clique problem
pub mod search;
