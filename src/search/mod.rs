//! Search algorithms for the Maximum Weight Clique problem.

/// exact branch & bound (maximum weight clique)
pub mod clique_bnb;

/// upper bounds used to prune the branch & bound
pub mod bounds;

/// greedy that finds a "heavy" clique (initial incumbent)
pub mod greedy_clique;

/// stopping criteria (time limit, interruption, ...)
pub mod stopping;
