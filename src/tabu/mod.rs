//! Tabu Search (TS) for adjacency-constrained subset selection.
//!
//! A single-solution trajectory metaheuristic that uses memory structures
//! (the tabu list) to forbid recently moved indices, preventing cycling
//! and encouraging exploration of new regions of the search space.
//!
//! The neighborhood consists of insertions, removals and exchanges. Moves
//! may select two consecutive indices; a randomized repair evicts one of
//! each such pair before the move is evaluated. Every
//! `intensification_start` iterations the search restarts from the best
//! solution with its historically most frequent indices fixed for
//! `intensification_duration` iterations.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod candidates;
mod config;
mod intensification;
mod neighborhood;
mod repair;
mod runner;
mod tabu_list;
mod types;

pub use config::{SearchStrategy, TabuConfig};
pub use runner::{TabuResult, TabuRunner};
pub use types::Move;
