//! Tabu Search for Quadratic Binary Functions.
//!
//! Selects a subset of binary variables minimizing (or, through
//! [`qbf::Objective::Maximize`], maximizing) a quadratic objective, subject
//! to the constraint that no two consecutive indices are selected together.
//!
//! - [`Evaluator`]: the objective contract (full cost plus insertion,
//!   removal and exchange deltas).
//! - [`Solution`]: the selected indices and their cached cost.
//! - [`tabu`]: the search engine, with first- and best-improving
//!   neighborhoods, randomized adjacency repair and intensification by
//!   restart.
//! - [`qbf`]: a QBF evaluator and the upper-triangular instance format.
//! - [`ttt`]: repeated independently seeded runs for time-to-target plots.
//!
//! # Example
//!
//! ```
//! use qbf_metaheur::qbf::{Objective, Qbf, QbfInstance};
//! use qbf_metaheur::tabu::{SearchStrategy, TabuConfig, TabuRunner};
//!
//! let inst: QbfInstance = "5\n 3 -1 2 0 4\n 2 -2 1 0\n -1 3 2\n 5 -4\n 1".parse()?;
//! let qbf = Qbf::new(inst, Objective::Maximize);
//!
//! let config = TabuConfig::default()
//!     .with_tabu_tenure(2)
//!     .with_max_iterations(200)
//!     .with_intensification(50, 20)
//!     .with_strategy(SearchStrategy::BestImproving)
//!     .with_seed(1);
//!
//! let result = TabuRunner::run(&qbf, &config)?;
//! assert!(result.best.is_feasible());
//! println!("max f = {}", -result.best_cost);
//! # Ok::<(), qbf_metaheur::SearchError>(())
//! ```

pub mod error;
pub mod evaluator;
pub mod qbf;
pub mod solution;
pub mod tabu;
pub mod ttt;

pub use error::{Result, SearchError, Stage};
pub use evaluator::Evaluator;
pub use solution::Solution;
