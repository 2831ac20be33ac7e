//! Dynamic Programming Cache with Lazy Evaluation
//!
//! This module provides memoization caches for dynamic programming problems where values
//! depend on other values in a directed acyclic graph (DAG).
//!
//! Backends:
//! - [`VecBackend`]: dense, sequential `usize` indices (auto-growing)
//! - [`HashMapBackend`]: arbitrary hashable index types
//!
//! # Warning: Cycle Behavior
//!
//! **These caches do NOT support cycle detection.** A cyclic dependency graph
//! overflows the stack. Dependencies MUST form a DAG.
//!
//! # Example: Trait-based API
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
//!
//! /// Number of ways to climb `n` stairs taking 1, 2 or 3 steps at a time
//! struct Stairs;
//!
//! impl DpProblem<u32, u64> for Stairs {
//!     fn deps(&self, n: &u32) -> Vec<u32> {
//!         (1..=3).filter(|step| step <= n).map(|step| n - step).collect()
//!     }
//!     fn compute(&self, n: &u32, deps: Vec<u64>) -> u64 {
//!         if *n == 0 { 1 } else { deps.iter().sum() }
//!     }
//! }
//!
//! let cache = DpCache::with_problem(HashMapBackend::new(), Stairs);
//! assert_eq!(cache.get(&4), 7);
//! ```
//!
//! # Example: Closure-based API
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, VecBackend};
//!
//! let fib = DpCache::new(
//!     VecBackend::new(),
//!     |n: &usize| if *n <= 1 { vec![] } else { vec![n - 1, n - 2] },
//!     |n: &usize, deps: Vec<u64>| if *n <= 1 { *n as u64 } else { deps[0] + deps[1] },
//! );
//!
//! assert_eq!(fib.get(&10), 55);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::{ClosureProblem, DpCache};
pub use problem::DpProblem;

#[cfg(test)]
mod tests;
