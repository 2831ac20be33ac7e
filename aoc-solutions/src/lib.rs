//! Advent of Code 2022-2024 puzzle solutions with automatic registration
//!
//! Solutions are organized by year under [`solutions`]. Each one derives
//! `AutoRegisterSolver`, so linking this crate is enough for
//! `SolverRegistryBuilder::register_all_plugins` to find them.

pub mod solutions;
pub mod utils;
