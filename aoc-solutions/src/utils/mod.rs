//! Shared helpers for puzzle solutions

pub mod blocks;
pub mod coord;
pub mod dp_cache;
pub mod grid;
