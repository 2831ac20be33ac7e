//! Sub-problem decomposition for [`DpCache`](super::DpCache)

/// How a value at index `I` breaks down into smaller indices, and how the
/// value `K` is rebuilt from theirs
///
/// Counting monotone lattice paths to `(x, y)`:
///
/// ```rust
/// use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
///
/// struct LatticePaths;
///
/// impl DpProblem<(u32, u32), u64> for LatticePaths {
///     fn deps(&self, &(x, y): &(u32, u32)) -> Vec<(u32, u32)> {
///         match (x, y) {
///             (0, _) | (_, 0) => vec![],
///             _ => vec![(x - 1, y), (x, y - 1)],
///         }
///     }
///
///     fn compute(&self, _: &(u32, u32), deps: Vec<u64>) -> u64 {
///         deps.iter().sum::<u64>().max(1)
///     }
/// }
///
/// let paths = DpCache::with_problem(HashMapBackend::new(), LatticePaths);
/// assert_eq!(paths.get(&(2, 2)), 6);
/// ```
pub trait DpProblem<I, K> {
    /// Indices whose values `compute` needs; empty for base cases
    fn deps(&self, index: &I) -> Vec<I>;

    /// `deps` holds one value per index from [`deps`](DpProblem::deps), in order
    fn compute(&self, index: &I, deps: Vec<K>) -> K;
}
