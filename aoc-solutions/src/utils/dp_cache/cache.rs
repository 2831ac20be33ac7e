//! Single-threaded memo table

use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::DpProblem;

/// Lazily filled memo table over a DAG of sub-problems
///
/// [`get`](DpCache::get) resolves dependencies depth-first and stores every
/// value it computes, so each index is computed at most once for the lifetime
/// of the cache. There is no cycle detection: a cyclic `deps` relation
/// recurses until the stack overflows.
///
/// ```rust
/// use aoc_solutions::utils::dp_cache::{DpCache, VecBackend};
///
/// // ways to climb `n` stairs one or two steps at a time
/// let stairs = DpCache::new(
///     VecBackend::new(),
///     |&n: &usize| if n < 2 { vec![] } else { vec![n - 1, n - 2] },
///     |_: &usize, deps: Vec<u64>| deps.iter().sum::<u64>().max(1),
/// );
///
/// assert_eq!(stairs.get(&5), 8);
/// ```
pub struct DpCache<I, K, B, P>
where
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<(I, K)>,
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Value at `index`, computing it and any missing dependencies first
    pub fn get(&self, index: &I) -> K {
        if let Some(value) = self.backend.borrow().get(index) {
            return value.clone();
        }

        // no borrow is held while recursing
        let dep_values: Vec<K> = self
            .problem
            .deps(index)
            .into_iter()
            .map(|dep| self.get(&dep))
            .collect();

        self.backend
            .borrow_mut()
            .get_or_insert(index.clone(), || self.problem.compute(index, dep_values))
            .clone()
    }

    /// Consumes the cache, returning the backend with everything computed so far
    pub fn into_backend(self) -> B {
        self.backend.into_inner()
    }
}

/// [`DpProblem`] built from a `deps` closure and a `compute` closure
pub struct ClosureProblem<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    dep_fn: D,
    compute_fn: C,
    _phantom: PhantomData<(I, K)>,
}

impl<I, K, D, C> DpProblem<I, K> for ClosureProblem<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    fn deps(&self, index: &I) -> Vec<I> {
        (self.dep_fn)(index)
    }

    fn compute(&self, index: &I, deps: Vec<K>) -> K {
        (self.compute_fn)(index, deps)
    }
}

impl<I, K, B> DpCache<I, K, B, ClosureProblem<I, K, fn(&I) -> Vec<I>, fn(&I, Vec<K>) -> K>>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
{
    /// Cache for a problem given as two closures
    pub fn new<D, C>(
        backend: B,
        dep_fn: D,
        compute_fn: C,
    ) -> DpCache<I, K, B, ClosureProblem<I, K, D, C>>
    where
        D: Fn(&I) -> Vec<I>,
        C: Fn(&I, Vec<K>) -> K,
    {
        DpCache {
            backend: RefCell::new(backend),
            problem: ClosureProblem {
                dep_fn,
                compute_fn,
                _phantom: PhantomData,
            },
            _phantom: PhantomData,
        }
    }
}
