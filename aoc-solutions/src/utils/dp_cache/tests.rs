//! Tests for the DP cache module.

use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Fibonacci over dense indices
struct Fibonacci;

impl DpProblem<usize, u64> for Fibonacci {
    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
    }

    fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
        if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
    }
}

/// Collatz chain length over sparse indices
struct Collatz;

impl DpProblem<u64, u64> for Collatz {
    fn deps(&self, n: &u64) -> Vec<u64> {
        if *n <= 1 {
            vec![]
        } else if n % 2 == 0 {
            vec![n / 2]
        } else {
            vec![3 * n + 1]
        }
    }

    fn compute(&self, _n: &u64, deps: Vec<u64>) -> u64 {
        deps.first().map_or(0, |d| d + 1)
    }
}

#[test]
fn test_fibonacci_linear_dependency_chain() {
    let cache = DpCache::with_problem(VecBackend::new(), Fibonacci);

    assert_eq!(cache.get(&0), 0);
    assert_eq!(cache.get(&1), 1);
    assert_eq!(cache.get(&2), 1);
    assert_eq!(cache.get(&10), 55);
    assert_eq!(cache.get(&90), 2880067194370816120);
}

#[test]
fn test_collatz_known_values() {
    let cache = DpCache::with_problem(HashMapBackend::new(), Collatz);

    assert_eq!(cache.get(&1), 0);
    assert_eq!(cache.get(&6), 8);
    assert_eq!(cache.get(&27), 111);

    // 27's chain passes through 6's chain, everything visited is cached
    let backend = cache.into_backend();
    assert!(backend.len() > 111);
}

#[test]
fn test_diamond_dependency_memoization() {
    // A(0) depends on B(1) and C(2), both depend on D(3)
    struct Diamond {
        count: Rc<Cell<i32>>,
    }

    impl DpProblem<usize, i32> for Diamond {
        fn deps(&self, n: &usize) -> Vec<usize> {
            match *n {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            }
        }

        fn compute(&self, n: &usize, deps: Vec<i32>) -> i32 {
            self.count.set(self.count.get() + 1);
            match *n {
                0 => deps[0] + deps[1],
                1 => deps[0] * 2,
                2 => deps[0] * 3,
                _ => 10,
            }
        }
    }

    let count = Rc::new(Cell::new(0));
    let cache = DpCache::with_problem(VecBackend::new(), Diamond { count: count.clone() });

    assert_eq!(cache.get(&0), 50);
    assert_eq!(count.get(), 4);

    let _ = cache.get(&0);
    assert_eq!(count.get(), 4);
}

#[test]
fn test_closure_problem() {
    let cache = DpCache::new(
        HashMapBackend::new(),
        |s: &String| {
            if s.is_empty() { vec![] } else { vec![s[1..].to_string()] }
        },
        |s: &String, deps: Vec<usize>| usize::from(s.starts_with('a')) + deps.first().copied().unwrap_or(0),
    );

    assert_eq!(cache.get(&"banana".to_string()), 3);
    assert_eq!(cache.get(&String::new()), 0);
}

#[test]
fn test_vec_backend_get_or_insert() {
    let mut backend: VecBackend<i32> = VecBackend::with_capacity(4);

    assert_eq!(*backend.get_or_insert(5, || 42), 42);
    assert_eq!(*backend.get_or_insert(5, || 999), 42);
    assert_eq!(backend.get(&5), Some(&42));
    assert_eq!(backend.get(&3), None);
    assert_eq!(backend.get(&10), None);
}

#[test]
fn test_hashmap_backend_get_or_insert() {
    let mut backend: HashMapBackend<(u64, u8), u64> = HashMapBackend::default();

    assert!(backend.is_empty());
    assert_eq!(*backend.get_or_insert((125, 3), || 7), 7);
    assert_eq!(*backend.get_or_insert((125, 3), || 0), 7);
    assert_eq!(backend.get(&(125, 4)), None);
    assert_eq!(backend.len(), 1);
}
