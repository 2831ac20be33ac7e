use std::collections::HashMap;

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2023, day = 25, tags = ["2023", "graph", "randomized"])]
pub struct Solver;

const CUT_SIZE: usize = 3;
const MAX_ATTEMPTS: usize = 100_000;
const SEED: u64 = 0x2023_1225;

#[derive(Debug)]
pub struct Wiring {
    components: usize,
    edges: Vec<(usize, usize)>,
}

impl AocParser for Solver {
    type SharedData<'a> = Wiring;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut ids: HashMap<&str, usize> = HashMap::new();
        let mut edges = Vec::new();
        for (line_idx, line) in input.trim_end().lines().enumerate() {
            let (name, others) = line
                .split_once(':')
                .ok_or_else(|| ParseError::at_line(line_idx, "expected `name: other ...`"))?;
            let next_id = ids.len();
            let from = *ids.entry(name.trim()).or_insert(next_id);
            for other in others.split_whitespace() {
                let next_id = ids.len();
                let to = *ids.entry(other).or_insert(next_id);
                edges.push((from, to));
            }
        }
        Ok(Wiring {
            components: ids.len(),
            edges,
        })
    }
}

/// Disjoint-set forest with path halving and union by size
struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut a, mut b) = (self.find(a), self.find(b));
        if a == b {
            return false;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
        true
    }
}

/// One run of Karger's contraction: merge random edges until two groups remain
///
/// Returns the cut size and the size of one group.
fn contract(wiring: &Wiring, order: &[usize]) -> (usize, usize) {
    let mut groups = DisjointSet::new(wiring.components);
    let mut remaining = wiring.components;
    for &e in order {
        if remaining == 2 {
            break;
        }
        let (a, b) = wiring.edges[e];
        if groups.union(a, b) {
            remaining -= 1;
        }
    }
    let cut = wiring
        .edges
        .iter()
        .filter(|&&(a, b)| groups.find(a) != groups.find(b))
        .count();
    let root = groups.find(0);
    (cut, groups.size[root])
}

/// Product of the two group sizes after removing a `cut_size`-edge cut
fn split_product(wiring: &Wiring, cut_size: usize, seed: u64) -> Option<usize> {
    if wiring.components < 2 {
        return None;
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut order: Vec<usize> = (0..wiring.edges.len()).collect();
    for _ in 0..MAX_ATTEMPTS {
        order.shuffle(&mut rng);
        let (cut, group) = contract(wiring, &order);
        if cut == cut_size {
            return Some(group * (wiring.components - group));
        }
    }
    None
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        split_product(shared, CUT_SIZE, SEED)
            .map(|product| product.to_string())
            .ok_or_else(|| SolveError::NoSolution(format!("no cut of {} wires found", CUT_SIZE)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "jqt: rhn xhk nvd
rsh: frs pzl lsr
xhk: hfx
cmg: qnr nvd lhk bvb
rhn: xhk bvb hfx
bvb: xhk hfx
pzl: lsr hfx nvd
qnr: nvd
ntq: jqt hfx bvb xhk
nvd: lhk
lsr: lhk
rzs: qnr cmg lsr rsh
frs: qnr lhk lsr
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.components, 15);
        assert_eq!(shared.edges.len(), 33);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "54");
    }

    #[test]
    fn test_any_seed_finds_the_cut() {
        let wiring = Solver::parse(EXAMPLE).unwrap();
        for seed in 0..5 {
            assert_eq!(split_product(&wiring, CUT_SIZE, seed), Some(54));
        }
    }

    #[test]
    fn test_single_component() {
        let wiring = Solver::parse("aaa: bbb\n").unwrap();
        assert_eq!(split_product(&wiring, CUT_SIZE, SEED), None);
    }
}
