use std::collections::{BTreeSet, HashMap, HashSet};

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 23, tags = ["2024", "graph", "clique"])]
pub struct Solver;

/// Undirected computer network keyed by name
#[derive(Debug, Default)]
pub struct Network<'a> {
    links: HashMap<&'a str, HashSet<&'a str>>,
}

impl AocParser for Solver {
    type SharedData<'a> = Network<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut network = Network::default();
        for (line_idx, line) in input.trim_end().lines().enumerate() {
            let (a, b) = line
                .trim()
                .split_once('-')
                .ok_or_else(|| ParseError::at_line(line_idx, "expected `a-b`"))?;
            network.links.entry(a).or_default().insert(b);
            network.links.entry(b).or_default().insert(a);
        }
        Ok(network)
    }
}

impl<'a> Network<'a> {
    fn neighbors(&self, name: &'a str) -> impl Iterator<Item = &'a str> + '_ {
        self.links.get(name).into_iter().flatten().copied()
    }

    fn linked(&self, a: &str, b: &str) -> bool {
        self.links.get(a).is_some_and(|n| n.contains(b))
    }

    /// Sets of three mutually linked computers, each as a sorted triple
    fn triangles(&self) -> HashSet<[&'a str; 3]> {
        let mut found = HashSet::new();
        for (&a, neighbors) in &self.links {
            for (&b, &c) in neighbors.iter().tuple_combinations() {
                if self.linked(b, c) {
                    let mut triple = [a, b, c];
                    triple.sort_unstable();
                    found.insert(triple);
                }
            }
        }
        found
    }

    /// Bron–Kerbosch with pivoting, keeping the largest clique seen
    fn expand(
        &self,
        clique: &mut Vec<&'a str>,
        mut candidates: HashSet<&'a str>,
        mut excluded: HashSet<&'a str>,
        best: &mut Vec<&'a str>,
    ) {
        if candidates.is_empty() && excluded.is_empty() {
            if clique.len() > best.len() {
                best.clone_from(clique);
            }
            return;
        }
        let pivot = candidates
            .iter()
            .chain(&excluded)
            .copied()
            .max_by_key(|&v| self.neighbors(v).filter(|n| candidates.contains(n)).count());
        let Some(pivot) = pivot else { return };

        let branches: Vec<&'a str> = candidates
            .iter()
            .copied()
            .filter(|v| !self.linked(pivot, v))
            .collect();
        for v in branches {
            let keep = |set: &HashSet<&'a str>| -> HashSet<&'a str> {
                self.neighbors(v).filter(|n| set.contains(n)).collect()
            };
            clique.push(v);
            self.expand(clique, keep(&candidates), keep(&excluded), best);
            clique.pop();
            candidates.remove(v);
            excluded.insert(v);
        }
    }

    fn maximum_clique(&self) -> Vec<&'a str> {
        let mut best = Vec::new();
        self.expand(
            &mut Vec::new(),
            self.links.keys().copied().collect(),
            HashSet::new(),
            &mut best,
        );
        best
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared
            .triangles()
            .iter()
            .filter(|triple| triple.iter().any(|name| name.starts_with('t')))
            .count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let password: BTreeSet<&str> = shared.maximum_clique().into_iter().collect();
        if password.is_empty() {
            return Err(SolveError::NoSolution("empty network".into()));
        }
        Ok(password.into_iter().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
kh-tc
qp-kh
de-cg
ka-co
yn-aq
qp-ub
cg-tb
vc-aq
tb-ka
wh-tc
yn-cg
kh-ub
ta-co
de-co
tc-td
tb-wq
wh-td
ta-ka
td-qp
aq-cg
wq-ub
ub-vc
de-ta
wq-aq
wq-vc
wh-yn
ka-de
kh-ta
co-tc
wh-qp
tb-vc
td-yn
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.triangles().len(), 12);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "7");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "co,de,ka,ta");
    }

    #[test]
    fn test_single_link() {
        let mut shared = Solver::parse("ab-cd\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "ab,cd");
    }
}
