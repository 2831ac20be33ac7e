use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 9, tags = ["2024", "simulation"])]
pub struct Solver;

/// A contiguous run of blocks on the disk
#[derive(Debug, Clone, Copy)]
pub struct Span {
    start: usize,
    len: usize,
}

#[derive(Debug)]
pub struct DiskMap {
    /// Indexed by file id
    files: Vec<Span>,
    free: Vec<Span>,
}

impl AocParser for Solver {
    type SharedData<'a> = DiskMap;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (mut files, mut free) = (Vec::new(), Vec::new());
        let mut start = 0;
        for (i, b) in input.trim_end().bytes().enumerate() {
            if !b.is_ascii_digit() {
                return Err(ParseError::at_line(
                    0,
                    format!("unexpected {:?} in column {}", b as char, i + 1),
                ));
            }
            let span = Span {
                start,
                len: (b - b'0') as usize,
            };
            if i % 2 == 0 {
                files.push(span);
            } else {
                free.push(span);
            }
            start += span.len;
        }
        Ok(DiskMap { files, free })
    }
}

impl DiskMap {
    /// Block-level layout, `None` for free blocks
    fn blocks(&self) -> Vec<Option<usize>> {
        let size = self
            .files
            .iter()
            .chain(&self.free)
            .map(|s| s.start + s.len)
            .max()
            .unwrap_or(0);
        let mut blocks = vec![None; size];
        for (id, file) in self.files.iter().enumerate() {
            blocks[file.start..file.start + file.len].fill(Some(id));
        }
        blocks
    }
}

fn checksum(files: &[Span]) -> usize {
    files
        .iter()
        .enumerate()
        .map(|(id, f)| id * (f.start..f.start + f.len).sum::<usize>())
        .sum()
}

/// Move single blocks from the end into the leftmost gaps
fn compact_blocks(disk: &DiskMap) -> usize {
    let mut blocks = disk.blocks();
    let (mut left, mut right) = (0, blocks.len());
    loop {
        while left < right && blocks[left].is_some() {
            left += 1;
        }
        while right > left && blocks[right - 1].is_none() {
            right -= 1;
        }
        if right <= left + 1 {
            break;
        }
        blocks.swap(left, right - 1);
    }
    blocks
        .iter()
        .enumerate()
        .filter_map(|(pos, id)| id.map(|id| pos * id))
        .sum()
}

/// Move whole files, highest id first, into the leftmost gap that fits
fn compact_files(disk: &DiskMap) -> usize {
    let mut files = disk.files.clone();
    let mut free = disk.free.clone();
    for file in files.iter_mut().rev() {
        let gap = free
            .iter_mut()
            .take_while(|gap| gap.start < file.start)
            .find(|gap| gap.len >= file.len);
        if let Some(gap) = gap {
            file.start = gap.start;
            gap.start += file.len;
            gap.len -= file.len;
        }
    }
    checksum(&files)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(compact_blocks(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(compact_files(shared).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_example() {
        let mut shared = Solver::parse("2333133121414131402\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1928");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "2858");
    }

    #[test]
    fn test_small_map() {
        // 0..111....22222 -> 022111222
        let mut shared = Solver::parse("12345").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "60");
    }

    #[test]
    fn test_rejects_non_digits() {
        let err = Solver::parse("12a4").unwrap_err();
        assert!(err.to_string().contains("(line 1)"), "{}", err);
        assert!(err.to_string().contains("column 3"), "{}", err);
    }
}
