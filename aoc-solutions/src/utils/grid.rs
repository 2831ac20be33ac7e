//! Rectangular character grids addressed by [`Point2`]

use super::coord::Point2;
use aoc_solver::ParseError;
use std::ops::{Index, IndexMut};

/// Row-major rectangular grid, `x` is the column and `y` the row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Grid of the given size with every cell set to `fill`
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }
}

impl<T> Grid<T> {
    /// Parse one row per line, mapping each byte with `cell`
    ///
    /// Rejects empty input, ragged rows, and bytes `cell` refuses.
    pub fn parse_with(input: &str, mut cell: impl FnMut(u8) -> Option<T>) -> Result<Self, ParseError> {
        let mut width = None;
        let mut cells = Vec::new();
        let mut height = 0;

        let rows = input
            .trim_end()
            .lines()
            .enumerate()
            .skip_while(|(_, line)| line.trim().is_empty());
        for (line_idx, line) in rows {
            let line = line.trim_end();
            match width {
                None => width = Some(line.len()),
                Some(w) if w != line.len() => {
                    return Err(ParseError::at_line(
                        line_idx,
                        format!("expected {} columns, found {}", w, line.len()),
                    ));
                }
                Some(_) => {}
            }
            for byte in line.bytes() {
                let value = cell(byte).ok_or_else(|| {
                    ParseError::at_line(line_idx, format!("unexpected character {:?}", byte as char))
                })?;
                cells.push(value);
            }
            height += 1;
        }

        match width {
            Some(width) if width > 0 => Ok(Self { width, height, cells }),
            _ => Err(ParseError::MissingData("empty grid".into())),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, p: Point2) -> bool {
        (0..self.width as i64).contains(&p.x) && (0..self.height as i64).contains(&p.y)
    }

    fn offset(&self, p: Point2) -> Option<usize> {
        self.contains(p)
            .then(|| p.y as usize * self.width + p.x as usize)
    }

    pub fn get(&self, p: Point2) -> Option<&T> {
        self.offset(p).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, p: Point2) -> Option<&mut T> {
        self.offset(p).map(|i| &mut self.cells[i])
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Point2> + use<T> {
        let (width, height) = (self.width as i64, self.height as i64);
        (0..height).flat_map(move |y| (0..width).map(move |x| Point2::new(x, y)))
    }

    /// Positions paired with their cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Point2, &T)> {
        self.positions().zip(self.cells.iter())
    }

    /// First position (row-major) whose cell satisfies `pred`
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Point2> {
        self.iter().find(|(_, cell)| pred(cell)).map(|(p, _)| p)
    }

    /// Rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.width)
    }

    /// Apply `f` to every cell, keeping the shape
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl Grid<u8> {
    /// Parse a grid of raw bytes, accepting any character
    pub fn parse_bytes(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, Some)
    }
}

impl<T> Index<Point2> for Grid<T> {
    type Output = T;

    fn index(&self, p: Point2) -> &T {
        match self.offset(p) {
            Some(i) => &self.cells[i],
            None => panic!("{} outside {}x{} grid", p, self.width, self.height),
        }
    }
}

impl<T> IndexMut<Point2> for Grid<T> {
    fn index_mut(&mut self, p: Point2) -> &mut T {
        let (width, height) = (self.width, self.height);
        match self.offset(p) {
            Some(i) => &mut self.cells[i],
            None => panic!("{} outside {}x{} grid", p, width, height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_index() {
        let grid = Grid::parse_with("12\n34\n56\n", |b| (b as char).to_digit(10)).unwrap();

        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid[Point2::new(1, 2)], 6);
        assert_eq!(grid.get(Point2::new(2, 0)), None);
        assert_eq!(grid.get(Point2::new(0, -1)), None);
        assert_eq!(grid.find(|&d| d == 4), Some(Point2::new(1, 1)));
        assert_eq!(grid.positions().count(), 6);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Grid::parse_bytes("abc\nab\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));

        let err = Grid::parse_bytes("\n\nabc\nab\n").unwrap_err();
        assert!(err.to_string().contains("(line 4)"), "{}", err);
    }

    #[test]
    fn test_unknown_cell_rejected() {
        assert!(Grid::parse_with("..#\n.x.", |b| match b {
            b'.' => Some(false),
            b'#' => Some(true),
            _ => None,
        })
        .is_err());
    }

    #[test]
    fn test_mutation_and_map() {
        let mut grid = Grid::new(3, 2, 0u32);
        grid[Point2::new(2, 1)] = 7;
        *grid.get_mut(Point2::new(0, 0)).unwrap() += 1;

        let doubled = grid.map(|v| v * 2);
        assert_eq!(doubled.rows().collect::<Vec<_>>(), vec![&[2, 0, 0][..], &[0, 0, 14][..]]);
    }
}
