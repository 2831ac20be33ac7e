//! 2D/3D Cartesian coordinates and grid directions

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A point (or offset) on the integer plane
///
/// On puzzle grids `x` is the column and `y` the row, growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point2 {
    pub x: i64,
    pub y: i64,
}

impl Point2 {
    pub const ORIGIN: Point2 = Point2 { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Taxicab distance
    pub fn manhattan(self, other: Point2) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Component-wise signum, useful for single-step moves towards a target
    pub fn signum(self) -> Point2 {
        Point2::new(self.x.signum(), self.y.signum())
    }

    /// Chebyshev (king-move) distance
    pub fn chebyshev(self, other: Point2) -> i64 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Orthogonal neighbours in `Direction::ALL` order
    pub fn neighbors4(self) -> [Point2; 4] {
        Direction::ALL.map(|dir| self + dir.offset())
    }

    /// Orthogonal and diagonal neighbours
    pub fn neighbors8(self) -> impl Iterator<Item = Point2> {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| Point2::new(dx, dy)))
            .filter(|offset| *offset != Point2::ORIGIN)
            .map(move |offset| self + offset)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// A point in integer space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point3 {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Point3 {
    pub const ORIGIN: Point3 = Point3 { x: 0, y: 0, z: 0 };

    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    pub fn manhattan(self, other: Point3) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs()
    }

    /// Face-adjacent neighbours
    pub fn neighbors6(self) -> [Point3; 6] {
        [
            Point3::new(1, 0, 0),
            Point3::new(-1, 0, 0),
            Point3::new(0, 1, 0),
            Point3::new(0, -1, 0),
            Point3::new(0, 0, 1),
            Point3::new(0, 0, -1),
        ]
        .map(|offset| self + offset)
    }

    /// Component-wise minimum
    pub fn component_min(self, other: Point3) -> Point3 {
        Point3::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum
    pub fn component_max(self, other: Point3) -> Point3 {
        Point3::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

macro_rules! impl_point_ops {
    ($point:ident { $($field:ident),+ }) => {
        impl Add for $point {
            type Output = $point;

            fn add(self, rhs: $point) -> $point {
                $point { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl Sub for $point {
            type Output = $point;

            fn sub(self, rhs: $point) -> $point {
                $point { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl Neg for $point {
            type Output = $point;

            fn neg(self) -> $point {
                $point { $($field: -self.$field),+ }
            }
        }

        impl Mul<i64> for $point {
            type Output = $point;

            fn mul(self, rhs: i64) -> $point {
                $point { $($field: self.$field * rhs),+ }
            }
        }

        impl AddAssign for $point {
            fn add_assign(&mut self, rhs: $point) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl SubAssign for $point {
            fn sub_assign(&mut self, rhs: $point) {
                $(self.$field -= rhs.$field;)+
            }
        }
    };
}

impl_point_ops!(Point2 { x, y });
impl_point_ops!(Point3 { x, y, z });

/// One of the four grid directions, clockwise from `Up`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit step with y growing downwards
    pub const fn offset(self) -> Point2 {
        match self {
            Direction::Up => Point2::new(0, -1),
            Direction::Right => Point2::new(1, 0),
            Direction::Down => Point2::new(0, 1),
            Direction::Left => Point2::new(-1, 0),
        }
    }

    pub const fn turn_right(self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    pub const fn turn_left(self) -> Direction {
        match self {
            Direction::Up => Direction::Left,
            Direction::Right => Direction::Up,
            Direction::Down => Direction::Right,
            Direction::Left => Direction::Down,
        }
    }

    pub const fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Position in `ALL`, handy for per-direction bit sets
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parse `U/R/D/L` or the arrow characters `^>v<`
    pub fn from_byte(byte: u8) -> Option<Direction> {
        match byte {
            b'U' | b'^' => Some(Direction::Up),
            b'R' | b'>' => Some(Direction::Right),
            b'D' | b'v' => Some(Direction::Down),
            b'L' | b'<' => Some(Direction::Left),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_turns_cycle() {
        for dir in Direction::ALL {
            assert_eq!(dir.turn_right().turn_left(), dir);
            assert_eq!(dir.turn_right().turn_right(), dir.reverse());
            assert_eq!(dir.offset() + dir.reverse().offset(), Point2::ORIGIN);
        }
        assert_eq!(Direction::Up.turn_right(), Direction::Right);
    }

    #[test]
    fn test_neighbors() {
        let p = Point2::new(3, 4);
        assert_eq!(
            p.neighbors4(),
            [
                Point2::new(3, 3),
                Point2::new(4, 4),
                Point2::new(3, 5),
                Point2::new(2, 4)
            ]
        );
        assert_eq!(p.neighbors8().count(), 8);
        assert!(p.neighbors8().all(|n| n.chebyshev(p) == 1));
        assert!(Point3::ORIGIN.neighbors6().iter().all(|n| n.manhattan(Point3::ORIGIN) == 1));
    }

    #[test]
    fn test_from_byte() {
        assert_eq!(Direction::from_byte(b'^'), Some(Direction::Up));
        assert_eq!(Direction::from_byte(b'L'), Some(Direction::Left));
        assert_eq!(Direction::from_byte(b'x'), None);
    }

    proptest! {
        #[test]
        fn prop_manhattan_is_translation_invariant(
            ax in -1000i64..1000, ay in -1000i64..1000,
            bx in -1000i64..1000, by in -1000i64..1000,
            tx in -1000i64..1000, ty in -1000i64..1000,
        ) {
            let (a, b, t) = (Point2::new(ax, ay), Point2::new(bx, by), Point2::new(tx, ty));
            prop_assert_eq!(a.manhattan(b), (a + t).manhattan(b + t));
            prop_assert_eq!(a.manhattan(b), b.manhattan(a));
            prop_assert_eq!(a - b + b, a);
        }

        #[test]
        fn prop_point3_scaling(x in -100i64..100, y in -100i64..100, z in -100i64..100, k in -10i64..10) {
            let p = Point3::new(x, y, z);
            prop_assert_eq!((p * k).manhattan(Point3::ORIGIN), p.manhattan(Point3::ORIGIN) * k.abs());
            prop_assert_eq!(p + -p, Point3::ORIGIN);
        }
    }
}
