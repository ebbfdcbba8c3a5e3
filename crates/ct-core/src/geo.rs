//! Grid coordinates and movement offsets.
//!
//! Points are signed so that `point + offset` can step outside the grid and
//! be rejected by a bounds check instead of wrapping.  The grid is a wall on
//! all four sides: nothing in this crate or above ever wraps a coordinate.

use std::fmt;
use std::ops::Add;

/// A cell coordinate on the square grid.  In-bounds iff both components lie
/// in `[0, size)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `true` if the point lies inside an `size × size` grid.
    #[inline]
    pub fn in_bounds(self, size: usize) -> bool {
        let size = size as i64;
        (0..size).contains(&(self.x as i64)) && (0..size).contains(&(self.y as i64))
    }

    /// Point for a flat cell index, column-major (`x = index / size`,
    /// `y = index % size`).  Used by the initial placement sampler.
    #[inline]
    pub fn from_cell_index(index: usize, size: usize) -> Self {
        Self::new((index / size) as i32, (index % size) as i32)
    }
}

impl Add<Offset> for GridPoint {
    type Output = GridPoint;
    #[inline]
    fn add(self, rhs: Offset) -> GridPoint {
        GridPoint::new(self.x + rhs.dx as i32, self.y + rhs.dy as i32)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A single-step displacement with both components in `{-1, 0, 1}`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub dx: i8,
    pub dy: i8,
}

impl Offset {
    pub const STAY: Offset = Offset { dx: 0, dy: 0 };

    #[inline]
    pub const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }

    #[inline]
    pub fn is_stay(self) -> bool {
        self == Offset::STAY
    }
}

/// The nine candidate moves (eight neighbors plus stay), enumerated
/// `dx`-major from `(-1, -1)` to `(1, 1)`.
pub const MOVEMENTS: [Offset; 9] = [
    Offset::new(-1, -1),
    Offset::new(-1, 0),
    Offset::new(-1, 1),
    Offset::new(0, -1),
    Offset::new(0, 0),
    Offset::new(0, 1),
    Offset::new(1, -1),
    Offset::new(1, 0),
    Offset::new(1, 1),
];
