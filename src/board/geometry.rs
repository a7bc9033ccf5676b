//! Grid geometry primitives.
//!
//! Positions are signed so that windows centered near an edge may extend
//! past it; the board clips them when iterating. All area iteration is
//! row-major ascending (rows outer, columns inner), which is the scan
//! order every "first found" tie-break in the crate relies on.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A grid position, addressed as `(col, row)`.
///
/// Equality and hashing are by value; positions are used as list elements
/// where enumeration order is observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub col: i32,
    pub row: i32,
}

impl Pos {
    pub const fn new(col: i32, row: i32) -> Self {
        Pos { col, row }
    }

    /// Chebyshev distance: `max(|Δcol|, |Δrow|)`.
    pub fn chebyshev_distance(self, other: Pos) -> i32 {
        (self.col - other.col)
            .abs()
            .max((self.row - other.row).abs())
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// An axis-aligned rectangle with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub min: Pos,
    pub max: Pos,
}

impl Rect {
    pub const fn new(min: Pos, max: Pos) -> Self {
        Rect { min, max }
    }

    /// The square window of the given half-width around `center`.
    ///
    /// `half_width` 1 yields the 3x3 neighborhood, 2 the 5x5 window, etc.
    /// The window is not clipped here; callers iterate it through the
    /// board, which skips out-of-bounds positions.
    pub const fn centered(center: Pos, half_width: i32) -> Self {
        Rect {
            min: Pos::new(center.col - half_width, center.row - half_width),
            max: Pos::new(center.col + half_width, center.row + half_width),
        }
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.col >= self.min.col
            && pos.col <= self.max.col
            && pos.row >= self.min.row
            && pos.row <= self.max.row
    }

    /// Iterates every position in the rectangle in row-major ascending
    /// order: rows outer, columns inner, both ascending.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (self.min.row..=self.max.row)
            .flat_map(move |row| (self.min.col..=self.max.col).map(move |col| Pos::new(col, row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chebyshev_adjacent_is_one() {
        let center = Pos::new(3, 3);
        for col in 2..=4 {
            for row in 2..=4 {
                let p = Pos::new(col, row);
                if p == center {
                    continue;
                }
                assert_eq!(center.chebyshev_distance(p), 1);
            }
        }
    }

    #[test]
    fn chebyshev_is_max_of_deltas() {
        assert_eq!(Pos::new(0, 0).chebyshev_distance(Pos::new(2, 1)), 2);
        assert_eq!(Pos::new(0, 0).chebyshev_distance(Pos::new(1, 4)), 4);
        assert_eq!(Pos::new(5, 5).chebyshev_distance(Pos::new(5, 5)), 0);
    }

    #[test]
    fn chebyshev_is_symmetric() {
        let a = Pos::new(1, 6);
        let b = Pos::new(4, 2);
        assert_eq!(a.chebyshev_distance(b), b.chebyshev_distance(a));
    }

    #[test]
    fn centered_window_bounds() {
        let r = Rect::centered(Pos::new(3, 3), 2);
        assert_eq!(r.min, Pos::new(1, 1));
        assert_eq!(r.max, Pos::new(5, 5));
    }

    #[test]
    fn centered_window_may_extend_past_origin() {
        let r = Rect::centered(Pos::new(0, 0), 1);
        assert_eq!(r.min, Pos::new(-1, -1));
        assert_eq!(r.max, Pos::new(1, 1));
    }

    #[test]
    fn positions_are_row_major_ascending() {
        let r = Rect::new(Pos::new(1, 1), Pos::new(2, 2));
        let all: Vec<Pos> = r.positions().collect();
        assert_eq!(
            all,
            vec![
                Pos::new(1, 1),
                Pos::new(2, 1),
                Pos::new(1, 2),
                Pos::new(2, 2),
            ]
        );
    }

    #[test]
    fn contains_inclusive_bounds() {
        let r = Rect::new(Pos::new(0, 0), Pos::new(6, 6));
        assert!(r.contains(Pos::new(0, 0)));
        assert!(r.contains(Pos::new(6, 6)));
        assert!(!r.contains(Pos::new(7, 0)));
        assert!(!r.contains(Pos::new(0, -1)));
    }
}
