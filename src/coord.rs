use std::ops::{Add, Sub};

/// A square on the unbounded board. Equality is component-wise; there is no
/// grid edge to clip against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// True iff both components lie in `-bound..=bound`.
    ///
    /// Written without `abs` so it is total over all of `i64`.
    #[inline]
    pub fn in_linf_bound(self, bound: i64) -> bool {
        -bound <= self.x && self.x <= bound && -bound <= self.y && self.y <= bound
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Self::Output {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}
