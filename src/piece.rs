use std::fmt;

use crate::coord::Coord;

/// The eight knight moves as first-class values.
///
/// [`Move::ALL`] fixes the enumeration order; searches visit moves in this
/// order, which decides which of several equally short paths is discovered
/// first (never the minimal length itself).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    UpRight,
    RightUp,
    RightDown,
    DownRight,
    DownLeft,
    LeftDown,
    LeftUp,
    UpLeft,
}

impl Move {
    pub const ALL: [Move; 8] = [
        Move::UpRight,
        Move::RightUp,
        Move::RightDown,
        Move::DownRight,
        Move::DownLeft,
        Move::LeftDown,
        Move::LeftUp,
        Move::UpLeft,
    ];

    #[inline]
    pub const fn delta(self) -> Coord {
        match self {
            Move::UpRight => Coord::new(1, 2),
            Move::RightUp => Coord::new(2, 1),
            Move::RightDown => Coord::new(2, -1),
            Move::DownRight => Coord::new(1, -2),
            Move::DownLeft => Coord::new(-1, -2),
            Move::LeftDown => Coord::new(-2, -1),
            Move::LeftUp => Coord::new(-2, 1),
            Move::UpLeft => Coord::new(-1, 2),
        }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Move::UpRight => "up-right",
            Move::RightUp => "right-up",
            Move::RightDown => "right-down",
            Move::DownRight => "down-right",
            Move::DownLeft => "down-left",
            Move::LeftDown => "left-down",
            Move::LeftUp => "left-up",
            Move::UpLeft => "up-left",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Knight,
}

impl PieceKind {
    /// Move surface for the kind, in canonical enumeration order.
    #[inline]
    pub fn moves(self) -> &'static [Move] {
        match self {
            PieceKind::Knight => &Move::ALL,
        }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Knight => "knight",
        }
    }
}

/// A piece standing on a square.
///
/// Applying a move yields a new value; existing values are never mutated, so
/// sibling search branches cannot observe each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    at: Coord,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, at: Coord) -> Self {
        Self { kind, at }
    }

    #[inline]
    pub fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn coord(self) -> Coord {
        self.at
    }

    #[inline]
    pub fn is_at(self, target: Coord) -> bool {
        self.at == target
    }

    #[inline]
    pub fn moves(self) -> &'static [Move] {
        self.kind.moves()
    }

    /// The piece after playing `mv`. Every [`Move`] is a member of the move
    /// surface, so application is total.
    #[inline]
    pub fn apply(self, mv: Move) -> Piece {
        Piece {
            kind: self.kind,
            at: self.at + mv.delta(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_table_holds_the_eight_distinct_knight_deltas() {
        assert_eq!(Move::ALL.len(), 8);
        for &mv in &Move::ALL {
            let d = mv.delta();
            let (ax, ay) = (d.x.abs(), d.y.abs());
            assert!((ax == 1 && ay == 2) || (ax == 2 && ay == 1));
        }
        for (i, a) in Move::ALL.iter().enumerate() {
            for b in &Move::ALL[i + 1..] {
                assert_ne!(a.delta(), b.delta());
            }
        }
    }

    #[test]
    fn apply_advances_a_copy_and_leaves_the_receiver_alone() {
        let knight = Piece::new(PieceKind::Knight, Coord::new(3, -7));
        let moved = knight.apply(Move::LeftDown);
        assert_eq!(moved.coord(), Coord::new(1, -8));
        assert_eq!(knight.coord(), Coord::new(3, -7));
        assert_eq!(moved.kind(), PieceKind::Knight);
    }
}
