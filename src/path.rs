use crate::coord::Coord;
use crate::piece::Move;

/// One played move and the square it landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    pub mv: Move,
    pub to: Coord,
}

impl PathStep {
    #[inline]
    pub const fn new(mv: Move, to: Coord) -> Self {
        Self { mv, to }
    }
}

/// An ordered move sequence; step order is play order.
///
/// Paths are grown only inside the search; callers receive them fully built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Moves played so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[inline]
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    #[inline]
    pub fn last(&self) -> Option<&PathStep> {
        self.steps.last()
    }

    #[inline]
    pub(crate) fn push(&mut self, step: PathStep) {
        self.steps.push(step);
    }
}
