//! Reachable-square census over a piece's move set.
//!
//! Counts how many new squares the piece can stand on after each ply,
//! breadth-first on the unbounded board. A cross-check surface for the move
//! table, independent of the path searcher.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::piece::Piece;
use crate::search::{bump_nodes, check_piece, SearchCounts, SearchError, SearchLimits};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReachCounts {
    /// Squares first reached at ply `i + 1`.
    pub per_ply: Vec<u64>,
    /// Squares reached within the requested plies, start square excluded.
    pub total: u64,
}

/// Census of squares newly reachable per ply.
///
/// The node budget counts inserted squares; the unbounded board offers no
/// other bound on the frontier.
pub fn count_reachable(
    piece: Piece,
    plies: u32,
    limits: SearchLimits,
) -> Result<ReachCounts, SearchError> {
    check_piece(&piece)?;

    let mut counts = SearchCounts::default();

    let mut seen: FxHashSet<Coord> = FxHashSet::default();
    seen.insert(piece.coord());

    // Growth tracks completed plies; the requested count is never reserved
    // up front, so an oversized request dies on the node budget.
    let mut frontier: Vec<Piece> = vec![piece];
    let mut per_ply: Vec<u64> = Vec::new();
    let mut total: u64 = 0;

    for _ in 0..plies {
        let mut next: Vec<Piece> = Vec::new();
        for p in frontier {
            for &mv in p.moves() {
                let moved = p.apply(mv);
                if seen.insert(moved.coord()) {
                    bump_nodes("reach_census", limits, &mut counts)?;
                    next.push(moved);
                }
            }
        }
        per_ply.push(next.len() as u64);
        total += next.len() as u64;
        frontier = next;
    }

    Ok(ReachCounts { per_ply, total })
}
