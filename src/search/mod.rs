//! Search layer: configuration, budgets, outcomes, and errors.
//!
//! The searcher itself lives in [`bestpath`]; this module owns the contract
//! around it:
//! - explicit move/node budgets ([`SearchConfig`], [`SearchLimits`])
//! - running counters reported with every result ([`SearchCounts`])
//! - the three-way result ([`SearchOutcome`]): "already there" and "no
//!   solution within budget" are regular outcomes, never errors
//! - structured errors ([`SearchError`]) for contract violations and budget
//!   overruns, raised before or during recursion and never caught internally

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::path::Path;
use crate::piece::Piece;

pub mod bestpath;
pub mod drift;
pub mod reach;
pub mod trace;

/// Coordinate magnitude accepted for start and target squares.
///
/// A quarter of the `i64` domain: a search can walk at most two units per
/// move away from its start, so positions stay clear of overflow for any
/// admissible budget, and the heuristic's absolute-value arithmetic is safe.
pub const COORD_LIMIT: i64 = i64::MAX / 4;

/// Largest admissible move budget; recursion depth is bounded by it.
pub const MAX_MOVE_BUDGET: usize = 64;

#[derive(Debug, Clone, Copy)]
/// Node budget bounding a single search call.
pub struct SearchLimits {
    /// Recursive entries admitted before the search is abandoned.
    pub max_nodes: u64,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_nodes: 50_000_000,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Running counters tracked during a search.
pub struct SearchCounts {
    pub nodes: u64,
    pub budget_cutoffs: u64,
    pub drift_cutoffs: u64,
    pub paths_found: u64,
}

#[derive(Debug, Clone, Copy)]
/// A complete search configuration.
pub struct SearchConfig {
    /// Inclusive upper bound on path length. Positive.
    pub max_moves: usize,
    /// Sample count for the drift heuristic (see [`drift::is_drifting_away`]).
    pub drift_window: usize,
    pub limits: SearchLimits,
}

impl SearchConfig {
    pub fn new(max_moves: usize) -> Self {
        assert!(max_moves >= 1);
        assert!(max_moves <= MAX_MOVE_BUDGET);
        Self {
            max_moves,
            drift_window: 3,
            limits: SearchLimits::default(),
        }
    }

    pub fn with_drift_window(mut self, window: usize) -> Self {
        assert!(window >= 1);
        self.drift_window = window;
        self
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of a best-path search.
pub enum SearchOutcome {
    /// The piece already stands on the target; zero moves needed.
    AlreadyThere,
    /// The shortest path discovered within the move budget.
    Found(Path),
    /// No path of admissible length reached the target.
    NoSolution,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome plus the counters accumulated while producing it.
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub counts: SearchCounts,
}

#[derive(Debug)]
/// Structured errors returned by search routines.
pub enum SearchError {
    /// The piece fails its contract (empty move surface, or a position
    /// outside the representable range).
    InvalidPiece { reason: String },
    /// The target fails its contract (outside the representable range).
    InvalidTarget { reason: String },
    /// The configured node budget was exceeded.
    LimitExceeded {
        stage: &'static str,
        limit: u64,
        observed: u64,
        counts: SearchCounts,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidPiece { reason } => write!(f, "invalid piece: {reason}"),
            SearchError::InvalidTarget { reason } => write!(f, "invalid target: {reason}"),
            SearchError::LimitExceeded {
                stage,
                limit,
                observed,
                counts,
            } => write!(
                f,
                "limit exceeded at {stage}: nodes (limit={limit}, observed={observed}); \
                 counts(nodes={}, budget_cutoffs={}, drift_cutoffs={}, paths_found={})",
                counts.nodes, counts.budget_cutoffs, counts.drift_cutoffs, counts.paths_found
            ),
        }
    }
}

impl std::error::Error for SearchError {}

/// Contract checks run before any recursion; violations surface to the
/// caller unchanged.
pub(crate) fn check_piece(piece: &Piece) -> Result<(), SearchError> {
    if piece.moves().is_empty() {
        return Err(SearchError::InvalidPiece {
            reason: format!("{} has an empty move surface", piece.kind().name()),
        });
    }
    let at = piece.coord();
    if !at.in_linf_bound(COORD_LIMIT) {
        return Err(SearchError::InvalidPiece {
            reason: format!(
                "position ({}, {}) is outside |x|,|y| <= {COORD_LIMIT}",
                at.x, at.y
            ),
        });
    }
    Ok(())
}

pub(crate) fn check_target(target: Coord) -> Result<(), SearchError> {
    if !target.in_linf_bound(COORD_LIMIT) {
        return Err(SearchError::InvalidTarget {
            reason: format!(
                "target ({}, {}) is outside |x|,|y| <= {COORD_LIMIT}",
                target.x, target.y
            ),
        });
    }
    Ok(())
}

pub(crate) fn bump_nodes(
    stage: &'static str,
    limits: SearchLimits,
    counts: &mut SearchCounts,
) -> Result<(), SearchError> {
    counts.nodes = counts.nodes.saturating_add(1);
    if counts.nodes > limits.max_nodes {
        return Err(SearchError::LimitExceeded {
            stage,
            limit: limits.max_nodes,
            observed: counts.nodes,
            counts: *counts,
        });
    }
    Ok(())
}
