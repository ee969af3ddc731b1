use knight_moves::coord::Coord;
use knight_moves::path::Path;
use knight_moves::piece::{Move, Piece, PieceKind};
use knight_moves::search::bestpath::Searcher;
use knight_moves::search::trace::{NoTrace, TraceLike};
use knight_moves::search::{SearchConfig, SearchError, SearchLimits, SearchOutcome, COORD_LIMIT};

fn knight(x: i64, y: i64) -> Piece {
    Piece::new(PieceKind::Knight, Coord::new(x, y))
}

#[test]
fn already_at_target_is_its_own_outcome() {
    let searcher = Searcher::new(SearchConfig::new(3));
    let report = searcher
        .find_best_path(knight(7, -9), Coord::new(7, -9), &mut NoTrace)
        .unwrap();
    assert_eq!(report.outcome, SearchOutcome::AlreadyThere);
    assert_eq!(report.counts.nodes, 0);
}

#[test]
fn found_steps_chain_knight_moves_from_start_to_target() {
    let start = knight(0, 0);
    let target = Coord::new(4, 5);
    let searcher = Searcher::new(SearchConfig::new(3));
    let report = searcher.find_best_path(start, target, &mut NoTrace).unwrap();

    let SearchOutcome::Found(path) = report.outcome else {
        panic!("expected a path");
    };
    assert!(path.len() <= 3);

    let mut at = start.coord();
    for step in path.steps() {
        assert_eq!(step.to - at, step.mv.delta());
        at = step.to;
    }
    assert_eq!(at, target);
}

#[test]
fn repeated_searches_return_identical_reports() {
    let searcher = Searcher::new(SearchConfig::new(4));
    let a = searcher
        .find_best_path(knight(0, 0), Coord::new(3, 4), &mut NoTrace)
        .unwrap();
    let b = searcher
        .find_best_path(knight(0, 0), Coord::new(3, 4), &mut NoTrace)
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn equal_length_candidates_resolve_to_the_first_discovered() {
    // Several two-move paths reach (1, 1); depth-first enumeration in move
    // order reaches it through right-down first.
    let searcher = Searcher::new(SearchConfig::new(2));
    let report = searcher
        .find_best_path(knight(0, 0), Coord::new(1, 1), &mut NoTrace)
        .unwrap();

    let SearchOutcome::Found(path) = report.outcome else {
        panic!("expected a path");
    };
    let moves: Vec<Move> = path.steps().iter().map(|s| s.mv).collect();
    assert_eq!(moves, vec![Move::RightDown, Move::UpLeft]);
    assert_eq!(path.steps()[0].to, Coord::new(2, -1));
    assert_eq!(path.steps()[1].to, Coord::new(1, 1));
}

#[test]
fn out_of_range_start_is_rejected_before_searching() {
    let searcher = Searcher::new(SearchConfig::new(3));
    let err = searcher
        .find_best_path(knight(COORD_LIMIT + 1, 0), Coord::new(4, 5), &mut NoTrace)
        .unwrap_err();
    assert!(matches!(err, SearchError::InvalidPiece { .. }));
}

#[test]
fn out_of_range_target_is_rejected_before_searching() {
    let searcher = Searcher::new(SearchConfig::new(3));
    let err = searcher
        .find_best_path(knight(0, 0), Coord::new(0, -(COORD_LIMIT + 1)), &mut NoTrace)
        .unwrap_err();
    assert!(matches!(err, SearchError::InvalidTarget { .. }));
}

#[test]
fn node_budget_exhaustion_surfaces_limit_exceeded() {
    let config = SearchConfig::new(5).with_limits(SearchLimits { max_nodes: 10 });
    let searcher = Searcher::new(config);
    let err = searcher
        .find_best_path(knight(0, 0), Coord::new(100, 100), &mut NoTrace)
        .unwrap_err();
    match err {
        SearchError::LimitExceeded {
            limit,
            observed,
            counts,
            ..
        } => {
            assert_eq!(limit, 10);
            assert_eq!(observed, 11);
            assert_eq!(counts.nodes, 11);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[derive(Default)]
struct RecordingTrace {
    moves: u64,
    budget_cutoffs: u64,
    drift_cutoffs: u64,
    found: Vec<usize>,
    best: Vec<usize>,
}

impl TraceLike for RecordingTrace {
    fn on_move(&mut self, _piece: Piece, _path: &Path) {
        self.moves += 1;
    }
    fn on_budget_cutoff(&mut self, _path: &Path) {
        self.budget_cutoffs += 1;
    }
    fn on_drift_cutoff(&mut self, _path: &Path) {
        self.drift_cutoffs += 1;
    }
    fn on_path_found(&mut self, path: &Path) {
        self.found.push(path.len());
    }
    fn on_better_path(&mut self, path: &Path) {
        self.best.push(path.len());
    }
}

#[test]
fn tracing_observes_the_search_without_steering_it() {
    let searcher = Searcher::new(SearchConfig::new(3));

    let silent = searcher
        .find_best_path(knight(0, 0), Coord::new(4, 5), &mut NoTrace)
        .unwrap();

    let mut trace = RecordingTrace::default();
    let traced = searcher
        .find_best_path(knight(0, 0), Coord::new(4, 5), &mut trace)
        .unwrap();

    assert_eq!(silent, traced);
    assert_eq!(trace.budget_cutoffs, traced.counts.budget_cutoffs);
    assert_eq!(trace.drift_cutoffs, traced.counts.drift_cutoffs);
    assert_eq!(trace.found.len() as u64, traced.counts.paths_found);
    assert!(trace.moves > 0);

    // Selection visits candidates in discovery order and improves strictly.
    let mut last = usize::MAX;
    for &len in &trace.best {
        assert!(len < last);
        last = len;
    }
}
