use std::time::Instant;

use knight_moves::coord::Coord;
use knight_moves::path::Path;
use knight_moves::piece::{Piece, PieceKind};
use knight_moves::search::bestpath::Searcher;
use knight_moves::search::trace::ConsoleTrace;
use knight_moves::search::{SearchConfig, SearchOutcome, MAX_MOVE_BUDGET};

const LINE_WIDTH: usize = 85;

fn parse_coord(s: &str) -> Result<Coord, String> {
    let Some((x, y)) = s.split_once(',') else {
        return Err(format!("expected x,y, got '{s}'"));
    };
    let x: i64 = x
        .trim()
        .parse()
        .map_err(|e| format!("invalid x in '{s}': {e}"))?;
    let y: i64 = y
        .trim()
        .parse()
        .map_err(|e| format!("invalid y in '{s}': {e}"))?;
    Ok(Coord::new(x, y))
}

fn print_usage() {
    eprintln!("Usage: best_path [-s x,y] [-e x,y] [-m N] [-v N] [--window K] [--json]");
    eprintln!("  -s, --start x,y      starting square (default 0,0)");
    eprintln!("  -e, --end x,y        target square (default 4,5)");
    eprintln!("  -m, --max N          move budget, 1..={MAX_MOVE_BUDGET} (default 3)");
    eprintln!("  -v, --verbosity N    search narration, 0..=3 (default 0)");
    eprintln!("      --window K       drift heuristic sample count (default 3)");
    eprintln!("      --json           machine-readable report on stdout");
}

fn print_banner() {
    println!("{}", "/".repeat(LINE_WIDTH));
    println!("{:/^width$}", " KNIGHT MOVES ", width = LINE_WIDTH);
    println!(
        "{:/^width$}",
        " shortest knight paths on an unbounded board ",
        width = LINE_WIDTH
    );
    println!("{}", "/".repeat(LINE_WIDTH));
}

fn format_steps(path: &Path) -> String {
    path.steps()
        .iter()
        .map(|s| format!("{} ({}, {})", s.mv, s.to.x, s.to.y))
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut start = Coord::new(0, 0);
    let mut target = Coord::new(4, 5);
    let mut max_moves: usize = 3;
    let mut verbosity: u8 = 0;
    let mut window: usize = 3;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-s" | "--start" => {
                let Some(v) = args.get(i + 1) else {
                    eprintln!("{} requires a coordinate argument x,y", args[i]);
                    std::process::exit(2);
                };
                start = match parse_coord(v) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("invalid start: {e}");
                        std::process::exit(2);
                    }
                };
                i += 2;
            }
            "-e" | "--end" => {
                let Some(v) = args.get(i + 1) else {
                    eprintln!("{} requires a coordinate argument x,y", args[i]);
                    std::process::exit(2);
                };
                target = match parse_coord(v) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("invalid end: {e}");
                        std::process::exit(2);
                    }
                };
                i += 2;
            }
            "-m" | "--max" => {
                let Some(v) = args.get(i + 1) else {
                    eprintln!("{} requires an integer argument", args[i]);
                    std::process::exit(2);
                };
                max_moves = match v.parse::<usize>() {
                    Ok(m) if (1..=MAX_MOVE_BUDGET).contains(&m) => m,
                    Ok(m) => {
                        eprintln!("move budget must be in 1..={MAX_MOVE_BUDGET}, got {m}");
                        std::process::exit(2);
                    }
                    Err(e) => {
                        eprintln!("invalid move budget {v}: {e}");
                        std::process::exit(2);
                    }
                };
                i += 2;
            }
            "-v" | "--verbosity" => {
                let Some(v) = args.get(i + 1) else {
                    eprintln!("{} requires an integer argument", args[i]);
                    std::process::exit(2);
                };
                verbosity = match v.parse::<u8>() {
                    Ok(n) if n <= 3 => n,
                    Ok(n) => {
                        eprintln!("verbosity must be in 0..=3, got {n}");
                        std::process::exit(2);
                    }
                    Err(e) => {
                        eprintln!("invalid verbosity {v}: {e}");
                        std::process::exit(2);
                    }
                };
                i += 2;
            }
            "--window" => {
                let Some(v) = args.get(i + 1) else {
                    eprintln!("--window requires an integer argument");
                    std::process::exit(2);
                };
                window = match v.parse::<usize>() {
                    Ok(k) if k >= 1 => k,
                    Ok(_) => {
                        eprintln!("--window must be >= 1");
                        std::process::exit(2);
                    }
                    Err(e) => {
                        eprintln!("invalid --window {v}: {e}");
                        std::process::exit(2);
                    }
                };
                i += 2;
            }
            "--json" => {
                json = true;
                i += 1;
            }
            x => {
                eprintln!("Unknown option: {x}");
                print_usage();
                std::process::exit(2);
            }
        }
    }

    let piece = Piece::new(PieceKind::Knight, start);
    let config = SearchConfig::new(max_moves).with_drift_window(window);
    let searcher = Searcher::new(config);

    if !json {
        print_banner();
        println!(
            "{} from ({}, {}) to ({}, {}), budget {} moves",
            piece.kind().name(),
            start.x,
            start.y,
            target.x,
            target.y,
            max_moves
        );
    }

    // JSON output owns stdout; the trace stays silent there.
    let mut trace = ConsoleTrace::new(if json { 0 } else { verbosity });

    let started = Instant::now();
    let report = match searcher.find_best_path(piece, target, &mut trace) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Search failed: {e}");
            std::process::exit(1);
        }
    };
    let elapsed = started.elapsed();

    if json {
        let (outcome, moves, length) = match &report.outcome {
            SearchOutcome::AlreadyThere => {
                ("already_there", serde_json::Value::Null, Some(0usize))
            }
            SearchOutcome::Found(path) => {
                let moves: Vec<serde_json::Value> = path
                    .steps()
                    .iter()
                    .map(|s| serde_json::json!({ "move": s.mv.name(), "to": [s.to.x, s.to.y] }))
                    .collect();
                ("found", serde_json::Value::Array(moves), Some(path.len()))
            }
            SearchOutcome::NoSolution => ("no_solution", serde_json::Value::Null, None),
        };

        let out = serde_json::json!({
            "piece": piece.kind().name(),
            "start": [start.x, start.y],
            "target": [target.x, target.y],
            "max_moves": max_moves,
            "drift_window": window,
            "outcome": outcome,
            "moves": moves,
            "length": length,
            "counts": report.counts,
            "elapsed_ms": elapsed.as_secs_f64() * 1000.0,
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap());
        return;
    }

    match &report.outcome {
        SearchOutcome::AlreadyThere => {
            println!("ALREADY at target position!");
        }
        SearchOutcome::Found(path) => {
            println!("{}", "/".repeat(LINE_WIDTH));
            println!("---> {} MOVES: {}", path.len(), format_steps(path));
            println!("{}", "/".repeat(LINE_WIDTH));
        }
        SearchOutcome::NoSolution => {
            println!("Sorry, I was unable to find a solution in {max_moves} moves");
        }
    }

    if verbosity >= 1 {
        let c = report.counts;
        println!(
            "counts: nodes={}, budget_cutoffs={}, drift_cutoffs={}, paths_found={}",
            c.nodes, c.budget_cutoffs, c.drift_cutoffs, c.paths_found
        );
    }
    println!("elapsed: {:?}", elapsed);
}
