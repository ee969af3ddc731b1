use knight_moves::coord::Coord;
use knight_moves::piece::{Piece, PieceKind};
use knight_moves::search::reach::count_reachable;
use knight_moves::search::SearchLimits;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut plies: u32 = 3;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-p" | "--plies" => {
                let Some(v) = args.get(i + 1) else {
                    eprintln!("{} requires an integer argument", args[i]);
                    std::process::exit(2);
                };
                plies = match v.parse::<u32>() {
                    Ok(p) if p >= 1 => p,
                    Ok(_) => {
                        eprintln!("--plies must be >= 1");
                        std::process::exit(2);
                    }
                    Err(e) => {
                        eprintln!("invalid --plies {v}: {e}");
                        std::process::exit(2);
                    }
                };
                i += 2;
            }
            x => {
                eprintln!("Unknown option: {x}");
                eprintln!("Usage: reach_count [-p N | --plies N]");
                std::process::exit(2);
            }
        }
    }

    // The census is translation invariant, so the origin stands in for any
    // start square.
    let piece = Piece::new(PieceKind::Knight, Coord::ORIGIN);
    let counts = match count_reachable(piece, plies, SearchLimits::default()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Census failed: {e}");
            std::process::exit(1);
        }
    };

    let out = serde_json::json!({
        "piece": piece.kind().name(),
        "plies": plies,
        "counts": counts,
    });
    println!("{}", serde_json::to_string_pretty(&out).unwrap());
}
