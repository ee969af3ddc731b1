//! Shortest knight paths on an unbounded integer board, found by exhaustive
//! depth-bounded search with an explicit move budget and drift pruning.

pub mod coord;
pub mod piece;
pub mod path;
pub mod search;
