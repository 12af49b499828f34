use std::time::Instant;

use anyhow::{Context, Result};
use hepek_core::{Move, Position, Wing, divide};
use tracing::{debug, info};

const DEFAULT_DEPTH: usize = 3;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let depth = match args.next() {
        Some(word) => word
            .parse::<usize>()
            .with_context(|| format!("invalid depth \"{word}\""))?,
        None => DEFAULT_DEPTH,
    };

    let fen = args.collect::<Vec<_>>().join(" ");
    let position = if fen.is_empty() {
        Position::starting_position()
    } else {
        fen.parse::<Position>()
            .with_context(|| format!("invalid FEN \"{fen}\""))?
    };

    info!(depth, fen = %position, "hepek perft starting");
    debug!("\n{}", position.pretty());

    let start = Instant::now();
    let mut nodes = 0u64;
    for (mv, count) in divide(&position, depth) {
        println!("{}: {count}", describe(mv));
        nodes += count;
    }
    let elapsed = start.elapsed();

    println!();
    println!("Nodes searched: {nodes}");
    info!(depth, nodes, elapsed_ms = elapsed.as_millis() as u64, status = ?position.status(), "perft done");
    Ok(())
}

/// Coordinate form for diagnostics: `e2e4`, `e7e8q`, `O-O`.
fn describe(mv: Move) -> String {
    match mv {
        Move::Normal { from, to, .. } => format!("{from}{to}"),
        Move::Promotion { from, to, promoted } => format!("{from}{to}{}", promoted.fen_char()),
        Move::Castling(Wing::KingSide) => "O-O".to_string(),
        Move::Castling(Wing::QueenSide) => "O-O-O".to_string(),
    }
}
