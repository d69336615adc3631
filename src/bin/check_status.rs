use std::env;
use std::process::ExitCode;

use chess_legality::board::{Piece, Position, Square};

fn parse_move(mv: &str) -> Result<(Square, Square, Option<Piece>), String> {
    let mut parts = mv.split(':');
    let from = parts
        .next()
        .ok_or_else(|| format!("empty move '{mv}'"))?
        .parse::<Square>()
        .map_err(|e| e.to_string())?;
    let to = parts
        .next()
        .ok_or_else(|| format!("move '{mv}' has no destination"))?
        .parse::<Square>()
        .map_err(|e| e.to_string())?;
    let promotion = match parts.next() {
        Some(p) => Some(
            p.chars()
                .next()
                .and_then(Piece::from_char)
                .ok_or_else(|| format!("bad promotion piece '{p}'"))?,
        ),
        None => None,
    };
    Ok((from, to, promotion))
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args().skip(1).peekable();
    let mut pos = if args.peek().map(String::as_str) == Some("--fen") {
        args.next();
        let Some(fen) = args.next() else {
            eprintln!("usage: check_status [--fen <fen>] <from:to[:promotion]> ...");
            return ExitCode::FAILURE;
        };
        match Position::try_from_fen(&fen) {
            Ok(pos) => pos,
            Err(err) => {
                eprintln!("invalid fen: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        Position::initial()
    };

    for mv in args {
        let applied = parse_move(&mv)
            .and_then(|(from, to, promotion)| {
                pos.apply_move(from, to, promotion).map_err(|e| e.to_string())
            });
        match applied {
            Ok(next) => pos = next,
            Err(err) => {
                eprintln!("move {mv}: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    let status = pos.check_status();
    println!("fen: {}", pos.to_fen());
    println!("side_to_move: {}", status.side);
    println!("status: {status}");
    println!("in_check: {}", status.in_check);
    println!("checkmate: {}", status.checkmate);
    println!("stalemate: {}", status.stalemate);
    for fig in pos.figures_of(status.side) {
        let targets: Vec<String> = fig.walk_moves().squares().map(|sq| sq.to_string()).collect();
        println!("{} {}: [{}]", fig.piece(), fig.square(), targets.join(", "));
    }
    ExitCode::SUCCESS
}
