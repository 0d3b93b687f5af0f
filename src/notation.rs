//! Standard cube notation: `U D L R F B`, optionally followed by exactly
//! one of `'` (counterclockwise) or `2` (half turn).

use super::*;

/// Parses a single move token. `index` is only used for error reporting.
pub fn parse_move(token: &str, index: usize) -> Result<Move, ParseError> {
    let err = || ParseError {
        token: token.to_string(),
        index,
    };
    let mut chars = token.chars();
    let face = chars.next().and_then(Face::from_letter).ok_or_else(err)?;
    let turn = match (chars.next(), chars.next()) {
        (None, _) => Cw,
        (Some('\''), None) => Ccw,
        (Some('2'), None) => Half,
        _ => return Err(err()),
    };

    Ok(Move(face, turn))
}

/// Parses whitespace-separated algorithm text.
///
/// Fails on the first malformed token; nothing is skipped.
pub fn parse_moves(text: &str) -> Result<Vec<Move>, ParseError> {
    text.split_whitespace()
        .enumerate()
        .map(|(index, token)| parse_move(token, index))
        .collect()
}

/// Merges runs of turns on the same face into their net turn.
///
/// Turns that cancel out are dropped, which may bring two more turns of a
/// single face together; those are merged as well, so no two adjacent
/// moves of the result share a face.
pub fn simplify_moves(movs: &[Move]) -> Vec<Move> {
    let mut result: Vec<Move> = Vec::with_capacity(movs.len());

    for &Move(face, turn) in movs {
        match result.last() {
            Some(&Move(last, last_turn)) if last == face => {
                result.pop();
                if let Some(net) = Turn::from_quarters(last_turn.quarters() + turn.quarters()) {
                    result.push(Move(face, net));
                }
            }
            _ => result.push(Move(face, turn)),
        }
    }
    result
}
