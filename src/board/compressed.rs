//! Compressed slash-separated board format.
//!
//! Rows are joined by `/`. Inside a row, a decimal count stands for that
//! many empty squares and a letter for a piece: `B N R K Q P`, uppercase
//! for white and lowercase for black. The rows of a standard starting
//! position read `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.

use super::error::BoardError;
use super::{Board, Piece};

/// Widest row the parser will expand before the first row fixes the width
const MAX_ROW_WIDTH: usize = 1024;

impl Board {
    /// Parse a board from the compressed format.
    pub fn try_from_compressed(compressed: &str) -> Result<Self, BoardError> {
        let mut rows: Vec<Vec<Option<Piece>>> = Vec::new();
        for row in compressed.split('/') {
            let limit = rows.first().map_or(MAX_ROW_WIDTH, Vec::len);
            rows.push(parse_compressed_row(row, limit)?);
        }
        Board::from_rows(rows)
    }

    /// Render the board in the compressed format.
    #[must_use]
    pub fn to_compressed(&self) -> String {
        let rows: Vec<String> = self
            .rows()
            .map(|row| {
                let mut out = String::new();
                let mut empty = 0;
                for cell in row {
                    match cell {
                        Some(piece) => {
                            if empty > 0 {
                                out.push_str(&empty.to_string());
                                empty = 0;
                            }
                            out.push(piece.compressed_char());
                        }
                        None => empty += 1,
                    }
                }
                if empty > 0 {
                    out.push_str(&empty.to_string());
                }
                out
            })
            .collect();
        rows.join("/")
    }
}

/// Runs that would push the row past `limit` squares are rejected before
/// anything is allocated.
fn parse_compressed_row(row: &str, limit: usize) -> Result<Vec<Option<Piece>>, BoardError> {
    let mut cells = Vec::new();
    let mut run = String::new();

    let flush = |run: &mut String, cells: &mut Vec<Option<Piece>>| -> Result<(), BoardError> {
        if run.is_empty() {
            return Ok(());
        }
        let count: usize = run
            .parse()
            .ok()
            .filter(|n| *n > 0 && cells.len().saturating_add(*n) <= limit)
            .ok_or_else(|| BoardError::BadRun { text: run.clone() })?;
        cells.extend(std::iter::repeat(None).take(count));
        run.clear();
        Ok(())
    };

    for c in row.chars() {
        if c.is_ascii_digit() {
            run.push(c);
            continue;
        }
        flush(&mut run, &mut cells)?;
        let piece = Piece::from_compressed_char(c).ok_or_else(|| BoardError::UnknownPiece {
            text: c.to_string(),
        })?;
        cells.push(Some(piece));
    }
    flush(&mut run, &mut cells)?;
    Ok(cells)
}
