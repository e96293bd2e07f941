//! Boxed text format.
//!
//! ```text
//! ----------------
//! |  |bK|  |  |wR|
//! ----------------
//! |  |  |  |wR|  |
//! ----------------
//! ```
//!
//! Every divider is `3 * width + 1` dashes and every cell is exactly two
//! characters: side then type (`wK`), or two spaces for an empty square.

use std::fmt;
use std::str::FromStr;

use super::error::BoardError;
use super::{Board, Piece};

const EMPTY_CELL: &str = "  ";

impl Board {
    /// Parse a board from the boxed text format.
    ///
    /// Parsing is strict: any malformed line fails the whole board.
    pub fn try_from_text(text: &str) -> Result<Self, BoardError> {
        let lines: Vec<&str> = text.lines().collect();
        if lines.is_empty() {
            return Err(BoardError::EmptyBoard);
        }
        if lines.len() < 3 || lines.len() % 2 == 0 {
            return Err(BoardError::Truncated { lines: lines.len() });
        }

        let mut rows = Vec::with_capacity(lines.len() / 2);
        for idx in (1..lines.len()).step_by(2) {
            rows.push(parse_row(lines[idx], idx + 1)?);
        }

        let width = rows.first().map_or(0, Vec::len);
        let divider_len = 3 * width + 1;
        for idx in (0..lines.len()).step_by(2) {
            let divider = lines[idx];
            if divider.len() != divider_len || !divider.bytes().all(|b| b == b'-') {
                return Err(BoardError::BadDivider { line: idx + 1 });
            }
        }

        Board::from_rows(rows)
    }

    /// Render the board in the boxed text format, without a trailing newline.
    #[must_use]
    pub fn to_text(&self) -> String {
        let divider = "-".repeat(3 * self.width() + 1);
        let mut lines = Vec::with_capacity(2 * self.height() + 1);
        lines.push(divider.clone());
        for row in self.rows() {
            let mut line = String::with_capacity(3 * row.len() + 1);
            line.push('|');
            for cell in row {
                match cell {
                    Some(piece) => line.push_str(&piece.code()),
                    None => line.push_str(EMPTY_CELL),
                }
                line.push('|');
            }
            lines.push(line);
            lines.push(divider.clone());
        }
        lines.join("\n")
    }
}

fn parse_row(line: &str, line_no: usize) -> Result<Vec<Option<Piece>>, BoardError> {
    if line.len() < 2 || !line.starts_with('|') || !line.ends_with('|') {
        return Err(BoardError::BadRow { line: line_no });
    }
    line[1..line.len() - 1]
        .split('|')
        .map(|cell| {
            if cell.chars().count() != 2 {
                return Err(BoardError::BadCell {
                    line: line_no,
                    cell: cell.to_string(),
                });
            }
            if cell == EMPTY_CELL {
                return Ok(None);
            }
            Piece::from_code(cell)
                .map(Some)
                .ok_or_else(|| BoardError::UnknownPiece {
                    text: cell.to_string(),
                })
        })
        .collect()
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_text(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceType, Side, Square};

    fn mate_board_text() -> String {
        [
            "----------------",
            "|  |bK|  |  |wR|",
            "----------------",
            "|  |  |  |wR|  |",
            "----------------",
            "|  |  |  |  |wK|",
            "----------------",
        ]
        .join("\n")
    }

    #[test]
    fn parses_small_board() {
        let board = Board::try_from_text(&mate_board_text()).unwrap();
        assert_eq!(board.height(), 3);
        assert_eq!(board.width(), 5);
        assert_eq!(
            board.piece_at(Square(0, 1)),
            Some(Piece::new(PieceType::King, Side::Black))
        );
        assert_eq!(
            board.piece_at(Square(1, 3)),
            Some(Piece::new(PieceType::Rook, Side::White))
        );
        assert_eq!(board.piece_at(Square(2, 0)), None);
    }

    #[test]
    fn renders_exactly_what_it_parses() {
        let text = mate_board_text();
        let board: Board = text.parse().unwrap();
        assert_eq!(board.to_text(), text);
        assert_eq!(board.to_string(), text);
    }

    #[test]
    fn standard_board_text() {
        let text = Board::standard().to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 17);
        assert_eq!(lines[0], "-".repeat(25));
        assert_eq!(lines[1], "|bR|bN|bB|bQ|bK|bB|bN|bR|");
        assert_eq!(lines[13], "|wP|wP|wP|wP|wP|wP|wP|wP|");
        assert_eq!(lines[15], "|wR|wN|wB|wQ|wK|wB|wN|wR|");
    }

    #[test]
    fn rejects_bad_divider() {
        let text = mate_board_text().replacen("----------------", "-------=--------", 1);
        assert_eq!(
            Board::try_from_text(&text),
            Err(BoardError::BadDivider { line: 1 })
        );
        let short = mate_board_text().replacen("----------------\n|  |  |", "---------------\n|  |  |", 1);
        assert_eq!(
            Board::try_from_text(&short),
            Err(BoardError::BadDivider { line: 3 })
        );
    }

    #[test]
    fn rejects_wide_cell() {
        let text = ["-------", "|wKK|  |", "-------"].join("\n");
        assert!(matches!(
            Board::try_from_text(&text),
            Err(BoardError::BadCell { line: 2, .. })
        ));
    }

    #[test]
    fn rejects_unknown_piece() {
        let text = ["----", "|wX|", "----"].join("\n");
        assert_eq!(
            Board::try_from_text(&text),
            Err(BoardError::UnknownPiece {
                text: "wX".to_string()
            })
        );
    }

    #[test]
    fn rejects_unequal_rows() {
        let text = ["-------", "|  |  |", "-------", "|  |", "-------"].join("\n");
        assert!(matches!(
            Board::try_from_text(&text),
            Err(BoardError::RaggedRows { .. } | BoardError::BadDivider { .. })
        ));
    }

    #[test]
    fn rejects_missing_closing_divider() {
        let text = ["----", "|  |"].join("\n");
        assert_eq!(
            Board::try_from_text(&text),
            Err(BoardError::Truncated { lines: 2 })
        );
        assert_eq!(Board::try_from_text(""), Err(BoardError::EmptyBoard));
    }

    #[test]
    fn rejects_unframed_row() {
        let text = ["----", " wK|", "----"].join("\n");
        assert_eq!(
            Board::try_from_text(&text),
            Err(BoardError::BadRow { line: 2 })
        );
    }
}
