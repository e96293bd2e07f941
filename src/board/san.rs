//! Algebraic move notation.
//!
//! Grammar, right to left:
//! `[Piece][file][rank]['x']<target>['='Promotion]['+'|'#'][' e.p.']`
//!
//! The piece letter is omitted for pawns, pawn captures always carry the
//! source file, and the ` e.p.` tail marks a capture whose captured pawn is
//! not on the target square. Ranks count from the bottom of the board.
//!
//! # Examples
//! ```
//! use chessy::board::{Board, Side, Square};
//!
//! let board = Board::standard();
//! let mv = board.parse_move_notation("e4", Side::White).unwrap();
//! assert_eq!((mv.from, mv.to), (Square(6, 4), Square(4, 4)));
//! assert_eq!(board.notate(&mv, None, Side::White).unwrap(), "e4");
//! ```

use super::error::{MoveError, NotationError};
use super::{
    Board, CheckState, FullMove, MateDetection, Move, Piece, PieceType, Side, Square, Take,
};

const EN_PASSANT_SUFFIX: &str = " e.p.";

/// Segments of a notation string.
#[derive(Debug, Clone, PartialEq, Eq)]
struct NotationParts<'a> {
    piece: PieceType,
    file: Option<usize>,
    rank: Option<usize>,
    capture: bool,
    target: &'a str,
    promotion: Option<PieceType>,
    en_passant: bool,
}

/// Strip suffixes in fixed order: en passant tail, check/mate mark,
/// promotion, target square, capture marker. What remains is the piece
/// letter plus disambiguation.
fn split_notation(notation: &str) -> Result<NotationParts<'_>, NotationError> {
    let mut rest = notation.trim();
    if rest.is_empty() {
        return Err(NotationError::Empty);
    }

    let en_passant = match rest.strip_suffix(EN_PASSANT_SUFFIX) {
        Some(head) => {
            rest = head;
            true
        }
        None => false,
    };

    if let Some(head) = rest.strip_suffix(['+', '#']) {
        rest = head;
    }

    let mut promotion = None;
    if let Some((head, letter)) = rest.rsplit_once('=') {
        let mut chars = letter.chars();
        let kind = match (chars.next(), chars.next()) {
            (Some(c), None) => PieceType::from_letter(c).filter(|k| k.is_promotion_target()),
            _ => None,
        };
        promotion = Some(kind.ok_or_else(|| NotationError::InvalidPromotion {
            notation: notation.to_string(),
        })?);
        rest = head;
    }

    let invalid_square = || NotationError::InvalidSquare {
        notation: notation.to_string(),
    };
    let digits_start = rest.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    if digits_start == rest.len() || digits_start == 0 {
        return Err(invalid_square());
    }
    let file_start = digits_start - 1;
    if !rest.as_bytes()[file_start].is_ascii_lowercase() {
        return Err(invalid_square());
    }
    let target = &rest[file_start..];
    rest = &rest[..file_start];

    let capture = match rest.strip_suffix('x') {
        Some(head) => {
            rest = head;
            true
        }
        None => false,
    };

    let mut chars = rest.chars().peekable();
    let piece = match chars.peek() {
        Some(&c) if c.is_ascii_uppercase() => {
            chars.next();
            PieceType::from_letter(c).ok_or(NotationError::InvalidPiece { char: c })?
        }
        _ => PieceType::Pawn,
    };
    let file = chars
        .next_if(char::is_ascii_lowercase)
        .map(|c| c as usize - 'a' as usize);
    let rank_digits: String = chars.by_ref().take_while(char::is_ascii_digit).collect();
    let invalid_disambiguation = || NotationError::InvalidDisambiguation {
        notation: notation.to_string(),
    };
    if chars.next().is_some() {
        return Err(invalid_disambiguation());
    }
    let rank = if rank_digits.is_empty() {
        None
    } else {
        Some(rank_digits.parse().map_err(|_| invalid_disambiguation())?)
    };
    // take_while swallows the first non-digit, so recheck the total length
    let consumed = usize::from(piece != PieceType::Pawn)
        + usize::from(file.is_some())
        + rank_digits.len();
    if consumed != rest.chars().count() {
        return Err(invalid_disambiguation());
    }

    Ok(NotationParts {
        piece,
        file,
        rank,
        capture,
        target,
        promotion,
        en_passant,
    })
}

fn file_letter(col: usize) -> char {
    char::from_u32('a' as u32 + col as u32).unwrap_or('?')
}

impl Board {
    /// Encode an executed move in algebraic notation.
    ///
    /// `self` is the board before the move. The move is executed once to
    /// derive the check/mate suffix, so it must be valid for `side`.
    pub fn notate(
        &self,
        full_move: &FullMove,
        previous: Option<Move>,
        side: Side,
    ) -> Result<String, NotationError> {
        self.notate_with(full_move, previous, side, MateDetection::default())
    }

    /// [`Board::notate`] with an explicit rule for the `#` suffix.
    pub fn notate_with(
        &self,
        full_move: &FullMove,
        previous: Option<Move>,
        side: Side,
        rule: MateDetection,
    ) -> Result<String, NotationError> {
        let piece = self
            .at_square(full_move.from)?
            .ok_or(MoveError::NoPiece {
                square: full_move.from,
            })?;

        let mut out = String::new();
        if piece.kind == PieceType::Pawn {
            if full_move.take.is_some() {
                out.push(file_letter(full_move.from.col()));
            }
        } else {
            out.push(piece.kind.letter());
            let (needs_file, needs_rank) = self.needs_disambiguation(full_move, piece);
            if needs_file {
                out.push(file_letter(full_move.from.col()));
            }
            if needs_rank {
                out.push_str(&(self.height() - full_move.from.row()).to_string());
            }
        }

        if full_move.take.is_some() {
            out.push('x');
        }
        out.push_str(&self.square_name(full_move.to)?);

        if let Some(promotion) = full_move.promotion {
            out.push('=');
            out.push(promotion.letter());
        }

        let mv = full_move.as_move();
        let after = self.execute_move(mv, previous, full_move.promotion, side)?;
        match after.board.check_state_with(Some(mv), side.enemy(), rule)? {
            CheckState::Safe => {}
            CheckState::Check => out.push('+'),
            CheckState::Checkmate => out.push('#'),
        }

        if full_move.is_en_passant() {
            out.push_str(EN_PASSANT_SUFFIX);
        }
        Ok(out)
    }

    /// Determine if disambiguation is needed for a piece move.
    /// Returns (`needs_file`, `needs_rank`).
    fn needs_disambiguation(&self, full_move: &FullMove, piece: Piece) -> (bool, bool) {
        let rivals: Vec<Square> = self
            .find_pieces(Some(piece.kind), Some(piece.side))
            .into_iter()
            .filter(|sq| *sq != full_move.from)
            .filter(|sq| {
                self.piece_moves(*sq, piece.kind, None, piece.side)
                    .iter()
                    .any(|m| m.to == full_move.to)
            })
            .collect();

        if rivals.is_empty() {
            return (false, false);
        }

        let same_file = rivals.iter().any(|sq| sq.col() == full_move.from.col());
        let same_rank = rivals.iter().any(|sq| sq.row() == full_move.from.row());

        match (same_file, same_rank) {
            (false, _) => (true, false),    // File disambiguates
            (true, false) => (false, true), // Rank disambiguates
            (true, true) => (true, true),   // Need both
        }
    }

    /// Parse algebraic notation into a move for `side`.
    ///
    /// Exactly one source square must match. Pawns are matched by shape
    /// (row distance, file, occupancy) and the `e.p.` tail; other pieces by
    /// feasibility of reaching the target. Check is not simulated.
    pub fn parse_move_notation(&self, notation: &str, side: Side) -> Result<FullMove, NotationError> {
        let parts = split_notation(notation)?;
        let target = self
            .parse_square_name(parts.target)
            .map_err(|_| NotationError::InvalidSquare {
                notation: notation.to_string(),
            })?;
        if parts.promotion.is_some() && parts.piece != PieceType::Pawn {
            return Err(NotationError::InvalidPromotion {
                notation: notation.to_string(),
            });
        }
        let rank_row = match parts.rank {
            Some(rank) if rank == 0 || rank > self.height() => {
                return Err(NotationError::InvalidDisambiguation {
                    notation: notation.to_string(),
                })
            }
            Some(rank) => Some(self.height() - rank),
            None => None,
        };

        let candidates: Vec<(Square, Option<Take>)> = self
            .find_pieces(Some(parts.piece), Some(side))
            .into_iter()
            .filter(|sq| parts.file.map_or(true, |file| sq.col() == file))
            .filter(|sq| rank_row.map_or(true, |row| sq.row() == row))
            .filter_map(|from| {
                let take = if parts.piece == PieceType::Pawn {
                    self.pawn_notation_take(from, target, &parts, side)?
                } else {
                    self.piece_moves(from, parts.piece, None, side)
                        .into_iter()
                        .find(|m| m.to == target)?
                        .take
                };
                Some((from, take))
            })
            .collect();

        match candidates.as_slice() {
            [] => Err(NotationError::NoMatchingMove {
                notation: notation.to_string(),
            }),
            [(from, take)] => Ok(FullMove {
                from: *from,
                to: target,
                take: *take,
                promotion: parts.promotion,
            }),
            _ => Err(NotationError::AmbiguousMove {
                notation: notation.to_string(),
                candidates: candidates.len(),
            }),
        }
    }

    /// Match a pawn on `from` against the notation. The outer `None` means
    /// no match; the inner option is the capture.
    fn pawn_notation_take(
        &self,
        from: Square,
        target: Square,
        parts: &NotationParts<'_>,
        side: Side,
    ) -> Option<Option<Take>> {
        let dir = side.pawn_direction();
        let (dr, dc) = from.diff(target);

        if parts.capture {
            if dr != dir || dc.abs() != 1 {
                return None;
            }
            let square = if parts.en_passant {
                Square(from.row(), target.col())
            } else {
                target
            };
            let piece = self.piece_at(square).filter(|p| p.side != side)?;
            if parts.en_passant && (piece.kind != PieceType::Pawn || !self.is_empty(target)) {
                return None;
            }
            return Some(Some(Take { piece, square }));
        }

        if dc != 0 || !self.is_empty(target) {
            return None;
        }
        if dr == dir {
            return Some(None);
        }
        let jump_clear = from.row() == side.pawn_start_row(self.height())
            && self.step(from, (dir, 0)).is_some_and(|sq| self.is_empty(sq));
        (dr == 2 * dir && jump_clear).then_some(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_segments() {
        let parts = split_notation("exd6+ e.p.").unwrap();
        assert_eq!(parts.piece, PieceType::Pawn);
        assert_eq!(parts.file, Some(4));
        assert!(parts.capture);
        assert_eq!(parts.target, "d6");
        assert!(parts.en_passant);

        let parts = split_notation("R1a3").unwrap();
        assert_eq!(parts.piece, PieceType::Rook);
        assert_eq!(parts.file, None);
        assert_eq!(parts.rank, Some(1));
        assert_eq!(parts.target, "a3");

        let parts = split_notation("a8=N#").unwrap();
        assert_eq!(parts.promotion, Some(PieceType::Knight));
        assert_eq!(parts.target, "a8");
    }

    #[test]
    fn test_split_errors() {
        assert_eq!(split_notation("  "), Err(NotationError::Empty));
        assert!(matches!(
            split_notation("Nf"),
            Err(NotationError::InvalidSquare { .. })
        ));
        assert!(matches!(
            split_notation("Xe4"),
            Err(NotationError::InvalidPiece { char: 'X' })
        ));
        assert!(matches!(
            split_notation("e8=K"),
            Err(NotationError::InvalidPromotion { .. })
        ));
        assert!(matches!(
            split_notation("N?e4"),
            Err(NotationError::InvalidDisambiguation { .. })
        ));
    }

    #[test]
    fn test_pawn_moves() {
        let board = Board::standard();
        let mv = board.parse_move_notation("e4", Side::White).unwrap();
        assert_eq!(mv.from, Square(6, 4));
        assert_eq!(mv.to, Square(4, 4));
        assert_eq!(board.notate(&mv, None, Side::White).unwrap(), "e4");

        let mv = board.parse_move_notation("e6", Side::Black).unwrap();
        assert_eq!(mv.from, Square(1, 4));
        assert_eq!(mv.to, Square(2, 4));
    }

    #[test]
    fn test_knight_moves() {
        let board = Board::standard();
        let mv = board.parse_move_notation("Nf3", Side::White).unwrap();
        assert_eq!(mv.from, Square(7, 6));
        assert_eq!(mv.to, Square(5, 5));
        assert_eq!(board.notate(&mv, None, Side::White).unwrap(), "Nf3");
    }

    #[test]
    fn test_unreachable_target() {
        let board = Board::standard();
        assert!(matches!(
            board.parse_move_notation("e5", Side::White),
            Err(NotationError::NoMatchingMove { .. })
        ));
        assert!(matches!(
            board.parse_move_notation("Qh5", Side::White),
            Err(NotationError::NoMatchingMove { .. })
        ));
        assert!(matches!(
            board.parse_move_notation("Nz3", Side::White),
            Err(NotationError::InvalidSquare { .. })
        ));
    }
}
