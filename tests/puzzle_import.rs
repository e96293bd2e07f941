use serde::Deserialize;

use chessy::board::{Board, CheckState, Move, PieceType, Side, Square};
use chessy::game::{GameError, MoveStatus, Progress, Puzzle, PuzzleGame};

#[derive(Deserialize)]
struct BlunderSet {
    blunders: Vec<Blunder>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Blunder {
    id: String,
    #[allow(dead_code)]
    elo: u32,
    blunder_move: String,
    fen_before: String,
    forced_line: Vec<String>,
}

fn load_blunders() -> Vec<Blunder> {
    let data = include_str!("data/blunders.json");
    let set: BlunderSet = serde_json::from_str(data).expect("invalid blunders.json");
    set.blunders
}

fn import(blunder: &Blunder) -> Result<Puzzle, GameError> {
    Puzzle::from_forced_line(
        blunder.id.clone(),
        &blunder.fen_before,
        &blunder.blunder_move,
        &blunder.forced_line,
    )
}

fn find(id: &str) -> Blunder {
    load_blunders()
        .into_iter()
        .find(|b| b.id == id)
        .unwrap_or_else(|| panic!("no blunder {id} in fixture"))
}

#[test]
fn every_fixture_blunder_imports() {
    for blunder in load_blunders() {
        let puzzle = import(&blunder)
            .unwrap_or_else(|e| panic!("failed to import {}: {e}", blunder.id));
        assert_eq!(puzzle.id, blunder.id);
        assert_eq!(puzzle.correct_moves.len(), blunder.forced_line.len());
    }
}

#[test]
fn blunder_is_applied_before_forced_line() {
    let puzzle = import(&find("mock-blunder-id")).unwrap();

    let before =
        Board::try_from_compressed("8/2p5/1pPp1k1p/p2P1p2/P1Pn1n1P/2n5/6B1/7K").unwrap();
    let expected = before
        .execute_move(Move::new(Square(4, 2), Square(3, 2)), None, None, Side::White)
        .unwrap()
        .board;
    assert_eq!(puzzle.start_board, expected);
    assert_eq!(puzzle.side_to_move, Side::Black);

    let reply = &puzzle.correct_moves[0];
    assert_eq!(reply.notation, "bxc5");
    assert_eq!(reply.as_move(), Move::new(Square(2, 1), Square(3, 2)));
    let take = reply.full_move.take.unwrap();
    assert_eq!(take.square, Square(3, 2));
    assert_eq!(take.piece.kind, PieceType::Pawn);
    assert_eq!(take.piece.side, Side::White);
    assert_eq!(reply.result_check_state, CheckState::Safe);
}

#[test]
fn imported_mate_is_annotated() {
    let puzzle = import(&find("fools-mate")).unwrap();
    assert_eq!(puzzle.side_to_move, Side::Black);
    let mate = &puzzle.correct_moves[0];
    assert_eq!(mate.notation, "Qh4#");
    assert_eq!(mate.result_check_state, CheckState::Checkmate);
}

#[test]
fn imported_puzzle_is_playable() {
    let puzzle = import(&find("mock-blunder-id")).unwrap();
    let mut game = PuzzleGame::from_puzzle(puzzle).unwrap();

    let wrong = game.try_move(Square(2, 3), Square(3, 2), None).unwrap();
    assert_eq!(wrong.status, MoveStatus::Failure);
    assert_eq!(game.progress(), Progress::Playing);

    let right = game.try_move(Square(2, 1), Square(3, 2), None).unwrap();
    assert_eq!(right.status, MoveStatus::Success);
    assert_eq!(right.puzzle_move, None);
    assert_eq!(game.progress(), Progress::Completed);
    assert_eq!(game.side_to_move(), Side::White);
}

#[test]
fn forced_line_can_capture_the_blunder_en_passant() {
    let puzzle = import(&find("en-passant-reply")).unwrap();
    let jump = Move::new(Square(1, 3), Square(3, 3));
    assert_eq!(puzzle.previous_move, Some(jump));
    assert_eq!(puzzle.side_to_move, Side::White);
    assert_eq!(puzzle.correct_moves[0].notation, "exd6 e.p.");

    let mut game = PuzzleGame::from_puzzle(puzzle).unwrap();
    let first = game.try_move(Square(3, 4), Square(2, 3), None).unwrap();
    assert_eq!(first.status, MoveStatus::Success);
    assert_eq!(first.puzzle_move.unwrap().notation, "Kd8");
    assert_eq!(game.board().piece_at(Square(3, 3)), None);

    let last = game.try_move(Square(2, 3), Square(1, 3), None).unwrap();
    assert!(last.is_success());
    assert_eq!(game.progress(), Progress::Completed);
}

#[test]
fn bad_forced_line_aborts_import() {
    let blunder = find("mock-blunder-id");
    let ambiguous = Puzzle::from_forced_line(
        "ambiguous",
        &blunder.fen_before,
        &blunder.blunder_move,
        &["xc5"],
    );
    assert!(matches!(ambiguous, Err(GameError::Notation(_))));

    let illegal = Puzzle::from_forced_line(
        "illegal",
        &blunder.fen_before,
        &blunder.blunder_move,
        &["bxc5", "Kh1"],
    );
    assert!(illegal.is_err());

    let bad_board = Puzzle::from_forced_line("bad", "8/8/9 w", "c5", &["bxc5"]);
    assert!(matches!(bad_board, Err(GameError::Move(_))));
}

#[cfg(feature = "serde")]
#[test]
fn puzzle_survives_json() {
    let puzzle = import(&find("fools-mate")).unwrap();
    let json = serde_json::to_string(&puzzle).unwrap();
    assert!(json.contains("\"CHECKMATE\""));
    let restored: Puzzle = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, puzzle);
}
