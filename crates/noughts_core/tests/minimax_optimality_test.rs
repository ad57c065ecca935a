//! The engine never loses, and plays the known book moves.

use noughts_core::{Board, Outcome, Player, SearchError, evaluate, select_move};

const COMPUTER: Player = Player::B;
const HUMAN: Player = Player::A;

/// Walks every line the human can choose, letting the engine reply each time.
///
/// Returns the number of finished games visited.
fn explore_all_human_lines(board: Board, computer: Player, human: Player) -> usize {
    if let Some(outcome) = board.outcome() {
        assert_ne!(outcome, Outcome::Won(human), "engine lost: {:?}", board);
        return 1;
    }

    let mut games = 0;
    for mv in board.moves() {
        let after_human = board.with_mark(human, mv);
        if let Some(outcome) = after_human.outcome() {
            assert_ne!(outcome, Outcome::Won(human), "engine lost: {:?}", after_human);
            games += 1;
            continue;
        }
        let reply = select_move(&after_human, computer, human).unwrap();
        assert!(after_human.is_empty_at(reply), "reply {} is occupied", reply);
        games += explore_all_human_lines(after_human.with_mark(computer, reply), computer, human);
    }
    games
}

/// Plays engine against engine until the game ends.
fn self_play(mut board: Board, mut to_move: Player) -> Outcome {
    loop {
        if let Some(outcome) = board.outcome() {
            return outcome;
        }
        let mv = select_move(&board, to_move, to_move.opponent()).unwrap();
        board.mark(to_move, mv);
        to_move = to_move.opponent();
    }
}

#[test]
fn test_never_loses_when_human_starts() {
    let games = explore_all_human_lines(Board::new(), COMPUTER, HUMAN);
    assert!(games > 0);
}

#[test]
fn test_never_loses_when_computer_starts() {
    let board = Board::new();
    let opening = select_move(&board, COMPUTER, HUMAN).unwrap();
    let games = explore_all_human_lines(board.with_mark(COMPUTER, opening), COMPUTER, HUMAN);
    assert!(games > 0);
}

#[test]
fn test_self_play_from_every_opening_is_a_draw() {
    for opening in 0..9 {
        let board = Board::new().with_mark(HUMAN, opening);
        assert_eq!(self_play(board, COMPUTER), Outcome::Draw, "opening {}", opening);
    }
}

#[test]
fn test_empty_board_every_opening_draws() {
    let scores = evaluate(&Board::new(), COMPUTER, HUMAN).unwrap();
    assert_eq!(scores.len(), 9);
    assert!(scores.iter().all(|&(_, s)| s == 0), "{:?}", scores);
    // Equal scores resolve to the lowest index.
    assert_eq!(select_move(&Board::new(), COMPUTER, HUMAN), Ok(0));
}

#[test]
fn test_corner_opening_answered_in_center() {
    let board = Board::parse("A__|___|___").unwrap();
    let mv = select_move(&board, COMPUTER, HUMAN).unwrap();
    assert_eq!(mv, 4);
    assert_eq!(self_play(board.with_mark(COMPUTER, mv), HUMAN), Outcome::Draw);
}

#[test]
fn test_immediate_win_beats_block() {
    let board = Board::parse("AA_|BB_|___").unwrap();
    let mv = select_move(&board, COMPUTER, HUMAN).unwrap();
    assert_eq!(mv, 5);
    assert_eq!(board.with_mark(COMPUTER, mv).winner(), Some(COMPUTER));
}

#[test]
fn test_selection_is_deterministic() {
    for layout in ["A__|___|___", "A_B|_A_|___", "AB_|_B_|A__", "_________"] {
        let board = Board::parse(layout).unwrap();
        let first = select_move(&board, COMPUTER, HUMAN);
        let second = select_move(&board, COMPUTER, HUMAN);
        assert_eq!(first, second, "layout {}", layout);
    }
}

#[test]
fn test_symbols_are_interchangeable() {
    // Swapping which side the engine plays mirrors the answer.
    let board = Board::parse("A__|___|___").unwrap();
    let mirrored = Board::parse("B__|___|___").unwrap();
    assert_eq!(
        select_move(&board, Player::B, Player::A),
        select_move(&mirrored, Player::A, Player::B)
    );
}

#[test]
fn test_full_board_fails_with_invalid_state() {
    let board = Board::parse("ABA|ABB|BAA").unwrap();
    assert_eq!(select_move(&board, COMPUTER, HUMAN), Err(SearchError::InvalidState));
    assert_eq!(evaluate(&board, COMPUTER, HUMAN), Err(SearchError::InvalidState));
}
