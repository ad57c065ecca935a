//! Tests for the human/computer turn loop and deferred reset.

use noughts::{ClickError, Rejected, Session, Symbols, schedule_reset};
use noughts_core::{Outcome, Player};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// Human (B) takes 0, 1, 3; the engine blocks at 2 and wins on 2-4-6.
fn lost_game() -> (Session, noughts::Turn) {
    let mut session = Session::new(Symbols::new(Player::B));
    session.click(0).unwrap();
    let turn = session.click(1).unwrap();
    assert_eq!(turn.computer, Some(2));
    let turn = session.click(3).unwrap();
    (session, turn)
}

#[test]
fn test_engine_punishes_mistake() {
    let (session, turn) = lost_game();
    assert_eq!(turn.computer, Some(6));
    assert_eq!(turn.outcome, Some(Outcome::Won(Player::A)));
    assert!(turn.reset.is_some());
    assert!(session.game_over());
}

#[test]
fn test_clicks_ignored_after_game_over() {
    let (mut session, _) = lost_game();
    let before = *session.board();
    assert_eq!(
        session.click(5),
        Err(ClickError::Rejected(Rejected::GameOver))
    );
    assert_eq!(*session.board(), before);
}

#[test]
fn test_human_never_wins_playing_first_empty_cell() {
    let mut session = Session::default();
    let outcome = loop {
        let next = session.board().moves()[0];
        let turn = session.click(next).unwrap();
        if let Some(outcome) = turn.outcome {
            assert!(turn.reset.is_some());
            break outcome;
        }
        assert!(turn.computer.is_some());
    };
    assert_ne!(outcome, Outcome::Won(session.symbols().human()));
}

#[test]
fn test_human_never_wins_playing_last_empty_cell() {
    let mut session = Session::default();
    let mut last = None;
    while !session.game_over() {
        let next = *session.board().moves().last().unwrap();
        last = Some(session.click(next).unwrap());
    }
    let turn = last.unwrap();
    assert!(turn.outcome.is_some());
    assert_ne!(turn.outcome, Some(Outcome::Won(Player::B)));
}

#[test]
fn test_reset_only_for_matching_game() {
    let (mut session, turn) = lost_game();
    let ticket = turn.reset.unwrap();
    assert!(session.reset(ticket));
    assert!(session.board().occupied().is_empty());
    assert!(!session.game_over());
    assert!(!session.started());
    // Second delivery of the same ticket is stale.
    session.click(4).unwrap();
    assert!(!session.reset(ticket));
    assert_eq!(session.board().occupied().len(), 2);
}

#[test]
fn test_symbols_survive_reset() {
    let mut session = Session::default();
    assert!(session.toggle_symbols());
    session.click(0).unwrap();
    session.restart();
    assert_eq!(session.symbols().human(), Player::A);
    assert!(session.toggle_symbols());
}

#[tokio::test(start_paused = true)]
async fn test_scheduled_reset_arrives_after_delay() {
    let (mut session, turn) = lost_game();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let start = Instant::now();

    schedule_reset(turn.reset.unwrap(), Duration::from_millis(2000), tx);
    let ticket = rx.recv().await.unwrap();

    assert!(start.elapsed() >= Duration::from_millis(2000));
    assert!(session.reset(ticket));
    assert!(session.board().occupied().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_stale_scheduled_reset_is_harmless() {
    let (mut session, turn) = lost_game();
    let (tx, mut rx) = mpsc::unbounded_channel();

    schedule_reset(turn.reset.unwrap(), Duration::from_millis(2000), tx);
    // User restarts and plays before the timer fires.
    session.restart();
    session.click(0).unwrap();

    let ticket = rx.recv().await.unwrap();
    assert!(!session.reset(ticket));
    assert_eq!(session.board().occupied(), vec![0, 4]);
}

#[tokio::test(start_paused = true)]
async fn test_reset_with_dropped_receiver_completes() {
    let (_, turn) = lost_game();
    let (tx, rx) = mpsc::unbounded_channel();
    drop(rx);
    let handle = schedule_reset(turn.reset.unwrap(), Duration::from_millis(10), tx);
    handle.await.unwrap();
}
