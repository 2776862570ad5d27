//! Scoreboard accumulation and query tests.

use crate::domain::scoreboard::Scoreboard;

#[test]
fn add_player_starts_at_zero() {
    let mut board = Scoreboard::new();
    board.add_player(0);
    assert_eq!(board.total_score(0), Some(0));
    assert_eq!(board.rounds(0).count(), 0);
}

#[test]
fn cumulative_total_is_sum_of_round_scores() {
    let mut board = Scoreboard::new();
    board.add_player(1);
    board.update_score(1, 1, 2, 2, 7);
    board.update_score(1, 2, 3, 1, -2);
    assert_eq!(board.total_score(1), Some(5));

    let first = board.round_detail(1, 1).unwrap();
    assert_eq!(first.bid, 2);
    assert_eq!(first.tricks_won, 2);
    assert_eq!(first.score, 7);
    assert_eq!(first.cumulative_score, 7);

    let second = board.round_detail(1, 2).unwrap();
    assert_eq!(second.score, -2);
    assert_eq!(second.cumulative_score, 5);
}

#[test]
fn update_registers_unknown_seats() {
    let mut board = Scoreboard::new();
    board.update_score(3, 1, 0, 0, 5);
    assert_eq!(board.total_score(3), Some(5));
}

#[test]
fn queries_on_unknown_seats_return_none() {
    let mut board = Scoreboard::new();
    board.add_player(0);
    assert_eq!(board.total_score(9), None);
    assert!(board.round_detail(9, 1).is_none());
    assert!(board.round_detail(0, 1).is_none());
}

#[test]
fn rounds_iterate_in_round_order() {
    let mut board = Scoreboard::new();
    board.update_score(0, 2, 1, 1, 6);
    board.update_score(0, 1, 0, 0, 5);
    let order: Vec<u8> = board.rounds(0).map(|(no, _)| no).collect();
    assert_eq!(order, vec![1, 2]);
}

#[test]
fn serializes_for_reporting() {
    let mut board = Scoreboard::new();
    board.update_score(0, 1, 1, 1, 6);
    let json = serde_json::to_value(&board).unwrap();
    assert_eq!(json["entries"]["0"]["total_score"], 6);
    assert_eq!(json["entries"]["0"]["rounds"]["1"]["bid"], 1);
}
