//! Hand-size schedule tests, exhaustive at every phase boundary.

use crate::domain::rules::{hand_size, total_rounds};
use crate::errors::DomainError;

/// Build the expected schedule for a table size from first principles:
/// n rounds of 1, the 2..=7 ramp, n rounds of 8, the 7..=2 ramp, n rounds
/// of 1.
fn expected_schedule(num_players: usize) -> Vec<u8> {
    let n = num_players;
    let mut schedule = vec![1u8; n];
    schedule.extend(2..=7u8);
    schedule.extend(std::iter::repeat(8u8).take(n));
    schedule.extend((2..=7u8).rev());
    schedule.extend(std::iter::repeat(1u8).take(n));
    schedule
}

#[test]
fn schedule_matches_for_every_table_size() {
    for n in 3..=6usize {
        let expected = expected_schedule(n);
        assert_eq!(expected.len() as u8, total_rounds(n));
        for (i, &size) in expected.iter().enumerate() {
            let round_no = (i + 1) as u8;
            assert_eq!(
                hand_size(n, round_no).unwrap(),
                size,
                "players={n} round={round_no}"
            );
        }
    }
}

#[test]
fn phase_boundaries_exact() {
    for n in 3..=6usize {
        let nn = n as u8;
        // Phase 1 -> 2
        assert_eq!(hand_size(n, nn).unwrap(), 1);
        assert_eq!(hand_size(n, nn + 1).unwrap(), 2);
        // Phase 2 -> 3
        assert_eq!(hand_size(n, nn + 6).unwrap(), 7);
        assert_eq!(hand_size(n, nn + 7).unwrap(), 8);
        // Phase 3 -> 4
        assert_eq!(hand_size(n, 2 * nn + 6).unwrap(), 8);
        assert_eq!(hand_size(n, 2 * nn + 7).unwrap(), 7);
        // Phase 4 -> 5
        assert_eq!(hand_size(n, 2 * nn + 12).unwrap(), 2);
        assert_eq!(hand_size(n, 2 * nn + 13).unwrap(), 1);
        // Final round
        assert_eq!(hand_size(n, 3 * nn + 12).unwrap(), 1);
    }
}

#[test]
fn total_rounds_per_table_size() {
    assert_eq!(total_rounds(3), 21);
    assert_eq!(total_rounds(4), 24);
    assert_eq!(total_rounds(5), 27);
    assert_eq!(total_rounds(6), 30);
}

#[test]
fn rejects_rounds_outside_schedule() {
    for n in 3..=6usize {
        let total = total_rounds(n);
        assert!(matches!(
            hand_size(n, 0),
            Err(DomainError::RoundOutOfRange { round: 0, .. })
        ));
        let err = hand_size(n, total + 1).unwrap_err();
        assert_eq!(
            err,
            DomainError::RoundOutOfRange {
                round: total + 1,
                num_players: n,
                total,
            }
        );
    }
}

#[test]
fn rejects_invalid_player_counts() {
    for n in [0usize, 1, 2, 7, 10] {
        assert!(matches!(
            hand_size(n, 1),
            Err(DomainError::InvalidPlayerCount(_))
        ));
    }
}
