//! Property-based tests for the round schedule.

use proptest::prelude::*;

use crate::domain::rules::{hand_size, total_rounds, MAX_HAND_SIZE};

fn table_and_round() -> impl Strategy<Value = (usize, u8)> {
    (3usize..=6).prop_flat_map(|n| (Just(n), 1u8..=total_rounds(n)))
}

proptest! {
    /// Every scheduled hand fits the deck: `8 * n` cards cover the deal plus
    /// the trump reveal, which only the hand-size-8 rounds skip.
    #[test]
    fn prop_hand_sizes_fit_the_deck((n, round_no) in table_and_round()) {
        let hs = hand_size(n, round_no).unwrap();
        prop_assert!((1..=MAX_HAND_SIZE).contains(&hs));

        let deck = 8 * n;
        let needed = hs as usize * n + usize::from(hs < MAX_HAND_SIZE);
        prop_assert!(needed <= deck, "round {round_no} needs {needed} of {deck}");
    }

    /// The schedule is a palindrome: round r mirrors round total + 1 - r.
    #[test]
    fn prop_schedule_is_symmetric((n, round_no) in table_and_round()) {
        let total = total_rounds(n);
        let mirrored = total + 1 - round_no;
        prop_assert_eq!(
            hand_size(n, round_no).unwrap(),
            hand_size(n, mirrored).unwrap()
        );
    }
}
