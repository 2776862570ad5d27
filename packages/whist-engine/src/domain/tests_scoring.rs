//! Round score tests.

use crate::domain::scoring::round_score;

#[test]
fn exact_bid_earns_five_plus_bid() {
    assert_eq!(round_score(3, 3), 8);
    assert_eq!(round_score(0, 0), 5);
    assert_eq!(round_score(8, 8), 13);
}

#[test]
fn miss_costs_the_difference() {
    assert_eq!(round_score(3, 5), -2);
    assert_eq!(round_score(5, 3), -2);
    assert_eq!(round_score(0, 3), -3);
    assert_eq!(round_score(7, 0), -7);
}

#[test]
fn miss_is_never_positive() {
    for bid in 0..=8u8 {
        for tricks in 0..=8u8 {
            let s = round_score(bid, tricks);
            if bid == tricks {
                assert_eq!(s, 5 + bid as i16);
            } else {
                assert!(s < 0);
                assert_eq!(-s, (bid as i16 - tricks as i16).abs());
            }
        }
    }
}
