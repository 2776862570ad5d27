//! Seat and rotation math.
//!
//! Seats are numbered `0..num_players` clockwise. These helpers are the
//! single source of truth for "who acts next" so the orchestrator and the
//! tests never disagree on rotation.

/// A player's position at the table.
pub type Seat = u8;

/// Returns the seat `delta` steps clockwise from `seat` (negative delta goes
/// counter-clockwise).
#[inline]
pub fn seat_offset(seat: Seat, delta: i8, num_players: usize) -> Seat {
    let n = num_players as i16;
    ((seat as i16 + delta as i16).rem_euclid(n)) as Seat
}

/// Next seat clockwise.
#[inline]
pub fn next_seat(seat: Seat, num_players: usize) -> Seat {
    seat_offset(seat, 1, num_players)
}

/// Previous seat counter-clockwise; this is the last seat to act when play
/// starts at `seat` and rotates clockwise.
#[inline]
pub fn prev_seat(seat: Seat, num_players: usize) -> Seat {
    seat_offset(seat, -1, num_players)
}

/// Seat `n` steps clockwise from `start`.
#[inline]
pub fn nth_from(start: Seat, n: u8, num_players: usize) -> Seat {
    seat_offset(start, n as i8, num_players)
}
