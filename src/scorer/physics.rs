use crate::geometry::Key;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Display, Serialize, Deserialize,
)]
pub enum Finger {
    Index = 0,
    Middle = 1,
    Ring = 2,
    Little = 3,
}

/// Difficulty of jumping between two fingers of one hand, `[from][to]`.
pub const BIG_STEP_PENALTY: [[u32; 4]; 4] = [
    // Index
    [0, 5, 8, 6],
    // Middle
    [5, 0, 9, 7],
    // Ring
    [8, 9, 0, 10],
    // Little
    [6, 7, 10, 0],
];

pub fn finger(key: Key) -> Finger {
    match key.location().col_weight {
        1 | 2 => Finger::Index,
        3 => Finger::Middle,
        4 => Finger::Ring,
        _ => Finger::Little,
    }
}

pub fn is_same_finger(a: Key, b: Key) -> bool {
    finger(a) == finger(b)
}

pub fn is_same_hand(a: Key, b: Key) -> bool {
    a.location().hand == b.location().hand
}

/// Manhattan distance in (row, column weight) space.
pub fn distance(a: Key, b: Key) -> u32 {
    let la = a.location();
    let lb = b.location();
    (la.col_weight as i32 - lb.col_weight as i32).unsigned_abs()
        + (la.row as i32 - lb.row as i32).unsigned_abs()
}

/// Striking from the little finger toward the index finger is preferred.
pub fn is_preferred_hit_direction(a: Key, b: Key) -> bool {
    finger(a) >= finger(b)
}

pub fn big_step_penalty(a: Key, b: Key) -> u32 {
    BIG_STEP_PENALTY[finger(a) as usize][finger(b) as usize]
}

/// Everything the engine needs to know about a same-hand bigram.
#[derive(Debug, Default, PartialEq)]
pub struct KeyInteraction {
    pub is_same_hand: bool,
    pub is_same_finger: bool,
    pub distance: u32,
    pub big_step: u32,
    pub is_reverse_direction: bool,
}

pub fn analyze_interaction(a: Key, b: Key) -> KeyInteraction {
    let mut res = KeyInteraction::default();
    if !is_same_hand(a, b) {
        return res;
    }
    res.is_same_hand = true;
    res.is_same_finger = is_same_finger(a, b);
    res.distance = distance(a, b);
    res.big_step = big_step_penalty(a, b);
    res.is_reverse_direction = !is_preferred_hit_direction(a, b);
    res
}
