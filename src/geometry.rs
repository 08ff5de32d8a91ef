use crate::error::{ShuangForgeError, SfResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// One of the 26 letter keys of a QWERTY board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Key {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Hand {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub hand: Hand,
    pub row: u8,        // 0=Upper, 1=Home, 2=Bottom
    pub col_weight: u8, // 1-2=Index, 3=Middle, 4=Ring, 5=Little
}

const fn loc(hand: Hand, row: u8, col_weight: u8) -> Location {
    Location {
        hand,
        row,
        col_weight,
    }
}

use Hand::{Left, Right};

/// Share (in percent) of all keystrokes each location should ideally take.
/// The bottom-right weight-5 slot has no key and therefore no entry.
pub const IDEAL_WORKLOAD: [(Location, f64); 26] = [
    // Upper
    (loc(Left, 0, 5), 1.168),
    (loc(Left, 0, 4), 3.170),
    (loc(Left, 0, 3), 4.060),
    (loc(Left, 0, 2), 2.724),
    (loc(Left, 0, 1), 1.835),
    (loc(Right, 0, 1), 1.835),
    (loc(Right, 0, 2), 2.724),
    (loc(Right, 0, 3), 4.060),
    (loc(Right, 0, 4), 3.170),
    (loc(Right, 0, 5), 1.168),
    // Home
    (loc(Left, 1, 5), 2.854),
    (loc(Left, 1, 4), 7.747),
    (loc(Left, 1, 3), 9.922),
    (loc(Left, 1, 2), 6.657),
    (loc(Left, 1, 1), 4.486),
    (loc(Right, 1, 1), 4.486),
    (loc(Right, 1, 2), 6.657),
    (loc(Right, 1, 3), 9.922),
    (loc(Right, 1, 4), 7.747),
    // Bottom
    (loc(Left, 2, 5), 0.907),
    (loc(Left, 2, 4), 2.463),
    (loc(Left, 2, 3), 3.155),
    (loc(Left, 2, 2), 2.117),
    (loc(Left, 2, 1), 1.427),
    (loc(Right, 2, 1), 1.427),
    (loc(Right, 2, 2), 2.117),
];

impl Key {
    pub const ALL: [Key; 26] = [
        Key::A,
        Key::B,
        Key::C,
        Key::D,
        Key::E,
        Key::F,
        Key::G,
        Key::H,
        Key::I,
        Key::J,
        Key::K,
        Key::L,
        Key::M,
        Key::N,
        Key::O,
        Key::P,
        Key::Q,
        Key::R,
        Key::S,
        Key::T,
        Key::U,
        Key::V,
        Key::W,
        Key::X,
        Key::Y,
        Key::Z,
    ];

    /// Physical location inherited from QWERTY.
    pub const fn location(self) -> Location {
        match self {
            // Upper
            Key::Q => loc(Left, 0, 5),
            Key::W => loc(Left, 0, 4),
            Key::E => loc(Left, 0, 3),
            Key::R => loc(Left, 0, 2),
            Key::T => loc(Left, 0, 1),
            Key::Y => loc(Right, 0, 1),
            Key::U => loc(Right, 0, 2),
            Key::I => loc(Right, 0, 3),
            Key::O => loc(Right, 0, 4),
            Key::P => loc(Right, 0, 5),
            // Home
            Key::A => loc(Left, 1, 5),
            Key::S => loc(Left, 1, 4),
            Key::D => loc(Left, 1, 3),
            Key::F => loc(Left, 1, 2),
            Key::G => loc(Left, 1, 1),
            Key::H => loc(Right, 1, 1),
            Key::J => loc(Right, 1, 2),
            Key::K => loc(Right, 1, 3),
            Key::L => loc(Right, 1, 4),
            // Bottom
            Key::Z => loc(Left, 2, 5),
            Key::X => loc(Left, 2, 4),
            Key::C => loc(Left, 2, 3),
            Key::V => loc(Left, 2, 2),
            Key::B => loc(Left, 2, 1),
            Key::N => loc(Right, 2, 1),
            Key::M => loc(Right, 2, 2),
        }
    }

    pub fn as_char(self) -> char {
        (b'a' + self as u8) as char
    }

    pub fn from_char(c: char) -> SfResult<Key> {
        Key::ALL
            .iter()
            .copied()
            .find(|k| k.as_char() == c)
            .ok_or_else(|| ShuangForgeError::UnknownKey(c.to_string()))
    }

    /// Parses a key name, failing loudly on anything outside the alphabet.
    pub fn parse(name: &str) -> SfResult<Key> {
        Key::from_str(name).map_err(|_| ShuangForgeError::UnknownKey(name.to_string()))
    }

    pub fn ideal_workload(self) -> SfResult<f64> {
        ideal_workload(self.location())
    }
}

pub fn ideal_workload(location: Location) -> SfResult<f64> {
    IDEAL_WORKLOAD
        .iter()
        .find(|(l, _)| *l == location)
        .map(|(_, share)| *share)
        .ok_or_else(|| {
            ShuangForgeError::Validation(format!("No ideal workload for location {}", location))
        })
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hand = match self.hand {
            Hand::Left => 0,
            Hand::Right => 1,
        };
        write!(f, "({}, {}, {})", hand, self.row, self.col_weight)
    }
}
