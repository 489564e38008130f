use core::fmt;
use serde::{Deserialize, Serialize};

/// A hand dies when it reaches this many fingers.
pub const MODULO_BASE: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandSide {
    Left,
    Right,
}

impl HandSide {
    pub const BOTH: [HandSide; 2] = [HandSide::Left, HandSide::Right];

    pub const fn other(self) -> HandSide {
        match self {
            HandSide::Left => HandSide::Right,
            HandSide::Right => HandSide::Left,
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "left" => Some(HandSide::Left),
            "right" => Some(HandSide::Right),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            HandSide::Left => "left",
            HandSide::Right => "right",
        }
    }
}

impl fmt::Display for HandSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One player's pair of hand counters. Values are not assumed to be
/// pre-capped below `MODULO_BASE`; legality only cares about zero versus
/// nonzero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandPair {
    #[serde(rename = "leftHand")]
    pub left: u8,
    #[serde(rename = "rightHand")]
    pub right: u8,
}

impl HandPair {
    pub const fn new(left: u8, right: u8) -> Self {
        Self { left, right }
    }

    pub const fn value(self, side: HandSide) -> u8 {
        match side {
            HandSide::Left => self.left,
            HandSide::Right => self.right,
        }
    }

    pub fn set(&mut self, side: HandSide, value: u8) {
        match side {
            HandSide::Left => self.left = value,
            HandSide::Right => self.right = value,
        }
    }

    pub const fn is_dead(self, side: HandSide) -> bool {
        self.value(side) == 0
    }

    pub const fn is_eliminated(self) -> bool {
        self.left == 0 && self.right == 0
    }

    pub const fn total(self) -> u16 {
        self.left as u16 + self.right as u16
    }

    pub const fn live_hands(self) -> u8 {
        (self.left != 0) as u8 + (self.right != 0) as u8
    }

    /// True when both pairs hold the same values ignoring left/right order.
    pub const fn same_unordered(self, other: HandPair) -> bool {
        (self.left == other.left && self.right == other.right)
            || (self.left == other.right && self.right == other.left)
    }
}

impl fmt::Display for HandPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.left, self.right)
    }
}
