use crate::model::hand::HandSide;
use core::fmt;
use serde::{Deserialize, Serialize};

/// A move for the player on turn. `Add` transfers the value of one of the
/// actor's own hands onto an opposing hand; `Split` redistributes the
/// actor's own two hand values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Move {
    Add {
        source: HandSide,
        target_player: String,
        target: HandSide,
    },
    Split {
        new_left: u8,
        new_right: u8,
    },
}

impl Move {
    pub fn add(source: HandSide, target_player: impl Into<String>, target: HandSide) -> Self {
        Move::Add {
            source,
            target_player: target_player.into(),
            target,
        }
    }

    pub const fn split(new_left: u8, new_right: u8) -> Self {
        Move::Split {
            new_left,
            new_right,
        }
    }

    pub const fn is_add(&self) -> bool {
        matches!(self, Move::Add { .. })
    }

    pub const fn is_split(&self) -> bool {
        matches!(self, Move::Split { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Add {
                source,
                target_player,
                target,
            } => write!(f, "add {source} -> {target_player}:{target}"),
            Move::Split {
                new_left,
                new_right,
            } => write!(f, "split {new_left}/{new_right}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::model::hand::HandSide;

    #[test]
    fn add_displays_source_and_target() {
        let mv = Move::add(HandSide::Left, "player2", HandSide::Right);
        assert_eq!(mv.to_string(), "add left -> player2:right");
        assert!(mv.is_add());
        assert!(!mv.is_split());
    }

    #[test]
    fn split_displays_new_values() {
        let mv = Move::split(3, 2);
        assert_eq!(mv.to_string(), "split 3/2");
        assert!(mv.is_split());
    }
}
