pub mod bot;
pub mod policy;

pub use bot::{BotDifficulty, BotParams, MovePlanner};
pub use policy::{Policy, PolicyContext, RandomPolicy, SearchPolicy, policy_for};

use chopsticks_core::model::moves::Move;
use chopsticks_core::model::snapshot::GameSnapshot;

/// Why no move could be returned for a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    UnknownPlayer(String),
    NoLegalMove,
}

/// Picks one legal move for `computer_key` from the given snapshot, or
/// reports that none exists. Deterministic: identical snapshots yield
/// identical moves.
pub fn calculate_move(
    snapshot: &GameSnapshot,
    computer_key: &str,
) -> Result<Move, SelectionError> {
    if !snapshot.contains(computer_key) {
        return Err(SelectionError::UnknownPlayer(computer_key.to_string()));
    }
    let ctx = PolicyContext {
        computer_key,
        snapshot,
    };
    MovePlanner::choose(&ctx, &BotParams::default()).ok_or(SelectionError::NoLegalMove)
}
