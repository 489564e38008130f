mod random;
mod search;

pub use random::RandomPolicy;
pub use search::SearchPolicy;

use crate::bot::BotDifficulty;
use chopsticks_core::model::moves::Move;
use chopsticks_core::model::snapshot::GameSnapshot;

/// Context provided to policies for decision-making. The computer's own
/// entry in the snapshot is named explicitly rather than inferred from key
/// order.
pub struct PolicyContext<'a> {
    pub computer_key: &'a str,
    pub snapshot: &'a GameSnapshot,
}

/// Unified interface for move selection.
pub trait Policy: Send {
    /// Choose one legal move, or `None` when the snapshot offers none.
    fn choose_move(&mut self, ctx: &PolicyContext) -> Option<Move>;
}

pub fn policy_for(difficulty: BotDifficulty) -> Box<dyn Policy> {
    match difficulty {
        BotDifficulty::EasyRandom => Box::new(RandomPolicy::from_entropy()),
        BotDifficulty::NormalSearch => Box::new(SearchPolicy::default()),
    }
}
