use super::{Policy, PolicyContext};
use crate::bot::{BotParams, MovePlanner};
use chopsticks_core::model::moves::Move;
use tracing::{Level, event};

/// Exhaustive look-ahead over the tiny game tree. Deterministic: identical
/// snapshots always produce the same move.
pub struct SearchPolicy {
    params: BotParams,
}

impl SearchPolicy {
    pub fn new(params: BotParams) -> Self {
        Self { params }
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self::new(BotParams::default())
    }
}

impl Policy for SearchPolicy {
    fn choose_move(&mut self, ctx: &PolicyContext) -> Option<Move> {
        let chosen = MovePlanner::choose(ctx, &self.params);
        log_select_decision(ctx, chosen.as_ref(), "search");
        chosen
    }
}

pub(crate) fn log_select_decision(ctx: &PolicyContext, chosen: Option<&Move>, reason: &str) {
    if !tracing::enabled!(Level::INFO) {
        return;
    }

    let choice = chosen
        .map(|mv| mv.to_string())
        .unwrap_or_else(|| "none".to_string());

    event!(
        target: "chopsticks_bot::select",
        Level::INFO,
        computer = ctx.computer_key,
        players = ctx.snapshot.len(),
        chosen = %choice,
        reason,
    );
}

#[cfg(test)]
mod tests {
    use super::SearchPolicy;
    use crate::policy::{Policy, PolicyContext};
    use chopsticks_core::model::hand::HandPair;
    use chopsticks_core::model::snapshot::GameSnapshot;
    use chopsticks_core::rules::is_legal_move;

    #[test]
    fn policy_returns_a_legal_move() {
        let mut snapshot = GameSnapshot::new();
        snapshot.insert("computer", HandPair::new(3, 4));
        snapshot.insert("player1", HandPair::new(1, 2));
        let ctx = PolicyContext {
            computer_key: "computer",
            snapshot: &snapshot,
        };
        let mut policy = SearchPolicy::default();
        let mv = policy.choose_move(&ctx).expect("moves exist");
        assert!(is_legal_move(&snapshot, "computer", &mv));
    }

    #[test]
    fn policy_is_repeatable() {
        let mut snapshot = GameSnapshot::new();
        snapshot.insert("computer", HandPair::new(2, 2));
        snapshot.insert("player1", HandPair::new(4, 1));
        let ctx = PolicyContext {
            computer_key: "computer",
            snapshot: &snapshot,
        };
        let mut policy = SearchPolicy::default();
        assert_eq!(policy.choose_move(&ctx), policy.choose_move(&ctx));
    }
}
