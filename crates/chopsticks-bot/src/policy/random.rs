use super::search::log_select_decision;
use super::{Policy, PolicyContext};
use chopsticks_core::model::moves::Move;
use chopsticks_core::rules::legal_moves;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Uniform choice among the legal moves, matching the original random
/// computer opponent. Distinct calls on the same snapshot may return
/// different moves; seed it for repeatable behavior.
pub struct RandomPolicy {
    rng: SmallRng,
}

impl RandomPolicy {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl Policy for RandomPolicy {
    fn choose_move(&mut self, ctx: &PolicyContext) -> Option<Move> {
        let mut moves = legal_moves(ctx.snapshot, ctx.computer_key);
        if moves.is_empty() {
            log_select_decision(ctx, None, "random");
            return None;
        }
        let index = self.rng.gen_range(0..moves.len());
        let chosen = moves.swap_remove(index);
        log_select_decision(ctx, Some(&chosen), "random");
        Some(chosen)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomPolicy;
    use crate::policy::{Policy, PolicyContext};
    use chopsticks_core::model::hand::HandPair;
    use chopsticks_core::model::snapshot::GameSnapshot;
    use chopsticks_core::rules::is_legal_move;

    fn snapshot() -> GameSnapshot {
        let mut snapshot = GameSnapshot::new();
        snapshot.insert("computer", HandPair::new(3, 1));
        snapshot.insert("player1", HandPair::new(0, 2));
        snapshot
    }

    #[test]
    fn every_draw_is_legal() {
        let snapshot = snapshot();
        let ctx = PolicyContext {
            computer_key: "computer",
            snapshot: &snapshot,
        };
        let mut policy = RandomPolicy::seeded(42);
        for _ in 0..100 {
            let mv = policy.choose_move(&ctx).expect("moves exist");
            assert!(is_legal_move(&snapshot, "computer", &mv), "{mv}");
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let snapshot = snapshot();
        let ctx = PolicyContext {
            computer_key: "computer",
            snapshot: &snapshot,
        };
        let mut first = RandomPolicy::seeded(7);
        let mut second = RandomPolicy::seeded(7);
        for _ in 0..20 {
            assert_eq!(first.choose_move(&ctx), second.choose_move(&ctx));
        }
    }

    #[test]
    fn no_moves_yields_none() {
        let mut snapshot = GameSnapshot::new();
        snapshot.insert("computer", HandPair::new(0, 0));
        snapshot.insert("player1", HandPair::new(1, 1));
        let ctx = PolicyContext {
            computer_key: "computer",
            snapshot: &snapshot,
        };
        let mut policy = RandomPolicy::seeded(1);
        assert_eq!(policy.choose_move(&ctx), None);
    }
}
