use super::params::BotParams;
use super::search::{Searcher, heuristic};
use crate::policy::PolicyContext;
use chopsticks_core::model::moves::Move;
use chopsticks_core::rules::{apply_move, legal_moves};

pub struct MovePlanner;

impl MovePlanner {
    /// Enumerates every legal move for the context's computer player, scores
    /// each candidate, and returns the best. `None` when the snapshot offers
    /// no legal move. Ties break toward the earlier candidate in enumeration
    /// order, so the choice is deterministic for a fixed snapshot.
    pub fn choose(ctx: &PolicyContext<'_>, params: &BotParams) -> Option<Move> {
        ctx.snapshot.player(ctx.computer_key)?;
        let moves = legal_moves(ctx.snapshot, ctx.computer_key);

        // Full look-ahead only covers the two-player game; snapshots with
        // more opponents fall back to one-ply scoring.
        let single_opponent = {
            let mut opponents = ctx.snapshot.opponents_of(ctx.computer_key);
            match (opponents.next(), opponents.next()) {
                (Some((key, _)), None) => Some(key),
                _ => None,
            }
        };

        let mut searcher = Searcher::new(params);
        let mut best: Option<(Move, i32)> = None;
        for mv in moves {
            let Ok(next) = apply_move(ctx.snapshot, ctx.computer_key, &mv) else {
                continue;
            };
            let Some(own_after) = next.player(ctx.computer_key) else {
                continue;
            };
            let score = match single_opponent {
                Some(opponent) => {
                    let Some(foe_after) = next.player(opponent) else {
                        continue;
                    };
                    -searcher.evaluate(foe_after, own_after)
                }
                None => next
                    .opponents_of(ctx.computer_key)
                    .map(|(_, hands)| heuristic(own_after, hands, params))
                    .sum(),
            };
            if best.as_ref().is_none_or(|(_, top)| score > *top) {
                best = Some((mv, score));
            }
        }
        best.map(|(mv, _)| mv)
    }
}
