use super::BotParams;
use chopsticks_core::model::hand::{HandPair, HandSide, MODULO_BASE};
use std::collections::HashMap;

/// Depth-limited negamax over the two-player state space. Hand values stay
/// below `MODULO_BASE` after the first ply, so positions repeat heavily and
/// the memo bounds the work regardless of depth.
pub(crate) struct Searcher<'a> {
    params: &'a BotParams,
    memo: HashMap<(HandPair, HandPair, u8), i32>,
}

impl<'a> Searcher<'a> {
    pub(crate) fn new(params: &'a BotParams) -> Self {
        Self {
            params,
            memo: HashMap::new(),
        }
    }

    /// Score of the position for the side to move.
    pub(crate) fn evaluate(&mut self, to_move: HandPair, other: HandPair) -> i32 {
        self.negamax(to_move, other, self.params.search_depth)
    }

    fn negamax(&mut self, to_move: HandPair, other: HandPair, depth: u8) -> i32 {
        if other.is_eliminated() {
            return self.params.win_score + depth as i32;
        }
        if to_move.is_eliminated() {
            return -(self.params.win_score + depth as i32);
        }
        if depth == 0 {
            return heuristic(to_move, other, self.params);
        }
        if let Some(&score) = self.memo.get(&(to_move, other, depth)) {
            return score;
        }

        let mut best = i32::MIN;
        for (next_own, next_foe) in successors(to_move, other) {
            let score = -self.negamax(next_foe, next_own, depth - 1);
            if score > best {
                best = score;
            }
        }
        // Both sides alive always leaves at least one add, but stay safe.
        if best == i32::MIN {
            best = heuristic(to_move, other, self.params);
        }
        self.memo.insert((to_move, other, depth), best);
        best
    }
}

/// Static evaluation from the perspective of the side to move.
pub(crate) fn heuristic(to_move: HandPair, other: HandPair, params: &BotParams) -> i32 {
    let mut score =
        (to_move.live_hands() as i32 - other.live_hands() as i32) * params.live_hand_weight;
    if to_move.left == to_move.right && !to_move.is_eliminated() {
        score -= params.doubled_penalty;
    }
    if other.left == other.right && !other.is_eliminated() {
        score += params.doubled_penalty;
    }
    score
}

/// Successor positions of the side to move, as (own hands, opposing hands)
/// after the move. Mirrors `rules::legal_moves` + `rules::apply_move` for
/// the two-player game, without snapshot allocation in the hot path.
fn successors(own: HandPair, foe: HandPair) -> Vec<(HandPair, HandPair)> {
    let mut next = Vec::new();

    for source in HandSide::BOTH {
        if own.is_dead(source) {
            continue;
        }
        for target in HandSide::BOTH {
            if foe.is_dead(target) {
                continue;
            }
            let mut hit = foe;
            let sum = foe.value(target) as u16 + own.value(source) as u16;
            hit.set(target, kill_rule(sum));
            next.push((own, hit));
        }
    }

    let max = MODULO_BASE - 1;
    for new_left in 0..=max {
        for new_right in new_left..=max {
            let pair = HandPair::new(new_left, new_right);
            if pair.total() <= own.total() && !pair.same_unordered(own) {
                next.push((pair, foe));
            }
        }
    }

    next
}

const fn kill_rule(value: u16) -> u8 {
    if value >= MODULO_BASE as u16 {
        0
    } else {
        value as u8
    }
}
