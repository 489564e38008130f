use crate::model::hand::{HandPair, HandSide, MODULO_BASE};
use crate::model::moves::Move;
use crate::model::snapshot::GameSnapshot;

/// Why a proposed move is illegal for the given snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    UnknownPlayer(String),
    DeadSourceHand(HandSide),
    DeadTargetHand(String, HandSide),
    SelfTarget,
    SymmetricSplit,
    SplitExceedsTotal,
}

/// Checks `mv` against the legality rules for `actor`. Adds must come from
/// a live hand of the actor and land on a live hand of a different player.
/// Splits must keep the actor's total from growing and must change the
/// unordered pair of values.
pub fn validate_move(
    snapshot: &GameSnapshot,
    actor: &str,
    mv: &Move,
) -> Result<(), RuleViolation> {
    let own = snapshot
        .player(actor)
        .ok_or_else(|| RuleViolation::UnknownPlayer(actor.to_string()))?;

    match mv {
        Move::Add {
            source,
            target_player,
            target,
        } => {
            let target_hands = snapshot
                .player(target_player)
                .ok_or_else(|| RuleViolation::UnknownPlayer(target_player.clone()))?;
            if target_player == actor {
                return Err(RuleViolation::SelfTarget);
            }
            if own.is_dead(*source) {
                return Err(RuleViolation::DeadSourceHand(*source));
            }
            if target_hands.is_dead(*target) {
                return Err(RuleViolation::DeadTargetHand(target_player.clone(), *target));
            }
            Ok(())
        }
        Move::Split {
            new_left,
            new_right,
        } => {
            let new_pair = HandPair::new(*new_left, *new_right);
            if new_pair.total() > own.total() {
                return Err(RuleViolation::SplitExceedsTotal);
            }
            if new_pair.same_unordered(own) {
                return Err(RuleViolation::SymmetricSplit);
            }
            Ok(())
        }
    }
}

pub fn is_legal_move(snapshot: &GameSnapshot, actor: &str, mv: &Move) -> bool {
    validate_move(snapshot, actor, mv).is_ok()
}

/// All legal add moves for `actor`, in a stable order: own source hand,
/// then opponent key, then opposing target hand.
pub fn legal_adds(snapshot: &GameSnapshot, actor: &str) -> Vec<Move> {
    let Some(own) = snapshot.player(actor) else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    for source in HandSide::BOTH {
        if own.is_dead(source) {
            continue;
        }
        for (opponent, hands) in snapshot.opponents_of(actor) {
            for target in HandSide::BOTH {
                if !hands.is_dead(target) {
                    moves.push(Move::add(source, opponent, target));
                }
            }
        }
    }
    moves
}

/// All legal split moves for `actor`, one representative per unordered
/// pair, values bounded by `MODULO_BASE - 1`. Pairs summing to less than
/// the current total are sacrifices and are included.
pub fn legal_splits(snapshot: &GameSnapshot, actor: &str) -> Vec<Move> {
    let Some(own) = snapshot.player(actor) else {
        return Vec::new();
    };

    let max = MODULO_BASE - 1;
    let mut moves = Vec::new();
    for new_left in 0..=max {
        for new_right in new_left..=max {
            let pair = HandPair::new(new_left, new_right);
            if pair.total() <= own.total() && !pair.same_unordered(own) {
                moves.push(Move::split(new_left, new_right));
            }
        }
    }
    moves
}

/// Every legal move for `actor`: adds first, then splits.
pub fn legal_moves(snapshot: &GameSnapshot, actor: &str) -> Vec<Move> {
    let mut moves = legal_adds(snapshot, actor);
    moves.extend(legal_splits(snapshot, actor));
    moves
}

/// Applies a validated move and returns the resulting snapshot. A hand
/// reaching `MODULO_BASE` or more fingers dies (drops to 0); an add leaves
/// the source hand unchanged.
pub fn apply_move(
    snapshot: &GameSnapshot,
    actor: &str,
    mv: &Move,
) -> Result<GameSnapshot, RuleViolation> {
    validate_move(snapshot, actor, mv)?;

    let mut next = snapshot.clone();
    match mv {
        Move::Add {
            source,
            target_player,
            target,
        } => {
            let own = snapshot
                .player(actor)
                .ok_or_else(|| RuleViolation::UnknownPlayer(actor.to_string()))?;
            let mut hands = snapshot
                .player(target_player)
                .ok_or_else(|| RuleViolation::UnknownPlayer(target_player.clone()))?;
            let sum = hands.value(*target) as u16 + own.value(*source) as u16;
            hands.set(*target, normalize(sum));
            next.set_player(target_player, hands);
        }
        Move::Split {
            new_left,
            new_right,
        } => {
            let pair = HandPair::new(
                normalize(*new_left as u16),
                normalize(*new_right as u16),
            );
            next.set_player(actor, pair);
        }
    }
    Ok(next)
}

const fn normalize(value: u16) -> u8 {
    if value >= MODULO_BASE as u16 {
        0
    } else {
        value as u8
    }
}
