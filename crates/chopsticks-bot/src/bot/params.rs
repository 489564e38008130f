/// Tunable search and scoring weights.
#[derive(Debug, Clone, Copy)]
pub struct BotParams {
    /// Plies of look-ahead; the reachable state space is tiny so the memo
    /// keeps this cheap.
    pub search_depth: u8,
    /// Base value of a won position; the remaining depth is added so the
    /// search prefers faster wins and slower losses.
    pub win_score: i32,
    pub live_hand_weight: i32,
    /// Applied when a side leaves its two hands equal and exposed.
    pub doubled_penalty: i32,
}

impl Default for BotParams {
    fn default() -> Self {
        Self {
            search_depth: 10,
            win_score: 10_000,
            live_hand_weight: 100,
            doubled_penalty: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BotParams;

    #[test]
    fn win_outweighs_any_heuristic_margin() {
        let params = BotParams::default();
        let max_margin = 2 * params.live_hand_weight + 2 * params.doubled_penalty;
        assert!(params.win_score > max_margin + params.search_depth as i32);
    }
}
