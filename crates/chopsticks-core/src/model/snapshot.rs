use crate::model::hand::HandPair;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The hand values of every player at the moment a move is requested. The
/// caller supplies one of these per call; nothing is retained between calls.
///
/// Keys are the caller's player identifiers. The map is ordered so that
/// iteration (and therefore move enumeration) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameSnapshot {
    players: BTreeMap<String, HandPair>,
}

impl GameSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, hands: HandPair) {
        self.players.insert(key.into(), hands);
    }

    pub fn player(&self, key: &str) -> Option<HandPair> {
        self.players.get(key).copied()
    }

    pub fn set_player(&mut self, key: &str, hands: HandPair) -> bool {
        match self.players.get_mut(key) {
            Some(existing) => {
                *existing = hands;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.players.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> impl Iterator<Item = (&str, HandPair)> {
        self.players.iter().map(|(key, hands)| (key.as_str(), *hands))
    }

    /// Every entry except `key`, in key order.
    pub fn opponents_of<'a>(&'a self, key: &'a str) -> impl Iterator<Item = (&'a str, HandPair)> {
        self.players()
            .filter(move |(candidate, _)| *candidate != key)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::GameSnapshot;
    use crate::model::hand::HandPair;

    fn two_player() -> GameSnapshot {
        let mut snapshot = GameSnapshot::new();
        snapshot.insert("player1", HandPair::new(1, 2));
        snapshot.insert("computer", HandPair::new(3, 4));
        snapshot
    }

    #[test]
    fn lookup_by_key() {
        let snapshot = two_player();
        assert_eq!(snapshot.player("computer"), Some(HandPair::new(3, 4)));
        assert_eq!(snapshot.player("nobody"), None);
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn opponents_exclude_self() {
        let snapshot = two_player();
        let opponents: Vec<_> = snapshot.opponents_of("computer").collect();
        assert_eq!(opponents, vec![("player1", HandPair::new(1, 2))]);
    }

    #[test]
    fn set_player_rejects_unknown_key() {
        let mut snapshot = two_player();
        assert!(snapshot.set_player("player1", HandPair::new(0, 2)));
        assert!(!snapshot.set_player("nobody", HandPair::new(1, 1)));
        assert_eq!(snapshot.player("player1"), Some(HandPair::new(0, 2)));
    }

    #[test]
    fn parses_the_callers_json_shape() {
        let json = r#"{"player1": {"leftHand": 1, "rightHand": 2},
                       "computer": {"leftHand": 3, "rightHand": 4}}"#;
        let snapshot = GameSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot, two_player());
    }

    #[test]
    fn json_round_trip_preserves_players() {
        let snapshot = two_player();
        let json = snapshot.to_json().unwrap();
        assert_eq!(GameSnapshot::from_json(&json).unwrap(), snapshot);
    }
}
