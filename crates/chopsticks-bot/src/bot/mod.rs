mod params;
mod planner;
mod search;

pub use params::BotParams;
pub use planner::MovePlanner;

use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotDifficulty {
    EasyRandom,
    NormalSearch,
}

impl Default for BotDifficulty {
    fn default() -> Self {
        Self::NormalSearch
    }
}

impl BotDifficulty {
    pub fn from_env() -> Self {
        static CACHED: OnceLock<BotDifficulty> = OnceLock::new();
        *CACHED.get_or_init(|| match std::env::var("CHOPSTICKS_BOT_DIFFICULTY") {
            Ok(raw) => Self::from_label(&raw),
            Err(_) => BotDifficulty::default(),
        })
    }

    fn from_label(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "easy" => BotDifficulty::EasyRandom,
            "random" => BotDifficulty::EasyRandom,
            "normal" => BotDifficulty::NormalSearch,
            "search" => BotDifficulty::NormalSearch,
            "default" => BotDifficulty::NormalSearch,
            _ => BotDifficulty::default(),
        }
    }
}
