//! Static named personality profiles for agents
//!
//! Generalizes the teacher's `BotPersonality` (which only drove numeric
//! buy/bid/build thresholds) into named profiles that also template the
//! "Static personality block" section of the agent prompt (spec §4.5).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalityId {
    Shark,
    Professor,
    Hustler,
    Turtle,
}

#[derive(Debug, Clone, Copy)]
pub struct PersonalityProfile {
    pub id: PersonalityId,
    pub display_name: &'static str,
    /// Verbatim text inserted into the prompt's personality block.
    pub prompt_block: &'static str,
    /// Fraction of cash the fallback policy is willing to spend on a buy.
    pub buy_threshold: f32,
    /// Multiplier over assessed property value the fallback is willing to bid.
    pub bid_multiplier: f32,
    /// Cash buffer the fallback keeps in reserve before building.
    pub build_reserve: i64,
}

impl PersonalityId {
    pub fn profile(self) -> PersonalityProfile {
        match self {
            PersonalityId::Shark => PersonalityProfile {
                id: self,
                display_name: "Shark",
                prompt_block: "You are Shark: ruthless, opportunistic, always hunting for a \
                    monopoly. You buy aggressively and bid to squeeze out rivals, but you \
                    never bluff about cash you don't have.",
                buy_threshold: 0.70,
                bid_multiplier: 1.5,
                build_reserve: 100,
            },
            PersonalityId::Professor => PersonalityProfile {
                id: self,
                display_name: "Professor",
                prompt_block: "You are Professor: methodical and statistics-driven. You buy \
                    properties whose long-run expected rent justifies the price, and you \
                    explain your reasoning in measured, understated terms.",
                buy_threshold: 0.55,
                bid_multiplier: 1.3,
                build_reserve: 250,
            },
            PersonalityId::Hustler => PersonalityProfile {
                id: self,
                display_name: "Hustler",
                prompt_block: "You are Hustler: a dealmaker who talks constantly and proposes \
                    trades other players haven't considered. You'll part with cash for the \
                    right property and you never stop negotiating.",
                buy_threshold: 0.65,
                bid_multiplier: 1.4,
                build_reserve: 150,
            },
            PersonalityId::Turtle => PersonalityProfile {
                id: self,
                display_name: "Turtle",
                prompt_block: "You are Turtle: cautious to a fault. You hoard cash, buy only \
                    sure things, and avoid auctions unless the price is a steal.",
                buy_threshold: 0.40,
                bid_multiplier: 1.1,
                build_reserve: 500,
            },
        }
    }
}
