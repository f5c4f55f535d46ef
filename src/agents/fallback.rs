//! Deterministic fallback policy (spec §4.5 "Failure handling"), grounded
//! on the teacher's `BotAI` heuristics (`should_buy`, `calculate_max_bid`,
//! jail handling) but pinned to the exact literal rules the spec mandates
//! rather than the teacher's tunable priority table. Used both when an
//! agent's structured call fails twice, and as the `MockAgent` stub for
//! deterministic tests.

use uuid::Uuid;

use crate::agents::decision::{ActionBundle, DebtPlan, JailAction};
use crate::personality::PersonalityProfile;
use crate::rules::build::can_sell_house;
use crate::state::{GameState, Player};

/// "buy if cash >= 2 x price"
pub fn should_buy(player: &Player, price: u32) -> bool {
    player.cash >= 2 * price as i64
}

/// "bid current_bid + 10 up to price x multiplier"
pub fn auction_bid(player: &Player, price: u32, current_bid: u32, profile: &PersonalityProfile) -> u32 {
    let ceiling = (price as f32 * profile.bid_multiplier) as u32;
    let next = current_bid + 10;
    if next > ceiling || next as i64 > player.cash {
        0
    } else {
        next
    }
}

/// "never propose trade"
pub fn propose_trade() -> Option<crate::rules::trade_validation::TradeProposal> {
    None
}

/// "reject incoming trades"
pub fn respond_to_trade() -> bool {
    false
}

/// "pay fine if affordable else use card else roll"
pub fn jail_action(player: &Player) -> JailAction {
    if player.cash >= crate::engine::turn::JAIL_FINE as i64 {
        JailAction::PayFine
    } else if player.get_out_of_jail_cards > 0 {
        JailAction::UseCard
    } else {
        JailAction::RollDoubles
    }
}

/// "end phase with no builds/mortgages"
pub fn empty_bundle() -> ActionBundle {
    ActionBundle::default()
}

/// "in debt resolution: mortgage every unmortgageable -> sell buildings in
/// reverse even-sell order -> declare bankruptcy". Note this is the
/// opposite stage order from the normal liquidation path (spec §4.3),
/// deliberately — it is the conservative fallback, not the agent's best
/// play.
pub fn debt_plan(state: &GameState, debtor: Uuid) -> DebtPlan {
    let Some(player) = state.get_player(debtor) else {
        return DebtPlan {
            declare_bankruptcy: true,
            ..Default::default()
        };
    };

    let mortgage: Vec<u8> = player
        .properties
        .iter()
        .copied()
        .filter(|&pos| !player.is_mortgaged(pos) && player.house_count(pos) == 0)
        .collect();

    let mut sell_buildings: Vec<u8> = player
        .houses
        .keys()
        .copied()
        .filter(|&pos| can_sell_house(state, debtor, pos))
        .collect();
    sell_buildings.sort_by_key(|&pos| std::cmp::Reverse(player.house_count(pos)));

    DebtPlan {
        sell_buildings,
        mortgage,
        propose_trade: None,
        declare_bankruptcy: false,
    }
}
