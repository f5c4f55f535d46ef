//! Landing resolution (spec §4.2), grounded on the teacher's
//! `handle_tile_landing`. Splits unowned purchasable tiles out to a
//! `BuyDecision` outcome the orchestrator turns into an agent call, rather
//! than deciding buy/no-buy itself.

use crate::board::{get_space, CardEffect, DeckKind, SpaceKind};
use crate::error::{EngineError, EngineResult};
use crate::events::{EventKind, JailReason};
use crate::rng::GameRng;
use crate::rules::rent::{nearest_railroad_rent, rent_due};
use crate::state::{GameState, TurnPhase};

/// What the orchestrator must do next after a landing resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LandingOutcome {
    /// Nothing further needed this phase; advance to POST_ROLL.
    Resolved,
    /// Tile is unowned and purchasable; ask the current player to buy.
    OfferPurchase { position: u8, price: u32 },
}

pub fn resolve_landing(
    state: &mut GameState,
    rng: &mut GameRng,
) -> EngineResult<(Vec<EventKind>, LandingOutcome)> {
    let mut events = Vec::new();
    let position = state.current_player().position;
    let outcome = resolve_space(state, position, rng, &mut events)?;

    // Landing itself is always resolved at this point; an `OfferPurchase`
    // outcome just means one more agent decision (buy-or-auction) is still
    // pending before POST_ROLL bundles run. Doubles re-roll eligibility
    // (`may_roll_again`) must not be held hostage by that pending decision.
    state.turn_phase = TurnPhase::PostRoll;

    Ok((events, outcome))
}

/// Resolve whatever is on `position` for the current player. Used both for
/// the dice-rolled landing and, recursively, for every card-induced move
/// (spec §4.2: "card-induced moves recursively resolve their landing
/// space"), since a card can land a player on another card space.
fn resolve_space(
    state: &mut GameState,
    position: u8,
    rng: &mut GameRng,
    events: &mut Vec<EventKind>,
) -> EngineResult<LandingOutcome> {
    let space = get_space(position).ok_or(EngineError::InvalidTile(position))?;

    let outcome = match space.kind {
        SpaceKind::Go | SpaceKind::Jail | SpaceKind::FreeParking => LandingOutcome::Resolved,
        SpaceKind::GoToJail => {
            crate::engine::turn::send_to_jail(state, JailReason::GoToJailSpace, events);
            LandingOutcome::Resolved
        }
        SpaceKind::Tax => {
            let player = state.current_player_mut();
            player.cash -= space.tax_amount as i64;
            events.push(EventKind::TaxPaid {
                position,
                amount: space.tax_amount,
            });
            LandingOutcome::Resolved
        }
        SpaceKind::Chance | SpaceKind::CommunityChest => {
            let deck_kind = if space.kind == SpaceKind::Chance {
                DeckKind::Chance
            } else {
                DeckKind::CommunityChest
            };
            let card = state.deck_mut(deck_kind).draw();
            events.push(EventKind::CardDrawn {
                deck: deck_kind,
                text: card.text.to_string(),
            });
            apply_card_effect(state, deck_kind, card.effect, rng, events)?
        }
        SpaceKind::Property | SpaceKind::Railroad | SpaceKind::Utility => match state.owner_of(position) {
            None => LandingOutcome::OfferPurchase {
                position,
                price: space.price,
            },
            Some(owner) if owner == state.current_player().id => LandingOutcome::Resolved,
            Some(owner) => {
                let dice_total = state.last_roll.map(|r| r.total()).unwrap_or(7);
                charge_rent(state, position, owner, dice_total, events);
                LandingOutcome::Resolved
            }
        },
    };

    Ok(outcome)
}

fn charge_rent(
    state: &mut GameState,
    position: u8,
    owner: uuid::Uuid,
    dice_total: u32,
    events: &mut Vec<EventKind>,
) {
    let payer = state.current_player().id;
    let amount = rent_due(state, position, payer, dice_total);
    if amount == 0 {
        return;
    }
    state.current_player_mut().cash -= amount as i64;
    if let Some(owner_player) = state.get_player_mut(owner) {
        owner_player.cash += amount as i64;
    }
    events.push(EventKind::RentPaid {
        payer,
        owner,
        position,
        amount,
    });
}

fn apply_card_effect(
    state: &mut GameState,
    deck_kind: DeckKind,
    effect: CardEffect,
    rng: &mut GameRng,
    events: &mut Vec<EventKind>,
) -> EngineResult<LandingOutcome> {
    match effect {
        CardEffect::AdvanceTo { position } => {
            move_to_absolute(state, position, events);
            resolve_space(state, position, rng, events)
        }
        CardEffect::AdvanceNearestRailroad { pay_double } => {
            let railroads = [5u8, 15, 25, 35];
            let current = state.current_player().position;
            let target = railroads
                .iter()
                .copied()
                .find(|&r| r > current)
                .unwrap_or(railroads[0]);
            move_to_absolute(state, target, events);
            match state.owner_of(target) {
                None => Ok(LandingOutcome::OfferPurchase {
                    position: target,
                    price: get_space(target).map(|s| s.price).unwrap_or(0),
                }),
                Some(owner) if owner == state.current_player().id => Ok(LandingOutcome::Resolved),
                Some(owner) => {
                    let dice_total = state.last_roll.map(|r| r.total()).unwrap_or(7);
                    let payer = state.current_player().id;
                    let amount = if pay_double {
                        nearest_railroad_rent(state, target, payer, dice_total)
                    } else {
                        rent_due(state, target, payer, dice_total)
                    };
                    if amount > 0 {
                        state.current_player_mut().cash -= amount as i64;
                        if let Some(owner_player) = state.get_player_mut(owner) {
                            owner_player.cash += amount as i64;
                        }
                        events.push(EventKind::RentPaid {
                            payer,
                            owner,
                            position: target,
                            amount,
                        });
                    }
                    Ok(LandingOutcome::Resolved)
                }
            }
        }
        CardEffect::AdvanceNearestUtility => {
            let utilities = [12u8, 28];
            let current = state.current_player().position;
            let target = utilities.iter().copied().find(|&u| u > current).unwrap_or(utilities[0]);
            move_to_absolute(state, target, events);
            match state.owner_of(target) {
                None => Ok(LandingOutcome::OfferPurchase {
                    position: target,
                    price: get_space(target).map(|s| s.price).unwrap_or(0),
                }),
                Some(owner) if owner == state.current_player().id => Ok(LandingOutcome::Resolved),
                Some(owner) => {
                    // Spec §4.1: a card-sent utility landing rolls fresh
                    // dice and charges 10x regardless of ownership count.
                    let payer = state.current_player().id;
                    let fresh = rng.roll_dice();
                    let amount = fresh.total() * 10;
                    state.current_player_mut().cash -= amount as i64;
                    if let Some(owner_player) = state.get_player_mut(owner) {
                        owner_player.cash += amount as i64;
                    }
                    events.push(EventKind::RentPaid {
                        payer,
                        owner,
                        position: target,
                        amount,
                    });
                    Ok(LandingOutcome::Resolved)
                }
            }
        }
        CardEffect::GoBack { spaces } => {
            let player = state.current_player_mut();
            let from = player.position;
            let new_position = (from + 40 - spaces) % 40;
            player.position = new_position;
            events.push(EventKind::PlayerMoved {
                from,
                new_position,
                spaces_moved: 0,
            });
            resolve_space(state, new_position, rng, events)
        }
        CardEffect::GoToJail => {
            crate::engine::turn::send_to_jail(state, JailReason::Card, events);
            Ok(LandingOutcome::Resolved)
        }
        CardEffect::Collect { amount } => {
            state.current_player_mut().cash += amount as i64;
            Ok(LandingOutcome::Resolved)
        }
        CardEffect::Pay { amount } => {
            state.current_player_mut().cash -= amount as i64;
            Ok(LandingOutcome::Resolved)
        }
        CardEffect::CollectFromEach { amount } => {
            let current_id = state.current_player().id;
            let mut total = 0i64;
            for player in state.players.iter_mut() {
                if player.id != current_id && !player.is_bankrupt {
                    player.cash -= amount as i64;
                    total += amount as i64;
                }
            }
            state.current_player_mut().cash += total;
            Ok(LandingOutcome::Resolved)
        }
        CardEffect::PayEachPlayer { amount } => {
            let current_id = state.current_player().id;
            let mut total = 0i64;
            for player in state.players.iter_mut() {
                if player.id != current_id && !player.is_bankrupt {
                    player.cash += amount as i64;
                    total += amount as i64;
                }
            }
            state.current_player_mut().cash -= total;
            Ok(LandingOutcome::Resolved)
        }
        CardEffect::GetOutOfJail => {
            state.current_player_mut().grant_jail_card(deck_kind);
            state.deck_mut(deck_kind).jail_card_held = true;
            Ok(LandingOutcome::Resolved)
        }
        CardEffect::Repairs { per_house, per_hotel } => {
            let player = state.current_player();
            let mut cost = 0i64;
            for (&pos, &count) in player.houses.iter() {
                if count == crate::rules::build::HOTEL {
                    cost += per_hotel as i64;
                } else {
                    cost += count as i64 * per_house as i64;
                }
                let _ = pos;
            }
            state.current_player_mut().cash -= cost;
            Ok(LandingOutcome::Resolved)
        }
    }
}

fn move_to_absolute(state: &mut GameState, target: u8, events: &mut Vec<EventKind>) {
    let player = state.current_player_mut();
    let from = player.position;
    let passed_go = target < from;
    player.position = target;
    events.push(EventKind::PlayerMoved {
        from,
        new_position: target,
        spaces_moved: if passed_go { 40 - from + target } else { target - from },
    });
    if passed_go {
        player.cash += crate::engine::turn::SALARY as i64;
        events.push(EventKind::PassedGo {
            salary: crate::engine::turn::SALARY,
        });
    }
}
