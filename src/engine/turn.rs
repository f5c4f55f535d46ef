//! Dice, movement, and jail resolution (spec §4.2), grounded on the
//! teacher's `GameEngine::roll_dice` / `send_to_jail`.

use crate::error::{EngineError, EngineResult};
use crate::events::{EventKind, JailExitMethod, JailReason};
use crate::rng::GameRng;
use crate::state::{GameState, TurnPhase};

pub const SALARY: u32 = 200;
pub const JAIL_POSITION: u8 = 10;
pub const JAIL_FINE: u32 = 50;
pub const MAX_CONSECUTIVE_DOUBLES: u8 = 2;
pub const MAX_JAIL_TURNS: u8 = 3;

/// Roll the dice for the current player and apply every consequence short
/// of landing resolution: doubles tracking, the three-doubles-to-jail rule,
/// in-jail escape/fine logic, movement, and passing GO. Returns the events
/// produced, in emission order. Landing resolution (spec §4.2 "Landing
/// resolution") is a separate step the caller performs afterward, only when
/// this function reports the player actually moved.
pub fn roll(state: &mut GameState, rng: &mut GameRng) -> EngineResult<(Vec<EventKind>, bool)> {
    if !matches!(state.turn_phase, TurnPhase::PreRoll | TurnPhase::Roll) {
        return Err(EngineError::WrongPhase {
            expected: "PreRoll or Roll".into(),
            found: format!("{:?}", state.turn_phase),
        });
    }

    let mut events = Vec::new();
    state.jail_escape_this_roll = false;
    let roll = rng.roll_dice();
    state.last_roll = Some(roll);
    events.push(EventKind::DiceRolled {
        d1: roll.d1,
        d2: roll.d2,
        is_doubles: roll.is_doubles(),
    });

    let in_jail = state.current_player().in_jail;

    if in_jail {
        if roll.is_doubles() {
            let player = state.current_player_mut();
            player.in_jail = false;
            player.jail_turns = 0;
            state.jail_escape_this_roll = true;
            events.push(EventKind::PlayerFreed {
                method: JailExitMethod::Doubles,
            });
        } else {
            let player = state.current_player_mut();
            player.jail_turns += 1;
            if player.jail_turns >= MAX_JAIL_TURNS {
                player.cash -= JAIL_FINE as i64;
                player.in_jail = false;
                player.jail_turns = 0;
                events.push(EventKind::PlayerFreed {
                    method: JailExitMethod::ForcedFine,
                });
            } else {
                state.turn_phase = TurnPhase::EndTurn;
                return Ok((events, false));
            }
        }
    } else if roll.is_doubles() {
        let player = state.current_player_mut();
        player.consecutive_doubles += 1;
        if player.consecutive_doubles > MAX_CONSECUTIVE_DOUBLES {
            send_to_jail(state, JailReason::ThreeDoubles, &mut events);
            state.turn_phase = TurnPhase::EndTurn;
            return Ok((events, false));
        }
    } else {
        state.current_player_mut().consecutive_doubles = 0;
    }

    let moved = move_player(state, roll.total(), &mut events);
    state.turn_phase = TurnPhase::Landed;
    Ok((events, moved))
}

/// Move the current player forward by `spaces`, crediting GO salary if they
/// pass or land on it. Returns true (movement always succeeds barring a
/// direct "go to jail" teleport, which callers issue separately).
fn move_player(state: &mut GameState, spaces: u32, events: &mut Vec<EventKind>) -> bool {
    let player = state.current_player_mut();
    let from = player.position;
    let new_position = ((from as u32 + spaces) % 40) as u8;
    let passed_go = new_position < from || (spaces >= 40);
    player.position = new_position;
    events.push(EventKind::PlayerMoved {
        from,
        new_position,
        spaces_moved: spaces as u8,
    });
    if passed_go {
        player.cash += SALARY as i64;
        events.push(EventKind::PassedGo { salary: SALARY });
    }
    true
}

/// Teleport the current player directly to jail (GO TO JAIL space, or the
/// three-doubles rule). Resets doubles/jail-turn counters.
pub fn send_to_jail(state: &mut GameState, reason: JailReason, events: &mut Vec<EventKind>) {
    let player = state.current_player_mut();
    player.position = JAIL_POSITION;
    player.in_jail = true;
    player.jail_turns = 0;
    player.consecutive_doubles = 0;
    events.push(EventKind::PlayerJailed { reason });
}

/// Pay the jail fine out of turn (the agent chooses this during PRE_ROLL
/// instead of waiting for a roll).
pub fn pay_jail_fine(state: &mut GameState) -> EngineResult<EventKind> {
    let player = state.current_player_mut();
    if !player.in_jail {
        return Err(EngineError::IllegalAction("player is not in jail".into()));
    }
    if player.cash < JAIL_FINE as i64 {
        return Err(EngineError::IllegalAction("cannot afford jail fine".into()));
    }
    player.cash -= JAIL_FINE as i64;
    player.in_jail = false;
    player.jail_turns = 0;
    Ok(EventKind::PlayerFreed {
        method: JailExitMethod::PaidFine,
    })
}

/// Spend a held Get Out of Jail Free card, returning it to the bottom of
/// its origin deck (spec §4.2).
pub fn use_jail_card(state: &mut GameState) -> EngineResult<EventKind> {
    if !state.current_player().in_jail {
        return Err(EngineError::IllegalAction("player is not in jail".into()));
    }
    let deck_kind = state
        .current_player_mut()
        .take_jail_card()
        .ok_or_else(|| EngineError::IllegalAction("no jail card held".into()))?;
    state.deck_mut(deck_kind).return_jail_card();
    let player = state.current_player_mut();
    player.in_jail = false;
    player.jail_turns = 0;
    Ok(EventKind::PlayerFreed {
        method: JailExitMethod::UsedCard,
    })
}

/// Whether the current player may still roll again this turn (doubles not
/// yet exhausted, and they did not just escape jail on this roll).
pub fn may_roll_again(state: &GameState) -> bool {
    state.last_roll.map(|r| r.is_doubles()).unwrap_or(false)
        && !state.current_player().in_jail
        && !state.jail_escape_this_roll
        && matches!(state.turn_phase, TurnPhase::PostRoll)
}
