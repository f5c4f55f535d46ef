//! The per-game facade: owns `GameState` + the seeded RNG, and exposes one
//! method per engine mutation the orchestrator can apply. Nothing here
//! calls an agent or touches the event bus — callers collect the returned
//! `EventKind`s and emit them themselves, stamped with turn/player context
//! (spec §4.7: "agent results are collected, then applied sequentially").

use uuid::Uuid;

use crate::board::get_space;
use crate::error::{EngineError, EngineResult};
use crate::events::EventKind;
use crate::rng::GameRng;
use crate::rules::{build, mortgage};
use crate::state::{Bank, Deck, GameState, Player, TurnPhase};

pub use crate::engine::auction::AuctionState;
pub use crate::engine::bankruptcy::is_insolvent;
pub use crate::engine::landing::LandingOutcome;

#[derive(Clone)]
pub struct Game {
    pub state: GameState,
    pub rng: GameRng,
    pub seed: u64,
    pub auction: Option<AuctionState>,
}

impl Game {
    pub fn new(player_specs: Vec<(Uuid, String)>, seed: Option<u64>, starting_cash: i64) -> Self {
        let seed = seed.unwrap_or_else(GameRng::fresh_seed);
        let mut rng = GameRng::from_seed(seed);
        let chance_deck = Deck::new_shuffled(crate::board::DeckKind::Chance, &mut rng);
        let community_chest_deck = Deck::new_shuffled(crate::board::DeckKind::CommunityChest, &mut rng);
        let mut players: Vec<Player> = player_specs
            .into_iter()
            .map(|(id, name)| Player::new(id, name, starting_cash))
            .collect();
        rng.shuffle(&mut players);
        let state = GameState::new(players, Bank::default(), chance_deck, community_chest_deck);
        Self {
            state,
            rng,
            seed,
            auction: None,
        }
    }

    pub fn player_ids(&self) -> Vec<Uuid> {
        self.state.players.iter().map(|p| p.id).collect()
    }

    pub fn is_over(&self) -> bool {
        self.state.active_player_count() <= 1
    }

    pub fn winner(&self) -> Option<Uuid> {
        if self.state.active_player_count() == 1 {
            self.state.players.iter().find(|p| !p.is_bankrupt).map(|p| p.id)
        } else {
            None
        }
    }

    pub fn roll(&mut self) -> EngineResult<(Vec<EventKind>, bool)> {
        crate::engine::turn::roll(&mut self.state, &mut self.rng)
    }

    pub fn resolve_landing(&mut self) -> EngineResult<(Vec<EventKind>, LandingOutcome)> {
        crate::engine::landing::resolve_landing(&mut self.state, &mut self.rng)
    }

    pub fn pay_jail_fine(&mut self) -> EngineResult<EventKind> {
        crate::engine::turn::pay_jail_fine(&mut self.state)
    }

    pub fn use_jail_card(&mut self) -> EngineResult<EventKind> {
        crate::engine::turn::use_jail_card(&mut self.state)
    }

    pub fn may_roll_again(&self) -> bool {
        crate::engine::turn::may_roll_again(&self.state)
    }

    pub fn buy_current_property(&mut self, position: u8) -> EngineResult<EventKind> {
        let space = get_space(position).ok_or(EngineError::InvalidTile(position))?;
        if self.state.owner_of(position).is_some() {
            return Err(EngineError::IllegalAction("property already owned".into()));
        }
        let price = space.price;
        let player = self.state.current_player_mut();
        if player.cash < price as i64 {
            return Err(EngineError::IllegalAction("cannot afford property".into()));
        }
        player.cash -= price as i64;
        player.properties.insert(position);
        let buyer = player.id;
        self.state.property_owners.insert(position, buyer);
        Ok(EventKind::PropertyPurchased { position, price })
    }

    /// Bidding order: starting with the player to the left of the decliner,
    /// cycling through every other active player, with the decliner last
    /// (spec §4.4: "including the decliner").
    pub fn start_auction(&mut self, position: u8) -> EventKind {
        let decliner_idx = self.state.current_player_index;
        let decliner_id = self.state.players[decliner_idx].id;
        let mut order = Vec::new();
        let mut idx = decliner_idx;
        loop {
            idx = self.state.next_active_index(idx);
            if idx == decliner_idx {
                break;
            }
            order.push(self.state.players[idx].id);
        }
        order.push(decliner_id);
        self.auction = Some(AuctionState::new(position, order));
        EventKind::AuctionStarted { position }
    }

    pub fn bid(&mut self, bidder: Uuid, amount: u32) -> EngineResult<EventKind> {
        let auction = self
            .auction
            .as_mut()
            .ok_or_else(|| EngineError::IllegalAction("no auction in progress".into()))?;
        crate::engine::auction::bid(&self.state, auction, bidder, amount)
    }

    pub fn withdraw_bid(&mut self, bidder: Uuid) -> EngineResult<EventKind> {
        let auction = self
            .auction
            .as_mut()
            .ok_or_else(|| EngineError::IllegalAction("no auction in progress".into()))?;
        Ok(crate::engine::auction::withdraw(auction, bidder))
    }

    pub fn auction_is_over(&self) -> bool {
        self.auction.as_ref().map(|a| a.is_over()).unwrap_or(true)
    }

    pub fn resolve_auction(&mut self) -> EngineResult<EventKind> {
        let auction = self
            .auction
            .take()
            .ok_or_else(|| EngineError::IllegalAction("no auction in progress".into()))?;
        Ok(crate::engine::auction::resolve(&mut self.state, auction))
    }

    pub fn build_house(&mut self, player: Uuid, position: u8) -> EngineResult<EventKind> {
        if !build::can_build_house(&self.state, player, position) {
            return Err(EngineError::IllegalAction("cannot build here".into()));
        }
        let cost = build::house_cost(position);
        let current = self.state.get_player(player).map(|p| p.house_count(position)).unwrap_or(0);
        let built_hotel = current == build::MAX_HOUSES;
        if built_hotel {
            if !self.state.bank.take_hotel() {
                return Err(EngineError::InvariantViolation("hotel supply exhausted".into()));
            }
            // The 4 houses forming the hotel go back to the bank's supply
            // (spec §3.3 conservation: total houses + hotels stays constant).
            for _ in 0..build::MAX_HOUSES {
                self.state.bank.return_house();
            }
        } else if !self.state.bank.take_house() {
            return Err(EngineError::InvariantViolation("house supply exhausted".into()));
        }
        let owner = self.state.get_player_mut(player).ok_or(EngineError::PlayerNotFound(player))?;
        owner.cash -= cost as i64;
        let houses = current + 1;
        owner.houses.insert(position, houses);
        Ok(if built_hotel {
            EventKind::HotelBuilt { position }
        } else {
            EventKind::HouseBuilt { position, houses }
        })
    }

    pub fn sell_house(&mut self, player: Uuid, position: u8) -> EngineResult<Vec<EventKind>> {
        if !build::can_sell_house(&self.state, player, position) {
            return Err(EngineError::IllegalAction("cannot sell here".into()));
        }
        Ok(crate::engine::build_ops::sell_building(&mut self.state, player, position))
    }

    pub fn mortgage(&mut self, player: Uuid, position: u8) -> EngineResult<EventKind> {
        if !mortgage::can_mortgage(&self.state, player, position) {
            return Err(EngineError::IllegalAction("cannot mortgage here".into()));
        }
        let payout = mortgage::mortgage_payout(position);
        let owner = self.state.get_player_mut(player).ok_or(EngineError::PlayerNotFound(player))?;
        owner.mortgaged.insert(position);
        owner.cash += payout as i64;
        Ok(EventKind::PropertyMortgaged { position })
    }

    pub fn unmortgage(&mut self, player: Uuid, position: u8) -> EngineResult<EventKind> {
        if !mortgage::can_unmortgage(&self.state, player, position) {
            return Err(EngineError::IllegalAction("cannot unmortgage here".into()));
        }
        let cost = mortgage::unmortgage_cost(position);
        let owner = self.state.get_player_mut(player).ok_or(EngineError::PlayerNotFound(player))?;
        owner.mortgaged.remove(&position);
        owner.cash -= cost as i64;
        Ok(EventKind::PropertyUnmortgaged { position })
    }

    pub fn liquidate_for_debt(&mut self, debtor: Uuid) -> Vec<EventKind> {
        crate::engine::bankruptcy::liquidate_assets(&mut self.state, debtor)
    }

    pub fn declare_bankrupt(&mut self, debtor: Uuid, creditor: Option<Uuid>) -> Vec<EventKind> {
        crate::engine::bankruptcy::declare_bankrupt(&mut self.state, debtor, creditor)
    }

    pub fn end_turn(&mut self) {
        self.state.turn_phase = TurnPhase::EndTurn;
        self.state.advance_turn();
    }
}
