//! Static board reference data — 40 spaces, reused from the teacher's
//! Richup-style world-city layout (see DESIGN.md).

use serde::{Deserialize, Serialize};

/// Type of space on the board (spec §3.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceKind {
    Go,
    Property,
    Railroad,
    Utility,
    Tax,
    Chance,
    CommunityChest,
    Jail,
    FreeParking,
    GoToJail,
}

/// Color group shared by a set of properties (and the two pseudo-groups
/// used for rent-count lookups on railroads/utilities).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorGroup {
    Brown,
    LightBlue,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    DarkBlue,
    Railroad,
    Utility,
}

impl ColorGroup {
    pub fn property_count(&self) -> u8 {
        match self {
            ColorGroup::Brown | ColorGroup::DarkBlue => 2,
            ColorGroup::Railroad => 4,
            ColorGroup::Utility => 2,
            _ => 3,
        }
    }
}

/// A single board space with its type-specific attribute record (spec §3.1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Space {
    pub position: u8,
    pub name: String,
    pub kind: SpaceKind,
    pub group: Option<ColorGroup>,
    pub price: u32,
    pub mortgage_value: u32,
    /// `[base, 1-house, 2-house, 3-house, 4-house, hotel]` for properties;
    /// `[1rr, 2rr, 3rr, 4rr, 0, 0]` for railroads; `[x4, x10, 0, 0, 0, 0]`
    /// for utilities.
    pub rent_schedule: [u32; 6],
    pub house_cost: u32,
    pub tax_amount: u32,
}

impl Space {
    fn go() -> Self {
        Self {
            position: 0,
            name: "GO".into(),
            kind: SpaceKind::Go,
            group: None,
            price: 0,
            mortgage_value: 0,
            rent_schedule: [0; 6],
            house_cost: 0,
            tax_amount: 0,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn property(
        position: u8,
        name: &str,
        group: ColorGroup,
        price: u32,
        rent_schedule: [u32; 6],
        house_cost: u32,
    ) -> Self {
        Self {
            position,
            name: name.into(),
            kind: SpaceKind::Property,
            group: Some(group),
            price,
            mortgage_value: price / 2,
            rent_schedule,
            house_cost,
            tax_amount: 0,
        }
    }

    fn railroad(position: u8, name: &str) -> Self {
        Self {
            position,
            name: name.into(),
            kind: SpaceKind::Railroad,
            group: Some(ColorGroup::Railroad),
            price: 200,
            mortgage_value: 100,
            rent_schedule: [25, 50, 100, 200, 0, 0],
            house_cost: 0,
            tax_amount: 0,
        }
    }

    fn utility(position: u8, name: &str) -> Self {
        Self {
            position,
            name: name.into(),
            kind: SpaceKind::Utility,
            group: Some(ColorGroup::Utility),
            price: 150,
            mortgage_value: 75,
            rent_schedule: [4, 10, 0, 0, 0, 0],
            house_cost: 0,
            tax_amount: 0,
        }
    }

    fn tax(position: u8, name: &str, amount: u32) -> Self {
        Self {
            position,
            name: name.into(),
            kind: SpaceKind::Tax,
            group: None,
            price: 0,
            mortgage_value: 0,
            rent_schedule: [0; 6],
            house_cost: 0,
            tax_amount: amount,
        }
    }

    fn chance(position: u8) -> Self {
        Self {
            position,
            name: "Chance".into(),
            kind: SpaceKind::Chance,
            group: None,
            price: 0,
            mortgage_value: 0,
            rent_schedule: [0; 6],
            house_cost: 0,
            tax_amount: 0,
        }
    }

    fn community_chest(position: u8) -> Self {
        Self {
            position,
            name: "Community Chest".into(),
            kind: SpaceKind::CommunityChest,
            group: None,
            price: 0,
            mortgage_value: 0,
            rent_schedule: [0; 6],
            house_cost: 0,
            tax_amount: 0,
        }
    }

    fn jail() -> Self {
        Self {
            position: 10,
            name: "Jail".into(),
            kind: SpaceKind::Jail,
            group: None,
            price: 0,
            mortgage_value: 0,
            rent_schedule: [0; 6],
            house_cost: 0,
            tax_amount: 0,
        }
    }

    fn free_parking() -> Self {
        Self {
            position: 20,
            name: "Free Parking".into(),
            kind: SpaceKind::FreeParking,
            group: None,
            price: 0,
            mortgage_value: 0,
            rent_schedule: [0; 6],
            house_cost: 0,
            tax_amount: 0,
        }
    }

    fn go_to_jail() -> Self {
        Self {
            position: 30,
            name: "Go To Jail".into(),
            kind: SpaceKind::GoToJail,
            group: None,
            price: 0,
            mortgage_value: 0,
            rent_schedule: [0; 6],
            house_cost: 0,
            tax_amount: 0,
        }
    }
}

/// The complete 40-space board.
pub static BOARD: once_cell::sync::Lazy<Vec<Space>> = once_cell::sync::Lazy::new(|| {
    vec![
        Space::go(),
        Space::property(1, "Salvador", ColorGroup::Brown, 60, [4, 10, 30, 90, 160, 250], 50),
        Space::community_chest(2),
        Space::property(3, "Rio", ColorGroup::Brown, 60, [8, 20, 60, 180, 320, 450], 50),
        Space::tax(4, "Income Tax", 200),
        Space::railroad(5, "TLV Airport"),
        Space::property(6, "Tel Aviv", ColorGroup::LightBlue, 100, [6, 30, 90, 270, 400, 550], 50),
        Space::chance(7),
        Space::property(8, "Haifa", ColorGroup::LightBlue, 100, [6, 30, 90, 270, 400, 550], 50),
        Space::property(9, "Jerusalem", ColorGroup::LightBlue, 120, [8, 40, 100, 300, 450, 600], 50),
        Space::jail(),
        Space::property(11, "Venice", ColorGroup::Pink, 140, [10, 50, 150, 450, 625, 750], 100),
        Space::utility(12, "Electric Company"),
        Space::property(13, "Milan", ColorGroup::Pink, 140, [10, 50, 150, 450, 625, 750], 100),
        Space::property(14, "Rome", ColorGroup::Pink, 160, [12, 60, 180, 500, 700, 900], 100),
        Space::railroad(15, "MUC Airport"),
        Space::property(16, "Frankfurt", ColorGroup::Orange, 180, [14, 70, 200, 550, 750, 950], 100),
        Space::community_chest(17),
        Space::property(18, "Dusseldorf", ColorGroup::Orange, 180, [14, 70, 200, 550, 750, 950], 100),
        Space::property(19, "Munich", ColorGroup::Orange, 200, [16, 80, 220, 600, 800, 1000], 100),
        Space::free_parking(),
        Space::property(21, "Berlin", ColorGroup::Red, 220, [18, 90, 250, 700, 875, 1050], 150),
        Space::chance(22),
        Space::property(23, "Manchester", ColorGroup::Red, 220, [18, 90, 250, 700, 875, 1050], 150),
        Space::property(24, "Liverpool", ColorGroup::Red, 240, [20, 100, 300, 750, 925, 1100], 150),
        Space::railroad(25, "JFK Airport"),
        Space::property(26, "Paris", ColorGroup::Yellow, 260, [22, 110, 330, 800, 975, 1150], 150),
        Space::property(27, "Toulouse", ColorGroup::Yellow, 260, [22, 110, 330, 800, 975, 1150], 150),
        Space::utility(28, "Water Works"),
        Space::property(29, "Lyon", ColorGroup::Yellow, 280, [24, 120, 360, 850, 1025, 1200], 150),
        Space::go_to_jail(),
        Space::property(31, "CDG Airport District", ColorGroup::Green, 300, [26, 130, 390, 900, 1100, 1275], 200),
        Space::property(32, "Shanghai", ColorGroup::Green, 300, [26, 130, 390, 900, 1100, 1275], 200),
        Space::community_chest(33),
        Space::property(34, "Beijing", ColorGroup::Green, 320, [28, 150, 450, 1000, 1200, 1400], 200),
        Space::railroad(35, "Shenzhen Station"),
        Space::chance(36),
        Space::property(37, "New York", ColorGroup::DarkBlue, 350, [35, 175, 500, 1100, 1300, 1500], 200),
        Space::tax(38, "Luxury Tax", 100),
        Space::property(39, "Tokyo", ColorGroup::DarkBlue, 400, [50, 200, 600, 1400, 1700, 2000], 200),
    ]
});

/// Get a space by position.
pub fn get_space(position: u8) -> Option<&'static Space> {
    BOARD.get(position as usize)
}

/// All spaces in a color group.
pub fn group_spaces(group: ColorGroup) -> Vec<&'static Space> {
    BOARD.iter().filter(|t| t.group == Some(group)).collect()
}

/// Whether a space can be owned.
pub fn is_ownable(position: u8) -> bool {
    matches!(
        get_space(position).map(|s| s.kind),
        Some(SpaceKind::Property) | Some(SpaceKind::Railroad) | Some(SpaceKind::Utility)
    )
}
