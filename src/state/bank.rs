//! Finite house/hotel supply (spec §3.2). Bank cash is unbounded.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bank {
    pub houses_available: u8,
    pub hotels_available: u8,
}

impl Default for Bank {
    fn default() -> Self {
        Self {
            houses_available: 32,
            hotels_available: 12,
        }
    }
}

impl Bank {
    pub fn take_house(&mut self) -> bool {
        if self.houses_available == 0 {
            return false;
        }
        self.houses_available -= 1;
        true
    }

    pub fn return_house(&mut self) {
        self.houses_available = (self.houses_available + 1).min(32);
    }

    pub fn take_hotel(&mut self) -> bool {
        if self.hotels_available == 0 {
            return false;
        }
        self.hotels_available -= 1;
        true
    }

    pub fn return_hotel(&mut self) {
        self.hotels_available = (self.hotels_available + 1).min(12);
    }
}
