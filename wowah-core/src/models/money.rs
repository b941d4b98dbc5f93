//! Currency amounts.

use serde::{Deserialize, Serialize};
use std::fmt;

const COPPER_PER_SILVER: u64 = 100;
const COPPER_PER_GOLD: u64 = 10_000;

/// An amount of in-game currency, stored in copper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub u64);

impl Money {
    /// Creates an amount from copper.
    pub fn from_copper(copper: u64) -> Self {
        Self(copper)
    }

    /// Total amount in copper.
    pub fn total_copper(self) -> u64 {
        self.0
    }

    /// Whole gold pieces.
    pub fn gold(self) -> u64 {
        self.0 / COPPER_PER_GOLD
    }

    /// Silver pieces after removing gold.
    pub fn silver(self) -> u64 {
        (self.0 % COPPER_PER_GOLD) / COPPER_PER_SILVER
    }

    /// Copper pieces after removing gold and silver.
    pub fn copper(self) -> u64 {
        self.0 % COPPER_PER_SILVER
    }
}

impl fmt::Display for Money {
    /// Formats as `12g 34s 56c`, leaving out zero parts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = [
            (self.gold(), 'g'),
            (self.silver(), 's'),
            (self.copper(), 'c'),
        ]
        .into_iter()
        .filter(|(amount, _)| *amount > 0)
        .map(|(amount, unit)| format!("{amount}{unit}"))
        .collect();

        if parts.is_empty() {
            write!(f, "0c")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        let money = Money::from_copper(1_234_567);
        assert_eq!(money.gold(), 123);
        assert_eq!(money.silver(), 45);
        assert_eq!(money.copper(), 67);
    }

    #[test]
    fn test_display_omits_zero_parts() {
        assert_eq!(Money(1_234_567).to_string(), "123g 45s 67c");
        assert_eq!(Money(10_000).to_string(), "1g");
        assert_eq!(Money(10_005).to_string(), "1g 5c");
        assert_eq!(Money(250).to_string(), "2s 50c");
        assert_eq!(Money(0).to_string(), "0c");
    }

    #[test]
    fn test_serde_transparent() {
        let money: Money = serde_json::from_str("4200").unwrap();
        assert_eq!(money, Money(4200));
        assert_eq!(serde_json::to_string(&money).unwrap(), "4200");
    }
}
