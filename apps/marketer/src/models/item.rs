use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Auction condition grade. `F` is the lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Rank {
    pub const LOWEST: Rank = Rank::F;

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::A => "A",
            Rank::B => "B",
            Rank::C => "C",
            Rank::D => "D",
            Rank::E => "E",
            Rank::F => "F",
        }
    }
}

/// A single resale item as it arrives from the auction sheet.
///
/// `domestic_price` of 0 means the domestic market price is unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(alias = "auction_price_jpy")]
    pub auction_price_foreign: f64,
    pub rank: Rank,
    pub month: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default, alias = "domestic_price_krw")]
    pub domestic_price: i64,
}

impl ItemRecord {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name cannot be empty".to_string()));
        }
        if !self.auction_price_foreign.is_finite() || self.auction_price_foreign < 0.0 {
            return Err(AppError::Validation(format!(
                "auction_price_foreign must be a non-negative number, got {}",
                self.auction_price_foreign
            )));
        }
        if self.domestic_price < 0 {
            return Err(AppError::Validation(format!(
                "domestic_price must be non-negative, got {}",
                self.domestic_price
            )));
        }
        if !(1..=12).contains(&self.month) {
            return Err(AppError::Validation(format!(
                "month must be between 1 and 12, got {}",
                self.month
            )));
        }
        Ok(())
    }

    pub fn has_domestic_price(&self) -> bool {
        self.domestic_price > 0
    }

    /// The hardcoded item the demo entry point runs.
    pub fn sample() -> Self {
        Self {
            name: "Trench Coat".to_string(),
            brand: "Burberry".to_string(),
            auction_price_foreign: 2000.0,
            rank: Rank::B,
            month: 9,
            category: "outerwear/scarves".to_string(),
            notes: "autumn arrival, classic design".to_string(),
            domestic_price: 800_000,
        }
    }
}
