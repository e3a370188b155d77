//! Landed-cost calculation — currency conversion, tax and service fee, plus
//! the profit margin against the known domestic resale price.
//!
//! The exchange rate is resolved once when the calculator is built and never
//! re-fetched; every item priced by one calculator uses the same rate.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::models::ItemRecord;
use crate::pricing::exchange_rate::{check_rate, ExchangeRateSource};

/// Auction prices are quoted in thousands relative to the domestic currency.
pub const DENOMINATION_SCALE: f64 = 1000.0;

/// Cost-to-domestic-price ratio bands for competitiveness labelling.
const VERY_COMPETITIVE_RATIO: f64 = 0.5;
const COMPETITIVE_RATIO: f64 = 0.7;
const AVERAGE_RATIO: f64 = 0.9;

#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    #[error("landed cost is zero, so the profit margin against a domestic price is undefined")]
    ZeroLandedCost,
}

/// Configured rates for one calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateConfig {
    pub default_exchange_rate: f64,
    pub tax_rate: f64,
    pub service_fee_rate: f64,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            default_exchange_rate: 0.9,
            tax_rate: 0.11,
            service_fee_rate: 0.03,
        }
    }
}

/// Everything derived from an item's auction price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub auction_price_foreign: f64,
    pub auction_price_domestic: f64,
    pub tax: f64,
    pub service_fee: f64,
    /// Landed cost in whole domestic currency units.
    pub total_cost: i64,
    pub exchange_rate: f64,
    /// Percent, two decimals. 0 when the domestic price is unknown.
    pub profit_margin: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceCompetitiveness {
    VeryCompetitive,
    Competitive,
    Average,
    Low,
    Unknown,
}

impl PriceCompetitiveness {
    pub fn label(&self) -> &'static str {
        match self {
            PriceCompetitiveness::VeryCompetitive => "very competitive (under 50%)",
            PriceCompetitiveness::Competitive => "competitive (50-70%)",
            PriceCompetitiveness::Average => "average (70-90%)",
            PriceCompetitiveness::Low => "low (90% or more)",
            PriceCompetitiveness::Unknown => "no domestic price information",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceAnalysis {
    pub is_profitable: bool,
    pub profit_amount: i64,
    pub profit_margin: f64,
    pub competitiveness: PriceCompetitiveness,
    pub competitiveness_label: String,
}

#[derive(Debug, Clone)]
pub struct PriceCalculator {
    exchange_rate: f64,
    tax_rate: f64,
    service_fee_rate: f64,
}

impl PriceCalculator {
    /// Asks `source` for the rate once. Any failure falls back to the
    /// configured default and is logged, never returned.
    pub async fn initialize(source: &dyn ExchangeRateSource, rates: RateConfig) -> Self {
        let exchange_rate = match source.fetch_rate().await.and_then(check_rate) {
            Ok(rate) => {
                info!("Using fetched exchange rate {rate}");
                rate
            }
            Err(e) => {
                warn!(
                    "Exchange rate fetch failed ({e}), using default {}",
                    rates.default_exchange_rate
                );
                rates.default_exchange_rate
            }
        };

        Self::with_rate(exchange_rate, rates)
    }

    pub fn with_rate(exchange_rate: f64, rates: RateConfig) -> Self {
        Self {
            exchange_rate,
            tax_rate: rates.tax_rate,
            service_fee_rate: rates.service_fee_rate,
        }
    }

    pub fn exchange_rate(&self) -> f64 {
        self.exchange_rate
    }

    pub fn compute_cost(&self, item: &ItemRecord) -> Result<CostBreakdown, PricingError> {
        let auction_price_domestic =
            item.auction_price_foreign * self.exchange_rate * DENOMINATION_SCALE;
        let tax = auction_price_domestic * self.tax_rate;
        let service_fee = auction_price_domestic * self.service_fee_rate;
        let total_cost = whole_units(auction_price_domestic + tax + service_fee);
        let profit_margin = profit_margin(total_cost, item.domestic_price)?;

        Ok(CostBreakdown {
            auction_price_foreign: item.auction_price_foreign,
            auction_price_domestic,
            tax,
            service_fee,
            total_cost,
            exchange_rate: self.exchange_rate,
            profit_margin,
        })
    }
}

/// Relative distance from a whole unit still treated as float noise.
const SNAP_EPSILON: f64 = 1e-9;

/// Truncates toward zero. A sum within float noise of a whole unit, like
/// 2051999.9999999998, snaps to that unit instead of dropping it.
fn whole_units(amount: f64) -> i64 {
    let nearest = amount.round();
    if (amount - nearest).abs() <= SNAP_EPSILON * amount.abs().max(1.0) {
        nearest as i64
    } else {
        amount.trunc() as i64
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Margin in percent of landed cost. Unknown domestic price (0) yields 0.
pub fn profit_margin(total_cost: i64, domestic_price: i64) -> Result<f64, PricingError> {
    if domestic_price == 0 {
        return Ok(0.0);
    }
    if total_cost == 0 {
        return Err(PricingError::ZeroLandedCost);
    }
    let profit = (domestic_price - total_cost) as f64;
    Ok(round2(profit / total_cost as f64 * 100.0))
}

pub fn price_competitiveness(total_cost: i64, domestic_price: i64) -> PriceCompetitiveness {
    if domestic_price == 0 {
        return PriceCompetitiveness::Unknown;
    }

    let ratio = total_cost as f64 / domestic_price as f64;
    if ratio < VERY_COMPETITIVE_RATIO {
        PriceCompetitiveness::VeryCompetitive
    } else if ratio < COMPETITIVE_RATIO {
        PriceCompetitiveness::Competitive
    } else if ratio < AVERAGE_RATIO {
        PriceCompetitiveness::Average
    } else {
        PriceCompetitiveness::Low
    }
}

/// Profit in domestic units, 0 when the domestic price is unknown.
pub fn expected_profit(total_cost: i64, domestic_price: i64) -> i64 {
    if domestic_price > 0 {
        domestic_price - total_cost
    } else {
        0
    }
}

pub fn analyze_price(item: &ItemRecord, cost: &CostBreakdown) -> PriceAnalysis {
    let competitiveness = price_competitiveness(cost.total_cost, item.domestic_price);
    PriceAnalysis {
        is_profitable: item.domestic_price > cost.total_cost,
        profit_amount: expected_profit(cost.total_cost, item.domestic_price),
        profit_margin: cost.profit_margin,
        competitiveness,
        competitiveness_label: competitiveness.label().to_string(),
    }
}
