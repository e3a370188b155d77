// Landed-cost pricing: exchange-rate resolution, cost breakdown, margin and
// competitiveness analysis. No component here depends on the marketing layer.

pub mod calculator;
pub mod exchange_rate;

pub use calculator::{
    analyze_price, expected_profit, CostBreakdown, PriceAnalysis, PriceCalculator, PricingError,
    RateConfig,
};
pub use exchange_rate::{ExchangeRateSource, FixedRateSource, HttpRateSource};
