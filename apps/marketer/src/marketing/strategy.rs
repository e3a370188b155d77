//! Strategy classification — picks exactly one marketing strategy per item.
//!
//! CRITICAL: rules are evaluated in order and the first match wins. A
//! seasonal outerwear item that is also cheap is a winter-prep item, never a
//! micro-investment. Keep `RULE_CHAIN` an ordered slice; do not turn it into
//! a map.

use serde::{Deserialize, Serialize};

use crate::marketing::format::won;
use crate::marketing::persona::Persona;
use crate::models::{ItemRecord, Rank};
use crate::pricing::{expected_profit, CostBreakdown};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    WinterPrepSeasonal,
    NoExcuseMicroInvestment,
    BundlePerUnitPricing,
    RepairResellBusiness,
    ReverseExportArbitrage,
    ReceiptStyleDefault,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 6] = [
        StrategyKind::WinterPrepSeasonal,
        StrategyKind::NoExcuseMicroInvestment,
        StrategyKind::BundlePerUnitPricing,
        StrategyKind::RepairResellBusiness,
        StrategyKind::ReverseExportArbitrage,
        StrategyKind::ReceiptStyleDefault,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::WinterPrepSeasonal => "winter_prep_seasonal",
            StrategyKind::NoExcuseMicroInvestment => "no_excuse_micro_investment",
            StrategyKind::BundlePerUnitPricing => "bundle_per_unit_pricing",
            StrategyKind::RepairResellBusiness => "repair_resell_business",
            StrategyKind::ReverseExportArbitrage => "reverse_export_arbitrage",
            StrategyKind::ReceiptStyleDefault => "receipt_style_default",
        }
    }

    pub fn from_name(name: &str) -> Option<StrategyKind> {
        StrategyKind::ALL.into_iter().find(|s| s.name() == name)
    }

    pub fn angle(&self) -> &'static str {
        match self {
            StrategyKind::WinterPrepSeasonal => "get ahead of the season",
            StrategyKind::NoExcuseMicroInvestment => "a micro-investment with no excuses left",
            StrategyKind::BundlePerUnitPricing => "raise the per-unit price by selling as a bundle",
            StrategyKind::RepairResellBusiness => "maximise returns by repairing and reselling",
            StrategyKind::ReverseExportArbitrage => {
                "reverse export where overseas beats the domestic price"
            }
            StrategyKind::ReceiptStyleDefault => "receipt-style, fully transparent pricing",
        }
    }

    /// Personas this strategy is written for, in rendering order.
    pub fn personas(&self) -> &'static [Persona] {
        match self {
            StrategyKind::WinterPrepSeasonal => {
                &[Persona::Mz, Persona::Startup, Persona::SideHustle]
            }
            StrategyKind::NoExcuseMicroInvestment => &[Persona::Mz, Persona::SideHustle],
            StrategyKind::BundlePerUnitPricing => &[Persona::SideHustle, Persona::Business],
            StrategyKind::RepairResellBusiness => &[Persona::Business, Persona::SideHustle],
            StrategyKind::ReverseExportArbitrage => &[Persona::Business, Persona::Startup],
            StrategyKind::ReceiptStyleDefault => {
                &[Persona::Mz, Persona::SideHustle, Persona::Startup]
            }
        }
    }

    fn rationale(&self, item: &ItemRecord, cost: &CostBreakdown) -> String {
        match self {
            StrategyKind::WinterPrepSeasonal => format!(
                "{} items in month {} ride the winter-preparation demand, which makes them a good season-ahead buy.",
                item.category, item.month
            ),
            StrategyKind::NoExcuseMicroInvestment => format!(
                "A total landed cost of {} is small enough that even a miss hardly hurts.",
                won(cost.total_cost)
            ),
            StrategyKind::BundlePerUnitPricing => {
                "Selling as a bundle lifts the per-unit price and maximises the margin.".to_string()
            }
            StrategyKind::RepairResellBusiness => {
                "Repairing before resale earns a high return against the purchase cost.".to_string()
            }
            StrategyKind::ReverseExportArbitrage => format!(
                "Against a domestic price of {}, a landed cost of {} leaves a reverse-export opening.",
                won(item.domestic_price),
                won(cost.total_cost)
            ),
            StrategyKind::ReceiptStyleDefault => {
                "Showing the full price breakdown builds trust and wins customers.".to_string()
            }
        }
    }
}

/// Condensed figures shown next to the rendered content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyPoints {
    pub price_info: String,
    pub profit_info: String,
    pub strategy_focus: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyResult {
    pub strategy: StrategyKind,
    pub strategy_name: String,
    pub angle: String,
    pub recommended_personas: Vec<Persona>,
    pub rationale: String,
    pub key_points: KeyPoints,
}

impl StrategyResult {
    fn build(kind: StrategyKind, item: &ItemRecord, cost: &CostBreakdown) -> Self {
        let profit_info = if item.has_domestic_price() {
            format!(
                "Expected profit: {}",
                won(expected_profit(cost.total_cost, item.domestic_price))
            )
        } else {
            "No profit information".to_string()
        };

        Self {
            strategy: kind,
            strategy_name: kind.name().to_string(),
            angle: kind.angle().to_string(),
            recommended_personas: kind.personas().to_vec(),
            rationale: kind.rationale(item, cost),
            key_points: KeyPoints {
                price_info: format!("Landed cost: {}", won(cost.total_cost)),
                profit_info,
                strategy_focus: kind.angle().to_string(),
            },
        }
    }
}

/// Keyword sets and thresholds the rule chain matches against.
/// Text comparisons are case-insensitive.
#[derive(Debug, Clone)]
pub struct ClassifierRules {
    /// Exact category names.
    pub winter_categories: Vec<String>,
    pub winter_months: Vec<u32>,
    /// Landed cost strictly below this is a micro-investment.
    pub micro_investment_ceiling: i64,
    /// Substrings of the item name.
    pub bundle_keywords: Vec<String>,
    pub lowest_rank: Rank,
    /// Substrings of the notes.
    pub repair_keywords: Vec<String>,
    /// Landed cost below `domestic_price * ratio` is an arbitrage opening.
    pub reverse_export_ratio: f64,
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self {
            winter_categories: strings(&["outerwear/scarves", "boots", "bags"]),
            winter_months: vec![8, 9, 10, 11, 12],
            micro_investment_ceiling: 50_000,
            bundle_keywords: strings(&["bundle"]),
            lowest_rank: Rank::LOWEST,
            repair_keywords: strings(&["immovable", "unmovable", "repair"]),
            reverse_export_ratio: 0.7,
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn contains_any(haystack: &str, needles: &[String]) -> bool {
    let haystack = haystack.to_lowercase();
    needles
        .iter()
        .any(|n| !n.is_empty() && haystack.contains(&n.to_lowercase()))
}

type Rule = fn(&ClassifierRules, &ItemRecord, &CostBreakdown) -> bool;

const RULE_CHAIN: [(StrategyKind, Rule); 6] = [
    (StrategyKind::WinterPrepSeasonal, is_winter_prep),
    (StrategyKind::NoExcuseMicroInvestment, is_micro_investment),
    (StrategyKind::BundlePerUnitPricing, is_bundle),
    (StrategyKind::RepairResellBusiness, needs_repair),
    (StrategyKind::ReverseExportArbitrage, is_reverse_export),
    (StrategyKind::ReceiptStyleDefault, always),
];

fn always(_: &ClassifierRules, _: &ItemRecord, _: &CostBreakdown) -> bool {
    true
}

fn is_winter_prep(rules: &ClassifierRules, item: &ItemRecord, _: &CostBreakdown) -> bool {
    let category = item.category.trim().to_lowercase();
    rules
        .winter_categories
        .iter()
        .any(|c| c.to_lowercase() == category)
        && rules.winter_months.contains(&item.month)
}

fn is_micro_investment(rules: &ClassifierRules, _: &ItemRecord, cost: &CostBreakdown) -> bool {
    cost.total_cost < rules.micro_investment_ceiling
}

fn is_bundle(rules: &ClassifierRules, item: &ItemRecord, _: &CostBreakdown) -> bool {
    contains_any(&item.name, &rules.bundle_keywords) || item.rank == rules.lowest_rank
}

fn needs_repair(rules: &ClassifierRules, item: &ItemRecord, _: &CostBreakdown) -> bool {
    contains_any(&item.notes, &rules.repair_keywords)
}

fn is_reverse_export(rules: &ClassifierRules, item: &ItemRecord, cost: &CostBreakdown) -> bool {
    item.domestic_price > 0
        && (cost.total_cost as f64) < item.domestic_price as f64 * rules.reverse_export_ratio
}

#[derive(Debug, Clone, Default)]
pub struct StrategyClassifier {
    rules: ClassifierRules,
}

impl StrategyClassifier {
    pub fn new(rules: ClassifierRules) -> Self {
        Self { rules }
    }

    pub fn classify(&self, item: &ItemRecord, cost: &CostBreakdown) -> StrategyResult {
        let kind = RULE_CHAIN
            .iter()
            .find(|(_, matches)| matches(&self.rules, item, cost))
            .map(|(kind, _)| *kind)
            .unwrap_or(StrategyKind::ReceiptStyleDefault);

        StrategyResult::build(kind, item, cost)
    }
}
