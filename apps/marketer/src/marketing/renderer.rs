//! Persona renderer — one fixed post template per persona.
//!
//! Unknown persona keys render the generic template. Rendering never fails.

use crate::marketing::format::won;
use crate::marketing::persona::Persona;
use crate::marketing::strategy::StrategyResult;
use crate::models::ItemRecord;
use crate::pricing::{expected_profit, CostBreakdown};

/// Figures every template interpolates.
struct PostFigures<'a> {
    title: String,
    total_cost: i64,
    profit: i64,
    margin_pct: f64,
    strategy: &'a StrategyResult,
}

/// Profit as a percentage of landed cost; 0 when the cost is 0.
pub fn margin_percent(profit: i64, total_cost: i64) -> f64 {
    if total_cost == 0 {
        return 0.0;
    }
    profit as f64 / total_cost as f64 * 100.0
}

pub fn render(
    item: &ItemRecord,
    cost: &CostBreakdown,
    strategy: &StrategyResult,
    persona_key: &str,
) -> String {
    let profit = expected_profit(cost.total_cost, item.domestic_price);
    let title = format!("{} {}", item.brand, item.name).trim().to_string();
    let figures = PostFigures {
        title,
        total_cost: cost.total_cost,
        profit,
        margin_pct: margin_percent(profit, cost.total_cost),
        strategy,
    };

    match Persona::from_key(persona_key) {
        Some(Persona::Mz) => render_mz(&figures),
        Some(Persona::Startup) => render_startup(&figures),
        Some(Persona::SideHustle) => render_sidehustle(&figures),
        Some(Persona::Business) => render_business(&figures),
        None => render_generic(&figures),
    }
}

fn render_mz(f: &PostFigures) -> String {
    format!(
        "🔥 Found a {title} and it's a steal!

💰 Bought in at: {cost}
📈 Expected profit: {profit} (margin: {margin:.1}%)

Picked this up going for {angle} and honestly it's unreal... 😱

This one is going to be HOT, no?",
        title = f.title,
        cost = won(f.total_cost),
        profit = won(f.profit),
        margin = f.margin_pct,
        angle = f.strategy.angle,
    )
}

fn render_startup(f: &PostFigures) -> String {
    format!(
        "🚀 {title}: investment opportunity breakdown

📊 The numbers:
• Purchase cost: {cost}
• Expected profit: {profit}
• Margin: {margin:.1}%
• Strategy: {angle}

Why this item: {rationale}

Even with little starting capital
you can begin with a small buy like this.

The key to a better hit rate is
reading the market trend precisely!",
        title = f.title,
        cost = won(f.total_cost),
        profit = won(f.profit),
        margin = f.margin_pct,
        angle = f.strategy.angle,
        rationale = f.strategy.rationale,
    )
}

fn render_sidehustle(f: &PostFigures) -> String {
    format!(
        "💼 {title}: side-hustle field notes

Actual purchase cost: {cost}
Expected sale price: {sale}
Net profit: {profit}

I went at it with the {angle} approach.

When you resell luxury on the side,
what matters most is timing.

I'll share practical tips
that beginners can follow too!",
        title = f.title,
        cost = won(f.total_cost),
        sale = won(f.total_cost + f.profit),
        profit = won(f.profit),
        angle = f.strategy.angle,
    )
}

fn render_business(f: &PostFigures) -> String {
    format!(
        "📈 {title}: business analysis report

Investment analysis:
• Cost: {cost}
• Target price: {target}
• Margin: {profit} ({margin:.1}%)
• Strategy: {angle}

Market analysis:
{rationale}

From a business standpoint, this item
balances profitability and risk well.

Weighing brand value and market demand
over the long run, steady returns are realistic.",
        title = f.title,
        cost = won(f.total_cost),
        target = won(f.total_cost + f.profit),
        profit = won(f.profit),
        margin = f.margin_pct,
        angle = f.strategy.angle,
        rationale = f.strategy.rationale,
    )
}

fn render_generic(f: &PostFigures) -> String {
    format!(
        "📱 {title}: resale details

Purchase cost: {cost}
Expected profit: {profit}
Strategy: {angle}

{rationale}

We disclose prices openly
for trades you can trust.",
        title = f.title,
        cost = won(f.total_cost),
        profit = won(f.profit),
        angle = f.strategy.angle,
        rationale = f.strategy.rationale,
    )
}
