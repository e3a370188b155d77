//! Creative potential — keyword heuristics that seed angles for the brief.

use serde::{Deserialize, Serialize};

use crate::models::{ItemRecord, Rank};

/// Auction prices below this count as a cheap entry point.
const CHEAP_AUCTION_PRICE: f64 = 1000.0;
/// Auction prices below this make the small-investor persona relevant.
const SMALL_INVESTOR_AUCTION_PRICE: f64 = 2000.0;
/// Domestic price above auction price times this signals a fat margin.
const HIGH_MARGIN_MULTIPLE: f64 = 100.0;

const LUXURY_HOUSES: [&str; 3] = ["chanel", "hermes", "louis vuitton"];
const HERITAGE_HOUSES: [&str; 2] = ["chanel", "hermes"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedPersona {
    pub name: String,
    pub description: String,
    pub motivation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreativePotential {
    pub weakness_to_strength: Vec<String>,
    pub trend_connections: Vec<String>,
    pub industry_analogies: Vec<String>,
    pub emotional_storytelling: Vec<String>,
    pub new_personas: Vec<SuggestedPersona>,
}

pub fn analyze_creative_potential(item: &ItemRecord) -> CreativePotential {
    CreativePotential {
        weakness_to_strength: weakness_to_strength(item),
        trend_connections: trend_connections(item),
        industry_analogies: industry_analogies(item),
        emotional_storytelling: emotional_storytelling(item),
        new_personas: new_personas(item),
    }
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    let text = text.to_lowercase();
    needles.iter().any(|n| text.contains(n))
}

fn is_trench_or_coat(name: &str) -> bool {
    contains_any(name, &["trench", "coat"])
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn weakness_to_strength(item: &ItemRecord) -> Vec<String> {
    let mut angles = Vec::new();

    if matches!(item.rank, Rank::C | Rank::D | Rank::F) {
        angles.push("worn = vintage, old = classic".to_string());
    }
    if contains_any(&item.notes, &["repair", "damage"]) {
        angles.push("needs repair = chance to personalise, damage = a story to tell".to_string());
    }
    if contains_any(&item.notes, &["niche", "rare"]) {
        angles.push("niche = exclusive, rare = special".to_string());
    }

    angles
}

fn trend_connections(item: &ItemRecord) -> Vec<String> {
    let mut trends = Vec::new();
    let brand = item.brand.trim().to_lowercase();

    if is_trench_or_coat(&item.name) {
        trends.extend(owned(&["old-money look", "classic revival", "sustainable fashion"]));
    }
    if LUXURY_HOUSES.contains(&brand.as_str()) {
        trends.extend(owned(&["luxury as an asset", "fashion as a commodity", "symbolic value"]));
    }
    if contains_any(&item.name, &["vintage", "retro"]) {
        trends.extend(owned(&["Y2K", "vintage", "sustainability"]));
    }

    trends
}

fn industry_analogies(item: &ItemRecord) -> Vec<String> {
    let mut analogies = Vec::new();
    let price = item.auction_price_foreign;

    if price < CHEAP_AUCTION_PRICE {
        analogies.push("Stocks: penny stocks, a small stake with big upside".to_string());
        analogies.push("Real estate: a studio flat, property investing on a small budget".to_string());
    }
    if item.domestic_price as f64 > price * HIGH_MARGIN_MULTIPLE {
        analogies.push("Cars: a used-car business, high margin over cost".to_string());
        analogies.push("Stocks: growth investing, long-term appreciation".to_string());
    }

    analogies
}

fn emotional_storytelling(item: &ItemRecord) -> Vec<String> {
    let mut stories = Vec::new();
    let brand = item.brand.trim().to_lowercase();

    if contains_any(&item.name, &["trench"]) {
        stories.push("a romance in the London rain".to_string());
        stories.push("the style of a classic film lead".to_string());
    }
    if HERITAGE_HOUSES.contains(&brand.as_str()) {
        stories.push("the history and tradition of the house".to_string());
        stories.push("value handed down through generations".to_string());
    }

    stories
}

fn new_personas(item: &ItemRecord) -> Vec<SuggestedPersona> {
    let mut personas = Vec::new();

    if is_trench_or_coat(&item.name) {
        personas.push(SuggestedPersona {
            name: "Old-money aspirant".to_string(),
            description: "20-30s chasing a classic, polished style".to_string(),
            motivation: "building a refined image".to_string(),
        });
    }
    if item.auction_price_foreign < SMALL_INVESTOR_AUCTION_PRICE {
        personas.push(SuggestedPersona {
            name: "Small investor".to_string(),
            description: "wants a big return from a small stake".to_string(),
            motivation: "low-risk investing".to_string(),
        });
    }
    personas.push(SuggestedPersona {
        name: "Sustainable fashion buyer".to_string(),
        description: "fashion consumer who cares about the environment".to_string(),
        motivation: "sustainable consumption".to_string(),
    });

    personas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_trench_coat() {
        let potential = analyze_creative_potential(&ItemRecord::sample());
        assert!(potential.weakness_to_strength.is_empty());
        assert!(potential
            .trend_connections
            .contains(&"old-money look".to_string()));
        assert_eq!(potential.emotional_storytelling.len(), 2);
        // 2000 is not cheap, and 800,000 > 2000 * 100
        assert_eq!(potential.industry_analogies.len(), 2);
        assert!(potential.industry_analogies[0].starts_with("Cars:"));

        let names: Vec<&str> = potential.new_personas.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Old-money aspirant", "Sustainable fashion buyer"]);
    }

    #[test]
    fn test_worn_repaired_rare_item() {
        let item = ItemRecord {
            rank: Rank::D,
            notes: "Rare colourway, strap damage".to_string(),
            ..ItemRecord::sample()
        };
        let angles = analyze_creative_potential(&item).weakness_to_strength;
        assert_eq!(angles.len(), 3);
    }

    #[test]
    fn test_heritage_brand_and_vintage_name() {
        let item = ItemRecord {
            name: "Vintage Kelly 28".to_string(),
            brand: "Hermes".to_string(),
            ..ItemRecord::sample()
        };
        let potential = analyze_creative_potential(&item);
        assert!(potential.trend_connections.contains(&"Y2K".to_string()));
        assert!(potential
            .trend_connections
            .contains(&"luxury as an asset".to_string()));
        assert_eq!(
            potential.emotional_storytelling,
            vec![
                "the history and tradition of the house".to_string(),
                "value handed down through generations".to_string()
            ]
        );
    }

    #[test]
    fn test_cheap_item_gets_small_investor_and_penny_stock() {
        let item = ItemRecord {
            name: "Card Wallet".to_string(),
            auction_price_foreign: 500.0,
            domestic_price: 0,
            ..ItemRecord::sample()
        };
        let potential = analyze_creative_potential(&item);
        assert!(potential.industry_analogies[0].starts_with("Stocks: penny"));
        assert_eq!(potential.industry_analogies.len(), 2);
        assert_eq!(potential.new_personas[0].name, "Small investor");
        assert_eq!(
            potential.new_personas.last().unwrap().name,
            "Sustainable fashion buyer"
        );
    }
}
