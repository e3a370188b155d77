//! Marketing pipeline — runs one item through every stage.
//!
//! Flow: validate → compute_cost → analyze_price → classify →
//!       render per recommended persona → decorate with CTA + hashtags.
//!
//! Stages only consume the output of earlier stages. The `Marketer` holds no
//! mutable state, so one instance can serve any number of items concurrently.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::marketing::cta::decorate;
use crate::marketing::persona::Persona;
use crate::marketing::renderer::render;
use crate::marketing::strategy::{StrategyClassifier, StrategyResult};
use crate::models::ItemRecord;
use crate::pricing::{analyze_price, CostBreakdown, PriceAnalysis, PriceCalculator};

/// Final content for one persona.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedContent {
    pub persona: Persona,
    pub body: String,
    pub cta: String,
    pub hashtags: String,
    /// body, CTA and hashtag line separated by blank lines.
    pub text: String,
}

/// Everything one pipeline run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketingPackage {
    pub id: Uuid,
    pub item: ItemRecord,
    pub cost: CostBreakdown,
    pub price_analysis: PriceAnalysis,
    pub strategy: StrategyResult,
    /// In the strategy's persona order.
    pub contents: Vec<RenderedContent>,
    /// RFC 3339 / ISO-8601.
    pub generated_at: String,
}

pub struct Marketer {
    calculator: PriceCalculator,
    classifier: StrategyClassifier,
}

impl Marketer {
    pub fn new(calculator: PriceCalculator, classifier: StrategyClassifier) -> Self {
        Self {
            calculator,
            classifier,
        }
    }

    pub fn calculator(&self) -> &PriceCalculator {
        &self.calculator
    }

    /// Validates the item and prices it.
    pub fn price(&self, item: &ItemRecord) -> Result<(CostBreakdown, PriceAnalysis), AppError> {
        item.validate()?;
        let cost = self.calculator.compute_cost(item)?;
        let analysis = analyze_price(item, &cost);
        Ok((cost, analysis))
    }

    pub fn classify(&self, item: &ItemRecord) -> Result<(CostBreakdown, StrategyResult), AppError> {
        let (cost, _) = self.price(item)?;
        let strategy = self.classifier.classify(item, &cost);
        Ok((cost, strategy))
    }

    pub fn process_item(&self, item: ItemRecord) -> Result<MarketingPackage, AppError> {
        info!("Processing item '{} {}'", item.brand, item.name);

        let (cost, price_analysis) = self.price(&item)?;
        info!("Landed cost: {}", cost.total_cost);

        let strategy = self.classifier.classify(&item, &cost);
        info!("Selected strategy: {}", strategy.strategy_name);

        let contents = strategy
            .recommended_personas
            .iter()
            .map(|&persona| {
                let body = render(&item, &cost, &strategy, persona.key());
                let decoration = decorate(persona.key(), &strategy);
                let text = format!("{body}\n\n{}\n\n{}", decoration.cta, decoration.hashtags);
                debug!("Rendered {} content ({} chars)", persona.key(), text.len());
                RenderedContent {
                    persona,
                    body,
                    cta: decoration.cta,
                    hashtags: decoration.hashtags,
                    text,
                }
            })
            .collect::<Vec<_>>();

        info!(
            "Generated {} persona posts for '{}'",
            contents.len(),
            item.name
        );

        Ok(MarketingPackage {
            id: Uuid::new_v4(),
            item,
            cost,
            price_analysis,
            strategy,
            contents,
            generated_at: Utc::now().to_rfc3339(),
        })
    }
}
