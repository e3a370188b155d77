//! Call-to-action and hashtag decoration.
//!
//! Lookups never fail: unknown personas get the `mz` CTA bundle and no
//! persona hashtags, unknown strategy names get the default frame and no
//! strategy hashtags.

use serde::{Deserialize, Serialize};

use crate::marketing::persona::Persona;
use crate::marketing::strategy::{StrategyKind, StrategyResult};

/// Leading tags on every hashtag line, in this order.
pub const BASE_HASHTAGS: [&str; 3] = ["#LuxuryResale", "#CasaTrade", "#Investing"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtaBundle {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub urgency: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    pub cta: String,
    pub hashtags: String,
}

pub fn cta_bundle(persona_key: &str) -> CtaBundle {
    match Persona::from_key(persona_key).unwrap_or(Persona::Mz) {
        Persona::Mz => CtaBundle {
            primary: "💬 Drop your take in the comments!",
            secondary: "📱 DM me for the details!",
            urgency: "⏰ Comment right now!",
        },
        Persona::Startup => CtaBundle {
            primary: "🚀 Let's grow together! Send a DM",
            secondary: "📊 More investment notes coming",
            urgency: "💡 Reach out today!",
        },
        Persona::SideHustle => CtaBundle {
            primary: "💼 More side-hustle intel on the way!",
            secondary: "📝 Get the full field notes by DM",
            urgency: "🔥 Follow now!",
        },
        Persona::Business => CtaBundle {
            primary: "📈 Looking for business partners!",
            secondary: "🤝 Collaboration proposals welcome",
            urgency: "⚡ Urgent proposals, contact me directly!",
        },
    }
}

enum CtaFrame {
    Seasonal(&'static str),
    Urgency(&'static str),
    BusinessPartner(&'static str),
    Default,
}

fn frame_for(strategy_name: &str) -> CtaFrame {
    match StrategyKind::from_name(strategy_name) {
        Some(StrategyKind::WinterPrepSeasonal) => CtaFrame::Seasonal("winter prep"),
        Some(StrategyKind::NoExcuseMicroInvestment) => CtaFrame::Urgency("micro-investment"),
        Some(StrategyKind::BundlePerUnitPricing) => CtaFrame::BusinessPartner("bundle sales"),
        Some(StrategyKind::RepairResellBusiness) => CtaFrame::BusinessPartner("repair & resell"),
        _ => CtaFrame::Default,
    }
}

pub fn cta(persona_key: &str, strategy_name: &str) -> String {
    let bundle = cta_bundle(persona_key);
    let (headline, pitch) = match frame_for(strategy_name) {
        CtaFrame::Seasonal(season) => (
            format!("🎯 Limited {season} season opportunity!"),
            format!("⏰ Getting ready for {season}? Now is the moment!"),
        ),
        CtaFrame::Urgency(kind) => (
            format!("⚡ Don't miss this {kind} chance!"),
            "💰 Small stake, real upside!".to_string(),
        ),
        CtaFrame::BusinessPartner(kind) => (
            format!("💼 Looking for {kind} partners!"),
            "🤝 Anyone who wants to grow together is welcome!".to_string(),
        ),
        CtaFrame::Default => (
            "📱 Want more details?".to_string(),
            "💬 Ask me anything, anytime!".to_string(),
        ),
    };

    format!(
        "{headline}\n\n{}\n{}\n\n{pitch}\n{}",
        bundle.primary, bundle.secondary, bundle.urgency
    )
}

fn persona_hashtags(persona_key: &str) -> &'static [&'static str] {
    match Persona::from_key(persona_key) {
        Some(Persona::Mz) => &["#GenZ", "#Trending", "#Hot"],
        Some(Persona::Startup) => &["#Founders", "#Startup", "#Investing"],
        Some(Persona::SideHustle) => &["#SideHustle", "#Profit", "#HandsOn"],
        Some(Persona::Business) => &["#Business", "#Marketing", "#Analysis"],
        None => &[],
    }
}

fn strategy_hashtags(strategy_name: &str) -> &'static [&'static str] {
    match StrategyKind::from_name(strategy_name) {
        Some(StrategyKind::WinterPrepSeasonal) => &["#WinterPrep", "#AheadOfSeason"],
        Some(StrategyKind::NoExcuseMicroInvestment) => &["#MicroInvesting", "#NoExcuses"],
        Some(StrategyKind::BundlePerUnitPricing) => &["#BundleDeal", "#PerUnitPrice"],
        Some(StrategyKind::RepairResellBusiness) => &["#RepairAndResell", "#BusinessMindset"],
        Some(StrategyKind::ReverseExportArbitrage) => &["#ReverseExport", "#Arbitrage"],
        Some(StrategyKind::ReceiptStyleDefault) => &["#TransparentDeals", "#Trust"],
        None => &[],
    }
}

/// Base tags, then persona tags, then strategy tags, space-joined.
pub fn hashtags(persona_key: &str, strategy_name: &str) -> String {
    BASE_HASHTAGS
        .iter()
        .chain(persona_hashtags(persona_key))
        .chain(strategy_hashtags(strategy_name))
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn decorate(persona_key: &str, strategy: &StrategyResult) -> Decoration {
    Decoration {
        cta: cta(persona_key, &strategy.strategy_name),
        hashtags: hashtags(persona_key, &strategy.strategy_name),
    }
}
