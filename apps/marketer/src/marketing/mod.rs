// Marketing pipeline: strategy classification, persona rendering and
// CTA/hashtag decoration, orchestrated by `pipeline::Marketer`.

pub mod cta;
pub mod format;
pub mod handlers;
pub mod persona;
pub mod pipeline;
pub mod renderer;
pub mod strategy;
