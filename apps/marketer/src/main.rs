mod config;
mod creative;
mod errors;
mod llm_client;
mod marketing;
mod models;
mod pricing;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::marketing::pipeline::{MarketingPackage, Marketer};
use crate::marketing::strategy::StrategyClassifier;
use crate::models::ItemRecord;
use crate::pricing::{ExchangeRateSource, FixedRateSource, HttpRateSource, PriceCalculator};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let marketer = build_marketer(&config).await?;

    match std::env::args().nth(1).as_deref() {
        Some("serve") => serve(config, marketer).await,
        _ => {
            run_demo(&marketer)?;
            Ok(())
        }
    }
}

/// Resolves the exchange rate once and wires the pipeline.
async fn build_marketer(config: &Config) -> Result<Marketer> {
    let source: Box<dyn ExchangeRateSource> = match &config.exchange_rate_url {
        Some(url) => Box::new(HttpRateSource::new(url.clone())?),
        None => Box::new(FixedRateSource(config.exchange_rate)),
    };

    let calculator = PriceCalculator::initialize(source.as_ref(), config.rates()).await;
    let marketer = Marketer::new(calculator, StrategyClassifier::default());
    info!(
        "Exchange rate fixed at {} for this process",
        marketer.calculator().exchange_rate()
    );

    Ok(marketer)
}

async fn serve(config: Config, marketer: Marketer) -> Result<()> {
    info!("Starting marketer API v{}", env!("CARGO_PKG_VERSION"));

    let llm = match &config.anthropic_api_key {
        Some(key) => {
            let mut client = LlmClient::new(key.clone())?;
            if let Some(url) = &config.anthropic_api_url {
                client = client.with_api_url(url.clone());
            }
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(client)
        }
        None => {
            info!("ANTHROPIC_API_KEY not set; creative briefs will not be drafted");
            None
        }
    };

    let state = AppState {
        marketer: Arc::new(marketer),
        llm,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.listen_port()?));
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Runs the hardcoded sample item and prints every persona's post.
fn run_demo(marketer: &Marketer) -> Result<()> {
    let package = marketer.process_item(ItemRecord::sample())?;
    print!("{}", demo_report(&package));
    Ok(())
}

fn demo_report(package: &MarketingPackage) -> String {
    let rule = "=".repeat(50);
    let mut out = format!(
        "{rule}\nAnalysis result\n{rule}\nLanded cost: {}\nStrategy: {} ({})\n",
        marketing::format::won(package.cost.total_cost),
        package.strategy.strategy_name,
        package.strategy.angle,
    );

    for content in &package.contents {
        out.push_str(&format!(
            "\n{} PERSONA\n{}\n{}\n\n",
            content.persona.key().to_uppercase(),
            "-".repeat(30),
            content.text
        ));
    }

    out
}
