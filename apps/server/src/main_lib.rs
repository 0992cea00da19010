use std::sync::Arc;

use crate::config::Config;
use hireforecast_core::{AnalysisService, AnalysisServiceTrait};
use hireforecast_disclosure::{CachedIndexResolver, DartProvider, ResolverChain};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub analysis_service: Arc<dyn AnalysisServiceTrait>,
}

/// Install the global subscriber. `HF_LOG_FORMAT=json` switches to JSON lines.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("HF_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let dart_config = config.dart_config();
    tracing::info!("Disclosure provider: {:?}", dart_config);

    let provider = Arc::new(DartProvider::new(dart_config)?);
    let resolver = ResolverChain::new().with_resolver(Box::new(CachedIndexResolver::with_ttl(
        provider.clone(),
        config.corp_code_ttl,
    )));
    let analysis_service = Arc::new(AnalysisService::new(provider, Arc::new(resolver)));

    Ok(Arc::new(AppState { analysis_service }))
}
