use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use legalease::application::services::{AiInvoker, DocumentService, PromptBuilder};
use legalease::infrastructure::llm::LlmClientFactory;
use legalease::infrastructure::observability::{TracingConfig, init_tracing};
use legalease::infrastructure::text_processing::CompositeFileLoader;
use legalease::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        TracingConfig::new(
            environment.as_str(),
            settings.logging.enable_json,
            settings.logging.level.clone(),
        ),
        settings.server.port,
    );

    let llm_client =
        LlmClientFactory::create(&settings.llm).context("Failed to configure LLM client")?;
    let timeout = (settings.llm.request_timeout_secs > 0)
        .then(|| Duration::from_secs(settings.llm.request_timeout_secs));

    let document_service = Arc::new(DocumentService::new(
        Arc::new(CompositeFileLoader::with_default_adapters()),
        AiInvoker::new(llm_client, timeout),
        PromptBuilder::new(settings.prompts.templates()),
        settings.processing.budgets(),
    ));

    let state = AppState::new(document_service, settings.upload.clone());
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server host/port")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
