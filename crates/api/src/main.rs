use std::sync::Arc;

use tenantcrm_api::{config::ApiConfig, session::InMemorySessionStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tenantcrm_observability::init();

    let config = ApiConfig::from_env()?;

    tracing::warn!("using in-memory session store; sessions are lost on restart");
    let store = Arc::new(InMemorySessionStore::new());

    let app = tenantcrm_api::app::build_app(config.clone(), store);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
