#![recursion_limit = "256"]

mod crm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::crm::LeadForward;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Initialize CRM client (non-fatal: submissions fail with 500 until configured).
    let crm: Option<Arc<dyn LeadForward>> = match crm::CrmClient::from_env() {
        Ok(client) => {
            tracing::info!(mode = client.mode().as_str(), "CRM client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, code = e.error_code(), "CRM client not configured; lead submissions will fail");
            None
        }
    };

    let state = state::AppState::new(crm);
    let crm_configured = state.crm_configured();

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, crm_configured, "desert-cool-air listening");
    axum::serve(listener, app).await.expect("server failed");
}
