use anyhow::{Context, Result};
use jsonapi_errors::openapi::ErrorsDoc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,jsonapi_errors=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let doc = ErrorsDoc::openapi();
    let json = serde_json::to_string_pretty(&doc).context("Failed to serialize OpenAPI spec")?;

    println!("{}", json);

    info!(
        schemas = doc.components.as_ref().map_or(0, |c| c.schemas.len()),
        "OpenAPI specification generated"
    );

    Ok(())
}
