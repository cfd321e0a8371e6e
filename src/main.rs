use tracing_subscriber::EnvFilter;

use visual_hash::{web, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("visual_hash=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    let settings = Settings::load()?;
    tracing::info!(
        variant = %settings.variant,
        bind_addr = %settings.bind_addr,
        "loaded settings"
    );

    web::serve(settings).await?;
    Ok(())
}
