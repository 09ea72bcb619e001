use anyhow::Result;
use slugged::application::{
    commands::pages::CreatePageCommand,
    ports::{time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use slugged::config::AppConfig;
use slugged::domain::page::Page;
use slugged::infrastructure::{
    database, repositories::SqlitePageRepository, time::SystemClock, util::DefaultSlugGenerator,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

/// Prepares the database, then saves one page per argument (the argument is
/// the title) and prints each saved page as a JSON line.
async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let page_repo = Arc::new(SqlitePageRepository::new(Arc::clone(&pool)));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let slug_config = Page::slug_config().with_max_iterations(config.slug_max_iterations());

    let services = ApplicationServices::new(
        page_repo,
        clock,
        slugger,
        slug_config,
        config.slug_save_retries(),
    )?;
    let commands = services.page_commands();

    let titles: Vec<String> = std::env::args().skip(1).collect();
    if titles.is_empty() {
        tracing::info!(database = config.database_url(), "database ready, no titles given");
        return Ok(());
    }

    for title in titles {
        let command = CreatePageCommand::builder()
            .title(title)
            .build()
            .map_err(anyhow::Error::msg)?;
        let page = commands.create_page(command).await?;
        println!("{}", serde_json::to_string(&page)?);
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
