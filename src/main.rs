use std::sync::Arc;

use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;
use tracing_subscriber::EnvFilter;

use english_study_bot::bot;
use english_study_bot::config::AppConfig;
use english_study_bot::db::Database;
use english_study_bot::dialogue::MenuState;
use english_study_bot::materials::MaterialLibrary;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("📖 Starting English Study Bot...");

    // Load config
    let config = AppConfig::from_env()?;
    tracing::info!("Config loaded. Books directory: {}", config.books_dir.display());

    // Initialize database
    let db = Database::connect(&config.database_url).await?;
    db.run_migrations().await?;
    tracing::info!("Database connected and migrations applied.");

    // Static level -> book mapping
    let library = MaterialLibrary::new(&config.books_dir);

    // Build shared application state
    let state = Arc::new(bot::AppState {
        config: config.clone(),
        db,
        library,
    });

    // Create the Telegram bot
    let bot = Bot::new(&config.telegram_bot_token);

    // Build the dispatcher
    let handler = bot::build_handler();

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state, InMemStorage::<MenuState>::new()])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
