use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use readlog::infrastructure::AppState;
use readlog::{config, db, seed, server};

#[tokio::main]
async fn main() {
    // Load configuration
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "readlog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Check for --profile CLI argument
    let args: Vec<String> = std::env::args().collect();
    let profile = args
        .iter()
        .position(|arg| arg == "--profile")
        .and_then(|pos| args.get(pos + 1))
        .cloned();

    let config = config::Config::from_env(profile);
    tracing::info!("Using profile '{}' ({})", config.profile, config.database_url);

    // Initialize database
    let db = db::init_db(&config.database_url)
        .await
        .expect("Failed to initialize database");

    if config.seed_demo {
        tracing::info!("Seeding demo data...");
        let state = AppState::new(db.clone());
        match seed::seed_demo_data(state.book_repo.as_ref()).await {
            Ok(count) => tracing::info!("Demo data seeded successfully ({} books).", count),
            Err(e) => tracing::error!("Failed to seed data: {}", e),
        }
    }

    if let Err(e) = server::serve(&config, db).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
