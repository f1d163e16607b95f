use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use hacks_ai::{CoachService, GeminiClient};
use hacks_core::goals::{GoalService, GoalServiceTrait};
use hacks_storage_sqlite::db::{self, write_actor};
use hacks_storage_sqlite::snapshots::SnapshotRepository;

use crate::config::Config;

pub struct AppState {
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub coach_service: Arc<CoachService<GeminiClient>>,
}

pub fn init_tracing() {
    let log_format = std::env::var("HACKS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
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
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let snapshot_repo = Arc::new(SnapshotRepository::new(pool.clone(), writer.clone()));
    let goal_service = Arc::new(GoalService::new(snapshot_repo));
    goal_service.initialize().await?;

    let coach_client =
        GeminiClient::with_model(config.gemini_api_key.clone(), config.gemini_model.clone());
    let coach_service = Arc::new(CoachService::new(coach_client));

    Ok(Arc::new(AppState {
        goal_service,
        coach_service,
    }))
}
