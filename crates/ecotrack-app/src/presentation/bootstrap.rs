use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::application::commands::handlers::*;
use crate::application::event_handlers::PlanProgressEventHandler;
use crate::application::queries::FootprintQueryService;
use crate::application::services::ConfigService;
use crate::presentation::state::{
    AppState, CommandHandlers, Queries, Repositories, Runtime, Services,
};
use ecotrack_domain::events::footprint_events::{WeeklyGoalToggled, WeeklyPlanCreated};
use ecotrack_domain::events::{EventBus, TypedEventHandlerWrapper};
use ecotrack_domain::shared::{Clock, SystemClock};
use ecotrack_domain::snapshot::SnapshotRepository;
use ecotrack_infrastructure::events::InMemoryEventBus;
use ecotrack_infrastructure::persistence::repositories::{
    InMemorySnapshotRepository, SqliteSnapshotRepository, DEFAULT_NAMESPACE,
};
use ecotrack_infrastructure::persistence::Database;

pub const DB_FILE_NAME: &str = "ecotrack.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    Sqlite,
    /// Nothing is persisted; useful for dry runs
    InMemory,
}

pub struct BootstrapOptions {
    pub data_dir: PathBuf,
    pub namespace: String,
    pub storage: StorageMode,
    pub clock: Arc<dyn Clock>,
    pub config: Option<Arc<ConfigService>>,
}

impl BootstrapOptions {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            storage: StorageMode::Sqlite,
            clock: Arc::new(SystemClock),
            config: None,
        }
    }

    pub fn in_memory() -> Self {
        Self {
            storage: StorageMode::InMemory,
            ..Self::new(PathBuf::new())
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_config(mut self, config: Arc<ConfigService>) -> Self {
        self.config = Some(config);
        self
    }
}

/// Default data directory: `<platform data dir>/ecotrack`
pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join("ecotrack"))
        .ok_or_else(|| anyhow::anyhow!("Could not determine a data directory for this platform"))
}

pub async fn build_app_state(options: BootstrapOptions) -> anyhow::Result<AppState> {
    let startup_started_at = Instant::now();

    let (db, snapshot_repo, data_dir) = match options.storage {
        StorageMode::Sqlite => {
            std::fs::create_dir_all(&options.data_dir)?;
            let db_path = options.data_dir.join(DB_FILE_NAME);
            info!("Database path: {}", db_path.display());

            let started_at = Instant::now();
            let database = Database::new(&db_path).await?;
            database.run_migrations().await?;
            info!(
                "✓ Database ready ({}ms)",
                started_at.elapsed().as_millis()
            );

            let pool = Arc::new(database.pool().clone());
            let repo = Arc::new(SqliteSnapshotRepository::new(pool, options.namespace.clone()))
                as Arc<dyn SnapshotRepository>;
            (Some(Arc::new(database)), repo, Some(options.data_dir.clone()))
        }
        StorageMode::InMemory => {
            info!("Using in-memory storage, nothing will be persisted");
            let repo = Arc::new(InMemorySnapshotRepository::new()) as Arc<dyn SnapshotRepository>;
            (None, repo, None)
        }
    };

    let state = assemble(
        snapshot_repo,
        options.clock,
        options.config,
        db,
        data_dir,
    )
    .await;

    info!(
        namespace = %options.namespace,
        "✓ Application state ready ({}ms)",
        startup_started_at.elapsed().as_millis()
    );

    Ok(state)
}

/// Wire handlers, queries and event subscriptions around an existing repository
pub async fn build_with_repository(
    snapshot_repo: Arc<dyn SnapshotRepository>,
    clock: Arc<dyn Clock>,
) -> AppState {
    assemble(snapshot_repo, clock, None, None, None).await
}

async fn assemble(
    snapshot_repo: Arc<dyn SnapshotRepository>,
    clock: Arc<dyn Clock>,
    config: Option<Arc<ConfigService>>,
    db: Option<Arc<Database>>,
    data_dir: Option<PathBuf>,
) -> AppState {
    let event_bus = Arc::new(InMemoryEventBus::new());
    let plan_progress = PlanProgressEventHandler::new();
    register_event_handlers(&event_bus, &plan_progress).await;

    let ctx = HandlerContext::new(
        snapshot_repo.clone(),
        clock.clone(),
        event_bus.clone() as Arc<dyn EventBus>,
    );

    let command_handlers = CommandHandlers {
        add_habit: Arc::new(AddHabitCommandHandler::new(ctx.clone())),
        remove_habit: Arc::new(RemoveHabitCommandHandler::new(ctx.clone())),
        recompute_emissions: Arc::new(RecomputeEmissionsCommandHandler::new(ctx.clone())),
        save_scenario: Arc::new(SaveScenarioCommandHandler::new(ctx.clone())),
        delete_scenario: Arc::new(DeleteScenarioCommandHandler::new(ctx.clone())),
        create_weekly_plan: Arc::new(CreateWeeklyPlanCommandHandler::new(ctx.clone())),
        toggle_goal: Arc::new(ToggleGoalCommandHandler::new(ctx.clone())),
        update_settings: Arc::new(UpdateSettingsCommandHandler::new(ctx.clone())),
    };

    let queries = Queries {
        footprint: Arc::new(FootprintQueryService::new(
            snapshot_repo.clone(),
            clock.clone(),
        )),
    };

    AppState {
        runtime: Runtime {
            db,
            data_dir,
            clock,
            event_bus,
        },
        repositories: Repositories {
            snapshot: snapshot_repo,
        },
        services: Services {
            emissions: ctx.emissions.clone(),
            config,
            plan_progress,
        },
        queries,
        command_handlers,
    }
}

async fn register_event_handlers(
    event_bus: &InMemoryEventBus,
    plan_progress: &PlanProgressEventHandler,
) {
    event_bus
        .subscribe::<WeeklyPlanCreated>(Arc::new(
            TypedEventHandlerWrapper::<WeeklyPlanCreated, _>::new(plan_progress.clone()),
        ))
        .await;
    event_bus
        .subscribe::<WeeklyGoalToggled>(Arc::new(
            TypedEventHandlerWrapper::<WeeklyGoalToggled, _>::new(plan_progress.clone()),
        ))
        .await;
}
