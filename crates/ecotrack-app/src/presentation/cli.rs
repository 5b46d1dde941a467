//! Command-line front end. Every command prints a JSON document on stdout.

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::commands::footprint_commands::*;
use crate::application::commands::CommandHandler;
use crate::application::services::{ConfigService, LogLevel};
use crate::presentation::bootstrap::{default_data_dir, BootstrapOptions};
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;
use ecotrack_domain::factors::{emission_factor, known_types, Category, Frequency};
use ecotrack_domain::habit::NewHabit;
use ecotrack_domain::scenario::ScenarioParameters;
use ecotrack_domain::shared::{HabitId, MonthKey, PlanId, ScenarioId};
use ecotrack_infrastructure::logging::{get_log_dir, log_dir_for, LoggingOptions};
use ecotrack_infrastructure::persistence::repositories::DEFAULT_NAMESPACE;

#[derive(Debug, Parser)]
#[command(name = "ecotrack", version, about = "Personal carbon footprint tracker")]
pub struct Cli {
    /// Directory holding the database, config and logs
    #[arg(long, env = "ECOTRACK_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level override (error, warn, info, debug, trace)
    #[arg(long, env = "ECOTRACK_LOG_LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    /// Snapshot namespace override
    #[arg(long, env = "ECOTRACK_NAMESPACE", global = true)]
    pub namespace: Option<String>,

    /// Use throwaway in-memory storage
    #[arg(long, global = true)]
    pub in_memory: bool,

    /// Mirror logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn resolve_data_dir(&self) -> anyhow::Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_data_dir(),
        }
    }

    /// Persisted config below `data_dir`. In-memory runs use defaults and touch no files.
    pub fn load_config(&self, data_dir: &Path) -> anyhow::Result<Option<Arc<ConfigService>>> {
        if self.in_memory {
            return Ok(None);
        }
        Ok(Some(Arc::new(ConfigService::load(data_dir)?)))
    }

    /// Flag first, then the config file, then the default
    pub fn log_level(&self, config: Option<&ConfigService>) -> LogLevel {
        self.log_level
            .or_else(|| config.map(ConfigService::get_log_level))
            .unwrap_or_default()
    }

    pub fn logging_options(&self, data_dir: &Path, level: LogLevel) -> LoggingOptions {
        let console = self.verbose || cfg!(debug_assertions);
        if self.in_memory {
            LoggingOptions::console_only(level.as_str()).with_console(console)
        } else {
            LoggingOptions::new(log_dir_for(data_dir), level.as_str()).with_console(console)
        }
    }

    pub fn bootstrap_options(
        &self,
        data_dir: &Path,
        config: Option<Arc<ConfigService>>,
    ) -> BootstrapOptions {
        let namespace = self
            .namespace
            .clone()
            .or_else(|| config.as_ref().map(|c| c.namespace()))
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());

        let options = if self.in_memory {
            BootstrapOptions::in_memory()
        } else {
            BootstrapOptions::new(data_dir)
        }
        .with_namespace(namespace);

        match config {
            Some(config) => options.with_config(config),
            None => options,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add, remove and list habits
    #[command(subcommand)]
    Habit(HabitCommands),

    /// Monthly emissions and history
    #[command(subcommand)]
    Emissions(EmissionsCommands),

    /// What-if reduction scenarios
    #[command(subcommand)]
    Scenario(ScenarioCommands),

    /// Weekly improvement plans
    #[command(subcommand)]
    Plan(PlanCommands),

    /// User settings
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Largest sources this month, with tips and target progress
    Insights,

    /// List known habit types and their emission factors
    Factors {
        /// Limit to one category
        category: Option<Category>,
    },

    /// Application configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Debug, Subcommand)]
pub enum HabitCommands {
    /// Add a habit
    Add(AddHabitArgs),

    /// Remove a habit by id
    Remove { id: HabitId },

    /// List habits with their current monthly emissions
    List,
}

#[derive(Debug, Args)]
pub struct AddHabitArgs {
    /// transport, energy, food, shopping or waste
    pub category: Category,

    /// Habit type, e.g. car_gasoline, electricity, beef
    #[arg(value_name = "TYPE")]
    pub habit_type: String,

    /// Units per week (food, waste) or per month (shopping)
    #[arg(short, long)]
    pub quantity: Option<f64>,

    /// km per trip (transport)
    #[arg(short, long)]
    pub distance: Option<f64>,

    /// Units per month, e.g. kWh (energy)
    #[arg(short, long)]
    pub consumption: Option<f64>,

    /// daily, weekdays, twice_weekly, weekly or monthly (transport)
    #[arg(short, long)]
    pub frequency: Option<Frequency>,
}

impl From<AddHabitArgs> for NewHabit {
    fn from(args: AddHabitArgs) -> Self {
        NewHabit {
            category: args.category,
            habit_type: args.habit_type,
            quantity: args.quantity,
            distance: args.distance,
            consumption: args.consumption,
            frequency: args.frequency,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum EmissionsCommands {
    /// Current month derived from the stored habits
    Current,

    /// Stored aggregate for one month (YYYY-MM)
    Month { month: MonthKey },

    /// All stored months
    History,

    /// Month-over-month change
    Trend,

    /// Recompute and store the current month
    Recompute,
}

#[derive(Debug, Args)]
pub struct ScenarioArgs {
    /// Car use reduction, percent
    #[arg(long, default_value_t = 0.0)]
    pub car_reduction: f64,

    /// Meat-free days per week
    #[arg(long, default_value_t = 0)]
    pub meat_days: u8,

    /// Home energy reduction, percent
    #[arg(long, default_value_t = 0.0)]
    pub energy_reduction: f64,

    /// Recycling increase, percent
    #[arg(long, default_value_t = 0.0)]
    pub recycling_increase: f64,
}

impl ScenarioArgs {
    fn parameters(&self) -> Result<ScenarioParameters, CommandError> {
        Ok(ScenarioParameters::from_percentages(
            self.car_reduction,
            self.meat_days,
            self.energy_reduction,
            self.recycling_increase,
        )?)
    }
}

#[derive(Debug, Subcommand)]
pub enum ScenarioCommands {
    /// Project the current month without saving
    Preview(ScenarioArgs),

    /// Project the current month and save the result
    Save {
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[command(flatten)]
        params: ScenarioArgs,
    },

    /// Saved scenarios, newest first
    List,

    /// Delete a saved scenario
    Delete { id: ScenarioId },
}

#[derive(Debug, Subcommand)]
pub enum PlanCommands {
    /// Start a plan for this week; replaces the current plan
    Create {
        #[arg(required = true)]
        goals: Vec<String>,
    },

    /// Mark a goal done (or undone with --undo)
    Toggle {
        /// Zero-based goal index
        index: usize,
        /// Plan id, defaults to the current plan
        #[arg(long)]
        plan: Option<PlanId>,
        #[arg(long)]
        undo: bool,
    },

    /// Show the current plan
    Current,

    /// Show earlier plans, newest first
    Previous,
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommands {
    Show,

    Update {
        #[arg(long)]
        display_name: Option<String>,
        /// Monthly budget in kg CO2e
        #[arg(long, conflicts_with = "clear_target")]
        monthly_target: Option<f64>,
        #[arg(long)]
        clear_target: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    Show,

    /// Persist the log level used on the next run
    SetLogLevel { level: LogLevel },

    /// Persist the snapshot namespace used on the next run
    SetNamespace { namespace: String },
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, CommandError> {
    Ok(serde_json::to_value(value)?)
}

/// Run one command against `state`
pub async fn execute(command: Commands, state: &AppState) -> Result<Value, CommandError> {
    let handlers = &state.command_handlers;
    let queries = &state.queries.footprint;

    match command {
        Commands::Habit(cmd) => match cmd {
            HabitCommands::Add(args) => {
                let result = handlers
                    .add_habit
                    .handle(AddHabitCommand { habit: args.into() })
                    .await?;
                to_json(&result)
            }
            HabitCommands::Remove { id } => {
                let result = handlers
                    .remove_habit
                    .handle(RemoveHabitCommand { habit_id: id })
                    .await?;
                to_json(&result)
            }
            HabitCommands::List => to_json(&queries.list_habits().await?),
        },

        Commands::Emissions(cmd) => match cmd {
            EmissionsCommands::Current => to_json(&queries.current_month().await?),
            EmissionsCommands::Month { month } => to_json(&queries.month(month).await?),
            EmissionsCommands::History => to_json(&queries.history().await?),
            EmissionsCommands::Trend => to_json(&queries.trend().await?),
            EmissionsCommands::Recompute => {
                let result = handlers
                    .recompute_emissions
                    .handle(RecomputeEmissionsCommand)
                    .await?;
                to_json(&result)
            }
        },

        Commands::Scenario(cmd) => match cmd {
            ScenarioCommands::Preview(args) => {
                to_json(&queries.preview_scenario(&args.parameters()?).await?)
            }
            ScenarioCommands::Save {
                name,
                description,
                params,
            } => {
                let result = handlers
                    .save_scenario
                    .handle(SaveScenarioCommand {
                        name,
                        description,
                        parameters: params.parameters()?,
                    })
                    .await?;
                to_json(&result)
            }
            ScenarioCommands::List => to_json(&queries.list_scenarios().await?),
            ScenarioCommands::Delete { id } => {
                let result = handlers
                    .delete_scenario
                    .handle(DeleteScenarioCommand { scenario_id: id })
                    .await?;
                to_json(&result)
            }
        },

        Commands::Plan(cmd) => match cmd {
            PlanCommands::Create { goals } => {
                let result = handlers
                    .create_weekly_plan
                    .handle(CreateWeeklyPlanCommand { goals })
                    .await?;
                to_json(&result)
            }
            PlanCommands::Toggle { index, plan, undo } => {
                let result = handlers
                    .toggle_goal
                    .handle(ToggleGoalCommand {
                        plan_id: plan,
                        goal_index: index,
                        completed: !undo,
                    })
                    .await?;
                to_json(&result)
            }
            PlanCommands::Current => to_json(&queries.current_plan().await?),
            PlanCommands::Previous => to_json(&queries.previous_plans().await?),
        },

        Commands::Settings(cmd) => match cmd {
            SettingsCommands::Show => to_json(&queries.settings().await?),
            SettingsCommands::Update {
                display_name,
                monthly_target,
                clear_target,
            } => {
                let result = handlers
                    .update_settings
                    .handle(UpdateSettingsCommand {
                        display_name,
                        monthly_target_kg: monthly_target,
                        clear_target,
                    })
                    .await?;
                to_json(&result)
            }
        },

        Commands::Insights => to_json(&queries.insights().await?),

        Commands::Factors { category } => Ok(factor_listing(category)),

        Commands::Config(cmd) => {
            let config = state
                .services
                .config
                .as_ref()
                .ok_or_else(|| CommandError::invalid_input("No configuration file in use"))?;
            match cmd {
                ConfigCommands::Show => {
                    let mut value = to_json(&config.snapshot())?;
                    value["path"] = json!(config.config_path().display().to_string());
                    if let Some(log_dir) = get_log_dir() {
                        value["log_dir"] = json!(log_dir.display().to_string());
                    }
                    Ok(value)
                }
                ConfigCommands::SetLogLevel { level } => {
                    config.set_log_level(level)?;
                    to_json(&config.snapshot())
                }
                ConfigCommands::SetNamespace { namespace } => {
                    config.set_namespace(&namespace)?;
                    to_json(&config.snapshot())
                }
            }
        }
    }
}

fn factor_listing(category: Option<Category>) -> Value {
    let categories: Vec<Category> = match category {
        Some(c) => vec![c],
        None => Category::ALL.to_vec(),
    };

    let mut listing = serde_json::Map::new();
    for category in categories {
        let factors: serde_json::Map<String, Value> = known_types(category)
            .into_iter()
            .filter_map(|t| emission_factor(category, t).map(|f| (t.to_string(), json!(f))))
            .collect();
        listing.insert(category.as_str().to_string(), Value::Object(factors));
    }
    Value::Object(listing)
}
