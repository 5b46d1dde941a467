use async_trait::async_trait;
use log::info;

use super::context::HandlerContext;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::footprint_commands::*;
use crate::application::dtos::WeeklyPlanDtoMapper;
use ecotrack_domain::events::footprint_events::{WeeklyGoalToggled, WeeklyPlanCreated};
use ecotrack_domain::shared::DomainError;

/// Starts a new weekly plan, which becomes the current one
pub struct CreateWeeklyPlanCommandHandler {
    ctx: HandlerContext,
}

impl CreateWeeklyPlanCommandHandler {
    pub fn new(ctx: HandlerContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl CommandHandler<CreateWeeklyPlanCommand> for CreateWeeklyPlanCommandHandler {
    type Result = CreateWeeklyPlanResult;

    async fn handle(&self, cmd: CreateWeeklyPlanCommand) -> Result<Self::Result, DomainError> {
        info!(
            "Handling CreateWeeklyPlanCommand with {} goal(s)",
            cmd.goals.len()
        );

        let now = self.ctx.clock.now();
        let mut snapshot = self.ctx.load().await?;

        let mut tracker = snapshot.plan_tracker();
        let plan = tracker.create(cmd.goals, now)?;
        snapshot.store_plans(tracker);

        self.ctx.save(&snapshot).await?;

        self.ctx
            .event_bus
            .publish(Box::new(WeeklyPlanCreated {
                plan_id: plan.id(),
                goal_count: plan.goals().len(),
                week_start: plan.week_start(),
                occurred_at: now,
            }))
            .await?;

        Ok(WeeklyPlanDtoMapper::new(&plan, now).to_dto())
    }
}

pub struct ToggleGoalCommandHandler {
    ctx: HandlerContext,
}

impl ToggleGoalCommandHandler {
    pub fn new(ctx: HandlerContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl CommandHandler<ToggleGoalCommand> for ToggleGoalCommandHandler {
    type Result = ToggleGoalResult;

    async fn handle(&self, cmd: ToggleGoalCommand) -> Result<Self::Result, DomainError> {
        let now = self.ctx.clock.now();
        let mut snapshot = self.ctx.load().await?;
        let mut tracker = snapshot.plan_tracker();

        let Some(plan_id) = cmd.plan_id.or(tracker.current_id()) else {
            info!("No current weekly plan, ignoring goal toggle");
            return Ok(ToggleGoalResult { plan: None });
        };

        info!(
            "Handling ToggleGoalCommand: plan {} goal {} -> {}",
            plan_id, cmd.goal_index, cmd.completed
        );

        let Some(plan) = tracker
            .toggle_goal(plan_id, cmd.goal_index, cmd.completed)
            .cloned()
        else {
            info!(
                "Plan {} or goal {} not found, nothing to toggle",
                plan_id, cmd.goal_index
            );
            return Ok(ToggleGoalResult { plan: None });
        };
        snapshot.store_plans(tracker);

        self.ctx.save(&snapshot).await?;

        self.ctx
            .event_bus
            .publish(Box::new(WeeklyGoalToggled {
                plan_id,
                goal_index: cmd.goal_index,
                completed: cmd.completed,
                progress: plan.progress(),
                plan_completed: plan.is_completed(),
                occurred_at: now,
            }))
            .await?;

        Ok(ToggleGoalResult {
            plan: Some(WeeklyPlanDtoMapper::new(&plan, now).to_dto()),
        })
    }
}
