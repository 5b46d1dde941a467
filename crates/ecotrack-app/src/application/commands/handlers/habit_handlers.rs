use async_trait::async_trait;
use log::info;

use super::context::HandlerContext;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::footprint_commands::*;
use crate::application::dtos::{HabitDto, MonthlyAggregateDto};
use ecotrack_domain::events::footprint_events::{HabitAdded, HabitRemoved};
use ecotrack_domain::shared::DomainError;

pub struct AddHabitCommandHandler {
    ctx: HandlerContext,
}

impl AddHabitCommandHandler {
    pub fn new(ctx: HandlerContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl CommandHandler<AddHabitCommand> for AddHabitCommandHandler {
    type Result = AddHabitResult;

    async fn handle(&self, cmd: AddHabitCommand) -> Result<Self::Result, DomainError> {
        info!(
            "Handling AddHabitCommand: {}/{}",
            cmd.habit.category, cmd.habit.habit_type
        );

        let now = self.ctx.clock.now();
        let mut snapshot = self.ctx.load().await?;

        let mut store = snapshot.habit_store();
        let habit_id = store.add(cmd.habit, now)?.id();
        snapshot.store_habits(store);

        let aggregate = self.ctx.commit(&mut snapshot).await?;

        let habit = snapshot
            .habits
            .iter()
            .find(|h| h.id() == habit_id)
            .ok_or_else(|| {
                DomainError::DataIntegrity(format!("Habit {} missing after save", habit_id))
            })?;

        info!(
            "Habit {} added ({} kg CO2e/month), month total {}",
            habit_id,
            habit.emissions(),
            aggregate.total()
        );

        self.ctx
            .event_bus
            .publish(Box::new(HabitAdded {
                habit_id,
                category: habit.category(),
                habit_type: habit.habit_type().to_string(),
                emissions: habit.emissions(),
                occurred_at: now,
            }))
            .await?;
        self.ctx
            .publish_recomputed(&aggregate, snapshot.habits.len())
            .await?;

        Ok(AddHabitResult {
            habit: HabitDto::from(habit),
            month: MonthlyAggregateDto::from(&aggregate),
        })
    }
}

pub struct RemoveHabitCommandHandler {
    ctx: HandlerContext,
}

impl RemoveHabitCommandHandler {
    pub fn new(ctx: HandlerContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl CommandHandler<RemoveHabitCommand> for RemoveHabitCommandHandler {
    type Result = RemoveHabitResult;

    async fn handle(&self, cmd: RemoveHabitCommand) -> Result<Self::Result, DomainError> {
        info!("Handling RemoveHabitCommand for habit: {}", cmd.habit_id);

        let mut snapshot = self.ctx.load().await?;
        let mut store = snapshot.habit_store();

        let Some(removed) = store.remove(cmd.habit_id) else {
            info!("Habit {} not found, nothing to remove", cmd.habit_id);
            return Ok(RemoveHabitResult {
                removed: false,
                month: None,
            });
        };
        snapshot.store_habits(store);

        let aggregate = self.ctx.commit(&mut snapshot).await?;

        self.ctx
            .event_bus
            .publish(Box::new(HabitRemoved {
                habit_id: removed.id(),
                category: removed.category(),
                habit_type: removed.habit_type().to_string(),
                occurred_at: self.ctx.clock.now(),
            }))
            .await?;
        self.ctx
            .publish_recomputed(&aggregate, snapshot.habits.len())
            .await?;

        Ok(RemoveHabitResult {
            removed: true,
            month: Some(MonthlyAggregateDto::from(&aggregate)),
        })
    }
}

pub struct RecomputeEmissionsCommandHandler {
    ctx: HandlerContext,
}

impl RecomputeEmissionsCommandHandler {
    pub fn new(ctx: HandlerContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl CommandHandler<RecomputeEmissionsCommand> for RecomputeEmissionsCommandHandler {
    type Result = MonthlyAggregateDto;

    async fn handle(&self, _cmd: RecomputeEmissionsCommand) -> Result<Self::Result, DomainError> {
        info!("Handling RecomputeEmissionsCommand");

        let mut snapshot = self.ctx.load().await?;
        let aggregate = self.ctx.commit(&mut snapshot).await?;

        self.ctx
            .publish_recomputed(&aggregate, snapshot.habits.len())
            .await?;

        Ok(MonthlyAggregateDto::from(&aggregate))
    }
}
