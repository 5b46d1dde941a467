use async_trait::async_trait;
use log::info;

use super::context::HandlerContext;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::footprint_commands::*;
use crate::application::dtos::ScenarioDto;
use ecotrack_domain::events::footprint_events::{ScenarioDeleted, ScenarioSaved};
use ecotrack_domain::shared::DomainError;

/// Saves a projection of the current month as an immutable scenario
pub struct SaveScenarioCommandHandler {
    ctx: HandlerContext,
}

impl SaveScenarioCommandHandler {
    pub fn new(ctx: HandlerContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl CommandHandler<SaveScenarioCommand> for SaveScenarioCommandHandler {
    type Result = SaveScenarioResult;

    async fn handle(&self, cmd: SaveScenarioCommand) -> Result<Self::Result, DomainError> {
        info!("Handling SaveScenarioCommand: {}", cmd.name);

        let now = self.ctx.clock.now();
        let mut snapshot = self.ctx.load().await?;

        // Baseline is the current month derived from the stored habits
        let baseline = self.ctx.emissions.current(&snapshot);

        let mut book = snapshot.scenario_book();
        let scenario = book.save(cmd.name, cmd.description, &baseline, &cmd.parameters, now)?;
        snapshot.store_scenarios(book);

        self.ctx.save(&snapshot).await?;

        info!(
            "Scenario {} saved: {:.2} -> {:.2} kg ({:.1}%)",
            scenario.id(),
            scenario.baseline_emissions(),
            scenario.projected_emissions(),
            scenario.reduction_percent()
        );

        self.ctx
            .event_bus
            .publish(Box::new(ScenarioSaved {
                scenario_id: scenario.id(),
                name: scenario.name().to_string(),
                reduction_kg: scenario.reduction_kg(),
                reduction_percent: scenario.reduction_percent(),
                occurred_at: now,
            }))
            .await?;

        Ok(ScenarioDto::from(&scenario))
    }
}

pub struct DeleteScenarioCommandHandler {
    ctx: HandlerContext,
}

impl DeleteScenarioCommandHandler {
    pub fn new(ctx: HandlerContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl CommandHandler<DeleteScenarioCommand> for DeleteScenarioCommandHandler {
    type Result = DeleteScenarioResult;

    async fn handle(&self, cmd: DeleteScenarioCommand) -> Result<Self::Result, DomainError> {
        info!("Handling DeleteScenarioCommand for scenario: {}", cmd.scenario_id);

        let mut snapshot = self.ctx.load().await?;
        let mut book = snapshot.scenario_book();

        let Some(removed) = book.remove(cmd.scenario_id) else {
            info!("Scenario {} not found, nothing to delete", cmd.scenario_id);
            return Ok(DeleteScenarioResult { removed: false });
        };
        snapshot.store_scenarios(book);

        self.ctx.save(&snapshot).await?;

        self.ctx
            .event_bus
            .publish(Box::new(ScenarioDeleted {
                scenario_id: removed.id(),
                name: removed.name().to_string(),
                occurred_at: self.ctx.clock.now(),
            }))
            .await?;

        Ok(DeleteScenarioResult { removed: true })
    }
}
