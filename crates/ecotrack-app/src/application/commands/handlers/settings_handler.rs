use async_trait::async_trait;
use log::info;

use super::context::HandlerContext;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::footprint_commands::*;
use crate::application::dtos::UserSettingsDto;
use ecotrack_domain::shared::DomainError;

/// Applies the provided fields; fields left as `None` keep their stored value
pub struct UpdateSettingsCommandHandler {
    ctx: HandlerContext,
}

impl UpdateSettingsCommandHandler {
    pub fn new(ctx: HandlerContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl CommandHandler<UpdateSettingsCommand> for UpdateSettingsCommandHandler {
    type Result = UpdateSettingsResult;

    async fn handle(&self, cmd: UpdateSettingsCommand) -> Result<Self::Result, DomainError> {
        info!("Handling UpdateSettingsCommand");

        if cmd.clear_target && cmd.monthly_target_kg.is_some() {
            return Err(DomainError::InvalidInput(
                "Cannot set and clear the monthly target at the same time".to_string(),
            ));
        }

        let mut snapshot = self.ctx.load().await?;
        let mut settings = snapshot.user_settings.clone();

        if let Some(name) = cmd.display_name {
            settings.set_display_name(Some(name));
        }
        if cmd.clear_target {
            settings.set_monthly_target(None)?;
        } else if let Some(target) = cmd.monthly_target_kg {
            settings.set_monthly_target(Some(target))?;
        }

        snapshot.user_settings = settings;
        self.ctx.save(&snapshot).await?;

        Ok(UserSettingsDto::from(&snapshot.user_settings))
    }
}
