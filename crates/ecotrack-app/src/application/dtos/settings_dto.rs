use serde::{Deserialize, Serialize};

use ecotrack_domain::snapshot::UserSettings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettingsDto {
    pub display_name: Option<String>,
    pub monthly_target_kg: Option<f64>,
}

impl From<&UserSettings> for UserSettingsDto {
    fn from(settings: &UserSettings) -> Self {
        Self {
            display_name: settings.display_name().map(str::to_string),
            monthly_target_kg: settings.monthly_target_kg(),
        }
    }
}
