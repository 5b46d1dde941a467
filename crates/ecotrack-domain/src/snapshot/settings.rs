use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    monthly_target_kg: Option<f64>,
}

impl UserSettings {
    pub fn new(
        display_name: Option<String>,
        monthly_target_kg: Option<f64>,
    ) -> Result<Self, DomainError> {
        let mut settings = Self::default();
        settings.set_display_name(display_name);
        settings.set_monthly_target(monthly_target_kg)?;
        Ok(settings)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn monthly_target_kg(&self) -> Option<f64> {
        self.monthly_target_kg
    }

    /// Blank names clear the stored name
    pub fn set_display_name(&mut self, name: Option<String>) {
        self.display_name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
    }

    pub fn set_monthly_target(&mut self, target_kg: Option<f64>) -> Result<(), DomainError> {
        if let Some(target) = target_kg {
            if !target.is_finite() || target <= 0.0 {
                return Err(DomainError::Validation(format!(
                    "Monthly target must be a positive number of kg, got {}",
                    target
                )));
            }
        }
        self.monthly_target_kg = target_kg;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_display_name_is_cleared() {
        let settings = UserSettings::new(Some("   ".to_string()), None).unwrap();
        assert_eq!(settings.display_name(), None);

        let settings = UserSettings::new(Some(" Ana ".to_string()), None).unwrap();
        assert_eq!(settings.display_name(), Some("Ana"));
    }

    #[test]
    fn test_target_must_be_positive() {
        assert!(UserSettings::new(None, Some(0.0)).is_err());
        assert!(UserSettings::new(None, Some(-5.0)).is_err());
        assert!(UserSettings::new(None, Some(f64::NAN)).is_err());
        assert_eq!(
            UserSettings::new(None, Some(250.0)).unwrap().monthly_target_kg(),
            Some(250.0)
        );
    }
}
