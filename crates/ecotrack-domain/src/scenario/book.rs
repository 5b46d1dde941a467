use chrono::{DateTime, Utc};

use super::aggregate::Scenario;
use super::parameters::ScenarioParameters;
use super::projector::ScenarioProjector;
use crate::emissions::MonthlyAggregate;
use crate::shared::{DomainError, IdSequence, ScenarioId};

/// Saved scenarios, oldest first
#[derive(Debug, Clone, Default)]
pub struct ScenarioBook {
    scenarios: Vec<Scenario>,
    sequence: IdSequence,
}

impl ScenarioBook {
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        let sequence = IdSequence::from_existing(scenarios.iter().map(|s| s.id().value()));
        Self {
            scenarios,
            sequence,
        }
    }

    /// Project `baseline` under `params` and store the result
    pub fn save(
        &mut self,
        name: String,
        description: String,
        baseline: &MonthlyAggregate,
        params: &ScenarioParameters,
        now: DateTime<Utc>,
    ) -> Result<Scenario, DomainError> {
        let projection = ScenarioProjector::project(baseline, params);

        let mut next = self.sequence;
        let id = ScenarioId::from_raw(next.next(now)?);
        let scenario = Scenario::new(id, name, description, params, &projection, now)?;

        self.sequence = next;
        self.scenarios.push(scenario.clone());
        Ok(scenario)
    }

    /// Delete by id. Unknown ids are ignored.
    pub fn remove(&mut self, id: ScenarioId) -> Option<Scenario> {
        let index = self.scenarios.iter().position(|s| s.id() == id)?;
        Some(self.scenarios.remove(index))
    }

    pub fn get(&self, id: ScenarioId) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id() == id)
    }

    pub fn newest_first(&self) -> Vec<&Scenario> {
        self.scenarios.iter().rev().collect()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn into_scenarios(self) -> Vec<Scenario> {
        self.scenarios
    }
}
