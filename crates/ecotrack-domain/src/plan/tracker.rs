use chrono::{DateTime, Utc};

use super::aggregate::WeeklyPlan;
use crate::shared::{DomainError, IdSequence, PlanId};

/// All weekly plans plus the id of the current one
#[derive(Debug, Clone, Default)]
pub struct PlanTracker {
    plans: Vec<WeeklyPlan>,
    current: Option<PlanId>,
    sequence: IdSequence,
}

impl PlanTracker {
    pub fn new(plans: Vec<WeeklyPlan>, current: Option<PlanId>) -> Self {
        let sequence = IdSequence::from_existing(plans.iter().map(|p| p.id().value()));
        Self {
            plans,
            current,
            sequence,
        }
    }

    /// Start a plan for the week of `now`; it replaces the current plan.
    pub fn create(
        &mut self,
        goals: Vec<String>,
        now: DateTime<Utc>,
    ) -> Result<WeeklyPlan, DomainError> {
        let mut next = self.sequence;
        let id = PlanId::from_raw(next.next(now)?);
        let plan = WeeklyPlan::new(id, goals, now)?;

        self.sequence = next;
        self.plans.push(plan.clone());
        self.current = Some(id);
        Ok(plan)
    }

    /// Toggle a goal. Unknown plans and out-of-range indexes are ignored.
    pub fn toggle_goal(
        &mut self,
        plan_id: PlanId,
        goal_index: usize,
        completed: bool,
    ) -> Option<&WeeklyPlan> {
        let plan = self.plans.iter_mut().find(|p| p.id() == plan_id)?;
        if plan.toggle_goal(goal_index, completed) {
            Some(plan)
        } else {
            None
        }
    }

    pub fn current_id(&self) -> Option<PlanId> {
        self.current
    }

    pub fn current(&self) -> Option<&WeeklyPlan> {
        let id = self.current?;
        self.plans.iter().find(|p| p.id() == id)
    }

    /// Every plan except the current one, most recently created first
    pub fn previous_plans(&self) -> Vec<&WeeklyPlan> {
        self.plans
            .iter()
            .rev()
            .filter(|p| Some(p.id()) != self.current)
            .collect()
    }

    pub fn get(&self, id: PlanId) -> Option<&WeeklyPlan> {
        self.plans.iter().find(|p| p.id() == id)
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    pub fn into_parts(self) -> (Vec<WeeklyPlan>, Option<PlanId>) {
        (self.plans, self.current)
    }
}
