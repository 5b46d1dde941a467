use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, PlanId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub value: String,
    pub completed: bool,
}

/// Improvement goals for one Monday–Sunday week.
///
/// `progress` and `completed` are derived from the goals and only change through
/// [`WeeklyPlan::toggle_goal`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    id: PlanId,
    created_at: DateTime<Utc>,
    week_start: DateTime<Utc>,
    week_end: DateTime<Utc>,
    goals: Vec<Goal>,
    progress: u8,
    completed: bool,
}

/// Monday 00:00:00 and Sunday 23:59:59.999 (UTC) of the ISO week containing `instant`
pub fn week_bounds(instant: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let date = instant.date_naive();
    let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
    let start = monday.and_time(NaiveTime::MIN).and_utc();
    let end = start + Duration::days(7) - Duration::milliseconds(1);
    (start, end)
}

impl WeeklyPlan {
    pub fn new(
        id: PlanId,
        goals: Vec<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let goals: Vec<Goal> = goals
            .into_iter()
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty())
            .map(|value| Goal {
                value,
                completed: false,
            })
            .collect();

        if goals.is_empty() {
            return Err(DomainError::Validation(
                "A weekly plan needs at least one goal".to_string(),
            ));
        }

        let (week_start, week_end) = week_bounds(created_at);

        Ok(Self {
            id,
            created_at,
            week_start,
            week_end,
            goals,
            progress: 0,
            completed: false,
        })
    }

    pub fn id(&self) -> PlanId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn week_start(&self) -> DateTime<Utc> {
        self.week_start
    }

    pub fn week_end(&self) -> DateTime<Utc> {
        self.week_end
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn completed_count(&self) -> usize {
        self.goals.iter().filter(|g| g.completed).count()
    }

    /// Whether `now` falls inside the plan's week
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        now >= self.week_start && now <= self.week_end
    }

    /// Set one goal's flag and refresh the derived fields.
    ///
    /// Returns `false` and changes nothing when `index` is out of range.
    pub fn toggle_goal(&mut self, index: usize, completed: bool) -> bool {
        let Some(goal) = self.goals.get_mut(index) else {
            return false;
        };
        goal.completed = completed;
        self.refresh_progress();
        true
    }

    fn refresh_progress(&mut self) {
        let total = self.goals.len();
        if total == 0 {
            self.progress = 0;
            self.completed = false;
            return;
        }

        let done = self.completed_count();
        self.progress = ((done as f64 / total as f64) * 100.0).round() as u8;
        self.completed = done == total;
    }
}
