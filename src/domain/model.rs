use crate::utils::error::PlannerError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    MuscleGain,
    FatLoss,
}

impl Goal {
    pub const ALL: [Goal; 2] = [Goal::MuscleGain, Goal::FatLoss];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::MuscleGain => "muscle_gain",
            Goal::FatLoss => "fat_loss",
        }
    }

    /// Capitalized form used in reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Goal::MuscleGain => "Muscle gain",
            Goal::FatLoss => "Fat loss",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '-' || c.is_whitespace() { '_' } else { c })
            .collect();

        match normalized.as_str() {
            "muscle_gain" | "gain_muscle" => Ok(Goal::MuscleGain),
            "fat_loss" | "lose_weight" | "weight_loss" => Ok(Goal::FatLoss),
            _ => Err(PlannerError::UnknownGoal {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    pub name: String,
    pub description: String,
    pub goal: Goal,
    pub exercises: Vec<String>,
}

impl Routine {
    pub fn new<I, S>(name: &str, description: &str, goal: Goal, exercises: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            goal,
            exercises: exercises.into_iter().map(Into::into).collect(),
        }
    }
}

/// Member input handed to the generator. Identity fields are echoed as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub member_name: String,
    pub member_age: String,
    pub goal: Goal,
    pub requested_days: u32,
}

/// Exercises per training day, keyed by day number so iteration is always
/// in ascending numeric order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    days: BTreeMap<u32, Vec<String>>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_days<I>(days: I) -> Self
    where
        I: IntoIterator<Item = (u32, Vec<String>)>,
    {
        Self {
            days: days.into_iter().collect(),
        }
    }

    pub fn insert_day(&mut self, day: u32, exercises: Vec<String>) {
        self.days.insert(day, exercises);
    }

    pub fn day_label(day: u32) -> String {
        format!("Day {}", day)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn day(&self, day: u32) -> Option<&[String]> {
        self.days.get(&day).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &[String])> {
        self.days.iter().map(|(day, exercises)| (*day, exercises.as_slice()))
    }

    pub fn labels(&self) -> Vec<String> {
        self.days.keys().map(|day| Self::day_label(*day)).collect()
    }
}

/// A generated plan. Fields are read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    member_name: String,
    member_age: String,
    requested_days: u32,
    goal: Goal,
    routine: Routine,
    schedule: Schedule,
    generated_at: DateTime<Utc>,
}

impl Plan {
    pub fn new(request: PlanRequest, routine: Routine, schedule: Schedule) -> Self {
        Self::new_at(request, routine, schedule, Utc::now())
    }

    pub fn new_at(
        request: PlanRequest,
        routine: Routine,
        schedule: Schedule,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            member_name: request.member_name,
            member_age: request.member_age,
            requested_days: request.requested_days,
            goal: request.goal,
            routine,
            schedule,
            generated_at,
        }
    }

    pub fn member_name(&self) -> &str {
        &self.member_name
    }

    pub fn member_age(&self) -> &str {
        &self.member_age
    }

    pub fn requested_days(&self) -> u32 {
        self.requested_days
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }

    pub fn routine(&self) -> &Routine {
        &self.routine
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn schedule_length(&self) -> usize {
        self.schedule.len()
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }
}
