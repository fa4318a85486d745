use crate::core::catalog::RoutineCatalog;
use crate::domain::model::{Goal, Plan, PlanRequest, Routine, Schedule};
use crate::utils::error::{PlannerError, Result};
use rand::seq::{index, IndexedRandom};
use rand::Rng;
use std::ops::RangeInclusive;

/// Realized plan length, drawn independently of the requested day count.
pub const PLAN_DAYS: RangeInclusive<u32> = 3..=6;

pub const EXERCISES_PER_DAY: usize = 3;

/// Builds plans from a read-only catalog. Randomness comes from the caller, so
/// a seeded RNG gives reproducible plans.
#[derive(Debug, Clone, Copy)]
pub struct PlanGenerator<'a> {
    catalog: &'a RoutineCatalog,
}

impl<'a> PlanGenerator<'a> {
    pub fn new(catalog: &'a RoutineCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a RoutineCatalog {
        self.catalog
    }

    pub fn generate<R: Rng>(&self, request: PlanRequest, rng: &mut R) -> Result<Plan> {
        let routine = self.choose_routine(request.goal, rng)?;

        let schedule_length = rng.random_range(PLAN_DAYS);
        tracing::debug!(
            "Selected '{}' for goal {} with {} days (requested {})",
            routine.name,
            request.goal,
            schedule_length,
            request.requested_days
        );

        let mut schedule = Schedule::new();
        for day in 1..=schedule_length {
            schedule.insert_day(day, sample_day(routine, rng)?);
        }

        Ok(Plan::new(request, routine.clone(), schedule))
    }

    /// Uniform pick among the routines tagged with `goal`.
    pub fn choose_routine<R: Rng>(&self, goal: Goal, rng: &mut R) -> Result<&'a Routine> {
        let candidates = self.catalog.for_goal(goal);
        candidates
            .choose(rng)
            .copied()
            .ok_or(PlannerError::NoRoutineForGoal { goal })
    }
}

/// Draws `EXERCISES_PER_DAY` distinct exercises in sampled order.
pub fn sample_day<R: Rng>(routine: &Routine, rng: &mut R) -> Result<Vec<String>> {
    let available = routine.exercises.len();
    if available < EXERCISES_PER_DAY {
        return Err(PlannerError::InsufficientExercises {
            routine: routine.name.clone(),
            available,
            required: EXERCISES_PER_DAY,
        });
    }

    Ok(index::sample(rng, available, EXERCISES_PER_DAY)
        .into_iter()
        .map(|i| routine.exercises[i].clone())
        .collect())
}
