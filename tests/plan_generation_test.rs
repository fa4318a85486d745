use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use vitalforce::core::generator::{EXERCISES_PER_DAY, PLAN_DAYS};
use vitalforce::{Goal, PlanGenerator, PlanRequest, PlannerError, Routine, RoutineCatalog};

fn request(goal: Goal, requested_days: u32) -> PlanRequest {
    PlanRequest {
        member_name: "Ana Lopez".to_string(),
        member_age: "29".to_string(),
        goal,
        requested_days,
    }
}

/// Goal, day range and distinct daily samples hold for every seed.
#[test]
fn test_generated_plans_hold_invariants_across_seeds() {
    let generator = PlanGenerator::new(RoutineCatalog::builtin());

    for goal in Goal::ALL {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let plan = generator.generate(request(goal, 4), &mut rng).unwrap();

            assert_eq!(plan.routine().goal, goal);
            assert!(PLAN_DAYS.contains(&(plan.schedule_length() as u32)));
            assert_eq!(plan.schedule_length(), plan.schedule().len());

            let days: Vec<u32> = plan.schedule().iter().map(|(day, _)| day).collect();
            let expected: Vec<u32> = (1..=plan.schedule_length() as u32).collect();
            assert_eq!(days, expected);

            for (_, exercises) in plan.schedule().iter() {
                assert_eq!(exercises.len(), EXERCISES_PER_DAY);
                let unique: HashSet<&String> = exercises.iter().collect();
                assert_eq!(unique.len(), EXERCISES_PER_DAY);
                assert!(exercises
                    .iter()
                    .all(|exercise| plan.routine().exercises.contains(exercise)));
            }
        }
    }
}

#[test]
fn test_every_plan_length_is_reachable() {
    let generator = PlanGenerator::new(RoutineCatalog::builtin());
    let lengths: HashSet<usize> = (0..300)
        .map(|seed| {
            generator
                .generate(request(Goal::MuscleGain, 3), &mut StdRng::seed_from_u64(seed))
                .unwrap()
                .schedule_length()
        })
        .collect();

    assert_eq!(lengths, HashSet::from([3, 4, 5, 6]));
}

#[test]
fn test_fat_loss_request_for_five_days() {
    let catalog = RoutineCatalog::builtin();
    let generator = PlanGenerator::new(catalog);
    let mut rng = StdRng::seed_from_u64(2024);

    let plan = generator.generate(request(Goal::FatLoss, 5), &mut rng).unwrap();

    assert_eq!(plan.goal(), Goal::FatLoss);
    assert_eq!(plan.routine().goal, Goal::FatLoss);
    assert_eq!(plan.routine().exercises.len(), 6);
    assert!(catalog.find(&plan.routine().name).is_some());
    assert_eq!(plan.requested_days(), 5);
    assert_eq!(plan.member_name(), "Ana Lopez");
    assert_eq!(plan.schedule().labels().len(), plan.schedule_length());
}

#[test]
fn test_requested_days_do_not_bound_plan_length() {
    let generator = PlanGenerator::new(RoutineCatalog::builtin());

    let long_plans = (0..100)
        .map(|seed| {
            generator
                .generate(request(Goal::FatLoss, 1), &mut StdRng::seed_from_u64(seed))
                .unwrap()
        })
        .filter(|plan| plan.schedule_length() > 1)
        .count();

    assert_eq!(long_plans, 100);
}

#[test]
fn test_goal_without_routines_fails() {
    let catalog = RoutineCatalog::new(vec![Routine::new(
        "Upper body",
        "Push and pull",
        Goal::MuscleGain,
        ["Bench press", "Row", "Pull-ups", "Dips"],
    )]);
    let generator = PlanGenerator::new(&catalog);
    let mut rng = StdRng::seed_from_u64(5);

    let result = generator.generate(request(Goal::FatLoss, 4), &mut rng);
    match result {
        Err(PlannerError::NoRoutineForGoal { goal }) => assert_eq!(goal, Goal::FatLoss),
        other => panic!("expected NoRoutineForGoal, got {:?}", other),
    }
}

#[test]
fn test_unknown_goal_name_is_rejected_before_generation() {
    let parsed = "Unknown".parse::<Goal>();
    assert!(matches!(parsed, Err(PlannerError::UnknownGoal { .. })));
}

#[test]
fn test_routine_with_exactly_three_exercises() {
    let catalog = RoutineCatalog::new(vec![Routine::new(
        "Minimal",
        "Three moves",
        Goal::FatLoss,
        ["Burpees", "Jump rope", "Plank"],
    )]);
    let generator = PlanGenerator::new(&catalog);
    let full: HashSet<&str> = HashSet::from(["Burpees", "Jump rope", "Plank"]);

    for seed in 0..100 {
        let plan = generator
            .generate(request(Goal::FatLoss, 3), &mut StdRng::seed_from_u64(seed))
            .unwrap();
        for (_, exercises) in plan.schedule().iter() {
            let day: HashSet<&str> = exercises.iter().map(String::as_str).collect();
            assert_eq!(day, full);
        }
    }
}

#[test]
fn test_short_routine_fails_with_insufficient_exercises() {
    // bypasses catalog validation on purpose
    let catalog = RoutineCatalog::new(vec![Routine::new(
        "Pair",
        "Only two",
        Goal::MuscleGain,
        ["Squats", "Deadlift"],
    )]);
    let generator = PlanGenerator::new(&catalog);
    let mut rng = StdRng::seed_from_u64(9);

    assert!(matches!(
        generator.generate(request(Goal::MuscleGain, 3), &mut rng),
        Err(PlannerError::InsufficientExercises { available: 2, required: 3, .. })
    ));
    assert!(catalog.validate().is_err());
}
