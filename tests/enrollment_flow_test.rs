use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;
use vitalforce::adapters::encoders::{HtmlEncoder, JsonEncoder};
use vitalforce::adapters::export::schedule_csv;
use vitalforce::core::ReportDocument;
use vitalforce::domain::ports::Storage;
use vitalforce::{
    EnrollmentService, FileAssetSource, Goal, LocalStorage, MemoryStorage, PlanRequest,
    PlannerConfig, PlannerError, ReportLayout, ReportRenderer, Routine, RoutineCatalog,
    SessionStore,
};

fn request(name: &str, goal: Goal, days: u32) -> PlanRequest {
    PlanRequest {
        member_name: name.to_string(),
        member_age: "27".to_string(),
        goal,
        requested_days: days,
    }
}

#[tokio::test]
async fn test_enroll_confirm_and_download_on_disk() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let sessions = SessionStore::new(LocalStorage::new(temp_dir.path().join("sessions")));
    let renderer = ReportRenderer::new(ReportLayout::default(), FileAssetSource::none());
    let service = EnrollmentService::new(RoutineCatalog::builtin(), renderer, sessions);

    let mut rng = StdRng::seed_from_u64(99);
    let plan = service
        .enroll("member-1", request("Maria Jose Perez", Goal::FatLoss, 5), &mut rng)
        .await?;

    assert!(temp_dir.path().join("sessions/member-1.json").exists());

    let confirmed = service.confirmation("member-1").await?;
    assert_eq!(confirmed, plan);

    let download = service.download("member-1", &HtmlEncoder).await?;
    assert_eq!(download.file_name, "Routine_Maria_Jose_Perez.html");
    assert_eq!(download.media_type, "text/html; charset=utf-8");
    assert!(download.warnings.is_empty());

    let html = String::from_utf8(download.bytes)?;
    assert!(html.contains("Maria Jose Perez"));
    assert!(html.contains("Fat loss"));
    for (day, exercises) in plan.schedule().iter() {
        assert!(html.contains(&format!("<strong>Day {}</strong>", day)));
        for exercise in exercises {
            assert!(html.contains(exercise.as_str()));
        }
    }

    Ok(())
}

#[tokio::test]
async fn test_member_name_cannot_escape_output_dir() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let renderer = ReportRenderer::new(ReportLayout::default(), FileAssetSource::none());
    let service = EnrollmentService::new(
        RoutineCatalog::builtin(),
        renderer,
        SessionStore::new(MemoryStorage::new()),
    );

    let mut rng = StdRng::seed_from_u64(21);
    service
        .enroll("escape", request("x/../../escaped", Goal::MuscleGain, 3), &mut rng)
        .await?;

    let download = service.download("escape", &HtmlEncoder).await?;
    assert_eq!(download.file_name, "Routine_x_______escaped.html");

    let output_dir = temp_dir.path().join("output");
    let output = LocalStorage::new(&output_dir);
    output.write_file(&download.file_name, &download.bytes).await?;

    let written = output_dir.join(&download.file_name);
    assert!(written.exists());
    assert_eq!(written.parent(), Some(output_dir.as_path()));
    assert!(!temp_dir.path().join("escaped.html").exists());
    Ok(())
}

#[tokio::test]
async fn test_download_without_enrollment() -> Result<()> {
    let renderer = ReportRenderer::new(ReportLayout::default(), FileAssetSource::none());
    let service = EnrollmentService::new(
        RoutineCatalog::builtin(),
        renderer,
        SessionStore::new(MemoryStorage::new()),
    );

    let result = service.download("never-enrolled", &HtmlEncoder).await;
    assert!(matches!(result, Err(PlannerError::SessionNotFound { .. })));

    let result = service.confirmation("never-enrolled").await;
    assert!(matches!(result, Err(PlannerError::SessionNotFound { .. })));
    Ok(())
}

#[tokio::test]
async fn test_failed_generation_stores_nothing() -> Result<()> {
    let catalog = RoutineCatalog::new(vec![Routine::new(
        "Strength only",
        "Heavy lifting",
        Goal::MuscleGain,
        ["Squats", "Deadlift", "Bench press", "Row"],
    )]);
    let storage = MemoryStorage::new();
    let renderer = ReportRenderer::new(ReportLayout::default(), FileAssetSource::none());
    let service = EnrollmentService::new(&catalog, renderer, SessionStore::new(storage.clone()));

    let mut rng = StdRng::seed_from_u64(1);
    let result = service
        .enroll("s1", request("Leo", Goal::FatLoss, 3), &mut rng)
        .await;

    assert!(matches!(
        result,
        Err(PlannerError::NoRoutineForGoal { goal: Goal::FatLoss })
    ));
    assert!(storage.is_empty().await);
    Ok(())
}

#[tokio::test]
async fn test_invalid_request_is_rejected() -> Result<()> {
    let storage = MemoryStorage::new();
    let renderer = ReportRenderer::new(ReportLayout::default(), FileAssetSource::none());
    let service = EnrollmentService::new(
        RoutineCatalog::builtin(),
        renderer,
        SessionStore::new(storage.clone()),
    );

    let mut rng = StdRng::seed_from_u64(1);
    let result = service
        .enroll("s1", request("", Goal::MuscleGain, 3), &mut rng)
        .await;
    assert!(matches!(result, Err(PlannerError::ValidationError { .. })));

    let result = service
        .enroll("s1", request("Leo", Goal::MuscleGain, 30), &mut rng)
        .await;
    assert!(matches!(result, Err(PlannerError::ValidationError { .. })));

    assert!(storage.is_empty().await);
    Ok(())
}

#[tokio::test]
async fn test_reenroll_replaces_stored_plan() -> Result<()> {
    let renderer = ReportRenderer::new(ReportLayout::default(), FileAssetSource::none());
    let service = EnrollmentService::new(
        RoutineCatalog::builtin(),
        renderer,
        SessionStore::new(MemoryStorage::new()),
    );
    let mut rng = StdRng::seed_from_u64(5);

    service
        .enroll("same", request("First", Goal::MuscleGain, 3), &mut rng)
        .await?;
    let second = service
        .enroll("same", request("Second", Goal::FatLoss, 6), &mut rng)
        .await?;

    let stored = service.confirmation("same").await?;
    assert_eq!(stored, second);
    assert_eq!(stored.member_name(), "Second");
    Ok(())
}

#[tokio::test]
async fn test_configured_service_with_missing_logo() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let toml_content = format!(
        r#"
[facility]
name = "North Gym"
logo_path = "{}/missing-logo.png"

[storage]
session_dir = "{}/sessions"
output_dir = "{}/out"
"#,
        temp_dir.path().to_string_lossy().replace('\\', "/"),
        temp_dir.path().to_string_lossy().replace('\\', "/"),
        temp_dir.path().to_string_lossy().replace('\\', "/"),
    );
    let config = PlannerConfig::from_toml_str(&toml_content)?;

    let catalog = config.load_catalog()?;
    let renderer = ReportRenderer::new(config.report_layout(), config.asset_source());
    let sessions = SessionStore::new(LocalStorage::new(config.storage.session_dir.clone()));
    let service = EnrollmentService::new(&*catalog, renderer, sessions);

    let mut rng = StdRng::seed_from_u64(12);
    let plan = service
        .enroll("json-session", request("Nora", Goal::MuscleGain, 2), &mut rng)
        .await?;

    let download = service.download("json-session", &JsonEncoder).await?;
    assert_eq!(download.file_name, "Routine_Nora.json");
    assert_eq!(download.warnings.len(), 1);

    let document: ReportDocument = serde_json::from_slice(&download.bytes)?;
    assert_eq!(document.blocks()[0].text(), "North Gym");
    assert_eq!(document.warnings().len(), 1);

    let csv = schedule_csv(&plan)?;
    assert_eq!(csv.lines().count(), 1 + plan.schedule_length() * 3);
    Ok(())
}
