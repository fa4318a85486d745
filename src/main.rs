use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use vitalforce::adapters::export::{plan_summary, report_file_name, schedule_csv};
use vitalforce::app::session::new_session_id;
use vitalforce::config::{Command, DownloadArgs, EnrollArgs};
use vitalforce::domain::ports::Storage;
use vitalforce::utils::error::ErrorSeverity;
use vitalforce::utils::{logger, validation::Validate};
use vitalforce::{
    CliConfig, EnrollmentService, FileAssetSource, Goal, LocalStorage, Plan, PlannerConfig,
    ReportRenderer, RoutineCatalog, SessionStore,
};

type Service<'c> = EnrollmentService<'c, LocalStorage, FileAssetSource>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI arguments: {:?}", cli);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            PlannerConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?
        }
        None => PlannerConfig::default(),
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if let Err(e) = run(cli.command, &config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(command: Command, config: &PlannerConfig) -> vitalforce::Result<()> {
    let catalog = config.load_catalog()?;
    let renderer = ReportRenderer::new(config.report_layout(), config.asset_source());
    let sessions = SessionStore::new(LocalStorage::new(config.storage.session_dir.clone()));
    let service = EnrollmentService::new(&*catalog, renderer, sessions);

    match command {
        Command::Routines { goal } => {
            let goal = goal.map(|g| g.parse::<Goal>()).transpose()?;
            list_routines(&catalog, goal);
            Ok(())
        }
        Command::Enroll(args) => enroll(&service, args).await,
        Command::Show { session } => {
            let plan = service.confirmation(&session).await?;
            print_plan(&plan);
            Ok(())
        }
        Command::Download(args) => download(&service, config, args).await,
    }
}

fn list_routines(catalog: &RoutineCatalog, goal: Option<Goal>) {
    let routines = catalog
        .routines()
        .iter()
        .filter(|r| goal.map_or(true, |g| r.goal == g));

    for routine in routines {
        println!("{} [{}]", routine.name, routine.goal.display_name());
        println!("  {}", routine.description);
        println!("  Exercises: {}", routine.exercises.join(", "));
    }
}

async fn enroll(service: &Service<'_>, args: EnrollArgs) -> vitalforce::Result<()> {
    let request = args.to_request()?;
    let session_id = args.session.clone().unwrap_or_else(new_session_id);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let plan = service.enroll(&session_id, request, &mut rng).await?;

    println!("✅ Plan created!");
    print_plan(&plan);
    println!();
    println!("Session: {}", session_id);
    println!("Download it with: vitalforce download --session {}", session_id);
    Ok(())
}

async fn download(
    service: &Service<'_>,
    config: &PlannerConfig,
    args: DownloadArgs,
) -> vitalforce::Result<()> {
    let format = args.format.unwrap_or(config.report.format);
    let encoder = config.report.encoder(format);
    let output_dir = args.output.unwrap_or_else(|| config.storage.output_dir.clone());
    let output = LocalStorage::new(output_dir);

    let download = service.download(&args.session, encoder.as_ref()).await?;
    for warning in &download.warnings {
        eprintln!("⚠️  {}", warning);
    }

    output.write_file(&download.file_name, &download.bytes).await?;
    println!(
        "📁 Report saved to: {}",
        output.base_path().join(&download.file_name).display()
    );

    if args.csv {
        let plan = service.confirmation(&args.session).await?;
        let file_name = report_file_name(plan.member_name(), "csv");
        output.write_file(&file_name, schedule_csv(&plan)?.as_bytes()).await?;
        println!("📁 Schedule saved to: {}", output.base_path().join(&file_name).display());
    }

    Ok(())
}

fn print_plan(plan: &Plan) {
    println!("{}", plan_summary(plan));
}
