use crate::adapters::export::report_file_name;
use crate::app::session::SessionStore;
use crate::core::catalog::RoutineCatalog;
use crate::core::generator::PlanGenerator;
use crate::core::renderer::ReportRenderer;
use crate::domain::model::{Plan, PlanRequest};
use crate::domain::ports::{AssetSource, DocumentEncoder, Storage};
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{validate_range, Validate};
use rand::Rng;

/// Accepted range for the member's requested day count.
pub const REQUESTED_DAYS_RANGE: (u32, u32) = (1, 7);

impl Validate for PlanRequest {
    fn validate(&self) -> Result<()> {
        if self.member_name.trim().is_empty() {
            return Err(PlannerError::ValidationError {
                message: "Member name is required".to_string(),
            });
        }
        if self.member_age.trim().is_empty() {
            return Err(PlannerError::ValidationError {
                message: "Member age is required".to_string(),
            });
        }
        let (min, max) = REQUESTED_DAYS_RANGE;
        validate_range("requested_days", self.requested_days, min, max).map_err(|_| {
            PlannerError::ValidationError {
                message: format!("Requested days must be between {} and {}", min, max),
            }
        })
    }
}

/// A rendered report ready to be written or streamed.
#[derive(Debug, Clone)]
pub struct Download {
    pub file_name: String,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
    pub warnings: Vec<String>,
}

/// Enrollment, confirmation and download on top of a session store.
pub struct EnrollmentService<'c, S: Storage, A: AssetSource> {
    generator: PlanGenerator<'c>,
    renderer: ReportRenderer<A>,
    sessions: SessionStore<S>,
}

impl<'c, S: Storage, A: AssetSource> EnrollmentService<'c, S, A> {
    pub fn new(
        catalog: &'c RoutineCatalog,
        renderer: ReportRenderer<A>,
        sessions: SessionStore<S>,
    ) -> Self {
        Self {
            generator: PlanGenerator::new(catalog),
            renderer,
            sessions,
        }
    }

    pub fn sessions(&self) -> &SessionStore<S> {
        &self.sessions
    }

    /// Validates the request, generates a plan and stores it under `session_id`.
    pub async fn enroll<R: Rng>(
        &self,
        session_id: &str,
        request: PlanRequest,
        rng: &mut R,
    ) -> Result<Plan> {
        request.validate()?;

        let plan = self.generator.generate(request, rng)?;
        self.sessions.save(session_id, &plan).await?;

        tracing::info!(
            "Enrolled '{}' on '{}' for {} days",
            plan.member_name(),
            plan.routine().name,
            plan.schedule_length()
        );
        Ok(plan)
    }

    pub async fn confirmation(&self, session_id: &str) -> Result<Plan> {
        self.sessions.load(session_id).await
    }

    pub async fn download(
        &self,
        session_id: &str,
        encoder: &dyn DocumentEncoder,
    ) -> Result<Download> {
        let plan = self.sessions.load(session_id).await?;
        let document = self.renderer.render(&plan);
        let bytes = encoder.encode(&document).await?;

        Ok(Download {
            file_name: report_file_name(plan.member_name(), encoder.extension()),
            media_type: encoder.media_type(),
            bytes,
            warnings: document.warnings,
        })
    }
}
