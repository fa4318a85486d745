use crate::domain::model::Plan;
use crate::domain::ports::Storage;
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::validate_session_id;
use uuid::Uuid;

pub fn new_session_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Plans stored as JSON, one entry per session id.
#[derive(Debug, Clone)]
pub struct SessionStore<S: Storage> {
    storage: S,
}

impl<S: Storage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn key(session_id: &str) -> Result<String> {
        validate_session_id(session_id)?;
        Ok(format!("{}.json", session_id))
    }

    /// Replaces whatever plan the session held before.
    pub async fn save(&self, session_id: &str, plan: &Plan) -> Result<()> {
        let key = Self::key(session_id)?;
        let data = serde_json::to_vec_pretty(plan)?;
        self.storage.write_file(&key, &data).await?;
        tracing::debug!("Stored plan for session {}", session_id);
        Ok(())
    }

    pub async fn load(&self, session_id: &str) -> Result<Plan> {
        let key = Self::key(session_id)?;
        let data = match self.storage.read_file(&key).await {
            Ok(data) => data,
            Err(PlannerError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PlannerError::SessionNotFound {
                    session_id: session_id.to_string(),
                });
            }
            Err(e) => return Err(e),
        };
        Ok(serde_json::from_slice(&data)?)
    }

    pub async fn remove(&self, session_id: &str) -> Result<()> {
        let key = Self::key(session_id)?;
        self.storage.delete_file(&key).await
    }
}
