use crate::domain::document::{Alignment, HeaderGraphic};
use crate::domain::ports::AssetSource;
use crate::utils::error::{PlannerError, Result};
use std::path::PathBuf;

const LOGO_SIZE: f32 = 60.0;

/// Header graphic looked up on the local filesystem at render time.
#[derive(Debug, Clone, Default)]
pub struct FileAssetSource {
    logo_path: Option<PathBuf>,
}

impl FileAssetSource {
    pub fn new(logo_path: Option<PathBuf>) -> Self {
        Self { logo_path }
    }

    pub fn none() -> Self {
        Self::default()
    }
}

impl AssetSource for FileAssetSource {
    fn header_graphic(&self) -> Option<Result<HeaderGraphic>> {
        let path = self.logo_path.as_ref()?;

        if !path.is_file() {
            return Some(Err(PlannerError::MissingAsset { path: path.clone() }));
        }

        Some(Ok(HeaderGraphic {
            path: path.clone(),
            width: LOGO_SIZE,
            height: LOGO_SIZE,
            alignment: Alignment::Center,
        }))
    }
}
