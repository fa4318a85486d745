use crate::adapters::assets::FileAssetSource;
use crate::adapters::encoders::{
    HtmlEncoder, JsonEncoder, MarkdownEncoder, OutputFormat, PdfEncoder, TextEncoder,
    DEFAULT_LINES_PER_PAGE, DEFAULT_PDF_ENGINE, DEFAULT_PDF_TIMEOUT_SECS,
};
use crate::core::catalog::RoutineCatalog;
use crate::domain::ports::DocumentEncoder;
use crate::core::renderer::{
    ReportLayout, DEFAULT_CLOSING_MESSAGE, DEFAULT_FACILITY_NAME, DEFAULT_PLAN_HEADING,
    DEFAULT_SUBTITLE,
};
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub facility: FacilityConfig,
    pub catalog: CatalogConfig,
    pub storage: StorageConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FacilityConfig {
    pub name: String,
    pub subtitle: String,
    pub plan_heading: String,
    pub closing_message: String,
    pub logo_path: Option<String>,
}

impl Default for FacilityConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_FACILITY_NAME.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            plan_heading: DEFAULT_PLAN_HEADING.to_string(),
            closing_message: DEFAULT_CLOSING_MESSAGE.to_string(),
            logo_path: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub session_dir: String,
    pub output_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_dir: "./sessions".to_string(),
            output_dir: "./output".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: OutputFormat,
    pub lines_per_page: usize,
    /// Pandoc executable for PDF output; `pandoc` on the PATH when unset.
    pub pandoc_path: Option<String>,
    pub pdf_engine: String,
    pub pdf_timeout_secs: u64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Html,
            lines_per_page: DEFAULT_LINES_PER_PAGE,
            pandoc_path: None,
            pdf_engine: DEFAULT_PDF_ENGINE.to_string(),
            pdf_timeout_secs: DEFAULT_PDF_TIMEOUT_SECS,
        }
    }
}

impl ReportConfig {
    pub fn encoder(&self, format: OutputFormat) -> Box<dyn DocumentEncoder> {
        match format {
            OutputFormat::Html => Box::new(HtmlEncoder),
            OutputFormat::Markdown => Box::new(MarkdownEncoder),
            OutputFormat::Text => Box::new(TextEncoder::new(self.lines_per_page)),
            OutputFormat::Json => Box::new(JsonEncoder),
            OutputFormat::Pdf => {
                let mut encoder = PdfEncoder::new()
                    .with_pdf_engine(self.pdf_engine.clone())
                    .with_timeout(self.pdf_timeout_secs);
                if let Some(path) = &self.pandoc_path {
                    encoder = encoder.with_pandoc_path(path.clone());
                }
                Box::new(encoder)
            }
        }
    }
}

impl PlannerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PlannerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PlannerError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("facility.name", &self.facility.name)?;
        validate_non_empty_string("facility.subtitle", &self.facility.subtitle)?;
        validate_non_empty_string("facility.plan_heading", &self.facility.plan_heading)?;

        if let Some(logo) = &self.facility.logo_path {
            validate_path("facility.logo_path", logo)?;
        }

        if let Some(catalog) = &self.catalog.path {
            validate_path("catalog.path", catalog)?;
            validate_file_extension("catalog.path", catalog, &["toml"])?;
        }

        validate_path("storage.session_dir", &self.storage.session_dir)?;
        validate_path("storage.output_dir", &self.storage.output_dir)?;
        validate_range("report.lines_per_page", self.report.lines_per_page, 20, 200)?;
        validate_non_empty_string("report.pdf_engine", &self.report.pdf_engine)?;
        validate_range("report.pdf_timeout_secs", self.report.pdf_timeout_secs, 1, 600)?;
        if let Some(pandoc) = &self.report.pandoc_path {
            validate_path("report.pandoc_path", pandoc)?;
        }

        Ok(())
    }

    pub fn report_layout(&self) -> ReportLayout {
        ReportLayout {
            facility_name: self.facility.name.clone(),
            subtitle: self.facility.subtitle.clone(),
            plan_heading: self.facility.plan_heading.clone(),
            closing_message: self.facility.closing_message.clone(),
        }
    }

    pub fn asset_source(&self) -> FileAssetSource {
        FileAssetSource::new(self.facility.logo_path.as_ref().map(PathBuf::from))
    }

    /// The configured catalog file, or the built-in catalog when none is set.
    pub fn load_catalog(&self) -> Result<Cow<'static, RoutineCatalog>> {
        let catalog = match &self.catalog.path {
            Some(path) => Cow::Owned(RoutineCatalog::from_file(path)?),
            None => Cow::Borrowed(RoutineCatalog::builtin()),
        };

        for goal in catalog.missing_goals() {
            tracing::warn!("Catalog has no routine for goal '{}'", goal);
        }

        Ok(catalog)
    }
}

impl Validate for PlannerConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
