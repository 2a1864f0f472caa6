use std::sync::Arc;

use aware_core::model::QuizSettings;
use content::StaticContent;

use crate::catalog_service::CatalogService;
use crate::certificate_service::CertificateService;
use crate::error::AppServicesError;
use crate::sessions::AssessmentService;
use crate::Clock;

/// Assembles app-facing services over the built-in content.
#[derive(Debug, Clone)]
pub struct AppServices {
    content: Arc<StaticContent>,
    assessments: Arc<AssessmentService>,
    catalog: Arc<CatalogService>,
    certificates: CertificateService,
}

impl AppServices {
    /// Build services backed by the content compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Content` if the built-in tables fail their
    /// integrity checks.
    pub fn new_builtin(
        clock: Clock,
        settings_override: Option<QuizSettings>,
    ) -> Result<Self, AppServicesError> {
        let content = Arc::new(StaticContent::load()?);
        Ok(Self::from_content(content, clock, settings_override))
    }

    #[must_use]
    pub fn from_content(
        content: Arc<StaticContent>,
        clock: Clock,
        settings_override: Option<QuizSettings>,
    ) -> Self {
        let assessments = Arc::new(
            AssessmentService::new(clock, content.clone())
                .with_settings_override(settings_override),
        );
        let catalog = Arc::new(CatalogService::new(content.clone()));
        let certificates = CertificateService::new(clock);
        Self {
            content,
            assessments,
            catalog,
            certificates,
        }
    }

    #[must_use]
    pub fn content(&self) -> Arc<StaticContent> {
        Arc::clone(&self.content)
    }

    #[must_use]
    pub fn assessments(&self) -> Arc<AssessmentService> {
        Arc::clone(&self.assessments)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn certificates(&self) -> CertificateService {
        self.certificates
    }
}
