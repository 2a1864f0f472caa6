#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_service;
pub mod certificate_service;
pub mod course_progress;
pub mod error;
pub mod sessions;

pub use aware_core::Clock;
pub use sessions as session;

pub use app_services::AppServices;
pub use catalog_service::{CatalogService, CourseOutline, LessonPage, ModuleOutline, PostListing};
pub use certificate_service::CertificateService;
pub use course_progress::{CourseProgress, ModuleProgress, bar_percent};
pub use error::{AppServicesError, ProgressError, SessionError};

pub use sessions::{
    AssessmentService, QuizAction, QuizAttempt, QuizState, SelfCheckAction, SelfCheckAttempt,
    SelfCheckState, SessionProgress, TickOutcome,
};
